use rocket::http::Status;
use rocket::response::status::Custom;
use thiserror::Error;
use tracing::{error, warn};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(sqlx::Error),

    #[error("Constraint violation: {0}")]
    Constraint(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<sqlx::Error> for AppError {
    fn from(error: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &error {
            if db_err.is_foreign_key_violation()
                || db_err.is_unique_violation()
                || db_err.is_check_violation()
            {
                return AppError::Constraint(db_err.to_string());
            }
        }
        AppError::Database(error)
    }
}

impl AppError {
    pub fn log(&self, ctx: &str) {
        let message = self.to_string();
        match self {
            AppError::Database(err) => {
                error!(error = %message, context = %ctx, db_error = %err, "Database error")
            }
            AppError::Constraint(msg) => {
                warn!(message = %msg, context = %ctx, "Constraint violation")
            }
            AppError::NotFound(msg) => warn!(message = %msg, context = %ctx, "Not found"),
            AppError::Internal(msg) => {
                error!(message = %msg, context = %ctx, "Internal server error")
            }
        }
    }

    pub fn status_code(&self) -> Status {
        match self {
            AppError::Database(_) => Status::InternalServerError,
            AppError::Constraint(_) => Status::InternalServerError,
            AppError::NotFound(_) => Status::NotFound,
            AppError::Internal(_) => Status::InternalServerError,
        }
    }

    /// The body rendered to the client. Write failures surface as a fixed
    /// plain string rather than a full error page; no retry is attempted.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Database(_) => "Error committing changes".to_string(),
            AppError::Constraint(_) => "Error committing changes".to_string(),
            AppError::NotFound(msg) => msg.clone(),
            AppError::Internal(_) => "Internal server error".to_string(),
        }
    }
}

impl<'r> rocket::response::Responder<'r, 'static> for AppError {
    fn respond_to(self, req: &'r rocket::Request<'_>) -> rocket::response::Result<'static> {
        self.log(&format!("Request to {} {}", req.method(), req.uri()));
        Custom(self.status_code(), self.user_message()).respond_to(req)
    }
}

impl From<AppError> for Status {
    fn from(err: AppError) -> Self {
        err.log("Error conversion into Status");
        err.status_code()
    }
}
