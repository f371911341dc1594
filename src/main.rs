#[macro_use]
extern crate rocket;

mod database;
mod db;
mod env;
mod error;
mod models;
mod routes;
mod telemetry;
#[cfg(test)]
mod test;

use rocket::{Build, Rocket};
use rocket_dyn_templates::Template;
use sqlx::SqlitePool;
use telemetry::TelemetryFairing;
use telemetry::init_tracing;
use tracing::{error, info};

#[launch]
async fn rocket() -> _ {
    init_tracing();

    if let Err(e) = env::load_environment() {
        error!("Failed to load environment files: {}", e);
    }

    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:school.db?mode=rwc".to_string());

    let pool = SqlitePool::connect(&database_url)
        .await
        .expect("Failed to connect to SQLite database");

    info!("Applying database schema...");
    match database::init_schema(&pool).await {
        Ok(_) => info!("Schema ready"),
        Err(e) => {
            error!("Failed to apply schema: {}", e);
            panic!("Database schema init failed: {}", e);
        }
    }

    init_rocket(pool).await
}

pub async fn init_rocket(pool: SqlitePool) -> Rocket<Build> {
    info!("Starting school records");

    rocket::build()
        .manage(pool)
        .mount(
            "/",
            routes![
                routes::index,
                routes::students::students,
                routes::students::sorted_students,
                routes::students::filter_students_form,
                routes::students::filter_students,
                routes::students::search_students_form,
                routes::students::search_students,
                routes::students::add_student_form,
                routes::students::add_student,
                routes::students::update_student_form,
                routes::students::update_student,
                routes::students::delete_student,
                routes::students::total_count,
                routes::students::group_totals,
                routes::students::students_courses,
                routes::teachers::teachers,
                routes::teachers::add_teacher_form,
                routes::teachers::add_teacher,
                routes::teachers::update_teacher_form,
                routes::teachers::update_teacher,
                routes::teachers::delete_teacher,
                routes::courses::courses,
                routes::courses::add_course_form,
                routes::courses::add_course,
                routes::courses::update_course_form,
                routes::courses::update_course,
                routes::courses::delete_course,
                routes::schedules::schedules,
                routes::schedules::add_schedule_form,
                routes::schedules::add_schedule,
                routes::schedules::update_schedule_form,
                routes::schedules::update_schedule,
                routes::schedules::delete_schedule,
                routes::grades::grades,
                routes::grades::add_grade_form,
                routes::grades::add_grade,
                routes::grades::update_grade_form,
                routes::grades::update_grade,
                routes::grades::delete_grade,
            ],
        )
        .attach(Template::fairing())
        .attach(TelemetryFairing)
}
