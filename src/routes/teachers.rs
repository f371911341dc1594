use rocket::FromForm;
use rocket::State;
use rocket::form::Form;
use rocket::response::Redirect;
use rocket_dyn_templates::{Template, context};
use sqlx::{Pool, Sqlite};

use crate::db;
use crate::error::AppError;

#[derive(FromForm)]
pub struct TeacherForm {
    name: String,
    subject: String,
}

#[get("/teachers")]
pub async fn teachers(db: &State<Pool<Sqlite>>) -> Result<Template, AppError> {
    let teachers = db::get_all_teachers(db).await?;

    Ok(Template::render(
        "teachers/list",
        context! {
            title: "Teachers",
            teachers: teachers,
        },
    ))
}

#[get("/teachers/add")]
pub async fn add_teacher_form() -> Template {
    Template::render(
        "teachers/add",
        context! {
            title: "Add teacher",
        },
    )
}

#[post("/teachers/add", data = "<form>")]
pub async fn add_teacher(
    form: Form<TeacherForm>,
    db: &State<Pool<Sqlite>>,
) -> Result<Redirect, AppError> {
    db::create_teacher(db, &form.name, &form.subject).await?;

    Ok(Redirect::to(uri!(teachers)))
}

#[get("/teachers/update/<id>")]
pub async fn update_teacher_form(
    id: i64,
    db: &State<Pool<Sqlite>>,
) -> Result<Template, AppError> {
    let teacher = db::get_teacher(db, id).await?;

    Ok(Template::render(
        "teachers/update",
        context! {
            title: "Update teacher",
            teacher: teacher,
        },
    ))
}

#[post("/teachers/update/<id>", data = "<form>")]
pub async fn update_teacher(
    id: i64,
    form: Form<TeacherForm>,
    db: &State<Pool<Sqlite>>,
) -> Result<Redirect, AppError> {
    db::update_teacher(db, id, &form.name, &form.subject).await?;

    Ok(Redirect::to(uri!(teachers)))
}

#[get("/teachers/delete/<id>")]
pub async fn delete_teacher(id: i64, db: &State<Pool<Sqlite>>) -> Result<Redirect, AppError> {
    db::delete_teacher(db, id).await?;

    Ok(Redirect::to(uri!(teachers)))
}
