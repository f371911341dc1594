use rocket::FromForm;
use rocket::State;
use rocket::form::Form;
use rocket::response::Redirect;
use rocket_dyn_templates::{Template, context};
use sqlx::{Pool, Sqlite};

use crate::db;
use crate::error::AppError;

#[derive(FromForm)]
pub struct CourseForm {
    name: String,
    description: String,
}

#[get("/courses")]
pub async fn courses(db: &State<Pool<Sqlite>>) -> Result<Template, AppError> {
    let courses = db::get_all_courses(db).await?;

    Ok(Template::render(
        "courses/list",
        context! {
            title: "Courses",
            courses: courses,
        },
    ))
}

#[get("/courses/add")]
pub async fn add_course_form() -> Template {
    Template::render(
        "courses/add",
        context! {
            title: "Add course",
        },
    )
}

#[post("/courses/add", data = "<form>")]
pub async fn add_course(
    form: Form<CourseForm>,
    db: &State<Pool<Sqlite>>,
) -> Result<Redirect, AppError> {
    db::create_course(db, &form.name, Some(&form.description)).await?;

    Ok(Redirect::to(uri!(courses)))
}

#[get("/courses/update/<id>")]
pub async fn update_course_form(id: i64, db: &State<Pool<Sqlite>>) -> Result<Template, AppError> {
    let course = db::get_course(db, id).await?;

    Ok(Template::render(
        "courses/update",
        context! {
            title: "Update course",
            course: course,
        },
    ))
}

#[post("/courses/update/<id>", data = "<form>")]
pub async fn update_course(
    id: i64,
    form: Form<CourseForm>,
    db: &State<Pool<Sqlite>>,
) -> Result<Redirect, AppError> {
    db::update_course(db, id, &form.name, Some(&form.description)).await?;

    Ok(Redirect::to(uri!(courses)))
}

#[get("/courses/delete/<id>")]
pub async fn delete_course(id: i64, db: &State<Pool<Sqlite>>) -> Result<Redirect, AppError> {
    db::delete_course(db, id).await?;

    Ok(Redirect::to(uri!(courses)))
}
