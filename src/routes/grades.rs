use rocket::FromForm;
use rocket::State;
use rocket::form::Form;
use rocket::response::Redirect;
use rocket_dyn_templates::Template;
use serde_json::json;
use sqlx::{Pool, Sqlite};

use crate::db;
use crate::error::AppError;

#[derive(FromForm)]
pub struct GradeForm {
    student_id: i64,
    course_id: i64,
    grade: String,
}

#[get("/grades")]
pub async fn grades(db: &State<Pool<Sqlite>>) -> Result<Template, AppError> {
    let grades = db::get_all_grades(db).await?;

    let context = json!({
        "title": "Grades",
        "grades": grades,
    });

    Ok(Template::render("grades/list", context))
}

// Reference pickers need the full student and course lists on every render.
#[get("/grades/add")]
pub async fn add_grade_form(db: &State<Pool<Sqlite>>) -> Result<Template, AppError> {
    let students = db::get_all_students(db).await?;
    let courses = db::get_all_courses(db).await?;

    let context = json!({
        "title": "Add grade",
        "students": students,
        "courses": courses,
    });

    Ok(Template::render("grades/add", context))
}

#[post("/grades/add", data = "<form>")]
pub async fn add_grade(
    form: Form<GradeForm>,
    db: &State<Pool<Sqlite>>,
) -> Result<Redirect, AppError> {
    db::create_grade(db, form.student_id, form.course_id, &form.grade).await?;

    Ok(Redirect::to(uri!(grades)))
}

#[get("/grades/update/<id>")]
pub async fn update_grade_form(id: i64, db: &State<Pool<Sqlite>>) -> Result<Template, AppError> {
    let grade = db::get_grade(db, id).await?;
    let students = db::get_all_students(db).await?;
    let courses = db::get_all_courses(db).await?;

    let context = json!({
        "title": "Update grade",
        "grade": grade,
        "students": students,
        "courses": courses,
    });

    Ok(Template::render("grades/update", context))
}

#[post("/grades/update/<id>", data = "<form>")]
pub async fn update_grade(
    id: i64,
    form: Form<GradeForm>,
    db: &State<Pool<Sqlite>>,
) -> Result<Redirect, AppError> {
    db::update_grade(db, id, form.student_id, form.course_id, &form.grade).await?;

    Ok(Redirect::to(uri!(grades)))
}

#[get("/grades/delete/<id>")]
pub async fn delete_grade(id: i64, db: &State<Pool<Sqlite>>) -> Result<Redirect, AppError> {
    db::delete_grade(db, id).await?;

    Ok(Redirect::to(uri!(grades)))
}
