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
pub struct ScheduleForm {
    course_id: i64,
    teacher_id: i64,
    time: String,
}

#[get("/schedules")]
pub async fn schedules(db: &State<Pool<Sqlite>>) -> Result<Template, AppError> {
    let schedules = db::get_all_schedules(db).await?;

    let context = json!({
        "title": "Schedules",
        "schedules": schedules,
    });

    Ok(Template::render("schedules/list", context))
}

// Reference pickers need the full course and teacher lists on every render.
#[get("/schedules/add")]
pub async fn add_schedule_form(db: &State<Pool<Sqlite>>) -> Result<Template, AppError> {
    let courses = db::get_all_courses(db).await?;
    let teachers = db::get_all_teachers(db).await?;

    let context = json!({
        "title": "Add schedule",
        "courses": courses,
        "teachers": teachers,
    });

    Ok(Template::render("schedules/add", context))
}

#[post("/schedules/add", data = "<form>")]
pub async fn add_schedule(
    form: Form<ScheduleForm>,
    db: &State<Pool<Sqlite>>,
) -> Result<Redirect, AppError> {
    db::create_schedule(db, form.course_id, form.teacher_id, &form.time).await?;

    Ok(Redirect::to(uri!(schedules)))
}

#[get("/schedules/update/<id>")]
pub async fn update_schedule_form(
    id: i64,
    db: &State<Pool<Sqlite>>,
) -> Result<Template, AppError> {
    let schedule = db::get_schedule(db, id).await?;
    let courses = db::get_all_courses(db).await?;
    let teachers = db::get_all_teachers(db).await?;

    let context = json!({
        "title": "Update schedule",
        "schedule": schedule,
        "courses": courses,
        "teachers": teachers,
    });

    Ok(Template::render("schedules/update", context))
}

#[post("/schedules/update/<id>", data = "<form>")]
pub async fn update_schedule(
    id: i64,
    form: Form<ScheduleForm>,
    db: &State<Pool<Sqlite>>,
) -> Result<Redirect, AppError> {
    db::update_schedule(db, id, form.course_id, form.teacher_id, &form.time).await?;

    Ok(Redirect::to(uri!(schedules)))
}

#[get("/schedules/delete/<id>")]
pub async fn delete_schedule(id: i64, db: &State<Pool<Sqlite>>) -> Result<Redirect, AppError> {
    db::delete_schedule(db, id).await?;

    Ok(Redirect::to(uri!(schedules)))
}
