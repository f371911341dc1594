use rocket::FromForm;
use rocket::State;
use rocket::form::Form;
use rocket::response::Redirect;
use rocket_dyn_templates::{Template, context};
use sqlx::{Pool, Sqlite};

use crate::db;
use crate::error::AppError;

#[derive(FromForm)]
pub struct StudentForm {
    name: String,
    age: i64,
    group: String,
}

#[derive(FromForm)]
pub struct GroupFilterForm {
    group: String,
}

#[derive(FromForm)]
pub struct NameSearchForm {
    keyword: String,
}

#[get("/students")]
pub async fn students(db: &State<Pool<Sqlite>>) -> Result<Template, AppError> {
    let students = db::get_all_students(db).await?;

    Ok(Template::render(
        "students/list",
        context! {
            title: "Students",
            students: students,
        },
    ))
}

#[get("/students/sorted")]
pub async fn sorted_students(db: &State<Pool<Sqlite>>) -> Result<Template, AppError> {
    let students = db::get_students_sorted_by_name(db).await?;

    Ok(Template::render(
        "students/list",
        context! {
            title: "Students by name",
            students: students,
        },
    ))
}

#[get("/students/filter")]
pub async fn filter_students_form() -> Template {
    Template::render(
        "students/filter",
        context! {
            title: "Filter students",
        },
    )
}

#[post("/students/filter", data = "<form>")]
pub async fn filter_students(
    form: Form<GroupFilterForm>,
    db: &State<Pool<Sqlite>>,
) -> Result<Template, AppError> {
    let students = db::get_students_by_group(db, &form.group).await?;

    Ok(Template::render(
        "students/list",
        context! {
            title: format!("Students in group {}", form.group),
            students: students,
        },
    ))
}

#[get("/students/search")]
pub async fn search_students_form() -> Template {
    Template::render(
        "students/search",
        context! {
            title: "Search students",
        },
    )
}

#[post("/students/search", data = "<form>")]
pub async fn search_students(
    form: Form<NameSearchForm>,
    db: &State<Pool<Sqlite>>,
) -> Result<Template, AppError> {
    let students = db::search_students_by_name(db, &form.keyword).await?;

    Ok(Template::render(
        "students/list",
        context! {
            title: format!("Students matching '{}'", form.keyword),
            students: students,
        },
    ))
}

#[get("/students/add")]
pub async fn add_student_form() -> Template {
    Template::render(
        "students/add",
        context! {
            title: "Add student",
        },
    )
}

#[post("/students/add", data = "<form>")]
pub async fn add_student(
    form: Form<StudentForm>,
    db: &State<Pool<Sqlite>>,
) -> Result<Redirect, AppError> {
    db::create_student(db, &form.name, form.age, &form.group).await?;

    Ok(Redirect::to(uri!(students)))
}

#[get("/students/update/<id>")]
pub async fn update_student_form(
    id: i64,
    db: &State<Pool<Sqlite>>,
) -> Result<Template, AppError> {
    let student = db::get_student(db, id).await?;

    Ok(Template::render(
        "students/update",
        context! {
            title: "Update student",
            student: student,
        },
    ))
}

#[post("/students/update/<id>", data = "<form>")]
pub async fn update_student(
    id: i64,
    form: Form<StudentForm>,
    db: &State<Pool<Sqlite>>,
) -> Result<Redirect, AppError> {
    db::update_student(db, id, &form.name, form.age, &form.group).await?;

    Ok(Redirect::to(uri!(students)))
}

#[get("/students/delete/<id>")]
pub async fn delete_student(id: i64, db: &State<Pool<Sqlite>>) -> Result<Redirect, AppError> {
    db::delete_student(db, id).await?;

    Ok(Redirect::to(uri!(students)))
}

#[get("/students/total_count")]
pub async fn total_count(db: &State<Pool<Sqlite>>) -> Result<Template, AppError> {
    let total = db::count_students(db).await?;

    Ok(Template::render(
        "students/total_count",
        context! {
            title: "Student count",
            total: total,
        },
    ))
}

#[get("/students/group_totals")]
pub async fn group_totals(db: &State<Pool<Sqlite>>) -> Result<Template, AppError> {
    let totals = db::count_students_by_group(db).await?;

    Ok(Template::render(
        "students/group_totals",
        context! {
            title: "Students per group",
            totals: totals,
        },
    ))
}

#[get("/students_courses")]
pub async fn students_courses(db: &State<Pool<Sqlite>>) -> Result<Template, AppError> {
    let pairs = db::get_student_course_pairs(db).await?;

    Ok(Template::render(
        "students/students_courses",
        context! {
            title: "Students and their courses",
            pairs: pairs,
        },
    ))
}
