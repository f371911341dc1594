pub mod courses;
pub mod grades;
pub mod schedules;
pub mod students;
pub mod teachers;

use rocket_dyn_templates::{Template, context};

#[get("/")]
pub async fn index() -> Template {
    Template::render(
        "index",
        context! {
            title: "School Records",
        },
    )
}
