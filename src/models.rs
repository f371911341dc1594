use serde::Serialize;

#[derive(sqlx::FromRow, Serialize, Clone, Debug)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub age: i64,
    pub group: String,
}

#[derive(sqlx::FromRow, Serialize, Clone, Debug)]
pub struct Teacher {
    pub id: i64,
    pub name: String,
    pub subject: String,
}

#[derive(sqlx::FromRow, Serialize, Clone, Debug)]
pub struct Course {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

#[derive(sqlx::FromRow, Serialize, Clone, Debug)]
pub struct Schedule {
    pub id: i64,
    pub course_id: i64,
    pub teacher_id: i64,
    pub time: String,
}

#[derive(sqlx::FromRow, Serialize, Clone, Debug)]
pub struct Grade {
    pub id: i64,
    pub student_id: i64,
    pub course_id: i64,
    pub grade: String,
}

/// Schedule row joined with its course and teacher names for the list view.
/// Names are nullable because nothing prevents a referenced row from having
/// been deleted out from under the schedule.
#[derive(sqlx::FromRow, Serialize, Clone, Debug)]
pub struct ScheduleListing {
    pub id: i64,
    pub course_id: i64,
    pub teacher_id: i64,
    pub time: String,
    pub course_name: Option<String>,
    pub teacher_name: Option<String>,
}

/// Grade row joined with its student and course names for the list view.
#[derive(sqlx::FromRow, Serialize, Clone, Debug)]
pub struct GradeListing {
    pub id: i64,
    pub student_id: i64,
    pub course_id: i64,
    pub grade: String,
    pub student_name: Option<String>,
    pub course_name: Option<String>,
}

/// One row of the per-group student count aggregate.
#[derive(sqlx::FromRow, Serialize, Clone, Debug)]
pub struct GroupTotal {
    pub group: String,
    pub total: i64,
}

/// One (student name, course name) pair from the grades join. One row per
/// grade, so a student graded twice in a course appears twice.
#[derive(sqlx::FromRow, Serialize, Clone, Debug)]
pub struct StudentCourse {
    pub student_name: String,
    pub course_name: String,
}
