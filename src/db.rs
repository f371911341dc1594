use sqlx::{Pool, Sqlite};
use tracing::{info, instrument};

use crate::error::AppError;
use crate::models::{
    Course, Grade, GradeListing, GroupTotal, Schedule, ScheduleListing, Student, StudentCourse,
    Teacher,
};

// Students

#[instrument(skip(pool))]
pub async fn get_all_students(pool: &Pool<Sqlite>) -> Result<Vec<Student>, AppError> {
    info!("Getting all students");
    let rows = sqlx::query_as::<_, Student>(r#"SELECT id, name, age, "group" FROM students"#)
        .fetch_all(pool)
        .await?;

    Ok(rows)
}

#[instrument(skip(pool))]
pub async fn get_students_sorted_by_name(pool: &Pool<Sqlite>) -> Result<Vec<Student>, AppError> {
    info!("Getting students sorted by name");
    let rows = sqlx::query_as::<_, Student>(
        r#"SELECT id, name, age, "group" FROM students ORDER BY name ASC"#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

#[instrument(skip(pool))]
pub async fn get_students_by_group(
    pool: &Pool<Sqlite>,
    group: &str,
) -> Result<Vec<Student>, AppError> {
    info!("Filtering students by group");
    let rows = sqlx::query_as::<_, Student>(
        r#"SELECT id, name, age, "group" FROM students WHERE "group" = ?"#,
    )
    .bind(group)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

#[instrument(skip(pool))]
pub async fn search_students_by_name(
    pool: &Pool<Sqlite>,
    keyword: &str,
) -> Result<Vec<Student>, AppError> {
    info!("Searching students by name");
    let rows = sqlx::query_as::<_, Student>(
        r#"SELECT id, name, age, "group" FROM students WHERE name LIKE '%' || ? || '%'"#,
    )
    .bind(keyword)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

#[instrument(skip(pool))]
pub async fn get_student(pool: &Pool<Sqlite>, id: i64) -> Result<Student, AppError> {
    info!("Fetching student by ID");
    let row = sqlx::query_as::<_, Student>(
        r#"SELECT id, name, age, "group" FROM students WHERE id = ?"#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    match row {
        Some(student) => Ok(student),
        _ => Err(AppError::NotFound(format!(
            "Student with id {} not found",
            id
        ))),
    }
}

#[instrument(skip(pool))]
pub async fn create_student(
    pool: &Pool<Sqlite>,
    name: &str,
    age: i64,
    group: &str,
) -> Result<i64, AppError> {
    info!("Creating student");
    let res = sqlx::query(r#"INSERT INTO students (name, age, "group") VALUES (?, ?, ?)"#)
        .bind(name)
        .bind(age)
        .bind(group)
        .execute(pool)
        .await?;

    Ok(res.last_insert_rowid())
}

#[instrument(skip(pool))]
pub async fn update_student(
    pool: &Pool<Sqlite>,
    id: i64,
    name: &str,
    age: i64,
    group: &str,
) -> Result<(), AppError> {
    info!("Updating student");
    let res = sqlx::query(r#"UPDATE students SET name = ?, age = ?, "group" = ? WHERE id = ?"#)
        .bind(name)
        .bind(age)
        .bind(group)
        .bind(id)
        .execute(pool)
        .await?;

    if res.rows_affected() == 0 {
        return Err(AppError::NotFound(format!(
            "Student with id {} not found",
            id
        )));
    }

    Ok(())
}

#[instrument(skip(pool))]
pub async fn delete_student(pool: &Pool<Sqlite>, id: i64) -> Result<(), AppError> {
    info!("Deleting student");
    let res = sqlx::query("DELETE FROM students WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if res.rows_affected() == 0 {
        return Err(AppError::NotFound(format!(
            "Student with id {} not found",
            id
        )));
    }

    Ok(())
}

#[instrument(skip(pool))]
pub async fn count_students(pool: &Pool<Sqlite>) -> Result<i64, AppError> {
    info!("Counting students");
    let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM students")
        .fetch_one(pool)
        .await?;

    Ok(total)
}

#[instrument(skip(pool))]
pub async fn count_students_by_group(pool: &Pool<Sqlite>) -> Result<Vec<GroupTotal>, AppError> {
    info!("Counting students per group");
    let rows = sqlx::query_as::<_, GroupTotal>(
        r#"SELECT "group", COUNT(*) AS total FROM students GROUP BY "group""#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// One pair per grade row; a student graded twice in the same course shows
/// up twice.
#[instrument(skip(pool))]
pub async fn get_student_course_pairs(
    pool: &Pool<Sqlite>,
) -> Result<Vec<StudentCourse>, AppError> {
    info!("Joining students to courses through grades");
    let rows = sqlx::query_as::<_, StudentCourse>(
        "SELECT s.name AS student_name, c.name AS course_name
         FROM grades g
         JOIN students s ON s.id = g.student_id
         JOIN courses c ON c.id = g.course_id",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

// Teachers

#[instrument(skip(pool))]
pub async fn get_all_teachers(pool: &Pool<Sqlite>) -> Result<Vec<Teacher>, AppError> {
    info!("Getting all teachers");
    let rows = sqlx::query_as::<_, Teacher>("SELECT id, name, subject FROM teachers")
        .fetch_all(pool)
        .await?;

    Ok(rows)
}

#[instrument(skip(pool))]
pub async fn get_teacher(pool: &Pool<Sqlite>, id: i64) -> Result<Teacher, AppError> {
    info!("Fetching teacher by ID");
    let row = sqlx::query_as::<_, Teacher>("SELECT id, name, subject FROM teachers WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    match row {
        Some(teacher) => Ok(teacher),
        _ => Err(AppError::NotFound(format!(
            "Teacher with id {} not found",
            id
        ))),
    }
}

#[instrument(skip(pool))]
pub async fn create_teacher(
    pool: &Pool<Sqlite>,
    name: &str,
    subject: &str,
) -> Result<i64, AppError> {
    info!("Creating teacher");
    let res = sqlx::query("INSERT INTO teachers (name, subject) VALUES (?, ?)")
        .bind(name)
        .bind(subject)
        .execute(pool)
        .await?;

    Ok(res.last_insert_rowid())
}

#[instrument(skip(pool))]
pub async fn update_teacher(
    pool: &Pool<Sqlite>,
    id: i64,
    name: &str,
    subject: &str,
) -> Result<(), AppError> {
    info!("Updating teacher");
    let res = sqlx::query("UPDATE teachers SET name = ?, subject = ? WHERE id = ?")
        .bind(name)
        .bind(subject)
        .bind(id)
        .execute(pool)
        .await?;

    if res.rows_affected() == 0 {
        return Err(AppError::NotFound(format!(
            "Teacher with id {} not found",
            id
        )));
    }

    Ok(())
}

#[instrument(skip(pool))]
pub async fn delete_teacher(pool: &Pool<Sqlite>, id: i64) -> Result<(), AppError> {
    info!("Deleting teacher");
    let res = sqlx::query("DELETE FROM teachers WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if res.rows_affected() == 0 {
        return Err(AppError::NotFound(format!(
            "Teacher with id {} not found",
            id
        )));
    }

    Ok(())
}

// Courses

#[instrument(skip(pool))]
pub async fn get_all_courses(pool: &Pool<Sqlite>) -> Result<Vec<Course>, AppError> {
    info!("Getting all courses");
    let rows = sqlx::query_as::<_, Course>("SELECT id, name, description FROM courses")
        .fetch_all(pool)
        .await?;

    Ok(rows)
}

#[instrument(skip(pool))]
pub async fn get_course(pool: &Pool<Sqlite>, id: i64) -> Result<Course, AppError> {
    info!("Fetching course by ID");
    let row = sqlx::query_as::<_, Course>("SELECT id, name, description FROM courses WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    match row {
        Some(course) => Ok(course),
        _ => Err(AppError::NotFound(format!(
            "Course with id {} not found",
            id
        ))),
    }
}

#[instrument(skip(pool))]
pub async fn create_course(
    pool: &Pool<Sqlite>,
    name: &str,
    description: Option<&str>,
) -> Result<i64, AppError> {
    info!("Creating course");
    let res = sqlx::query("INSERT INTO courses (name, description) VALUES (?, ?)")
        .bind(name)
        .bind(description)
        .execute(pool)
        .await?;

    Ok(res.last_insert_rowid())
}

#[instrument(skip(pool))]
pub async fn update_course(
    pool: &Pool<Sqlite>,
    id: i64,
    name: &str,
    description: Option<&str>,
) -> Result<(), AppError> {
    info!("Updating course");
    let res = sqlx::query("UPDATE courses SET name = ?, description = ? WHERE id = ?")
        .bind(name)
        .bind(description)
        .bind(id)
        .execute(pool)
        .await?;

    if res.rows_affected() == 0 {
        return Err(AppError::NotFound(format!(
            "Course with id {} not found",
            id
        )));
    }

    Ok(())
}

#[instrument(skip(pool))]
pub async fn delete_course(pool: &Pool<Sqlite>, id: i64) -> Result<(), AppError> {
    info!("Deleting course");
    let res = sqlx::query("DELETE FROM courses WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if res.rows_affected() == 0 {
        return Err(AppError::NotFound(format!(
            "Course with id {} not found",
            id
        )));
    }

    Ok(())
}

// Schedules

/// List view joins course and teacher names at the point of use instead of
/// navigating per row. Left joins keep schedule rows visible even when the
/// referenced course or teacher has since been deleted.
#[instrument(skip(pool))]
pub async fn get_all_schedules(pool: &Pool<Sqlite>) -> Result<Vec<ScheduleListing>, AppError> {
    info!("Getting all schedules");
    let rows = sqlx::query_as::<_, ScheduleListing>(
        "SELECT sch.id, sch.course_id, sch.teacher_id, sch.time,
                c.name AS course_name, t.name AS teacher_name
         FROM schedules sch
         LEFT JOIN courses c ON c.id = sch.course_id
         LEFT JOIN teachers t ON t.id = sch.teacher_id",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

#[instrument(skip(pool))]
pub async fn get_schedule(pool: &Pool<Sqlite>, id: i64) -> Result<Schedule, AppError> {
    info!("Fetching schedule by ID");
    let row = sqlx::query_as::<_, Schedule>(
        "SELECT id, course_id, teacher_id, time FROM schedules WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    match row {
        Some(schedule) => Ok(schedule),
        _ => Err(AppError::NotFound(format!(
            "Schedule with id {} not found",
            id
        ))),
    }
}

#[instrument(skip(pool))]
pub async fn create_schedule(
    pool: &Pool<Sqlite>,
    course_id: i64,
    teacher_id: i64,
    time: &str,
) -> Result<i64, AppError> {
    info!("Creating schedule");
    let res = sqlx::query("INSERT INTO schedules (course_id, teacher_id, time) VALUES (?, ?, ?)")
        .bind(course_id)
        .bind(teacher_id)
        .bind(time)
        .execute(pool)
        .await?;

    Ok(res.last_insert_rowid())
}

#[instrument(skip(pool))]
pub async fn update_schedule(
    pool: &Pool<Sqlite>,
    id: i64,
    course_id: i64,
    teacher_id: i64,
    time: &str,
) -> Result<(), AppError> {
    info!("Updating schedule");
    let res =
        sqlx::query("UPDATE schedules SET course_id = ?, teacher_id = ?, time = ? WHERE id = ?")
            .bind(course_id)
            .bind(teacher_id)
            .bind(time)
            .bind(id)
            .execute(pool)
            .await?;

    if res.rows_affected() == 0 {
        return Err(AppError::NotFound(format!(
            "Schedule with id {} not found",
            id
        )));
    }

    Ok(())
}

#[instrument(skip(pool))]
pub async fn delete_schedule(pool: &Pool<Sqlite>, id: i64) -> Result<(), AppError> {
    info!("Deleting schedule");
    let res = sqlx::query("DELETE FROM schedules WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if res.rows_affected() == 0 {
        return Err(AppError::NotFound(format!(
            "Schedule with id {} not found",
            id
        )));
    }

    Ok(())
}

// Grades

#[instrument(skip(pool))]
pub async fn get_all_grades(pool: &Pool<Sqlite>) -> Result<Vec<GradeListing>, AppError> {
    info!("Getting all grades");
    let rows = sqlx::query_as::<_, GradeListing>(
        "SELECT g.id, g.student_id, g.course_id, g.grade,
                s.name AS student_name, c.name AS course_name
         FROM grades g
         LEFT JOIN students s ON s.id = g.student_id
         LEFT JOIN courses c ON c.id = g.course_id",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

#[instrument(skip(pool))]
pub async fn get_grade(pool: &Pool<Sqlite>, id: i64) -> Result<Grade, AppError> {
    info!("Fetching grade by ID");
    let row = sqlx::query_as::<_, Grade>(
        "SELECT id, student_id, course_id, grade FROM grades WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    match row {
        Some(grade) => Ok(grade),
        _ => Err(AppError::NotFound(format!(
            "Grade with id {} not found",
            id
        ))),
    }
}

#[instrument(skip(pool))]
pub async fn create_grade(
    pool: &Pool<Sqlite>,
    student_id: i64,
    course_id: i64,
    grade: &str,
) -> Result<i64, AppError> {
    info!("Creating grade");
    let res = sqlx::query("INSERT INTO grades (student_id, course_id, grade) VALUES (?, ?, ?)")
        .bind(student_id)
        .bind(course_id)
        .bind(grade)
        .execute(pool)
        .await?;

    Ok(res.last_insert_rowid())
}

#[instrument(skip(pool))]
pub async fn update_grade(
    pool: &Pool<Sqlite>,
    id: i64,
    student_id: i64,
    course_id: i64,
    grade: &str,
) -> Result<(), AppError> {
    info!("Updating grade");
    let res = sqlx::query("UPDATE grades SET student_id = ?, course_id = ?, grade = ? WHERE id = ?")
        .bind(student_id)
        .bind(course_id)
        .bind(grade)
        .bind(id)
        .execute(pool)
        .await?;

    if res.rows_affected() == 0 {
        return Err(AppError::NotFound(format!(
            "Grade with id {} not found",
            id
        )));
    }

    Ok(())
}

#[instrument(skip(pool))]
pub async fn delete_grade(pool: &Pool<Sqlite>, id: i64) -> Result<(), AppError> {
    info!("Deleting grade");
    let res = sqlx::query("DELETE FROM grades WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if res.rows_affected() == 0 {
        return Err(AppError::NotFound(format!(
            "Grade with id {} not found",
            id
        )));
    }

    Ok(())
}
