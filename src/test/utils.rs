#[cfg(test)]
pub mod test_db {
    use crate::database::init_schema;
    use crate::db::{
        create_course, create_grade, create_schedule, create_student, create_teacher,
    };
    use crate::error::AppError;
    use rocket::local::asynchronous::Client;
    use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
    use sqlx::{Pool, Sqlite};
    use std::collections::HashMap;
    use std::str::FromStr;
    use std::sync::Once;

    static INIT: Once = Once::new();

    #[derive(Default)]
    pub struct TestDbBuilder {
        students: Vec<TestStudent>,
        teachers: Vec<TestTeacher>,
        courses: Vec<TestCourse>,
        schedules: Vec<TestSchedule>,
        grades: Vec<TestGrade>,
    }

    pub struct TestStudent {
        pub name: String,
        pub age: i64,
        pub group: String,
    }

    pub struct TestTeacher {
        pub name: String,
        pub subject: String,
    }

    pub struct TestCourse {
        pub name: String,
        pub description: Option<String>,
    }

    pub struct TestSchedule {
        pub course_name: String,
        pub teacher_name: String,
        pub time: String,
    }

    pub struct TestGrade {
        pub student_name: String,
        pub course_name: String,
        pub grade: String,
    }

    impl TestDbBuilder {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn student(mut self, name: &str, age: i64, group: &str) -> Self {
            self.students.push(TestStudent {
                name: name.to_string(),
                age,
                group: group.to_string(),
            });
            self
        }

        pub fn teacher(mut self, name: &str, subject: &str) -> Self {
            self.teachers.push(TestTeacher {
                name: name.to_string(),
                subject: subject.to_string(),
            });
            self
        }

        pub fn course(mut self, name: &str, description: Option<&str>) -> Self {
            self.courses.push(TestCourse {
                name: name.to_string(),
                description: description.map(String::from),
            });
            self
        }

        pub fn schedule(mut self, course_name: &str, teacher_name: &str, time: &str) -> Self {
            self.schedules.push(TestSchedule {
                course_name: course_name.to_string(),
                teacher_name: teacher_name.to_string(),
                time: time.to_string(),
            });
            self
        }

        pub fn grade(mut self, student_name: &str, course_name: &str, grade: &str) -> Self {
            self.grades.push(TestGrade {
                student_name: student_name.to_string(),
                course_name: course_name.to_string(),
                grade: grade.to_string(),
            });
            self
        }

        pub async fn build(self) -> Result<TestDb, AppError> {
            INIT.call_once(|| {
                let _ = tracing_subscriber::fmt().with_test_writer().try_init();
            });

            // A single connection keeps every query on the same in-memory
            // database; extra pooled connections would each open their own.
            // Foreign keys are declared but not enforced (see DESIGN.md):
            // sqlx enables PRAGMA foreign_keys by default, so opt back out
            // to match the storage default the schema relies on.
            let options =
                SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(false);
            let pool = SqlitePoolOptions::new()
                .max_connections(1)
                .connect_with(options)
                .await?;

            init_schema(&pool).await?;

            let mut student_id_map: HashMap<String, i64> = HashMap::new();
            let mut teacher_id_map: HashMap<String, i64> = HashMap::new();
            let mut course_id_map: HashMap<String, i64> = HashMap::new();

            for student in &self.students {
                let id = create_student(&pool, &student.name, student.age, &student.group).await?;
                student_id_map.insert(student.name.clone(), id);
            }

            for teacher in &self.teachers {
                let id = create_teacher(&pool, &teacher.name, &teacher.subject).await?;
                teacher_id_map.insert(teacher.name.clone(), id);
            }

            for course in &self.courses {
                let id = create_course(&pool, &course.name, course.description.as_deref()).await?;
                course_id_map.insert(course.name.clone(), id);
            }

            for schedule in &self.schedules {
                let course_id = course_id_map[&schedule.course_name];
                let teacher_id = teacher_id_map[&schedule.teacher_name];
                create_schedule(&pool, course_id, teacher_id, &schedule.time).await?;
            }

            for grade in &self.grades {
                let student_id = student_id_map[&grade.student_name];
                let course_id = course_id_map[&grade.course_name];
                create_grade(&pool, student_id, course_id, &grade.grade).await?;
            }

            Ok(TestDb {
                pool,
                student_id_map,
                teacher_id_map,
                course_id_map,
            })
        }
    }

    pub struct TestDb {
        pub pool: Pool<Sqlite>,
        pub student_id_map: HashMap<String, i64>,
        pub teacher_id_map: HashMap<String, i64>,
        pub course_id_map: HashMap<String, i64>,
    }

    impl TestDb {
        pub fn student_id(&self, name: &str) -> Option<i64> {
            self.student_id_map.get(name).copied()
        }

        pub fn teacher_id(&self, name: &str) -> Option<i64> {
            self.teacher_id_map.get(name).copied()
        }

        pub fn course_id(&self, name: &str) -> Option<i64> {
            self.course_id_map.get(name).copied()
        }
    }

    /// Seed data used by most route tests: three students across two groups,
    /// two teachers, two courses, one schedule, three grades.
    pub async fn create_standard_test_db() -> TestDb {
        TestDbBuilder::new()
            .student("Ann", 20, "A1")
            .student("Bob", 21, "B2")
            .student("Zoe", 19, "A1")
            .teacher("Ivanova", "Mathematics")
            .teacher("Petrov", "History")
            .course("Math", Some("Linear algebra and calculus"))
            .course("History", None)
            .schedule("Math", "Ivanova", "Mon 10:00")
            .grade("Ann", "Math", "A")
            .grade("Bob", "Math", "B")
            .grade("Ann", "History", "A")
            .build()
            .await
            .expect("Failed to build test database")
    }

    pub async fn setup_test_client(test_db: TestDb) -> (Client, TestDb) {
        let rocket = crate::init_rocket(test_db.pool.clone()).await;
        let client = Client::tracked(rocket)
            .await
            .expect("Failed to build test client");

        (client, test_db)
    }
}
