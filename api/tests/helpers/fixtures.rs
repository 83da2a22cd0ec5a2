use db::models::{
    course::{self, CourseFields},
    lecturer,
    student::{self, StudentFields, StudentStatus},
};
use sea_orm::DatabaseConnection;

pub const LECTURER_ID: &str = "LEC-T1";
pub const COURSE_ID: &str = "CSC101";
pub const OTHER_COURSE_ID: &str = "MTH201";

/// One lecturer teaching two courses.
pub async fn seed_courses(db: &DatabaseConnection) {
    lecturer::Model::create(db, LECTURER_ID, "Dr. Ada Eze", "ada@uni.test", None)
        .await
        .unwrap();
    for (id, name, code) in [
        (COURSE_ID, "Introduction to Computing", "CSC 101"),
        (OTHER_COURSE_ID, "Linear Algebra", "MTH 201"),
    ] {
        course::Model::create(
            db,
            id,
            CourseFields {
                course_name: name.into(),
                course_code: code.into(),
                lecturer_id: LECTURER_ID.into(),
                description: None,
                credits: None,
                semester: None,
            },
        )
        .await
        .unwrap();
    }
}

pub async fn seed_student(
    db: &DatabaseConnection,
    student_id: &str,
    course_id: Option<&str>,
    status: StudentStatus,
) -> student::Model {
    student::Model::create(
        db,
        student_id,
        StudentFields {
            name: format!("Student {student_id}"),
            email: format!("{}@uni.test", student_id.to_lowercase()),
            phone: "08000000000".into(),
            course_id: course_id.map(str::to_owned),
            status: Some(status),
        },
        "not-a-real-hash",
    )
    .await
    .unwrap()
}
