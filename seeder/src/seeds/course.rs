use crate::seed::Seeder;
use db::models::{
    course::{CourseFields, Model},
    lecturer,
};
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};

pub struct CourseSeeder;

pub const COURSES: [(&str, &str, &str); 4] = [
    ("CSC101", "Introduction to Computing", "CSC 101"),
    ("CSC205", "Data Structures", "CSC 205"),
    ("MTH201", "Linear Algebra", "MTH 201"),
    ("PHY103", "Mechanics", "PHY 103"),
];

#[async_trait::async_trait]
impl Seeder for CourseSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), DbErr> {
        let lecturers = lecturer::Entity::find()
            .order_by_asc(lecturer::Column::LecturerId)
            .all(db)
            .await?;
        if lecturers.is_empty() {
            return Err(DbErr::Custom("no lecturers to assign courses to".into()));
        }
        let credit_options = [2, 3, 4];

        for (i, (course_id, name, code)) in COURSES.into_iter().enumerate() {
            Model::create(
                db,
                course_id,
                CourseFields {
                    course_name: name.to_owned(),
                    course_code: code.to_owned(),
                    lecturer_id: lecturers[i % lecturers.len()].lecturer_id.clone(),
                    description: Some(format!("{name} for first and second year students")),
                    credits: Some(credit_options[fastrand::usize(..credit_options.len())]),
                    semester: None,
                },
            )
            .await?;
        }
        Ok(())
    }
}
