use super::course::COURSES;
use crate::seed::Seeder;
use db::models::student::{Model, StudentFields, StudentStatus};
use fake::{
    Fake,
    faker::{internet::en::SafeEmail, name::en::Name, phone_number::en::PhoneNumber},
};
use sea_orm::{DatabaseConnection, DbErr};
use services::password::hash_password;

pub struct StudentSeeder;

/// Shared by every seeded student.
const DEFAULT_PASSWORD: &str = "password123";

#[async_trait::async_trait]
impl Seeder for StudentSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), DbErr> {
        let password_hash = hash_password(DEFAULT_PASSWORD).map_err(DbErr::Custom)?;

        for n in 1..=20 {
            let (course_id, _, _) = COURSES[n % COURSES.len()];
            // Roughly one in ten is inactive.
            let status = if fastrand::u8(..10) == 0 {
                StudentStatus::Inactive
            } else {
                StudentStatus::Active
            };

            Model::create(
                db,
                &format!("STU-2024-{n:03}"),
                StudentFields {
                    name: Name().fake(),
                    email: SafeEmail().fake(),
                    phone: PhoneNumber().fake(),
                    course_id: Some(course_id.to_owned()),
                    status: Some(status),
                },
                &password_hash,
            )
            .await?;
        }
        Ok(())
    }
}
