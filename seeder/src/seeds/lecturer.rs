use crate::seed::Seeder;
use db::models::lecturer::Model;
use fake::{Fake, faker::internet::en::SafeEmail, faker::name::en::Name};
use sea_orm::{DatabaseConnection, DbErr};
use services::id_generator::{IdPrefix, next_id};

pub struct LecturerSeeder;

#[async_trait::async_trait]
impl Seeder for LecturerSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), DbErr> {
        for _ in 0..3 {
            let id = next_id(db, IdPrefix::Lecturer).await?;
            let name: String = Name().fake();
            let email: String = SafeEmail().fake();
            Model::create(db, &id, &format!("Dr. {name}"), &email, None).await?;
        }
        Ok(())
    }
}
