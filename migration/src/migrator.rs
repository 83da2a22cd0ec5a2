use sea_orm_migration::prelude::*;

use crate::migrations;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(migrations::m202406010001_create_id_sequences::Migration),
            Box::new(migrations::m202406010002_create_lecturers::Migration),
            Box::new(migrations::m202406010003_create_courses::Migration),
            Box::new(migrations::m202406010004_create_students::Migration),
            Box::new(migrations::m202406010005_create_groups::Migration),
            Box::new(migrations::m202406010006_create_assignments::Migration),
            Box::new(migrations::m202406010007_create_events::Migration),
            Box::new(migrations::m202406010008_create_notifications::Migration),
            Box::new(migrations::m202406010009_create_feedback::Migration),
            Box::new(migrations::m202406010010_create_chat::Migration),
            Box::new(migrations::m202406010011_create_attendance::Migration),
            Box::new(migrations::m202406010012_create_attendance_logs::Migration),
        ]
    }
}
