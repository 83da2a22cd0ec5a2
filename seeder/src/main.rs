use crate::seed::{Seeder, run_seeder};
use crate::seeds::{
    course::CourseSeeder, event::EventSeeder, lecturer::LecturerSeeder, student::StudentSeeder,
};
use migration::Migrator;
use sea_orm_migration::MigratorTrait;
use std::env;
use std::process::ExitCode;

mod seed;
mod seeds;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let Ok(db_path) = env::var("DATABASE_PATH") else {
        eprintln!("DATABASE_PATH must be set");
        return ExitCode::FAILURE;
    };
    let db = match db::connect(&db_path).await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("Failed to connect to {db_path}: {e}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = Migrator::up(&db, None).await {
        eprintln!("Failed to run migrations: {e}");
        return ExitCode::FAILURE;
    }

    for (seeder, name) in [
        (Box::new(LecturerSeeder) as Box<dyn Seeder + Send + Sync>, "Lecturer"),
        (Box::new(CourseSeeder), "Course"),
        (Box::new(StudentSeeder), "Student"),
        (Box::new(EventSeeder), "Event"),
    ] {
        if let Err(e) = run_seeder(&*seeder, name, &db).await {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
