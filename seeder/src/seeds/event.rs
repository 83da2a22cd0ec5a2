use super::course::COURSES;
use crate::seed::Seeder;
use chrono::{Duration, Utc};
use db::models::event::{EventFields, Model};
use sea_orm::{DatabaseConnection, DbErr};
use services::id_generator::{IdPrefix, next_id};

pub struct EventSeeder;

#[async_trait::async_trait]
impl Seeder for EventSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), DbErr> {
        let venues = ["Main hall", "LT 1", "LT 2", "Science block", "Online"];
        let now = Utc::now();

        let mut events = vec![(
            "Orientation".to_owned(),
            "Welcome session for new students".to_owned(),
            "social",
            None,
        )];
        for (course_id, name, code) in COURSES {
            events.push((
                format!("{code} midterm"),
                format!("Midterm assessment for {name}"),
                "exam",
                Some(course_id),
            ));
            events.push((
                format!("{code} revision"),
                format!("Revision class ahead of the {code} midterm"),
                "lecture",
                Some(course_id),
            ));
        }

        for (title, description, kind, course_id) in events {
            let start = now
                + Duration::days(fastrand::i64(1..60))
                + Duration::hours(fastrand::i64(8..16));
            let id = next_id(db, IdPrefix::Event).await?;
            Model::create(
                db,
                &id,
                EventFields {
                    title,
                    description,
                    start_date: start,
                    end_date: start + Duration::hours(2),
                    location: venues[fastrand::usize(..venues.len())].to_owned(),
                    event_type: Some(kind.to_owned()),
                    course_id: course_id.map(str::to_owned),
                },
            )
            .await?;
        }
        Ok(())
    }
}
