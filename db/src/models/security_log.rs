use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use serde::Serialize;

/// Append-only record of a rejected attendance scan.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[serde(rename_all = "camelCase")]
#[sea_orm(table_name = "security_logs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: String,
    pub instance_id: String,
    /// e.g. `LOCATION_REQUIRED`, `LOCATION_OUT_OF_RANGE`, `RANDOM_CHECK_FAILED`.
    pub event_type: String,
    pub details: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn append<C: ConnectionTrait>(
        db: &C,
        student_id: &str,
        instance_id: &str,
        event_type: &str,
        details: &str,
    ) -> Result<Model, DbErr> {
        ActiveModel {
            student_id: Set(student_id.to_owned()),
            instance_id: Set(instance_id.to_owned()),
            event_type: Set(event_type.to_owned()),
            details: Set(details.to_owned()),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(db)
        .await
    }
}
