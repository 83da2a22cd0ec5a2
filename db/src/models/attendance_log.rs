use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use serde::Serialize;

/// Append-only record of a successful scan.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[serde(rename_all = "camelCase")]
#[sea_orm(table_name = "attendance_logs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: String,
    pub instance_id: String,
    pub location_checked: bool,
    pub location_valid: bool,
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
        location_checked: bool,
        location_valid: bool,
        details: &str,
    ) -> Result<Model, DbErr> {
        ActiveModel {
            student_id: Set(student_id.to_owned()),
            instance_id: Set(instance_id.to_owned()),
            location_checked: Set(location_checked),
            location_valid: Set(location_valid),
            details: Set(details.to_owned()),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(db)
        .await
    }
}
