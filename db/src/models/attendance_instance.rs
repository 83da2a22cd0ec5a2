use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// One class session for which attendance is collected.
///
/// `token` holds the signed credential issued at creation and is cleared
/// when the instance is closed, so a closed instance can never accept the
/// token again even before `expires_at` passes.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[serde(rename_all = "camelCase")]
#[sea_orm(table_name = "attendance_instances")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub instance_id: String,
    pub course_id: String,
    pub date: NaiveDate,
    pub class_type: ClassType,
    /// `0.0` for online sessions.
    pub latitude: f64,
    pub longitude: f64,
    #[serde(skip_serializing)]
    pub token: Option<String>,
    pub expires_at: DateTime<Utc>,
    pub is_closed: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Display, EnumString, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ClassType {
    /// Location-gated.
    #[sea_orm(string_value = "physical")]
    Physical,
    /// Location spot-checked.
    #[sea_orm(string_value = "online")]
    Online,
}

/// Lifecycle of an instance. `Closed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum InstanceState {
    Open,
    Expired,
    Closed,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::course::Entity",
        from = "Column::CourseId",
        to = "super::course::Column::CourseId",
        on_delete = "Cascade"
    )]
    Course,
    #[sea_orm(has_many = "super::attendance_record::Entity")]
    Records,
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl Related<super::attendance_record::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Records.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Values needed to insert a new instance.
#[derive(Debug, Clone)]
pub struct NewInstance {
    pub instance_id: String,
    pub course_id: String,
    pub date: NaiveDate,
    pub class_type: ClassType,
    pub latitude: f64,
    pub longitude: f64,
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

impl Model {
    pub async fn create<C: ConnectionTrait>(
        db: &C,
        new: NewInstance,
        now: DateTime<Utc>,
    ) -> Result<Model, DbErr> {
        ActiveModel {
            instance_id: Set(new.instance_id),
            course_id: Set(new.course_id),
            date: Set(new.date),
            class_type: Set(new.class_type),
            latitude: Set(new.latitude),
            longitude: Set(new.longitude),
            token: Set(Some(new.token)),
            expires_at: Set(new.expires_at),
            is_closed: Set(false),
            created_at: Set(now),
        }
        .insert(db)
        .await
    }

    pub fn state_at(&self, now: DateTime<Utc>) -> InstanceState {
        if self.is_closed {
            InstanceState::Closed
        } else if now > self.expires_at {
            InstanceState::Expired
        } else {
            InstanceState::Open
        }
    }

    /// Display code printed in the QR image.
    pub fn display_code(&self) -> String {
        format!("ATT-{}", self.instance_id)
    }
}
