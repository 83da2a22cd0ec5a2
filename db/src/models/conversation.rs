use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[serde(rename_all = "camelCase")]
#[sea_orm(table_name = "conversations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub conversation_id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub conversation_type: ConversationType,
    /// Set only for `course` conversations.
    pub course_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Display, EnumString, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ConversationType {
    #[sea_orm(string_value = "direct")]
    Direct,
    #[sea_orm(string_value = "group")]
    Group,
    #[sea_orm(string_value = "course")]
    Course,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::conversation_participant::Entity")]
    Participants,
    #[sea_orm(has_many = "super::message::Entity")]
    Messages,
}

impl Related<super::conversation_participant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Participants.def()
    }
}

impl Related<super::message::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Messages.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create<C: ConnectionTrait>(
        db: &C,
        conversation_id: &str,
        title: &str,
        conversation_type: ConversationType,
        course_id: Option<&str>,
    ) -> Result<Model, DbErr> {
        ActiveModel {
            conversation_id: Set(conversation_id.to_owned()),
            title: Set(title.to_owned()),
            conversation_type: Set(conversation_type),
            course_id: Set(course_id.map(str::to_owned)),
            created_at: Set(Utc::now()),
        }
        .insert(db)
        .await
    }

    /// The single `course` conversation for `course_id`, if one exists.
    pub async fn find_for_course<C: ConnectionTrait>(
        db: &C,
        course_id: &str,
    ) -> Result<Option<Model>, DbErr> {
        Entity::find()
            .filter(Column::ConversationType.eq(ConversationType::Course))
            .filter(Column::CourseId.eq(course_id))
            .one(db)
            .await
    }
}
