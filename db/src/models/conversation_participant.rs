use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[serde(rename_all = "camelCase")]
#[sea_orm(table_name = "conversation_participants")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub conversation_id: String,
    /// A student or lecturer id; not constrained to either table.
    #[sea_orm(primary_key, auto_increment = false)]
    pub participant_id: String,
    pub joined_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::conversation::Entity",
        from = "Column::ConversationId",
        to = "super::conversation::Column::ConversationId",
        on_delete = "Cascade"
    )]
    Conversation,
}

impl Related<super::conversation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Conversation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn add<C: ConnectionTrait>(
        db: &C,
        conversation_id: &str,
        participant_id: &str,
    ) -> Result<Model, DbErr> {
        ActiveModel {
            conversation_id: Set(conversation_id.to_owned()),
            participant_id: Set(participant_id.to_owned()),
            joined_at: Set(Utc::now()),
        }
        .insert(db)
        .await
    }
}
