use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[serde(rename_all = "camelCase")]
#[sea_orm(table_name = "feedback")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub feedback_id: String,
    /// Always stored; hidden from readers when `is_anonymous` is set.
    pub student_id: Option<String>,
    pub content: String,
    pub is_anonymous: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::student::Entity",
        from = "Column::StudentId",
        to = "super::student::Column::StudentId"
    )]
    Student,
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create<C: ConnectionTrait>(
        db: &C,
        feedback_id: &str,
        student_id: Option<&str>,
        content: &str,
        is_anonymous: bool,
    ) -> Result<Model, DbErr> {
        ActiveModel {
            feedback_id: Set(feedback_id.to_owned()),
            student_id: Set(student_id.map(str::to_owned)),
            content: Set(content.to_owned()),
            is_anonymous: Set(is_anonymous),
            created_at: Set(Utc::now()),
        }
        .insert(db)
        .await
    }

    /// Copy safe to hand to readers.
    pub fn redacted(mut self) -> Self {
        if self.is_anonymous {
            self.student_id = None;
        }
        self
    }

    pub async fn delete<C: ConnectionTrait>(db: &C, feedback_id: &str) -> Result<bool, DbErr> {
        let res = Entity::delete_by_id(feedback_id).exec(db).await?;
        Ok(res.rows_affected > 0)
    }
}
