use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use serde::Serialize;

/// Join table between groups and students.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[serde(rename_all = "camelCase")]
#[sea_orm(table_name = "group_members")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub group_id: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub student_id: String,
    pub is_leader: bool,
    pub joined_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::group::Entity",
        from = "Column::GroupId",
        to = "super::group::Column::GroupId",
        on_delete = "Cascade"
    )]
    Group,
    #[sea_orm(
        belongs_to = "super::student::Entity",
        from = "Column::StudentId",
        to = "super::student::Column::StudentId",
        on_delete = "Cascade"
    )]
    Student,
}

impl Related<super::group::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Group.def()
    }
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn add<C: ConnectionTrait>(
        db: &C,
        group_id: &str,
        student_id: &str,
        is_leader: bool,
    ) -> Result<Model, DbErr> {
        ActiveModel {
            group_id: Set(group_id.to_owned()),
            student_id: Set(student_id.to_owned()),
            is_leader: Set(is_leader),
            joined_at: Set(Utc::now()),
        }
        .insert(db)
        .await
    }

    pub async fn remove<C: ConnectionTrait>(
        db: &C,
        group_id: &str,
        student_id: &str,
    ) -> Result<bool, DbErr> {
        let res = Entity::delete_by_id((group_id.to_owned(), student_id.to_owned()))
            .exec(db)
            .await?;
        Ok(res.rows_affected > 0)
    }
}
