use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::prelude::Expr;
use serde::Serialize;

/// A study group. General groups are open to the whole course.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[serde(rename_all = "camelCase")]
#[sea_orm(table_name = "groups")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub group_id: String,
    pub name: String,
    pub description: Option<String>,
    pub course_id: Option<String>,
    pub is_general: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::course::Entity",
        from = "Column::CourseId",
        to = "super::course::Column::CourseId"
    )]
    Course,
    #[sea_orm(has_many = "super::group_member::Entity")]
    Members,
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl Related<super::group_member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Members.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Clone)]
pub struct GroupFields {
    pub name: String,
    pub description: Option<String>,
    pub course_id: Option<String>,
    pub is_general: bool,
}

impl Model {
    pub async fn create<C: ConnectionTrait>(
        db: &C,
        group_id: &str,
        fields: GroupFields,
    ) -> Result<Model, DbErr> {
        ActiveModel {
            group_id: Set(group_id.to_owned()),
            name: Set(fields.name),
            description: Set(fields.description),
            course_id: Set(fields.course_id),
            is_general: Set(fields.is_general),
            created_at: Set(Utc::now()),
        }
        .insert(db)
        .await
    }

    pub async fn update<C: ConnectionTrait>(
        db: &C,
        group_id: &str,
        fields: GroupFields,
    ) -> Result<Option<Model>, DbErr> {
        let res = Entity::update_many()
            .col_expr(Column::Name, Expr::value(fields.name))
            .col_expr(Column::Description, Expr::value(fields.description))
            .col_expr(Column::CourseId, Expr::value(fields.course_id))
            .col_expr(Column::IsGeneral, Expr::value(fields.is_general))
            .filter(Column::GroupId.eq(group_id))
            .exec(db)
            .await?;

        if res.rows_affected == 0 {
            return Ok(None);
        }
        Entity::find_by_id(group_id).one(db).await
    }

    pub async fn delete<C: ConnectionTrait>(db: &C, group_id: &str) -> Result<bool, DbErr> {
        let res = Entity::delete_by_id(group_id).exec(db).await?;
        Ok(res.rows_affected > 0)
    }
}
