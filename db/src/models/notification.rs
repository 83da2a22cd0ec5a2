use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::prelude::Expr;
use serde::Serialize;

/// A broadcast notification. `course_id = None` targets everyone.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[serde(rename_all = "camelCase")]
#[sea_orm(table_name = "notifications")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub notification_id: String,
    pub title: String,
    pub message: String,
    pub course_id: Option<String>,
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
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create<C: ConnectionTrait>(
        db: &C,
        notification_id: &str,
        title: &str,
        message: &str,
        course_id: Option<&str>,
    ) -> Result<Model, DbErr> {
        ActiveModel {
            notification_id: Set(notification_id.to_owned()),
            title: Set(title.to_owned()),
            message: Set(message.to_owned()),
            course_id: Set(course_id.map(str::to_owned)),
            created_at: Set(Utc::now()),
        }
        .insert(db)
        .await
    }

    pub async fn update<C: ConnectionTrait>(
        db: &C,
        notification_id: &str,
        title: &str,
        message: &str,
        course_id: Option<&str>,
    ) -> Result<Option<Model>, DbErr> {
        let res = Entity::update_many()
            .col_expr(Column::Title, Expr::value(title))
            .col_expr(Column::Message, Expr::value(message))
            .col_expr(Column::CourseId, Expr::value(course_id.map(str::to_owned)))
            .filter(Column::NotificationId.eq(notification_id))
            .exec(db)
            .await?;

        if res.rows_affected == 0 {
            return Ok(None);
        }
        Entity::find_by_id(notification_id).one(db).await
    }

    pub async fn delete<C: ConnectionTrait>(db: &C, notification_id: &str) -> Result<bool, DbErr> {
        let res = Entity::delete_by_id(notification_id).exec(db).await?;
        Ok(res.rows_affected > 0)
    }
}
