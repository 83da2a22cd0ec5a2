use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::prelude::Expr;
use serde::Serialize;

pub const DEFAULT_EVENT_TYPE: &str = "general";

/// A calendar event, optionally scoped to one course.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[serde(rename_all = "camelCase")]
#[sea_orm(table_name = "events")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub event_id: String,
    pub title: String,
    pub description: String,
    pub start_date: DateTime<Utc>,
    /// Never earlier than `start_date`.
    pub end_date: DateTime<Utc>,
    pub location: String,
    /// Free-form tag such as `lecture`, `exam` or `social`.
    #[serde(rename = "type")]
    pub event_type: String,
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

#[derive(Debug, Clone)]
pub struct EventFields {
    pub title: String,
    pub description: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub location: String,
    pub event_type: Option<String>,
    pub course_id: Option<String>,
}

impl Model {
    pub async fn create<C: ConnectionTrait>(
        db: &C,
        event_id: &str,
        fields: EventFields,
    ) -> Result<Model, DbErr> {
        ActiveModel {
            event_id: Set(event_id.to_owned()),
            title: Set(fields.title),
            description: Set(fields.description),
            start_date: Set(fields.start_date),
            end_date: Set(fields.end_date),
            location: Set(fields.location),
            event_type: Set(fields
                .event_type
                .unwrap_or_else(|| DEFAULT_EVENT_TYPE.to_owned())),
            course_id: Set(fields.course_id),
            created_at: Set(Utc::now()),
        }
        .insert(db)
        .await
    }

    pub async fn update<C: ConnectionTrait>(
        db: &C,
        event_id: &str,
        fields: EventFields,
    ) -> Result<Option<Model>, DbErr> {
        let res = Entity::update_many()
            .col_expr(Column::Title, Expr::value(fields.title))
            .col_expr(Column::Description, Expr::value(fields.description))
            .col_expr(Column::StartDate, Expr::value(fields.start_date))
            .col_expr(Column::EndDate, Expr::value(fields.end_date))
            .col_expr(Column::Location, Expr::value(fields.location))
            .col_expr(
                Column::EventType,
                Expr::value(
                    fields
                        .event_type
                        .unwrap_or_else(|| DEFAULT_EVENT_TYPE.to_owned()),
                ),
            )
            .col_expr(Column::CourseId, Expr::value(fields.course_id))
            .filter(Column::EventId.eq(event_id))
            .exec(db)
            .await?;

        if res.rows_affected == 0 {
            return Ok(None);
        }
        Entity::find_by_id(event_id).one(db).await
    }

    pub async fn delete<C: ConnectionTrait>(db: &C, event_id: &str) -> Result<bool, DbErr> {
        let res = Entity::delete_by_id(event_id).exec(db).await?;
        Ok(res.rows_affected > 0)
    }
}
