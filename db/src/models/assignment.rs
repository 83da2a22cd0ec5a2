use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::prelude::Expr;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[serde(rename_all = "camelCase")]
#[sea_orm(table_name = "assignments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub assignment_id: String,
    pub title: String,
    pub description: Option<String>,
    pub course_id: String,
    pub deadline: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
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
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Clone)]
pub struct AssignmentFields {
    pub title: String,
    pub description: Option<String>,
    pub course_id: String,
    pub deadline: DateTime<Utc>,
}

impl Model {
    pub async fn create<C: ConnectionTrait>(
        db: &C,
        assignment_id: &str,
        fields: AssignmentFields,
    ) -> Result<Model, DbErr> {
        ActiveModel {
            assignment_id: Set(assignment_id.to_owned()),
            title: Set(fields.title),
            description: Set(fields.description),
            course_id: Set(fields.course_id),
            deadline: Set(fields.deadline),
            created_at: Set(Utc::now()),
        }
        .insert(db)
        .await
    }

    pub async fn update<C: ConnectionTrait>(
        db: &C,
        assignment_id: &str,
        fields: AssignmentFields,
    ) -> Result<Option<Model>, DbErr> {
        let res = Entity::update_many()
            .col_expr(Column::Title, Expr::value(fields.title))
            .col_expr(Column::Description, Expr::value(fields.description))
            .col_expr(Column::CourseId, Expr::value(fields.course_id))
            .col_expr(Column::Deadline, Expr::value(fields.deadline))
            .filter(Column::AssignmentId.eq(assignment_id))
            .exec(db)
            .await?;

        if res.rows_affected == 0 {
            return Ok(None);
        }
        Entity::find_by_id(assignment_id).one(db).await
    }

    pub async fn delete<C: ConnectionTrait>(db: &C, assignment_id: &str) -> Result<bool, DbErr> {
        let res = Entity::delete_by_id(assignment_id).exec(db).await?;
        Ok(res.rows_affected > 0)
    }
}
