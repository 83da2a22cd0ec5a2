use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::prelude::Expr;
use serde::Serialize;

pub const DEFAULT_CREDITS: i32 = 3;
pub const DEFAULT_SEMESTER: &str = "Fall 2024";

/// Represents a course in the `courses` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[serde(rename_all = "camelCase")]
#[sea_orm(table_name = "courses")]
pub struct Model {
    /// Caller-supplied course identifier.
    #[sea_orm(primary_key, auto_increment = false)]
    pub course_id: String,
    pub course_name: String,
    pub course_code: String,
    pub lecturer_id: String,
    pub description: Option<String>,
    pub credits: i32,
    pub semester: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::lecturer::Entity",
        from = "Column::LecturerId",
        to = "super::lecturer::Column::LecturerId"
    )]
    Lecturer,
    #[sea_orm(has_many = "super::student::Entity")]
    Students,
}

impl Related<super::lecturer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Lecturer.def()
    }
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Students.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Editable course fields, shared by create and update.
#[derive(Debug, Clone)]
pub struct CourseFields {
    pub course_name: String,
    pub course_code: String,
    pub lecturer_id: String,
    pub description: Option<String>,
    pub credits: Option<i32>,
    pub semester: Option<String>,
}

impl Model {
    pub async fn create<C: ConnectionTrait>(
        db: &C,
        course_id: &str,
        fields: CourseFields,
    ) -> Result<Model, DbErr> {
        ActiveModel {
            course_id: Set(course_id.to_owned()),
            course_name: Set(fields.course_name),
            course_code: Set(fields.course_code),
            lecturer_id: Set(fields.lecturer_id),
            description: Set(fields.description),
            credits: Set(fields.credits.unwrap_or(DEFAULT_CREDITS)),
            semester: Set(fields.semester.unwrap_or_else(|| DEFAULT_SEMESTER.to_owned())),
            created_at: Set(Utc::now()),
        }
        .insert(db)
        .await
    }

    pub async fn update<C: ConnectionTrait>(
        db: &C,
        course_id: &str,
        fields: CourseFields,
    ) -> Result<Option<Model>, DbErr> {
        let res = Entity::update_many()
            .col_expr(Column::CourseName, Expr::value(fields.course_name))
            .col_expr(Column::CourseCode, Expr::value(fields.course_code))
            .col_expr(Column::LecturerId, Expr::value(fields.lecturer_id))
            .col_expr(Column::Description, Expr::value(fields.description))
            .col_expr(
                Column::Credits,
                Expr::value(fields.credits.unwrap_or(DEFAULT_CREDITS)),
            )
            .col_expr(
                Column::Semester,
                Expr::value(fields.semester.unwrap_or_else(|| DEFAULT_SEMESTER.to_owned())),
            )
            .filter(Column::CourseId.eq(course_id))
            .exec(db)
            .await?;

        if res.rows_affected == 0 {
            return Ok(None);
        }
        Entity::find_by_id(course_id).one(db).await
    }

    pub async fn delete<C: ConnectionTrait>(db: &C, course_id: &str) -> Result<bool, DbErr> {
        let res = Entity::delete_by_id(course_id).exec(db).await?;
        Ok(res.rows_affected > 0)
    }
}
