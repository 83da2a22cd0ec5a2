use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::{QueryOrder, prelude::Expr};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Represents a student in the `students` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[serde(rename_all = "camelCase")]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub student_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Argon2 hash. Never leaves the server.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Course the student is enrolled in, if any.
    pub course_id: Option<String>,
    pub status: StudentStatus,
    pub created_at: DateTime<Utc>,
}

/// Only active students are enrolled into new attendance instances.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Display, EnumString, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum StudentStatus {
    #[sea_orm(string_value = "active")]
    Active,
    #[sea_orm(string_value = "inactive")]
    Inactive,
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
    GroupMembers,
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl Related<super::group_member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GroupMembers.def()
    }
}

impl Related<super::group::Entity> for Entity {
    fn to() -> RelationDef {
        super::group_member::Relation::Group.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::group_member::Relation::Student.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Profile fields a caller may change. The password is handled separately.
#[derive(Debug, Clone)]
pub struct StudentFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub course_id: Option<String>,
    pub status: Option<StudentStatus>,
}

impl Model {
    pub async fn create<C: ConnectionTrait>(
        db: &C,
        student_id: &str,
        fields: StudentFields,
        password_hash: &str,
    ) -> Result<Model, DbErr> {
        ActiveModel {
            student_id: Set(student_id.to_owned()),
            name: Set(fields.name),
            email: Set(fields.email),
            phone: Set(fields.phone),
            password_hash: Set(password_hash.to_owned()),
            course_id: Set(fields.course_id),
            status: Set(fields.status.unwrap_or(StudentStatus::Active)),
            created_at: Set(Utc::now()),
        }
        .insert(db)
        .await
    }

    pub async fn find_all<C: ConnectionTrait>(db: &C) -> Result<Vec<Model>, DbErr> {
        Entity::find().order_by_asc(Column::Name).all(db).await
    }

    /// Active students currently enrolled in `course_id`.
    pub async fn find_active_in_course<C: ConnectionTrait>(
        db: &C,
        course_id: &str,
    ) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::CourseId.eq(course_id))
            .filter(Column::Status.eq(StudentStatus::Active))
            .order_by_asc(Column::StudentId)
            .all(db)
            .await
    }

    pub async fn update<C: ConnectionTrait>(
        db: &C,
        student_id: &str,
        fields: StudentFields,
    ) -> Result<Option<Model>, DbErr> {
        let mut update = Entity::update_many()
            .col_expr(Column::Name, Expr::value(fields.name))
            .col_expr(Column::Email, Expr::value(fields.email))
            .col_expr(Column::Phone, Expr::value(fields.phone))
            .col_expr(Column::CourseId, Expr::value(fields.course_id));
        if let Some(status) = fields.status {
            update = update.col_expr(Column::Status, Expr::value(status.to_string()));
        }

        let res = update
            .filter(Column::StudentId.eq(student_id))
            .exec(db)
            .await?;
        if res.rows_affected == 0 {
            return Ok(None);
        }
        Entity::find_by_id(student_id).one(db).await
    }

    pub async fn delete<C: ConnectionTrait>(db: &C, student_id: &str) -> Result<bool, DbErr> {
        let res = Entity::delete_by_id(student_id).exec(db).await?;
        Ok(res.rows_affected > 0)
    }
}
