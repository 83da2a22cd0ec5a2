use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::prelude::Expr;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// One student's attendance for one instance.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[serde(rename_all = "camelCase")]
#[sea_orm(table_name = "attendance_records")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub attendance_id: String,
    pub instance_id: String,
    pub course_id: String,
    pub student_id: String,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    pub marked_at: Option<DateTime<Utc>>,
}

/// Only `Absent -> Present` is ever written.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Display, EnumString, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    #[sea_orm(string_value = "absent")]
    Absent,
    #[sea_orm(string_value = "present")]
    Present,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::attendance_instance::Entity",
        from = "Column::InstanceId",
        to = "super::attendance_instance::Column::InstanceId",
        on_delete = "Cascade"
    )]
    Instance,
    #[sea_orm(
        belongs_to = "super::student::Entity",
        from = "Column::StudentId",
        to = "super::student::Column::StudentId",
        on_delete = "Cascade"
    )]
    Student,
}

impl Related<super::attendance_instance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Instance.def()
    }
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
        attendance_id: &str,
        instance: &super::attendance_instance::Model,
        student_id: &str,
        status: AttendanceStatus,
        marked_at: Option<DateTime<Utc>>,
    ) -> Result<Model, DbErr> {
        ActiveModel {
            attendance_id: Set(attendance_id.to_owned()),
            instance_id: Set(instance.instance_id.clone()),
            course_id: Set(instance.course_id.clone()),
            student_id: Set(student_id.to_owned()),
            date: Set(instance.date),
            status: Set(status),
            marked_at: Set(marked_at),
        }
        .insert(db)
        .await
    }

    pub async fn find_for_student<C: ConnectionTrait>(
        db: &C,
        instance_id: &str,
        student_id: &str,
    ) -> Result<Option<Model>, DbErr> {
        Entity::find()
            .filter(Column::InstanceId.eq(instance_id))
            .filter(Column::StudentId.eq(student_id))
            .one(db)
            .await
    }

    /// Flips an `absent` record to `present`. Returns `false` if the record
    /// was already present (or no longer exists), so concurrent markers
    /// cannot both succeed.
    pub async fn mark_present<C: ConnectionTrait>(
        db: &C,
        attendance_id: &str,
        now: DateTime<Utc>,
    ) -> Result<bool, DbErr> {
        let res = Entity::update_many()
            .col_expr(Column::Status, Expr::value(AttendanceStatus::Present.to_string()))
            .col_expr(Column::MarkedAt, Expr::value(now))
            .filter(Column::AttendanceId.eq(attendance_id))
            .filter(Column::Status.eq(AttendanceStatus::Absent))
            .exec(db)
            .await?;
        Ok(res.rows_affected == 1)
    }

    pub async fn delete<C: ConnectionTrait>(db: &C, attendance_id: &str) -> Result<bool, DbErr> {
        let res = Entity::delete_by_id(attendance_id).exec(db).await?;
        Ok(res.rows_affected > 0)
    }
}
