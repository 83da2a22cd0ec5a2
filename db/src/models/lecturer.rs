use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::{QueryOrder, prelude::Expr};
use serde::Serialize;

/// Represents a lecturer in the `lecturers` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[serde(rename_all = "camelCase")]
#[sea_orm(table_name = "lecturers")]
pub struct Model {
    /// Generated `LEC-` identifier.
    #[sea_orm(primary_key, auto_increment = false)]
    pub lecturer_id: String,
    pub name: String,
    /// Unique contact email.
    pub email: String,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::course::Entity")]
    Courses,
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Courses.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create<C: ConnectionTrait>(
        db: &C,
        lecturer_id: &str,
        name: &str,
        email: &str,
        phone: Option<&str>,
    ) -> Result<Model, DbErr> {
        ActiveModel {
            lecturer_id: Set(lecturer_id.to_owned()),
            name: Set(name.to_owned()),
            email: Set(email.to_owned()),
            phone: Set(phone.map(str::to_owned)),
            created_at: Set(Utc::now()),
        }
        .insert(db)
        .await
    }

    pub async fn find_all<C: ConnectionTrait>(db: &C) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .order_by_asc(Column::Name)
            .all(db)
            .await
    }

    /// Updates the editable fields. Returns `None` when the lecturer does not exist.
    pub async fn update<C: ConnectionTrait>(
        db: &C,
        lecturer_id: &str,
        name: &str,
        email: &str,
        phone: Option<&str>,
    ) -> Result<Option<Model>, DbErr> {
        let res = Entity::update_many()
            .col_expr(Column::Name, Expr::value(name))
            .col_expr(Column::Email, Expr::value(email))
            .col_expr(Column::Phone, Expr::value(phone.map(str::to_owned)))
            .filter(Column::LecturerId.eq(lecturer_id))
            .exec(db)
            .await?;

        if res.rows_affected == 0 {
            return Ok(None);
        }
        Entity::find_by_id(lecturer_id).one(db).await
    }

    /// Returns `true` if a row was deleted.
    pub async fn delete<C: ConnectionTrait>(db: &C, lecturer_id: &str) -> Result<bool, DbErr> {
        let res = Entity::delete_by_id(lecturer_id).exec(db).await?;
        Ok(res.rows_affected > 0)
    }
}
