use super::common::{GroupDetail, GroupListItem, GroupMemberView};
use crate::response::ApiResponse;
use crate::routes::common::{error_response, internal_error};
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::{group, group_member, student};
use sea_orm::{
    ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, prelude::Expr,
};
use std::collections::HashMap;

/// GET /group
///
/// Every group with its member count, ordered by name.
pub async fn list_groups(State(state): State<AppState>) -> Response {
    let db = state.db();

    let groups = match group::Entity::find()
        .order_by_asc(group::Column::Name)
        .all(db)
        .await
    {
        Ok(rows) => rows,
        Err(e) => return internal_error("Error retrieving groups", e),
    };
    if groups.is_empty() {
        return error_response(StatusCode::NOT_FOUND, "No groups found");
    }

    let counts: Vec<(String, i64)> = match group_member::Entity::find()
        .select_only()
        .column(group_member::Column::GroupId)
        .column_as(Expr::col(group_member::Column::StudentId).count(), "member_count")
        .group_by(group_member::Column::GroupId)
        .into_tuple()
        .all(db)
        .await
    {
        Ok(rows) => rows,
        Err(e) => return internal_error("Error retrieving groups", e),
    };
    let counts: HashMap<String, i64> = counts.into_iter().collect();

    let items: Vec<GroupListItem> = groups
        .into_iter()
        .map(|g| GroupListItem {
            member_count: counts.get(&g.group_id).copied().unwrap_or(0),
            group: g,
        })
        .collect();

    (
        StatusCode::OK,
        Json(ApiResponse::success(items, "Groups retrieved successfully")),
    )
        .into_response()
}

/// GET /group/{group_id}
///
/// The group with its members, leaders first.
pub async fn get_group(State(state): State<AppState>, Path(group_id): Path<String>) -> Response {
    let db = state.db();

    let found = match group::Entity::find_by_id(group_id.as_str()).one(db).await {
        Ok(Some(g)) => g,
        Ok(None) => return error_response(StatusCode::NOT_FOUND, "Group not found"),
        Err(e) => return internal_error("Error retrieving group", e),
    };

    let members = match group_member::Entity::find()
        .filter(group_member::Column::GroupId.eq(group_id.as_str()))
        .find_also_related(student::Entity)
        .order_by_desc(group_member::Column::IsLeader)
        .order_by_asc(group_member::Column::StudentId)
        .all(db)
        .await
    {
        Ok(rows) => rows,
        Err(e) => return internal_error("Error retrieving group", e),
    };

    let members = members
        .into_iter()
        .map(|(m, s)| GroupMemberView {
            student_id: m.student_id,
            name: s.as_ref().map(|s| s.name.clone()),
            email: s.map(|s| s.email),
            is_leader: m.is_leader,
            joined_at: m.joined_at,
        })
        .collect();

    (
        StatusCode::OK,
        Json(ApiResponse::success(
            GroupDetail {
                group: found,
                members,
            },
            "Group retrieved successfully",
        )),
    )
        .into_response()
}
