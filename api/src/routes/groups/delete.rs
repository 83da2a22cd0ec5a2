use crate::response::ApiResponse;
use crate::routes::common::{error_response, internal_error};
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::{group, group_member};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, QueryFilter, TransactionTrait};

/// DELETE /group/{group_id}
///
/// Removes the members and the group in one transaction.
pub async fn delete_group(
    State(state): State<AppState>,
    Path(group_id): Path<String>,
) -> Response {
    let result = state
        .db()
        .transaction::<_, bool, DbErr>(|txn| {
            Box::pin(async move {
                group_member::Entity::delete_many()
                    .filter(group_member::Column::GroupId.eq(group_id.as_str()))
                    .exec(txn)
                    .await?;
                group::Model::delete(txn, &group_id).await
            })
        })
        .await;

    match result {
        Ok(true) => (
            StatusCode::OK,
            Json(ApiResponse::<()>::success((), "Group deleted successfully")),
        )
            .into_response(),
        Ok(false) => error_response(StatusCode::NOT_FOUND, "Group not found"),
        Err(e) => internal_error("Error deleting group", e),
    }
}

/// DELETE /group/{group_id}/members/{student_id}
pub async fn remove_member(
    State(state): State<AppState>,
    Path((group_id, student_id)): Path<(String, String)>,
) -> Response {
    match group_member::Model::remove(state.db(), &group_id, &student_id).await {
        Ok(true) => (
            StatusCode::OK,
            Json(ApiResponse::<()>::success((), "Member removed successfully")),
        )
            .into_response(),
        Ok(false) => error_response(StatusCode::NOT_FOUND, "Member not found"),
        Err(e) => internal_error("Error removing group member", e),
    }
}
