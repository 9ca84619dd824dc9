//! Handlers for the `/helprequest` resource.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use ucsb_core::types::parse_local_timestamp;
use ucsb_db::models::help_request::{CreateHelpRequest, HelpRequest, UpdateHelpRequest};

use crate::error::AppResult;
use crate::middleware::rbac::{RequireAdmin, RequireUser};
use crate::query::{IdParams, JsonBody, QueryParams, RequestParams};
use crate::resource;
use crate::response::MessageResponse;
use crate::state::AppState;

/// Fields of `POST /post`, one parameter each.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateHelpRequestParams {
    pub requester_email: String,
    pub team_id: String,
    pub table_or_breakout_room: String,
    /// ISO-8601 local date-time, e.g. `2022-01-03T00:00:00`.
    pub request_time: String,
    pub explanation: String,
    pub solved: bool,
}

impl CreateHelpRequestParams {
    fn into_draft(self) -> AppResult<CreateHelpRequest> {
        Ok(CreateHelpRequest {
            request_time: parse_local_timestamp("requestTime", &self.request_time)?,
            requester_email: self.requester_email,
            team_id: self.team_id,
            table_or_breakout_room: self.table_or_breakout_room,
            explanation: self.explanation,
            solved: self.solved,
        })
    }
}

/// GET /api/helprequest/all
pub async fn list_all(
    RequireUser(_user): RequireUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<HelpRequest>>> {
    let requests = resource::list_all::<HelpRequest>(&state.stores).await?;
    Ok(Json(requests))
}

/// GET /api/helprequest?id=
pub async fn get_by_id(
    RequireUser(_user): RequireUser,
    State(state): State<AppState>,
    QueryParams(params): QueryParams<IdParams>,
) -> AppResult<Json<HelpRequest>> {
    let request = resource::find_or_404::<HelpRequest>(&state.stores, &params.id).await?;
    Ok(Json(request))
}

/// POST /api/helprequest/post
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    RequestParams(params): RequestParams<CreateHelpRequestParams>,
) -> AppResult<Json<HelpRequest>> {
    let draft = params.into_draft()?;
    let request = resource::create::<HelpRequest>(&state.stores, draft).await?;

    tracing::info!(
        help_request_id = request.id,
        user = %admin.email,
        "Help request created"
    );

    Ok(Json(request))
}

/// PUT /api/helprequest?id=
pub async fn update(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    QueryParams(params): QueryParams<IdParams>,
    JsonBody(body): JsonBody<UpdateHelpRequest>,
) -> AppResult<Json<HelpRequest>> {
    let request = resource::update::<HelpRequest>(&state.stores, &params.id, body).await?;

    tracing::info!(help_request_id = params.id, user = %admin.email, "Help request updated");

    Ok(Json(request))
}

/// DELETE /api/helprequest?id=
pub async fn delete(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    QueryParams(params): QueryParams<IdParams>,
) -> AppResult<Json<MessageResponse>> {
    let confirmation = resource::delete::<HelpRequest>(&state.stores, &params.id).await?;

    tracing::info!(help_request_id = params.id, user = %admin.email, "Help request deleted");

    Ok(Json(confirmation))
}
