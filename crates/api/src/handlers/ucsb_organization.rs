//! Handlers for the `/ucsborganizations` resource, keyed by `orgCode`.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use ucsb_db::models::ucsb_organization::{
    CreateUcsbOrganization, UcsbOrganization, UpdateUcsbOrganization,
};

use crate::error::AppResult;
use crate::middleware::rbac::{RequireAdmin, RequireUser};
use crate::query::{JsonBody, OrgCodeParams, QueryParams, RequestParams};
use crate::resource;
use crate::response::MessageResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrganizationParams {
    pub org_code: String,
    pub org_translation_short: String,
    pub org_translation: String,
    pub inactive: bool,
}

impl From<CreateOrganizationParams> for CreateUcsbOrganization {
    fn from(params: CreateOrganizationParams) -> Self {
        CreateUcsbOrganization {
            org_code: params.org_code,
            org_translation_short: params.org_translation_short,
            org_translation: params.org_translation,
            inactive: params.inactive,
        }
    }
}

/// GET /api/ucsborganizations/all
pub async fn list_all(
    RequireUser(_user): RequireUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<UcsbOrganization>>> {
    let orgs = resource::list_all::<UcsbOrganization>(&state.stores).await?;
    Ok(Json(orgs))
}

/// GET /api/ucsborganizations?orgCode=
pub async fn get_by_code(
    RequireUser(_user): RequireUser,
    State(state): State<AppState>,
    QueryParams(params): QueryParams<OrgCodeParams>,
) -> AppResult<Json<UcsbOrganization>> {
    let org = resource::find_or_404::<UcsbOrganization>(&state.stores, &params.org_code).await?;
    Ok(Json(org))
}

/// POST /api/ucsborganizations/post
///
/// Saving under an existing `orgCode` replaces that organization.
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    RequestParams(params): RequestParams<CreateOrganizationParams>,
) -> AppResult<Json<UcsbOrganization>> {
    let org = resource::create::<UcsbOrganization>(&state.stores, params.into()).await?;

    tracing::info!(org_code = %org.org_code, user = %admin.email, "Organization saved");

    Ok(Json(org))
}

/// PUT /api/ucsborganizations?orgCode=
///
/// The code itself never changes, whatever the body says.
pub async fn update(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    QueryParams(params): QueryParams<OrgCodeParams>,
    JsonBody(body): JsonBody<UpdateUcsbOrganization>,
) -> AppResult<Json<UcsbOrganization>> {
    let org =
        resource::update::<UcsbOrganization>(&state.stores, &params.org_code, body).await?;

    tracing::info!(org_code = %params.org_code, user = %admin.email, "Organization updated");

    Ok(Json(org))
}

/// DELETE /api/ucsborganizations?orgCode=
pub async fn delete(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    QueryParams(params): QueryParams<OrgCodeParams>,
) -> AppResult<Json<MessageResponse>> {
    let confirmation =
        resource::delete::<UcsbOrganization>(&state.stores, &params.org_code).await?;

    tracing::info!(org_code = %params.org_code, user = %admin.email, "Organization deleted");

    Ok(Json(confirmation))
}
