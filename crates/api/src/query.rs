//! Request parameter extractors and the key parameter structs shared by the
//! handler modules.
//!
//! The wrappers differ from axum's own extractors only in their rejection:
//! malformed input becomes [`AppError::BadRequest`], so clients always get a
//! `{"message": ...}` body.

use axum::extract::{FromRequest, FromRequestParts, Query, Request};
use axum::http::header::CONTENT_TYPE;
use axum::{Form, Json};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use ucsb_core::types::DbId;

use crate::error::AppError;

/// `?id=` for the numerically keyed resources.
#[derive(Debug, Deserialize)]
pub struct IdParams {
    pub id: DbId,
}

/// `?orgCode=` for organizations.
#[derive(Debug, Deserialize)]
pub struct OrgCodeParams {
    #[serde(rename = "orgCode")]
    pub org_code: String,
}

/// Query-string extractor.
#[derive(Debug, FromRequestParts)]
#[from_request(via(Query), rejection(AppError))]
pub struct QueryParams<T>(pub T);

/// JSON body extractor.
#[derive(Debug, FromRequest)]
#[from_request(via(Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);

/// Individual named parameters, read from an
/// `application/x-www-form-urlencoded` body when the request carries one and
/// from the query string otherwise.
///
/// Create endpoints take their fields this way, so both
/// `POST /post?name=...` and an HTML form submission work.
#[derive(Debug)]
pub struct RequestParams<T>(pub T);

impl<T, S> FromRequest<S> for RequestParams<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_form_encoded(&req) {
            let Form(params) = Form::<T>::from_request(req, state).await?;
            return Ok(RequestParams(params));
        }

        let Query(params) = Query::<T>::try_from_uri(req.uri())?;
        Ok(RequestParams(params))
    }
}

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

fn is_form_encoded(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with(FORM_CONTENT_TYPE))
}
