use axum::{extract::FromRequestParts, http::request::Parts};
use kernel::model::id::UserId;
use shared::error::AppError;

pub const REQUESTER_ID_HEADER: &str = "x-requester-id";

/// Identity of the caller. Supplied by the identity collaborator in front
/// of this service; the header value is trusted, not authenticated here.
pub struct Requester(UserId);

impl Requester {
    pub fn id(&self) -> UserId {
        self.0
    }
}

#[async_trait::async_trait]
impl<S> FromRequestParts<S> for Requester
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(REQUESTER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| {
                AppError::UnauthenticatedError(format!("missing {REQUESTER_ID_HEADER} header"))
            })?;
        let user_id = raw.parse::<UserId>().map_err(|_| {
            AppError::UnauthenticatedError(format!("malformed {REQUESTER_ID_HEADER} header"))
        })?;
        Ok(Requester(user_id))
    }
}
