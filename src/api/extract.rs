//! Per-request unit-of-work extractor.

use std::convert::Infallible;
use std::ops::{Deref, DerefMut};

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::domain::session::UnitOfWork;
use crate::state::AppState;

/// A storage session owned by one request.
///
/// Opened when the handler's arguments are extracted and closed when the
/// handler future finishes, whichever way it finishes: normal response,
/// error response, or unwinding. A session is never shared between requests.
///
/// ```rust,ignore
/// async fn handler(mut session: DbSession) -> Result<Json<Value>, AppError> {
///     let ad = advertisement_service::get_advertisement(&mut *session, 1).await?;
///     ...
/// }
/// ```
pub struct DbSession(Box<dyn UnitOfWork>);

impl FromRequestParts<AppState> for DbSession {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        tracing::debug!(method = %parts.method, uri = %parts.uri, "Session opened");
        Ok(Self(state.sessions.open_session()))
    }
}

impl Drop for DbSession {
    fn drop(&mut self) {
        tracing::debug!("Session closed");
    }
}

impl Deref for DbSession {
    type Target = dyn UnitOfWork;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl DerefMut for DbSession {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.0.as_mut()
    }
}
