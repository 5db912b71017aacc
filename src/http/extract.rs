//! Per-request envelope context extracted from axum requests.

use std::convert::Infallible;

use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};

use crate::envelope::{EnvelopeBuilder, InvocationMode, RequestContext, StatusLine};

/// Everything a handler needs to build envelopes for the current request.
///
/// Never rejects: a repeated parameter keeps its last value, a query
/// string that cannot be decoded yields an empty context, and a request
/// without an [`InvocationMode`] extension is treated as a direct call.
#[derive(Debug, Clone, Default)]
pub struct ApiContext {
    pub request: RequestContext,
    pub mode: InvocationMode,
}

impl ApiContext {
    /// Context for a programmatic call made from inside another handler.
    pub fn internal(request: RequestContext) -> Self {
        Self {
            request,
            mode: InvocationMode::Internal,
        }
    }

    /// Builder whose emitted status line lands in a single slot.
    pub fn builder(&self) -> EnvelopeBuilder<'_, Option<StatusLine>> {
        EnvelopeBuilder::new(&self.request, self.mode, None)
    }
}

impl<S> FromRequestParts<S> for ApiContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let request = match Query::<Vec<(String, String)>>::try_from_uri(&parts.uri) {
            Ok(Query(pairs)) => RequestContext::from_pairs(pairs),
            Err(rejection) => {
                tracing::debug!(error = %rejection, "Ignoring undecodable query string");
                RequestContext::default()
            }
        };
        let mode = parts
            .extensions
            .get::<InvocationMode>()
            .copied()
            .unwrap_or_default();

        Ok(Self { request, mode })
    }
}
