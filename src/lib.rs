//! Uniform response envelopes for HTTP API handlers.
//!
//! Every endpoint answers with `{message, code, result}`. Clients choose
//! through `httpCodes` which logical codes also become real HTTP status
//! lines, and through `callback` whether the envelope is served as JSONP.

pub mod config;
pub mod envelope;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use config::schema::ServiceConfig;
pub use envelope::{EnvelopeBuilder, EnvelopeCode, InvocationMode, RequestContext, ResponseEnvelope};
pub use error::ServerError;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
