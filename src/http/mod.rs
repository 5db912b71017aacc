//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (request ID)
//!     → extract.rs (httpCodes / callback / invocation mode)
//!     → handlers.rs (endpoint answers through the envelope builder)
//!     → response.rs (status line, JSON or JSONP body)
//!     → Send to client
//! ```

pub mod extract;
pub mod handlers;
pub mod request;
pub mod response;
pub mod server;

pub use extract::ApiContext;
pub use request::{UuidRequestId, X_REQUEST_ID};
pub use response::ApiResponse;
pub use server::{AppState, HttpServer};
