//! Response envelope subsystem.
//!
//! # Data Flow
//! ```text
//! handler outcome (message, optional result)
//!     → builder.rs (created / success / error / forbidden / not_found)
//!     → context.rs (httpCodes policy, callback echo)
//!     → status_line.rs (status line handed to the sink, direct calls only)
//!     → ResponseEnvelope (serialized by the HTTP layer)
//! ```
//!
//! # Design Decisions
//! - The logical `code` in the body and the HTTP status line are decoupled;
//!   clients opt in to real status lines through `httpCodes`
//! - Request parameters and invocation mode are passed in explicitly
//! - Nothing here can fail; malformed parameters never match

pub mod builder;
pub mod code;
pub mod context;
pub mod status_line;
pub mod types;

pub use builder::EnvelopeBuilder;
pub use code::EnvelopeCode;
pub use context::{HttpCodes, InvocationMode, RequestContext};
pub use status_line::{StatusLine, StatusLineSink};
pub use types::ResponseEnvelope;
