//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events)
//!     → request spans from the HTTP trace layer, keyed by request ID
//! ```

pub mod logging;
