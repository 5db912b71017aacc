//! Envelope construction for endpoint handlers.
//!
//! Every handler answers through one of five named constructors. Each
//! builds the envelope, decides whether the request opted in to a real
//! HTTP status line for that code, and echoes the callback name.

use super::code::EnvelopeCode;
use super::context::{InvocationMode, RequestContext};
use super::status_line::{StatusLine, StatusLineSink};
use super::types::ResponseEnvelope;

/// Builds envelopes for a single request.
///
/// The sink receives at most one status line per constructor call, and
/// never when the call is an internal invocation.
pub struct EnvelopeBuilder<'a, S> {
    context: &'a RequestContext,
    mode: InvocationMode,
    sink: S,
}

impl<'a, S: StatusLineSink> EnvelopeBuilder<'a, S> {
    pub fn new(context: &'a RequestContext, mode: InvocationMode, sink: S) -> Self {
        Self { context, mode, sink }
    }

    /// Resource created (201).
    pub fn created<T>(&mut self, message: impl Into<String>, result: Option<T>) -> ResponseEnvelope<T> {
        self.build_envelope(message.into(), EnvelopeCode::Created, result)
    }

    /// Normal success (200).
    pub fn success<T>(&mut self, message: impl Into<String>, result: Option<T>) -> ResponseEnvelope<T> {
        self.build_envelope(message.into(), EnvelopeCode::Success, result)
    }

    /// Server-side failure (500).
    pub fn error<T>(&mut self, message: impl Into<String>, result: Option<T>) -> ResponseEnvelope<T> {
        self.build_envelope(message.into(), EnvelopeCode::Error, result)
    }

    /// Caller not permitted (403).
    pub fn forbidden<T>(&mut self, message: impl Into<String>, result: Option<T>) -> ResponseEnvelope<T> {
        self.build_envelope(message.into(), EnvelopeCode::Forbidden, result)
    }

    /// Resource absent (404).
    pub fn not_found<T>(&mut self, message: impl Into<String>, result: Option<T>) -> ResponseEnvelope<T> {
        self.build_envelope(message.into(), EnvelopeCode::NotFound, result)
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Consume the builder, handing back whatever the sink collected.
    pub fn into_sink(self) -> S {
        self.sink
    }

    fn build_envelope<T>(
        &mut self,
        message: String,
        code: EnvelopeCode,
        result: Option<T>,
    ) -> ResponseEnvelope<T> {
        let mut envelope = ResponseEnvelope::new(message, code, result);

        if self.context.http_codes().matches(code.as_u16()) {
            self.emit_status_header(code);
        }

        if let Some(callback) = &self.context.callback {
            envelope.callback = Some(callback.clone());
        }

        envelope
    }

    fn emit_status_header(&mut self, code: EnvelopeCode) {
        if self.mode.is_invoking() {
            tracing::debug!(code = %code, "Status line suppressed for internal invocation");
            return;
        }

        let line = StatusLine::for_code(code.as_u16());
        tracing::debug!(status_line = %line, "Emitting status line");
        self.sink.set_status_line(line);
    }
}
