//! HTTP status lines and the sink that receives them.

use std::fmt;

/// A status line such as `HTTP/1.0 404 Not Found`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusLine {
    pub code: u16,
    pub reason: &'static str,
}

impl StatusLine {
    /// Map a code to its status line.
    ///
    /// Total: anything other than 201, 403, 404 or 500 becomes `200 OK`.
    pub const fn for_code(code: u16) -> Self {
        match code {
            201 => Self { code: 201, reason: "Created" },
            403 => Self { code: 403, reason: "Forbidden" },
            404 => Self { code: 404, reason: "Not Found" },
            500 => Self { code: 500, reason: "Internal Server Error" },
            _ => Self { code: 200, reason: "OK" },
        }
    }
}

impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP/1.0 {} {}", self.code, self.reason)
    }
}

/// Host facility that sets the response status line.
pub trait StatusLineSink {
    fn set_status_line(&mut self, line: StatusLine);
}

/// Single slot: keeps the most recent line.
impl StatusLineSink for Option<StatusLine> {
    fn set_status_line(&mut self, line: StatusLine) {
        *self = Some(line);
    }
}

/// Records every line, in order.
impl StatusLineSink for Vec<StatusLine> {
    fn set_status_line(&mut self, line: StatusLine) {
        self.push(line);
    }
}

impl<S: StatusLineSink + ?Sized> StatusLineSink for &mut S {
    fn set_status_line(&mut self, line: StatusLine) {
        (**self).set_status_line(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_map_to_their_reason() {
        assert_eq!(StatusLine::for_code(201).to_string(), "HTTP/1.0 201 Created");
        assert_eq!(StatusLine::for_code(403).to_string(), "HTTP/1.0 403 Forbidden");
        assert_eq!(StatusLine::for_code(404).to_string(), "HTTP/1.0 404 Not Found");
        assert_eq!(
            StatusLine::for_code(500).to_string(),
            "HTTP/1.0 500 Internal Server Error"
        );
        assert_eq!(StatusLine::for_code(200).to_string(), "HTTP/1.0 200 OK");
    }

    #[test]
    fn unknown_codes_fall_back_to_ok() {
        for code in [0, 204, 302, 418, 503, u16::MAX] {
            assert_eq!(StatusLine::for_code(code), StatusLine::for_code(200));
        }
    }

    #[test]
    fn option_sink_keeps_last_line() {
        let mut slot: Option<StatusLine> = None;
        slot.set_status_line(StatusLine::for_code(404));
        slot.set_status_line(StatusLine::for_code(201));
        assert_eq!(slot, Some(StatusLine::for_code(201)));
    }
}
