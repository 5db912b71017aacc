//! Request parameters and invocation mode consulted by the builder.

use serde::Deserialize;

/// Query parameter naming the codes that also produce a real status line.
pub const HTTP_CODES_PARAM: &str = "httpCodes";

/// Query parameter carrying the script callback name.
pub const CALLBACK_PARAM: &str = "callback";

/// The request parameters the envelope builder reads.
///
/// Deserializes straight from a query string; unrelated parameters are
/// ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RequestContext {
    #[serde(rename = "httpCodes", default)]
    pub http_codes: Option<String>,

    #[serde(default)]
    pub callback: Option<String>,
}

impl RequestContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_http_codes(mut self, codes: impl Into<String>) -> Self {
        self.http_codes = Some(codes.into());
        self
    }

    pub fn with_callback(mut self, callback: impl Into<String>) -> Self {
        self.callback = Some(callback.into());
        self
    }

    /// Collect the envelope parameters from decoded query pairs.
    ///
    /// Each key is read independently; a repeated key keeps its last value.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        pairs.into_iter().fold(Self::default(), |mut ctx, (key, value)| {
            match key.as_ref() {
                HTTP_CODES_PARAM => ctx.http_codes = Some(value.into()),
                CALLBACK_PARAM => ctx.callback = Some(value.into()),
                _ => {}
            }
            ctx
        })
    }

    /// Parsed form of the `httpCodes` parameter.
    pub fn http_codes(&self) -> HttpCodes {
        HttpCodes::parse(self.http_codes.as_deref())
    }
}

/// Which logical codes should also set the HTTP status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpCodes {
    /// Parameter absent: transport status stays 200.
    Never,
    /// Parameter is exactly `*`.
    All,
    /// Comma-separated list; entries that are not integers are dropped.
    Only(Vec<u16>),
}

impl HttpCodes {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            None => HttpCodes::Never,
            Some("*") => HttpCodes::All,
            Some(list) => HttpCodes::Only(
                list.split(',')
                    .filter_map(|entry| entry.trim().parse::<u16>().ok())
                    .collect(),
            ),
        }
    }

    pub fn matches(&self, code: u16) -> bool {
        match self {
            HttpCodes::Never => false,
            HttpCodes::All => true,
            HttpCodes::Only(codes) => codes.contains(&code),
        }
    }
}

/// Whether the current call is served over HTTP or invoked internally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InvocationMode {
    #[default]
    Direct,
    Internal,
}

impl InvocationMode {
    pub fn is_invoking(self) -> bool {
        self == InvocationMode::Internal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wildcard_matches_everything() {
        let codes = HttpCodes::parse(Some("*"));
        assert_eq!(codes, HttpCodes::All);
        assert!(codes.matches(200));
        assert!(codes.matches(500));
    }

    #[test]
    fn list_is_compared_numerically() {
        let codes = HttpCodes::parse(Some("403, 404 ,abc,,500x"));
        assert_eq!(codes, HttpCodes::Only(vec![403, 404]));
        assert!(codes.matches(404));
        assert!(!codes.matches(500));
    }

    #[test]
    fn empty_or_garbage_never_matches() {
        for raw in ["", ",", "abc", " * ", "**"] {
            let codes = HttpCodes::parse(Some(raw));
            for code in [200, 201, 403, 404, 500] {
                assert!(!codes.matches(code), "{raw:?} matched {code}");
            }
        }
    }

    #[test]
    fn context_reads_query_names() {
        let ctx: RequestContext =
            serde_json::from_value(serde_json::json!({ "httpCodes": "*", "callback": "cb", "page": "2" }))
                .unwrap();
        assert_eq!(ctx, RequestContext::new().with_http_codes("*").with_callback("cb"));
        assert_eq!(ctx.http_codes(), HttpCodes::All);
    }

    #[test]
    fn pairs_keep_last_value_per_key() {
        let ctx = RequestContext::from_pairs([
            ("callback", "a"),
            ("httpCodes", "404"),
            ("page", "2"),
            ("callback", "b"),
            ("httpCodes", "*"),
        ]);
        assert_eq!(ctx, RequestContext::new().with_http_codes("*").with_callback("b"));
        assert_eq!(RequestContext::from_pairs(Vec::<(String, String)>::new()), RequestContext::default());
    }

    #[test]
    fn only_internal_mode_is_invoking() {
        assert!(!InvocationMode::default().is_invoking());
        assert!(InvocationMode::Internal.is_invoking());
    }
}
