//! Logical outcome codes carried in the envelope body.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of codes an envelope can carry.
///
/// Serialized as a bare integer (`"code": 404`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
pub enum EnvelopeCode {
    Success,
    Created,
    Forbidden,
    NotFound,
    Error,
}

impl EnvelopeCode {
    pub const fn as_u16(self) -> u16 {
        match self {
            EnvelopeCode::Success => 200,
            EnvelopeCode::Created => 201,
            EnvelopeCode::Forbidden => 403,
            EnvelopeCode::NotFound => 404,
            EnvelopeCode::Error => 500,
        }
    }
}

impl From<EnvelopeCode> for u16 {
    fn from(code: EnvelopeCode) -> Self {
        code.as_u16()
    }
}

/// Rejected integer that is not one of the five envelope codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unknown envelope code: {0}")]
pub struct UnknownCode(pub u16);

impl TryFrom<u16> for EnvelopeCode {
    type Error = UnknownCode;

    fn try_from(value: u16) -> Result<Self, UnknownCode> {
        match value {
            200 => Ok(EnvelopeCode::Success),
            201 => Ok(EnvelopeCode::Created),
            403 => Ok(EnvelopeCode::Forbidden),
            404 => Ok(EnvelopeCode::NotFound),
            500 => Ok(EnvelopeCode::Error),
            other => Err(UnknownCode(other)),
        }
    }
}

impl fmt::Display for EnvelopeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u16())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_integer() {
        let json = serde_json::to_string(&EnvelopeCode::NotFound).unwrap();
        assert_eq!(json, "404");
    }

    #[test]
    fn rejects_codes_outside_the_set() {
        assert_eq!(EnvelopeCode::try_from(418), Err(UnknownCode(418)));
        assert!(serde_json::from_str::<EnvelopeCode>("302").is_err());
        assert_eq!(
            serde_json::from_str::<EnvelopeCode>("201").unwrap(),
            EnvelopeCode::Created
        );
    }
}
