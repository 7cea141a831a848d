use serde::{Deserialize, Deserializer, Serialize};

/// Error object the provider embeds in a response envelope, e.g.
/// `{"code": "Not Found", "description": "No data found, symbol may be delisted"}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ApiError {
    pub code: String,
    #[serde(default)]
    pub description: String,
}

impl ApiError {
    /// The provider's code for an unknown or delisted symbol.
    pub fn is_not_found(&self) -> bool {
        self.code.eq_ignore_ascii_case("not found")
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberRepr {
    Wrapped { raw: Option<f64> },
    Bare(f64),
    // `{}`, `{"raw": "Infinity"}` and friends.
    #[allow(dead_code)]
    Other(serde_json::Value),
}

/// Decodes the provider's numeric field encodings into `Option<f64>`.
///
/// Accepts `{"raw": 189.5, "fmt": "189.50"}`, a bare number, `{}` or `null`.
/// Anything else, and any non-finite value, decodes to `None`.
pub(crate) fn raw_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let repr = Option::<NumberRepr>::deserialize(deserializer)?;
    let value = match repr {
        Some(NumberRepr::Wrapped { raw }) => raw,
        Some(NumberRepr::Bare(value)) => Some(value),
        Some(NumberRepr::Other(_)) | None => None,
    };
    Ok(value.filter(|v| v.is_finite()))
}
