use serde::Deserialize;
use serde_json::Value;

/// The slice of an Alpha Vantage `OVERVIEW` payload this crate reads.
///
/// Throttled or rejected calls come back as 200s carrying `Note`, `Information` or
/// `Error Message` instead of data; unknown symbols come back as `{}`.
#[derive(Deserialize, Default)]
pub(crate) struct OverviewEnvelope {
    #[serde(rename = "Symbol")]
    pub(crate) symbol: Option<String>,

    #[serde(rename = "MarketCapitalization")]
    pub(crate) market_capitalization: Option<Value>,

    #[serde(rename = "Note")]
    pub(crate) note: Option<String>,

    #[serde(rename = "Information")]
    pub(crate) information: Option<String>,

    #[serde(rename = "Error Message")]
    pub(crate) error_message: Option<String>,
}

impl OverviewEnvelope {
    /// Provider-side refusal text, if any.
    pub(crate) fn refusal(&self) -> Option<&str> {
        self.error_message
            .as_deref()
            .or(self.note.as_deref())
            .or(self.information.as_deref())
    }

    /// The capitalization as a number; absent, `"None"` or negative values read as `0.0`.
    pub(crate) fn market_cap(&self) -> f64 {
        let parsed = match &self.market_capitalization {
            Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
            Some(Value::Number(n)) => n.as_f64(),
            _ => None,
        };
        parsed.filter(|v| v.is_finite() && *v >= 0.0).unwrap_or(0.0)
    }
}
