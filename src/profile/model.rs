use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A company profile as returned by the `profile` endpoint.
///
/// The JSON object is kept verbatim so the cache file holds the exact payload. Only a
/// handful of fields are read downstream; they are exposed through typed accessors where a
/// JSON `null` reads the same as an absent key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompanyProfile(Map<String, Value>);

impl CompanyProfile {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Raw field access. `null` values are reported as absent.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key).filter(|v| !v.is_null())
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Field rendered as text: strings verbatim, other scalars via their JSON form.
    pub fn text(&self, key: &str) -> Option<String> {
        self.get(key).map(|v| match v {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }

    pub fn company_name(&self) -> Option<String> {
        self.text("companyName")
    }

    pub fn country(&self) -> Option<String> {
        self.text("country")
    }

    pub fn industry(&self) -> Option<String> {
        self.text("industry")
    }
}

impl From<Map<String, Value>> for CompanyProfile {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}
