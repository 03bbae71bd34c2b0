use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::FmpError;

/// One fiscal year of an income statement, exactly as the API returned it.
pub type IncomeRow = Map<String, Value>;

/// Annual income statements for one symbol, most recent first as delivered by the API.
///
/// Rows are kept as raw JSON objects, so a field the API stops sending shows up as a
/// missing column rather than a deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IncomeStatement {
    rows: Vec<IncomeRow>,
}

impl IncomeStatement {
    pub fn new(rows: Vec<IncomeRow>) -> Self {
        Self { rows }
    }

    /// Builds a table from a JSON array, rejecting any element that is not an object.
    ///
    /// # Errors
    ///
    /// Returns [`FmpError::Data`] when the array is not tabular.
    pub fn from_values(values: Vec<Value>) -> Result<Self, FmpError> {
        let rows = values
            .into_iter()
            .enumerate()
            .map(|(i, v)| match v {
                Value::Object(m) => Ok(m),
                other => Err(FmpError::Data(format!(
                    "income statement row {i} is not an object: {other}"
                ))),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[IncomeRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Union of field names across all rows, in first-seen order.
    pub fn columns(&self) -> Vec<&str> {
        let mut cols: Vec<&str> = Vec::new();
        for key in self.rows.iter().flat_map(Map::keys) {
            if !cols.contains(&key.as_str()) {
                cols.push(key);
            }
        }
        cols
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.rows.iter().any(|r| r.contains_key(name))
    }
}
