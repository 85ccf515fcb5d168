//! Dashboard payload data model.
//!
//! Wire shape of the dashboard endpoint: a root object with three optional
//! slices, any of which may be absent from the JSON body.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Root object returned by `GET {base_url}/dashboard/{user_id}`.
///
/// A missing attribute deserializes to `None`; absence is never an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardPayload {
    #[serde(default)]
    pub chart_data: Option<SeriesBundle>,
    #[serde(default)]
    pub table_data: Option<Vec<Row>>,
    #[serde(default)]
    pub graph_data: Option<SeriesBundle>,
}

/// Paired label/value sequences feeding a bar-chart visualization.
///
/// `labels` and `values` are positionally paired and assumed to have equal
/// length. A mismatch is not rejected and under/over-plots silently.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeriesBundle {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

/// One table entry.
///
/// `id` must be unique within a payload; it is the stable identity for list
/// rendering, and duplicates leave row identity undefined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub id: u64,
    pub name: String,
    pub value: CellValue,
}

/// Table cell value, rendered verbatim whether the API sent a number or a
/// string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(f64),
    Text(String),
}

impl Display for CellValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Text(s) => write!(f, "{}", s),
        }
    }
}
