//! View model adapter.
//!
//! Reshapes a possibly-partial payload into the always-well-formed shapes the
//! presentation components consume, so they never branch on absence. This is
//! the only defaulting logic in the client; no transformation, aggregation,
//! or sorting happens here.

use crate::payload::{DashboardPayload, Row, SeriesBundle};

/// Defaulted, presentation-ready projection of one dashboard payload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardViewModel {
    pub chart: SeriesBundle,
    pub table: Vec<Row>,
    pub graph: SeriesBundle,
}

impl DashboardViewModel {
    /// Build a view model from a payload, substituting empty-but-valid
    /// defaults for exactly the absent slices. Present slices pass through
    /// unchanged.
    pub fn from_payload(payload: &DashboardPayload) -> Self {
        Self {
            chart: payload.chart_data.clone().unwrap_or_default(),
            table: payload.table_data.clone().unwrap_or_default(),
            graph: payload.graph_data.clone().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::CellValue;

    fn sample_payload() -> DashboardPayload {
        DashboardPayload {
            chart_data: Some(SeriesBundle {
                labels: vec!["Q1".to_string(), "Q2".to_string()],
                values: vec![5.0, 9.0],
            }),
            table_data: Some(vec![Row {
                id: 1,
                name: "A".to_string(),
                value: CellValue::Number(10.0),
            }]),
            graph_data: None,
        }
    }

    #[test]
    fn absent_slices_get_empty_defaults() {
        let vm = DashboardViewModel::from_payload(&DashboardPayload::default());
        assert!(vm.chart.labels.is_empty());
        assert!(vm.chart.values.is_empty());
        assert!(vm.table.is_empty());
        assert!(vm.graph.labels.is_empty());
        assert!(vm.graph.values.is_empty());
    }

    #[test]
    fn present_slices_pass_through_unchanged() {
        let payload = sample_payload();
        let vm = DashboardViewModel::from_payload(&payload);
        assert_eq!(Some(vm.chart), payload.chart_data);
        assert_eq!(Some(vm.table), payload.table_data);
    }

    #[test]
    fn only_missing_slices_are_defaulted() {
        let vm = DashboardViewModel::from_payload(&sample_payload());
        assert_eq!(vm.table.len(), 1);
        assert!(vm.graph.labels.is_empty());
        assert!(vm.graph.values.is_empty());
    }

    #[test]
    fn adapter_is_idempotent() {
        let payload = sample_payload();
        assert_eq!(
            DashboardViewModel::from_payload(&payload),
            DashboardViewModel::from_payload(&payload)
        );
    }
}
