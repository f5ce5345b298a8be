//! Page renderers: pure functions from a dataset snapshot plus filter
//! state to a serializable render tree.
//!
//! Every renderer degrades per widget: a dataset that failed to load adds
//! a notice and suppresses only the cards and charts that read it, so the
//! rest of the page still renders.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::charts::ChartSpec;
use crate::datasets::{DatasetKind, DatasetSnapshot};
use crate::error::Result;
use crate::filters::{DashboardPage, FilterState};

pub mod financial;
pub mod maintenance;
pub mod occupancy;
pub mod overview;
pub mod properties;
pub mod tenants;

/// A single headline metric: label plus pre-formatted display value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MetricCard {
    pub label: String,
    pub value: String,
}

impl MetricCard {
    pub fn new(label: &str, value: String) -> Self {
        Self {
            label: label.to_string(),
            value,
        }
    }
}

/// Tabular widget, all cells projected to display strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TableView {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Tells the client a dataset failed to load and its widgets were skipped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DatasetNotice {
    pub dataset: DatasetKind,
    pub message: String,
}

/// The full render tree for one page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PageView {
    pub page: DashboardPage,
    pub title: String,
    pub cards: Vec<MetricCard>,
    pub charts: Vec<ChartSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<TableView>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notices: Vec<DatasetNotice>,
}

impl PageView {
    fn new(page: DashboardPage) -> Self {
        Self {
            page,
            title: page.title().to_string(),
            cards: Vec::new(),
            charts: Vec::new(),
            table: None,
            notices: Vec::new(),
        }
    }
}

/// Render one page from a snapshot. Dataset failures inside the snapshot
/// become notices; an `Err` here means the page itself could not be built
/// (a tabular reshaping failure).
pub fn render_page(snapshot: &DatasetSnapshot, filters: &FilterState) -> Result<PageView> {
    match filters.page {
        DashboardPage::Overview => overview::render(snapshot, filters),
        DashboardPage::Properties => properties::render(snapshot, filters),
        DashboardPage::Tenants => tenants::render(snapshot, filters),
        DashboardPage::Financial => financial::render(snapshot, filters),
        DashboardPage::Maintenance => maintenance::render(snapshot, filters),
        DashboardPage::Occupancy => occupancy::render(snapshot, filters),
    }
}

/// Unwrap one dataset out of the snapshot, recording a notice on failure.
fn take<'a, T>(
    result: &'a Result<Arc<Vec<T>>>,
    dataset: DatasetKind,
    view: &mut PageView,
) -> Option<&'a [T]> {
    match result {
        Ok(rows) => Some(rows.as_slice()),
        Err(err) => {
            view.notices.push(DatasetNotice {
                dataset,
                message: err.to_string(),
            });
            None
        }
    }
}

fn mean(values: impl ExactSizeIterator<Item = f64>) -> f64 {
    let len = values.len();
    if len == 0 {
        return 0.0;
    }
    values.sum::<f64>() / len as f64
}

#[cfg(test)]
pub(crate) fn fixture_snapshot() -> DatasetSnapshot {
    use crate::datasets::fixtures;

    DatasetSnapshot {
        properties: Ok(Arc::new(fixtures::properties())),
        payments: Ok(Arc::new(fixtures::payments())),
        expenses: Ok(Arc::new(fixtures::expenses())),
        occupancy: Ok(Arc::new(fixtures::occupancy())),
        maintenance: Ok(Arc::new(fixtures::maintenance())),
        tenants: Ok(Arc::new(fixtures::tenants())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_page_dispatches_on_the_filter_page() {
        let snapshot = fixture_snapshot();
        for page in DashboardPage::ALL {
            let view = render_page(&snapshot, &FilterState::new(page)).unwrap();
            assert_eq!(view.page, page);
            assert_eq!(view.title, page.title());
        }
    }

    #[test]
    fn notices_serialize_only_when_present() {
        let snapshot = fixture_snapshot();
        let view = render_page(&snapshot, &FilterState::new(DashboardPage::Overview)).unwrap();
        assert!(view.notices.is_empty());
        let json = serde_json::to_value(&view).unwrap();
        assert!(json.get("notices").is_none());
    }
}
