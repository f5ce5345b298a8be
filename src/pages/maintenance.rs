//! Maintenance analytics: one card per task status and the status donut.
//!
//! Cards read the tally map with a zero default, so a feed missing a
//! status row renders "0" instead of failing the page.

use crate::charts::{ChartSpec, ColumnRoles};
use crate::datasets::model::{MaintenanceStatus, MaintenanceTally};
use crate::datasets::{DatasetKind, DatasetSnapshot};
use crate::error::Result;
use crate::filters::FilterState;
use crate::helpers::frame::maintenance_frame;
use crate::pages::{take, MetricCard, PageView};

pub fn render(snapshot: &DatasetSnapshot, filters: &FilterState) -> Result<PageView> {
    let mut view = PageView::new(filters.page);

    let Some(tallies) = take(&snapshot.maintenance, DatasetKind::Maintenance, &mut view) else {
        return Ok(view);
    };

    for status in MaintenanceStatus::ALL {
        view.cards.push(MetricCard::new(
            status.label(),
            tally_count(tallies, status).to_string(),
        ));
    }

    let colors: Vec<(&str, &str)> = MaintenanceStatus::ALL
        .iter()
        .map(|status| (status.as_str(), status.color()))
        .collect();
    view.charts.push(
        ChartSpec::pie(
            "Maintenance Tasks by Status",
            &maintenance_frame(tallies)?,
            ColumnRoles {
                category: "status",
                value: Some("count"),
                series: None,
            },
        )?
        .donut()
        .with_category_colors(&colors),
    );

    Ok(view)
}

/// First tally for a status, defaulting to zero when the feed omits it.
fn tally_count(tallies: &[MaintenanceTally], status: MaintenanceStatus) -> u32 {
    tallies
        .iter()
        .find(|tally| tally.status == status)
        .map(|tally| tally.count)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::DashboardPage;
    use crate::pages::fixture_snapshot;
    use std::sync::Arc;

    #[test]
    fn one_card_per_status_in_fixed_order() {
        let view =
            render(&fixture_snapshot(), &FilterState::new(DashboardPage::Maintenance)).unwrap();
        let cards: Vec<(&str, &str)> = view
            .cards
            .iter()
            .map(|c| (c.label.as_str(), c.value.as_str()))
            .collect();
        assert_eq!(
            cards,
            vec![
                ("Open Tasks", "8"),
                ("In Progress", "12"),
                ("Completed", "45"),
                ("Cancelled", "3"),
            ]
        );
    }

    #[test]
    fn missing_status_row_defaults_to_zero() {
        let mut snapshot = fixture_snapshot();
        let trimmed: Vec<MaintenanceTally> = snapshot
            .maintenance
            .as_ref()
            .unwrap()
            .iter()
            .filter(|t| t.status != MaintenanceStatus::Open)
            .cloned()
            .collect();
        snapshot.maintenance = Ok(Arc::new(trimmed));

        let view = render(&snapshot, &FilterState::new(DashboardPage::Maintenance)).unwrap();
        assert_eq!(view.cards[0].label, "Open Tasks");
        assert_eq!(view.cards[0].value, "0");
        assert_eq!(view.cards.len(), 4);
        assert!(view.notices.is_empty());
    }

    #[test]
    fn duplicate_status_rows_read_the_first() {
        let tallies = vec![
            MaintenanceTally {
                status: MaintenanceStatus::Open,
                count: 8,
            },
            MaintenanceTally {
                status: MaintenanceStatus::Open,
                count: 99,
            },
        ];
        assert_eq!(tally_count(&tallies, MaintenanceStatus::Open), 8);
    }

    #[test]
    fn donut_uses_the_fixed_status_colors() {
        let view =
            render(&fixture_snapshot(), &FilterState::new(DashboardPage::Maintenance)).unwrap();
        let pie = &view.charts[0];
        assert!(pie.donut);
        assert_eq!(
            pie.categories,
            vec!["OPEN", "IN_PROGRESS", "COMPLETED", "CANCELLED"]
        );
        assert_eq!(
            pie.colors,
            Some(vec![
                "#EF4444".to_string(),
                "#F59E0B".to_string(),
                "#10B981".to_string(),
                "#6B7280".to_string(),
            ])
        );
    }
}
