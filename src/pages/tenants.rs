//! Tenant analytics: portfolio-wide tenant counts and lease lengths.

use crate::charts::{ChartSpec, ColumnRoles};
use crate::datasets::model::TenantSummary;
use crate::datasets::{DatasetKind, DatasetSnapshot};
use crate::error::Result;
use crate::filters::FilterState;
use crate::format::format_percent;
use crate::helpers::frame::tenants_frame;
use crate::pages::{mean, take, MetricCard, PageView};

pub fn render(snapshot: &DatasetSnapshot, filters: &FilterState) -> Result<PageView> {
    let mut view = PageView::new(filters.page);

    if let Some(tenants) = take(&snapshot.tenants, DatasetKind::Tenants, &mut view) {
        let total: u32 = tenants.iter().map(|t| t.count).sum();
        view.cards
            .push(MetricCard::new("Total Tenants", total.to_string()));

        // Vacant properties report a zero lease length; averaging them in
        // would drag the metric down, so they are excluded.
        let leased: Vec<TenantSummary> = tenants.iter().filter(|t| t.count > 0).cloned().collect();
        let avg_lease = mean(leased.iter().map(|t| t.avg_lease_length));
        view.cards.push(MetricCard::new(
            "Avg Lease Length",
            format!("{:.1} months", avg_lease),
        ));

        let all = tenants_frame(tenants)?;
        let occupied = tenants_frame(&leased)?;
        view.charts.push(ChartSpec::bar(
            "Tenant Count by Property",
            &all,
            ColumnRoles {
                category: "property",
                value: Some("count"),
                series: None,
            },
        )?);
        view.charts.push(ChartSpec::bar(
            "Average Lease Length by Property",
            &occupied,
            ColumnRoles {
                category: "property",
                value: Some("avg_lease_length"),
                series: None,
            },
        )?);
    }

    if let Some(occupancy) = take(&snapshot.occupancy, DatasetKind::Occupancy, &mut view) {
        if let Some(latest) = occupancy.last() {
            view.cards
                .push(MetricCard::new("Occupancy Rate", format_percent(latest.rate)));
        }
    }

    Ok(view)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DashboardError;
    use crate::filters::DashboardPage;
    use crate::pages::fixture_snapshot;

    #[test]
    fn cards_summarize_the_tenant_rollup() {
        let view = render(&fixture_snapshot(), &FilterState::new(DashboardPage::Tenants)).unwrap();
        assert_eq!(view.cards[0].label, "Total Tenants");
        assert_eq!(view.cards[0].value, "44");
        assert_eq!(view.cards[2].label, "Occupancy Rate");
        assert_eq!(view.cards[2].value, "96.0%");
    }

    #[test]
    fn avg_lease_length_excludes_vacant_properties() {
        let view = render(&fixture_snapshot(), &FilterState::new(DashboardPage::Tenants)).unwrap();
        // (12 + 24 + 6 + 36) / 4, not dragged to 15.6 by the vacant parcel.
        assert_eq!(view.cards[1].value, "19.5 months");
    }

    #[test]
    fn lease_length_chart_skips_vacant_properties_too() {
        let view = render(&fixture_snapshot(), &FilterState::new(DashboardPage::Tenants)).unwrap();
        let counts = &view.charts[0];
        assert_eq!(counts.categories.len(), 5);
        let leases = &view.charts[1];
        assert_eq!(leases.categories.len(), 4);
        assert!(!leases.categories.contains(&"Green Meadows".to_string()));
    }

    #[test]
    fn missing_occupancy_still_renders_tenant_widgets() {
        let mut snapshot = fixture_snapshot();
        snapshot.occupancy = Err(DashboardError::data_unavailable(
            DatasetKind::Occupancy,
            "timed out",
        ));
        let view = render(&snapshot, &FilterState::new(DashboardPage::Tenants)).unwrap();
        assert_eq!(view.cards.len(), 2);
        assert_eq!(view.charts.len(), 2);
        assert_eq!(view.notices.len(), 1);
    }
}
