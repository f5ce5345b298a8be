//! Portfolio overview: headline counts, distribution charts and the
//! revenue-vs-expense grouped bar.

use crate::charts::{ChartSpec, ColumnRoles};
use crate::datasets::{DatasetKind, DatasetSnapshot};
use crate::error::Result;
use crate::filters::FilterState;
use crate::format::{format_currency, format_percent};
use crate::helpers::frame::{
    count_by, expenses_frame, payments_frame, properties_frame, stack, tag_column,
};
use crate::pages::{mean, take, MetricCard, PageView};

const REVENUE_COLOR: &str = "#10B981";
const EXPENSE_COLOR: &str = "#EF4444";

pub fn render(snapshot: &DatasetSnapshot, filters: &FilterState) -> Result<PageView> {
    let mut view = PageView::new(filters.page);

    if let Some(properties) = take(&snapshot.properties, DatasetKind::Properties, &mut view) {
        view.cards.push(MetricCard::new(
            "Total Properties",
            properties.len().to_string(),
        ));
        let total_units: u32 = properties.iter().map(|p| p.units).sum();
        view.cards
            .push(MetricCard::new("Total Units", total_units.to_string()));

        let df = properties_frame(properties)?;
        view.charts.push(
            ChartSpec::pie(
                "Property Distribution by Type",
                &df,
                ColumnRoles {
                    category: "type",
                    value: None,
                    series: None,
                },
            )?
            .donut(),
        );
        let by_status = count_by(&df, "status")?;
        view.charts.push(ChartSpec::bar(
            "Property Status",
            &by_status,
            ColumnRoles {
                category: "status",
                value: Some("count"),
                series: None,
            },
        )?);
    }

    if let Some(occupancy) = take(&snapshot.occupancy, DatasetKind::Occupancy, &mut view) {
        let avg = mean(occupancy.iter().map(|o| o.rate));
        view.cards
            .push(MetricCard::new("Avg Occupancy", format_percent(avg)));
    }

    let payments = take(&snapshot.payments, DatasetKind::Payments, &mut view);
    if let Some(payments) = payments {
        if let Some(latest) = payments.last() {
            view.cards.push(MetricCard::new(
                "Monthly Revenue",
                format_currency(latest.amount),
            ));
        }
    }

    // The grouped bar needs both financial datasets.
    if let (Some(payments), Some(expenses)) = (
        payments,
        take(&snapshot.expenses, DatasetKind::Expenses, &mut view),
    ) {
        let revenue = tag_column(payments_frame(payments)?, "type", "Revenue")?;
        let expense = tag_column(expenses_frame(expenses)?, "type", "Expense")?;
        let combined = stack(&revenue, &expense)?;
        view.charts.push(
            ChartSpec::grouped_bar(
                "Financial Overview",
                &combined,
                ColumnRoles {
                    category: "month",
                    value: Some("amount"),
                    series: Some("type"),
                },
            )?
            .with_series_colors(&[("Revenue", REVENUE_COLOR), ("Expense", EXPENSE_COLOR)]),
        );
    }

    Ok(view)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DashboardError;
    use crate::filters::DashboardPage;
    use crate::pages::fixture_snapshot;

    fn card<'a>(view: &'a PageView, label: &str) -> Option<&'a MetricCard> {
        view.cards.iter().find(|c| c.label == label)
    }

    #[test]
    fn renders_headline_cards_from_fixtures() {
        let view = render(&fixture_snapshot(), &FilterState::new(DashboardPage::Overview)).unwrap();
        assert_eq!(card(&view, "Total Properties").unwrap().value, "5");
        // Zero-unit land parcels still count toward the total.
        assert_eq!(card(&view, "Total Units").unwrap().value, "49");
        assert_eq!(card(&view, "Avg Occupancy").unwrap().value, "94.0%");
        assert_eq!(card(&view, "Monthly Revenue").unwrap().value, "$49,100.00");
    }

    #[test]
    fn renders_three_charts_with_chronological_months() {
        let view = render(&fixture_snapshot(), &FilterState::new(DashboardPage::Overview)).unwrap();
        assert_eq!(view.charts.len(), 3);
        let financial = &view.charts[2];
        assert_eq!(financial.title, "Financial Overview");
        assert_eq!(financial.categories, vec!["Jan", "Feb", "Mar", "Apr", "May"]);
        assert_eq!(financial.series[0].name, "Revenue");
        assert_eq!(financial.series[1].name, "Expense");
    }

    #[test]
    fn failing_payments_degrades_only_revenue_widgets() {
        let mut snapshot = fixture_snapshot();
        snapshot.payments = Err(DashboardError::data_unavailable(
            DatasetKind::Payments,
            "connection refused",
        ));

        let view = render(&snapshot, &FilterState::new(DashboardPage::Overview)).unwrap();
        assert!(card(&view, "Monthly Revenue").is_none());
        assert_eq!(view.cards.len(), 3);
        // The grouped bar is gone, the property charts survive.
        assert_eq!(view.charts.len(), 2);
        assert_eq!(view.notices.len(), 1);
        assert_eq!(view.notices[0].dataset, DatasetKind::Payments);
    }
}
