//! Financial analytics: revenue and expense totals, the month-by-month
//! comparison line and the expense category breakdown.

use crate::charts::{ChartSpec, ColumnRoles};
use crate::datasets::{DatasetKind, DatasetSnapshot};
use crate::error::Result;
use crate::filters::FilterState;
use crate::format::format_currency;
use crate::helpers::frame::{expenses_frame, payments_frame, stack, sum_by, tag_column};
use crate::pages::{take, MetricCard, PageView};

const REVENUE_COLOR: &str = "#10B981";
const EXPENSE_COLOR: &str = "#EF4444";

pub fn render(snapshot: &DatasetSnapshot, filters: &FilterState) -> Result<PageView> {
    let mut view = PageView::new(filters.page);

    let payments = take(&snapshot.payments, DatasetKind::Payments, &mut view);
    let expenses = take(&snapshot.expenses, DatasetKind::Expenses, &mut view);

    let revenue_total = payments.map(|rows| rows.iter().map(|p| p.amount).sum::<f64>());
    let expense_total = expenses.map(|rows| rows.iter().map(|e| e.amount).sum::<f64>());

    if let Some(total) = revenue_total {
        view.cards
            .push(MetricCard::new("Total Revenue", format_currency(total)));
    }
    if let Some(total) = expense_total {
        view.cards
            .push(MetricCard::new("Total Expenses", format_currency(total)));
    }
    if let (Some(revenue), Some(expense)) = (revenue_total, expense_total) {
        view.cards.push(MetricCard::new(
            "Net Income",
            format_currency(revenue - expense),
        ));
    }

    if let (Some(payments), Some(expenses)) = (payments, expenses) {
        let revenue = tag_column(payments_frame(payments)?, "type", "Revenue")?;
        let expense = tag_column(expenses_frame(expenses)?, "type", "Expenses")?;
        let combined = stack(&revenue, &expense)?;
        view.charts.push(
            ChartSpec::line(
                "Revenue vs Expenses",
                &combined,
                ColumnRoles {
                    category: "month",
                    value: Some("amount"),
                    series: Some("type"),
                },
            )?
            .with_series_colors(&[("Revenue", REVENUE_COLOR), ("Expenses", EXPENSE_COLOR)]),
        );
    }

    if let Some(expenses) = expenses {
        let by_category = sum_by(&expenses_frame(expenses)?, "category", "amount")?;
        view.charts.push(ChartSpec::pie(
            "Expense Breakdown by Category",
            &by_category,
            ColumnRoles {
                category: "category",
                value: Some("amount"),
                series: None,
            },
        )?);
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
    fn totals_and_net_income_from_fixtures() {
        let view = render(&fixture_snapshot(), &FilterState::new(DashboardPage::Financial)).unwrap();
        assert_eq!(view.cards[0].value, "$236,600.00");
        assert_eq!(view.cards[1].value, "$57,000.00");
        assert_eq!(view.cards[2].label, "Net Income");
        assert_eq!(view.cards[2].value, "$179,600.00");
    }

    #[test]
    fn comparison_line_keeps_months_chronological() {
        let view = render(&fixture_snapshot(), &FilterState::new(DashboardPage::Financial)).unwrap();
        let line = &view.charts[0];
        assert_eq!(line.categories, vec!["Jan", "Feb", "Mar", "Apr", "May"]);
        assert_eq!(line.series[0].name, "Revenue");
        assert_eq!(line.series[1].name, "Expenses");
        assert_eq!(
            line.colors,
            Some(vec![REVENUE_COLOR.to_string(), EXPENSE_COLOR.to_string()])
        );
    }

    #[test]
    fn expense_pie_sums_per_category() {
        let view = render(&fixture_snapshot(), &FilterState::new(DashboardPage::Financial)).unwrap();
        let pie = &view.charts[1];
        assert_eq!(pie.categories, vec!["MAINTENANCE", "UTILITY", "INSURANCE"]);
        assert_eq!(pie.series[0].values, vec![23200.0, 20300.0, 13500.0]);
    }

    #[test]
    fn failing_expenses_keeps_the_revenue_card() {
        let mut snapshot = fixture_snapshot();
        snapshot.expenses = Err(DashboardError::data_unavailable(
            DatasetKind::Expenses,
            "bad gateway",
        ));
        let view = render(&snapshot, &FilterState::new(DashboardPage::Financial)).unwrap();
        assert_eq!(view.cards.len(), 1);
        assert_eq!(view.cards[0].label, "Total Revenue");
        assert!(view.charts.is_empty());
        assert_eq!(view.notices.len(), 1);
    }
}
