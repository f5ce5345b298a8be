//! Occupancy analytics: current and average rate plus the smoothed trend.

use crate::charts::{ChartSpec, ColumnRoles};
use crate::datasets::{DatasetKind, DatasetSnapshot};
use crate::error::Result;
use crate::filters::FilterState;
use crate::format::format_percent;
use crate::helpers::frame::occupancy_frame;
use crate::pages::{mean, take, MetricCard, PageView};

const TREND_COLOR: &str = "#2563EB";

pub fn render(snapshot: &DatasetSnapshot, filters: &FilterState) -> Result<PageView> {
    let mut view = PageView::new(filters.page);

    let Some(occupancy) = take(&snapshot.occupancy, DatasetKind::Occupancy, &mut view) else {
        return Ok(view);
    };

    if let Some(latest) = occupancy.last() {
        view.cards.push(MetricCard::new(
            "Current Occupancy Rate",
            format_percent(latest.rate),
        ));
    }
    view.cards.push(MetricCard::new(
        "Average Occupancy Rate",
        format_percent(mean(occupancy.iter().map(|o| o.rate))),
    ));

    view.charts.push(
        ChartSpec::line(
            "Occupancy Rate Trend",
            &occupancy_frame(occupancy)?,
            ColumnRoles {
                category: "month",
                value: Some("rate"),
                series: None,
            },
        )?
        .smooth()
        .percent_axis()
        .with_series_colors(&[("rate", TREND_COLOR)]),
    );

    Ok(view)
}
