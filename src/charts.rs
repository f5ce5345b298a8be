//! Chart adapter: turns a DataFrame plus a column-role mapping into a
//! renderer-agnostic chart specification.
//!
//! Category order is always the DataFrame row order. Nothing here sorts,
//! so month axes stay chronological as long as the provider hands rows
//! over in chronological order.

use polars::prelude::DataFrame;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::Result;
use crate::helpers::frame::{f64_values, str_values};

/// Fallback slice color when a fixed color map misses a category.
const NEUTRAL_COLOR: &str = "#6B7280";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Pie,
    Bar,
    GroupedBar,
    Line,
}

/// Which DataFrame columns feed the chart.
///
/// `value: None` means "count rows per category" (the pie-of-names case).
/// `series: Some` splits rows into one series per distinct tag, aligned on
/// the shared category axis with zero fill for missing combinations.
#[derive(Debug, Clone, Copy)]
pub struct ColumnRoles<'a> {
    pub category: &'a str,
    pub value: Option<&'a str>,
    pub series: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ChartSeries {
    pub name: String,
    pub values: Vec<f64>,
}

/// One chart, fully resolved: categories, numeric series and presentation
/// hints. Serializes into the page render tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    pub categories: Vec<String>,
    pub series: Vec<ChartSeries>,
    /// One color per category (pies, single-series bars) or per series
    /// (grouped bars, multi-series lines), in the same order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub donut: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub smooth: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub percent_axis: bool,
}

impl ChartSpec {
    /// Build a chart from a frame. Duplicate categories within a series are
    /// summed; without a value column every row weighs 1.0 (a row count).
    pub fn from_frame(
        kind: ChartKind,
        title: &str,
        df: &DataFrame,
        roles: ColumnRoles<'_>,
    ) -> Result<Self> {
        let row_categories = str_values(df, roles.category)?;
        let weights = match roles.value {
            Some(column) => f64_values(df, column)?,
            None => vec![1.0; row_categories.len()],
        };
        let series_name = roles.value.unwrap_or("count");

        let mut categories: Vec<String> = Vec::new();
        for category in &row_categories {
            if !categories.contains(category) {
                categories.push(category.clone());
            }
        }

        let series = match roles.series {
            None => {
                let mut values = vec![0.0; categories.len()];
                for (category, weight) in row_categories.iter().zip(&weights) {
                    let index = categories.iter().position(|c| c == category).unwrap();
                    values[index] += weight;
                }
                vec![ChartSeries {
                    name: series_name.to_string(),
                    values,
                }]
            }
            Some(column) => {
                let tags = str_values(df, column)?;
                let mut series: Vec<ChartSeries> = Vec::new();
                for ((category, tag), weight) in
                    row_categories.iter().zip(&tags).zip(&weights)
                {
                    if !series.iter().any(|s| s.name == *tag) {
                        series.push(ChartSeries {
                            name: tag.clone(),
                            values: vec![0.0; categories.len()],
                        });
                    }
                    let category_index =
                        categories.iter().position(|c| c == category).unwrap();
                    let entry = series.iter_mut().find(|s| s.name == *tag).unwrap();
                    entry.values[category_index] += weight;
                }
                series
            }
        };

        Ok(Self {
            kind,
            title: title.to_string(),
            categories,
            series,
            colors: None,
            donut: false,
            smooth: false,
            percent_axis: false,
        })
    }

    pub fn pie(title: &str, df: &DataFrame, roles: ColumnRoles<'_>) -> Result<Self> {
        Self::from_frame(ChartKind::Pie, title, df, roles)
    }

    pub fn bar(title: &str, df: &DataFrame, roles: ColumnRoles<'_>) -> Result<Self> {
        Self::from_frame(ChartKind::Bar, title, df, roles)
    }

    pub fn grouped_bar(title: &str, df: &DataFrame, roles: ColumnRoles<'_>) -> Result<Self> {
        Self::from_frame(ChartKind::GroupedBar, title, df, roles)
    }

    pub fn line(title: &str, df: &DataFrame, roles: ColumnRoles<'_>) -> Result<Self> {
        Self::from_frame(ChartKind::Line, title, df, roles)
    }

    pub fn donut(mut self) -> Self {
        self.donut = true;
        self
    }

    pub fn smooth(mut self) -> Self {
        self.smooth = true;
        self
    }

    pub fn percent_axis(mut self) -> Self {
        self.percent_axis = true;
        self
    }

    /// Fix slice/bar colors by category name.
    pub fn with_category_colors(mut self, map: &[(&str, &str)]) -> Self {
        let colors = self
            .categories
            .iter()
            .map(|category| lookup_color(map, category))
            .collect();
        self.colors = Some(colors);
        self
    }

    /// Fix line/group colors by series name.
    pub fn with_series_colors(mut self, map: &[(&str, &str)]) -> Self {
        let colors = self
            .series
            .iter()
            .map(|series| lookup_color(map, &series.name))
            .collect();
        self.colors = Some(colors);
        self
    }
}

fn lookup_color(map: &[(&str, &str)], name: &str) -> String {
    map.iter()
        .find(|(key, _)| *key == name)
        .map(|(_, color)| (*color).to_string())
        .unwrap_or_else(|| NEUTRAL_COLOR.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasets::fixtures;
    use crate::helpers::frame::{
        expenses_frame, occupancy_frame, payments_frame, properties_frame, stack, tag_column,
    };

    #[test]
    fn counts_rows_per_category_when_no_value_column() {
        let df = properties_frame(&fixtures::properties()).unwrap();
        let chart = ChartSpec::pie(
            "Property Distribution by Type",
            &df,
            ColumnRoles {
                category: "type",
                value: None,
                series: None,
            },
        )
        .unwrap()
        .donut();

        assert_eq!(
            chart.categories,
            vec!["RESIDENTIAL", "COMMERCIAL", "INDUSTRIAL", "LAND"]
        );
        assert_eq!(chart.series.len(), 1);
        assert_eq!(chart.series[0].name, "count");
        assert_eq!(chart.series[0].values, vec![2.0, 1.0, 1.0, 1.0]);
        assert!(chart.donut);
    }

    #[test]
    fn sums_duplicate_categories() {
        let df = expenses_frame(&fixtures::expenses()).unwrap();
        let chart = ChartSpec::pie(
            "Expense Breakdown by Category",
            &df,
            ColumnRoles {
                category: "category",
                value: Some("amount"),
                series: None,
            },
        )
        .unwrap();

        assert_eq!(
            chart.categories,
            vec!["MAINTENANCE", "UTILITY", "INSURANCE"]
        );
        assert_eq!(chart.series[0].values, vec![23200.0, 20300.0, 13500.0]);
    }

    #[test]
    fn category_order_is_row_order_never_lexicographic() {
        let df = payments_frame(&fixtures::payments()).unwrap();
        let chart = ChartSpec::line(
            "Revenue",
            &df,
            ColumnRoles {
                category: "month",
                value: Some("amount"),
                series: None,
            },
        )
        .unwrap();

        assert_eq!(chart.categories, vec!["Jan", "Feb", "Mar", "Apr", "May"]);
        assert_eq!(
            chart.series[0].values,
            vec![45000.0, 47500.0, 46800.0, 48200.0, 49100.0]
        );
    }

    #[test]
    fn series_role_splits_rows_and_aligns_on_categories() {
        let revenue = tag_column(
            payments_frame(&fixtures::payments()).unwrap(),
            "type",
            "Revenue",
        )
        .unwrap();
        let expense = tag_column(
            expenses_frame(&fixtures::expenses()).unwrap(),
            "type",
            "Expense",
        )
        .unwrap();
        let combined = stack(&revenue, &expense).unwrap();

        let chart = ChartSpec::grouped_bar(
            "Financial Overview",
            &combined,
            ColumnRoles {
                category: "month",
                value: Some("amount"),
                series: Some("type"),
            },
        )
        .unwrap()
        .with_series_colors(&[("Revenue", "#10B981"), ("Expense", "#EF4444")]);

        assert_eq!(chart.categories, vec!["Jan", "Feb", "Mar", "Apr", "May"]);
        assert_eq!(chart.series.len(), 2);
        assert_eq!(chart.series[0].name, "Revenue");
        assert_eq!(chart.series[0].values[4], 49100.0);
        assert_eq!(chart.series[1].name, "Expense");
        assert_eq!(chart.series[1].values[0], 12000.0);
        assert_eq!(
            chart.colors,
            Some(vec!["#10B981".to_string(), "#EF4444".to_string()])
        );
    }

    #[test]
    fn category_colors_follow_category_order_with_neutral_fallback() {
        let df = properties_frame(&fixtures::properties()).unwrap();
        let chart = ChartSpec::bar(
            "Property Status",
            &df,
            ColumnRoles {
                category: "status",
                value: None,
                series: None,
            },
        )
        .unwrap()
        .with_category_colors(&[("ACTIVE", "#10B981"), ("MAINTENANCE", "#F59E0B")]);

        assert_eq!(
            chart.categories,
            vec!["ACTIVE", "MAINTENANCE", "LISTED_FOR_SALE"]
        );
        assert_eq!(
            chart.colors,
            Some(vec![
                "#10B981".to_string(),
                "#F59E0B".to_string(),
                NEUTRAL_COLOR.to_string(),
            ])
        );
    }

    #[test]
    fn presentation_flags_default_off_and_skip_serialization() {
        let df = occupancy_frame(&fixtures::occupancy()).unwrap();
        let chart = ChartSpec::line(
            "Occupancy Rate Trend",
            &df,
            ColumnRoles {
                category: "month",
                value: Some("rate"),
                series: None,
            },
        )
        .unwrap();
        let json = serde_json::to_value(&chart).unwrap();
        assert!(json.get("smooth").is_none());
        assert!(json.get("percent_axis").is_none());

        let styled = chart.smooth().percent_axis();
        let json = serde_json::to_value(&styled).unwrap();
        assert_eq!(json["smooth"], true);
        assert_eq!(json["percent_axis"], true);
    }
}
