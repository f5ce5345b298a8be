//! Property listing page: multiselect-filtered table plus per-property
//! unit and city breakdowns. Every widget reads the filtered subset only.

use polars::prelude::{AnyValue, DataFrame};

use crate::charts::{ChartSpec, ColumnRoles};
use crate::datasets::model::Property;
use crate::datasets::{DatasetKind, DatasetSnapshot};
use crate::error::Result;
use crate::filters::{type_options, FilterState};
use crate::helpers::frame::properties_frame;
use crate::pages::{take, PageView, TableView};

/// Qualitative palette for per-type bar coloring, assigned to types in
/// first-appearance order.
const TYPE_PALETTE: [&str; 4] = ["#7F3C8D", "#11A579", "#3969AC", "#F2B701"];

pub fn render(snapshot: &DatasetSnapshot, filters: &FilterState) -> Result<PageView> {
    let mut view = PageView::new(filters.page);

    let Some(properties) = take(&snapshot.properties, DatasetKind::Properties, &mut view) else {
        return Ok(view);
    };

    let filtered: Vec<Property> = properties
        .iter()
        .filter(|p| filters.matches(p))
        .cloned()
        .collect();
    let df = properties_frame(&filtered)?;

    view.table = Some(table_from_frame(&df)?);

    let type_colors: Vec<(&str, &str)> = type_options(&filtered)
        .into_iter()
        .enumerate()
        .map(|(i, kind)| (kind.as_str(), TYPE_PALETTE[i % TYPE_PALETTE.len()]))
        .collect();
    let name_colors: Vec<(&str, &str)> = filtered
        .iter()
        .map(|p| {
            let color = type_colors
                .iter()
                .find(|(kind, _)| *kind == p.kind.as_str())
                .map(|(_, color)| *color)
                .unwrap_or(TYPE_PALETTE[0]);
            (p.name.as_str(), color)
        })
        .collect();

    view.charts.push(
        ChartSpec::bar(
            "Units by Property",
            &df,
            ColumnRoles {
                category: "name",
                value: Some("units"),
                series: None,
            },
        )?
        .with_category_colors(&name_colors),
    );
    view.charts.push(ChartSpec::pie(
        "Properties by City",
        &df,
        ColumnRoles {
            category: "city",
            value: None,
            series: None,
        },
    )?);

    Ok(view)
}

/// Project a frame into display strings, one row per property.
fn table_from_frame(df: &DataFrame) -> Result<TableView> {
    let columns: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    let mut rows = Vec::with_capacity(df.height());
    for index in 0..df.height() {
        let mut row = Vec::with_capacity(columns.len());
        for column in df.get_columns() {
            let value = column.get(index)?;
            row.push(match value {
                AnyValue::String(s) => s.to_string(),
                AnyValue::StringOwned(s) => s.to_string(),
                other => other.to_string(),
            });
        }
        rows.push(row);
    }
    Ok(TableView { columns, rows })
}
