//! Entity-slice to DataFrame conversions and tabular reshaping helpers.
//!
//! All aggregation here is order-preserving: group keys come out in
//! first-appearance order, never sorted, so month sequences chart in
//! chronological order.

use polars::prelude::*;

use crate::datasets::model::{
    ExpenseRecord, MaintenanceTally, OccupancyRecord, PaymentRecord, Property, TenantSummary,
};
use crate::error::Result;

pub fn properties_frame(rows: &[Property]) -> Result<DataFrame> {
    let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
    let names: Vec<String> = rows.iter().map(|r| r.name.clone()).collect();
    let kinds: Vec<String> = rows.iter().map(|r| r.kind.as_str().to_string()).collect();
    let statuses: Vec<String> = rows.iter().map(|r| r.status.as_str().to_string()).collect();
    let cities: Vec<String> = rows.iter().map(|r| r.city.clone()).collect();
    let units: Vec<i64> = rows.iter().map(|r| r.units as i64).collect();

    let df = DataFrame::new(vec![
        Series::new("id".into(), ids).into(),
        Series::new("name".into(), names).into(),
        Series::new("type".into(), kinds).into(),
        Series::new("status".into(), statuses).into(),
        Series::new("city".into(), cities).into(),
        Series::new("units".into(), units).into(),
    ])?;
    Ok(df)
}

pub fn payments_frame(rows: &[PaymentRecord]) -> Result<DataFrame> {
    let months: Vec<String> = rows.iter().map(|r| r.month.clone()).collect();
    let amounts: Vec<f64> = rows.iter().map(|r| r.amount).collect();
    let categories: Vec<String> = rows.iter().map(|r| r.category.clone()).collect();

    let df = DataFrame::new(vec![
        Series::new("month".into(), months).into(),
        Series::new("amount".into(), amounts).into(),
        Series::new("category".into(), categories).into(),
    ])?;
    Ok(df)
}

pub fn expenses_frame(rows: &[ExpenseRecord]) -> Result<DataFrame> {
    let months: Vec<String> = rows.iter().map(|r| r.month.clone()).collect();
    let amounts: Vec<f64> = rows.iter().map(|r| r.amount).collect();
    let categories: Vec<String> = rows
        .iter()
        .map(|r| r.category.as_str().to_string())
        .collect();

    let df = DataFrame::new(vec![
        Series::new("month".into(), months).into(),
        Series::new("amount".into(), amounts).into(),
        Series::new("category".into(), categories).into(),
    ])?;
    Ok(df)
}

pub fn occupancy_frame(rows: &[OccupancyRecord]) -> Result<DataFrame> {
    let months: Vec<String> = rows.iter().map(|r| r.month.clone()).collect();
    let rates: Vec<f64> = rows.iter().map(|r| r.rate).collect();

    let df = DataFrame::new(vec![
        Series::new("month".into(), months).into(),
        Series::new("rate".into(), rates).into(),
    ])?;
    Ok(df)
}

pub fn maintenance_frame(rows: &[MaintenanceTally]) -> Result<DataFrame> {
    let statuses: Vec<String> = rows.iter().map(|r| r.status.as_str().to_string()).collect();
    let counts: Vec<f64> = rows.iter().map(|r| r.count as f64).collect();

    let df = DataFrame::new(vec![
        Series::new("status".into(), statuses).into(),
        Series::new("count".into(), counts).into(),
    ])?;
    Ok(df)
}

pub fn tenants_frame(rows: &[TenantSummary]) -> Result<DataFrame> {
    let properties: Vec<String> = rows.iter().map(|r| r.property.clone()).collect();
    let counts: Vec<f64> = rows.iter().map(|r| r.count as f64).collect();
    let leases: Vec<f64> = rows.iter().map(|r| r.avg_lease_length).collect();

    let df = DataFrame::new(vec![
        Series::new("property".into(), properties).into(),
        Series::new("count".into(), counts).into(),
        Series::new("avg_lease_length".into(), leases).into(),
    ])?;
    Ok(df)
}

/// Append a constant string column, e.g. a series discriminator before
/// stacking revenue and expense frames.
pub fn tag_column(mut df: DataFrame, name: &str, value: &str) -> Result<DataFrame> {
    let tags = vec![value.to_string(); df.height()];
    df.with_column(Series::new(name.into(), tags))?;
    Ok(df)
}

/// Stack two frames with identical schemas, left rows first.
pub fn stack(top: &DataFrame, bottom: &DataFrame) -> Result<DataFrame> {
    Ok(top.vstack(bottom)?)
}

/// Count rows per distinct `key` value. Output columns: `key`, "count".
/// Keys keep first-appearance order.
pub fn count_by(df: &DataFrame, key: &str) -> Result<DataFrame> {
    let counted = df
        .clone()
        .lazy()
        .group_by_stable([col(key)])
        .agg([len().cast(DataType::Float64).alias("count")])
        .collect()?;
    Ok(counted)
}

/// Sum `value` per distinct `key` value, first-appearance key order.
pub fn sum_by(df: &DataFrame, key: &str, value: &str) -> Result<DataFrame> {
    let summed = df
        .clone()
        .lazy()
        .group_by_stable([col(key)])
        .agg([col(value).sum().alias(value)])
        .collect()?;
    Ok(summed)
}

/// Read a string column as owned values, null-safe.
pub fn str_values(df: &DataFrame, name: &str) -> Result<Vec<String>> {
    let column = df.column(name)?.as_materialized_series().clone();
    let values = column
        .str()?
        .into_iter()
        .map(|v| v.unwrap_or("").to_string())
        .collect();
    Ok(values)
}

/// Read a numeric column as f64 values, casting where necessary.
pub fn f64_values(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let column = df
        .column(name)?
        .as_materialized_series()
        .cast(&DataType::Float64)?;
    let values = column.f64()?.into_iter().map(|v| v.unwrap_or(0.0)).collect();
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasets::fixtures;

    #[test]
    fn frames_preserve_input_row_order() {
        let df = payments_frame(&fixtures::payments()).unwrap();
        assert_eq!(df.height(), 5);
        let months = str_values(&df, "month").unwrap();
        assert_eq!(months, vec!["Jan", "Feb", "Mar", "Apr", "May"]);
    }

    #[test]
    fn tag_and_stack_produce_a_discriminated_frame() {
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

        assert_eq!(combined.height(), 10);
        let tags = str_values(&combined, "type").unwrap();
        assert_eq!(tags.iter().filter(|t| *t == "Revenue").count(), 5);
        assert_eq!(tags.iter().filter(|t| *t == "Expense").count(), 5);
    }

    #[test]
    fn count_by_keeps_first_appearance_order() {
        let df = properties_frame(&fixtures::properties()).unwrap();
        let counted = count_by(&df, "status").unwrap();
        assert_eq!(
            str_values(&counted, "status").unwrap(),
            vec!["ACTIVE", "MAINTENANCE", "LISTED_FOR_SALE"]
        );
        assert_eq!(f64_values(&counted, "count").unwrap(), vec![3.0, 1.0, 1.0]);
    }

    #[test]
    fn sum_by_totals_per_key() {
        let df = expenses_frame(&fixtures::expenses()).unwrap();
        let summed = sum_by(&df, "category", "amount").unwrap();
        assert_eq!(
            str_values(&summed, "category").unwrap(),
            vec!["MAINTENANCE", "UTILITY", "INSURANCE"]
        );
        assert_eq!(
            f64_values(&summed, "amount").unwrap(),
            vec![23200.0, 20300.0, 13500.0]
        );
    }

    #[test]
    fn f64_values_casts_integer_columns() {
        let df = properties_frame(&fixtures::properties()).unwrap();
        let units = f64_values(&df, "units").unwrap();
        assert_eq!(units, vec![24.0, 12.0, 8.0, 5.0, 0.0]);
    }
}
