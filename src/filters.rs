use chrono::{Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::str::FromStr;
use utoipa::ToSchema;

use crate::datasets::model::{Property, PropertyStatus, PropertyType};
use crate::error::{DashboardError, Result};
use crate::schemas::PageQuery;

/// The six dashboard pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DashboardPage {
    Overview,
    Properties,
    Tenants,
    Financial,
    Maintenance,
    Occupancy,
}

impl DashboardPage {
    pub const ALL: [DashboardPage; 6] = [
        DashboardPage::Overview,
        DashboardPage::Properties,
        DashboardPage::Tenants,
        DashboardPage::Financial,
        DashboardPage::Maintenance,
        DashboardPage::Occupancy,
    ];

    /// URL path segment of the page.
    pub fn slug(&self) -> &'static str {
        match self {
            DashboardPage::Overview => "overview",
            DashboardPage::Properties => "properties",
            DashboardPage::Tenants => "tenants",
            DashboardPage::Financial => "financial",
            DashboardPage::Maintenance => "maintenance",
            DashboardPage::Occupancy => "occupancy",
        }
    }

    /// Page header shown at the top of the rendered view.
    pub fn title(&self) -> &'static str {
        match self {
            DashboardPage::Overview => "Real Estate Portfolio Overview",
            DashboardPage::Properties => "Property Analytics",
            DashboardPage::Tenants => "Tenant Analytics",
            DashboardPage::Financial => "Financial Analytics",
            DashboardPage::Maintenance => "Maintenance Analytics",
            DashboardPage::Occupancy => "Occupancy Analytics",
        }
    }
}

impl std::fmt::Display for DashboardPage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for DashboardPage {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        DashboardPage::ALL
            .into_iter()
            .find(|page| page.slug() == s)
            .ok_or_else(|| format!("unknown page '{}'", s))
    }
}

/// User-selected render state for one request: the page, a date range and
/// the per-page multiselects. Nothing here outlives the request.
///
/// `None` for a multiselect means "all options selected"; `Some` with an
/// empty set is a deliberate empty selection and renders empty widgets.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    pub page: DashboardPage,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub property_types: Option<HashSet<PropertyType>>,
    pub property_statuses: Option<HashSet<PropertyStatus>>,
}

impl FilterState {
    /// Default state for a page: [Jan 1 of the current year, today], all
    /// filter options selected.
    pub fn new(page: DashboardPage) -> Self {
        let today = Utc::now().date_naive();
        let year_start = NaiveDate::from_ymd_opt(today.year(), 1, 1).unwrap();
        Self {
            page,
            start_date: year_start,
            end_date: today,
            property_types: None,
            property_statuses: None,
        }
    }

    /// Build filter state from request query parameters, applying the
    /// defaults above for anything absent.
    pub fn from_query(page: DashboardPage, query: &PageQuery) -> Result<Self> {
        let mut state = Self::new(page);

        if let Some(start) = query.start_date {
            state.start_date = start;
        }
        if let Some(end) = query.end_date {
            state.end_date = end;
        }
        if state.start_date > state.end_date {
            return Err(DashboardError::InvalidFilter(format!(
                "start_date {} is after end_date {}",
                state.start_date, state.end_date
            )));
        }

        state.property_types = parse_selection(query.types.as_deref())?;
        state.property_statuses = parse_selection(query.statuses.as_deref())?;

        Ok(state)
    }

    /// Intersection semantics: a property passes only if it matches every
    /// active multiselect.
    pub fn matches(&self, property: &Property) -> bool {
        let type_ok = self
            .property_types
            .as_ref()
            .map_or(true, |set| set.contains(&property.kind));
        let status_ok = self
            .property_statuses
            .as_ref()
            .map_or(true, |set| set.contains(&property.status));
        type_ok && status_ok
    }
}

/// Parse a comma-separated multiselect parameter. An absent parameter is
/// "all selected" (`None`); a present-but-empty value is an explicit empty
/// selection.
fn parse_selection<T>(raw: Option<&str>) -> Result<Option<HashSet<T>>>
where
    T: FromStr<Err = String> + Eq + std::hash::Hash,
{
    let Some(raw) = raw else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(Some(HashSet::new()));
    }
    trimmed
        .split(',')
        .map(|item| {
            item.trim()
                .parse::<T>()
                .map_err(DashboardError::InvalidFilter)
        })
        .collect::<Result<HashSet<T>>>()
        .map(Some)
}

/// Distinct property types present in a dataset, in first-appearance order.
/// This is the option universe for the type multiselect.
pub fn type_options(properties: &[Property]) -> Vec<PropertyType> {
    let mut options = Vec::new();
    for property in properties {
        if !options.contains(&property.kind) {
            options.push(property.kind);
        }
    }
    options
}

/// Distinct property statuses present in a dataset, in first-appearance
/// order.
pub fn status_options(properties: &[Property]) -> Vec<PropertyStatus> {
    let mut options = Vec::new();
    for property in properties {
        if !options.contains(&property.status) {
            options.push(property.status);
        }
    }
    options
}
