use serde::{Deserialize, Serialize};
use std::str::FromStr;
use utoipa::ToSchema;

/// Property asset class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PropertyType {
    Residential,
    Commercial,
    Industrial,
    Land,
}

impl PropertyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Residential => "RESIDENTIAL",
            PropertyType::Commercial => "COMMERCIAL",
            PropertyType::Industrial => "INDUSTRIAL",
            PropertyType::Land => "LAND",
        }
    }
}

impl FromStr for PropertyType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "RESIDENTIAL" => Ok(PropertyType::Residential),
            "COMMERCIAL" => Ok(PropertyType::Commercial),
            "INDUSTRIAL" => Ok(PropertyType::Industrial),
            "LAND" => Ok(PropertyType::Land),
            other => Err(format!("unknown property type '{}'", other)),
        }
    }
}

impl std::fmt::Display for PropertyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle status of a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PropertyStatus {
    Active,
    Maintenance,
    ListedForSale,
}

impl PropertyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyStatus::Active => "ACTIVE",
            PropertyStatus::Maintenance => "MAINTENANCE",
            PropertyStatus::ListedForSale => "LISTED_FOR_SALE",
        }
    }
}

impl FromStr for PropertyStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ACTIVE" => Ok(PropertyStatus::Active),
            "MAINTENANCE" => Ok(PropertyStatus::Maintenance),
            "LISTED_FOR_SALE" => Ok(PropertyStatus::ListedForSale),
            other => Err(format!("unknown property status '{}'", other)),
        }
    }
}

impl std::fmt::Display for PropertyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Expense category on an expense record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExpenseCategory {
    Maintenance,
    Utility,
    Insurance,
}

impl ExpenseCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpenseCategory::Maintenance => "MAINTENANCE",
            ExpenseCategory::Utility => "UTILITY",
            ExpenseCategory::Insurance => "INSURANCE",
        }
    }
}

/// Status of a maintenance task tally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MaintenanceStatus {
    Open,
    InProgress,
    Completed,
    Cancelled,
}

impl MaintenanceStatus {
    pub const ALL: [MaintenanceStatus; 4] = [
        MaintenanceStatus::Open,
        MaintenanceStatus::InProgress,
        MaintenanceStatus::Completed,
        MaintenanceStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MaintenanceStatus::Open => "OPEN",
            MaintenanceStatus::InProgress => "IN_PROGRESS",
            MaintenanceStatus::Completed => "COMPLETED",
            MaintenanceStatus::Cancelled => "CANCELLED",
        }
    }

    /// Card label for the maintenance page.
    pub fn label(&self) -> &'static str {
        match self {
            MaintenanceStatus::Open => "Open Tasks",
            MaintenanceStatus::InProgress => "In Progress",
            MaintenanceStatus::Completed => "Completed",
            MaintenanceStatus::Cancelled => "Cancelled",
        }
    }

    /// Fixed slice color for the status pie chart.
    pub fn color(&self) -> &'static str {
        match self {
            MaintenanceStatus::Open => "#EF4444",
            MaintenanceStatus::InProgress => "#F59E0B",
            MaintenanceStatus::Completed => "#10B981",
            MaintenanceStatus::Cancelled => "#6B7280",
        }
    }
}

/// A property in the portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Property {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: PropertyType,
    pub status: PropertyStatus,
    pub city: String,
    pub units: u32,
}

/// One month of rent revenue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PaymentRecord {
    pub month: String,
    pub amount: f64,
    pub category: String,
}

/// One expense line item, keyed by month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ExpenseRecord {
    pub month: String,
    pub amount: f64,
    pub category: ExpenseCategory,
}

/// Portfolio occupancy for one month. `rate` is a fraction in [0, 1],
/// never a raw percentage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OccupancyRecord {
    pub month: String,
    pub rate: f64,
}

/// Pre-aggregated count of maintenance tasks for one status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MaintenanceTally {
    pub status: MaintenanceStatus,
    pub count: u32,
}

/// Tenant counts per property. `property` references `Property::name`.
/// `avg_lease_length` is meaningless when `count` is zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TenantSummary {
    pub property: String,
    pub count: u32,
    pub avg_lease_length: f64,
}
