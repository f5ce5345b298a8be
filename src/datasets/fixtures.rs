use async_trait::async_trait;

use crate::datasets::model::{
    ExpenseCategory, ExpenseRecord, MaintenanceStatus, MaintenanceTally, OccupancyRecord,
    PaymentRecord, Property, PropertyStatus, PropertyType, TenantSummary,
};
use crate::datasets::DatasetSource;
use crate::error::Result;

/// Static in-memory dataset source for development and tests.
///
/// The records mirror the seed portfolio the live API serves, so pages
/// render identically against either source.
#[derive(Debug, Default, Clone)]
pub struct FixtureSource;

pub fn properties() -> Vec<Property> {
    vec![
        Property {
            id: 1,
            name: "Sunset Apartments".to_string(),
            kind: PropertyType::Residential,
            status: PropertyStatus::Active,
            city: "New York".to_string(),
            units: 24,
        },
        Property {
            id: 2,
            name: "Downtown Office Complex".to_string(),
            kind: PropertyType::Commercial,
            status: PropertyStatus::Active,
            city: "Chicago".to_string(),
            units: 12,
        },
        Property {
            id: 3,
            name: "Riverside Villas".to_string(),
            kind: PropertyType::Residential,
            status: PropertyStatus::Maintenance,
            city: "Miami".to_string(),
            units: 8,
        },
        Property {
            id: 4,
            name: "Tech Park".to_string(),
            kind: PropertyType::Industrial,
            status: PropertyStatus::Active,
            city: "San Francisco".to_string(),
            units: 5,
        },
        Property {
            id: 5,
            name: "Green Meadows".to_string(),
            kind: PropertyType::Land,
            status: PropertyStatus::ListedForSale,
            city: "Austin".to_string(),
            units: 0,
        },
    ]
}

pub fn payments() -> Vec<PaymentRecord> {
    [
        ("Jan", 45000.0),
        ("Feb", 47500.0),
        ("Mar", 46800.0),
        ("Apr", 48200.0),
        ("May", 49100.0),
    ]
    .into_iter()
    .map(|(month, amount)| PaymentRecord {
        month: month.to_string(),
        amount,
        category: "RENT".to_string(),
    })
    .collect()
}

pub fn expenses() -> Vec<ExpenseRecord> {
    [
        ("Jan", 12000.0, ExpenseCategory::Maintenance),
        ("Feb", 9500.0, ExpenseCategory::Utility),
        ("Mar", 11200.0, ExpenseCategory::Maintenance),
        ("Apr", 10800.0, ExpenseCategory::Utility),
        ("May", 13500.0, ExpenseCategory::Insurance),
    ]
    .into_iter()
    .map(|(month, amount, category)| ExpenseRecord {
        month: month.to_string(),
        amount,
        category,
    })
    .collect()
}

pub fn occupancy() -> Vec<OccupancyRecord> {
    [
        ("Jan", 0.92),
        ("Feb", 0.94),
        ("Mar", 0.95),
        ("Apr", 0.93),
        ("May", 0.96),
    ]
    .into_iter()
    .map(|(month, rate)| OccupancyRecord {
        month: month.to_string(),
        rate,
    })
    .collect()
}

pub fn maintenance() -> Vec<MaintenanceTally> {
    vec![
        MaintenanceTally {
            status: MaintenanceStatus::Open,
            count: 8,
        },
        MaintenanceTally {
            status: MaintenanceStatus::InProgress,
            count: 12,
        },
        MaintenanceTally {
            status: MaintenanceStatus::Completed,
            count: 45,
        },
        MaintenanceTally {
            status: MaintenanceStatus::Cancelled,
            count: 3,
        },
    ]
}

pub fn tenants() -> Vec<TenantSummary> {
    [
        ("Sunset Apartments", 22, 12.0),
        ("Downtown Office Complex", 10, 24.0),
        ("Riverside Villas", 7, 6.0),
        ("Tech Park", 5, 36.0),
        ("Green Meadows", 0, 0.0),
    ]
    .into_iter()
    .map(|(property, count, avg_lease_length)| TenantSummary {
        property: property.to_string(),
        count,
        avg_lease_length,
    })
    .collect()
}

#[async_trait]
impl DatasetSource for FixtureSource {
    async fn fetch_properties(&self) -> Result<Vec<Property>> {
        Ok(properties())
    }

    async fn fetch_payments(&self) -> Result<Vec<PaymentRecord>> {
        Ok(payments())
    }

    async fn fetch_expenses(&self) -> Result<Vec<ExpenseRecord>> {
        Ok(expenses())
    }

    async fn fetch_occupancy(&self) -> Result<Vec<OccupancyRecord>> {
        Ok(occupancy())
    }

    async fn fetch_maintenance(&self) -> Result<Vec<MaintenanceTally>> {
        Ok(maintenance())
    }

    async fn fetch_tenants(&self) -> Result<Vec<TenantSummary>> {
        Ok(tenants())
    }
}
