use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tracing::debug;

use crate::datasets::{DataProvider, FixtureSource};
use crate::filters::{DashboardPage, FilterState};
use crate::pages::render_page;
use crate::schemas::PageQuery;

/// Render one page's tree from the fixture datasets and print it as
/// pretty JSON, mirroring exactly what the page endpoint would return.
pub async fn render(page: &str, query: PageQuery) -> Result<()> {
    let page: DashboardPage = page.parse().map_err(anyhow::Error::msg)?;
    let filters = FilterState::from_query(page, &query)?;
    debug!("Rendering page '{}' from fixtures", page);

    let provider = DataProvider::new(Arc::new(FixtureSource), Duration::from_secs(300));
    let snapshot = provider.snapshot().await;
    let view = render_page(&snapshot, &filters)?;

    println!("{}", serde_json::to_string_pretty(&view)?);
    Ok(())
}
