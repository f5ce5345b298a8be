use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

pub mod commands;

use commands::{render, serve};

use crate::schemas::PageQuery;

#[derive(Parser)]
#[command(name = "propboard")]
#[command(about = "Real estate portfolio dashboard server and rendering tools")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:3000, 127.0.0.1:8080)
        #[arg(short, long, env = "BIND_ADDRESS", default_value = "0.0.0.0:3000")]
        bind_address: String,
    },
    /// Render one dashboard page as JSON to stdout, using fixture data
    ///
    /// Useful for inspecting the render tree without running the server:
    ///   propboard render overview
    ///   propboard render properties --types RESIDENTIAL --statuses ACTIVE
    Render {
        /// Page slug: overview, properties, tenants, financial,
        /// maintenance or occupancy
        page: String,

        /// Start of the reporting range (YYYY-MM-DD)
        #[arg(long)]
        start_date: Option<NaiveDate>,

        /// End of the reporting range (YYYY-MM-DD)
        #[arg(long)]
        end_date: Option<NaiveDate>,

        /// Comma-separated property types to include
        #[arg(long)]
        types: Option<String>,

        /// Comma-separated property statuses to include
        #[arg(long)]
        statuses: Option<String>,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve { bind_address } => {
                serve(&bind_address).await?;
            }
            Commands::Render {
                page,
                start_date,
                end_date,
                types,
                statuses,
            } => {
                let query = PageQuery {
                    start_date,
                    end_date,
                    types,
                    statuses,
                };
                render(&page, query).await?;
            }
        }
        Ok(())
    }
}
