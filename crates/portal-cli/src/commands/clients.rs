//! `portalctl clients`: read-only ServiceM8 lookups.

use anyhow::Context;
use portal_config::PortalConfig;
use portal_servicem8::ServiceM8Client;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ClientCommands;
use crate::output::output;

#[derive(Debug, Serialize)]
pub struct CompanyRow {
    pub uuid: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub active: bool,
}

#[derive(Debug, Serialize)]
pub struct JobRow {
    pub uuid: Option<String>,
    pub number: Option<String>,
    pub status: Option<String>,
    pub date: Option<String>,
    pub address: Option<String>,
}

pub async fn handle(action: &ClientCommands, config: &PortalConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let client = ServiceM8Client::from_config(&config.servicem8)
        .context("clients commands need ServiceM8 credentials")?;

    match action {
        ClientCommands::List { all } => {
            let rows: Vec<CompanyRow> = client
                .list_companies(None)
                .await?
                .into_iter()
                .filter(|company| *all || company.is_active())
                .map(|company| CompanyRow {
                    active: company.is_active(),
                    uuid: company.uuid,
                    name: company.name,
                    email: company.email,
                })
                .collect();
            output(&rows, flags.format)
        }
        ClientCommands::Jobs { client_uuid } => {
            let rows: Vec<JobRow> = client
                .jobs_for_company(client_uuid.trim())
                .await?
                .into_iter()
                .filter(portal_servicem8::models::Job::is_active)
                .map(|job| JobRow {
                    uuid: job.uuid,
                    number: job.generated_job_id,
                    status: job.status,
                    date: job.date,
                    address: job.job_address,
                })
                .collect();
            output(&rows, flags.format)
        }
    }
}
