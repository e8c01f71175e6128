use anyhow::Result;

use crate::cli::Cli;
use crate::configuration::Settings;
use crate::domain::report::AcquisitionReport;
use crate::services::{
    resolve_output_path, write_report, CrunchbaseClient, SecurityTrailsClient,
};

/// Runs the requested sources in order, SecurityTrails first, and writes
/// the combined report once at the end. A fatal failure in either source
/// aborts the run before anything is written.
pub async fn run(args: Cli, configuration: Settings) -> Result<()> {
    let mut report = AcquisitionReport::default();

    match args.securitytrails_request() {
        Some((domain, email, password)) => {
            let client = SecurityTrailsClient::new(configuration.securitytrails.base_url)?;
            let acquisitions = client.fetch_acquisitions(domain, email, password).await?;
            report.securitytrails = Some(acquisitions);
        }
        None => {
            if args.has_partial_securitytrails_request() {
                log::warn!(
                    "Skipping SecurityTrails: --domain, --email and --password must all be given"
                );
            }
        }
    }

    if let Some(company_name) = &args.company_name {
        let client = CrunchbaseClient::new(
            configuration.crunchbase.base_url,
            configuration.webdriver.server_url,
        );
        let mentions = client.fetch_acquisition_mentions(company_name).await?;
        log::info!(
            "Found {} acquisition mentions for {}",
            mentions.len(),
            company_name
        );
        report.crunchbase = Some(mentions);
    }

    let output_path = resolve_output_path(&args.output)?;
    write_report(&output_path, &report)?;
    log::info!("Saved results to {}", output_path.display());

    Ok(())
}
