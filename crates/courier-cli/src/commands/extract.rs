use crate::commands::{print_json, Context};
use crate::util::read_input;
use anyhow::Result;
use clap::Args;
use courier_core::{CoreError, CustomerRecord};
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Debug, Args)]
pub struct ExtractArgs {
    /// File with pasted customer text; reads stdin when omitted or `-`
    pub file: Option<PathBuf>,
}

pub fn extract(ctx: &Context, args: ExtractArgs) -> Result<()> {
    let records = extract_records(ctx, &read_input(args.file.as_deref())?)?;

    if ctx.json {
        return print_json(&records);
    }

    for record in &records {
        println!("{} | {} | {}", record.name, record.phone, record.location);
    }
    Ok(())
}

/// Runs the extractor and turns an empty result into the user-facing
/// "no data" error.
pub fn extract_records(ctx: &Context, text: &str) -> Result<Vec<CustomerRecord>> {
    let report = ctx.extractor.extract_with_report(text);
    debug!(settings = ?ctx.extractor.settings(), "extractor settings");
    let incomplete = report
        .records
        .iter()
        .filter(|record| !record.has_name() || !record.has_location())
        .count();
    info!(
        pass = ?report.pass,
        records = report.records.len(),
        incomplete,
        discarded = report.discarded_matches,
        "extraction finished"
    );

    if report.records.is_empty() {
        return Err(CoreError::NoCustomerData.into());
    }
    Ok(report.records)
}
