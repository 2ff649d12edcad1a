pub mod config;
pub mod convert;
pub mod escape;
pub mod report;
pub mod schema;

use anyhow::{Context, Result};
use std::io::Write;
use tracing::info;

use config::Config;
use convert::ConversionOutput;

/// Convert every configured CSV and write the SQL document to `out`.
///
/// Each section is written as soon as its CSV is converted. A failing job stops
/// the run; sections already written stay in `out` and no totals are written.
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<Vec<ConversionOutput>> {
    let catalog = config.catalog()?;
    let jobs = config.jobs(&catalog)?;

    let mut outputs = Vec::with_capacity(jobs.len());
    for (i, job) in jobs.iter().enumerate() {
        report::write_banner(out, &job.schema, i == 0).context("writing SQL output")?;
        let output = convert::convert_file(&job.csv_path, &job.schema)?;
        report::write_statements(out, &output.statements).context("writing SQL output")?;
        outputs.push(output);
    }
    report::write_totals(out, &outputs).context("writing SQL output")?;

    let statements: usize = outputs.iter().map(|o| o.statements.len()).sum();
    info!(jobs = outputs.len(), statements, "done");
    Ok(outputs)
}
