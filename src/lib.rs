// cargo watch -x 'fmt' -x 'run'  // 'run -- -p linux'

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod registry;

use colored::Colorize;
use config::{RecordFilter, RunConfig};
use error::RouteError;
use models::{compute_blocks, ComputedBlock, DataQualityIssue};
use output::GeneratedRoutes;
use std::io::BufRead;

/// Blocks ready for an emitter plus every record rejected on the way.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RouteTable {
    pub blocks: Vec<ComputedBlock>,
    /// Sorted by line number.
    pub issues: Vec<DataQualityIssue>,
}

/// Parse a delegation stream and compute a block for each matching record.
pub fn build_route_table<R: BufRead>(
    reader: R,
    filter: &RecordFilter,
) -> Result<RouteTable, RouteError> {
    let parsed = registry::parse_allocations(reader, filter)?;
    let (blocks, mut issues) = compute_blocks(&parsed.records);
    issues.extend(parsed.issues);
    issues.sort_by_key(|i| i.line);
    Ok(RouteTable { blocks, issues })
}

/// One full run: load, parse, compute, render and write.
pub async fn run(config: &RunConfig) -> Result<GeneratedRoutes, RouteError> {
    let raw = config.source.load().await?;
    let table = build_route_table(raw.as_slice(), &config.filter)?;

    for issue in &table.issues {
        log::warn!("Skipped {issue}");
    }
    if !table.issues.is_empty() {
        log::warn!(
            "#{}# {} matching record(s) rejected as bad data, {} route(s) kept",
            "NOTE".on_red(),
            table.issues.len(),
            table.blocks.len()
        );
    }

    output::generate(&table.blocks, &config.render)
}
