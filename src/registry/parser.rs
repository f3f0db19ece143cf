//! Delegation file parser.
//!
//! Registry lines look like
//! `apnic|CN|ipv4|1.0.1.0|256|20110414|allocated`. Only IPv4 records for the
//! configured registry/country with an allocated or assigned status are kept;
//! everything else (headers, summaries, other countries) is skipped silently.

use crate::config::{RecordFilter, MAX_LINE_BYTES};
use crate::error::RouteError;
use crate::models::{AllocationRecord, DataQualityIssue, IssueKind};
use regex::Regex;
use std::io::{BufRead, Read};
use std::net::Ipv4Addr;

/// Records accepted from a delegation stream, plus the ones rejected as bad data.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ParsedDelegations {
    pub records: Vec<AllocationRecord>,
    pub issues: Vec<DataQualityIssue>,
}

/// Line matcher bound to one registry/country pair.
#[derive(Debug, Clone)]
pub struct RecordMatcher {
    re: Regex,
}

impl RecordMatcher {
    pub fn new(filter: &RecordFilter) -> Result<Self, RouteError> {
        let pattern = format!(
            r"^{registry}\|{country}\|ipv4\|(?P<start>[^|]*)\|(?P<count>[^|]*)\|(?P<date>[0-9]*)\|(?P<status>allocated|assigned)(?:\||$)",
            registry = regex::escape(&filter.registry),
            country = regex::escape(&filter.country),
        );
        log::debug!("record pattern: {pattern}");
        Ok(RecordMatcher {
            re: Regex::new(&pattern)?,
        })
    }

    /// `None` for lines that are not wanted records at all.
    pub fn match_line(
        &self,
        line_no: usize,
        line: &str,
    ) -> Option<Result<AllocationRecord, DataQualityIssue>> {
        let caps = self.re.captures(line)?;
        let start = &caps["start"];
        let count = &caps["count"];

        let issue = |raw: &str, kind| DataQualityIssue {
            line: line_no,
            raw: raw.to_string(),
            kind,
        };

        let start_address: Ipv4Addr = match start.parse() {
            Ok(addr) => addr,
            Err(_) => return Some(Err(issue(start, IssueKind::InvalidStartAddress))),
        };
        let block_size: u64 = match count.parse() {
            Ok(n) => n,
            Err(_) => return Some(Err(issue(count, IssueKind::NonNumericCount))),
        };

        Some(Ok(AllocationRecord {
            line: line_no,
            start_address,
            block_size,
        }))
    }
}

/// Read the whole stream and collect matching records in input order.
///
/// A line longer than [`MAX_LINE_BYTES`] aborts the parse with
/// [`RouteError::LineTooLong`]; nothing parsed so far is returned.
pub fn parse_allocations<R: BufRead>(
    mut reader: R,
    filter: &RecordFilter,
) -> Result<ParsedDelegations, RouteError> {
    let matcher = RecordMatcher::new(filter)?;
    let mut parsed = ParsedDelegations::default();
    let mut buf: Vec<u8> = Vec::with_capacity(MAX_LINE_BYTES + 1);
    let mut line_no = 0;
    let mut skipped = 0;

    loop {
        buf.clear();
        // One byte over the limit is room for the newline itself.
        let n = (&mut reader)
            .take(MAX_LINE_BYTES as u64 + 1)
            .read_until(b'\n', &mut buf)?;
        if n == 0 {
            break;
        }
        line_no += 1;

        if n > MAX_LINE_BYTES && buf.last() != Some(&b'\n') {
            log::error!("line {line_no} longer than {MAX_LINE_BYTES} bytes");
            return Err(RouteError::LineTooLong {
                line: line_no,
                limit: MAX_LINE_BYTES,
            });
        }

        let line = String::from_utf8_lossy(&buf);
        let line = line.trim_end_matches(['\n', '\r']);

        match matcher.match_line(line_no, line) {
            Some(Ok(record)) => {
                log::trace!("line {line_no}: {record:?}");
                parsed.records.push(record);
            }
            Some(Err(issue)) => {
                log::warn!("Rejected record: {issue}");
                parsed.issues.push(issue);
            }
            None => skipped += 1,
        }
    }

    log::info!(
        "Parsed {line_no} lines: {} {}/{} ipv4 records, {} rejected, {skipped} skipped",
        parsed.records.len(),
        filter.registry,
        filter.country,
        parsed.issues.len(),
    );
    Ok(parsed)
}
