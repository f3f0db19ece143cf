//! Delegation records and the blocks computed from them.

use super::diagnostic::{DataQualityIssue, IssueKind};
use super::ipv4::{prefix_len_for_block_size, Ipv4};
use std::net::Ipv4Addr;

/// One accepted delegation record, before mask computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocationRecord {
    /// 1-based line in the delegation stream.
    pub line: usize,
    pub start_address: Ipv4Addr,
    /// Number of addresses covered.
    pub block_size: u64,
}

/// A validated route target: base address plus prefix length.
///
/// The prefix length is the single source of truth; the dotted mask is
/// derived from it, so the two can not disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComputedBlock {
    network: Ipv4,
}

impl ComputedBlock {
    /// Derive a block from a record, rejecting counts that do not describe a
    /// single network.
    pub fn from_record(record: &AllocationRecord) -> Result<ComputedBlock, DataQualityIssue> {
        let issue = |kind: IssueKind| DataQualityIssue {
            line: record.line,
            raw: record.block_size.to_string(),
            kind,
        };

        let prefix_len = prefix_len_for_block_size(record.block_size)
            .map_err(|e| issue(IssueKind::from(e)))?;
        let network = Ipv4::from_parts(record.start_address, prefix_len)
            .map_err(|_| issue(IssueKind::CountTooLarge))?;

        if !network.is_network_aligned() {
            return Err(DataQualityIssue {
                line: record.line,
                raw: network.to_string(),
                kind: IssueKind::MisalignedStart,
            });
        }
        Ok(ComputedBlock { network })
    }

    pub fn start_address(&self) -> Ipv4Addr {
        self.network.addr()
    }

    pub fn subnet_mask(&self) -> Ipv4Addr {
        self.network.subnet_mask()
    }

    pub fn prefix_len(&self) -> u8 {
        self.network.prefix_len()
    }

    /// The block in `addr/len` form.
    pub fn cidr(&self) -> Ipv4 {
        self.network
    }
}

/// Run the mask calculator over every record, keeping input order.
pub fn compute_blocks(
    records: &[AllocationRecord],
) -> (Vec<ComputedBlock>, Vec<DataQualityIssue>) {
    let mut blocks = Vec::with_capacity(records.len());
    let mut issues = Vec::new();

    for record in records {
        match ComputedBlock::from_record(record) {
            Ok(block) => {
                log::trace!("line {} => {}", record.line, block.cidr());
                blocks.push(block);
            }
            Err(issue) => issues.push(issue),
        }
    }
    (blocks, issues)
}
