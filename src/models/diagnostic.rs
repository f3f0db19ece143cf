//! Data-quality diagnostics for registry records.

use super::ipv4::BlockSizeError;
use std::fmt;

/// What was wrong with a delegation record that matched the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueKind {
    InvalidStartAddress,
    NonNumericCount,
    ZeroCount,
    CountNotPowerOfTwo,
    CountTooLarge,
    /// Host bits set below the block's prefix length.
    MisalignedStart,
}

impl From<BlockSizeError> for IssueKind {
    fn from(e: BlockSizeError) -> Self {
        match e {
            BlockSizeError::Zero => IssueKind::ZeroCount,
            BlockSizeError::NotPowerOfTwo => IssueKind::CountNotPowerOfTwo,
            BlockSizeError::TooLarge => IssueKind::CountTooLarge,
        }
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let text = match self {
            IssueKind::InvalidStartAddress => "start address is not a valid IPv4 address",
            IssueKind::NonNumericCount => "address count is not a number",
            IssueKind::ZeroCount => "address count is zero",
            IssueKind::CountNotPowerOfTwo => "address count is not a power of two",
            IssueKind::CountTooLarge => "address count exceeds the IPv4 space",
            IssueKind::MisalignedStart => "start address is not aligned to the block size",
        };
        f.write_str(text)
    }
}

/// A matching record that was rejected instead of emitted.
///
/// `line` is the 1-based line number in the delegation stream and `raw` the
/// offending field exactly as read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataQualityIssue {
    pub line: usize,
    pub raw: String,
    pub kind: IssueKind,
}

impl fmt::Display for DataQualityIssue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "line {}: {} ('{}')", self.line, self.kind, self.raw)
    }
}
