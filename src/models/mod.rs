//! Domain models for route generation.
//!
//! - [`Ipv4`] - IPv4 network with prefix length support
//! - [`AllocationRecord`] - a delegation record accepted by the parser
//! - [`ComputedBlock`] - a record turned into a routable network
//! - [`DataQualityIssue`] - a record rejected on the way

mod allocation;
mod diagnostic;
mod ipv4;

pub use allocation::{compute_blocks, AllocationRecord, ComputedBlock};
pub use diagnostic::{DataQualityIssue, IssueKind};
pub use ipv4::{
    get_cidr_mask, prefix_len_for_block_size, BlockSizeError, Ipv4, MAX_BLOCK_SIZE, MAX_LENGTH,
};
