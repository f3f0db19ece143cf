//! Regional registry delegation data.
//!
//! - [`source`] - fetching the delegation file (HTTP or local copy)
//! - [`parser`] - extracting allocation records for one country

mod parser;
mod source;

pub use parser::{parse_allocations, ParsedDelegations, RecordMatcher};
pub use source::{fetch_delegations, DelegationSource};
