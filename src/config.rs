//! Run configuration and defaults.
//!
//! Everything a run needs is carried in a [`RunConfig`] handed to
//! [`crate::run`]; nothing here is global mutable state.

use crate::output::Platform;
use crate::registry::DelegationSource;
use std::path::PathBuf;

pub const DEFAULT_REGISTRY_URL: &str =
    "http://ftp.apnic.net/apnic/stats/apnic/delegated-apnic-latest";
pub const DEFAULT_REGISTRY: &str = "apnic";
pub const DEFAULT_COUNTRY: &str = "CN";
pub const DEFAULT_METRIC: u32 = 5;
pub const DEFAULT_OUTPUT_DIR: &str = ".";

/// Longest delegation line accepted, in bytes, excluding the line ending.
pub const MAX_LINE_BYTES: usize = 4096;

/// Added to the route count when suggesting an openvpn `max-routes` value.
pub const ROUTE_TABLE_MARGIN: usize = 20;

/// Which delegation records the parser keeps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordFilter {
    /// Registry id as written in the first column, e.g. `apnic`.
    pub registry: String,
    /// Upper-case ISO 3166 country code, e.g. `CN`.
    pub country: String,
}

impl RecordFilter {
    pub fn new(registry: &str, country: &str) -> Self {
        RecordFilter {
            registry: registry.trim().to_lowercase(),
            country: country.trim().to_uppercase(),
        }
    }
}

impl Default for RecordFilter {
    fn default() -> Self {
        RecordFilter::new(DEFAULT_REGISTRY, DEFAULT_COUNTRY)
    }
}

/// Settings consumed by the emitters and the file writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    pub platform: Platform,
    /// Route metric, only written by formats that carry one.
    pub metric: u32,
    pub output_dir: PathBuf,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            platform: Platform::OpenVpn,
            metric: DEFAULT_METRIC,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

/// Everything one invocation needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub source: DelegationSource,
    pub filter: RecordFilter,
    pub render: RenderConfig,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            source: DelegationSource::Url(DEFAULT_REGISTRY_URL.to_string()),
            filter: RecordFilter::default(),
            render: RenderConfig::default(),
        }
    }
}
