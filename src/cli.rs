//! Command line flags.
//!
//! Every flag can also come from the environment (or a `.env` file loaded by
//! `main`), e.g. `CHNROUTES_PLATFORM=linux`.

use crate::config::{
    RecordFilter, RenderConfig, RunConfig, DEFAULT_COUNTRY, DEFAULT_METRIC, DEFAULT_OUTPUT_DIR,
    DEFAULT_REGISTRY, DEFAULT_REGISTRY_URL,
};
use crate::error::RouteError;
use crate::registry::DelegationSource;
use clap::Parser;
use std::path::PathBuf;

/// Generate split-tunnel route scripts for one country's IPv4 allocations.
#[derive(Parser, Debug)]
#[command(name = "chnroutes", version, about, long_about = None)]
pub struct Cli {
    /// Target platform: openvpn, linux, mac, win or android
    #[arg(short, long, env = "CHNROUTES_PLATFORM", default_value = "openvpn")]
    pub platform: String,

    /// Metric for the route rules (openvpn and win only)
    #[arg(short, long, env = "CHNROUTES_METRIC", default_value_t = DEFAULT_METRIC)]
    pub metric: u32,

    /// Delegation file URL
    #[arg(long, env = "CHNROUTES_URL", default_value = DEFAULT_REGISTRY_URL)]
    pub url: String,

    /// Registry id in the first column of each record
    #[arg(long, env = "CHNROUTES_REGISTRY", default_value = DEFAULT_REGISTRY)]
    pub registry: String,

    /// Country code to route outside the vpn
    #[arg(long, env = "CHNROUTES_COUNTRY", default_value = DEFAULT_COUNTRY)]
    pub country: String,

    /// Read a local delegation file instead of fetching --url
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Directory the scripts are written to
    #[arg(short, long, env = "CHNROUTES_OUTPUT_DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,
}

impl Cli {
    /// Validate the flags into a [`RunConfig`]. An unknown platform fails here,
    /// before anything is fetched or written.
    pub fn into_config(self) -> Result<RunConfig, RouteError> {
        let platform = self.platform.parse()?;
        let source = match self.input {
            Some(path) => DelegationSource::File(path),
            None => DelegationSource::Url(self.url),
        };
        Ok(RunConfig {
            source,
            filter: RecordFilter::new(&self.registry, &self.country),
            render: RenderConfig {
                platform,
                metric: self.metric,
                output_dir: self.output_dir,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::Platform;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("chnroutes").chain(args.iter().copied()))
            .expect("Error parsing args")
    }

    #[test]
    fn test_defaults() {
        let config = parse(&[]).into_config().unwrap();
        assert_eq!(config, RunConfig::default());
    }

    #[test]
    fn test_short_flags() {
        let config = parse(&["-p", "linux", "-m", "9", "-o", "out"])
            .into_config()
            .unwrap();
        assert_eq!(config.render.platform, Platform::Linux);
        assert_eq!(config.render.metric, 9);
        assert_eq!(config.render.output_dir, PathBuf::from("out"));
    }

    #[test]
    fn test_input_file_overrides_url() {
        let config = parse(&["--input", "delegated.txt", "--country", "jp"])
            .into_config()
            .unwrap();
        assert_eq!(
            config.source,
            DelegationSource::File(PathBuf::from("delegated.txt"))
        );
        assert_eq!(config.filter.country, "JP");
    }

    #[test]
    fn test_unknown_platform_rejected() {
        let err = parse(&["-p", "plan9"]).into_config().unwrap_err();
        assert!(matches!(err, RouteError::UnsupportedPlatform { .. }));
    }

    #[test]
    fn test_bad_metric_rejected_by_clap() {
        assert!(Cli::try_parse_from(["chnroutes", "-m", "low"]).is_err());
    }
}
