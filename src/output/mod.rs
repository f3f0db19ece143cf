//! Route script generation.
//!
//! One [`Emitter`] per [`Platform`] turns the computed blocks into the
//! platform's native route commands:
//! - [`openvpn`] - `route` directives for an openvpn client config
//! - [`linux`] - pppd ip-pre-up / ip-down scripts
//! - [`mac`] - BSD style ip-up / ip-down scripts using CIDR
//! - [`windows`] - vpnup.bat / vpndown.bat
//! - [`android`] - busybox vpnup.sh / vpndown.sh
//!
//! Rendering is pure; [`writer`] puts the result on disk.

mod android;
mod linux;
mod mac;
mod openvpn;
mod scripts;
mod windows;
mod writer;

use crate::config::RenderConfig;
use crate::error::RouteError;
use crate::models::ComputedBlock;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

pub use writer::write_output_files;

/// A generated file, not yet written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFile {
    /// File name relative to the output directory.
    pub name: &'static str,
    pub contents: String,
}

/// Renders route blocks for one target platform.
pub trait Emitter {
    /// Produce every file for this platform, one route line per block.
    fn render(&self, blocks: &[ComputedBlock], config: &RenderConfig) -> Vec<OutputFile>;

    /// One line telling the user what to do with the files.
    fn usage_hint(&self, blocks: &[ComputedBlock]) -> String;
}

/// Supported targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    OpenVpn,
    Linux,
    Mac,
    Windows,
    Android,
}

impl Platform {
    pub const ALL: [Platform; 5] = [
        Platform::OpenVpn,
        Platform::Linux,
        Platform::Mac,
        Platform::Windows,
        Platform::Android,
    ];

    /// Name accepted on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Platform::OpenVpn => "openvpn",
            Platform::Linux => "linux",
            Platform::Mac => "mac",
            Platform::Windows => "win",
            Platform::Android => "android",
        }
    }

    pub fn emitter(self) -> &'static dyn Emitter {
        match self {
            Platform::OpenVpn => &openvpn::OpenVpn,
            Platform::Linux => &linux::Linux,
            Platform::Mac => &mac::Mac,
            Platform::Windows => &windows::Windows,
            Platform::Android => &android::Android,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Platform {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Platform::ALL
            .into_iter()
            .find(|p| p.name() == wanted)
            .ok_or_else(|| RouteError::UnsupportedPlatform {
                name: s.to_string(),
                expected: Platform::ALL
                    .iter()
                    .map(|p| p.name())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

/// Up/down script pair sharing one layout: header, a line per block, footer.
pub(crate) struct ScriptPair {
    pub up_name: &'static str,
    pub up_header: &'static str,
    pub down_name: &'static str,
    pub down_header: &'static str,
    pub down_footer: &'static str,
}

impl ScriptPair {
    pub fn render<U, D>(&self, blocks: &[ComputedBlock], up_line: U, down_line: D) -> Vec<OutputFile>
    where
        U: Fn(&ComputedBlock) -> String,
        D: Fn(&ComputedBlock) -> String,
    {
        let mut up = String::from(self.up_header);
        let mut down = String::from(self.down_header);
        for block in blocks {
            up.push_str(&up_line(block));
            down.push_str(&down_line(block));
        }
        down.push_str(self.down_footer);

        vec![
            OutputFile {
                name: self.up_name,
                contents: up,
            },
            OutputFile {
                name: self.down_name,
                contents: down,
            },
        ]
    }
}

/// What a run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedRoutes {
    pub platform: Platform,
    pub files: Vec<PathBuf>,
    pub route_count: usize,
    pub usage_hint: String,
}

/// Render `blocks` for the configured platform and write the files.
pub fn generate(
    blocks: &[ComputedBlock],
    config: &RenderConfig,
) -> Result<GeneratedRoutes, RouteError> {
    log::info!(
        "#Start generate() platform={} routes={} metric={}",
        config.platform,
        blocks.len(),
        config.metric
    );
    let emitter = config.platform.emitter();
    let rendered = emitter.render(blocks, config);
    let files = write_output_files(&config.output_dir, &rendered)?;

    Ok(GeneratedRoutes {
        platform: config.platform,
        files,
        route_count: blocks.len(),
        usage_hint: emitter.usage_hint(blocks),
    })
}
