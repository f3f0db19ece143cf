//! Windows batch files, routes via the `%gw%` variable with a metric.

use super::scripts::{WIN_DOWN_HEADER, WIN_UP_HEADER};
use super::{Emitter, OutputFile, ScriptPair};
use crate::config::RenderConfig;
use crate::models::ComputedBlock;

const SCRIPTS: ScriptPair = ScriptPair {
    up_name: "vpnup.bat",
    up_header: WIN_UP_HEADER,
    down_name: "vpndown.bat",
    down_header: WIN_DOWN_HEADER,
    down_footer: "",
};

pub struct Windows;

impl Emitter for Windows {
    fn render(&self, blocks: &[ComputedBlock], config: &RenderConfig) -> Vec<OutputFile> {
        SCRIPTS.render(
            blocks,
            |b| {
                format!(
                    "route add {} mask {} %gw% metric {}\n",
                    b.start_address(),
                    b.subnet_mask(),
                    config.metric
                )
            },
            |b| format!("route delete {}\n", b.start_address()),
        )
    }

    fn usage_hint(&self, _blocks: &[ComputedBlock]) -> String {
        format!(
            "For pptp on windows only: run {} before dialing the vpn and {} after disconnecting.",
            SCRIPTS.up_name, SCRIPTS.down_name
        )
    }
}
