//! BSD style scripts (macOS pppd), routes written in CIDR form.

use super::scripts::{MAC_DOWN_FOOTER, MAC_DOWN_HEADER, MAC_UP_HEADER};
use super::{Emitter, OutputFile, ScriptPair};
use crate::config::RenderConfig;
use crate::models::ComputedBlock;

const SCRIPTS: ScriptPair = ScriptPair {
    up_name: "ip-up",
    up_header: MAC_UP_HEADER,
    down_name: "ip-down",
    down_header: MAC_DOWN_HEADER,
    down_footer: MAC_DOWN_FOOTER,
};

pub struct Mac;

impl Emitter for Mac {
    fn render(&self, blocks: &[ComputedBlock], _config: &RenderConfig) -> Vec<OutputFile> {
        SCRIPTS.render(
            blocks,
            |b| format!("route add {} \"${{OLDGW}}\"\n", b.cidr()),
            |b| format!("route delete {} ${{OLDGW}}\n", b.cidr()),
        )
    }

    fn usage_hint(&self, _blocks: &[ComputedBlock]) -> String {
        format!(
            "For pptp on mac only: copy {} and {} to /etc/ppp and make them executable with chmod +x.",
            SCRIPTS.up_name, SCRIPTS.down_name
        )
    }
}
