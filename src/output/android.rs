//! Android busybox scripts for the openvpn up/down hooks.

use super::scripts::{ANDROID_DOWN_HEADER, ANDROID_UP_HEADER};
use super::{Emitter, OutputFile, ScriptPair};
use crate::config::RenderConfig;
use crate::models::ComputedBlock;

const SCRIPTS: ScriptPair = ScriptPair {
    up_name: "vpnup.sh",
    up_header: ANDROID_UP_HEADER,
    down_name: "vpndown.sh",
    down_header: ANDROID_DOWN_HEADER,
    down_footer: "",
};

pub struct Android;

impl Emitter for Android {
    fn render(&self, blocks: &[ComputedBlock], _config: &RenderConfig) -> Vec<OutputFile> {
        SCRIPTS.render(
            blocks,
            |b| {
                format!(
                    "route add -net {} netmask {} gw $OLDGW\n",
                    b.start_address(),
                    b.subnet_mask()
                )
            },
            |b| {
                format!(
                    "route del -net {} netmask {}\n",
                    b.start_address(),
                    b.subnet_mask()
                )
            },
        )
    }

    fn usage_hint(&self, _blocks: &[ComputedBlock]) -> String {
        format!(
            "Call {} / {} from the openvpn client's up/down hooks; prefer openvpn 'route' directives where the client supports them.",
            SCRIPTS.up_name, SCRIPTS.down_name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::tests::blocks;

    #[test]
    fn test_render_android_pair() {
        let files = Android.render(&blocks(), &RenderConfig::default());
        assert_eq!(files[0].name, "vpnup.sh");
        assert_eq!(files[1].name, "vpndown.sh");
        assert_eq!(
            files[0].contents,
            format!(
                "{ANDROID_UP_HEADER}route add -net 1.0.1.0 netmask 255.255.255.0 gw $OLDGW\nroute add -net 1.0.8.0 netmask 255.255.248.0 gw $OLDGW\n"
            )
        );
        assert_eq!(
            files[1].contents,
            format!(
                "{ANDROID_DOWN_HEADER}route del -net 1.0.1.0 netmask 255.255.255.0\nroute del -net 1.0.8.0 netmask 255.255.248.0\n"
            )
        );
    }
}
