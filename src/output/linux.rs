//! Linux pppd scripts using `route -net ... netmask`.

use super::scripts::{LINUX_DOWN_FOOTER, LINUX_DOWN_HEADER, LINUX_UP_HEADER};
use super::{Emitter, OutputFile, ScriptPair};
use crate::config::RenderConfig;
use crate::models::ComputedBlock;

const SCRIPTS: ScriptPair = ScriptPair {
    up_name: "ip-pre-up",
    up_header: LINUX_UP_HEADER,
    down_name: "ip-down",
    down_header: LINUX_DOWN_HEADER,
    down_footer: LINUX_DOWN_FOOTER,
};

pub struct Linux;

impl Emitter for Linux {
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
            "For pptp only: copy {} to /etc/ppp and {} to /etc/ppp/ip-down.d.",
            SCRIPTS.up_name, SCRIPTS.down_name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::tests::blocks;

    #[test]
    fn test_render_linux_pair() {
        let files = Linux.render(&blocks(), &RenderConfig::default());
        assert_eq!(files.len(), 2);
        assert_eq!(files[0].name, "ip-pre-up");
        assert_eq!(files[1].name, "ip-down");

        assert!(files[0].contents.starts_with(LINUX_UP_HEADER));
        assert!(files[0].contents.ends_with(
            "route add -net 1.0.1.0 netmask 255.255.255.0 gw $OLDGW\nroute add -net 1.0.8.0 netmask 255.255.248.0 gw $OLDGW\n"
        ));
        assert_eq!(
            files[1].contents,
            format!(
                "{LINUX_DOWN_HEADER}route del -net 1.0.1.0 netmask 255.255.255.0\nroute del -net 1.0.8.0 netmask 255.255.248.0\nrm /tmp/vpn_oldgw\n"
            )
        );
    }

    #[test]
    fn test_render_linux_empty() {
        let files = Linux.render(&[], &RenderConfig::default());
        assert_eq!(files[0].contents, LINUX_UP_HEADER);
        assert_eq!(
            files[1].contents,
            format!("{LINUX_DOWN_HEADER}{LINUX_DOWN_FOOTER}")
        );
    }
}
