//! openvpn client route list.

use super::{Emitter, OutputFile};
use crate::config::{RenderConfig, ROUTE_TABLE_MARGIN};
use crate::models::ComputedBlock;

pub const ROUTES_FILE: &str = "routes.txt";

pub struct OpenVpn;

impl Emitter for OpenVpn {
    fn render(&self, blocks: &[ComputedBlock], config: &RenderConfig) -> Vec<OutputFile> {
        let contents = blocks
            .iter()
            .map(|b| {
                format!(
                    "route {} {} net_gateway {}\n",
                    b.start_address(),
                    b.subnet_mask(),
                    config.metric
                )
            })
            .collect();
        vec![OutputFile {
            name: ROUTES_FILE,
            contents,
        }]
    }

    fn usage_hint(&self, blocks: &[ComputedBlock]) -> String {
        format!(
            "Usage: append the content of {ROUTES_FILE} to your openvpn config file, and add 'max-routes {}' on its own line at the head of that file.",
            blocks.len() + ROUTE_TABLE_MARGIN
        )
    }
}
