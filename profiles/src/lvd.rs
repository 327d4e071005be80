// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! LVD linux development on the bareflank hypervisor: two c220g2 nodes on
//! the LVD Linux image, joined back to back.

use rspec::{Execute, Node, PortalContext, Request};
use slog::info;

pub const DESCRIPTION: &str = "LVD linux development on bareflank hypervisor";
pub const HARDWARE_TYPE: &str = "c220g2";
pub const DISK_IMAGE: &str =
    "urn:publicid:IDN+wisc.cloudlab.us+image+lvds-PG0:lvd-linux";

pub fn lvd(
    pc: &PortalContext,
    post_boot: Option<Execute>,
) -> rspec::Result<Request> {
    let mut request = pc.make_request_rspec();

    // nodes
    let mut nodes = Vec::new();
    for id in ["node-0", "node-1"] {
        let mut node = Node::raw_pc(id)
            .hardware_type(HARDWARE_TYPE)
            .disk_image(DISK_IMAGE);
        if let Some(x) = &post_boot {
            node = node.post_boot(x.clone());
        }
        nodes.push(request.add_node(node.build()?)?);
    }

    // links
    request.link(nodes[0], nodes[1])?;

    info!(pc.log, "declared lvd topology"; "nodes" => 2, "links" => 1);
    Ok(request)
}
