// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! KSplit evaluation: a single c220g2 running stock Ubuntu 18.04.

use rspec::{Execute, Node, PortalContext, Request};
use slog::info;

pub const DESCRIPTION: &str = "KSplit evaluation";
pub const HARDWARE_TYPE: &str = "c220g2";
pub const DISK_IMAGE: &str =
    "urn:publicid:IDN+emulab.net+image+emulab-ops//UBUNTU18-64-STD";

/// Setup script shipped with the profile repository. Not run unless asked
/// for with `--post-boot`.
pub const SETUP_SCRIPT: &str = "/local/repository/ksplit-top.sh";

pub fn ksplit(
    pc: &PortalContext,
    post_boot: Option<Execute>,
) -> rspec::Result<Request> {
    let mut request = pc.make_request_rspec();

    let mut node = Node::raw_pc("node-0")
        .hardware_type(HARDWARE_TYPE)
        .disk_image(DISK_IMAGE);
    if let Some(x) = post_boot {
        node = node.post_boot(x);
    }
    request.add_node(node.build()?)?;

    info!(pc.log, "declared ksplit topology"; "nodes" => 1);
    Ok(request)
}
