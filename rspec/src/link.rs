// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::Serialize;

/// One end of a link: an interface allocated on a member node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterfaceRef {
    pub node: String,
    pub interface: String,
}

/// A point-to-point link between exactly two distinct nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub client_id: String,
    pub endpoints: [InterfaceRef; 2],
}
