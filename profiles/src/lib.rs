// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Testbed profiles. Each profile declares a fixed topology of bare-metal
//! nodes and emits it as an RSpec request.

use rspec::{Execute, PortalContext, Request};

pub mod cli;
pub mod ksplit;
pub mod lvd;


/// Builds a profile's request. The optional command is attached as a
/// post-boot service to every node.
pub type Profile =
    fn(&PortalContext, Option<Execute>) -> rspec::Result<Request>;
