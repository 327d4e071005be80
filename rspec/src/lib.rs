// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Request RSpec construction for testbed profiles.
//!
//! A profile obtains a [`PortalContext`], asks it for an empty [`Request`],
//! declares nodes and links, and hands the request back to the context to be
//! printed as an RSpec v3 request document.

pub mod context;
pub mod error;
pub mod link;
pub mod log;
pub mod node;
pub mod request;
pub mod xml;

pub use context::{Format, PortalContext};
pub use error::Error;
pub use link::{InterfaceRef, Link};
pub use node::{DiskImage, Execute, HardwareType, Node, NodeBuilder, SliverType};
pub use request::{LinkRef, NodeRef, Request};

pub type Result<T> = std::result::Result<T, Error>;
