// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::error::Error;
use crate::link::{InterfaceRef, Link};
use crate::node::{Execute, Node};
use serde::Serialize;

/// Handle to a node owned by a [`Request`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeRef(usize);

/// Handle to a link owned by a [`Request`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LinkRef(usize);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Request {
    nodes: Vec<Node>,
    links: Vec<Link>,
}

impl Request {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, node: Node) -> Result<NodeRef, Error> {
        if self.nodes.iter().any(|n| n.client_id() == node.client_id()) {
            return Err(Error::DuplicateNode(node.client_id().to_owned()));
        }
        self.nodes.push(node);
        Ok(NodeRef(self.nodes.len() - 1))
    }

    /// Connect two nodes, allocating a fresh interface on each.
    pub fn link(&mut self, a: NodeRef, b: NodeRef) -> Result<LinkRef, Error> {
        self.check(a)?;
        self.check(b)?;
        if a == b {
            let id = self.nodes[a.0].client_id().to_owned();
            return Err(Error::SelfLink(id));
        }

        let endpoints = [self.endpoint(a), self.endpoint(b)];
        self.links.push(Link {
            client_id: format!("link-{}", self.links.len()),
            endpoints,
        });
        Ok(LinkRef(self.links.len() - 1))
    }

    pub fn set_post_boot(
        &mut self,
        node: NodeRef,
        execute: Execute,
    ) -> Result<(), Error> {
        self.check(node)?;
        self.nodes[node.0].set_post_boot(execute);
        Ok(())
    }

    pub fn node(&self, node: NodeRef) -> Option<&Node> {
        self.nodes.get(node.0)
    }

    pub fn get_link(&self, link: LinkRef) -> Option<&Link> {
        self.links.get(link.0)
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    fn check(&self, node: NodeRef) -> Result<(), Error> {
        if node.0 >= self.nodes.len() {
            return Err(Error::UnknownNode(node.0));
        }
        Ok(())
    }

    fn endpoint(&mut self, node: NodeRef) -> InterfaceRef {
        let n = &mut self.nodes[node.0];
        InterfaceRef {
            interface: n.next_interface(),
            node: n.client_id().to_owned(),
        }
    }
}
