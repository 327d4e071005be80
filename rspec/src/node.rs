// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::error::Error;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

const URN_PREFIX: &str = "urn:publicid:IDN+";
const IMAGE_SEGMENT: &str = "+image+";

/// A testbed catalog key selecting a physical machine class, e.g. `c220g2`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct HardwareType(String);

impl HardwareType {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for HardwareType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty()
            || !s
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(Error::InvalidHardwareType(s.to_owned()));
        }
        Ok(Self(s.to_owned()))
    }
}

impl From<HardwareType> for String {
    fn from(value: HardwareType) -> Self {
        value.0
    }
}

impl fmt::Display for HardwareType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// URN of a bootable disk image, e.g.
/// `urn:publicid:IDN+emulab.net+image+emulab-ops//UBUNTU18-64-STD`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct DiskImage(String);

impl DiskImage {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for DiskImage {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some(rest) = s.strip_prefix(URN_PREFIX) else {
            return Err(Error::InvalidUrn(s.to_owned()));
        };
        match rest.split_once(IMAGE_SEGMENT) {
            Some((authority, name))
                if !authority.is_empty()
                    && !name.is_empty()
                    && !s.chars().any(char::is_whitespace) =>
            {
                Ok(Self(s.to_owned()))
            }
            _ => Err(Error::InvalidUrn(s.to_owned())),
        }
    }
}

impl From<DiskImage> for String {
    fn from(value: DiskImage) -> Self {
        value.0
    }
}

impl fmt::Display for DiskImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A command the node runs once it has booted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Execute {
    pub shell: String,
    pub command: String,
}

impl Execute {
    pub fn new(shell: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
            command: command.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SliverType {
    RawPc,
}

impl SliverType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SliverType::RawPc => "raw-pc",
        }
    }
}

/// A node as declared by [`NodeBuilder::build`]. Interfaces are only
/// allocated by [`crate::Request::link`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    client_id: String,
    sliver_type: SliverType,
    exclusive: bool,
    hardware_type: HardwareType,
    disk_image: DiskImage,
    post_boot: Option<Execute>,
    interfaces: Vec<String>,
}

impl Node {
    /// Start declaring a bare-metal node.
    pub fn raw_pc(client_id: impl Into<String>) -> NodeBuilder {
        NodeBuilder {
            client_id: client_id.into(),
            sliver_type: SliverType::RawPc,
            hardware_type: None,
            disk_image: None,
            post_boot: None,
        }
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn sliver_type(&self) -> SliverType {
        self.sliver_type
    }

    pub fn exclusive(&self) -> bool {
        self.exclusive
    }

    pub fn hardware_type(&self) -> &HardwareType {
        &self.hardware_type
    }

    pub fn disk_image(&self) -> &DiskImage {
        &self.disk_image
    }

    pub fn post_boot(&self) -> Option<&Execute> {
        self.post_boot.as_ref()
    }

    pub fn interfaces(&self) -> &[String] {
        &self.interfaces
    }

    pub(crate) fn set_post_boot(&mut self, execute: Execute) {
        self.post_boot = Some(execute);
    }

    pub(crate) fn next_interface(&mut self) -> String {
        let name = format!("{}:if{}", self.client_id, self.interfaces.len());
        self.interfaces.push(name.clone());
        name
    }
}

#[derive(Debug, Clone)]
pub struct NodeBuilder {
    client_id: String,
    sliver_type: SliverType,
    hardware_type: Option<String>,
    disk_image: Option<String>,
    post_boot: Option<Execute>,
}

impl NodeBuilder {
    pub fn hardware_type(mut self, hardware_type: impl Into<String>) -> Self {
        self.hardware_type = Some(hardware_type.into());
        self
    }

    pub fn disk_image(mut self, disk_image: impl Into<String>) -> Self {
        self.disk_image = Some(disk_image.into());
        self
    }

    pub fn post_boot(mut self, execute: Execute) -> Self {
        self.post_boot = Some(execute);
        self
    }

    pub fn build(self) -> Result<Node, Error> {
        if self.client_id.is_empty()
            || self.client_id.chars().any(|c| c.is_whitespace() || c == ':')
        {
            return Err(Error::InvalidName(self.client_id));
        }
        let hardware_type = self.hardware_type.ok_or_else(|| {
            Error::MissingField {
                node: self.client_id.clone(),
                field: "hardware_type",
            }
        })?;
        let disk_image =
            self.disk_image.ok_or_else(|| Error::MissingField {
                node: self.client_id.clone(),
                field: "disk_image",
            })?;

        Ok(Node {
            exclusive: matches!(self.sliver_type, SliverType::RawPc),
            sliver_type: self.sliver_type,
            hardware_type: hardware_type.parse()?,
            disk_image: disk_image.parse()?,
            post_boot: self.post_boot,
            interfaces: Vec::new(),
            client_id: self.client_id,
        })
    }
}
