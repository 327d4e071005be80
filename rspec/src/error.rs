// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("node {node}: missing required field {field}")]
    MissingField { node: String, field: &'static str },

    #[error("invalid client id {0:?}")]
    InvalidName(String),

    #[error("invalid hardware type {0:?}")]
    InvalidHardwareType(String),

    #[error("invalid disk image urn {0:?}")]
    InvalidUrn(String),

    #[error("duplicate node {0}")]
    DuplicateNode(String),

    #[error("unknown node reference {0}")]
    UnknownNode(usize),

    #[error("node {0} cannot be linked to itself")]
    SelfLink(String),

    #[error("xml error {0}")]
    Xml(String),

    #[error("serialization error {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error {0}")]
    Io(#[from] std::io::Error),
}
