// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::error::Error;
use crate::request::Request;
use crate::xml;
use slog::{debug, info, Logger};
use std::io::Write;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    /// RSpec v3 request document.
    #[default]
    Xml,
    /// The request model as pretty-printed JSON.
    Json,
}

/// Everything a profile needs to build and emit a request. Passed
/// explicitly so profiles can be built without a live testbed.
#[derive(Clone)]
pub struct PortalContext {
    pub log: Logger,
    pub format: Format,
    pub indent: u8,
}

impl PortalContext {
    pub fn new(log: Logger) -> Self {
        Self {
            log,
            format: Format::default(),
            indent: 2,
        }
    }

    pub fn with_format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    pub fn with_indent(mut self, indent: u8) -> Self {
        self.indent = indent;
        self
    }

    pub fn make_request_rspec(&self) -> Request {
        debug!(self.log, "new request");
        Request::new()
    }

    /// Render `request` in the configured format.
    pub fn render(&self, request: &Request) -> Result<String, Error> {
        match self.format {
            Format::Xml => xml::render(request, self.indent),
            Format::Json => Ok(serde_json::to_string_pretty(request)?),
        }
    }

    /// Render `request` and write it, newline terminated, to `out`.
    pub fn print_request_rspec<W: Write>(
        &self,
        request: &Request,
        mut out: W,
    ) -> Result<(), Error> {
        let doc = self.render(request)?;
        writeln!(out, "{doc}")?;
        out.flush()?;
        info!(
            self.log,
            "printed request";
            "format" => format!("{:?}", self.format),
            "nodes" => request.nodes().len(),
            "links" => request.links().len()
        );
        Ok(())
    }
}
