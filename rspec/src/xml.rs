// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! RSpec v3 request rendering.

use crate::error::Error;
use crate::link::Link;
use crate::node::Node;
use crate::request::Request;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::Writer;

pub const RSPEC_NS: &str = "http://www.geni.net/resources/rspec/3";
pub const XSI_NS: &str = "http://www.w3.org/2001/XMLSchema-instance";
pub const CLIENT_NS: &str =
    "http://www.protogeni.net/resources/rspec/ext/client/1";
pub const EMULAB_NS: &str =
    "http://www.protogeni.net/resources/rspec/ext/emulab/1";
pub const JACKS_NS: &str =
    "http://www.protogeni.net/resources/rspec/ext/jacks/1";
pub const SCHEMA_LOCATION: &str = "http://www.geni.net/resources/rspec/3 \
    http://www.geni.net/resources/rspec/3/request.xsd";

/// Widest indentation [`render`] accepts, in spaces per nesting level.
pub const MAX_INDENT: u8 = 16;

struct RSpecWriter {
    w: Writer<Vec<u8>>,
}

impl RSpecWriter {
    fn new(indent: u8) -> Self {
        let w = if indent == 0 {
            Writer::new(Vec::new())
        } else {
            Writer::new_with_indent(Vec::new(), b' ', usize::from(indent))
        };
        Self { w }
    }

    fn event(&mut self, event: Event<'_>) -> Result<(), Error> {
        self.w
            .write_event(event)
            .map_err(|e| Error::Xml(e.to_string()))
    }

    fn open(
        &mut self,
        name: &str,
        attrs: &[(&str, &str)],
    ) -> Result<(), Error> {
        let mut e = BytesStart::new(name);
        e.extend_attributes(attrs.iter().copied());
        self.event(Event::Start(e))
    }

    fn empty(
        &mut self,
        name: &str,
        attrs: &[(&str, &str)],
    ) -> Result<(), Error> {
        let mut e = BytesStart::new(name);
        e.extend_attributes(attrs.iter().copied());
        self.event(Event::Empty(e))
    }

    fn close(&mut self, name: &str) -> Result<(), Error> {
        self.event(Event::End(BytesEnd::new(name)))
    }

    fn node(&mut self, n: &Node) -> Result<(), Error> {
        let exclusive = if n.exclusive() { "true" } else { "false" };
        self.open(
            "node",
            &[
                ("client_id", n.client_id()),
                ("exclusive", exclusive),
            ],
        )?;

        self.open("sliver_type", &[("name", n.sliver_type().as_str())])?;
        self.empty("disk_image", &[("name", n.disk_image().as_str())])?;
        self.close("sliver_type")?;

        self.empty(
            "hardware_type",
            &[("name", n.hardware_type().as_str())],
        )?;

        for ifx in n.interfaces() {
            self.empty("interface", &[("client_id", ifx.as_str())])?;
        }

        if let Some(x) = n.post_boot() {
            self.open("services", &[])?;
            self.empty(
                "execute",
                &[
                    ("shell", x.shell.as_str()),
                    ("command", x.command.as_str()),
                ],
            )?;
            self.close("services")?;
        }

        self.close("node")
    }

    fn link(&mut self, l: &Link) -> Result<(), Error> {
        self.open("link", &[("client_id", l.client_id.as_str())])?;
        for e in &l.endpoints {
            self.empty(
                "interface_ref",
                &[("client_id", e.interface.as_str())],
            )?;
        }
        self.close("link")
    }

    fn request(&mut self, r: &Request) -> Result<(), Error> {
        let decl = BytesDecl::new("1.0", Some("UTF-8"), None);
        self.event(Event::Decl(decl))?;
        self.open(
            "rspec",
            &[
                ("xmlns", RSPEC_NS),
                ("xmlns:xsi", XSI_NS),
                ("xmlns:client", CLIENT_NS),
                ("xmlns:emulab", EMULAB_NS),
                ("xmlns:jacks", JACKS_NS),
                ("xsi:schemaLocation", SCHEMA_LOCATION),
                ("type", "request"),
            ],
        )?;
        for n in r.nodes() {
            self.node(n)?;
        }
        for l in r.links() {
            self.link(l)?;
        }
        self.close("rspec")
    }

    fn finish(self) -> Result<String, Error> {
        String::from_utf8(self.w.into_inner())
            .map_err(|e| Error::Xml(e.to_string()))
    }
}

/// Render a request as an RSpec v3 request document. An `indent` of zero
/// produces a single line; more than [`MAX_INDENT`] is an error.
pub fn render(request: &Request, indent: u8) -> Result<String, Error> {
    if indent > MAX_INDENT {
        return Err(Error::Xml(format!(
            "indent {indent} exceeds maximum of {MAX_INDENT}"
        )));
    }
    let mut w = RSpecWriter::new(indent);
    w.request(request)?;
    w.finish()
}
