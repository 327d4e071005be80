// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Command line shared by the profile binaries.

use crate::Profile;
use anyhow::{Context, Result};
use clap::{CommandFactory, FromArgMatches, Parser, ValueEnum};
use rspec::xml::MAX_INDENT;
use rspec::{log::init_logger, Execute, Format, PortalContext};
use slog::{debug, Logger};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(version, long_about = None)]
pub struct Cli {
    /// Write the request to this file instead of standard output.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Xml)]
    pub format: OutputFormat,

    /// Spaces per nesting level in XML output, 0 for a single line.
    #[arg(
        long,
        default_value_t = 2,
        value_parser = clap::value_parser!(u8).range(0..=i64::from(MAX_INDENT)),
    )]
    pub indent: u8,

    /// Command every node runs after it boots.
    #[arg(long)]
    pub post_boot: Option<String>,

    /// Shell used to run the post-boot command.
    #[arg(long, default_value = "sh")]
    pub shell: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Xml,
    Json,
}

impl From<OutputFormat> for Format {
    fn from(value: OutputFormat) -> Self {
        match value {
            OutputFormat::Xml => Format::Xml,
            OutputFormat::Json => Format::Json,
        }
    }
}

impl Cli {
    /// Parse the process arguments, titling help output with the profile's
    /// description.
    pub fn parse_for(description: &'static str) -> Self {
        let matches = Self::command().about(description).get_matches();
        Self::from_arg_matches(&matches).unwrap_or_else(|e| e.exit())
    }

    pub fn context(&self, log: Logger) -> PortalContext {
        PortalContext::new(log)
            .with_format(self.format.into())
            .with_indent(self.indent)
    }

    pub fn execute(&self) -> Option<Execute> {
        self.post_boot
            .as_ref()
            .map(|command| Execute::new(self.shell.clone(), command.clone()))
    }
}

/// Build `profile` and print it where the command line says.
pub fn run(description: &'static str, profile: Profile) -> Result<()> {
    let cli = Cli::parse_for(description);
    emit(&cli, init_logger(), profile)
}

pub fn emit(cli: &Cli, log: Logger, profile: Profile) -> Result<()> {
    let pc = cli.context(log);
    debug!(pc.log, "building profile"; "cli" => format!("{:?}", cli));

    let request = profile(&pc, cli.execute()).context("build request")?;

    match &cli.output {
        Some(path) => {
            let f = File::create(path)
                .with_context(|| format!("create {}", path.display()))?;
            pc.print_request_rspec(&request, BufWriter::new(f))
                .with_context(|| format!("write {}", path.display()))?;
        }
        None => {
            pc.print_request_rspec(&request, std::io::stdout().lock())
                .context("write request")?;
        }
    }
    Ok(())
}
