// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use pretty_assertions::assert_eq;
use std::process::{Command, Output};

fn run(bin: &str, args: &[&str]) -> Output {
    let out = Command::new(bin)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("spawn profile binary");
    assert!(
        out.status.success(),
        "{bin} failed: {}",
        String::from_utf8_lossy(&out.stderr)
    );
    out
}

#[test]
fn ksplit_prints_rspec() {
    let out = run(env!("CARGO_BIN_EXE_ksplit"), &[]);
    assert!(out.stderr.is_empty(), "{}", String::from_utf8_lossy(&out.stderr));
    let doc = String::from_utf8(out.stdout).unwrap();

    assert!(doc.starts_with("<?xml"));
    assert!(doc.ends_with("</rspec>\n"));
    assert_eq!(doc.matches("<node ").count(), 1);
    assert!(doc.contains(r#"<hardware_type name="c220g2"/>"#));
    assert!(doc.contains(concat!(
        r#"<disk_image name="urn:publicid:IDN+emulab.net+image+"#,
        r#"emulab-ops//UBUNTU18-64-STD"/>"#,
    )));
    assert!(!doc.contains("<execute"));
}

#[test]
fn lvd_prints_rspec() {
    let out = run(env!("CARGO_BIN_EXE_lvd"), &[]);
    assert!(out.stderr.is_empty(), "{}", String::from_utf8_lossy(&out.stderr));
    let doc = String::from_utf8(out.stdout).unwrap();

    assert_eq!(doc.matches("<node ").count(), 2);
    assert_eq!(doc.matches(r#"<hardware_type name="c220g2"/>"#).count(), 2);
    assert_eq!(doc.matches("<link ").count(), 1);
    assert_eq!(doc.matches("<interface_ref ").count(), 2);
}

#[test]
fn output_is_byte_identical() {
    for bin in [env!("CARGO_BIN_EXE_ksplit"), env!("CARGO_BIN_EXE_lvd")] {
        let first = run(bin, &[]);
        let second = run(bin, &[]);
        assert_eq!(first.stdout, second.stdout);
    }
}

#[test]
fn post_boot_flag() {
    let out = run(
        env!("CARGO_BIN_EXE_ksplit"),
        &["--post-boot", "/local/repository/ksplit-top.sh"],
    );
    let doc = String::from_utf8(out.stdout).unwrap();
    assert!(doc.contains(
        r#"<execute shell="sh" command="/local/repository/ksplit-top.sh"/>"#
    ));
}

#[test]
fn json_output() {
    let out = run(env!("CARGO_BIN_EXE_lvd"), &["--format", "json"]);
    let doc = String::from_utf8(out.stdout).unwrap();
    assert!(doc.trim_start().starts_with('{'));
    assert!(doc.contains("\"link-0\""));
}

#[test]
fn oversized_indent_rejected() {
    let out = Command::new(env!("CARGO_BIN_EXE_ksplit"))
        .args(["--indent", "18446744073709551615"])
        .output()
        .expect("spawn profile binary");
    assert_eq!(out.status.code(), Some(2));
    assert!(out.stdout.is_empty());
}

#[test]
fn bad_flag_exits_nonzero() {
    let out = Command::new(env!("CARGO_BIN_EXE_lvd"))
        .arg("--no-such-flag")
        .output()
        .expect("spawn profile binary");
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
}
