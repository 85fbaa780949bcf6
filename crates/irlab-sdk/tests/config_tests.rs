//! Integration tests for session configuration

mod common;

use anyhow::Result;
use common::{SessionAssertions, TestSession, PROGRAM};
use irlab_sdk::*;
use std::io::Write;

#[test]
fn test_yaml_config_drives_view() -> Result<()> {
    let config = SessionConfig::from_yaml(
        r#"
empty_output: "(nothing to show)"
query_template: "irlab-opt "
query_separator: ","
"#,
    )?;

    let mut session = TestSession::new().with_config(config).build();
    assert_eq!(session.output(), "(nothing to show)");

    session.set_source(PROGRAM);
    session.select_pass("cse")?;
    session.select_pass("dce")?;
    assert_eq!(session.query(), "irlab-opt cse,dce");
    Ok(())
}

#[test]
fn test_config_file_roundtrip() -> Result<()> {
    let config = SessionConfig::new()
        .with_empty_output("empty")
        .allow_unregistered(false);

    let mut file = tempfile::NamedTempFile::new()?;
    file.write_all(serde_yaml::to_string(&config)?.as_bytes())?;

    let loaded = SessionConfig::from_file(file.path())?;
    assert_eq!(loaded, config);
    Ok(())
}

#[test]
fn test_strict_vocabulary_from_config() -> Result<()> {
    let config = SessionConfig::from_json(r#"{"allow_unregistered": false}"#)?;
    let mut session = TestSession::new().with_config(config).build();

    session.set_source("module {\n  foo.bar\n}\n");
    session.assert_failure();
    assert!(session.output().contains("foo.bar"));

    session.set_source(PROGRAM);
    session.assert_module();
    Ok(())
}

#[test]
fn test_clipboard_copy() -> Result<()> {
    let session = TestSession::new().run(PROGRAM, &["constant-fold"]);

    let mut clipboard = MemoryClipboard::new();
    session.copy_query(&mut clipboard)?;
    assert_eq!(clipboard.text(), Some("irlab-opt -p \nconstant-fold"));

    session.copy_output(&mut clipboard)?;
    assert_eq!(clipboard.text(), Some(session.output()));
    Ok(())
}
