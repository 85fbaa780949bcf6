//! Unit tests for Session

use super::*;
use crate::clipboard::{Clipboard, ClipboardError, MemoryClipboard};
use crate::config::SessionConfig;
use crate::error::SdkError;
use crate::executor::ExecutionResult;
use crate::services::StandardServices;
use std::sync::Arc;

const PROGRAM: &str = "module {
  %a = arith.constant {value = 4} : i64
  %b = arith.constant {value = 5} : i64
  %c = arith.addi %a, %b : i64
  test.print %c
}
";

struct BrokenClipboard;

impl Clipboard for BrokenClipboard {
    fn set_text(&mut self, _text: &str) -> std::result::Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable("no display".to_string()))
    }
}

#[test]
fn test_initial_state() {
    let session = Session::default();
    assert_eq!(session.source(), "");
    assert!(session.pipeline().is_empty());
    assert_eq!(session.result(), &ExecutionResult::Empty);
    assert_eq!(session.output(), "No input");
    assert_eq!(session.query(), "irlab-opt -p \n");
    assert_eq!(session.recompute_count(), 0);
}

#[test]
fn test_each_mutation_recomputes_once() {
    let mut session = Session::default();

    session.set_source(PROGRAM);
    assert_eq!(session.recompute_count(), 1);

    session.select_pass("constant-fold").unwrap();
    assert_eq!(session.recompute_count(), 2);

    session.clear_passes();
    assert_eq!(session.recompute_count(), 3);

    session.clear_source();
    assert_eq!(session.recompute_count(), 4);
}

#[test]
fn test_view_is_current_after_each_mutation() {
    let mut session = Session::default();
    session.set_source(PROGRAM);
    assert_eq!(session.output(), PROGRAM);

    session.select_pass("constant-fold").unwrap();
    session.select_pass("dce").unwrap();
    assert_eq!(
        session.output(),
        "module {\n  %c = arith.constant {value = 9} : i64\n  test.print %c\n}\n"
    );
    assert_eq!(session.query(), "irlab-opt -p \nconstant-fold, \ndce");

    session.clear_source();
    assert_eq!(session.output(), "No input");
    assert_eq!(session.query(), "irlab-opt -p \nconstant-fold, \ndce");
}

#[test]
fn test_unknown_pass_rejected_without_recompute() {
    let mut session = Session::default();
    session.set_source(PROGRAM);

    let err = session.select_pass("loop-unroll").unwrap_err();
    assert!(matches!(err, SdkError::UnknownPass(ref name) if name == "loop-unroll"));
    assert_eq!(session.recompute_count(), 1);
    assert!(session.pipeline().is_empty());
    assert_eq!(session.output(), PROGRAM);
}

#[test]
fn test_copy_output_and_query() {
    let mut session = Session::default();
    session.set_source(PROGRAM);
    session.select_pass("verify").unwrap();

    let mut clipboard = MemoryClipboard::new();
    session.copy_output(&mut clipboard).unwrap();
    assert_eq!(clipboard.text(), Some(PROGRAM));

    session.copy_query(&mut clipboard).unwrap();
    assert_eq!(clipboard.text(), Some("irlab-opt -p \nverify"));
    assert_eq!(session.recompute_count(), 2);
}

#[test]
fn test_clipboard_failure_leaves_state_untouched() {
    let mut session = Session::default();
    session.set_source(PROGRAM);
    let before = session.view().clone();

    let err = session.copy_output(&mut BrokenClipboard).unwrap_err();
    assert!(matches!(err, SdkError::Clipboard(_)));
    assert_eq!(session.view(), &before);
    assert_eq!(session.recompute_count(), 1);
}

#[test]
fn test_strict_config_rejects_unregistered_ops() {
    let mut session = Session::new(SessionConfig::new().allow_unregistered(false)).unwrap();
    session.set_source("module {\n  foo.bar\n}\n");
    assert!(session.result().is_failure());
    assert!(session
        .output()
        .starts_with("<input>:2:3: error:"));
}

#[test]
fn test_available_passes_sorted() {
    let session = Session::default();
    let names: Vec<_> = session
        .available_passes()
        .into_iter()
        .map(|info| info.name)
        .collect();
    assert_eq!(
        names,
        vec!["canonicalize", "constant-fold", "cse", "dce", "rename-values", "verify"]
    );
}

#[test]
fn test_query_joins_passes_with_comma_space_newline() {
    let mut session = Session::default();
    session.select_pass("cse").unwrap();
    session.select_pass("dce").unwrap();
    assert_eq!(session.query(), "irlab-opt -p \ncse, \ndce");
}

#[test]
fn test_new_rejects_empty_sentinel() {
    let err = Session::new(SessionConfig::new().with_empty_output("")).unwrap_err();
    assert!(matches!(err, SdkError::ConfigError(_)));
}

#[test]
fn test_with_services_rejects_empty_sentinel() {
    let services = Arc::new(StandardServices::new());
    let err = Session::with_services(SessionConfig::new().with_empty_output(""), services)
        .unwrap_err();
    assert!(matches!(err, SdkError::ConfigError(_)));
}

#[test]
fn test_custom_sentinel_shown_for_empty_source() {
    let mut session = Session::new(SessionConfig::new().with_empty_output("(nothing)")).unwrap();
    session.set_source(PROGRAM);
    session.clear_source();
    assert_eq!(session.output(), "(nothing)");
}
