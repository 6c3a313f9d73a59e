//! Process-wide default prefixes.
//!
//! Kept in its own test binary, in a single test, because it mutates
//! state every formatter built with `DefaultLogFormatter::new` reads.

use std::sync::Arc;

use loglines::{DefaultLogFormatter, FormatterDefaults, Log, LogFormatter, Logger, Prefixes, TestWriter};

#[test]
fn default_prefixes_are_snapshotted_at_construction() {
    let defaults = FormatterDefaults::global();
    assert_eq!(defaults.snapshot(), Prefixes::default());

    let before = DefaultLogFormatter::new();
    let writer = Arc::new(TestWriter::new());
    let log_before = Log::with_writers("Before", vec![writer.clone()]).unwrap();

    defaults.set_message_prefix("INFO");
    defaults.set_warning_prefix("WARN");
    defaults.set_error_prefix("ERROR");

    // Existing formatters and logs keep their prefixes
    assert_eq!(before.format_message("X", "m"), "Info (X): m");
    assert_eq!(before.format_warning("X", "w"), "Warn (X): w");
    assert_eq!(before.format_error("X", "e"), "Error (X): e");
    log_before.warn("still old").unwrap();
    assert_eq!(writer.logged_warnings(), vec!["Warn (Before): still old"]);

    // New ones adopt the changed defaults
    let after = DefaultLogFormatter::new();
    assert_eq!(after.format_message("X", "m"), "INFO (X): m");
    assert_eq!(after.format_warning("X", "w"), "WARN (X): w");
    assert_eq!(after.format_error("X", "e"), "ERROR (X): e");

    let log_after = Log::with_writers("After", vec![writer.clone()]).unwrap();
    log_after.err("new").unwrap();
    assert_eq!(writer.logged_errors(), vec!["ERROR (After): new"]);

    defaults.reset();
    assert_eq!(DefaultLogFormatter::new().message_prefix(), "Info");
}
