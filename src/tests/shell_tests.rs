//! Transcript tests for the interactive shell.
//!
//! Each test feeds a script to the shell with an empty prompt and compares the
//! printed lines.

use crate::config::PointsConfig;
use crate::error::shell::ShellError;
use crate::shell::{Flow, Shell, HELP_MESSAGE};
use crate::tests::MockErrorReporter;
use std::sync::Arc;
use test_case::test_case;

fn quiet_config() -> PointsConfig {
    let mut config = PointsConfig::default();
    config.shell.prompt = String::new();
    config
}

/// Runs `script` and returns everything the shell printed.
fn run_script(script: &str) -> String {
    let mut output = Vec::new();
    Shell::new(script.as_bytes(), &mut output, &quiet_config())
        .run()
        .unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_transcript_basic_session() {
    let output = run_script(
        "add ab 3\n\
         add ac 5\n\
         points ab\n\
         trie\n\
         change ab 7\n\
         p ab\n\
         delete ac\n\
         t\n\
         quit\n",
    );
    assert_eq!(output, "3\n+(a(b[3]c[5]))\n7\n+(a(b[7]))\n");
}

#[test_case("add", "Error! No Name." ; "add without name")]
#[test_case("add bob", "Error! No points." ; "add without points")]
#[test_case("add b0b 3", "Error! Names cannot contain numbers." ; "add name with digit")]
#[test_case("change bob 3", "Error! 'bob' could not be found." ; "change missing")]
#[test_case("delete bob", "Error! 'bob' could not be found." ; "delete missing")]
#[test_case("points bob", "Error! 'bob' could not be found or does not have any points." ; "points missing")]
#[test_case("", "Error! No command." ; "empty line")]
#[test_case("jump", "Error! Invalid command." ; "unknown command")]
#[test_case("ADD bob 1", "Error! Only use lowercase letters." ; "uppercase line")]
#[test_case("add bob 1!", "Error! Only use lowercase letters." ; "punctuation")]
fn test_transcript_errors(line: &str, expected: &str) {
    let output = run_script(&format!("{line}\nquit\n"));
    assert_eq!(output, format!("{expected}\n"));
}

#[test]
fn test_duplicate_add_is_reported() {
    let output = run_script("add ann 1\nadd ann 2\npoints ann\nq\n");
    assert_eq!(output, "Error! 'ann' is already allocated.\n1\n");
}

#[test]
fn test_prefix_entry_is_not_found() {
    let output = run_script("add abc 2\npoints ab\ndelete ab\ntrie\nq\n");
    assert_eq!(
        output,
        "Error! 'ab' could not be found or does not have any points.\n\
         Error! 'ab' could not be found.\n\
         +(a(b(c[2])))\n"
    );
}

#[test]
fn test_new_discards_entries() {
    let output = run_script("add x 1\nnew\ntrie\npoints x\nq\n");
    assert_eq!(
        output,
        "+\nError! 'x' could not be found or does not have any points.\n"
    );
}

#[test]
fn test_help_prints_message() {
    let output = run_script("help\nquit\n");
    assert_eq!(output, format!("{HELP_MESSAGE}\n"));
}

#[test]
fn test_quit_stops_reading() {
    let output = run_script("quit\nadd ann 1\ntrie\n");
    assert_eq!(output, "");
}

#[test]
fn test_end_of_input_ends_session() {
    let output = run_script("add ann 1\ntrie");
    assert_eq!(output, "+(a(n(n[1])))\n\n");
}

#[test]
fn test_prompt_is_written_before_each_line() {
    let mut output = Vec::new();
    Shell::new("trie\nquit\n".as_bytes(), &mut output, &PointsConfig::default())
        .run()
        .unwrap();
    assert_eq!(String::from_utf8(output).unwrap(), "trie> +\ntrie> ");
}

#[test]
fn test_invalid_utf8_line_is_rejected_and_session_continues() {
    let mut output = Vec::new();
    Shell::new(
        &b"add ab 3\n\xff\xfe\ntrie\nquit\n"[..],
        &mut output,
        &quiet_config(),
    )
    .run()
    .unwrap();
    assert_eq!(
        String::from_utf8(output).unwrap(),
        "Error! Only use lowercase letters.\n+(a(b[3]))\n"
    );
}

#[test]
fn test_windows_line_endings() {
    let output = run_script("add ann 4\r\npoints ann\r\nquit\r\n");
    assert_eq!(output, "4\n");
}

#[test]
fn test_configured_root_label() {
    let mut config = quiet_config();
    config.trie.root_label = '*';
    let mut output = Vec::new();
    Shell::new("add q 1\ntrie\nquit\n".as_bytes(), &mut output, &config)
        .run()
        .unwrap();
    assert_eq!(String::from_utf8(output).unwrap(), "*(q[1])\n");
}

#[test]
fn test_engine_errors_reach_reporter() {
    let mut config = quiet_config();
    config.trie.max_key_length = 3;
    let reporter = Arc::new(MockErrorReporter::new());

    let mut output = Vec::new();
    Shell::new("add abcd 1\nquit\n".as_bytes(), &mut output, &config)
        .with_reporter(reporter.clone())
        .run()
        .unwrap();

    assert_eq!(
        String::from_utf8(output).unwrap(),
        "Error! Key of length 4 exceeds maximum key length of 3\n"
    );
    assert_eq!(reporter.reported_count(), 1);
    assert!(reporter.messages()[0].contains("add abcd 1"));
}

#[test]
fn test_handle_line_results() {
    let mut output = Vec::new();
    let mut shell = Shell::new(&b""[..], &mut output, &quiet_config());

    assert_eq!(shell.handle_line("add ann 1").unwrap(), Flow::Continue);
    assert!(matches!(
        shell.handle_line("add ann 2"),
        Err(ShellError::AlreadyAllocated(name)) if name == "ann"
    ));
    assert_eq!(shell.trie().points("ann").unwrap(), Some(1));
    assert_eq!(shell.handle_line("quit").unwrap(), Flow::Quit);
}
