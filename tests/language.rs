use std::fs::{self};

use prefix_calc::{
    interpreter::session::{Session, SessionConfig},
    run_script,
};
use walkdir::WalkDir;

#[test]
fn session_transcripts_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/sessions").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| {
                                          e.path().extension().is_some_and(|ext| ext == "session")
                                      })
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        let (input, expected) = split_transcript(&content);
        count += 1;
        let output = run_script(&input, SessionConfig::default()).unwrap_or_else(|e| {
                                                                      panic!("Transcript {path:?} failed: {e}")
                                                                  });
        assert_eq!(output, expected, "Transcript {path:?} produced unexpected output");
    }

    assert!(count > 0, "No transcripts found in tests/sessions");
}

/// Splits a transcript into session input and expected output. Lines starting
/// with `> ` are expected output, lines starting with `#` are comments, and
/// every other line is fed to the session as is.
fn split_transcript(content: &str) -> (String, String) {
    let mut input = String::new();
    let mut expected = String::new();

    for line in content.lines() {
        if let Some(out) = line.strip_prefix("> ") {
            expected.push_str(out);
            expected.push('\n');
        } else if !line.starts_with('#') {
            input.push_str(line);
            input.push('\n');
        }
    }

    (input, expected)
}

fn assert_output(src: &str, expected: &str) {
    match run_script(src, SessionConfig::default()) {
        Ok(output) => assert_eq!(output, expected, "Script:\n{src}"),
        Err(e) => panic!("Script failed: {e}"),
    }
}

#[test]
fn integer_and_double_evaluation() {
    assert_output("= + 2 3\ni\n", "5\n");
    assert_output("= * ~ 4 5\ni\n", "-20\n");
    assert_output("= / 1 3\nd\n", "0.33333\n");
    assert_output("= - 1 * 2 3\nd\n", "-5.00000\n");
}

#[test]
fn division_by_zero_is_reported_in_integer_mode_only() {
    assert_output("= / 10 0\ni\nd\n", "Divide Error\n∞\n");
}

#[test]
fn overflow_is_reported_in_integer_mode_only() {
    assert_output("= * 2147483647 2\ni\nd\n", "Overflow Error\n4294967294.00000\n");
}

#[test]
fn negating_the_smallest_integer_wraps() {
    assert_output("= ~ -2147483648\ni\nd\n", "-2147483648\n2147483648.00000\n");
}

#[test]
fn halfway_values_round_away_from_zero() {
    assert_output("= / 1 64\nd\n= / ~ 1 64\nd\n= / 1 128\nd\n",
                  "0.01563\n-0.01563\n0.00781\n");
}

#[test]
fn failed_rebuild_discards_previous_tree() {
    assert_output("= + 2 3\ni\n= + 2\ni\nd\n",
                  "5\nFormat Error\nExpression Missing\nExpression Missing\n");
}

#[test]
fn marker_only_line_is_format_error() {
    assert_output("=\ni\n", "Format Error\nExpression Missing\n");
    assert_output("=    \nd\n", "Format Error\nExpression Missing\n");
}

#[test]
fn unknown_commands_do_not_touch_the_tree() {
    assert_output("= 7\nx\ni\n", "Format Error\n7\n");
    assert_output("I\nD\nEND\n", "Format Error\nFormat Error\nFormat Error\n");
}

#[test]
fn empty_lines_are_ignored() {
    assert_output("\n\n= 1\n\ni\n", "1\n");
}

#[test]
fn end_stops_the_session() {
    assert_output("= 1\nend\ni\n", "");
}

#[test]
fn session_stops_at_end_of_input_without_end() {
    assert_output("= ~ 3\ni", "-3\n");
}

#[test]
fn windows_line_endings_are_accepted() {
    assert_output("= + 1 1\r\ni\r\nend\r\n", "2\n");
}

#[test]
fn precision_is_configurable() {
    let config = SessionConfig { precision: 2,
                                 ..SessionConfig::default() };
    let output = run_script("= / 2 3\nd\n", config).unwrap();
    assert_eq!(output, "0.67\n");
}

#[test]
fn verbose_diagnostics_are_kept_out_of_the_output() {
    let config = SessionConfig { verbose: true,
                                 ..SessionConfig::default() };
    let mut output = Vec::new();
    let mut diagnostics = Vec::new();

    Session::new(config).run_with_diagnostics("= + 2 ~ 3\ni\n= / 1 0\ni\nx\n".as_bytes(),
                                              &mut output,
                                              &mut diagnostics)
                        .unwrap();

    assert_eq!(String::from_utf8(output).unwrap(), "-1\nDivide Error\nFormat Error\n");
    assert_eq!(String::from_utf8(diagnostics).unwrap(),
               "line 1: built '+ 2 ~ 3' (depth 3)\n\
                line 3: built '/ 1 0' (depth 2)\n\
                line 4: Division by zero: 1 / 0.\n\
                line 5: Unknown command: 'x'.\n");
}

#[test]
fn quiet_sessions_write_no_diagnostics() {
    let mut output = Vec::new();
    let mut diagnostics = Vec::new();

    Session::new(SessionConfig::default()).run_with_diagnostics("= + 2\n= 1\ni\n".as_bytes(),
                                                                &mut output,
                                                                &mut diagnostics)
                                          .unwrap();

    assert_eq!(String::from_utf8(output).unwrap(), "Format Error\n1\n");
    assert!(diagnostics.is_empty());
}
