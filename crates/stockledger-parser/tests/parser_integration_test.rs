//! Integration tests for whole-source instruction parsing.

use stockledger_core::{Command, Pair};
use stockledger_parser::{parse, ParseErrorKind};

#[test]
fn test_mixed_source_keeps_input_order() {
    let source = "\
set-stock AB-6 100 CD-3 200
unknown-command AB-6 100
add-stock AB-6 50
order ON-123 AB-6 50
";
    let result = parse(source);
    assert_eq!(result.lines.len(), 4);

    let numbers: Vec<usize> = result.lines.iter().map(|line| line.number).collect();
    assert_eq!(numbers, [1, 2, 3, 4]);

    assert!(result.lines[0].parsed.is_ok());
    assert!(result.lines[1].parsed.is_err());
    assert!(result.lines[2].parsed.is_ok());
    assert!(result.lines[3].parsed.is_ok());

    assert_eq!(result.commands().count(), 3);
    assert_eq!(result.errors().count(), 1);
    assert!(result.has_errors());
}

#[test]
fn test_error_spans_point_into_source() {
    let source = "set-stock AB-6 100\nbogus-op ZZ-1 5\n";
    let result = parse(source);

    let err = result.errors().next().unwrap();
    assert_eq!(err.span.text(source), "bogus-op");
    assert_eq!(
        err.kind,
        ParseErrorKind::UnknownOperation("bogus-op".into())
    );
}

#[test]
fn test_commands_round_trip_through_display() {
    let source = "set-stock AB-6 100 CD-3 200\norder ON-123 AB-6 50\n";
    let result = parse(source);

    let rendered: Vec<String> = result.commands().map(|c| c.value.to_string()).collect();
    assert_eq!(
        rendered,
        ["set-stock AB-6 100 CD-3 200", "order ON-123 AB-6 50"]
    );
}

#[test]
fn test_indented_and_padded_lines() {
    let source = "  set-stock AB-6 1  \n\tadd-stock AB-6 2\n";
    let result = parse(source);

    assert_eq!(result.commands().count(), 2);
    let first = result.lines[0].parsed.as_ref().unwrap();
    assert_eq!(first.span.text(source), "set-stock AB-6 1");
}

#[test]
fn test_blank_lines_are_empty_unknown_operations() {
    let source = "set-stock AB-6 1\n\norder ON-1 AB-6 1\n";
    let result = parse(source);

    assert_eq!(result.lines.len(), 3);
    let err = result.lines[1].parsed.as_ref().unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::UnknownOperation(String::new()));
}

#[test]
fn test_pairing_is_positional() {
    // Tokens pair strictly by position; nothing reorders or recovers.
    let result = parse("set-stock 100 AB-6\n");
    let command = &result.commands().next().unwrap().value;
    assert_eq!(
        *command,
        Command::SetStock(vec![Pair::new("100", "AB-6")])
    );
}
