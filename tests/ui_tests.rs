//! Tests for the presentation layer
//!
//! These tests verify:
//! - Command verb parsing (aliases, case, unknown input)
//! - Controller validation: trimming and empty-field rejection
//! - Error-to-message mapping for duplicate and missing ids
//! - List rendering in canonical line format
//! - A scripted end-to-end console session

use stockroom::ui::{Command, Console, ConsoleOptions, Controller, Severity};

// =============================================================================
// Command Parsing Tests
// =============================================================================

#[test]
fn test_parse_known_verbs() {
    assert_eq!(Command::parse("add"), Some(Command::Add));
    assert_eq!(Command::parse("find"), Some(Command::Find));
    assert_eq!(Command::parse("remove"), Some(Command::Remove));
    assert_eq!(Command::parse("list"), Some(Command::List));
    assert_eq!(Command::parse("help"), Some(Command::Help));
    assert_eq!(Command::parse("quit"), Some(Command::Quit));
}

#[test]
fn test_parse_aliases() {
    assert_eq!(Command::parse("a"), Some(Command::Add));
    assert_eq!(Command::parse("rm"), Some(Command::Remove));
    assert_eq!(Command::parse("ls"), Some(Command::List));
    assert_eq!(Command::parse("?"), Some(Command::Help));
    assert_eq!(Command::parse("exit"), Some(Command::Quit));
    assert_eq!(Command::parse("q"), Some(Command::Quit));
}

#[test]
fn test_parse_is_case_insensitive_and_trims() {
    assert_eq!(Command::parse("  ADD  "), Some(Command::Add));
    assert_eq!(Command::parse("List"), Some(Command::List));
}

#[test]
fn test_parse_rejects_unknown_and_blank_input() {
    assert_eq!(Command::parse(""), None);
    assert_eq!(Command::parse("   "), None);
    assert_eq!(Command::parse("frobnicate"), None);
}

// =============================================================================
// Controller Tests
// =============================================================================

#[test]
fn test_submit_add_trims_fields() {
    let mut controller = Controller::new();

    let reply = controller.submit_add("  A1  ", " Bolt ", " Shelf1 ");

    assert_eq!(reply.severity, Severity::Info);
    assert_eq!(controller.store().find_by_id("A1").unwrap().to_string(),
        "A1 - Bolt at Shelf1");
}

#[test]
fn test_submit_add_rejects_empty_fields() {
    let mut controller = Controller::new();

    for (id, description, location) in
        [("", "Bolt", "Shelf1"), ("A1", "  ", "Shelf1"), ("A1", "Bolt", "")]
    {
        let reply = controller.submit_add(id, description, location);
        assert_eq!(reply.severity, Severity::Warning);
        assert_eq!(reply.text, "All fields must be filled.");
    }

    // The store was never touched
    assert!(controller.store().is_empty());
}

#[test]
fn test_submit_add_duplicate_maps_to_warning() {
    let mut controller = Controller::new();
    controller.submit_add("A1", "Bolt", "Shelf1");

    let reply = controller.submit_add("A1", "Anvil", "Shelf2");

    assert_eq!(reply.severity, Severity::Warning);
    assert!(reply.text.contains("A1"));
    assert_eq!(controller.store().len(), 1);
}

#[test]
fn test_submit_find_renders_item_or_warning() {
    let mut controller = Controller::new();
    controller.submit_add("A1", "Bolt", "Shelf1");

    let found = controller.submit_find(" A1 ");
    assert_eq!(found.severity, Severity::Info);
    assert_eq!(found.text, "A1 - Bolt at Shelf1");

    let missing = controller.submit_find("A2");
    assert_eq!(missing.severity, Severity::Warning);
    assert!(missing.text.contains("A2"));

    let empty = controller.submit_find("   ");
    assert_eq!(empty.text, "Please enter an ID to find.");
}

#[test]
fn test_submit_remove_messages() {
    let mut controller = Controller::new();
    controller.submit_add("A1", "Bolt", "Shelf1");

    let removed = controller.submit_remove("A1");
    assert_eq!(removed.severity, Severity::Info);
    assert!(controller.store().is_empty());

    let missing = controller.submit_remove("A1");
    assert_eq!(missing.severity, Severity::Warning);
    assert!(missing.text.contains("A1"));

    let empty = controller.submit_remove("");
    assert_eq!(empty.text, "Please enter an ID to remove.");
}

#[test]
fn test_render_list_is_ordered_canonical_lines() {
    let mut controller = Controller::new();
    controller.submit_add("A1", "Wrench", "Shelf1");
    controller.submit_add("A2", "Anvil", "Shelf2");

    assert_eq!(
        controller.render_list(),
        vec![
            "A2 - Anvil at Shelf2".to_string(),
            "A1 - Wrench at Shelf1".to_string(),
        ]
    );
}

// =============================================================================
// Console Session Tests
// =============================================================================

fn run_session(script: &str, options: ConsoleOptions) -> String {
    let mut output = Vec::new();
    let mut console = Console::new(script.as_bytes(), &mut output, options);
    console.run().unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_scripted_session_add_list_remove_find() {
    let script = "\
add
A1
Bolt
Shelf1
add
A2
Anvil
Shelf2
list
remove
A1
find
A1
quit
";

    let output = run_session(script, ConsoleOptions::default());

    // The list after the second add is description-ordered
    assert!(output.contains("A2 - Anvil at Shelf2\nA1 - Bolt at Shelf1\n"));
    // Removal succeeded and the refreshed list holds only A2
    assert!(output.contains("Removed A1."));
    // The find after removal surfaces the missing id
    assert!(output.contains("warning: no item with id: A1"));
}

#[test]
fn test_session_rejects_empty_add_fields() {
    let script = "\
add
A1

Shelf1
list
quit
";

    let output = run_session(script, ConsoleOptions::default());

    assert!(output.contains("warning: All fields must be filled."));
    assert!(output.contains("(no items)"));
}

#[test]
fn test_session_reports_unknown_command() {
    let output = run_session("frobnicate\nquit\n", ConsoleOptions::default());
    assert!(output.contains("unknown command: frobnicate"));
}

#[test]
fn test_session_ends_at_end_of_input() {
    // No quit command; the loop must stop at EOF
    let output = run_session("list\n", ConsoleOptions::default());
    assert!(output.contains("(no items)"));
}

#[test]
fn test_auto_list_can_be_disabled() {
    let script = "\
add
A1
Bolt
Shelf1
quit
";
    let options = ConsoleOptions {
        auto_list: false,
        ..ConsoleOptions::default()
    };

    let output = run_session(script, options);

    assert!(output.contains("Added A1."));
    assert!(!output.contains("A1 - Bolt at Shelf1"));
}
