//! Integration tests for template rendering, lookup and modifiers.

use blame_text::interpreter::{Binding, BindingTable, Modifier, apply_modifier, lookup, render};

fn table() -> BindingTable {
    let mut table = BindingTable::new();
    table.insert("author.name", Binding::Text("Authorname".into()));
    table.insert("author.mail", Binding::Text("Author@Mail.Example".into()));
    table.insert(
        "commit.hash_short",
        Binding::Prefix {
            text: "1234567890123456789012345678901234567890".into(),
            default_len: 7,
        },
    );
    table
}

// =============================================================================
// Literals
// =============================================================================

#[test]
fn test_literal_templates_render_unchanged() {
    let table = table();
    for input in [
        "",
        "plain text",
        "costs $5 {maybe}",
        "${1} and ${ x} and ${}",
        "unicode ü ${",
    ] {
        assert_eq!(render(input, &table), input);
    }
}

// =============================================================================
// Lookup
// =============================================================================

#[test]
fn test_known_token() {
    assert_eq!(render("by ${author.name}", &table()), "by Authorname");
}

#[test]
fn test_unknown_token_echoes_name() {
    assert_eq!(render("${nope}", &table()), "nope");
}

#[test]
fn test_unknown_token_echo_drops_parameter() {
    assert_eq!(render("${nope,12}", &table()), "nope");
}

#[test]
fn test_unknown_token_still_gets_modifier() {
    assert_eq!(render("${nope|u}", &table()), "NOPE");
}

#[test]
fn test_lookup_default_truncation() {
    assert_eq!(lookup(&table(), "commit.hash_short", ""), "1234567");
}

#[test]
fn test_lookup_with_parameter() {
    assert_eq!(lookup(&table(), "commit.hash_short", "3"), "123");
}

#[test]
fn test_lookup_text_ignores_parameter() {
    assert_eq!(lookup(&table(), "author.name", "3"), "Authorname");
}

#[test]
fn test_lookup_unknown() {
    assert_eq!(lookup(&table(), "commit.tree", ""), "commit.tree");
}

#[test]
fn test_lookup_empty_table() {
    assert_eq!(lookup(&BindingTable::new(), "author.name", ""), "author.name");
}

// =============================================================================
// Modifiers
// =============================================================================

#[test]
fn test_modifier_rules() {
    assert_eq!(apply_modifier("abc", "u"), "ABC");
    assert_eq!(apply_modifier("ABC", "l"), "abc");
    assert_eq!(apply_modifier("x", "zz"), "x|zz");
    assert_eq!(apply_modifier("x", ""), "x");
}

#[test]
fn test_modifier_codes_are_case_sensitive() {
    assert_eq!(apply_modifier("x", "U"), "x|U");
    assert_eq!(Modifier::parse("L"), Modifier::Unknown("L"));
}

#[test]
fn test_modifier_unicode_case() {
    assert_eq!(apply_modifier("straße", "u"), "STRASSE");
    assert_eq!(apply_modifier("ÄÖÜ", "l"), "äöü");
}

#[test]
fn test_render_applies_modifiers() {
    let table = table();
    assert_eq!(render("${author.mail|l}", &table), "author@mail.example");
    assert_eq!(render("${author.name|u}", &table), "AUTHORNAME");
    assert_eq!(render("${author.name|x}", &table), "Authorname|x");
}

#[test]
fn test_render_parameter_and_modifier() {
    assert_eq!(render("${commit.hash_short,10|u}", &table()), "1234567890");
}

// =============================================================================
// Ordering and edge cases
// =============================================================================

#[test]
fn test_pieces_render_in_order() {
    assert_eq!(
        render("[${commit.hash_short}] ${author.name} <${author.mail|l}>", &table()),
        "[1234567] Authorname <author@mail.example>"
    );
}

#[test]
fn test_unterminated_token_kept() {
    let out = render("abc ${foo", &table());
    assert_eq!(out, "abc ${foo");
    assert!(out.ends_with("${foo"));
}

#[test]
fn test_unterminated_after_resolved_token() {
    assert_eq!(render("${author.name} ${foo", &table()), "Authorname ${foo");
}

#[test]
fn test_nested_opener_is_part_of_body() {
    // Body is "author.name${x", which has no binding.
    assert_eq!(
        render("${author.name${x}}", &table()),
        "author.name${x}"
    );
}
