//! Tests for the textinput component.

use super::*;
use bubbletea_rs::{KeyMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers};
use lipgloss_extras::lipgloss;

fn key(code: KeyCode) -> Msg {
    Box::new(KeyMsg {
        key: code,
        modifiers: KeyModifiers::NONE,
    })
}

fn ctrl(c: char) -> Msg {
    Box::new(KeyMsg {
        key: KeyCode::Char(c),
        modifiers: KeyModifiers::CONTROL,
    })
}

fn type_str(input: &mut Model, s: &str) {
    for c in s.chars() {
        input.update(key(KeyCode::Char(c)));
    }
}

fn plain(s: &str) -> String {
    lipgloss::strip_ansi(s)
}

#[test]
fn test_new_default_values() {
    let input = new();

    assert_eq!(input.prompt, "> ");
    assert_eq!(input.echo_character, '*');
    assert_eq!(input.char_limit, 0);
    assert_eq!(input.value(), "");
    assert_eq!(input.position(), 0);
    assert!(!input.focused());
    assert_eq!(input.echo_mode, EchoMode::EchoNormal);
    assert_eq!(input.class_name(), "");
}

#[test]
fn test_set_value_moves_caret_to_end() {
    let mut input = new();
    input.set_value("hello world");

    assert_eq!(input.value(), "hello world");
    assert_eq!(input.position(), 11);
    assert_eq!(input.selection_range(), (11, 11));
}

#[test]
fn test_set_value_respects_char_limit() {
    let mut input = new();
    input.set_char_limit(5);
    input.set_value("hello world");

    assert_eq!(input.value(), "hello");
}

#[test]
fn test_set_value_stores_control_characters_verbatim() {
    let mut input = new();
    input.set_value("  tab\there  ");
    assert_eq!(input.value(), "  tab\there  ");
}

#[test]
fn test_set_cursor_clamps_and_collapses_selection() {
    let mut input = new();
    input.set_value("hello");
    input.set_selection_range(1, 4);
    assert_eq!(input.selection_range(), (1, 4));

    input.set_cursor(100);
    assert_eq!(input.position(), 5);
    assert_eq!(input.selection_range(), (5, 5));
}

#[test]
fn test_selection_range_is_ordered_and_clamped() {
    let mut input = new();
    input.set_value("secret");

    input.set_selection_range(4, 1);
    assert_eq!(input.selection_range(), (1, 4));
    assert_eq!(input.position(), 1);

    input.set_selection_range(2, 99);
    assert_eq!(input.selection_range(), (2, 6));
}

#[test]
fn test_focus_and_blur() {
    let mut input = new();
    assert!(!input.focused());

    std::mem::drop(input.focus());
    assert!(input.focused());

    input.blur();
    assert!(!input.focused());
}

#[test]
fn test_keys_ignored_while_blurred() {
    let mut input = new();
    input.update(key(KeyCode::Char('a')));
    assert_eq!(input.value(), "");
}

#[test]
fn test_typing_and_editing() {
    let mut input = new();
    std::mem::drop(input.focus());

    type_str(&mut input, "hunter2");
    assert_eq!(input.value(), "hunter2");

    input.update(key(KeyCode::Backspace));
    assert_eq!(input.value(), "hunter");

    input.update(key(KeyCode::Home));
    assert_eq!(input.position(), 0);
    input.update(key(KeyCode::Delete));
    assert_eq!(input.value(), "unter");

    input.update(ctrl('e'));
    assert_eq!(input.position(), 5);
    input.update(ctrl('u'));
    assert_eq!(input.value(), "");
}

#[test]
fn test_typing_replaces_selection() {
    let mut input = new();
    std::mem::drop(input.focus());
    input.set_value("abcdef");
    input.set_selection_range(1, 4);

    input.update(key(KeyCode::Char('X')));
    assert_eq!(input.value(), "aXef");
    assert_eq!(input.position(), 2);
}

#[test]
fn test_backspace_deletes_selection() {
    let mut input = new();
    std::mem::drop(input.focus());
    input.set_value("abcdef");
    input.set_selection_range(0, 3);

    input.update(key(KeyCode::Backspace));
    assert_eq!(input.value(), "def");
    assert_eq!(input.position(), 0);
}

#[test]
fn test_char_limit_while_typing() {
    let mut input = new();
    std::mem::drop(input.focus());
    input.set_char_limit(3);

    type_str(&mut input, "abcdef");
    assert_eq!(input.value(), "abc");
}

#[test]
fn test_word_movement_depends_on_echo_mode() {
    let mut input = new();
    std::mem::drop(input.focus());
    input.set_value("correct horse battery");

    input.update(ctrl('w'));
    assert_eq!(input.value(), "correct horse ");

    input.set_echo_mode(EchoMode::EchoPassword);
    input.update(ctrl('w'));
    assert_eq!(input.value(), "");
}

#[test]
fn test_echo_modes() {
    let mut input = new();
    input.set_value("secret");

    input.set_echo_mode(EchoMode::EchoNormal);
    assert!(plain(&input.view()).contains("secret"));

    input.set_echo_mode(EchoMode::EchoPassword);
    let masked = plain(&input.view());
    assert!(masked.contains("******"));
    assert!(!masked.contains("secret"));

    input.set_echo_mode(EchoMode::EchoNone);
    let hidden = plain(&input.view());
    assert!(!hidden.contains("secret"));
    assert!(!hidden.contains('*'));
}

#[test]
fn test_input_type_maps_to_echo_mode() {
    assert_eq!(EchoMode::from(InputType::Password), EchoMode::EchoPassword);
    assert_eq!(EchoMode::from(InputType::Text), EchoMode::EchoNormal);
}

#[test]
fn test_placeholder() {
    let mut input = new();
    input.set_placeholder("Password");
    assert!(plain(&input.view()).contains("Password"));

    input.set_value("x");
    assert!(!plain(&input.view()).contains("Password"));
}

#[test]
fn test_scrolling_keeps_caret_visible() {
    let mut input = new();
    std::mem::drop(input.focus());
    input.set_width(5);
    input.set_value("abcdefghij");

    let view = plain(&input.view());
    assert!(view.contains("fghij"));
    assert!(!view.contains("abc"));

    input.cursor_start();
    let view = plain(&input.view());
    assert!(view.contains("abcd"));
}

#[test]
fn test_wide_characters_do_not_panic() {
    let mut input = new();
    input.set_width(8);
    input.set_value("パスワードを入力してください");
    input.set_echo_mode(EchoMode::EchoPassword);
    let _ = input.view();
    input.cursor_start();
    let _ = input.view();
}

#[test]
fn test_binding() {
    let mut input = new();
    let a = InputRef::new();
    let b = InputRef::new();
    assert_ne!(a, b);
    assert!(!input.is_bound_to(a));

    input.bind(a);
    assert!(input.is_bound_to(a));
    assert!(!input.is_bound_to(b));

    input.unbind();
    assert!(!input.is_bound_to(a));
}

#[test]
fn test_paste_error_is_recorded() {
    let mut input = new();
    std::mem::drop(input.focus());
    input.update(Box::new(PasteErrMsg("denied".to_string())));
    assert_eq!(input.err.as_deref(), Some("denied"));

    input.update(Box::new(PasteMsg("abc".to_string())));
    assert_eq!(input.value(), "abc");
}
