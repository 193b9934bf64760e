//! End-to-end tests: keystroke scripts through a simulated host input

use maskline::field::MaskedField;
use maskline::mask::{MaskError, MaskPreset, Selection, Template, Validation};
use maskline::messages::parse_script;
use maskline::{InputSession, SessionEvent};

fn session(preset: MaskPreset) -> InputSession {
    InputSession::new(MaskedField::from_preset(preset))
}

fn replay(session: &mut InputSession, script: &str) -> Vec<String> {
    let msgs = parse_script(script).unwrap();
    session.press_all(&msgs)
}

#[test]
fn test_credit_card_entry() {
    let mut s = session(MaskPreset::CreditCard);
    let emitted = replay(&mut s, "4111111111111111");

    assert_eq!(s.host().value(), "4111 1111 1111 1111");
    assert_eq!(emitted, vec!["4111 1111 1111 1111".to_string()]);
}

#[test]
fn test_correction_with_backspace() {
    let mut s = session(MaskPreset::Date);
    replay(&mut s, "129");
    assert_eq!(s.host().value(), "12/9_/____");

    // Caret sits after the 9; backspace restores its slot
    replay(&mut s, "<bs>");
    assert_eq!(s.host().value(), "12/__/____");
}

#[test]
fn test_backspace_run_skips_slots() {
    // Documented behavior: a delete leaves the caret at p - 1, so the next
    // Backspace removes the char before that and every other slot survives.
    let mut s = session(MaskPreset::Date);
    replay(&mut s, "12311999");

    let steps = [
        ("12/31/199_", 8),
        ("12/31/1_9_", 6),
        ("12/31/1_9_", 4),
        ("12/_1/1_9_", 2),
        ("1_/_1/1_9_", 0),
    ];
    for (text, caret) in steps {
        replay(&mut s, "<bs>");
        assert_eq!(s.host().value(), text);
        assert_eq!(s.field().caret(), caret);
    }

    let bs = parse_script("<bs>").unwrap();
    assert_eq!(s.press(&bs[0]), SessionEvent::Ignored);
    assert_eq!(s.host().value(), "1_/_1/1_9_");
}

#[test]
fn test_emits_again_after_overwrite() {
    let mut s = session(MaskPreset::Date);
    let first = replay(&mut s, "12311999");
    assert_eq!(first.len(), 1);

    // Re-type the day: every keystroke keeps the value complete
    let second = replay(&mut s, "<at:3>30");
    assert_eq!(s.host().value(), "12/30/1999");
    assert_eq!(second, vec!["12/31/1999".to_string(), "12/30/1999".to_string()]);
}

#[test]
fn test_selection_then_type_resets() {
    let mut s = session(MaskPreset::PhoneNumber);
    replay(&mut s, "5551234567<sel:0-4>9");

    assert_eq!(s.host().value(), "(###) ###-####");
    assert_eq!(s.host().selection(), Selection::collapsed(0));
}

#[test]
fn test_paste_is_rejected_and_display_kept() {
    let mut s = session(MaskPreset::PhoneNumber);
    replay(&mut s, "555");
    let msgs = parse_script("<paste:1234567>").unwrap();
    let event = s.press(&msgs[0]);

    assert!(matches!(event, SessionEvent::Rejected(MaskError::UnsupportedEdit(_))));
    assert_eq!(s.host().value(), "(555) ###-####");
}

#[test]
fn test_backspace_at_start_is_ignored() {
    let mut s = session(MaskPreset::Date);
    let msgs = parse_script("<home><bs>").unwrap();
    assert!(matches!(s.press(&msgs[0]), SessionEvent::Moved(_)));
    assert_eq!(s.press(&msgs[1]), SessionEvent::Ignored);
}

#[test]
fn test_invalid_validation_still_commits_display() {
    let field = MaskedField::new("Code", Template::new("___"), Validation::lenient("(unclosed"));
    let mut s = InputSession::new(field);
    let emitted = replay(&mut s, "abc");

    assert_eq!(s.host().value(), "abc");
    assert!(emitted.is_empty());
}

#[test]
fn test_case_insensitive_validation() {
    let field = MaskedField::new("Code", Template::new("___"), Validation::lenient("^ABC$"));
    let mut s = InputSession::new(field);
    let emitted = replay(&mut s, "abc");
    assert_eq!(emitted, vec!["abc".to_string()]);
}
