//! Keystroke messages for driving a simulated host input, and the small script
//! syntax the CLI uses to spell them.
//!
//! Script syntax: plain characters are typed one at a time. Special keys are
//! written in angle brackets:
//!
//! | Token        | Key                                  |
//! |--------------|--------------------------------------|
//! | `<bs>`       | Backspace                            |
//! | `<del>`      | Delete (forward)                     |
//! | `<left>`     | Caret one left                       |
//! | `<right>`    | Caret one right                      |
//! | `<home>`     | Caret to start                       |
//! | `<end>`      | Caret to end                         |
//! | `<at:N>`     | Caret to position N                  |
//! | `<sel:A-B>`  | Select from A to B                   |
//! | `<paste:T>`  | Paste T (rejected as multi-char)     |
//! | `<lt>`       | Type a literal `<`                   |

/// A single keystroke or pointer action against a text input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMsg {
    /// Type one character
    Type(char),
    /// Backspace
    DeleteBackward,
    /// Delete key
    DeleteForward,
    /// Move the caret, collapsing any selection
    MoveLeft,
    MoveRight,
    MoveHome,
    MoveEnd,
    MoveTo(usize),
    /// Select a range (anchor, head)
    Select(usize, usize),
    /// Paste text
    Paste(String),
}

/// Parse a keystroke script into messages.
pub fn parse_script(script: &str) -> Result<Vec<InputMsg>, String> {
    let mut msgs = Vec::new();
    let mut rest = script;

    while let Some(ch) = rest.chars().next() {
        if ch != '<' {
            msgs.push(InputMsg::Type(ch));
            rest = &rest[ch.len_utf8()..];
            continue;
        }

        let close = rest
            .find('>')
            .ok_or_else(|| format!("Unterminated key token in {:?}", rest))?;
        let token = &rest[1..close];
        msgs.push(parse_token(token)?);
        rest = &rest[close + 1..];
    }

    Ok(msgs)
}

fn parse_token(token: &str) -> Result<InputMsg, String> {
    let (name, arg) = match token.split_once(':') {
        Some((name, arg)) => (name, Some(arg)),
        None => (token, None),
    };

    match (name, arg) {
        ("bs", None) => Ok(InputMsg::DeleteBackward),
        ("del", None) => Ok(InputMsg::DeleteForward),
        ("left", None) => Ok(InputMsg::MoveLeft),
        ("right", None) => Ok(InputMsg::MoveRight),
        ("home", None) => Ok(InputMsg::MoveHome),
        ("end", None) => Ok(InputMsg::MoveEnd),
        ("lt", None) => Ok(InputMsg::Type('<')),
        ("at", Some(pos)) => Ok(InputMsg::MoveTo(parse_position(pos)?)),
        ("sel", Some(range)) => {
            let (a, b) = range
                .split_once('-')
                .ok_or_else(|| format!("Invalid selection range: {}", range))?;
            Ok(InputMsg::Select(parse_position(a)?, parse_position(b)?))
        }
        ("paste", Some(text)) => Ok(InputMsg::Paste(text.to_string())),
        _ => Err(format!("Unknown key token: <{}>", token)),
    }
}

fn parse_position(s: &str) -> Result<usize, String> {
    s.trim()
        .parse()
        .map_err(|_| format!("Invalid position: {}", s))
}
