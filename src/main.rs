//! maskline - replay keystrokes through a masked input

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use maskline::cli::CliArgs;
use maskline::{InputSession, SessionEvent};

/// Final state printed with `--json`
#[derive(Debug, Serialize)]
struct ReplayReport<'a> {
    label: &'a str,
    template: &'a str,
    text: &'a str,
    caret: usize,
    unmasked: String,
    emitted: Vec<String>,
    rejected: usize,
}

fn main() -> Result<()> {
    let args = CliArgs::parse();
    maskline::tracing::init();

    if args.write_config {
        args.save_default_config().context("Failed to write config")?;
        return Ok(());
    }

    let replay = args
        .into_config()
        .map_err(|e| anyhow::anyhow!(e))
        .context("Invalid arguments")?;

    let mut session = InputSession::new(replay.field);
    let mut emitted = Vec::new();
    let mut rejected = 0;

    for key in &replay.keys {
        match session.press(key) {
            SessionEvent::Edited(outcome) => {
                if let Some(value) = outcome.emitted {
                    if !replay.json {
                        println!("{}: {}", session.field().label(), value);
                    }
                    emitted.push(value);
                }
            }
            SessionEvent::Rejected(err) => {
                tracing::warn!("{:?} rejected: {}", key, err);
                rejected += 1;
            }
            SessionEvent::Moved(_) | SessionEvent::Ignored => {}
        }
    }

    let field = session.field();
    if replay.json {
        let report = ReplayReport {
            label: field.label(),
            template: field.template().as_str(),
            text: field.text(),
            caret: field.caret(),
            unmasked: field.state().unmasked(field.template()),
            emitted,
            rejected,
        };
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{}", json);
    } else {
        println!("{}", field.text());
        println!("{}^ caret {}", " ".repeat(field.caret()), field.caret());
    }

    Ok(())
}
