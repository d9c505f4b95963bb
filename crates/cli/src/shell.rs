//! Interactive session
//!
//! A line-oriented stand-in for the single-page form: the viewer edits
//! feature inputs, name and rating, and triggers predict or submit as many
//! times as they like. State lives in one [`Session`] for the whole loop.

use crate::commands;
use crate::render;
use crate::session::Session;
use anyhow::Result;
use chrono::NaiveDate;
use oncoscore_classifier::{FeatureVector, Predictor};
use oncoscore_feedback::{FeedbackStore, MAX_RATING, MIN_RATING};
use std::io::{BufRead, Write};
use tracing::warn;

const HELP: &str = "\
Commands:
  set <feature> <value>   set one input feature (names may contain spaces)
  show                    list the current inputs
  reset                   reset every input to 0.0
  name <text>             set your name
  rate <1-5>              set your rating
  predict                 classify the current inputs
  submit                  submit your rating for today
  stats                   show viewer stats
  help                    show this message
  quit                    leave the session";

/// Collaborators the shell drives
pub struct ShellContext<'a> {
    pub predictor: &'a Predictor,
    pub store: &'a FeedbackStore,
    pub today: &'a dyn Fn() -> NaiveDate,
}

/// Read commands until `quit` or end of input
///
/// Command failures are reported on `out` and the loop continues; only
/// errors writing to `out` or reading `input` end the session early.
pub fn run<R: BufRead, W: Write>(
    ctx: &ShellContext<'_>,
    session: &mut Session,
    input: R,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "Enter the 30 tumor features, then `predict`. Type `help` for commands.")?;
    commands::show_stats(ctx.store, out)?;

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        let result: Result<()> = match command {
            "quit" | "exit" => break,
            "help" => writeln!(out, "{}", HELP).map_err(Into::into),
            "show" => render::features(out, &session.features).map_err(Into::into),
            "reset" => {
                session.features = FeatureVector::default();
                writeln!(out, "Inputs reset.").map_err(Into::into)
            }
            "set" => set_feature(session, rest, out),
            "name" => set_name(session, rest, out),
            "rate" => set_rating(session, rest, out),
            "predict" => commands::predict(ctx.predictor, &session.features, false, out).map(|_| ()),
            "submit" => commands::submit_feedback(ctx.store, session, (ctx.today)(), out)
                .and_then(|_| commands::show_stats(ctx.store, out)),
            "stats" => commands::show_stats(ctx.store, out),
            other => writeln!(out, "Unknown command '{}'. Type `help`.", other).map_err(Into::into),
        };

        if let Err(err) = result {
            warn!("shell command '{}' failed: {:#}", command, err);
            writeln!(out, "Error: {:#}", err)?;
        }
    }

    Ok(())
}

fn set_feature<W: Write>(session: &mut Session, rest: &str, out: &mut W) -> Result<()> {
    let (name, value) = rest
        .rsplit_once(char::is_whitespace)
        .ok_or_else(|| anyhow::anyhow!("usage: set <feature> <value>"))?;
    let name = name.trim();
    let value: f64 = value
        .parse()
        .map_err(|_| anyhow::anyhow!("'{}' is not a number", value))?;
    session.features.set(name, value)?;
    writeln!(out, "{} = {}", name, value)?;
    Ok(())
}

fn set_name<W: Write>(session: &mut Session, rest: &str, out: &mut W) -> Result<()> {
    if rest.is_empty() {
        anyhow::bail!("usage: name <text>");
    }
    session.user_name = rest.to_string();
    writeln!(out, "Name set to {}", session.user_name)?;
    Ok(())
}

fn set_rating<W: Write>(session: &mut Session, rest: &str, out: &mut W) -> Result<()> {
    let rating: u8 = rest
        .parse()
        .ok()
        .filter(|r| (MIN_RATING..=MAX_RATING).contains(r))
        .ok_or_else(|| anyhow::anyhow!("rating must be {}-{}", MIN_RATING, MAX_RATING))?;
    session.user_rating = rating;
    writeln!(out, "Rating set to {}", rating)?;
    Ok(())
}
