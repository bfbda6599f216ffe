//! Commands that move the persisted date: day and hour steps and manual
//! jumps.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use strandwheel_state::{ManualJump, StateChange};

use crate::app::App;
use crate::cli::{JumpArgs, StepArgs};

/// Move the day by a signed delta.
pub fn day(config: &Path, args: StepArgs) -> Result<()> {
    let _cmd = info_span!("day", delta = args.delta).entered();
    let mut app = App::open(config)?;
    let change = app.session.bump_day(args.delta);
    report(&app, change, args.json)
}

/// Move the hour by a signed delta.
pub fn hour(config: &Path, args: StepArgs) -> Result<()> {
    let _cmd = info_span!("hour", delta = args.delta).entered();
    let mut app = App::open(config)?;
    let change = app.session.bump_hour(args.delta);
    report(&app, change, args.json)
}

/// Jump to a manually entered date, keeping the hour.
pub fn jump(config: &Path, args: JumpArgs) -> Result<()> {
    let _cmd = info_span!("jump").entered();
    let target = ManualJump::parse(&args.year, &args.month, &args.day)
        .context("invalid date; nothing changed")?;
    info!(
        year = target.year(),
        month = target.month(),
        day = target.day(),
        "jumping"
    );
    let mut app = App::open(config)?;
    let change = app.session.jump_to(&target);
    report(&app, change, args.json)
}

fn report(app: &App, change: StateChange, json: bool) -> Result<()> {
    let date = app.session.date();
    if let Some(previous) = app.session.previous_strand().filter(|_| change.day_changed) {
        if previous != date.strand() {
            info!(
                from = previous.number(),
                to = date.strand().number(),
                "strand changed"
            );
        }
    }
    if json {
        return app.print_layout();
    }
    println!("{}", app.banner());

    match app.notebook() {
        Ok(book) => {
            for (_, event) in book.active_events(date.absolute_day()) {
                println!("  * {}", event.name);
            }
        }
        Err(e) => warn!(error = %format!("{e:#}"), "notes not shown"),
    }
    Ok(())
}
