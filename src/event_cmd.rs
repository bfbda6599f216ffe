//! Day notes: the party log and recurring events.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use strandwheel_calendar::decompose;
use strandwheel_events::{Event, EventRef, next_occurrences};
use strandwheel_layout::date_line;

use crate::app::App;
use crate::cli::{EventAction, EventArgs, PartyArgs};
use crate::convert;

/// Print or replace the party log for the current day.
pub fn party(config: &Path, args: PartyArgs) -> Result<()> {
    let _cmd = info_span!("party").entered();
    let app = App::open(config)?;
    let today = app.session.controller().absolute_day();
    let mut book = app.notebook()?;

    match args.text {
        Some(text) => {
            book.set_party(today, text);
            app.save_notebook(&book)?;
            info!(day = today, "party log updated");
        }
        None => println!("{}", book.party(today)),
    }
    Ok(())
}

/// Run an event subcommand.
pub fn run(config: &Path, args: EventArgs) -> Result<()> {
    let _cmd = info_span!("event").entered();
    let app = App::open(config)?;
    let today = app.session.controller().absolute_day();
    let mut book = app.notebook()?;

    match args.action {
        EventAction::Add { name, desc, rule } => {
            let rule = convert::parse_recurrence(&rule)?;
            let event = Event::anchored(&name, &desc, rule, app.session.date())?;
            let at = book.add_event(today, event);
            app.save_notebook(&book)?;
            info!(day = at.day, index = at.index, %rule, "event added");
            println!("{}", format_ref(at));
        }
        EventAction::List { all } => {
            let listed: Vec<_> = if all {
                book.iter_events().collect()
            } else {
                book.active_events(today)
            };
            for (at, event) in listed {
                println!("{}", format_event(at, event));
            }
        }
        EventAction::Next { day, index, n } => {
            let at = EventRef { day, index };
            let event = book
                .event(at)
                .with_context(|| format!("no event at {}", format_ref(at)))?;
            for date in next_occurrences(event, today, n) {
                println!("{}", date_line(&date, &app.directory));
            }
        }
        EventAction::Edit {
            day,
            index,
            name,
            desc,
        } => {
            book.edit_event(EventRef { day, index }, &name, &desc)?;
            app.save_notebook(&book)?;
        }
        EventAction::Remove { day, index } => {
            let removed = book.remove_event(EventRef { day, index })?;
            app.save_notebook(&book)?;
            info!(name = %removed.name, "event removed");
        }
    }
    Ok(())
}

fn format_ref(at: EventRef) -> String {
    format!("{}:{}", at.day, at.index)
}

fn format_event(at: EventRef, event: &Event) -> String {
    let created = date_line_without_strand(at.day);
    let mut line = format!("[{}] {} ({}, from {created})", format_ref(at), event.name, event.rule);
    if !event.desc.is_empty() {
        line.push_str(" - ");
        line.push_str(&event.desc);
    }
    line
}

fn date_line_without_strand(day: u64) -> String {
    let date = decompose(day);
    format!("{} {}, Year {}", date.month_name(), date.day(), date.year())
}

#[cfg(test)]
mod tests {
    use super::*;
    use strandwheel_events::Recurrence;

    #[test]
    fn event_line_includes_ref_rule_and_desc() {
        let event = Event::anchored("Moot", "elders", Recurrence::Yearly, decompose(0)).unwrap();
        let line = format_event(EventRef { day: 0, index: 2 }, &event);
        assert_eq!(line, "[0:2] Moot (yearly, from Silence 1, Year 0) - elders");
    }

    #[test]
    fn event_line_without_desc() {
        let event = Event::anchored("Moot", "", Recurrence::Once, decompose(31)).unwrap();
        let line = format_event(EventRef { day: 31, index: 0 }, &event);
        assert_eq!(line, "[31:0] Moot (one, from Khord 1, Year 0)");
    }
}
