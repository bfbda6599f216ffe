//! Read-only commands: the date line, the dial layout, strand effects and
//! same-combination dates.

use std::path::Path;

use anyhow::Result;
use tracing::{info, info_span};

use strandwheel_events::next_same_combo;
use strandwheel_layout::date_line;

use crate::app::App;
use crate::cli::{ComboArgs, ShowArgs};

/// Print the current date, or the dial layout as JSON.
pub fn run(config: &Path, args: ShowArgs) -> Result<()> {
    let _cmd = info_span!("show").entered();
    let app = App::open(config)?;

    if args.json {
        app.print_layout()?;
    } else {
        println!("{}", app.banner());
    }
    Ok(())
}

/// Print the effect block for the current strand.
pub fn effect(config: &Path) -> Result<()> {
    let _cmd = info_span!("effect").entered();
    let app = App::open(config)?;
    println!("{}", app.directory.effect_text(app.session.date().strand()));
    Ok(())
}

/// List upcoming dates with the current strand and magic phase.
pub fn combo(config: &Path, args: ComboArgs) -> Result<()> {
    let _cmd = info_span!("combo").entered();
    let app = App::open(config)?;

    let dates = next_same_combo(app.session.controller().absolute_day(), args.n);
    info!(found = dates.len(), requested = args.n, "combination search done");
    for date in &dates {
        println!("{}", date_line(date, &app.directory));
    }
    Ok(())
}
