//! Headless commands
//!
//! Drive a session without the TUI and print what happens. Output goes to
//! any `Write` so the commands can be checked in tests.

use std::io::Write;

use tracing::info;

use crate::catalog::Catalog;
use crate::error::Result;
use crate::session::DessertSession;
use crate::share::{share_summary, ShareFormatter, ShareOutcome, ShareTarget};

/// Sell `count` desserts, printing one line per sale and the totals.
pub fn sell<W: Write>(session: &mut DessertSession, count: u64, out: &mut W) -> Result<()> {
    info!(count, "Selling desserts headless");
    for _ in 0..count {
        let sold = *session.current_dessert();
        let after = session.advance();
        writeln!(
            out,
            "#{:<4} sold {} for ${} (next: {})",
            after.desserts_sold,
            sold.image.display_name(),
            sold.price,
            session.current_dessert().image.display_name()
        )?;
    }
    print_totals(session, out)
}

/// Print the sale counters of the session
pub fn print_totals<W: Write>(session: &DessertSession, out: &mut W) -> Result<()> {
    let state = session.current_state();
    writeln!(out, "Desserts sold: {}", state.desserts_sold)?;
    writeln!(out, "Total revenue: ${}", state.revenue)?;
    Ok(())
}

/// Print the catalog as a table
pub fn print_catalog<W: Write>(catalog: &Catalog, out: &mut W) -> Result<()> {
    writeln!(out, "{:<4} {:<20} {:>8}", "#", "Dessert", "Price")?;
    for (index, dessert) in catalog.iter_indexed() {
        writeln!(
            out,
            "{:<4} {:<20} {:>8}",
            index,
            dessert.image.display_name(),
            format!("${}", dessert.price)
        )?;
    }
    Ok(())
}

/// Sell `count` desserts quietly, then share the summary.
pub fn sell_and_share<W: Write>(
    session: &mut DessertSession,
    count: u64,
    formatter: &dyn ShareFormatter,
    target: &mut dyn ShareTarget,
    out: &mut W,
) -> Result<ShareOutcome> {
    for _ in 0..count {
        session.advance();
    }
    let outcome = share_summary(&session.current_state(), formatter, target);
    match &outcome {
        ShareOutcome::Shared(text) => writeln!(out, "Shared: {}", text)?,
        ShareOutcome::Unavailable { text, notice, reason } => {
            writeln!(out, "{} ({})", notice, reason)?;
            writeln!(out, "{}", text)?;
        }
    }
    Ok(outcome)
}
