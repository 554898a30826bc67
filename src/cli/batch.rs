//! `elizasign batch` — run a file of transactions through one session.
//!
//! Each transaction is decided in order, exactly as if the user had
//! submitted them one after another. Invalid entries are reported and
//! skipped. The ledger and its summary are printed at the end.

use crate::cli::options::SessionOptions;
use crate::cli::render;
use crate::session::batch::parse_batch_file;
use anyhow::Result;
use colored::Colorize;
use std::path::Path;

/// Run the `elizasign batch` command.
pub async fn run_batch(path: &Path, options: SessionOptions) -> Result<()> {
    let items = parse_batch_file(path)?;
    let (session, resolved) = options.open_session()?;

    println!();
    println!(
        "  Running {} transactions with agent {} ({})",
        items.len().to_string().bold(),
        resolved.profile.agent.cyan(),
        resolved.profile.config.describe().dimmed()
    );

    let mut failures = 0usize;
    for (i, item) in items.iter().enumerate() {
        println!();
        println!(
            "  {} {} ETH to {} [{} Risk]",
            format!("#{}", i + 1).dimmed(),
            item.amount,
            item.to_address,
            item.risk_level.label()
        );

        let result = match item.to_request(session.config().auto_approve_status) {
            Ok(request) => session.simulate(request).await,
            Err(err) => Err(err),
        };

        match result {
            Ok(record) => render::print_decision(&record.outcome()),
            Err(err) => {
                failures += 1;
                render::print_engine_error(&err);
            }
        }
    }

    render::print_history(&session.history(), &session.summary());

    if failures > 0 {
        println!(
            "  {} {} of {} transactions could not be decided",
            "⚠".yellow(),
            failures,
            items.len()
        );
        println!();
    }

    Ok(())
}
