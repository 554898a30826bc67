//! `elizasign session` — a line-oriented session over stdin.
//!
//! Keeps one session alive so the ledger and audit log build up across
//! transactions, and lets the user change the agent configuration between
//! them.

use crate::agent::types::{RiskLevel, SigningMethod};
use crate::cli::options::SessionOptions;
use crate::cli::render;
use crate::engine::types::TransactionRequest;
use crate::ledger::audit::AUDIT_CONTEXT_ENTRIES;
use crate::session::SimulationSession;
use anyhow::Result;
use colored::Colorize;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

/// A parsed line of input.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Simulate {
        to: String,
        amount: String,
        risk: RiskLevel,
    },
    AutoApprove(bool),
    Threshold(RiskLevel),
    Signing(SigningMethod),
    Config,
    History,
    Audit(usize),
    Help,
    Quit,
    Empty,
}

fn parse_command(line: &str) -> Result<Command, String> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let Some((head, args)) = parts.split_first() else {
        return Ok(Command::Empty);
    };

    match head.to_lowercase().as_str() {
        "simulate" | "sim" | "tx" => match args {
            [to, amount, risk] => Ok(Command::Simulate {
                to: to.to_string(),
                amount: amount.to_string(),
                risk: RiskLevel::from_str_loose(risk)
                    .ok_or_else(|| format!("unknown risk level '{}'", risk))?,
            }),
            _ => Err("usage: simulate <to-address> <amount> <low|medium|high>".to_string()),
        },
        "auto" => match args {
            ["on"] | ["true"] | ["yes"] => Ok(Command::AutoApprove(true)),
            ["off"] | ["false"] | ["no"] => Ok(Command::AutoApprove(false)),
            _ => Err("usage: auto <on|off>".to_string()),
        },
        "threshold" => match args {
            [level] => RiskLevel::from_str_loose(level)
                .map(Command::Threshold)
                .ok_or_else(|| format!("unknown risk level '{}'", level)),
            _ => Err("usage: threshold <low|medium|high>".to_string()),
        },
        "signing" => match args {
            [method] => SigningMethod::from_str_loose(method)
                .map(Command::Signing)
                .ok_or_else(|| format!("unknown signing method '{}'", method)),
            _ => Err("usage: signing <delegated|manual>".to_string()),
        },
        "config" | "status" => Ok(Command::Config),
        "history" | "ledger" => Ok(Command::History),
        "audit" | "log" => match args {
            [] => Ok(Command::Audit(AUDIT_CONTEXT_ENTRIES)),
            [n] => n
                .parse()
                .map(Command::Audit)
                .map_err(|_| format!("'{}' is not a number", n)),
            _ => Err("usage: audit [n]".to_string()),
        },
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        other => Err(format!("unknown command '{}' (try 'help')", other)),
    }
}

/// Run the `elizasign session` command.
pub async fn run_session(options: SessionOptions) -> Result<()> {
    let (session, resolved) = options.open_session()?;

    println!();
    println!(
        "  {}  {}",
        "elizasign".bold(),
        "— transaction guardian session".green()
    );
    println!(
        "  Agent {} | {}",
        resolved.profile.agent.cyan(),
        session.config().describe().dimmed()
    );
    println!("  Type {} for commands.", "help".bold());
    println!();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("{} ", "elizasign>".blue());
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match parse_command(&line) {
            Ok(Command::Quit) => break,
            Ok(command) => execute(&session, &resolved.profile.agent, command).await,
            Err(usage) => println!("  {} {}", "✗".red(), usage),
        }
    }

    render::print_history(&session.history(), &session.summary());
    Ok(())
}

async fn execute(session: &SimulationSession, agent: &str, command: Command) {
    match command {
        Command::Simulate { to, amount, risk } => {
            let request = TransactionRequest::from_input(
                &to,
                &amount,
                risk,
                session.config().auto_approve_status,
            );
            let result = match request {
                Ok(request) => session.simulate(request).await,
                Err(err) => Err(err),
            };
            match result {
                Ok(record) => render::print_decision(&record.outcome()),
                Err(err) => render::print_engine_error(&err),
            }
        }
        Command::AutoApprove(enabled) => {
            session.set_auto_approve(enabled);
            println!(
                "  {} Auto-approve {}",
                "✓".green(),
                if enabled { "enabled" } else { "disabled" }
            );
        }
        Command::Threshold(level) => {
            session.set_risk_threshold(level);
            println!("  {} Risk threshold set to {}", "✓".green(), level.label());
        }
        Command::Signing(method) => {
            session.set_signing_method(method);
            println!("  {} Signing method set to {}", "✓".green(), method);
        }
        Command::Config => render::print_config(agent, &session.config()),
        Command::History => render::print_history(&session.history(), &session.summary()),
        Command::Audit(n) => {
            let entries = session.audit_entries();
            let start = entries.len().saturating_sub(n);
            println!();
            for entry in &entries[start..] {
                println!("  • {}", entry);
            }
            if entries.is_empty() {
                println!("  {} Audit log is empty.", "ℹ".blue());
            }
            println!();
        }
        Command::Help => print_help(),
        Command::Quit | Command::Empty => {}
    }
}

fn print_help() {
    println!();
    println!("  {}", "Commands:".dimmed());
    println!("    {}  ask the agent", "simulate <to> <amount> <risk>".bold());
    println!("    {}                 toggle auto-approve", "auto <on|off>".bold());
    println!("    {}              set the risk threshold", "threshold <level>".bold());
    println!("    {}               set the signing method", "signing <method>".bold());
    println!("    {}                        show the agent configuration", "config".bold());
    println!("    {}                       show the transaction ledger", "history".bold());
    println!("    {}                     show recent audit entries", "audit [n]".bold());
    println!("    {}                          end the session", "quit".bold());
    println!();
}
