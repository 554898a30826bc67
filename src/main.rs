//! ElizaSign — transaction guardian
//!
//! Decides whether your agent signs, delegates or blocks a transaction.
//!
//! Quick start:
//!   elizasign init                                          # write a config file
//!   elizasign simulate --to 0xABC --amount 0.5 --risk low  # one decision
//!   elizasign session                                       # interactive session
//!
//! For more info: elizasign --help

// Suppress warnings for items that are public API (used by tests)
#![allow(dead_code, unused_imports)]

mod agent;
mod cli;
mod engine;
mod error;
mod ledger;
mod session;
mod utils;

use agent::types::{RiskLevel, SigningMethod};
use clap::{Args, Parser, Subcommand};
use cli::options::{parse_risk, parse_signing, SessionOptions};
use colored::Colorize;
use std::path::PathBuf;

/// ElizaSign — risk-managed signing for DeFi transactions.
///
/// Each transaction is auto-signed, delegated for review, or blocked,
/// depending on its risk level and your agent configuration.
#[derive(Parser)]
#[command(
    name = "elizasign",
    version,
    about = "Risk-managed transaction signing decisions",
    long_about = "ElizaSign decides whether your agent signs a transaction on its\n\
                  own, hands it off for review, or blocks it outright.\n\n\
                  Quick start:\n  \
                  elizasign init        # write a config file\n  \
                  elizasign simulate    # decide on one transaction\n  \
                  elizasign session     # interactive session"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Flags shared by every command that opens a session.
#[derive(Args, Debug, Clone)]
struct AgentFlags {
    /// Path to the agent config file (default: .elizasign.yaml, walking up)
    #[arg(short, long, env = "ELIZASIGN_CONFIG")]
    config: Option<PathBuf>,

    /// Turn auto-approve off for this run
    #[arg(long)]
    no_auto_approve: bool,

    /// Highest risk level the agent signs on its own
    #[arg(long, value_parser = parse_risk)]
    threshold: Option<RiskLevel>,

    /// How non-auto-signed transactions are signed: delegated or manual
    #[arg(long, value_parser = parse_signing)]
    signing: Option<SigningMethod>,

    /// Simulate an unreachable agent
    #[arg(long, hide = true)]
    offline: bool,
}

impl AgentFlags {
    fn into_options(self) -> SessionOptions {
        SessionOptions {
            config_path: self.config,
            auto_approve: self.no_auto_approve.then_some(false),
            risk_threshold: self.threshold,
            signing_method: self.signing,
            offline: self.offline,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Ask the agent for a decision on one transaction
    Simulate {
        /// Destination address
        #[arg(long = "to")]
        to_address: String,

        /// Amount in ETH
        #[arg(short, long)]
        amount: String,

        /// Risk level of the transaction: low, medium or high
        #[arg(short, long, value_parser = parse_risk)]
        risk: RiskLevel,

        /// Print the decision as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        agent: AgentFlags,
    },

    /// Run a YAML file of transactions through one session
    Batch {
        /// Path to the batch file
        file: PathBuf,

        #[command(flatten)]
        agent: AgentFlags,
    },

    /// Start an interactive session
    Session {
        #[command(flatten)]
        agent: AgentFlags,
    },

    /// Create a config file from a template
    Init {
        #[arg(short, long, default_value = "balanced")]
        template: String,
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Validate your config file
    Check {
        /// Path to config file
        #[arg(default_value = ".elizasign.yaml")]
        config: PathBuf,
    },
}

#[tokio::main]
async fn main() {
    // Quiet by default; RUST_LOG=elizasign=debug shows engine decisions
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("elizasign=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        None => show_status(),

        Some(Commands::Simulate {
            to_address,
            amount,
            risk,
            json,
            agent,
        }) => {
            cli::simulate::run_simulate(cli::simulate::SimulateOptions {
                to_address,
                amount,
                risk_level: risk,
                session: agent.into_options(),
                json,
            })
            .await
        }

        Some(Commands::Batch { file, agent }) => {
            cli::batch::run_batch(&file, agent.into_options()).await
        }

        Some(Commands::Session { agent }) => {
            cli::interactive::run_session(agent.into_options()).await
        }

        Some(Commands::Init { template, output }) => {
            cli::init::run_init(Some(&template), output.as_deref())
        }

        Some(Commands::Check { config }) => cli::check::run_check(&config),
    };

    if let Err(e) = result {
        eprintln!();
        eprintln!("  {} {}", "✗".red().bold(), e);
        for cause in e.chain().skip(1) {
            eprintln!("  {} {}", "caused by:".dimmed(), cause);
        }
        eprintln!();
        std::process::exit(1);
    }
}

/// When user just types `elizasign` with no arguments: show which config
/// applies and the main commands.
fn show_status() -> anyhow::Result<()> {
    let resolved = SessionOptions::default().resolve()?;

    println!();
    println!(
        "  {}  {}",
        "elizasign".bold(),
        "— transaction guardian".green()
    );
    println!(
        "  {}",
        "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━".dimmed()
    );

    match resolved.source {
        Some(ref path) => println!("  Config: {}", path.display().to_string().dimmed()),
        None => println!(
            "  Config: {} (run {} to create one)",
            "built-in defaults".dimmed(),
            "elizasign init".bold()
        ),
    }
    cli::render::print_config(&resolved.profile.agent, &resolved.profile.config);

    println!("  {}", "Commands:".dimmed());
    println!(
        "    {}     decide on one transaction",
        "elizasign simulate".bold()
    );
    println!(
        "    {}      interactive session",
        "elizasign session".bold()
    );
    println!(
        "    {}        run a file of transactions",
        "elizasign batch".bold()
    );
    println!(
        "    {}        validate your config",
        "elizasign check".bold()
    );
    println!();

    Ok(())
}
