//! Tokenomics simulation CLI.
//!
//! Runs the projection engine over a parameter file (or the built-in
//! baseline), with single-field overrides for quick what-if exploration.
//! Metrics go to stdout as JSON; unbalanced percentage groups are advisory
//! warnings on stderr and never stop a run.

use clap::{Parser, Subcommand};
use std::error::Error;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use tokenomics_simulator_core_rs::{
    check_allocations, compute, Metrics, ParameterSet, ScenarioSnapshot,
};

mod format;

#[derive(Parser)]
#[command(name = "tokenomics-sim")]
#[command(about = "Project revenue and token flows for an AI character platform")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the baseline parameter set as JSON
    Defaults,

    /// Run a projection and print the derived metrics
    Project {
        /// Parameter JSON file ("-" reads stdin); baseline when omitted
        #[arg(short, long)]
        params: Option<PathBuf>,

        /// Override a single field, e.g. --set monthlyActiveUsers=50000
        #[arg(long = "set", value_name = "FIELD=VALUE")]
        overrides: Vec<String>,

        /// Human-readable report instead of JSON
        #[arg(long)]
        table: bool,
    },

    /// Report the balance of every grouped percentage set
    Check {
        /// Parameter JSON file ("-" reads stdin); baseline when omitted
        #[arg(short, long)]
        params: Option<PathBuf>,

        /// Override a single field, e.g. --set founderAllocation=20
        #[arg(long = "set", value_name = "FIELD=VALUE")]
        overrides: Vec<String>,
    },

    /// Capture a fingerprinted scenario snapshot
    Snapshot {
        /// Parameter JSON file ("-" reads stdin); baseline when omitted
        #[arg(short, long)]
        params: Option<PathBuf>,

        /// Override a single field before capturing
        #[arg(long = "set", value_name = "FIELD=VALUE")]
        overrides: Vec<String>,

        /// Write the snapshot here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Restore a scenario snapshot, verifying its fingerprint
    Restore {
        /// Snapshot JSON file
        file: PathBuf,
    },
}

fn main() {
    if let Err(err) = run(Cli::parse()) {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    match cli.command {
        Command::Defaults => {
            println!("{}", serde_json::to_string_pretty(&ParameterSet::default())?);
        }
        Command::Project {
            params,
            overrides,
            table,
        } => {
            let params = load_parameters(params.as_deref(), &overrides)?;
            warn_unbalanced(&params);
            let metrics = compute(&params);
            if table {
                print_report(&params, &metrics);
            } else {
                println!("{}", serde_json::to_string_pretty(&metrics)?);
            }
        }
        Command::Check { params, overrides } => {
            let params = load_parameters(params.as_deref(), &overrides)?;
            let checks = check_allocations(&params);
            println!("{}", serde_json::to_string_pretty(&checks)?);
        }
        Command::Snapshot {
            params,
            overrides,
            output,
        } => {
            let params = load_parameters(params.as_deref(), &overrides)?;
            let snapshot = ScenarioSnapshot::capture(&params)?;
            let json = snapshot.to_json()?;
            match output {
                Some(path) => fs::write(path, json)?,
                None => println!("{}", json),
            }
        }
        Command::Restore { file } => {
            let snapshot = ScenarioSnapshot::from_json(&fs::read_to_string(file)?)?;
            println!("{}", serde_json::to_string_pretty(&snapshot.parameters)?);
        }
    }
    Ok(())
}

/// Load parameters from a file/stdin, falling back to the baseline,
/// then apply `--set` overrides in order
fn load_parameters(
    source: Option<&Path>,
    overrides: &[String],
) -> Result<ParameterSet, Box<dyn Error>> {
    let mut params = match source {
        None => ParameterSet::default(),
        Some(path) if path == Path::new("-") => {
            let mut input = String::new();
            std::io::stdin().read_to_string(&mut input)?;
            serde_json::from_str(&input)?
        }
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
    };

    for entry in overrides {
        let (name, value) = entry
            .split_once('=')
            .ok_or_else(|| format!("invalid override '{}', expected FIELD=VALUE", entry))?;
        let value: f64 = value
            .parse()
            .map_err(|_| format!("invalid numeric value in override '{}'", entry))?;
        params = params.with_field(name, value)?;
    }
    Ok(params)
}

/// Print advisory warnings for percentage groups that do not sum to 100
fn warn_unbalanced(params: &ParameterSet) {
    for check in check_allocations(params) {
        if !check.balanced {
            eprintln!(
                "warning: {} percentages sum to {} (expected 100)",
                check.group.label(),
                check.actual_sum
            );
        }
    }
}

/// Render the metrics as a human-readable report
fn print_report(params: &ParameterSet, metrics: &Metrics) {
    println!("User funnel");
    println!(
        "  Free users        {:>12}",
        format::compact(metrics.segments.free_users as f64)
    );
    println!(
        "  Paying users      {:>12}",
        format::compact(metrics.segments.paying_users as f64)
    );
    println!(
        "  Token holders     {:>12}",
        format::compact(metrics.segments.holder_users as f64)
    );

    println!("Messages / month");
    println!(
        "  Free trial        {:>12}",
        format::compact(metrics.messages.free_messages)
    );
    println!(
        "  Paid              {:>12}",
        format::compact(metrics.messages.paid_messages)
    );
    println!(
        "  Holders           {:>12}",
        format::compact(metrics.messages.holder_messages)
    );
    println!(
        "  Total             {:>12}",
        format::compact(metrics.messages.total_messages)
    );

    println!("Revenue / month");
    println!("  Chat              {:>12}", format::usd(metrics.revenue.chat));
    println!("  Tips              {:>12}", format::usd(metrics.revenue.tips));
    println!(
        "  Auctions          {:>12}",
        format::usd(metrics.revenue.auctions)
    );
    println!(
        "  Custom characters {:>12}",
        format::usd(metrics.revenue.custom_characters)
    );
    println!("  Gross             {:>12}", format::usd(metrics.revenue.gross));

    println!("Costs / month");
    println!(
        "  LLM inference     {:>12}",
        format::usd(metrics.costs.llm_inference)
    );
    println!(
        "  Infrastructure    {:>12}",
        format::usd(metrics.costs.infrastructure)
    );
    println!("  Total             {:>12}", format::usd(metrics.costs.total));
    println!(
        "Net revenue         {:>12}  ({:.0}% margin)",
        format::usd(metrics.net_revenue),
        metrics.profit_margin * 100.0
    );

    println!("Recipients / month");
    println!(
        "  Founder           {:>12}",
        format::usd(metrics.recipients.founder.total)
    );
    println!(
        "  Treasury          {:>12}",
        format::usd(metrics.recipients.treasury)
    );
    println!(
        "  Character pool    {:>12}",
        format::usd(metrics.recipients.character_pool)
    );

    println!("Tokens");
    println!(
        "  Founder           {:>12}",
        format::compact(metrics.tokens.founder_tokens)
    );
    println!(
        "  Treasury          {:>12}",
        format::compact(metrics.tokens.treasury_tokens)
    );
    println!(
        "  Vesting / month   {:>12}",
        format::compact(metrics.tokens.founder_tokens_per_month)
    );

    println!("Founder goal");
    if metrics.goal.goal_met {
        println!(
            "  {} goal met (surplus {})",
            format::usd(params.founder_monthly_need_usd),
            format::usd(-metrics.goal.gap)
        );
    } else {
        println!(
            "  {} goal short by {}",
            format::usd(params.founder_monthly_need_usd),
            format::usd(metrics.goal.gap)
        );
        match (metrics.goal.paying_users_needed, metrics.goal.total_users_needed) {
            (Some(paying), Some(total)) => println!(
                "  needs {} paying users ({} total) at current rates",
                format::compact(paying as f64),
                format::compact(total as f64)
            ),
            (Some(paying), None) => println!(
                "  needs {} paying users at current rates",
                format::compact(paying as f64)
            ),
            _ => println!("  unreachable at current rates (no per-user protocol revenue)"),
        }
    }

    println!("Annual projection");
    println!("  Founder           {:>12}", format::usd(metrics.annual.founder));
    println!("  Treasury          {:>12}", format::usd(metrics.annual.treasury));
    println!(
        "  Character pool    {:>12}",
        format::usd(metrics.annual.character_pool)
    );
    println!("  Net               {:>12}", format::usd(metrics.annual.net));
}
