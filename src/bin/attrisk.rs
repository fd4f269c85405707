//! attrisk — attrition prediction CLI
//!
//! Thin front-end over the library: submit profiles, inspect the service,
//! and preview derived buckets.

use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use attrisk::{
    AgeGroup, Config, EmployeeProfile, PredictionGateway, ResultView, SalarySlab, ViewState,
    run_submission,
};

/// Attrition prediction client
#[derive(Parser)]
#[command(name = "attrisk")]
#[command(version = attrisk::PKG_VERSION)]
#[command(about = "HR attrition prediction client")]
struct Args {
    /// Prediction service base URL (overrides config)
    #[arg(short, long, env = "ATTRISK_ENDPOINT")]
    endpoint: Option<String>,

    /// Path to a config file
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Submit an employee profile and print the prediction
    Predict {
        /// Profile JSON file (or omit to read from stdin)
        file: Option<PathBuf>,
        /// Skip range/option validation against the service's feature info
        #[arg(long)]
        no_validate: bool,
    },

    /// Fetch and display the service's field metadata
    Features,

    /// Check service health
    Health,

    /// Print the derived buckets for slider positions
    Buckets {
        /// Age slider value
        #[arg(long)]
        age: Option<i64>,
        /// Monthly income slider value
        #[arg(long)]
        income: Option<i64>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialise tracing (default: warn for CLI; override with RUST_LOG).
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();

    match run(args).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<ExitCode, Box<dyn std::error::Error>> {
    // Buckets need no service connection
    if let Command::Buckets { age, income } = &args.command {
        if age.is_none() && income.is_none() {
            return Err("buckets: pass --age and/or --income".into());
        }
        if let Some(age) = age {
            println!("age group:   {}", AgeGroup::from_age(*age));
        }
        if let Some(income) = income {
            println!("salary slab: {}", SalarySlab::from_monthly_income(*income));
        }
        return Ok(ExitCode::SUCCESS);
    }

    let mut config = Config::load(args.config.as_deref())?;
    if let Some(endpoint) = args.endpoint {
        config.service.endpoint = endpoint;
    }
    let client = config.client();

    match args.command {
        Command::Predict { file, no_validate } => {
            let input = resolve_input(file)?;
            let profile: EmployeeProfile = serde_json::from_str(&input)?;
            let form = profile.to_form();

            if !no_validate {
                let info = client.feature_info().await?;
                info.check(&form)?;
            }

            match run_submission(&client, &form).await {
                ViewState::Success(view) => {
                    print_view(&view);
                    Ok(ExitCode::SUCCESS)
                }
                ViewState::Failed { message } => {
                    eprintln!("{message}");
                    Ok(ExitCode::FAILURE)
                }
                // run_submission only returns terminal states
                state => unreachable!("non-terminal view state: {state:?}"),
            }
        }

        Command::Features => {
            let info = client.feature_info().await?;
            print_options("BusinessTravel", &info.business_travel);
            print_options("Department", &info.department);
            print_options("EducationField", &info.education_field);
            print_options("Gender", &info.gender);
            print_options("JobRole", &info.job_role);
            print_options("MaritalStatus", &info.marital_status);
            print_options("OverTime", &info.over_time);
            if !info.ranges.is_empty() {
                println!("\nranges:");
                for (name, range) in &info.ranges {
                    println!(
                        "  {name}: {}..={} (default {})",
                        range.min, range.max, range.default
                    );
                }
            }
            Ok(ExitCode::SUCCESS)
        }

        Command::Health => {
            let health = client.health().await?;
            println!("attrisk {}", attrisk::version_string());
            println!("service: {}", client.base_url());
            println!("status: {}", health.status);
            println!("model loaded: {}", health.model_loaded);
            Ok(ExitCode::SUCCESS)
        }

        Command::Buckets { .. } => unreachable!("handled above"),
    }
}

/// Resolve profile JSON from an optional file argument or stdin.
fn resolve_input(file: Option<PathBuf>) -> Result<String, Box<dyn std::error::Error>> {
    if let Some(path) = file {
        return Ok(std::fs::read_to_string(path)?);
    }

    if io::stdin().is_terminal() {
        return Err("predict: no input provided (pass a file or pipe JSON via stdin)".into());
    }

    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    if buf.trim().is_empty() {
        return Err("predict: empty input".into());
    }
    Ok(buf)
}

/// Display a rendered prediction.
fn print_view(view: &ResultView) {
    const BAR_WIDTH: usize = 30;
    let filled = ((view.fill_percent / 100.0) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);

    println!(
        "attrition probability: {} [{}{}]",
        view.probability_label,
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled)
    );
    println!("risk: {} ({})", view.risk, view.severity_class);
    println!("prediction: {} ({})", view.prediction_text, view.outcome_class);
}

fn print_options(name: &str, options: &[String]) {
    if !options.is_empty() {
        println!("{name}: {}", options.join(", "));
    }
}
