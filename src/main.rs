//! Loan Risk - loan default risk predictions from the terminal
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, Subcommand};
use loan_risk::PredictRequest;
use loanrisk_app::config::init_config_dir;
use loanrisk_core::prelude::*;
use loanrisk_core::HomeOwnership;

/// Loan Risk - loan default risk predictions from the terminal
#[derive(Parser, Debug)]
#[command(name = "loanrisk")]
#[command(about = "Loan default risk predictions from the terminal", long_about = None)]
struct Args {
    /// Prediction backend base URL (overrides the config file)
    #[arg(long, global = true, value_name = "URL")]
    endpoint: Option<String>,

    /// Config file to use instead of .loanrisk/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Submit one application and print the assessment as JSON
    Predict(PredictArgs),

    /// Write a default .loanrisk/config.toml in the current directory
    Init,
}

#[derive(clap::Args, Debug)]
struct PredictArgs {
    #[arg(long, allow_hyphen_values = true)]
    monthly_income: String,

    #[arg(long, allow_hyphen_values = true)]
    monthly_debt_payments: String,

    #[arg(long, allow_hyphen_values = true)]
    loan_amount: String,

    /// Missed installments in the last two years
    #[arg(long, allow_hyphen_values = true)]
    missed_installments: String,

    #[arg(long, allow_hyphen_values = true)]
    credit_card_balance: String,

    #[arg(long, allow_hyphen_values = true)]
    total_open_accounts: String,

    /// RENT, MORTGAGE or OWN
    #[arg(long, default_value = "RENT", value_parser = HomeOwnership::from_str)]
    home_ownership: HomeOwnership,
}

impl From<PredictArgs> for PredictRequest {
    fn from(args: PredictArgs) -> Self {
        Self {
            monthly_income: args.monthly_income,
            monthly_debt_payments: args.monthly_debt_payments,
            loan_amount: args.loan_amount,
            missed_installments: args.missed_installments,
            credit_card_balance: args.credit_card_balance,
            total_open_accounts: args.total_open_accounts,
            home_ownership: args.home_ownership,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    loan_risk::init_runtime()?;

    let cwd = std::env::current_dir()?;

    match args.command {
        Some(Command::Init) => {
            let path = init_config_dir(&cwd)?;
            println!("Config file: {}", path.display());
            Ok(())
        }
        Some(Command::Predict(predict)) => {
            let settings =
                loan_risk::resolve_settings(&cwd, args.config.as_deref(), args.endpoint.as_deref())?;

            match loan_risk::run_predict(&settings, predict.into()).await {
                Ok(line) => {
                    println!("{}", line);
                    Ok(())
                }
                Err(e) => {
                    eprintln!("{}", e.user_message());
                    std::process::exit(1);
                }
            }
        }
        None => {
            let settings =
                loan_risk::resolve_settings(&cwd, args.config.as_deref(), args.endpoint.as_deref())?;
            loan_risk::run(settings).await
        }
    }
}
