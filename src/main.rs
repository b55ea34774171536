use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::{debug, error};

use tripwizard::dataset::{self, INTERESTS};
use tripwizard::models::{
    AccommodationKind, Flexibility, FormUpdate, HotelQuality, Pace, TransportPreference,
};
use tripwizard::progress::{render_bar, stage_label};
use tripwizard::{
    LoadingProgress, SessionStore, TripSession, TripWizardConfig, TripWizardError, VERSION, logging,
};

/// Plan a city trip: transport, hotel, day-by-day attractions and budget
#[derive(Parser)]
#[command(name = "tripwizard")]
#[command(about = "tripwizard - Plan a city trip: transport, hotel, day-by-day attractions and budget", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short = 'c', long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose output (-v for debug, -vv for trace, -vvv for all)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fill in the wizard and generate a plan
    Plan {
        #[command(flatten)]
        form: FormArgs,

        /// Skip the loading animation
        #[arg(long)]
        no_loading: bool,

        /// Print the plan as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the current plan
    Show {
        /// Print the plan as JSON
        #[arg(long)]
        json: bool,
    },
    /// Include or exclude an attraction and recalculate the budget
    Toggle {
        /// Day number, starting at 1
        #[arg(short, long)]
        day: usize,

        /// Attraction id as shown in brackets by `show`
        #[arg(short, long)]
        attraction: String,
    },
    /// Show the stored form data
    Form,
    /// Forget the form data and the plan
    Reset,
    /// Suggest destinations or origins matching a query
    Suggest {
        #[arg(value_enum)]
        kind: SuggestKind,

        query: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum SuggestKind {
    Destination,
    Origin,
}

/// Wizard fields; anything left out keeps its stored value
#[derive(Args)]
struct FormArgs {
    /// Where to go (e.g. Barcelona)
    #[arg(long)]
    destination: Option<String>,

    /// Where to leave from (e.g. Kraków)
    #[arg(long)]
    origin: Option<String>,

    /// First day of the trip, YYYY-MM-DD
    #[arg(long)]
    start: Option<NaiveDate>,

    /// Last day of the trip, YYYY-MM-DD
    #[arg(long)]
    end: Option<NaiveDate>,

    /// strict or flexible dates
    #[arg(long)]
    flexibility: Option<Flexibility>,

    /// Number of travelers (1-10)
    #[arg(short, long)]
    travelers: Option<u32>,

    /// Interest tag, repeatable or comma separated (food, architecture, museums, relaxed, nightlife, nature)
    #[arg(short, long = "interest", value_delimiter = ',')]
    interests: Vec<String>,

    /// chill, balanced or intensive
    #[arg(long)]
    pace: Option<Pace>,

    /// Minimum total budget in PLN
    #[arg(long)]
    budget_min: Option<u32>,

    /// Maximum total budget in PLN
    #[arg(long)]
    budget_max: Option<u32>,

    /// apartment, hotel or any
    #[arg(long)]
    accommodation: Option<AccommodationKind>,

    /// Minimum hotel stars: 3, 4, 5 or any
    #[arg(long)]
    quality: Option<HotelQuality>,

    /// cheapest, fastest or best-value
    #[arg(long)]
    transport: Option<TransportPreference>,
}

impl FormArgs {
    fn into_update(self) -> tripwizard::Result<FormUpdate> {
        if let Some(unknown) = self
            .interests
            .iter()
            .find(|i| dataset::find_interest(i).is_none())
        {
            let known: Vec<&str> = INTERESTS.iter().map(|i| i.id).collect();
            return Err(TripWizardError::validation(format!(
                "Unknown interest '{unknown}'. Must be one of: {}",
                known.join(", ")
            )));
        }

        Ok(FormUpdate {
            destination: self.destination,
            origin: self.origin,
            start_date: self.start,
            end_date: self.end,
            flexibility: self.flexibility,
            travelers: self.travelers,
            interests: (!self.interests.is_empty()).then_some(self.interests),
            pace: self.pace,
            budget_min: self.budget_min,
            budget_max: self.budget_max,
            accommodation: self.accommodation,
            hotel_quality: self.quality,
            transport_preference: self.transport,
        })
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match TripWizardConfig::load_from_path(cli.config.clone()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", describe(&e));
            std::process::exit(1);
        }
    };

    logging::init(&config.logging, cli.verbose);

    let result = match cli.command {
        Some(command) => run_command(command, &config).await,
        None => {
            print_overview(cli.config.as_deref(), cli.verbose, &config);
            Ok(())
        }
    };

    if let Err(e) = result {
        error!("Fatal error: {:#}", e);
        eprintln!("Error: {}", describe(&e));
        std::process::exit(1);
    }
}

fn describe(e: &anyhow::Error) -> String {
    match e.downcast_ref::<TripWizardError>() {
        Some(TripWizardError::Config { message }) => format!("Configuration error: {message}"),
        Some(err) => err.user_message(),
        None => format!("{e:#}"),
    }
}

fn print_overview(config_path: Option<&Path>, verbose: u8, config: &TripWizardConfig) {
    println!("TripWizard v{VERSION} - plan a city trip in three steps");
    println!();
    println!("  tripwizard plan --destination Barcelona --start 2026-05-01 --end 2026-05-05");
    println!("  tripwizard show");
    println!("  tripwizard toggle --day 1 --attraction park-guell");
    println!("  tripwizard reset");
    println!();
    println!("Run `tripwizard --help` for all options.");

    if verbose > 0 {
        let config_path = config_path
            .map(Path::to_path_buf)
            .or_else(TripWizardConfig::get_config_path)
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "defaults".to_string());
        println!();
        println!("Using config from: {config_path}");
        println!("Session storage: {}", config.session.storage_path);
        println!("Log level: {}", config.logging.level);
    }
}

fn open_store(config: &TripWizardConfig) -> Result<SessionStore> {
    SessionStore::open(&config.session.storage_path, config.session.key.clone())
        .context("Failed to open session storage")
}

async fn open_session(config: &TripWizardConfig) -> Result<(SessionStore, TripSession)> {
    let store = open_store(config)?;
    let session = store.load_or_default().await?;
    Ok((store, session))
}

async fn run_command(command: Commands, config: &TripWizardConfig) -> Result<()> {
    match command {
        Commands::Plan {
            form,
            no_loading,
            json,
        } => {
            let update = form.into_update()?;
            let (store, mut session) = open_session(config).await?;
            session.update_form(update);
            session.form.validate()?;

            let trip_days = config.defaults.trip_length_days;
            let plan = if no_loading {
                session.generate(trip_days).clone()
            } else {
                LoadingProgress::from_config(&config.loading)
                    .run_then(
                        |p| {
                            eprint!("\r{} {:<24}", render_bar(p, 30), stage_label(p));
                            let _ = std::io::stderr().flush();
                        },
                        || {
                            eprintln!();
                            session.generate(trip_days).clone()
                        },
                    )
                    .await
            };
            store.save(&session).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&plan)?);
            } else {
                println!("{plan}");
            }
        }
        Commands::Show { json } => {
            let (_, session) = open_session(config).await?;
            match &session.plan {
                Some(plan) if json => println!("{}", serde_json::to_string_pretty(plan)?),
                Some(plan) => println!("{plan}"),
                None => println!("No plan generated yet. Run `tripwizard plan` first."),
            }
        }
        Commands::Toggle { day, attraction } => {
            if day == 0 {
                return Err(TripWizardError::validation("Day numbers start at 1").into());
            }
            let day_index = day - 1;
            let (store, mut session) = open_session(config).await?;

            let Some(plan) = &session.plan else {
                return Err(TripWizardError::general(
                    "No plan generated yet. Run `tripwizard plan` first.",
                )
                .into());
            };
            if plan.find_attraction(day_index, &attraction).is_none() {
                eprintln!("No attraction '{attraction}' on day {day}; plan unchanged");
            }

            if let Some(budget) = session.toggle_attraction(day_index, &attraction) {
                store.save(&session).await?;
                if let Some(found) = session
                    .plan
                    .as_ref()
                    .and_then(|p| p.find_attraction(day_index, &attraction))
                {
                    let state = if found.included { "included" } else { "excluded" };
                    println!("{} {state}", found.attraction.name);
                }
                println!("{budget}");
            }
        }
        Commands::Form => {
            let (_, session) = open_session(config).await?;
            println!("{}", serde_json::to_string_pretty(&session.form)?);
        }
        Commands::Reset => {
            // must not load: an unreadable entry still has to be clearable
            open_store(config)?.clear().await?;
            println!("Trip session cleared");
        }
        Commands::Suggest { kind, query } => {
            let matches = match kind {
                SuggestKind::Destination => dataset::suggest_destinations(&query),
                SuggestKind::Origin => dataset::suggest_origins(&query),
            };
            for m in matches {
                println!("{m}");
            }
        }
    }

    debug!("Command finished");
    Ok(())
}
