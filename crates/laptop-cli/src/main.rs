use clap::{Args, Parser, Subcommand};
use laptop_advisor::{Advisor, DEFAULT_PAGE_LIMIT};
use laptop_client::HttpPredictionService;
use laptop_core::{
    AdvisorConfig, AdvisorError, AdvisorResult, LaptopDraft, SpecificationProfile, ADVISOR_VERSION,
};
use laptop_out::{Presenter, RenderError};
use std::path::PathBuf;
use std::process;
use std::str::FromStr;
use tracing::Level;

mod output;

use output::Printer;

/// Exit code for failures that carry no advisor error kind
const EXIT_OTHER: i32 = 1;

#[derive(Parser)]
#[command(name = "laptop-advisor", version = ADVISOR_VERSION)]
#[command(about = "Laptop recommendations, price predictions and comparisons.")]
struct Cli {
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    #[arg(long, value_name = "LEVEL", default_value = "info")]
    log_level: String,

    /// Print view models as JSON instead of text
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ranked, deduplicated recommendations for a profile
    Recommend {
        /// `brand=ASUS,cpu=Intel i7,ram=16,storage=512,gpu=Integrated,gamut=100,budget=9000000`
        #[arg(long, value_name = "PROFILE")]
        profile: Option<SpecificationProfile>,
    },
    /// Predicted price of a single configuration
    Predict {
        #[arg(long, value_name = "PROFILE")]
        profile: Option<SpecificationProfile>,
    },
    /// Predicted prices of two configurations and their difference (A - B)
    Compare {
        #[arg(long, value_name = "PROFILE")]
        a: SpecificationProfile,
        #[arg(long, value_name = "PROFILE")]
        b: SpecificationProfile,
    },
    /// Model statistics of the prediction service
    Metrics,
    /// The service's laptop dataset
    Laptops {
        #[command(subcommand)]
        command: LaptopCommands,
    },
}

#[derive(Subcommand)]
enum LaptopCommands {
    List {
        #[arg(long, value_name = "N", default_value_t = DEFAULT_PAGE_LIMIT)]
        limit: usize,
        #[arg(long, value_name = "N", default_value_t = 0)]
        offset: usize,
    },
    Get {
        #[arg(value_name = "ID")]
        id: u64,
    },
    Create {
        #[arg(long, value_name = "PROFILE")]
        profile: SpecificationProfile,
        #[arg(long, value_name = "RUPIAH")]
        price: f64,
        #[arg(long)]
        name: Option<String>,
    },
    Update {
        #[arg(value_name = "ID")]
        id: u64,
        #[command(flatten)]
        fields: DraftFields,
    },
    Delete {
        #[arg(value_name = "ID")]
        id: u64,
    },
}

#[derive(Args)]
struct DraftFields {
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    brand: Option<String>,
    #[arg(long)]
    cpu: Option<String>,
    #[arg(long)]
    ram_gb: Option<u32>,
    #[arg(long)]
    storage_gb: Option<u32>,
    #[arg(long)]
    gpu: Option<String>,
    #[arg(long)]
    color_gamut: Option<u32>,
    #[arg(long, value_name = "RUPIAH")]
    price: Option<f64>,
}

impl From<DraftFields> for LaptopDraft {
    fn from(fields: DraftFields) -> Self {
        LaptopDraft {
            name: fields.name,
            brand: fields.brand,
            cpu: fields.cpu,
            ram_gb: fields.ram_gb,
            storage_gb: fields.storage_gb,
            gpu: fields.gpu,
            color_gamut: fields.color_gamut,
            price: fields.price,
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli).await {
        eprintln!("{err:#}");
        process::exit(exit_code(&err));
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    init_tracing(&cli.log_level)?;

    let config = AdvisorConfig::load(cli.config.as_deref())?;
    let presenter = Presenter::from_config(&config.presentation)?;
    let service = HttpPredictionService::new(&config.service)?;
    let advisor = Advisor::new(service, &config);
    let printer = Printer::new(presenter, cli.json);

    match cli.command {
        Commands::Recommend { profile } => {
            let shaped = advisor.recommend(&profile.unwrap_or_default()).await?;
            printer.candidates(&shaped)
        }
        Commands::Predict { profile } => {
            let shaped = advisor.predict(&profile.unwrap_or_default()).await?;
            printer.candidates(&shaped)
        }
        Commands::Compare { a, b } => {
            let result = advisor.compare(&a, &b).await?;
            printer.comparison(&result)
        }
        Commands::Metrics => {
            let metrics = advisor.metrics().await?;
            printer.metrics(&metrics)
        }
        Commands::Laptops { command } => match command {
            LaptopCommands::List { limit, offset } => {
                let page = advisor.list_laptops(limit, offset).await?;
                printer.candidates(&page)
            }
            LaptopCommands::Get { id } => {
                let record = advisor.get_laptop(id).await?;
                printer.record(record)
            }
            LaptopCommands::Create { profile, price, name } => {
                profile.validate()?;
                let draft = LaptopDraft::from_profile(&profile, name, price);
                let record = advisor.create_laptop(&draft).await?;
                printer.record(record)
            }
            LaptopCommands::Update { id, fields } => {
                let record = advisor.update_laptop(id, &fields.into()).await?;
                printer.record(record)
            }
            LaptopCommands::Delete { id } => {
                advisor.delete_laptop(id).await?;
                printer.line(&format!("deleted laptop {id}"))
            }
        },
    }
}

fn init_tracing(log_level: &str) -> AdvisorResult<()> {
    let level = Level::from_str(log_level).map_err(|_| {
        AdvisorError::invalid_input(format!(
            "invalid --log-level '{log_level}'; expected error|warn|info|debug|trace"
        ))
    })?;

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
    Ok(())
}

fn exit_code(err: &anyhow::Error) -> i32 {
    if let Some(advisor_err) = err.downcast_ref::<AdvisorError>() {
        advisor_err.kind().exit_code()
    } else if err.downcast_ref::<RenderError>().is_some() {
        laptop_core::ErrorKind::Config.exit_code()
    } else {
        EXIT_OTHER
    }
}
