use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use racooni::core::config::Config;
use racooni::features::capture::{CaptureCoordinator, Permission};
use racooni::features::device::{
    FileCamera, FixedLocation, PrintLinkOpener, StaticPermissions, StaticPushToken,
};
use racooni::features::notifications::{HttpNotificationClient, NotificationService};
use racooni::features::reports::{HttpCatalogClient, ReportBoard, ReportFeedService};
use racooni::features::submissions::SubmissionPipeline;
use racooni::modules::storage::HttpImageStore;
use racooni::shared::types::Coordinates;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "racooni")]
#[command(about = "Find and report litter on the side of the street")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every reported sighting with its map link
    List,
    /// Print directions to a sighting, by list position (1-based) or image URL
    Open { target: String },
    /// Submit a new sighting
    Submit {
        /// Photo to upload; non-JPEG images are converted
        #[arg(long)]
        photo: PathBuf,
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        #[arg(long, allow_negative_numbers = true)]
        long: f64,
        /// Answer "deny" to a permission prompt (camera, media_library, location)
        #[arg(long = "deny")]
        deny: Vec<Permission>,
    },
    /// Register this device for push notifications
    RegisterPush {
        #[arg(long)]
        token: String,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // One attempt is a sequential chain of requests; a single thread is enough
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async_main(cli))
}

async fn async_main(cli: Cli) -> anyhow::Result<ExitCode> {
    // Load .env file BEFORE initializing logger so RUST_LOG is available
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;
    tracing::debug!(
        "Using catalog {} and image store {}",
        config.api.catalog_url,
        config.api.image_store_url
    );

    let catalog = Arc::new(HttpCatalogClient::new(&config.api)?);
    let feed = ReportFeedService::new(catalog.clone());
    let mut board = ReportBoard::new();

    match cli.command {
        Commands::List => {
            feed.load(&mut board.reports).await?;
            for (index, report) in board.reports.iter().enumerate() {
                println!("{:>3}. {}  {}", index + 1, report.image_ref, report.map_url());
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Open { target } => {
            feed.load(&mut board.reports).await?;

            let report = match target.parse::<usize>() {
                Ok(position) if position >= 1 => board.reports.as_slice().get(position - 1),
                _ => board.reports.get(&target),
            };

            match report {
                Some(report) => {
                    feed.open_on_map(report, &PrintLinkOpener)?;
                    Ok(ExitCode::SUCCESS)
                }
                None => {
                    eprintln!("No report matches '{}'", target);
                    Ok(ExitCode::FAILURE)
                }
            }
        }
        Commands::Submit {
            photo,
            lat,
            long,
            deny,
        } => {
            // A failed fetch only means the list starts empty
            if let Err(e) = feed.load(&mut board.reports).await {
                tracing::warn!("Could not load existing reports: {}", e);
            }

            let image_store = Arc::new(HttpImageStore::new(&config.api)?);
            let pipeline = SubmissionPipeline::new(image_store, catalog);
            let coordinator = CaptureCoordinator::new(
                Arc::new(StaticPermissions::denying(deny)),
                Arc::new(FileCamera::new(photo)),
                Arc::new(FixedLocation::new(Coordinates::new(lat, long))),
            );

            match pipeline.run_attempt(&coordinator, &mut board).await {
                Ok(report) => {
                    println!("Reported {}", report.image_ref);
                    println!("{}", report.map_url());
                    println!("{} reports in total", board.reports.len());
                    Ok(ExitCode::SUCCESS)
                }
                Err(e) => {
                    if let Some(message) = e.user_message() {
                        eprintln!("{}", message);
                    }
                    Ok(ExitCode::FAILURE)
                }
            }
        }
        Commands::RegisterPush { token } => {
            let service = NotificationService::new(
                Arc::new(StaticPermissions::granting_all()),
                Arc::new(StaticPushToken::new(token)),
                Arc::new(HttpNotificationClient::new(&config.api)?),
            );

            match service.register().await? {
                Some(_) => println!("Push notifications enabled"),
                None => println!("Push notifications not enabled"),
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}
