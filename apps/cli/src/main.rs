mod api;
mod config;
mod errors;
mod models;
mod workflow;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::api::HttpMatchService;
use crate::config::Config;
use crate::models::SelectedFile;
use crate::workflow::SubmissionController;

/// Uploads a resume and a job description to the matching service and prints
/// the resulting match score.
#[derive(Parser, Debug)]
#[command(about = "Get a resume / job-description match score")]
struct Args {
    /// Path to the resume file (.pdf or .docx)
    resume: PathBuf,

    /// Path to the job description file (.pdf or .docx)
    job_description: PathBuf,

    /// Base URL of the matching service (overrides MATCH_API_BASE_URL)
    #[arg(long)]
    base_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = Config::from_env()?;
    if let Some(base_url) = args.base_url {
        config.base_url = base_url;
    }

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "jobmatch v{} (service: {})",
        env!("CARGO_PKG_VERSION"),
        config.base_url
    );

    let resume = SelectedFile::load(&args.resume).await?;
    let job_description = SelectedFile::load(&args.job_description).await?;

    let service = Arc::new(HttpMatchService::new(&config)?);
    let mut controller = SubmissionController::new(service);
    controller.select_resume(resume);
    controller.select_job_description(job_description);

    // A step failure propagates out of main with the failing step named.
    let score = controller.submit().await?;
    println!("Match Score: {score}");

    Ok(())
}
