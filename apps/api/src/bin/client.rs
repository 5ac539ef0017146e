use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use screener::config::Config;
use screener::intake::{
    read_job_description, render_report, submit, HttpScreeningService, IntakeError,
    LocalScreeningService, ResumeFile, ScreeningReport, ScreeningService, FAILURE_MESSAGE,
};

#[derive(Parser)]
#[command(
    name = "screener-client",
    about = "Screen a resume against a job description",
    long_about = "Uploads a PDF or DOCX resume together with a job description and prints \
                  the match score, matched and missing skills, and suggestions.",
    version
)]
struct Args {
    /// Path to the resume (PDF or DOCX)
    #[arg(short, long)]
    resume: PathBuf,

    /// Job description text
    #[arg(short, long, conflicts_with = "job_file")]
    job: Option<String>,

    /// Read the job description from a file
    #[arg(long)]
    job_file: Option<PathBuf>,

    /// Base URL of the screening server
    #[arg(long, env = "SCREENER_URL", default_value = "http://127.0.0.1:8080")]
    server: String,

    /// Screen in-process instead of calling the server
    #[arg(long)]
    local: bool,

    /// Simulated latency for --local, in milliseconds
    #[arg(long, default_value_t = 0, requires = "local")]
    latency_ms: u64,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(&args).await {
        Ok(report) => {
            if args.json {
                match serde_json::to_string_pretty(&report) {
                    Ok(json) => println!("{json}"),
                    Err(e) => {
                        eprintln!("{FAILURE_MESSAGE}\n{e}");
                        return ExitCode::FAILURE;
                    }
                }
            } else {
                print!("{}", render_report(&report));
            }
            ExitCode::SUCCESS
        }
        Err(IntakeError::MissingInput) => {
            eprintln!("Missing Information: {}", IntakeError::MissingInput);
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("{FAILURE_MESSAGE}\n{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &Args) -> Result<ScreeningReport, IntakeError> {
    let job_description = match (&args.job, &args.job_file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => read_job_description(path).await?,
        (None, None) => return Err(IntakeError::MissingInput),
    };
    if job_description.trim().is_empty() {
        return Err(IntakeError::MissingInput);
    }

    let resume = ResumeFile::load(&args.resume).await?;

    let service: Box<dyn ScreeningService> = if args.local {
        let config = Config::from_env().map_err(IntakeError::Config)?;
        debug!(latency_ms = args.latency_ms, "Using in-process screening");
        Box::new(LocalScreeningService::from_config(
            &config,
            Duration::from_millis(args.latency_ms),
        ))
    } else {
        let service = HttpScreeningService::new(&args.server)?;
        debug!(endpoint = service.endpoint(), "Using remote screening");
        Box::new(service)
    };

    submit(service.as_ref(), &resume, &job_description).await
}
