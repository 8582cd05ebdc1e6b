mod advice;
mod config;
mod errors;
mod llm_client;
mod models;
mod rag;
mod resume;
mod service;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::errors::AppError;
use crate::service::CareerService;

#[derive(Parser)]
#[command(name = "mentor", about = "Resume section extraction and career advice")]
struct Cli {
    /// Resume PDF (defaults to RESUME_PATH)
    #[arg(short, long, global = true)]
    resume: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the extracted sections
    Parse,
    /// Ask one or more career questions; later ones may refer to earlier answers
    Ask {
        #[arg(required = true)]
        questions: Vec<String>,
    },
    /// Skills gap for a target role
    Gap {
        role: String,
        /// Ask the model instead of using the role table
        #[arg(long)]
        rag: bool,
    },
    /// Career paths suggested by the resume's skills
    Paths,
    /// Learning roadmap for the resume's stacks
    Roadmap,
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting Career Mentor v{}", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();
    let resume_path = cli
        .resume
        .or_else(|| config.resume_path.clone())
        .context("No resume given: pass --resume or set RESUME_PATH")?;

    let mut service = CareerService::from_config(&config);
    service.load_resume(&resume_path).await;

    let outcome = match cli.command {
        Commands::Parse => to_json(&service.resume_data()),
        Commands::Ask { questions } => ask_all(&mut service, &questions).await,
        Commands::Gap { role, rag: true } => service
            .skills_gap_rag(&role)
            .await
            .and_then(|advice| to_json(&advice)),
        Commands::Gap { role, rag: false } => {
            service.skills_gap(&role).and_then(|report| to_json(&report))
        }
        Commands::Paths => service.career_paths().and_then(|paths| to_json(&paths)),
        Commands::Roadmap => service
            .learning_roadmap()
            .and_then(|roadmap| to_json(&roadmap)),
    };

    match outcome {
        Ok(value) => {
            println!("{}", serde_json::to_string_pretty(&value)?);
            Ok(())
        }
        Err(e) => {
            let body = json!({
                "error": {
                    "code": e.code(),
                    "message": e.public_message()
                }
            });
            println!("{}", serde_json::to_string_pretty(&body)?);
            std::process::exit(1);
        }
    }
}

async fn ask_all(service: &mut CareerService, questions: &[String]) -> Result<Value, AppError> {
    let mut answers = Vec::with_capacity(questions.len());
    for question in questions {
        answers.push(service.career_advice(question).await?);
    }
    Ok(json!({
        "answers": answers,
        "history": service.chat_history(),
    }))
}

fn to_json<T: Serialize>(value: &T) -> Result<Value, AppError> {
    serde_json::to_value(value).map_err(|e| AppError::Internal(e.into()))
}
