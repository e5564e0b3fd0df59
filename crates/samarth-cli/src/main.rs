//! Samarth — answers free-text questions about Indian agriculture and
//! rainfall from the command line.

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use samarth_cli::args::CliArgs;
use samarth_cli::config::{AppConfig, LogFormat};
use samarth_cli::output;
use samarth_core::Pipeline;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    // ── Load config ─────────────────────────────────────────────
    let config = AppConfig::load(args.config.as_deref()).context("loading config")?;
    init_tracing(args.log_json || config.log_format == LogFormat::Json);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        provider = ?config.provider.kind,
        "samarth starting"
    );

    // ── Questions ───────────────────────────────────────────────
    let questions = if args.questions.is_empty() {
        read_stdin_questions().await?
    } else {
        args.questions
    };
    if questions.is_empty() {
        tracing::warn!("no questions given");
        return Ok(());
    }

    // ── Pipeline ────────────────────────────────────────────────
    // The live provider holds a blocking HTTP client, which must be built
    // and dropped outside the async runtime.
    let provider_config = config.provider.clone();
    let pipeline = tokio::task::spawn_blocking(move || {
        samarth_data::build_provider(&provider_config).map(|p| Arc::new(Pipeline::new(p)))
    })
    .await?
    .context("building data provider")?;

    // ── Answer concurrently, print in input order ──────────────
    let tasks: Vec<_> = questions
        .into_iter()
        .map(|question| {
            let pipeline = Arc::clone(&pipeline);
            tokio::task::spawn_blocking(move || {
                let answer = pipeline.answer(&question);
                (question, answer)
            })
        })
        .collect();

    for task in tasks {
        let (question, answer) = task.await?;
        if args.json {
            println!("{}", output::render_json(&answer)?);
        } else {
            println!("{}", output::render_text(&question, &answer));
        }
    }

    tokio::task::spawn_blocking(move || drop(pipeline)).await?;
    tracing::info!("samarth finished");
    Ok(())
}

fn init_tracing(json: bool) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// One question per non-blank stdin line.
async fn read_stdin_questions() -> anyhow::Result<Vec<String>> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut questions = Vec::new();
    while let Some(line) = lines.next_line().await.context("reading stdin")? {
        let line = line.trim();
        if !line.is_empty() {
            questions.push(line.to_string());
        }
    }
    Ok(questions)
}
