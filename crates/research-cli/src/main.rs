mod args;
mod config;
mod gemini;
mod github;
mod overview;
mod prompt;
mod summary;

use clap::Parser;

use research_common::{telemetry, ReportError, Result, RunMeta};

use crate::args::Args;
use crate::summary::SummaryWriter;

#[tokio::main]
async fn main() {
    let args = Args::parse();
    telemetry::init_tracing(&args.log_level);

    // Pre-flight: a missing API key aborts before any network call and
    // before anything is written to the artifact.
    let api_key = match config::gemini_api_key() {
        Ok(key) => key,
        Err(e) => {
            tracing::error!(error=%e, "missing configuration");
            std::process::exit(1);
        }
    };

    let writer = SummaryWriter::new(args.summary_path.clone());
    if let Err(e) = run(&args, &api_key, &writer).await {
        tracing::error!(error=%e, "failed to generate report");
        let notice = format!("❌ Failed to generate report: {e}");
        if let Err(write_err) = writer.write(&notice, false).await {
            tracing::error!(error=%write_err, "failed to write failure notice");
        }
        std::process::exit(1);
    }
}

async fn run(args: &Args, api_key: &str, writer: &SummaryWriter) -> Result<()> {
    let token = config::github_token();
    let github = github::build_client().map_err(|e| ReportError::Generation(e.to_string()))?;
    let ctx = github::gather_context(&github, &args.github_api_url, &args.repo, token.as_deref())
        .await;

    let prompt = prompt::build_prompt(&ctx);

    // The header and overview go out before generation so the artifact
    // records the run even when the model call fails.
    writer.write("", true).await?;
    let meta = RunMeta::from_env();
    writer
        .write(&overview::build_overview(&meta, &ctx.time, &args.model), false)
        .await?;

    let gemini = reqwest::Client::new();
    let text =
        gemini::generate_report(&gemini, &args.gemini_api_url, api_key, &args.model, &prompt)
            .await?;
    writer.write(&text, false).await?;
    tracing::info!(model=%args.model, "report written to job summary");
    Ok(())
}
