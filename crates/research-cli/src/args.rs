use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "industry-research")]
#[command(about = "Daily industry research report for a repository", long_about = None)]
pub struct Args {
    /// Output artifact path; when unset the report goes to stdout
    #[arg(long, env = "GITHUB_STEP_SUMMARY")]
    pub summary_path: Option<PathBuf>,

    /// "owner/name" repository to gather context for
    #[arg(long, env = "GITHUB_REPOSITORY", default_value = "")]
    pub repo: String,

    /// Gemini model identifier
    #[arg(long, env = "GEMINI_MODEL", default_value = "gemini-1.5-flash")]
    pub model: String,

    /// GitHub API base URL
    #[arg(
        long,
        env = "GITHUB_API_URL",
        default_value = "https://api.github.com"
    )]
    pub github_api_url: String,

    /// Gemini API base URL
    #[arg(long, default_value = "https://generativelanguage.googleapis.com")]
    pub gemini_api_url: String,

    /// Tracing filter used when RUST_LOG is unset
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}
