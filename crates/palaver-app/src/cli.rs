use clap::Parser;

/// Palaver, a bounded-history chat client for OpenAI-style APIs.
#[derive(Parser, Debug)]
#[command(name = "palaver", version, about)]
pub struct Args {
    /// System instruction installed before the first message.
    #[arg(short = 's', long)]
    pub system: Option<String>,

    /// Model override (defaults to the configured model).
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
