mod cli;

use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use palaver_ai::{AiError, OpenAiClient, OpenAiConfig, Session, SessionConfig};
use palaver_common::PalaverError;
use palaver_config::PalaverConfig;

/// Load environment variables from a .env file (KEY=VALUE lines).
fn load_dotenv() {
    // Try the workspace root and the current directory.
    let manifest_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let candidates = [
        manifest_dir.join("..").join("..").join(".env"),
        std::path::PathBuf::from(".env"),
    ];

    for path in &candidates {
        if let Ok(contents) = std::fs::read_to_string(path) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }
                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"').trim_matches('\'');
                    if std::env::var(key).is_err() {
                        std::env::set_var(key, value);
                    }
                }
            }
            return;
        }
    }
}

fn load_config(path_override: Option<&str>) -> PalaverConfig {
    let result = match path_override {
        Some(path) => palaver_config::load_from_path(Path::new(path)),
        None => palaver_config::load_config(),
    };
    result.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        PalaverConfig::default()
    })
}

#[tokio::main]
async fn main() {
    // Load .env before anything reads the environment.
    load_dotenv();

    let args = cli::parse();

    let log_directive = args.log_level.as_deref().unwrap_or("palaver=info");
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "palaver=info".parse().unwrap()),
            ),
        )
        .init();

    tracing::info!("Palaver v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(args).await {
        tracing::error!("{e}");
        eprintln!("palaver: {e}");
        std::process::exit(1);
    }

    tracing::info!("Shutdown complete");
}

async fn run(args: cli::Args) -> palaver_common::Result<()> {
    let config = load_config(args.config.as_deref());

    let ai_config = OpenAiConfig::from_env()
        .map_err(|e| PalaverError::Chat(e.to_string()))?
        .with_base_url(config.openai.base_url.clone())
        .with_model(args.model.unwrap_or_else(|| config.openai.model.clone()));
    tracing::info!("Using model {}", ai_config.model);

    let client = Arc::new(OpenAiClient::new(ai_config));
    let mut session = Session::new(
        client,
        SessionConfig {
            max_history: config.session.max_history,
            max_requests_per_second: config.session.max_requests_per_second,
            rate_limit_key: config.session.rate_limit_key.clone(),
        },
    );
    tracing::info!(session = %session.id(), "Session ready");

    if let Some(instruction) = args.system {
        session.set_system_instruction(instruction);
    }

    println!("palaver ready -- type a message, or /quit to exit");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    prompt();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line == "/quit" || line == "/exit" {
            break;
        }
        if line.is_empty() {
            prompt();
            continue;
        }

        match session.send(line).await {
            Ok(reply) => println!("{reply}"),
            Err(AiError::RateLimitExceeded) => {
                eprintln!("(rate limit exceeded -- wait a moment and try again)");
            }
            Err(e) => eprintln!("error: {e}"),
        }
        prompt();
    }

    Ok(())
}

fn prompt() {
    print!("> ");
    let _ = std::io::stdout().flush();
}
