//! Warden probe: authenticates bearer tokens against seeded in-memory stores.
//!
//! Reads one token value per line from stdin and writes one JSON outcome per
//! line to stdout. Logs go to stderr.

use serde::Serialize;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use warden_auth::{AuthError, TokenAuthenticator};
use warden_core::config::AppConfig;
use warden_core::error::AppError;
use warden_entity::UserInfo;
use warden_store::Seed;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = warden_core::logging::init(&config.logging) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(config).await {
        tracing::error!("Probe error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from `WARDEN_CONFIG`, or from `config/` for `WARDEN_ENV`.
fn load_configuration() -> Result<AppConfig, AppError> {
    match std::env::var("WARDEN_CONFIG") {
        Ok(path) => AppConfig::from_file(&path),
        Err(_) => {
            let env = std::env::var("WARDEN_ENV").unwrap_or_else(|_| "development".to_string());
            AppConfig::load(&env)
        }
    }
}

async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting warden-probe v{}", env!("CARGO_PKG_VERSION"));

    let stores = Seed::from_path(&config.store.seed_file).await?.into_stores();
    let authenticator = TokenAuthenticator::from_config(
        stores.tokens,
        stores.users,
        stores.groups,
        &config.authenticator,
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    while let Some(line) = lines.next_line().await? {
        let value = line.trim();
        if value.is_empty() {
            continue;
        }

        let outcome = Outcome::from(authenticator.authenticate(value).await);
        let mut json = serde_json::to_string(&outcome)?;
        json.push('\n');
        stdout.write_all(json.as_bytes()).await?;
    }

    stdout.flush().await?;
    tracing::info!("stdin closed, exiting");
    Ok(())
}

/// One line of probe output.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum Outcome {
    Authenticated { user: UserInfo },
    Rejected { reason: &'static str, error: String },
}

impl From<Result<Option<UserInfo>, AuthError>> for Outcome {
    fn from(result: Result<Option<UserInfo>, AuthError>) -> Self {
        match result {
            Ok(Some(user)) => Self::Authenticated { user },
            Ok(None) => Self::Rejected {
                reason: "unrecognized",
                error: "token not recognized".to_string(),
            },
            Err(e) => Self::Rejected {
                reason: e.kind().as_str(),
                error: e.to_string(),
            },
        }
    }
}
