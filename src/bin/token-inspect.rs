use anyhow::{anyhow, Result};
use clap::Parser;
use security_token::helpers::time::now_utc;
use security_token::utils::config_loader;
use security_token::utils::logging::{self, LogLevel};
use security_token::{parse_token, TokenGrammar};
use serde_json::json;
use tokio::io::AsyncReadExt;
use tracing::{error, info};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, env = "CONFIG")]
    config: Option<String>,
    #[arg(long, env = "LOG_LEVEL", value_enum)]
    log_level: Option<LogLevel>,
    /// Raw token; read from stdin when omitted
    #[arg(short, long, env = "TOKEN")]
    token: Option<String>,
    #[arg(long)]
    audience_field: Option<String>,
    #[arg(long)]
    expires_on_field: Option<String>,
    #[arg(long)]
    key_value_separator: Option<String>,
    #[arg(long)]
    pair_separator: Option<String>,
}

impl Args {
    /// Command-line grammar fields override the configured grammar one by one.
    fn grammar(&self, configured: TokenGrammar) -> Result<TokenGrammar> {
        let grammar = TokenGrammar::new(
            self.audience_field
                .as_deref()
                .unwrap_or(configured.audience_field_name()),
            self.expires_on_field
                .as_deref()
                .unwrap_or(configured.expires_on_field_name()),
            self.key_value_separator
                .as_deref()
                .unwrap_or(configured.key_value_separator()),
            self.pair_separator
                .as_deref()
                .unwrap_or(configured.pair_separator()),
        )?;
        Ok(grammar)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // -------------------------------
    // 1. Load config, start logging
    // -------------------------------

    let args = Args::parse();
    let service_config = config_loader::run(args.config.as_deref()).await?;
    logging::run(&service_config, args.log_level)?;

    // -------------------------------
    // 2. Resolve grammar
    // -------------------------------

    let grammar = args.grammar(service_config.grammar.to_grammar()?)?;

    // -------------------------------
    // 3. Read token
    // -------------------------------

    let raw = match args.token.to_owned() {
        Some(token) => Some(token),
        None => read_stdin().await?,
    };

    // -------------------------------
    // 4. Parse and print
    // -------------------------------

    let token = parse_token(raw.as_deref(), &grammar).map_err(|e| {
        error!(kind = ?e.kind(), "token inspection failed");
        anyhow!(e)
    })?;

    let now = now_utc();
    let report = json!({
        "audience": token.audience(),
        "expires_at_utc": token.expires_at_utc(),
        "expired": token.is_expired_at(now),
        "seconds_to_expiry": token.time_to_expiry(now).num_seconds(),
        "token_string": token.token_string(),
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    info!(audience = %token.audience(), "token inspected");

    Ok(())
}

/// `None` when stdin carries nothing but whitespace.
async fn read_stdin() -> Result<Option<String>> {
    let mut buf = String::new();
    tokio::io::stdin().read_to_string(&mut buf).await?;
    let line = buf.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        Ok(None)
    } else {
        Ok(Some(line.to_owned()))
    }
}
