// src/main.rs
// regexai CLI

use anyhow::Result;
use clap::{Arg, ArgAction, Command, CommandFactory, FromArgMatches, Parser};
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use regexai::config::{self, Config};
use regexai::display;
use regexai::llm::OpenAiClient;
use regexai::pattern::catalog;
use regexai::{GenerateOptions, Generator, RegexAiError};

const AFTER_HELP: &str = r#"Examples:
  regexai "email addresses"
  regexai "phone numbers" --test "(555) 123-4567"
  regexai "URLs starting with https" --explain
  regexai "dates in MM/DD/YYYY format" --dry-run"#;

#[derive(Parser)]
#[command(name = "regexai", display_name = "RegexAI")]
#[command(about = "RegexAI - Convert English to Regex using AI")]
#[command(version)]
#[command(after_help = after_help())]
struct Args {
    /// English description of the pattern you need
    description: String,

    /// Test string to validate the regex against
    #[arg(short, long = "test", value_name = "STRING")]
    test: Option<String>,

    /// Show the AI prompt without making a request
    #[arg(short, long)]
    dry_run: bool,

    /// Explain the regex pattern components
    #[arg(short, long)]
    explain: bool,

    /// Model to use for generation
    #[arg(long, short = 'm')]
    model: Option<String>,

    /// OpenAI API key
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,
}

/// Full command: the derived arguments plus `-v/--version` in place of
/// clap's `-V`.
fn cli() -> Command {
    Args::command().disable_version_flag(true).arg(
        Arg::new("version")
            .short('v')
            .long("version")
            .short_alias('V')
            .action(ArgAction::Version)
            .help("Print version"),
    )
}

fn parse_args() -> Args {
    let matches = cli().get_matches();
    Args::from_arg_matches(&matches).unwrap_or_else(|e| e.exit())
}

fn after_help() -> String {
    let topics: Vec<_> = catalog::keys().collect();
    format!("{}\n\nCommon patterns: {}", AFTER_HELP, topics.join(", "))
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file (from ~/.regexai/.env or current dir)
    let env_path = config::config_dir().join(".env");
    if env_path.exists() {
        let _ = dotenvy::from_path(&env_path);
    } else {
        let _ = dotenvy::dotenv();
    }

    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = parse_args();

    println!("{}", display::banner());

    let settings = match Config::load().resolve(args.api_key, args.model) {
        Ok(settings) => settings,
        Err(e @ RegexAiError::MissingCredential) => {
            eprintln!("{}", display::missing_credential_hint());
            return Err(e.into());
        }
        Err(e) => return Err(e.into()),
    };

    let generator = Generator::new(Arc::new(OpenAiClient::new(&settings)));
    let options = GenerateOptions {
        test_input: args.test,
        dry_run: args.dry_run,
        explain: args.explain,
    };

    let outcome = generator.generate(&args.description, &options).await;
    println!("{}", display::render(&args.description, &outcome));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_cli_definition() {
        cli().debug_assert();
    }

    #[test]
    fn test_version_flags() {
        for flag in ["-v", "--version", "-V"] {
            let err = cli().try_get_matches_from(["regexai", flag]).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::DisplayVersion, "flag {}", flag);
            assert_eq!(err.to_string().trim(), "RegexAI 1.0.0");
        }
    }

    #[test]
    fn test_parse_flags() {
        let args = Args::try_parse_from([
            "regexai",
            "phone numbers",
            "-t",
            "(555) 123-4567",
            "--explain",
            "--dry-run",
        ])
        .unwrap();
        assert_eq!(args.description, "phone numbers");
        assert_eq!(args.test.as_deref(), Some("(555) 123-4567"));
        assert!(args.explain);
        assert!(args.dry_run);
    }

    #[test]
    fn test_description_required() {
        assert!(Args::try_parse_from(["regexai"]).is_err());
    }

    #[test]
    fn test_help_lists_common_patterns() {
        assert!(after_help().contains("email, phone, url, ip, date"));
    }
}
