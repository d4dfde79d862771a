//! llmstr — llm-strings CLI
//!
//! Normalize, validate and inspect `llm://` connection strings.

use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use llm_strings::config::Config;
use llm_strings::providers::{
    detect_bedrock_model_family, detect_gateway_sub_provider, detect_provider,
    is_gateway_provider, is_reasoning_model,
};
use llm_strings::{NormalizeOptions, Provider, ValidateOptions, build, normalize, parse, validate};

/// llm-strings CLI
#[derive(Parser)]
#[command(name = "llmstr")]
#[command(version = llm_strings::PKG_VERSION)]
#[command(about = "Normalize and validate LLM connection strings")]
struct Args {
    /// Path to configuration file
    #[arg(short, long, env = "LLMSTR_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Rewrite params into the provider's native names
    Normalize {
        /// Connection string (or omit to read from stdin)
        connection: Option<String>,
        /// Show every rewrite
        #[arg(short, long)]
        verbose: bool,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Check params against the provider's rules (exit 1 on errors)
    Validate {
        /// Connection string (or omit to read from stdin)
        connection: Option<String>,
        /// Treat unknown providers and params as errors
        #[arg(short, long)]
        strict: bool,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show what the registry detects for a connection string
    Detect {
        /// Connection string (or omit to read from stdin)
        connection: Option<String>,
    },

    /// Print version and build metadata
    Version,
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    // Initialise tracing (default: warn; override with RUST_LOG).
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    let config = Config::load(args.config.as_deref())?;

    match args.command {
        Command::Normalize {
            connection,
            verbose,
            json,
        } => {
            let record = parse(&resolve_input(connection, "normalize")?)?;
            let options = NormalizeOptions::new().verbose(verbose || config.normalize.verbose);
            let result = normalize(&record, &options);

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
                return Ok(ExitCode::SUCCESS);
            }

            println!("{}", build(&result.config));
            println!("provider:     {}", display_provider(result.provider));
            if let Some(sub) = result.sub_provider {
                println!("sub-provider: {sub}");
            }
            for change in &result.changes {
                match &change.to {
                    Some(to) => println!(
                        "  {} → {} = {} ({})",
                        change.from, to, change.value, change.reason
                    ),
                    None => println!("  {} dropped ({})", change.from, change.reason),
                }
            }
        }

        Command::Validate {
            connection,
            strict,
            json,
        } => {
            let connection = resolve_input(connection, "validate")?;
            let options = ValidateOptions::new().strict(strict || config.validate.strict);
            let issues = validate(&connection, &options);

            if json {
                println!("{}", serde_json::to_string_pretty(&issues)?);
            } else if issues.is_empty() {
                println!("ok");
            } else {
                for issue in &issues {
                    println!("{issue}");
                }
            }

            if issues.iter().any(|i| i.is_error()) {
                return Ok(ExitCode::FAILURE);
            }
        }

        Command::Detect { connection } => {
            let record = parse(&resolve_input(connection, "detect")?)?;
            let provider = detect_provider(&record.host);
            println!("provider:     {}", display_provider(provider));
            if provider.is_some_and(is_gateway_provider) {
                println!(
                    "sub-provider: {}",
                    display_provider(detect_gateway_sub_provider(&record.model))
                );
            }
            if provider == Some(Provider::Bedrock) {
                println!(
                    "family:       {}",
                    detect_bedrock_model_family(&record.model)
                        .map_or("unknown", |f| f.as_str())
                );
            }
            println!("reasoning:    {}", is_reasoning_model(&record.model));
        }

        Command::Version => {
            println!("llmstr {}", llm_strings::version::version_string());
            println!("built {}", llm_strings::version::BUILD_TIMESTAMP);
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn display_provider(provider: Option<Provider>) -> &'static str {
    provider.map_or("unknown", |p| p.as_str())
}

/// Take the connection string from the argument, or from piped stdin.
fn resolve_input(
    arg: Option<String>,
    command: &str,
) -> Result<String, Box<dyn std::error::Error>> {
    if let Some(arg) = arg {
        return Ok(arg);
    }
    if io::stdin().is_terminal() {
        return Err(format!("{command}: no connection string provided").into());
    }
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    let trimmed = buf.trim();
    if trimmed.is_empty() {
        return Err(format!("{command}: no connection string provided").into());
    }
    Ok(trimmed.to_string())
}
