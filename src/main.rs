use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::{fmt, EnvFilter};

use obody_config::{export_schema, to_legacy_dialect, PresetDistributionConfig};

/// File names matching the artifacts the game runtime and schema-aware
/// editors look for.
const DEFAULT_CONFIG_FILE: &str = "OBody_presetDistributionConfig.json";
const DEFAULT_SCHEMA_FILE: &str = "OBody_presetDistributionConfig_schema.json";

/// Preset distribution configuration tool for OBody
///
/// Validates configuration files against the declared contract, and emits
/// the JSON Schema and starter template that describe it.
#[derive(Parser, Debug)]
#[command(name = "obody-config")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "warn")]
    log_level: String,

    /// Log to file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate a configuration file, reporting every violation at once
    Validate {
        /// Path to the configuration file
        file: PathBuf,
    },
    /// Write the JSON Schema describing the configuration contract
    Schema {
        /// Output path
        #[arg(short, long, default_value = DEFAULT_SCHEMA_FILE)]
        output: PathBuf,

        /// Emit draft-4 "definitions" referencing for legacy validators
        #[arg(long)]
        legacy_refs: bool,
    },
    /// Write a starter configuration with every key at its default
    Template {
        /// Output path
        #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
        output: PathBuf,
    },
}

fn setup_logging(log_level: &str, log_file: Option<PathBuf>) -> Result<()> {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    let subscriber = fmt().with_env_filter(filter).with_target(true);

    if let Some(log_path) = log_file {
        let file = std::fs::File::create(log_path)?;
        subscriber.with_writer(file).with_ansi(false).init();
    } else {
        subscriber.with_writer(std::io::stderr).init();
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    setup_logging(&args.log_level, args.log_file)?;

    match args.command {
        Command::Validate { file } => {
            let config = PresetDistributionConfig::from_path(&file)
                .with_context(|| format!("{} failed validation", file.display()))?;
            info!("configuration accepted");
            println!(
                "{}: OK ({} npcFormID plugin(s), {} named NPC rule(s))",
                file.display(),
                config.npc_form_id.len(),
                config.npc.len()
            );
        }
        Command::Schema {
            output,
            legacy_refs,
        } => {
            let mut schema = export_schema()?;
            if legacy_refs {
                schema = to_legacy_dialect(schema);
            }
            let rendered = serde_json::to_string_pretty(&schema)?;
            std::fs::write(&output, rendered)
                .with_context(|| format!("failed to write {}", output.display()))?;
            info!("schema written to: {}", output.display());
            println!("wrote schema: {}", output.display());
        }
        Command::Template { output } => {
            let template = PresetDistributionConfig::default();
            let rendered = serde_json::to_string_pretty(&template)?;
            std::fs::write(&output, rendered)
                .with_context(|| format!("failed to write {}", output.display()))?;
            info!("template written to: {}", output.display());
            println!("wrote template: {}", output.display());
        }
    }

    Ok(())
}
