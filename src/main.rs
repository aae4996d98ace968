// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, error};
use std::io::Write;

use polyglotlab::app_config::Config;
use polyglotlab::app_controller::Controller;
use polyglotlab::language_utils::Language;
use polyglotlab::translation::{Domain, Tone};

/// CLI wrapper for Tone to implement ValueEnum
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum CliTone {
    #[default]
    Neutral,
    Formal,
    Informal,
    Simplified,
}

impl From<CliTone> for Tone {
    fn from(cli_tone: CliTone) -> Self {
        match cli_tone {
            CliTone::Neutral => Tone::Neutral,
            CliTone::Formal => Tone::Formal,
            CliTone::Informal => Tone::Informal,
            CliTone::Simplified => Tone::Simplified,
        }
    }
}

/// CLI wrapper for Domain to implement ValueEnum
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum CliDomain {
    #[default]
    General,
    Business,
    Technical,
    Casual,
}

impl From<CliDomain> for Domain {
    fn from(cli_domain: CliDomain) -> Self {
        match cli_domain {
            CliDomain::General => Domain::General,
            CliDomain::Business => Domain::Business,
            CliDomain::Technical => Domain::Technical,
            CliDomain::Casual => Domain::Casual,
        }
    }
}

/// CLI wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LevelFilter {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LevelFilter::Error,
            CliLogLevel::Warn => LevelFilter::Warn,
            CliLogLevel::Info => LevelFilter::Info,
            CliLogLevel::Debug => LevelFilter::Debug,
            CliLogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Translate text with optional tone and domain hints
    Translate(TranslateArgs),

    /// Translate forward and back again to check meaning preservation
    Check(CheckArgs),

    /// Explain a translation in learner terms
    Explain(ExplainArgs),

    /// Get feedback on your own translation attempt
    Feedback(FeedbackArgs),

    /// List the supported language pairs and their models
    Pairs,

    /// Generate shell completions for polyglotlab
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct TranslateArgs {
    /// Text to translate
    #[arg(value_name = "TEXT")]
    text: String,

    /// Source language code or name (e.g., 'en', 'eng', 'English')
    #[arg(short, long, default_value = "en")]
    source_language: String,

    /// Target language code or name
    #[arg(short, long, default_value = "fr")]
    target_language: String,

    /// Tone hint
    #[arg(long, value_enum, default_value = "neutral")]
    tone: CliTone,

    /// Domain / context hint
    #[arg(long, value_enum, default_value = "general")]
    domain: CliDomain,

    /// Also explain the translation
    #[arg(short, long)]
    explain: bool,
}

#[derive(Parser, Debug)]
struct CheckArgs {
    /// Text to round-trip
    #[arg(value_name = "TEXT")]
    text: String,

    /// Source language code or name
    #[arg(short, long, default_value = "en")]
    source_language: String,

    /// Target language code or name
    #[arg(short, long, default_value = "de")]
    target_language: String,

    /// Tone hint
    #[arg(long, value_enum, default_value = "neutral")]
    tone: CliTone,

    /// Domain / context hint
    #[arg(long, value_enum, default_value = "general")]
    domain: CliDomain,
}

#[derive(Parser, Debug)]
struct ExplainArgs {
    /// Original text
    #[arg(value_name = "ORIGINAL")]
    original: String,

    /// The translation to explain
    #[arg(value_name = "TRANSLATION")]
    translation: String,

    /// Tone hint the translation was made with
    #[arg(long, value_enum, default_value = "neutral")]
    tone: CliTone,

    /// Domain hint the translation was made with
    #[arg(long, value_enum, default_value = "general")]
    domain: CliDomain,
}

#[derive(Parser, Debug)]
struct FeedbackArgs {
    /// Original text in the source language
    #[arg(value_name = "ORIGINAL")]
    original: String,

    /// Your own translation attempt
    #[arg(value_name = "ATTEMPT")]
    attempt: String,

    /// Source language code or name
    #[arg(short, long, default_value = "en")]
    source_language: String,

    /// Target language code or name
    #[arg(short, long, default_value = "fr")]
    target_language: String,
}

/// PolyglotLab - Smart Translator & Learning Studio
///
/// A translation playground over pretrained models: multi-language
/// translation with tone and domain hints, back-translation checks, and a
/// learning mode with feedback on your own translations.
#[derive(Parser, Debug)]
#[command(name = "polyglotlab")]
#[command(version = "0.1.0")]
#[command(about = "Smart translator and learning studio over pretrained models")]
#[command(long_about = "PolyglotLab translates between English and French, German, Spanish or
Swedish using MarianMT models, and explains its choices with an
instruction-tuned teacher model.

EXAMPLES:
    polyglotlab translate \"Hello, how are you?\"
    polyglotlab translate -s en -t de --tone formal --domain business \"See attached invoice.\"
    polyglotlab translate --explain \"Hello, how are you?\"
    polyglotlab check -t de \"The cat sat on the mat.\"
    polyglotlab explain \"Hello\" \"Bonjour\"
    polyglotlab feedback \"Good morning\" \"Bon matin\" -t fr
    polyglotlab pairs
    polyglotlab completions bash > polyglotlab.bash

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a
    different config file with --config-path. If the config file doesn't
    exist, a default one will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, global = true, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {:5} {}\x1B[0m",
                color,
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    if CustomLogger::init(LevelFilter::Info).is_err() {
        eprintln!("Failed to initialize logger");
    }

    let cli = CommandLineOptions::parse();

    if let Err(e) = run(cli).await {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: CommandLineOptions) -> Result<()> {
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(*shell, &mut cmd, "polyglotlab", &mut std::io::stdout());
        return Ok(());
    }

    let config = Config::load_or_create(&cli.config_path)
        .with_context(|| format!("Failed to load configuration from {}", cli.config_path))?;

    // CLI log level wins over the configured one
    let level = cli
        .log_level
        .map(LevelFilter::from)
        .unwrap_or_else(|| config.log_level.to_level_filter());
    log::set_max_level(level);

    let controller = Controller::with_config(config)?;

    match cli.command {
        Commands::Translate(args) => {
            let source = parse_language(&args.source_language)?;
            let target = parse_language(&args.target_language)?;

            let translation = controller
                .translate_text(
                    &args.text,
                    source,
                    target,
                    args.tone.into(),
                    args.domain.into(),
                )
                .await?;
            println!("{}", translation);

            if args.explain {
                let explanation = controller
                    .explain_translation(
                        &args.text,
                        &translation,
                        args.tone.into(),
                        args.domain.into(),
                    )
                    .await?;
                println!("\n---\n\n{}", explanation);
            }
        }

        Commands::Check(args) => {
            let source = parse_language(&args.source_language)?;
            let target = parse_language(&args.target_language)?;

            let (forward, backward) = controller
                .back_translate(
                    &args.text,
                    source,
                    target,
                    args.tone.into(),
                    args.domain.into(),
                )
                .await?;
            println!(
                "Forward ({} -> {}):\n{}\n\nBack ({} -> {}):\n{}",
                source.code(),
                target.code(),
                forward,
                target.code(),
                source.code(),
                backward
            );
        }

        Commands::Explain(args) => {
            let explanation = controller
                .explain_translation(
                    &args.original,
                    &args.translation,
                    args.tone.into(),
                    args.domain.into(),
                )
                .await?;
            println!("{}", explanation);
        }

        Commands::Feedback(args) => {
            let source = parse_language(&args.source_language)?;
            let target = parse_language(&args.target_language)?;

            let feedback = controller
                .learning_mode_feedback(&args.original, &args.attempt, source, target)
                .await?;
            println!("{}", feedback);
        }

        Commands::Pairs => {
            println!("Supported translation directions:");
            for (pair, identifier) in controller.list_models() {
                println!(
                    "  {:>7}  {} -> {}  ({})",
                    pair.to_string(),
                    pair.source.name(),
                    pair.target.name(),
                    identifier
                );
            }
            println!(
                "\nExplanations and feedback: {}",
                controller.feedback_model()
            );
        }

        Commands::Completions { .. } => unreachable!("handled above"),
    }

    Ok(())
}

/// Parse a user-supplied language code or name
fn parse_language(value: &str) -> Result<Language> {
    Language::from_code(value)
        .with_context(|| format!("Unrecognized language: '{}'", value))
}
