// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result, anyhow};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, info};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use ldc_google::app_config::{FilterConfig, LogLevel};
use ldc_google::{Controller, Domain, Filter, GoogleTranslateFilter, Location};

/// CLI Wrapper for Location to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLocation {
    Any,
    Instruction,
    Input,
    Output,
    Content,
}

impl From<CliLocation> for Location {
    fn from(cli_location: CliLocation) -> Self {
        match cli_location {
            CliLocation::Any => Location::Any,
            CliLocation::Instruction => Location::Instruction,
            CliLocation::Input => Location::Input,
            CliLocation::Output => Location::Output,
            CliLocation::Content => Location::Content,
        }
    }
}

/// CLI Wrapper for Domain to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliDomain {
    Pairs,
    Pretrain,
    Translation,
}

impl From<CliDomain> for Domain {
    fn from(cli_domain: CliDomain) -> Self {
        match cli_domain {
            CliDomain::Pairs => Domain::Pairs,
            CliDomain::Pretrain => Domain::Pretrain,
            CliDomain::Translation => Domain::Translation,
        }
    }
}

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Translate a JSON-lines record stream (default command)
    #[command(name = "google-translate", alias = "translate")]
    Translate(TranslateArgs),

    /// Generate shell completions for ldc-google
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(clap::Args, Debug, Clone)]
struct TranslateArgs {
    /// Kind of records in the input stream
    #[arg(short, long, value_enum)]
    domain: Option<CliDomain>,

    /// The name/ID of the Google Cloud project to use
    #[arg(short = 'p', long = "project_id", alias = "project-id")]
    project_id: Option<String>,

    /// The language the incoming text is in
    #[arg(short = 's', long = "source_lang", alias = "source-lang")]
    source_lang: Option<String>,

    /// The language to translate the text into
    #[arg(short = 't', long = "target_lang", alias = "target-lang")]
    target_lang: Option<String>,

    /// Which data to translate; pairs: instruction,input,output; pretrain: content
    #[arg(short = 'L', long, value_enum, num_args = 1..)]
    location: Vec<CliLocation>,

    /// Split the text into lines and translate each non-empty line separately
    #[arg(long = "split_lines", alias = "split-lines")]
    split_lines: bool,

    /// Configuration file path (JSON)
    #[arg(short, long = "config")]
    config_path: Option<PathBuf>,

    /// Input file with one JSON record per line (default: stdin)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// ldc-google - Google Cloud filters for LLM dataset curation
///
/// Translates the text of JSON-lines dataset records with Google's Translate API.
#[derive(Parser, Debug)]
#[command(name = "ldc-google")]
#[command(version)]
#[command(about = "Translates dataset records using Google's Translate API")]
#[command(args_conflicts_with_subcommands = true)]
#[command(long_about = "Translates dataset records using Google's Translate API.

EXAMPLES:
    ldc-google -d pairs -p my-project -s en -t de -i data.jsonl -o data.de.jsonl
    ldc-google -d pairs -p my-project -s en -t de -L input output < data.jsonl
    ldc-google -d pretrain -c translate.json --split_lines -i corpus.jsonl
    ldc-google -d translation -p my-project -s en -t fr -i parallel.jsonl
    ldc-google completions bash > ldc-google.bash

AUTHENTICATION:
    Requests carry the OAuth access token from the config file ('access_token')
    or the GOOGLE_OAUTH_ACCESS_TOKEN environment variable, for example:
        export GOOGLE_OAUTH_ACCESS_TOKEN=$(gcloud auth print-access-token)
    The Cloud Translation API must be enabled for the project.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    args: TranslateArgs,
}

// @struct: Custom logger writing to stderr so stdout stays free for records
// The active level is the global max level, which is raised or lowered after the config loads
struct CustomLogger;

impl CustomLogger {
    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(CustomLogger))?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color and tag for log level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("\x1B[1;31m", "ERROR"),
            Level::Warn => ("\x1B[1;33m", "WARN "),
            Level::Info => ("\x1B[1;32m", "INFO "),
            Level::Debug => ("\x1B[1;36m", "DEBUG"),
            Level::Trace => ("\x1B[1;35m", "TRACE"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (color, tag) = Self::style_for_level(record.level());
            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {} {}\x1B[0m", color, now, tag, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // The level is adjusted once the configuration is known
    CustomLogger::init(LevelFilter::Warn)?;

    let cli = CommandLineOptions::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "ldc-google", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Translate(args)) => run_translate(args).await,
        None => run_translate(cli.args).await,
    }
}

/// Merge the configuration file (if any) with command line overrides
fn build_config(options: &TranslateArgs) -> Result<FilterConfig> {
    let mut config = match &options.config_path {
        Some(path) => FilterConfig::load(path)
            .with_context(|| format!("Failed to load config file: {}", path.display()))?,
        None => FilterConfig::default(),
    };

    if let Some(project_id) = &options.project_id {
        config.project_id = Some(project_id.clone());
    }
    if let Some(source_lang) = &options.source_lang {
        config.source_lang = Some(source_lang.clone());
    }
    if let Some(target_lang) = &options.target_lang {
        config.target_lang = Some(target_lang.clone());
    }
    if !options.location.is_empty() {
        config.location = options.location.iter().cloned().map(Location::from).collect();
    }
    if options.split_lines {
        config.split_lines = true;
    }
    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    Ok(config)
}

fn open_input(path: Option<&Path>) -> Result<Box<dyn BufRead>> {
    match path {
        Some(path) if path != Path::new("-") => {
            let file = File::open(path).with_context(|| format!("Failed to open input file: {}", path.display()))?;
            Ok(Box::new(BufReader::new(file)))
        }
        _ => Ok(Box::new(std::io::stdin().lock())),
    }
}

fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) if path != Path::new("-") => {
            let file =
                File::create(path).with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        _ => Ok(Box::new(BufWriter::new(std::io::stdout().lock()))),
    }
}

async fn run_translate(options: TranslateArgs) -> Result<()> {
    let config = build_config(&options)?;
    log::set_max_level(config.log_level.to_level_filter());

    let domain: Domain = options
        .domain
        .clone()
        .map(Domain::from)
        .ok_or_else(|| anyhow!("--domain is required (pairs, pretrain or translation)"))?;

    let filter = GoogleTranslateFilter::new(config).context("Invalid filter configuration")?;
    info!("{}: {}", filter.name(), filter.description());

    let mut controller = Controller::new(filter, domain)?;
    let reader = open_input(options.input.as_deref())?;
    let writer = open_output(options.output.as_deref())?;

    controller.run(reader, writer).await?;
    Ok(())
}
