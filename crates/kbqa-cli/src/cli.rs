//! `kbqa` - display KBQA answers and pretty-print their SPARQL queries

mod commands;
mod logging;
mod settings;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use commands::OutputOptions;
use kbqa_sparql::{FormatterConfig, KeywordCasing, SparqlFormatter};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "kbqa", version, about = "Display KBQA answers and SPARQL queries")]
struct Cli {
    /// Formatter config file (defaults to <config dir>/kbqa/formatter.toml)
    #[arg(long, global = true, env = "KBQA_CONFIG")]
    config: Option<PathBuf>,

    /// Spaces per brace nesting level
    #[arg(long, global = true)]
    indent_width: Option<usize>,

    /// Spaces that align a clause continued after `;`
    #[arg(long, global = true)]
    clause_padding: Option<usize>,

    /// How lowercase keywords are upper-cased
    #[arg(long, global = true, value_enum)]
    keyword_casing: Option<CasingArg>,

    /// Escape `<` and `>` in printed queries
    #[arg(long, global = true)]
    escape_markup: bool,

    /// Increase log verbosity (repeatable)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Format a raw SPARQL query
    Query {
        /// Input file (stdin when omitted)
        file: Option<PathBuf>,
    },
    /// Show an answer payload: question, answers and formatted query
    Payload {
        /// JSON payload file (stdin when omitted)
        file: Option<PathBuf>,
    },
    /// Convert a QALD result document into an answer payload
    Qald {
        /// QALD JSON file (stdin when omitted)
        file: Option<PathBuf>,

        /// Question text to put in the payload
        #[arg(long)]
        question: Option<String>,

        /// Language of the question text taken from the document
        #[arg(long, default_value = "en")]
        language: String,
    },
    /// Show the output of every formatting stage
    Stages {
        /// Input file (stdin when omitted)
        file: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CasingArg {
    FirstOccurrence,
    EveryWord,
}

impl From<CasingArg> for KeywordCasing {
    fn from(arg: CasingArg) -> Self {
        match arg {
            CasingArg::FirstOccurrence => KeywordCasing::FirstOccurrence,
            CasingArg::EveryWord => KeywordCasing::EveryWord,
        }
    }
}

impl Cli {
    fn formatter_config(&self) -> Result<FormatterConfig> {
        let mut config = settings::load_formatter_config(self.config.as_deref())?;
        if let Some(width) = self.indent_width {
            config = config.with_indent_width(width);
        }
        if let Some(padding) = self.clause_padding {
            config = config.with_clause_padding(padding);
        }
        if let Some(casing) = self.keyword_casing {
            config = config.with_keyword_casing(casing.into());
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(logging::LoggingConfig::from_verbosity(cli.verbose))?;

    let config = cli.formatter_config()?;
    tracing::debug!(?config, "Formatter configured");

    let formatter = SparqlFormatter::new(config);
    let options = OutputOptions {
        escape_markup: cli.escape_markup,
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Command::Query { file } => {
            let input = commands::read_input(file.as_deref())?;
            commands::run_query(&formatter, options, &input, &mut out)
        }
        Command::Payload { file } => {
            let input = commands::read_input(file.as_deref())?;
            commands::run_payload(&formatter, options, &input, &mut out)
        }
        Command::Qald {
            file,
            question,
            language,
        } => {
            let input = commands::read_input(file.as_deref())?;
            commands::run_qald(
                &formatter,
                options,
                &input,
                question.as_deref(),
                language,
                &mut out,
            )
        }
        Command::Stages { file } => {
            let input = commands::read_input(file.as_deref())?;
            commands::run_stages(&formatter, options, &input, &mut out)
        }
    }
}
