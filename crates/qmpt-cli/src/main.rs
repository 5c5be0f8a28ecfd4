mod cli;

use clap::{Parser, Subcommand};
use log::LevelFilter;
use qmpt_solve::SolverConfig;
use std::path::{Path, PathBuf};

pub(crate) const COLOR_RESET: &str = "\x1b[0m";
pub(crate) const COLOR_RED: &str = "\x1b[31m";

#[derive(Parser)]
#[command(
    name = "qmpt",
    version,
    about = "Paraconsistent clause solver with abductive label revision",
    long_about = None,
    subcommand_required = true,
    arg_required_else_help = true
)]
struct Cli {
    /// JSON file with solver limits
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,
    /// Raise the log level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a program and answer every `?-` query in it
    Run {
        /// Program file
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Stop each query after this many solutions
        #[arg(long, value_name = "N")]
        limit: Option<usize>,
    },
    /// Answer a single goal against a program
    Query {
        /// Program file
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Goal term, e.g. "logic_forward([3, 4], R)"
        #[arg(value_name = "GOAL")]
        goal: String,
        /// Stop after this many solutions
        #[arg(long, value_name = "N")]
        limit: Option<usize>,
    },
    /// Revise pseudo-labels until they reason to the given result
    Abduce {
        /// Comma-separated pseudo-labels, e.g. 3,9
        #[arg(long, value_name = "LABELS", value_delimiter = ',', required = true)]
        labels: Vec<i64>,
        /// Expected reasoning result
        #[arg(long, value_name = "RESULT", allow_hyphen_values = true)]
        result: i64,
        /// Upper limit on revised labels (defaults to all of them)
        #[arg(long = "max-revision", value_name = "N")]
        max_revision: Option<usize>,
        /// Extra revisions to explore beyond the minimum
        #[arg(long = "more", value_name = "N", default_value_t = 0)]
        more: usize,
        /// Values a label may be revised to
        #[arg(
            long = "pseudo-labels",
            value_name = "VALUES",
            value_delimiter = ',',
            default_values_t = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9]
        )]
        pseudo_labels: Vec<i64>,
        /// Knowledge base file defining logic_forward/2 (defaults to digit addition)
        #[arg(long, value_name = "FILE")]
        kb: Option<PathBuf>,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn load_config(path: Option<&Path>) -> Result<SolverConfig, String> {
    match path {
        Some(path) => SolverConfig::load(path).map_err(|e| e.to_string()),
        None => Ok(SolverConfig::default()),
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = load_config(cli.config.as_deref()).and_then(|config| match cli.command {
        Commands::Run { file, limit } => cli::run::run(&file, config, limit),
        Commands::Query { file, goal, limit } => cli::query::run(&file, &goal, config, limit),
        Commands::Abduce {
            labels,
            result,
            max_revision,
            more,
            pseudo_labels,
            kb,
        } => cli::abduce::run(
            &cli::abduce::AbduceArgs {
                labels,
                result,
                max_revision,
                more,
                pseudo_labels,
                kb,
            },
            config,
        ),
    });

    if let Err(message) = result {
        eprintln!("{}error:{} {}", COLOR_RED, COLOR_RESET, message);
        std::process::exit(1);
    }
}
