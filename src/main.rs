use anyhow::{Result, anyhow};
use clap::builder::FalseyValueParser;
use clap::{Parser, Subcommand};
use gitdex::DecodeOptions;
use gitdex::areas::index::DEFAULT_MAX_SIZE;
use gitdex::areas::viewer::{ViewSettings, Viewer};
use gitdex::artifacts::core::{PagerWriter, use_color, use_pager};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter
const LOG_ENV: &str = "GITDEX_LOG";

const DEFAULT_INDEX_PATH: &str = ".git/index";

#[derive(Parser)]
#[command(
    name = "gitdex",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Decode and inspect git index files",
    long_about = "This tool decodes a git index file (the staging area, usually .git/index) \
    and prints its header, entries and trailer in human-readable form.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(
        long,
        global = true,
        env = "GITDEX_STRICT",
        value_parser = FalseyValueParser::new(),
        help = "Reject unexpected signatures and versions instead of warning"
    )]
    strict: bool,
    #[arg(
        long,
        global = true,
        env = "GITDEX_MAX_SIZE",
        value_name = "BYTES",
        default_value_t = DEFAULT_MAX_SIZE,
        help = "Refuse index files larger than this"
    )]
    max_size: u64,
    #[arg(long, global = true, help = "Show timestamps as RFC 3339 dates as well")]
    human_time: bool,
    #[arg(short, long, global = true, help = "Log decoding steps to stderr")]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "show",
        about = "Print the header, every entry and the trailer",
        long_about = "This command decodes the whole index file and prints the header, \
        the metadata of every entry in on-disk order, and the trailing checksum or extension."
    )]
    Show {
        #[arg(index = 1, default_value = DEFAULT_INDEX_PATH, help = "The path to the index file")]
        path: PathBuf,
    },
    #[command(name = "header", about = "Print the index header")]
    Header {
        #[arg(index = 1, default_value = DEFAULT_INDEX_PATH, help = "The path to the index file")]
        path: PathBuf,
    },
    #[command(
        name = "ls-files",
        about = "List the paths recorded in the index",
        long_about = "This command lists every entry name in on-disk order. \
        With --stage, the mode, object ID and merge stage are shown too."
    )]
    LsFiles {
        #[arg(short, long, help = "Show mode, object ID and stage")]
        stage: bool,
        #[arg(index = 1, default_value = DEFAULT_INDEX_PATH, help = "The path to the index file")]
        path: PathBuf,
    },
    #[command(name = "tail", about = "Classify the bytes after the last entry")]
    Tail {
        #[arg(index = 1, default_value = DEFAULT_INDEX_PATH, help = "The path to the index file")]
        path: PathBuf,
    },
}

impl Commands {
    fn path(&self) -> &Path {
        match self {
            Commands::Show { path }
            | Commands::Header { path }
            | Commands::LsFiles { path, .. }
            | Commands::Tail { path } => path,
        }
    }
}

fn init_logging(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|err| anyhow!("failed to initialize logger: {err}"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;
    colored::control::set_override(use_color());

    let settings = ViewSettings::new(
        cli.max_size,
        DecodeOptions::default().strict(cli.strict),
        cli.human_time,
    );

    let pager = use_pager().then(minus::Pager::new);
    let writer: Box<dyn std::io::Write> = match &pager {
        Some(pager) => Box::new(PagerWriter::new(pager.clone())),
        None => Box::new(std::io::stdout()),
    };
    let viewer = Viewer::new(cli.command.path(), writer, settings);

    match &cli.command {
        Commands::Show { .. } => viewer.show()?,
        Commands::Header { .. } => viewer.header()?,
        Commands::LsFiles { stage, .. } => viewer.ls_files(*stage)?,
        Commands::Tail { .. } => viewer.tail()?,
    }

    if let Some(pager) = pager {
        minus::page_all(pager)?;
    }

    Ok(())
}
