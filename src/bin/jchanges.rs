//! jchanges - JSON changeset CLI tool
//!
//! Compares JSON/YAML documents and prints the differences grouped by
//! operation kind.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use json_changes::value::{self, Value};
use json_changes::{
    group_with, parse_items, Differ, FailurePolicy, IndexNodes, Input, Invocation, Options,
};

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

#[derive(Debug, Parser)]
#[command(
    name = "jchanges",
    version,
    about = "Structural diff of JSON documents grouped by operation kind"
)]
struct Cli {
    /// Options file (YAML or JSON)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output location. Use '-' for stdout
    #[arg(short, long, default_value = "-", global = true)]
    output: String,

    #[arg(long, value_enum, default_value_t = Format::Json, global = true)]
    format: Format,

    /// Single-line JSON output
    #[arg(long, global = true)]
    compact: bool,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compare two documents
    Diff {
        lhs: PathBuf,
        rhs: PathBuf,
        /// Print the raw change records instead of the changeset
        #[arg(long)]
        records: bool,
        #[command(flatten)]
        shape: ShapeArgs,
    },
    /// Compare two fields of every item in a JSON array of items
    Items {
        file: PathBuf,
        /// Field holding the first value
        #[arg(long)]
        value1: String,
        /// Field holding the second value
        #[arg(long)]
        value2: String,
        #[arg(long, value_enum)]
        on_failure: Option<OnFailure>,
        #[command(flatten)]
        shape: ShapeArgs,
    },
}

#[derive(Debug, clap::Args)]
struct ShapeArgs {
    /// Also report equal leaves as UNCHANGED
    #[arg(long)]
    include_unchanged: bool,

    #[arg(long, value_enum)]
    index_nodes: Option<IndexNodesArg>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Yaml,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum IndexNodesArg {
    Mapping,
    Sequence,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OnFailure {
    Abort,
    Skip,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> CliResult<()> {
    let mut options = match &cli.config {
        Some(path) => Options::load(path)?,
        None => Options::default(),
    };
    debug!(?options, "options loaded");

    let mut output: Box<dyn Write> = if cli.output == "-" {
        Box::new(io::stdout())
    } else {
        Box::new(
            fs::File::create(&cli.output)
                .map_err(|e| format!("Failed to create output file {:?}: {}", cli.output, e))?,
        )
    };
    let emitter = Emitter {
        format: cli.format,
        compact: cli.compact,
    };

    match cli.command {
        Command::Diff {
            lhs,
            rhs,
            records,
            shape,
        } => {
            shape.apply(&mut options);
            diff(&options, &lhs, &rhs, records, &emitter, &mut output)?;
        }
        Command::Items {
            file,
            value1,
            value2,
            on_failure,
            shape,
        } => {
            shape.apply(&mut options);
            if let Some(policy) = on_failure {
                options.on_failure = match policy {
                    OnFailure::Abort => FailurePolicy::Abort,
                    OnFailure::Skip => FailurePolicy::Skip,
                };
            }
            items(&options, &file, &value1, &value2, &emitter, &mut output)?;
        }
    }

    output.flush()?;
    Ok(())
}

impl ShapeArgs {
    fn apply(&self, options: &mut Options) {
        if self.include_unchanged {
            options.diff.include_unchanged = true;
        }
        if let Some(nodes) = self.index_nodes {
            options.group.index_nodes = match nodes {
                IndexNodesArg::Mapping => IndexNodes::Mapping,
                IndexNodesArg::Sequence => IndexNodes::Sequence,
            };
        }
    }
}

fn diff(
    options: &Options,
    lhs_file: &Path,
    rhs_file: &Path,
    records: bool,
    emitter: &Emitter,
    output: &mut dyn Write,
) -> CliResult<()> {
    let lhs = load_document(lhs_file)?;
    let rhs = load_document(rhs_file)?;

    let changes = Differ::new(options.diff).diff(&lhs, &rhs)?;
    if records {
        return emitter.emit(&changes, output);
    }

    let changeset = group_with(&changes, &options.group);
    emitter.emit(&changeset, output)
}

fn items(
    options: &Options,
    file: &Path,
    field1: &str,
    field2: &str,
    emitter: &Emitter,
    output: &mut dyn Write,
) -> CliResult<()> {
    let content = fs::read_to_string(file)
        .map_err(|e| format!("Failed to read items file {:?}: {}", file, e))?;
    let items = parse_items(&content)
        .map_err(|e| format!("Failed to parse items file {:?}: {}", file, e))?;

    let invocations: Vec<Invocation> = items
        .into_iter()
        .map(|item| Invocation::from_fields(item, field1, field2))
        .collect();

    let results = json_changes::run(&invocations, options)?;
    emitter.emit(&results, output)
}

/// Reads a document. Files ending in `.yaml` or `.yml` are YAML, anything
/// else is JSON.
fn load_document(file: &Path) -> CliResult<Value> {
    let content = fs::read_to_string(file)
        .map_err(|e| format!("Failed to read file {:?}: {}", file, e))?;

    let is_yaml = matches!(
        file.extension().and_then(|ext| ext.to_str()),
        Some("yaml") | Some("yml")
    );
    if is_yaml {
        return value::from_yaml(&content)
            .map_err(|e| format!("Failed to parse {:?}: {}", file, e).into());
    }

    let input = Input::Text(content);
    let value = input.resolve(&file.display().to_string())?.into_owned();
    Ok(value)
}

struct Emitter {
    format: Format,
    compact: bool,
}

impl Emitter {
    fn emit<T: Serialize + ?Sized>(&self, payload: &T, output: &mut dyn Write) -> CliResult<()> {
        match self.format {
            Format::Json if self.compact => serde_json::to_writer(&mut *output, payload)?,
            Format::Json => serde_json::to_writer_pretty(&mut *output, payload)?,
            Format::Yaml => serde_yaml::to_writer(&mut *output, payload)?,
        }
        if matches!(self.format, Format::Json) {
            writeln!(output)?;
        }
        Ok(())
    }
}
