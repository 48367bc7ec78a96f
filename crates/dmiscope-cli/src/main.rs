use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use dmiscope_core::{
    DecodeResult, Dump, DumpFileSource, MemoryImageSource, RawTables, Report, SourceError,
    SysfsSource, TableSource, build_report, decode, write_dump,
};
use glob::glob;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing::Level;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (commit ",
    env!("DMISCOPE_BUILD_COMMIT"),
    ", ",
    env!("DMISCOPE_BUILD_DATE"),
    ")"
);

const EXAMPLES: &str = "Examples:\n  sudo dmiscope table decode --stdout --pretty\n  dmiscope table decode --dump host.dmiscope -o report.json --type 17\n  sudo dmiscope table dump -o host.dmiscope";

#[derive(Parser, Debug)]
#[command(name = "dmiscope")]
#[command(version, long_version = LONG_VERSION)]
#[command(
    about = "Decoder for SMBIOS/DMI firmware tables.",
    long_about = None,
    after_help = EXAMPLES
)]
struct Cli {
    /// Log decoder diagnostics to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Operations on SMBIOS structure tables.
    Table {
        #[command(subcommand)]
        command: TableCommands,
    },
}

#[derive(Subcommand, Debug)]
enum TableCommands {
    /// Decode a table and generate a versioned JSON report.
    #[command(after_help = EXAMPLES)]
    Decode(DecodeArgs),
    /// Save a table into a portable dump file.
    Dump(DumpArgs),
}

/// Live table sources; sysfs is used when none is given.
#[derive(Args, Debug)]
struct LiveSourceArgs {
    /// Directory holding `smbios_entry_point` and `DMI`
    #[arg(long, value_name = "DIR")]
    sysfs: Option<PathBuf>,

    /// Physical memory image to scan (e.g. /dev/mem)
    #[arg(long, value_name = "FILE", conflicts_with = "sysfs")]
    mem: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct DecodeArgs {
    #[command(flatten)]
    live: LiveSourceArgs,

    /// Dump file written by `dmiscope table dump` (single-match globs accepted)
    #[arg(long, value_name = "FILE", conflicts_with_all = ["sysfs", "mem"])]
    dump: Option<PathBuf>,

    /// Output report path (JSON)
    #[arg(short = 'o', long, required_unless_present = "stdout")]
    report: Option<PathBuf>,

    /// Write JSON report to stdout
    #[arg(long, conflicts_with = "report")]
    stdout: bool,

    /// Pretty-print JSON output
    #[arg(long, conflicts_with = "compact")]
    pretty: bool,

    /// Compact JSON output (default)
    #[arg(long)]
    compact: bool,

    /// Only report structures of this type (repeatable)
    #[arg(long = "type", value_name = "N")]
    types: Vec<u8>,

    /// Suppress non-error output
    #[arg(long)]
    quiet: bool,

    /// Exit with a non-zero code if the walk did not reach end-of-table
    #[arg(long)]
    strict: bool,
}

#[derive(Args, Debug)]
struct DumpArgs {
    #[command(flatten)]
    live: LiveSourceArgs,

    /// Output dump path
    #[arg(short = 'o', long)]
    output: PathBuf,

    /// Store the re-encoded structures instead of the raw table bytes
    #[arg(long)]
    normalize: bool,

    /// Suppress non-error output
    #[arg(long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Table { command } => match command {
            TableCommands::Decode(args) => cmd_table_decode(args),
            TableCommands::Dump(args) => cmd_table_dump(args),
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(format!("{err:#}"), None)
    }
}

/// The table source picked from the command line, with the path it reads.
enum Input {
    Sysfs(SysfsSource),
    Memory(MemoryImageSource),
    DumpFile(DumpFileSource),
}

impl Input {
    fn live(args: &LiveSourceArgs) -> Self {
        match (&args.sysfs, &args.mem) {
            (_, Some(mem)) => Input::Memory(MemoryImageSource::new(mem)),
            (Some(dir), None) => Input::Sysfs(SysfsSource::new(dir)),
            (None, None) => Input::Sysfs(SysfsSource::default()),
        }
    }

    fn path(&self) -> &Path {
        match self {
            Input::Sysfs(source) => source.dir(),
            Input::Memory(source) => source.path(),
            Input::DumpFile(source) => source.path(),
        }
    }

    fn source(&mut self) -> &mut dyn TableSource {
        match self {
            Input::Sysfs(source) => source,
            Input::Memory(source) => source,
            Input::DumpFile(source) => source,
        }
    }

    fn acquire(&mut self) -> Result<RawTables, CliError> {
        let path = self.path().display().to_string();
        let hint = match self {
            Input::Sysfs(_) => "reading the kernel's SMBIOS export usually requires root; \
                                or decode a saved table with --dump FILE",
            Input::Memory(_) => "reading physical memory requires root and a kernel that \
                                 allows /dev/mem access",
            Input::DumpFile(_) => "pass a file written by `dmiscope table dump`",
        };
        self.source().acquire().map_err(|err| {
            let hint = match err {
                SourceError::Io { .. } => Some(hint.to_string()),
                _ => None,
            };
            CliError::new(format!("failed to read tables from {path}: {err}"), hint)
        })
    }

    /// Bytes consumed from the input, as recorded in the report.
    fn input_bytes(&self, raw: &RawTables) -> Result<u64> {
        match self {
            Input::DumpFile(source) => fs::metadata(source.path())
                .map(|meta| meta.len())
                .with_context(|| format!("Failed to stat dump: {}", source.path().display())),
            Input::Sysfs(_) | Input::Memory(_) => {
                Ok((raw.entry_point.len() + raw.table.len()) as u64)
            }
        }
    }
}

fn decode_tables(raw: &RawTables) -> Result<DecodeResult, CliError> {
    decode(&raw.entry_point, &raw.table).map_err(|err| {
        CliError::new(
            format!("SMBIOS entry point rejected: {err}"),
            Some("the input does not hold a valid _SM_ or _SM3_ entry point".to_string()),
        )
    })
}

fn cmd_table_decode(args: DecodeArgs) -> Result<(), CliError> {
    let mut input = match &args.dump {
        Some(dump) => {
            let resolved = resolve_input_path(dump)?;
            validate_input_file(&resolved)?;
            Input::DumpFile(DumpFileSource::new(resolved))
        }
        None => Input::live(&args.live),
    };

    let report = if args.stdout {
        None
    } else {
        Some(args.report.clone().ok_or_else(|| {
            CliError::new(
                "missing output path",
                Some("use -o/--report or --stdout".to_string()),
            )
        })?)
    };
    if let Some(report_path) = report.as_ref() {
        ensure_distinct_output(report_path, input.path())?;
    }

    let raw = input.acquire()?;
    let result = decode_tables(&raw)?;
    if !result.is_complete() {
        tracing::warn!(
            termination = result.termination.as_str(),
            structures = result.structures.len(),
            "structure table walk did not reach end-of-table"
        );
    }

    let mut rep = build_report(
        &result,
        &input.path().display().to_string(),
        input.input_bytes(&raw)?,
    );
    rep.generated_at = now_rfc3339()?;
    if !args.types.is_empty() {
        rep.structures
            .retain(|structure| args.types.contains(&structure.kind));
    }
    let json = serialize_report(&rep, args.pretty, args.compact)?;

    match report {
        None => print!("{}", json),
        Some(report) => {
            write_output(&report, json.as_bytes(), "report")?;
            if !args.quiet {
                eprintln!("OK: report written -> {}", report.display());
            }
        }
    }

    if args.strict && !rep.complete {
        return Err(CliError::new(
            format!(
                "structure table walk ended early ({})",
                rep.termination
            ),
            Some("inspect the report's termination field".to_string()),
        ));
    }
    Ok(())
}

fn cmd_table_dump(args: DumpArgs) -> Result<(), CliError> {
    let mut input = Input::live(&args.live);
    ensure_distinct_output(&args.output, input.path())?;

    let raw = input.acquire()?;
    let result = decode_tables(&raw)?;
    let dump = if args.normalize {
        Dump::from_decode(&result)
    } else {
        Dump::capture(&result, &raw.table)
    };
    tracing::debug!(
        structures = result.structures.len(),
        table_bytes = dump.table.len(),
        "writing dump"
    );

    write_output(&args.output, &write_dump(&dump), "dump")?;
    if !args.quiet {
        eprintln!(
            "OK: dump written -> {} ({} structures, SMBIOS {})",
            args.output.display(),
            result.structures.len(),
            dump.version()
        );
    }
    Ok(())
}

fn now_rfc3339() -> Result<String, CliError> {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .context("failed to format report timestamp")
        .map_err(Into::into)
}

fn write_output(path: &Path, bytes: &[u8], what: &str) -> Result<(), CliError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory: {}", parent.display())
            })?;
        }
    }
    fs::write(path, bytes).with_context(|| format!("Failed to write {what}: {}", path.display()))?;
    Ok(())
}

fn ensure_distinct_output(output: &Path, input: &Path) -> Result<(), CliError> {
    // Inputs that do not exist fail later with a clearer message.
    let Ok(input_abs) = fs::canonicalize(input) else {
        return Ok(());
    };
    let output_dir = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::canonicalize(parent),
        _ => fs::canonicalize("."),
    };
    let Ok(output_dir) = output_dir else {
        return Ok(());
    };
    let file_name = output
        .file_name()
        .ok_or_else(|| CliError::new(format!("invalid output path: {}", output.display()), None))?;
    if output_dir.join(file_name) == input_abs {
        return Err(CliError::new(
            format!("output path must differ from input: {}", output.display()),
            Some("choose a different output path".to_string()),
        ));
    }
    Ok(())
}

fn serialize_report(rep: &Report, pretty: bool, compact: bool) -> Result<String, CliError> {
    if pretty && compact {
        return Err(CliError::new(
            "cannot use --pretty and --compact together",
            Some("choose one output format".to_string()),
        ));
    }
    if pretty {
        serde_json::to_string_pretty(rep)
            .context("JSON serialization failed")
            .map_err(Into::into)
    } else {
        serde_json::to_string(rep)
            .context("JSON serialization failed")
            .map_err(Into::into)
    }
}

fn validate_input_file(input: &Path) -> Result<(), CliError> {
    if !input.exists() {
        return Err(CliError::new(
            format!("input file not found: {}", input.display()),
            Some("pass a file written by `dmiscope table dump`".to_string()),
        ));
    }
    if !input.is_file() {
        return Err(CliError::new(
            format!("input is not a file: {}", input.display()),
            Some("use --sysfs DIR to decode a directory of exported tables".to_string()),
        ));
    }
    Ok(())
}

fn resolve_input_path(input: &Path) -> Result<PathBuf, CliError> {
    let pattern = input.to_string_lossy();
    if !is_glob_pattern(&pattern) {
        return Ok(input.to_path_buf());
    }

    let mut matches = Vec::new();
    let paths = glob(&pattern).map_err(|err| {
        CliError::new(
            format!("invalid input pattern '{}'", pattern),
            Some(format!("pattern error: {}", err.msg)),
        )
    })?;
    for entry in paths {
        let path = entry.map_err(|err| {
            CliError::new(
                format!("invalid input pattern '{}'", pattern),
                Some(format!("pattern error: {}", err)),
            )
        })?;
        if path.is_file() {
            matches.push(path);
        }
    }

    if matches.is_empty() {
        return Err(CliError::new(
            format!("no files match pattern '{}'", pattern),
            Some("check the path or quote the pattern".to_string()),
        ));
    }
    if matches.len() > 1 {
        let listed = matches
            .iter()
            .take(3)
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        let more = if matches.len() > 3 { ", ..." } else { "" };
        return Err(CliError::new(
            format!(
                "multiple files match pattern '{}' ({} matches); matches: {}{}",
                pattern,
                matches.len(),
                listed,
                more
            ),
            Some("pass a single dump file, or run once per file".to_string()),
        ));
    }

    Ok(matches.remove(0))
}

fn is_glob_pattern(input: &str) -> bool {
    input.contains('*') || input.contains('?') || input.contains('[')
}
