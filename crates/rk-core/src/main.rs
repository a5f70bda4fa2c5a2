//! Resume Kit CLI - analysis session driving and result export.
//!
//! The `rk` binary takes analysis results (resume text, optimization
//! suggestions, interview questions) as text files and turns them into
//! export representations: Markdown, plain text, rasterized PDF, or a zip
//! bundle with a summary report and JSON snapshot.

use clap::{Args, Parser, Subcommand};
use rk_bundle::BundlePackager;
use rk_common::{
    format_error_human, format_file_size, guess_mime_type, Artifact, ArtifactKind, ArtifactSet,
    Error, ExportFormat, FileDescriptor, PdfEngine,
};
use rk_core::backend::{self, PlainTextBackend};
use rk_core::exit_codes::ExitCode;
use rk_core::export::export_artifact;
use rk_core::logging::{generate_run_id, init_logging, LogConfig, LogFormat, LogLevel};
use rk_core::session::{GenerateOptions, SessionState};
use rk_pdf::RasterPdfRenderer;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Resume Kit - resume analysis result exporter
#[derive(Parser)]
#[command(name = "rk")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    global: GlobalOpts,
}

/// Global options available to all commands
#[derive(Args, Debug)]
struct GlobalOpts {
    /// Minimum log level
    #[arg(long, global = true, env = "RK_LOG")]
    log_level: Option<LogLevel>,

    /// Log output format
    #[arg(long, global = true, env = "RK_LOG_FORMAT")]
    log_format: Option<LogFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate an upload against the type and size gates
    Check(CheckArgs),

    /// Run a full analysis session and print the summary report
    Analyze(AnalyzeArgs),

    /// Export one artifact as Markdown, text, or PDF
    Export(ExportArgs),

    /// Generate the summary report from artifact files
    Report(ReportArgs),

    /// Package all artifacts into a zip bundle
    Bundle(BundleArgs),

    /// Copy an artifact file's content to the clipboard
    Copy(CopyArgs),

    /// Print version information
    Version,
}

// ============================================================================
// Command argument structs
// ============================================================================

#[derive(Args, Debug)]
struct CheckArgs {
    /// File to validate
    file: PathBuf,

    /// Maximum allowed size in bytes
    #[arg(long, default_value_t = rk_common::DEFAULT_MAX_FILE_BYTES)]
    max_size: u64,
}

#[derive(Args, Debug)]
struct AnalyzeArgs {
    /// Resume file to analyze (the built-in backend handles .txt only)
    file: PathBuf,

    /// Also generate optimization suggestions
    #[arg(long)]
    optimize: bool,

    /// Also generate interview questions
    #[arg(long)]
    questions: bool,

    /// Write a zip bundle of all results
    #[arg(long)]
    bundle: bool,

    /// Output directory for the bundle
    #[arg(long, short = 'o', default_value = ".")]
    out_dir: PathBuf,
}

#[derive(Args, Debug)]
struct ExportArgs {
    /// Text file holding the artifact body
    input: PathBuf,

    /// Which artifact this is
    #[arg(long, value_enum, default_value = "resume-text")]
    kind: KindArg,

    /// Export format
    #[arg(long, short = 'f', value_enum, default_value_t = ExportFormat::Markdown)]
    format: ExportFormat,

    /// Output directory
    #[arg(long, short = 'o', default_value = ".")]
    out_dir: PathBuf,
}

#[derive(Args, Debug)]
struct ReportArgs {
    #[command(flatten)]
    artifacts: ArtifactFiles,
}

#[derive(Args, Debug)]
struct BundleArgs {
    #[command(flatten)]
    artifacts: ArtifactFiles,

    /// Output directory
    #[arg(long, short = 'o', default_value = ".")]
    out_dir: PathBuf,

    /// Skip the best-effort PDF entries
    #[arg(long)]
    no_pdf: bool,
}

#[derive(Args, Debug)]
struct CopyArgs {
    /// Text file to copy
    input: PathBuf,
}

/// Artifact inputs shared by `report` and `bundle`.
#[derive(Args, Debug)]
struct ArtifactFiles {
    /// Resume text file
    #[arg(long)]
    resume: PathBuf,

    /// Optimization suggestions file
    #[arg(long)]
    optimization: Option<PathBuf>,

    /// Interview questions file
    #[arg(long)]
    questions: Option<PathBuf>,

    /// Original upload the artifacts were derived from (for file metadata);
    /// defaults to the resume text file
    #[arg(long)]
    source: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum KindArg {
    ResumeText,
    Optimization,
    Questions,
}

impl From<KindArg> for ArtifactKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::ResumeText => ArtifactKind::ResumeText,
            KindArg::Optimization => ArtifactKind::Optimization,
            KindArg::Questions => ArtifactKind::Questions,
        }
    }
}

// ============================================================================
// Entry point
// ============================================================================

fn main() {
    let cli = Cli::parse();

    let log_config = LogConfig::from_env(cli.global.log_level, cli.global.log_format);
    init_logging(&log_config);

    // Every event in this invocation correlates through the same run_id.
    let run_id = generate_run_id();
    let run_span = tracing::info_span!("run", run_id = %run_id);
    let _run_guard = run_span.enter();
    debug!(%run_id, "rk invoked");

    let use_color = !cli.global.no_color && std::io::stderr().is_terminal();

    let code = match run(cli.command) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{}", format_error_human(&err, use_color));
            ExitCode::from(&err)
        }
    };

    std::process::exit(code.as_i32());
}

fn run(command: Commands) -> Result<ExitCode, Error> {
    match command {
        Commands::Check(args) => cmd_check(args),
        Commands::Analyze(args) => cmd_analyze(args),
        Commands::Export(args) => cmd_export(args),
        Commands::Report(args) => cmd_report(args),
        Commands::Bundle(args) => cmd_bundle(args),
        Commands::Copy(args) => cmd_copy(args),
        Commands::Version => {
            println!("rk {}", env!("CARGO_PKG_VERSION"));
            Ok(ExitCode::Clean)
        }
    }
}

// ============================================================================
// Command handlers
// ============================================================================

fn cmd_check(args: CheckArgs) -> Result<ExitCode, Error> {
    let file = backend::describe_file(&args.file)?;
    rk_common::validate_upload(
        &file.name,
        file.size_bytes,
        rk_common::DEFAULT_ALLOWED_EXTENSIONS,
        args.max_size,
    )?;

    println!(
        "{}: ok ({}, {})",
        file.name,
        format_file_size(file.size_bytes),
        file.mime_type
    );
    Ok(ExitCode::Clean)
}

fn cmd_analyze(args: AnalyzeArgs) -> Result<ExitCode, Error> {
    let options = GenerateOptions {
        optimization: args.optimize,
        questions: args.questions,
    };
    let session = backend::run_analysis(&PlainTextBackend, &args.file, options)?;

    if session.state() == SessionState::Failed {
        return Err(Error::AnalysisFailed(
            session.failure().unwrap_or("unknown failure").to_string(),
        ));
    }

    let file = session
        .file()
        .ok_or_else(|| Error::AnalysisFailed("session lost its file metadata".to_string()))?;
    let report = rk_report::generate_report(session.artifacts(), file, chrono::Utc::now());
    println!("{}", report);

    if args.bundle {
        write_bundle(session.artifacts(), file, &args.out_dir, false)?;
    }

    if session.skipped().is_empty() {
        Ok(ExitCode::Clean)
    } else {
        Ok(ExitCode::PartialExport)
    }
}

fn cmd_export(args: ExportArgs) -> Result<ExitCode, Error> {
    let body = std::fs::read_to_string(&args.input)?;
    let artifact = Artifact::new(args.kind.into(), body);

    let engine;
    let engine_ref: Option<&dyn PdfEngine> = if args.format == ExportFormat::Pdf {
        engine = RasterPdfRenderer::new().map_err(rk_common::Error::from)?;
        Some(&engine)
    } else {
        None
    };

    let path = export_artifact(&artifact, args.format, engine_ref, &args.out_dir)?;
    println!("{}", path.display());
    Ok(ExitCode::Clean)
}

fn cmd_report(args: ReportArgs) -> Result<ExitCode, Error> {
    let (set, file) = load_artifacts(&args.artifacts)?;
    let report = rk_report::generate_report(&set, &file, chrono::Utc::now());
    println!("{}", report);
    Ok(ExitCode::Clean)
}

fn cmd_bundle(args: BundleArgs) -> Result<ExitCode, Error> {
    let (set, file) = load_artifacts(&args.artifacts)?;
    let path = write_bundle(&set, &file, &args.out_dir, args.no_pdf)?;
    println!("{}", path.display());
    Ok(ExitCode::Clean)
}

fn cmd_copy(args: CopyArgs) -> Result<ExitCode, Error> {
    let text = std::fs::read_to_string(&args.input)?;
    if rk_core::clipboard::copy_to_clipboard(&text) {
        println!("copied {} characters", text.chars().count());
        Ok(ExitCode::Clean)
    } else {
        eprintln!("no clipboard tool available");
        Ok(ExitCode::ClipboardError)
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn load_artifacts(files: &ArtifactFiles) -> Result<(ArtifactSet, FileDescriptor), Error> {
    let mut set = ArtifactSet::default();

    let resume = std::fs::read_to_string(&files.resume)?;
    set.insert(Artifact::new(ArtifactKind::ResumeText, resume))?;

    if let Some(path) = &files.optimization {
        set.insert(Artifact::new(
            ArtifactKind::Optimization,
            std::fs::read_to_string(path)?,
        ))?;
    }
    if let Some(path) = &files.questions {
        set.insert(Artifact::new(
            ArtifactKind::Questions,
            std::fs::read_to_string(path)?,
        ))?;
    }

    let source = files.source.as_deref().unwrap_or(&files.resume);
    let file = describe_source(source)?;
    Ok((set, file))
}

/// Like [`backend::describe_file`] but tolerant of a missing source file:
/// artifacts may outlive the upload they came from.
fn describe_source(path: &Path) -> Result<FileDescriptor, Error> {
    if path.exists() {
        backend::describe_file(path)
    } else {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| Error::InvalidInput(format!("invalid file name: {}", path.display())))?;
        Ok(FileDescriptor::new(name, 0, guess_mime_type(name)))
    }
}

fn write_bundle(
    set: &ArtifactSet,
    file: &FileDescriptor,
    out_dir: &Path,
    no_pdf: bool,
) -> Result<PathBuf, Error> {
    // PDF entries are best-effort at the bundle level too: with no usable
    // font the bundle still ships md/txt and the snapshot.
    let engine = if no_pdf {
        None
    } else {
        match RasterPdfRenderer::new() {
            Ok(engine) => Some(engine),
            Err(err) => {
                warn!(%err, "PDF engine unavailable, bundling without PDF entries");
                None
            }
        }
    };

    let mut packager = BundlePackager::new();
    if let Some(engine) = &engine {
        packager = packager.with_engine(engine);
    }

    let path = out_dir.join(packager.file_name(file));
    packager.write(set, file, &path).map_err(Error::from)?;
    Ok(path)
}
