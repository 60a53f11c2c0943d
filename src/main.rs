//! ferrobook CLI - Markdown book chapters to static HTML

use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ferrobook")]
#[command(version, about = "Build a static HTML book from Markdown chapters", long_about = None)]
#[command(after_help = "EXAMPLES:
    ferrobook init mybook                 Create a new project
    ferrobook build                       Build the project in the current directory
    ferrobook build --output /tmp/site    Build into another directory
    ferrobook render chapter.md           Print one chapter as an HTML fragment")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable verbose output (INFO level logs)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Create a new book project
    Init {
        /// Project directory to create
        #[arg(value_name = "NAME")]
        name: PathBuf,
    },
    /// Build the book
    Build(BuildArgs),
    /// Render a single Markdown file (or stdin) to an HTML fragment
    Render {
        /// Markdown file; `-` or omitted reads stdin
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,
    },
}

/// CLI error type.
#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{0}")]
    Book(#[from] ferrobook::BookError),

    #[error("{0}")]
    Io(#[from] io::Error),
}

#[derive(Args)]
struct BuildArgs {
    /// Output directory (overrides `output_dir` in book.yaml)
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,

    /// Project root containing book.yaml
    #[arg(long, value_name = "DIR", default_value = ".")]
    root: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let result = match cli.command {
        Command::Init { name } => init(&name),
        Command::Build(args) => build(&args),
        Command::Render { input } => render(input),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init(name: &Path) -> Result<(), CliError> {
    ferrobook::init_project(name)?;
    println!("Created book project: {}", name.display());
    println!("Run: cd {} && ferrobook build", name.display());
    Ok(())
}

fn build(args: &BuildArgs) -> Result<(), CliError> {
    let report = ferrobook::build_book(&args.root, args.output.as_deref())?;
    println!(
        "Built {} pages into {}",
        report.pages.len(),
        report.output_dir.display()
    );
    Ok(())
}

fn render(input: Option<PathBuf>) -> Result<(), CliError> {
    let markdown = match input {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)?,
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let html = ferrobook::to_html(&markdown);
    io::stdout().write_all(html.as_bytes())?;
    Ok(())
}
