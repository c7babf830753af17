//! CLI entry point for canopy.

use std::path::{Path, PathBuf};
use std::process;

use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use canopy::tree::{DEFAULT_EXCLUDES, DEFAULT_MAX_DEPTH, TraversalPolicy, TreeWalker};
use canopy::{DirectoryEntry, ToolError, output, server, tools};

#[derive(Parser, Debug)]
#[command(name = "canopy")]
#[command(about = "Workspace tools for IDE assistants: directory trees, diagrams, shell, and registry lookups over stdio")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Subcommand, Debug)]
enum CliCommand {
    /// Serve tools over stdio (line-delimited JSON-RPC)
    Serve,
    /// Render a directory as an ASCII tree
    Tree(RenderArgs),
    /// Render a directory as a Mermaid flowchart
    Diagram(RenderArgs),
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Directory to walk
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Descend only N levels below the root
    #[arg(long = "max-depth", value_name = "N", default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Exclude entries whose name contains PATTERN (can be used multiple
    /// times; replaces the default set)
    #[arg(long = "exclude", value_name = "PATTERN")]
    exclude: Vec<String>,

    /// Write to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

fn main() {
    // Logs go to stderr: stdout belongs to rendered output and, under
    // `serve`, to the protocol.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("canopy: {err}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        CliCommand::Serve => {
            info!("canopy {} starting", env!("CARGO_PKG_VERSION"));
            server::run()?;
        }
        CliCommand::Tree(args) => {
            let (root, entries) = walk(&args)?;
            let document = output::text::render_document(&output::root_label(&root), &entries);
            emit(&document, args.output.as_deref(), &entries)?;
        }
        CliCommand::Diagram(args) => {
            let (root, entries) = walk(&args)?;
            let document = output::mermaid::render_document(&output::root_label(&root), &entries);
            let target = args
                .output
                .as_deref()
                .map(tools::diagram::markdown_output_path);
            emit(&document, target.as_deref(), &entries)?;
        }
    }
    Ok(())
}

fn walk(args: &RenderArgs) -> Result<(PathBuf, Vec<DirectoryEntry>), ToolError> {
    let root = tools::resolve_root(Some(&args.path))?;
    let exclude_patterns = if args.exclude.is_empty() {
        DEFAULT_EXCLUDES.iter().map(|s| (*s).to_string()).collect()
    } else {
        args.exclude.clone()
    };
    let policy = TraversalPolicy {
        max_depth: args.max_depth,
        exclude_patterns,
    };
    let entries = TreeWalker::new(policy).walk(&root)?;
    Ok((root, entries))
}

fn emit(document: &str, target: Option<&Path>, entries: &[DirectoryEntry]) -> Result<(), ToolError> {
    match target {
        Some(path) => {
            let written = tools::write_document(path, document)?;
            let (dirs, files) = output::count_kinds(entries);
            println!(
                "wrote {} ({dirs} directories, {files} files)",
                written.display()
            );
        }
        None => print!("{document}"),
    }
    Ok(())
}
