//! safemark CLI: Safe markdown rendering and collapsible text previews

use clap::{Parser, Subcommand, ValueEnum};
use safemark_engine::{render_with, Config, MarkdownInput, TextPreview};
use safemark_tui::{run_tui, ViewerApp};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Render a safe subset of markdown and preview long text
#[derive(Parser)]
#[command(name = "safemark")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a JSON config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render markdown to plain text, HTML, or a JSON node tree
    Render {
        /// Input file (`-` for stdin)
        file: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Plain)]
        format: Format,

        /// Treat the input as a JSON value instead of markdown text
        #[arg(long)]
        json_input: bool,
    },

    /// Print a collapsed (or expanded) text preview
    Preview {
        /// Input file (`-` for stdin)
        file: PathBuf,

        /// Lines shown while collapsed (overrides config)
        #[arg(long, allow_negative_numbers = true)]
        lines: Option<i64>,

        /// Print the expanded view
        #[arg(long)]
        expanded: bool,
    },

    /// Open rendered markdown in the interactive viewer
    View {
        /// Input file (`-` for stdin)
        file: PathBuf,
    },

    /// Open a collapsible text preview in the interactive viewer
    Peek {
        /// Input file (`-` for stdin)
        file: PathBuf,

        /// Lines shown while collapsed (overrides config)
        #[arg(long, allow_negative_numbers = true)]
        lines: Option<i64>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Plain,
    Html,
    Json,
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path).unwrap_or_else(|e| fail(&format!("{}: {e}", path.display()))),
        None => Config::default(),
    };

    match cli.command {
        Commands::Render {
            file,
            format,
            json_input,
        } => cmd_render(&config, &file, format, json_input),
        Commands::Preview {
            file,
            lines,
            expanded,
        } => cmd_preview(&config, &file, lines, expanded),
        Commands::View { file } => cmd_view(&config, &file),
        Commands::Peek { file, lines } => cmd_peek(&config, &file, lines),
    }
}

/// Log to stderr, filtered by `RUST_LOG` (default `warn`).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn fail(message: &str) -> ! {
    eprintln!("Error: {message}");
    std::process::exit(1);
}

/// Read a file, or stdin when the path is `-`.
fn read_input(path: &Path) -> String {
    let result = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf).map(|_| buf)
    } else {
        std::fs::read_to_string(path)
    };
    result.unwrap_or_else(|e| fail(&format!("{}: {e}", path.display())))
}

fn title_for(path: &Path) -> String {
    if path == Path::new("-") {
        "stdin".into()
    } else {
        path.display().to_string()
    }
}

fn build_preview(config: &Config, text: String, lines: Option<i64>) -> TextPreview {
    let mut preview_config = config.preview.clone();
    if let Some(lines) = lines {
        preview_config.line_limit = lines;
    }
    TextPreview::from_config(text, &preview_config).unwrap_or_else(|e| fail(&e.to_string()))
}

fn cmd_render(config: &Config, file: &Path, format: Format, json_input: bool) {
    let raw = read_input(file);
    let input = if json_input {
        let value: serde_json::Value =
            serde_json::from_str(&raw).unwrap_or_else(|e| fail(&format!("invalid JSON input: {e}")));
        MarkdownInput::from(value)
    } else {
        MarkdownInput::from(raw)
    };

    let document = render_with(input, &config.markdown);
    tracing::debug!(nodes = document.nodes.len(), "rendered document");

    match format {
        Format::Plain => println!("{}", document.plain_text()),
        Format::Html => print!("{}", document.to_html()),
        Format::Json => {
            let json = serde_json::to_string_pretty(&document)
                .unwrap_or_else(|e| fail(&format!("failed to serialize document: {e}")));
            println!("{json}");
        }
    }
}

fn cmd_preview(config: &Config, file: &Path, lines: Option<i64>, expanded: bool) {
    let mut preview = build_preview(config, read_input(file), lines);
    if expanded {
        preview.expand();
    }

    println!("{}", preview.visible_text());
    if let Some(label) = preview.control_label() {
        println!("[{label}]");
    }
}

fn cmd_view(config: &Config, file: &Path) {
    let document = render_with(read_input(file), &config.markdown);
    let app = ViewerApp::markdown(title_for(file), document);
    if let Err(e) = run_tui(app) {
        fail(&e.to_string());
    }
}

fn cmd_peek(config: &Config, file: &Path, lines: Option<i64>) {
    let preview = build_preview(config, read_input(file), lines);
    let app = ViewerApp::preview(title_for(file), preview);
    if let Err(e) = run_tui(app) {
        fail(&e.to_string());
    }
}
