use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use mdsite::Config;

#[derive(Parser)]
#[command(name = "mdsite", version)]
#[command(about = "Build a static HTML site from Markdown files")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Copy static assets and render every Markdown page.
    Build(BuildArgs),
    /// Convert a single Markdown file to an HTML fragment.
    Render(RenderArgs),
}

#[derive(Args)]
struct BuildArgs {
    /// Prefix for root-relative links (overrides --base-path)
    #[arg(value_name = "BASE_PATH")]
    base_path_arg: Option<String>,

    /// Config file; relative paths inside it resolve against its directory
    #[arg(short, long, default_value = "mdsite.toml")]
    config: PathBuf,

    #[arg(long)]
    content: Option<PathBuf>,

    #[arg(long = "static")]
    static_dir: Option<PathBuf>,

    #[arg(long)]
    template: Option<PathBuf>,

    #[arg(short, long)]
    output: Option<PathBuf>,

    #[arg(long)]
    base_path: Option<String>,

    /// Log every copied file and generated page
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Args)]
struct RenderArgs {
    /// Input Markdown file
    input: PathBuf,

    /// Output HTML file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    let verbose = matches!(&cli.command, Commands::Build(args) if args.verbose);
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    // stdout carries rendered HTML; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Build(args) => build(args),
        Commands::Render(args) => render(&args.input, args.output.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn build(args: BuildArgs) -> Result<(), Box<dyn std::error::Error>> {
    let root = args.config.parent().unwrap_or(Path::new(""));
    let mut config = Config::load(&args.config)?.resolve_paths(root);

    if let Some(content) = args.content {
        config.content_dir = content;
    }
    if let Some(static_dir) = args.static_dir {
        config.static_dir = static_dir;
    }
    if let Some(template) = args.template {
        config.template = template;
    }
    if let Some(output) = args.output {
        config.output_dir = output;
    }
    if let Some(base_path) = args.base_path_arg.or(args.base_path) {
        config.base_path = base_path;
    }

    let summary = mdsite::site::build_site(&config)?;
    println!(
        "Built {} pages and copied {} files into {}",
        summary.pages_generated,
        summary.files_copied,
        config.output_dir.display()
    );
    Ok(())
}

fn render(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let markdown = fs::read_to_string(input)
        .map_err(|e| format!("reading {}: {}", input.display(), e))?;
    let html = mdsite::markdown_to_html(&markdown)?;

    match output {
        Some(path) => {
            fs::write(path, html).map_err(|e| format!("writing {}: {}", path.display(), e))?;
            println!("Created {}", path.display());
        }
        None => println!("{html}"),
    }
    Ok(())
}
