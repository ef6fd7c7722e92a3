// ABOUTME: Main entry point for the slidemark program.
// ABOUTME: Provides CLI interface and executes commands from the library.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the slides of a markdown file as JSON
    Slides(SlidesArgs),

    /// Generate a deck page from markdown
    Html(HtmlArgs),

    /// Render every presentation of a project
    Build(BuildArgs),
}

#[derive(Args)]
struct SlidesArgs {
    /// Path to the markdown file
    #[arg(short, long)]
    input: PathBuf,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum ResourceMode {
    /// Inline local CSS/JS into the page
    Embed,
    /// Reference CSS/JS by path
    Link,
}

#[derive(Args)]
struct HtmlArgs {
    /// Path to the markdown file
    #[arg(short, long)]
    input: PathBuf,

    /// Path to output HTML file
    #[arg(short, long)]
    output: PathBuf,

    /// CSS files to include (local paths or URLs)
    #[arg(long, value_delimiter = ',')]
    css: Option<Vec<String>>,

    /// JavaScript files to include (local paths or URLs)
    #[arg(long, value_delimiter = ',')]
    js: Option<Vec<String>>,

    /// Whether local CSS/JS is embedded or linked
    #[arg(long, value_enum)]
    mode: Option<ResourceMode>,

    /// Theme used when the document does not declare one
    #[arg(long)]
    theme: Option<String>,
}

#[derive(Args)]
struct BuildArgs {
    /// Path to the project configuration
    #[arg(short, long, default_value = slidemark::config::PROJECT_CONFIG_FILE)]
    config: PathBuf,

    /// Output directory, overriding the project configuration
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let cli = Cli::parse();
    let app_config = slidemark::Config::from_env();

    let result = match &cli.command {
        Some(Commands::Slides(args)) => print_slides(args),
        Some(Commands::Html(args)) => {
            println!("Executing html command...");
            generate_page(args, &app_config)
        }
        Some(Commands::Build(args)) => {
            println!("Executing build command...");
            build_project(args, &app_config)
        }
        None => {
            println!("No command specified. Use --help for usage information.");
            Ok(())
        }
    };

    match result {
        Ok(()) => Ok(()),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn print_slides(args: &SlidesArgs) -> anyhow::Result<()> {
    slidemark::utils::validate_file_exists(&args.input)?;
    let markdown = fs::read_to_string(&args.input)?;
    let presentation = slidemark::parse_presentation(&markdown)?;

    let json = if args.pretty {
        serde_json::to_string_pretty(&presentation)?
    } else {
        serde_json::to_string(&presentation)?
    };
    println!("{}", json);
    Ok(())
}

fn generate_page(args: &HtmlArgs, app_config: &slidemark::Config) -> anyhow::Result<()> {
    let stylesheets: Vec<slidemark::ResourceFile> = args
        .css
        .iter()
        .flatten()
        .map(|path| slidemark::ResourceFile::stylesheet(path))
        .collect();
    let scripts: Vec<slidemark::ResourceFile> = args
        .js
        .iter()
        .flatten()
        .map(|path| slidemark::ResourceFile::script(path))
        .collect();
    let embed = args.mode.map(|mode| matches!(mode, ResourceMode::Embed));

    let mut options = app_config.get_html_options(stylesheets, scripts, embed);
    if args.theme.is_some() {
        options.default_theme = args.theme.clone();
    }

    let html_content = slidemark::generate_html(&args.input, &options)?;
    slidemark::write_html_to_file(&html_content, &args.output)?;

    println!("HTML generated successfully: {:?}", args.output);
    Ok(())
}

fn build_project(args: &BuildArgs, app_config: &slidemark::Config) -> anyhow::Result<()> {
    let project = slidemark::ProjectConfig::load(&args.config)?;
    let root = args
        .config
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));

    let mut build_config = slidemark::BuildConfig::from_project(&project, root, app_config);
    if let Some(output) = &args.output {
        build_config.output_dir = output.clone();
    }

    let written = slidemark::build_presentations(&build_config)?;
    println!(
        "Built {} presentations into {:?}",
        written.len(),
        build_config.output_dir
    );
    Ok(())
}
