//! unsvg CLI - SVG to drawing instruction compiler

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use colored::Colorize;

use unsvg::render::{self, TagCounter};
use unsvg::{parse_file_with_options, Drawing, JsonFormat, PageBox, ParseOptions, RenderOptions};

#[derive(Parser)]
#[command(name = "unsvg")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Compile SVG markup into page drawing instructions", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the drawing as JSON
    Json {
        #[command(flatten)]
        common: CommonArgs,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Print the instruction tree as indented text
    Text {
        #[command(flatten)]
        common: CommonArgs,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Digits after the decimal point
        #[arg(long, default_value = "2")]
        precision: usize,

        /// Omit path data and text payloads
        #[arg(long)]
        no_data: bool,
    },

    /// Show canvas, instruction counts and warnings
    Info {
        #[command(flatten)]
        common: CommonArgs,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print collected style blocks
    Styles {
        #[command(flatten)]
        common: CommonArgs,
    },

    /// Show version information
    Version,
}

#[derive(Args)]
struct CommonArgs {
    /// Input SVG or SVGZ file
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Page box: "letter", "a4" or WIDTHxHEIGHT in points
    #[arg(long, default_value = "letter", env = "UNSVG_PAGE")]
    page: String,

    /// Maximum element nesting depth
    #[arg(long, value_name = "N")]
    max_depth: Option<usize>,

    /// Passthrough option (repeatable)
    #[arg(short = 'O', long = "option", value_name = "KEY=VALUE")]
    options: Vec<String>,
}

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Json {
            common,
            output,
            compact,
        } => cmd_json(&common, output.as_deref(), compact),
        Commands::Text {
            common,
            output,
            precision,
            no_data,
        } => cmd_text(&common, output.as_deref(), precision, no_data),
        Commands::Info { common, json } => cmd_info(&common, json),
        Commands::Styles { common } => cmd_styles(&common),
        Commands::Version => {
            cmd_version();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn parse_page(spec: &str) -> CliResult<PageBox> {
    match spec.to_ascii_lowercase().as_str() {
        "letter" => return Ok(PageBox::letter()),
        "a4" => return Ok(PageBox::a4()),
        _ => {}
    }

    let (width, height) = spec
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("Invalid page box '{}': expected WIDTHxHEIGHT", spec))?;
    let width: f64 = width
        .trim()
        .parse()
        .map_err(|_| format!("Invalid page width '{}'", width))?;
    let height: f64 = height
        .trim()
        .parse()
        .map_err(|_| format!("Invalid page height '{}'", height))?;
    Ok(PageBox::new(width, height)?)
}

fn build_options(common: &CommonArgs) -> CliResult<ParseOptions> {
    let mut options = ParseOptions::new();
    if let Some(depth) = common.max_depth {
        options = options.with_max_depth(depth);
    }
    for entry in &common.options {
        let (key, value) = entry
            .split_once('=')
            .ok_or_else(|| format!("Invalid option '{}': expected KEY=VALUE", entry))?;
        options = options.with_option(key.trim(), value.trim());
    }
    Ok(options)
}

fn load(common: &CommonArgs) -> CliResult<Drawing> {
    let page_box = parse_page(&common.page)?;
    let options = build_options(common)?;
    log::debug!(
        "Parsing {} on a {}x{}pt page",
        common.input.display(),
        page_box.width,
        page_box.height
    );
    let drawing = parse_file_with_options(&common.input, page_box, options)?;
    for warning in &drawing.warnings {
        log::info!("{}", warning);
    }
    Ok(drawing)
}

fn emit(output: Option<&Path>, content: &str) -> CliResult<()> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn cmd_json(common: &CommonArgs, output: Option<&Path>, compact: bool) -> CliResult<()> {
    let drawing = load(common)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = render::to_json(&drawing, format)?;
    emit(output, &json)
}

fn cmd_text(
    common: &CommonArgs,
    output: Option<&Path>,
    precision: usize,
    no_data: bool,
) -> CliResult<()> {
    let drawing = load(common)?;

    let options = RenderOptions::new()
        .with_precision(precision)
        .with_data(!no_data);
    let text = render::to_text(&drawing.root, &options);
    emit(output, text.trim_end())
}

fn cmd_info(common: &CommonArgs, as_json: bool) -> CliResult<()> {
    let drawing = load(common)?;

    let mut counter = TagCounter::without_root();
    render::walk(&drawing.root, &mut counter);

    if as_json {
        let summary = serde_json::json!({
            "file": common.input.display().to_string(),
            "canvas": drawing.canvas,
            "instructions": counter.total(),
            "tags": counter.counts(),
            "styles": drawing.styles.len(),
            "warnings": drawing.warnings,
        });
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("{}", "Drawing Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), common.input.display());
    println!(
        "{}: {} x {} pt",
        "Canvas".bold(),
        drawing.canvas.width,
        drawing.canvas.height
    );
    println!("{}: {}", "Style blocks".bold(), drawing.styles.len());

    println!();
    println!("{}", "Instructions".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    for (tag, count) in counter.counts() {
        println!("{}: {}", tag.bold(), count);
    }
    println!("{}: {}", "Total".bold(), counter.total());

    if drawing.has_warnings() {
        println!();
        println!(
            "{} ({})",
            "Warnings".yellow().bold(),
            drawing.warnings.len()
        );
        println!("{}", "─".repeat(40).dimmed());
        for warning in &drawing.warnings {
            println!("  {} {}", "!".yellow(), warning);
        }
    }

    Ok(())
}

fn cmd_styles(common: &CommonArgs) -> CliResult<()> {
    let drawing = load(common)?;

    if drawing.styles.is_empty() {
        println!("{}", "No style blocks".dimmed());
        return Ok(());
    }

    println!("{}", drawing.stylesheet_text());
    Ok(())
}

fn cmd_version() {
    println!("{} {}", "unsvg".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("SVG to drawing instruction compiler");
    println!();
    println!("Repository: {}", "https://github.com/iyulab/unsvg".dimmed());
    println!("License: MIT");
}
