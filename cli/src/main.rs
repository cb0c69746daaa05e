//! mdreflow CLI - reflow extracted text fragments into Markdown

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use log::debug;

use mdreflow::{
    load_document, render, HeightBaseline, JsonFormat, PageSelection, RenderOptions,
};

#[derive(Parser)]
#[command(name = "mdreflow")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Reflow extracted text fragments into Markdown", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a fragment dump to Markdown
    #[command(alias = "md")]
    Markdown {
        /// Input fragment dump (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Page range (e.g., "1-10", "1,3,5")
        #[arg(long)]
        pages: Option<String>,

        /// Flush trailing sidebar content instead of dropping it
        #[arg(long)]
        flush_sidebar: bool,
    },

    /// Convert a fragment dump to per-page JSON
    Json {
        /// Input fragment dump (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Page range (e.g., "1-10", "1,3,5")
        #[arg(long)]
        pages: Option<String>,

        /// Flush trailing sidebar content instead of dropping it
        #[arg(long)]
        flush_sidebar: bool,
    },

    /// Show fragment dump information
    Info {
        /// Input fragment dump (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Markdown {
            input,
            output,
            pages,
            flush_sidebar,
        } => cmd_markdown(&input, output.as_deref(), pages.as_deref(), flush_sidebar),
        Commands::Json {
            input,
            output,
            compact,
            pages,
            flush_sidebar,
        } => cmd_json(
            &input,
            output.as_deref(),
            compact,
            pages.as_deref(),
            flush_sidebar,
        ),
        Commands::Info { input } => cmd_info(&input),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn build_options(pages: Option<&str>, flush_sidebar: bool) -> mdreflow::Result<RenderOptions> {
    let page_selection = match pages {
        Some(p) => PageSelection::parse(p)?,
        None => PageSelection::All,
    };

    Ok(RenderOptions::new()
        .with_pages(page_selection)
        .with_flush_trailing_sidebar(flush_sidebar))
}

fn cmd_markdown(
    input: &Path,
    output: Option<&Path>,
    pages: Option<&str>,
    flush_sidebar: bool,
) -> mdreflow::Result<()> {
    let options = build_options(pages, flush_sidebar)?;
    let doc = load_document(input)?;
    debug!("loaded {} pages from {}", doc.page_count(), input.display());
    let markdown = render::to_markdown(&doc, &options)?;

    write_output(output, &markdown)
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    pages: Option<&str>,
    flush_sidebar: bool,
) -> mdreflow::Result<()> {
    let options = build_options(pages, flush_sidebar)?;
    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let doc = load_document(input)?;
    debug!("loaded {} pages from {}", doc.page_count(), input.display());
    let json = render::to_page_json(&doc, &options, format)?;

    write_output(output, &json)
}

fn cmd_info(input: &Path) -> mdreflow::Result<()> {
    let doc = load_document(input)?;
    let baseline = HeightBaseline::of_document(&doc);

    println!("{}", "Document".green().bold());
    println!("  Pages:     {}", doc.page_count());
    println!("  Fragments: {}", doc.fragment_count());

    println!("{}", "Height baseline".green().bold());
    if baseline.is_empty() {
        println!("  (no fragment carries glyph height)");
    } else {
        println!("  Mean:      {:.2}", baseline.mean);
        println!("  Std dev:   {:.2}", baseline.std_dev);
    }

    Ok(())
}

fn write_output(output: Option<&Path>, content: &str) -> mdreflow::Result<()> {
    match output {
        Some(path) => {
            fs::write(path, content)?;
            println!("{} {}", "Saved to".green(), path.display());
        }
        None => println!("{}", content),
    }
    Ok(())
}
