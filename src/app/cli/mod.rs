//! CLI Adapter.

mod html;
mod input;
mod slides;

use std::path::PathBuf;

use crate::domain::{AppError, RenderedDocument, SectionPrompt};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "fivec")]
#[command(version)]
#[command(about = "Draft a 5C analysis for a brand as HTML or Google Slides", long_about = None)]
struct Cli {
    /// Path to a fivec.toml configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the analysis as a static HTML presentation
    #[clap(visible_alias = "h")]
    Html {
        #[command(flatten)]
        brand: BrandArgs,
        /// Directory to write the HTML file into
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,
        /// Also print the HTML to stdout
        #[arg(long)]
        stdout: bool,
        /// Print the section prompts without calling any service
        #[arg(long)]
        prompt_preview: bool,
    },
    /// Publish the analysis as a shared Google Slides deck
    #[clap(visible_alias = "s")]
    Slides {
        #[command(flatten)]
        brand: BrandArgs,
        /// Email address to share the deck with
        #[arg(short, long)]
        email: Option<String>,
        /// Print the section prompts without calling any service
        #[arg(long)]
        prompt_preview: bool,
    },
}

#[derive(clap::Args)]
pub struct BrandArgs {
    /// Brand name
    #[arg(short, long)]
    pub brand: Option<String>,
    /// Short description of the brand
    #[arg(short, long)]
    pub description: Option<String>,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    let config = cli.config;

    let result: Result<(), AppError> = match cli.command {
        Commands::Html { brand, output_dir, stdout, prompt_preview } => html::run_html(
            html::HtmlArgs { brand, output_dir, stdout, prompt_preview },
            config.as_deref(),
        ),
        Commands::Slides { brand, email, prompt_preview } => {
            slides::run_slides(slides::SlidesArgs { brand, email, prompt_preview }, config.as_deref())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Print where a finished document lives.
///
/// With `echo_html`, the page itself goes to stdout and the location line to stderr.
fn report_document(document: &RenderedDocument, echo_html: bool) {
    match document {
        RenderedDocument::Html { path, html } => {
            if echo_html {
                println!("{}", html);
                eprintln!("✅ Wrote 5C analysis to {}", path.display());
            } else {
                println!("✅ Wrote 5C analysis to {}", path.display());
            }
        }
        RenderedDocument::Slides(deck) => {
            println!("✅ Presentation ready: {}", deck.edit_url());
            println!("Shared with:");
            for email in &deck.shared_with {
                println!("  • {}", email);
            }
        }
    }
}

fn print_prompts(prompts: &[SectionPrompt]) {
    for SectionPrompt { label, prompt } in prompts {
        println!("=== {} ===", label);
        println!("{}", prompt);
        println!();
    }
}
