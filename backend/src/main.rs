//! DocuScan CLI - Extract text from PDF and image documents
//!
//! # Main Commands
//!
//! ```bash
//! docuscan serve                  # Start HTTP server (port 5000)
//! docuscan extract scan.pdf      # Extract text from a local file
//! ```

use clap::{Parser, Subcommand};
use docuscan::{process_file, ProcessOptions, VisionClient};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "docuscan")]
#[command(about = "Extract text from PDF and image documents", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract text from a local PDF/JPG/PNG file
    Extract {
        /// Input document
        input: PathBuf,

        /// Rasterisation DPI for PDF pages
        #[arg(long, default_value = "300")]
        dpi: f32,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Start HTTP server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "5000")]
        port: u16,
    },
}

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Extract { input, dpi, output } => {
            cmd_extract(&input, dpi, output.as_deref()).await
        }

        Commands::Serve { port } => cmd_serve(port).await,
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

async fn cmd_extract(
    input: &Path,
    dpi: f32,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("📄 Processing: {}", input.display());

    let client = VisionClient::from_env()?;
    let options = ProcessOptions { dpi };

    let outcome = process_file(&client, input, options).await?;

    eprintln!("   Pages:      {}", outcome.page_count);
    eprintln!("   Characters: {}", outcome.text.len());

    write_output(&outcome.text, output)?;

    eprintln!("\n✨ Done!");
    Ok(())
}

async fn cmd_serve(port: u16) -> Result<(), Box<dyn std::error::Error>> {
    docuscan::server::start_server(port).await
}

fn write_output(content: &str, path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            fs::write(p, content)?;
            eprintln!("💾 Output written to: {}", p.display());
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
