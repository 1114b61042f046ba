use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use doctar_sitemap::cli::output::{OutputMode, Styled};
use doctar_sitemap::cli::{self, generate_cmd, print_cmd, static_cmd};
use doctar_sitemap::config::{ConfigOverrides, SitemapConfig};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "doctar-sitemap",
    version,
    about = "Generate sitemap XML for doctar.in",
    after_help = "Environment: FRONTEND_URL / VITE_FRONTEND_URL (base URL), \
                  SITEMAP_BLOGS_URL, SITEMAP_DOCTORS_URL, SITEMAP_FETCH_TIMEOUT_MS, RUST_LOG"
)]
struct Cli {
    #[arg(long, global = true, help = "Base URL for every <loc> (default https://doctar.in)")]
    base_url: Option<String>,
    #[arg(long, global = true, help = "Output directory (default public)")]
    out_dir: Option<PathBuf>,
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    json: bool,
    #[arg(long, short, global = true, help = "Only print errors")]
    quiet: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write sitemap.xml as an index plus one file per category (default)
    Generate {
        #[arg(long, help = "Write one complete sitemap.xml instead of an index")]
        single: bool,
    },
    /// Write one sitemap.xml from the built-in route tables, no network
    Static,
    /// Print the complete sitemap XML to stdout
    Print,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };

    let mode = OutputMode {
        json: cli.json,
        quiet: cli.quiet,
    };
    cli::init_tracing(mode);

    let config = SitemapConfig::resolve(ConfigOverrides {
        base_url: cli.base_url,
        out_dir: cli.out_dir,
    });
    info!("doctar-sitemap v{} for {}", env!("CARGO_PKG_VERSION"), config.base_url);

    let result = match cli.command.unwrap_or(Commands::Generate { single: false }) {
        Commands::Generate { single } => generate_cmd::run(&config, single, mode).await,
        Commands::Static => static_cmd::run(&config, mode),
        Commands::Print => print_cmd::run(&config).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("  {} {e:#}", Styled::new().fail_sym());
            ExitCode::FAILURE
        }
    }
}
