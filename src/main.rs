use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "mns-site", version, about = "Build the MNS Corrosions Solutions site")]
struct Cli {
    /// Configuration file (defaults to ./site.toml when present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write index.html and the reveal manifest.
    Build {
        #[arg(long)]
        out: Option<PathBuf>,
        #[arg(long)]
        no_motion: bool,
    },
    /// Render the page after scrolling and letting time pass.
    Snapshot {
        #[arg(long, default_value_t = 0.0)]
        scroll: f32,
        #[arg(long, default_value_t = 0.0)]
        elapsed: f32,
        #[arg(long)]
        no_motion: bool,
        /// Output file; stdout when omitted.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Scroll the whole page and report how many elements were revealed.
    ScrollThrough {
        #[arg(long)]
        step: Option<f32>,
        #[arg(long)]
        json: bool,
    },
}

fn init_logging(filter: &str) {
    let env = env_logger::Env::default().default_filter_or(filter);
    let _ = env_logger::Builder::from_env(env).try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = mns_site::load_config(cli.config.as_deref())?;
    init_logging(&config.logging.filter);

    match cli.command {
        Command::Build { out, no_motion } => {
            if no_motion {
                config.motion.enabled = false;
            }
            let out_dir = out.unwrap_or_else(|| config.output.dir.clone());
            let summary = mns_site::build_site(&config, &out_dir)?;
            println!("wrote {}", summary.index.display());
            if let Some(manifest) = summary.manifest {
                println!(
                    "wrote {} ({} batches, {} members)",
                    manifest.display(),
                    summary.batches,
                    summary.members
                );
            }
        }
        Command::Snapshot {
            scroll,
            elapsed,
            no_motion,
            out,
        } => {
            if no_motion {
                config.motion.enabled = false;
            }
            let html = mns_site::snapshot(&config, scroll, elapsed)?;
            match out {
                Some(path) => {
                    fs::write(&path, html).with_context(|| format!("Failed to write {}", path.display()))?;
                    info!("snapshot written to {}", path.display());
                }
                None => print!("{html}"),
            }
        }
        Command::ScrollThrough { step, json } => {
            if let Some(step) = step {
                config.motion.scroll_step = step;
            }
            let report = mns_site::scroll_through(&config)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!(
                    "{} of {} revealable elements visible after {} frames (document {}px)",
                    report.visible, report.bound, report.frames, report.document_height
                );
            }
            if !report.all_visible() {
                warn!("{} elements never became visible", report.bound - report.visible);
            }
        }
    }

    Ok(())
}
