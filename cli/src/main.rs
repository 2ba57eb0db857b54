//! Dropform CLI - upload a file and get a download link by email
//!
//! # Commands
//!
//! ```bash
//! dropform upload report.pdf --email a@b.com      # Upload to the default server
//! dropform upload report.pdf -e a@b.com -s URL    # Upload to another server
//! dropform endpoint                               # Show the resolved upload URL
//! ```
//!
//! The server URL comes from `--server`, else `DROPFORM_SERVER_URL` (also
//! read from `.env`), else `http://localhost:3000`.

use clap::{Parser, Subcommand};
use dropform::{config, session, LocalFile, Uploader};
use dropform_core::{Alert, FormEvent, FormState};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "dropform")]
#[command(about = "Upload a file and receive a download link by email", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload a file to the storage service
    Upload {
        /// File to upload
        file: Option<PathBuf>,

        /// Address that receives the download link
        #[arg(short, long)]
        email: Option<String>,

        /// Server base URL
        #[arg(short, long)]
        server: Option<String>,
    },

    /// Print the upload endpoint that would be used
    Endpoint {
        /// Server base URL
        #[arg(short, long)]
        server: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Upload {
            file,
            email,
            server,
        } => cmd_upload(file.as_deref(), email.unwrap_or_default(), server).await,

        Commands::Endpoint { server } => cmd_endpoint(server),
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

async fn cmd_upload(
    file: Option<&Path>,
    email: String,
    server: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut form = FormState::new(config::resolve(server));

    let selected = file.map(LocalFile::open).transpose()?;
    if let Some(ref f) = selected {
        eprintln!("📄 {} ({} bytes)", f.name(), f.size());
    }
    form.apply(FormEvent::FileSelected(selected));
    form.apply(FormEvent::EmailChanged(email));

    let uploader = Uploader::new()?;
    let bar = progress_bar();

    let alert = session::submit(&mut form, &uploader, |progress| {
        bar.set_position(u64::from(progress.percent));
    })
    .await;

    bar.finish_and_clear();

    match alert {
        Some(ref alert) => print_alert(alert),
        None => log::warn!("Submission ended without feedback"),
    }

    let code = exit_code(alert.as_ref());
    if code != 0 {
        std::process::exit(code);
    }

    Ok(())
}

fn cmd_endpoint(server: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", endpoint_url(server));
    Ok(())
}

/// Process exit status for the alert a submission ended with.
fn exit_code(alert: Option<&Alert>) -> i32 {
    match alert {
        Some(alert) if alert.is_destructive() => 1,
        _ => 0,
    }
}

fn endpoint_url(server: Option<String>) -> String {
    config::resolve(server).upload_url()
}

fn progress_bar() -> ProgressBar {
    let bar = ProgressBar::new(100);
    if let Ok(style) =
        ProgressStyle::with_template("{spinner:.green} Uploading [{bar:40.cyan/blue}] {pos}%")
    {
        bar.set_style(style.progress_chars("#>-"));
    }
    bar
}

fn print_alert(alert: &Alert) {
    let icon = if alert.is_destructive() { "❌" } else { "✅" };
    eprintln!("{} {} {}", icon, alert.title, alert.message);
}
