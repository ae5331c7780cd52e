use std::env;
use std::process;
use std::time::Duration;

use log::error;

use recipe_ingest::view;
use recipe_ingest::{AppConfig, IngestReport, RecipeIngester, SqliteStore};

const USAGE: &str = "Usage: recipe-ingest <url>          ingest recipes from a web page
       recipe-ingest --file <path>  ingest recipes from a text file
       recipe-ingest --text <text>  ingest recipes from pasted text
       recipe-ingest --list         show stored recipes";

#[tokio::main]
async fn main() {
    env_logger::init();

    if let Err(err) = run().await {
        error!("{err}");
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    let config = AppConfig::load()?;
    let mut store = SqliteStore::open(&config.store.database)?;

    match args.get(1).map(String::as_str) {
        Some("--list") => {
            print!("{}", view::render_all(&store)?);
        }
        Some("--file") => {
            let path = args.get(2).ok_or(USAGE)?;
            let bytes = tokio::fs::read(path).await?;
            let report = RecipeIngester::builder()
                .file_bytes(bytes)
                .run(&mut store)
                .await?;
            print_report(&report);
        }
        Some("--text") => {
            let text = args.get(2).ok_or(USAGE)?;
            let report = RecipeIngester::builder()
                .text(text.as_str())
                .run(&mut store)
                .await?;
            print_report(&report);
        }
        Some(url) if url.starts_with("http") => {
            let report = RecipeIngester::builder()
                .url(url)
                .timeout(Duration::from_secs(config.http.timeout_secs))
                .user_agent(config.http.user_agent.as_str())
                .run(&mut store)
                .await?;
            print_report(&report);
        }
        _ => {
            eprintln!("{USAGE}");
            process::exit(2);
        }
    }

    Ok(())
}

fn print_report(report: &IngestReport) {
    println!(
        "Stored {} recipe(s), skipped {} block(s)",
        report.stored, report.skipped_blocks
    );
    if report.store_failures > 0 {
        eprintln!("Warning: {} recipe(s) failed to persist", report.store_failures);
    }
}
