//! Interactive command-line front end.
//!
//! Reads search terms from stdin, one per line, and runs the full
//! pipeline for each. Logs go to stderr so report paths printed on
//! stdout stay clean. The literal line `exit` ends the session.

use std::io::{self, BufRead, Write};

use tracing_subscriber::EnvFilter;

use serplens::{run, LensConfig};

#[tokio::main]
async fn main() -> serplens::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = LensConfig::default();
    config.validate()?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("search term (or 'exit'): ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let term = line.trim();
        if term == "exit" {
            break;
        }
        if term.is_empty() {
            continue;
        }

        match run(term, &config).await {
            Ok(summary) => {
                println!(
                    "{}: {} competitors, {} reports",
                    summary.term,
                    summary.competitor_count,
                    summary.reports.len()
                );
                for path in &summary.reports {
                    println!("  {}", path.display());
                }
            }
            Err(e) => {
                tracing::error!(%term, error = %e, "run failed");
            }
        }
    }

    Ok(())
}
