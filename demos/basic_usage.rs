//! Basic sink usage example
//!
//! Binds options from a configuration document, overrides one of them in
//! code, and logs from several threads through one console writer.
//!
//! Run with: cargo run --example basic_usage

use console_sink::prelude::*;
use console_sink::{info, warning};
use std::sync::Arc;
use std::thread;

const CONFIGURATION: &str = r#"{
    "Logging": {
        "ConsoleLogger": {
            "LogMinLevel": "Debug",
            "UseUtcTimestamp": "false",
            "MultilineFormat": "false",
            "IndentMultilineMessages": "true",
            "EnableConsoleColors": "true",
            "LogLevelColors": {
                "Information": "Green",
                "Warning": "DarkYellow"
            }
        }
    }
}"#;

fn main() -> Result<()> {
    let document = serde_json::from_str(CONFIGURATION)?;
    let options = SinkOptions::from_configuration(&document, |options| {
        options.min_level = LogLevel::Trace;
    });

    let sink = Arc::new(ConsoleSink::new(options)?);
    let app = sink.get_logger("Demo.App")?;

    app.trace("This is a trace message");
    app.debug("This is a debug message");
    app.info("This is an info message");
    app.warning("This is a warning message");
    app.error("This is an error message");
    app.critical("This is a critical message");
    app.info("Multi-line messages\nline up under\nthe header");

    let workers: Vec<_> = (0..3)
        .map(|id| {
            let sink = Arc::clone(&sink);
            thread::spawn(move || -> Result<()> {
                let logger = sink.get_logger(&format!("Demo.Worker{}", id))?;
                for step in 0..3 {
                    info!(logger, "worker {} step {}", id, step);
                }
                Ok(())
            })
        })
        .collect();

    for worker in workers {
        if let Ok(Err(e)) = worker.join() {
            warning!(app, "worker failed: {}", e);
        }
    }

    sink.shutdown();
    Ok(())
}
