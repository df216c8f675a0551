use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use common::utils::logging::{self, LogFormat};
use configs::PropertyStore;
use dotenvy::dotenv;
use tracing::{info, warn};

const DEFAULT_CONFIG_PATH: &str = "config.properties";

/// Load `key=value` properties files and print the merged result.
#[derive(Parser, Debug, Clone)]
#[command(name = "propsctl", version)]
struct Args {
    /// Print only the value of KEY (empty if absent)
    #[arg(long, value_name = "KEY")]
    get: Option<String>,

    /// Files to load in order; later files overwrite earlier keys.
    /// Falls back to $CONFIG_PATH, then config.properties.
    #[arg(value_name = "FILE")]
    files: Vec<String>,
}

impl Args {
    fn config_files(&self) -> Vec<String> {
        if !self.files.is_empty() {
            return self.files.clone();
        }
        vec![std::env::var("CONFIG_PATH").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string())]
    }
}

fn init_logging() {
    // .env may carry RUST_LOG / LOG_FORMAT
    dotenv().ok();
    logging::init_logging(LogFormat::from_env());
}

fn run(args: &Args, out: &mut impl Write) -> anyhow::Result<()> {
    let files = args.config_files();
    let mut store = PropertyStore::new();
    let mut total = 0;
    for file in &files {
        let loaded = store.load_file(file);
        if loaded == 0 {
            warn!(path = %file, "no properties loaded");
        }
        total += loaded;
    }
    info!(files = files.len(), properties = total, distinct = store.len(), "load finished");

    match &args.get {
        Some(key) => writeln!(out, "{}", store.get_string(key, ""))?,
        None => writeln!(out, "{}", serde_json::to_string_pretty(&store)?)?,
    }
    Ok(())
}

fn main() -> ExitCode {
    init_logging();
    // clap exits with status 2 on usage errors
    let args = Args::parse();

    match run(&args, &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("propsctl: {e:#}");
            ExitCode::FAILURE
        }
    }
}
