//! Session command implementation

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use challenger::engine::today;
use challenger::session::Session;

use super::load_engine;

/// Run a session from a script file or stdin
pub fn session_command(config_path: Option<&Path>, script: Option<&Path>) -> Result<()> {
    let engine = load_engine(config_path)?;
    let mut session = Session::new(engine, today());
    let mut stdout = io::stdout().lock();

    match script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open script: {}", path.display()))?;
            session.run(BufReader::new(file), &mut stdout)
        }
        None => {
            eprintln!("Challenger session for {} (type 'help')", session.day());
            session.run(io::stdin().lock(), &mut stdout)
        }
    }
}
