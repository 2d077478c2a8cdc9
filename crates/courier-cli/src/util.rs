use crate::error::{invalid_input, not_found};
use anyhow::{Context as _, Result};
use chrono::Utc;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

pub fn now_utc() -> i64 {
    Utc::now().timestamp()
}

/// Reads pasted text from `path`, or from stdin when it is absent or `-`.
/// Whitespace-only input is rejected.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    let data = match path {
        Some(path) if path != Path::new("-") => {
            if !path.exists() {
                return Err(not_found(format!("input file {}", path.display())));
            }
            fs::read_to_string(path)
                .with_context(|| format!("read input file {}", path.display()))?
        }
        _ => {
            let mut buf = String::new();
            io::stdin()
                .lock()
                .read_to_string(&mut buf)
                .with_context(|| "read stdin")?;
            buf
        }
    };

    if data.trim().is_empty() {
        return Err(invalid_input("paste some customer data first"));
    }
    Ok(data)
}
