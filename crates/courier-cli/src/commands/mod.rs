use anyhow::Result;
use courier_core::Extractor;
use serde::Serialize;
use std::io::{self, Write};

pub mod extract;
pub mod orders;

pub struct Context {
    pub json: bool,
    pub extractor: Extractor,
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
