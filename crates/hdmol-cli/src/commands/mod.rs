pub mod analyze;
pub mod exp_n2;
pub mod scan;

use crate::error::Result;
use serde::Serialize;
use std::io::Write;

fn write_json<T: Serialize, W: Write>(value: &T, out: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
