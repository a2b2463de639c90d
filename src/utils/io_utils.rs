//! Reading command input and writing command output

use std::fs;
use std::io::{self, Read, Write};

use log::debug;

use crate::geojson::errors::GeoResult;

/// Path that stands for stdin or stdout
pub const STDIO_PATH: &str = "-";

/// Read all of `path`, or stdin when the path is `-`
pub fn read_input(path: &str) -> GeoResult<String> {
    if path == STDIO_PATH {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        debug!("Read {} bytes from stdin", buffer.len());
        return Ok(buffer);
    }

    let contents = fs::read_to_string(path)?;
    debug!("Read {} bytes from {}", contents.len(), path);
    Ok(contents)
}

/// Write `contents` to `path`, or stdout when no path (or `-`) is given
pub fn write_output(path: Option<&str>, contents: &str) -> GeoResult<()> {
    match path {
        Some(p) if p != STDIO_PATH => {
            fs::write(p, contents)?;
            debug!("Wrote {} bytes to {}", contents.len(), p);
        }
        _ => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(contents.as_bytes())?;
            handle.write_all(b"\n")?;
            handle.flush()?;
        }
    }
    Ok(())
}
