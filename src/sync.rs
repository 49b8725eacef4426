//! One-invocation pipeline from decoded records to the persisted file
//!
//! Everything runs synchronously on the calling thread: build the target
//! tree, read and parse the existing file, merge, print, write. Every
//! error aborts the whole run before anything is written.

use std::fs;
use std::io::ErrorKind;

use crate::error::Error;
use crate::merge;
use crate::parser;
use crate::paths::{write_atomic, ConfigDir};
use crate::printer;
use crate::records::{self, DongleConfig};

/// Builds the target tree from `config`, reconciles it with the dongle
/// file in `dir` and writes the result atomically.
///
/// A missing file is a first run: the target is written as-is. Any other
/// read failure, and any lexical or syntax error in the existing file,
/// aborts with nothing written.
pub fn sync_dongles(config: &DongleConfig, dir: &ConfigDir) -> Result<(), Error> {
    let target = records::to_ast(config);
    let path = dir.dongle_file();
    let merged = match fs::read_to_string(&path) {
        Ok(text) => merge::merge(&parser::parse(&text)?, &target),
        Err(err) if err.kind() == ErrorKind::NotFound => target,
        Err(err) => return Err(Error::from(err)),
    };
    write_atomic(&path, printer::print(&merged).as_bytes())?;
    Ok(())
}

/// Decodes a JSON record set and applies [`sync_dongles`].
pub fn sync_dongles_json(src: &str, dir: &ConfigDir) -> Result<(), Error> {
    let config = records::decode(src)?;
    sync_dongles(&config, dir)
}
