//! Command-line interface for fconf
//!
//! Usage:
//!   fconf dongles `<input>`                   - Configure dongle trunks from a JSON file
//!   fconf dongles stdin                     - Read the JSON record set from standard input
//!   fconf dongles --config-dir `<dir>` `<input>` - Override the Asterisk configuration directory

use std::env;
use std::io::Read;
use std::path::PathBuf;
use std::process;

use clap::{Arg, Command};

use fconf::error::Error;
use fconf::paths::{ConfigDir, CONFIG_DIR_ENV, DEFAULT_CONFIG_DIR};
use fconf::sync::sync_dongles_json;

/// Sentinel naming standard input as the record source.
const STDIN_SENTINEL: &str = "stdin";

fn main() {
    let matches = Command::new("fconf")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Configures asterisk using json")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("dongles")
                .visible_alias("d")
                .about("Configures asterisk dongles with json")
                .arg(
                    Arg::new("input")
                        .help("Path to the JSON record set, or 'stdin' to read standard input")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("config-dir")
                        .long("config-dir")
                        .help("Asterisk configuration directory (overrides ASTERISK_CONFIG)"),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("dongles", sub)) => {
            let input = sub.get_one::<String>("input").unwrap();
            let config_dir = sub.get_one::<String>("config-dir").map(PathBuf::from);
            if let Err(err) = run_dongles(input, config_dir) {
                eprintln!("fconf: {}", err);
                process::exit(1);
            }
        }
        _ => unreachable!(),
    }
}

/// Reads the record set, resolves the configuration directory and runs one
/// sync pass. Standard input is read to end-of-stream.
fn run_dongles(input: &str, config_dir: Option<PathBuf>) -> Result<(), Error> {
    let src = if input == STDIN_SENTINEL {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(input)?
    };
    let dir = ConfigDir::resolve(config_dir, env::var_os(CONFIG_DIR_ENV), DEFAULT_CONFIG_DIR);
    sync_dongles_json(&src, &dir)
}
