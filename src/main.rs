//! main.rs
//! Entry point for lsr

pub(crate) mod config;
pub(crate) mod core;
pub(crate) mod utils;

use crate::core::list_dir;
use crate::utils::cli::{CliAction, handle_args};

use std::io::{self, BufWriter, Write};
use std::path::Path;

fn main() {
    let config = match handle_args() {
        CliAction::List(config) => config,
        CliAction::Exit => return,
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let result = list_dir(Path::new("."), &config, &mut out).and_then(|()| out.flush());
    if let Err(e) = result {
        eprintln!("[lsr] Error: {}", e);
        std::process::exit(1);
    }
}
