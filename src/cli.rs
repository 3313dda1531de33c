// src/cli.rs
use std::path::PathBuf;

use color_eyre::eyre::{bail, eyre, Result};

use crate::params::Params;
use crate::progress::Progress;
use crate::runner;

/// Stdout progress sink for terminal runs.
struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }
}

pub fn run() -> Result<()> {
    let params = parse_cli()?;

    if params.quiet {
        runner::run(&params, None).map_err(|e| eyre!("{e}"))?;
    } else {
        let mut progress = ConsoleProgress;
        runner::run(&params, Some(&mut progress)).map_err(|e| eyre!("{e}"))?;
    }

    Ok(())
}

fn parse_cli() -> Result<Params> {
    let mut params = Params::new();

    let mut args = std::env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "--url" => {
                params.url = args.next().ok_or_else(|| eyre!("Missing value for --url"))?;
            }
            "-o" | "--out" => {
                let v = args.next().ok_or_else(|| eyre!("Missing output path"))?;
                params.out = PathBuf::from(v);
            }
            "-q" | "--quiet" => params.quiet = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => bail!("Unknown arg: {a}"),
        }
    }

    Ok(params)
}
