//! Boots an assembly file on a fresh computer and prints the memory dump.
//!
//! ```text
//! ooasm [--capacity N] [FILE]
//! ```
//! Without `FILE` the program is read from standard input.

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;

use ooasm::{parse_assembly, Computer};

#[derive(Parser, Debug)]
#[command(name = "ooasm", about = "Boot an ooasm program and print its memory.")]
struct Args {
  /// Number of memory words.
  #[arg(short, long, default_value_t = 16)]
  capacity: usize,

  /// Assembly source file (reads standard input if omitted).
  #[arg(value_name = "FILE")]
  path: Option<PathBuf>,
}

fn run(args: &Args) -> ooasm::Result<()> {
  let text = match &args.path {
    Some(path) => fs::read_to_string(path)?,
    None       => {
      let mut text = String::new();
      io::stdin().read_to_string(&mut text)?;
      text
    }
  };

  let program = parse_assembly(&text)?;
  let mut computer = Computer::new(args.capacity);
  computer.boot(&program)?;

  #[cfg(feature = "trace_computation")]
  println!("{}", computer);

  let stdout = io::stdout();
  let mut out = stdout.lock();
  computer.memory_dump(&mut out)?;
  writeln!(out)?;
  Ok(())
}

fn main() {
  let args = Args::parse();
  if let Err(e) = run(&args) {
    eprintln!("Error: {}", e);
    process::exit(1);
  }
}
