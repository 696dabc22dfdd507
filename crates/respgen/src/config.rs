//! Command-line configuration for respgen
//!
//! # Example
//!
//! ```no_run
//! use respgen::config::{Cli, Parser};
//!
//! let args = Cli::parse();
//! println!("framing {} argument(s)", args.args.len());
//! ```

use std::path::PathBuf;

pub use clap::Parser;
use clap::ValueEnum;

/// How request arguments are framed.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
	/// A fixed array of bulk strings, the normal request shape
	Bulk,
	/// A runtime list, every argument framed as a simple string
	Simple,
}

/// Command-line arguments for respgen
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
	/// Request arguments, e.g. `SET key value`
	#[arg(required_unless_present = "null", conflicts_with = "null")]
	pub args: Vec<String>,

	/// How arguments are framed
	#[arg(short, long, value_enum, default_value_t = Format::Bulk)]
	pub format: Format,

	/// Emit the null array instead of a request
	#[arg(long)]
	pub null: bool,

	/// Write to this file instead of stdout
	#[arg(short, long)]
	pub output: Option<PathBuf>,

	/// Log level (trace, debug, info, warn, error).
	/// Falls back to RUST_LOG, then warn.
	#[arg(short, long)]
	pub log_level: Option<String>,
}
