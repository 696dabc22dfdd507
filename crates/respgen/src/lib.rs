//! Frame command-line arguments as a RESP request.

pub mod config;

use std::fs::File;
use std::io;
use std::io::BufWriter;
use std::io::Write;

use respwire::Array;
use respwire::BulkString;
use respwire::EncodeError;
use thiserror::Error;

use crate::config::Cli;
use crate::config::Format;

#[derive(Error, Debug)]
pub enum RespgenError {
	#[error("Failed to encode request: {0}")]
	Encode(#[from] EncodeError),

	#[error("Failed to open output '{path}': {source}")]
	Output { source: io::Error, path: String },

	#[error("Failed to flush output: {0}")]
	Flush(#[source] io::Error),

	#[error("Argument {index} contains CR or LF and cannot be a simple string: {arg:?}")]
	LineBreakInSimpleString { index: usize, arg: String },
}

/// Simple strings are line-delimited, so every argument must be CR/LF free.
fn check_simple_args(args: &[String]) -> Result<(), RespgenError> {
	match args.iter().position(|arg| arg.contains(['\r', '\n'])) {
		Some(index) => Err(RespgenError::LineBreakInSimpleString {
			index,
			arg: args[index].clone(),
		}),
		None => Ok(()),
	}
}

/// Encode the request described by `cli` onto `sink`.
pub fn encode_request<W: Write + ?Sized>(cli: &Cli, sink: &mut W) -> Result<(), RespgenError> {
	if cli.null {
		log::debug!("framing null array");
		return Ok(respwire::put(sink, &Array::null())?);
	}

	log::debug!("framing {} argument(s) as {:?}", cli.args.len(), cli.format);
	match cli.format {
		Format::Bulk => {
			let args: Vec<BulkString> = cli.args.iter().map(BulkString::new).collect();
			respwire::put(sink, &Array::new(args.as_slice()))?;
		}
		Format::Simple => {
			check_simple_args(&cli.args)?;
			let args: Vec<&str> = cli.args.iter().map(String::as_str).collect();
			respwire::put(sink, &Array::from_list(&args))?;
		}
	}
	Ok(())
}

/// Encode the request and write it to the configured output.
pub fn run(cli: &Cli) -> Result<(), RespgenError> {
	match &cli.output {
		Some(path) => {
			let file = File::create(path).map_err(|source| RespgenError::Output {
				source,
				path: path.display().to_string(),
			})?;
			let mut writer = BufWriter::new(file);
			encode_request(cli, &mut writer)?;
			writer.flush().map_err(RespgenError::Flush)?;
			log::info!("request written to {}", path.display());
		}
		None => {
			let mut stdout = io::stdout().lock();
			encode_request(cli, &mut stdout)?;
			stdout.flush().map_err(RespgenError::Flush)?;
		}
	}
	Ok(())
}
