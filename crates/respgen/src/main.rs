use respgen::config::Cli;
use respgen::config::Parser;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
	let cli = Cli::parse();
	telemetry::init(cli.log_level.as_deref())?;

	respgen::run(&cli)?;
	Ok(())
}
