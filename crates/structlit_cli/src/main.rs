#![allow(missing_docs)]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;

#[derive(Parser)]
#[command(name = "structlit", about = "Emit nested values as literal assignment scripts")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	Emit(cmd::emit::Args),
	Info(cmd::info::Args),
}

fn main() {
	init_logging();
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> structlit::lit::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Emit(args) => cmd::emit::run(args),
		Commands::Info(args) => cmd::info::run(args),
	}
}

fn init_logging() {
	let filter = EnvFilter::try_from_env("STRUCTLIT_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
	tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).with_target(false).init();
}
