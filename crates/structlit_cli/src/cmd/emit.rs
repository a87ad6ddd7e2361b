use std::fs;
use std::path::PathBuf;

use structlit::lit::{EmitOptions, Result, Source, serialize_with};
use tracing::info;

use crate::cmd::util::{default_root_name, emit_json};

#[derive(clap::Args)]
pub struct Args {
	pub file: PathBuf,
	#[arg(long)]
	pub name: Option<String>,
	#[arg(long)]
	pub out: Option<PathBuf>,
	#[arg(long = "max-depth")]
	pub max_depth: Option<u32>,
	#[arg(long)]
	pub json: bool,
}

/// Load a document and write its literal assignment script.
pub fn run(args: Args) -> Result<()> {
	let Args {
		file: path,
		name,
		out,
		max_depth,
		json,
	} = args;

	let name = name.unwrap_or_else(|| default_root_name(&path));
	let source = Source::open(&path)?;

	let mut options = EmitOptions::default();
	if let Some(max_depth) = max_depth {
		options.max_depth = max_depth;
	}
	let emitted = serialize_with(&name, &source.value, &options)?;

	if let Some(out) = &out {
		fs::write(out, &emitted.text)?;
		info!(path = %out.display(), bytes = emitted.text.len(), "wrote script");
	}

	if json {
		let payload = EmitJson {
			path: path.display().to_string(),
			name,
			compression: source.compression.as_str(),
			out: out.as_ref().map(|item| item.display().to_string()),
			lines: emitted.text.lines().count(),
			bytes: emitted.text.len(),
			warnings: emitted.warnings.iter().map(ToString::to_string).collect(),
			text: if out.is_none() { Some(emitted.text) } else { None },
		};
		emit_json(&payload)?;
		return Ok(());
	}

	if out.is_none() {
		print!("{}", emitted.text);
	}
	Ok(())
}

#[derive(serde::Serialize)]
struct EmitJson {
	path: String,
	name: String,
	compression: &'static str,
	out: Option<String>,
	lines: usize,
	bytes: usize,
	warnings: Vec<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	text: Option<String>,
}
