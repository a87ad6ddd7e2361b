use std::path::PathBuf;

use structlit::lit::{Result, Source, outline};

use crate::cmd::util::{default_root_name, dims_label, emit_json};

#[derive(clap::Args)]
pub struct Args {
	pub file: PathBuf,
	#[arg(long)]
	pub name: Option<String>,
	#[arg(long)]
	pub json: bool,
}

/// Print every node the serializer would visit, with kind and dimensions.
pub fn run(args: Args) -> Result<()> {
	let Args { file: path, name, json } = args;

	let name = name.unwrap_or_else(|| default_root_name(&path));
	let source = Source::open(&path)?;
	let entries = outline(&name, &source.value);

	if json {
		let payload = InfoJson {
			path: path.display().to_string(),
			compression: source.compression.as_str(),
			decoded_bytes: source.decoded_len,
			nodes: entries
				.iter()
				.map(|entry| NodeJson {
					name: entry.name.clone(),
					kind: entry.kind.as_str().to_owned(),
					dims: entry.dims.clone(),
				})
				.collect(),
		};
		emit_json(&payload)?;
		return Ok(());
	}

	println!("path: {}", path.display());
	println!("compression: {}", source.compression.as_str());
	println!("decoded_bytes: {}", source.decoded_len);
	println!("nodes: {}", entries.len());
	println!();
	println!("name\tkind\tdims");
	for entry in &entries {
		println!("{}\t{}\t{}", entry.name, entry.kind, dims_label(&entry.dims));
	}

	Ok(())
}

#[derive(serde::Serialize)]
struct InfoJson {
	path: String,
	compression: &'static str,
	decoded_bytes: usize,
	nodes: Vec<NodeJson>,
}

#[derive(serde::Serialize)]
struct NodeJson {
	name: String,
	kind: String,
	dims: Vec<usize>,
}
