use std::fs;
use std::path::Path;

use crate::lit::{Compression, Result, Value, decode_bytes, parse_json};

/// Input document loaded from disk or memory.
#[derive(Debug, Clone)]
pub struct Source {
	/// Compression detected on the raw input.
	pub compression: Compression,
	/// Size of the decoded JSON text in bytes.
	pub decoded_len: usize,
	/// Converted value tree.
	pub value: Value,
}

impl Source {
	/// Read a JSON (optionally zstd-compressed) document.
	pub fn open(path: impl AsRef<Path>) -> Result<Self> {
		let raw = fs::read(path)?;
		Self::from_bytes(raw)
	}

	/// Decode a JSON (optionally zstd-compressed) document held in memory.
	pub fn from_bytes(raw: Vec<u8>) -> Result<Self> {
		let (compression, bytes) = decode_bytes(raw)?;
		let value = parse_json(&bytes)?;
		Ok(Self {
			compression,
			decoded_len: bytes.len(),
			value,
		})
	}
}
