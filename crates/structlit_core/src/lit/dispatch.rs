use tracing::warn;

use crate::lit::collection::emit_collection;
use crate::lit::numeric::emit_numeric;
use crate::lit::text::emit_text;
use crate::lit::{Kind, LitError, Result, Value};

/// Runtime limits for literal emission.
#[derive(Debug, Clone)]
pub struct EmitOptions {
	/// Maximum nesting depth of records and record arrays.
	///
	/// The root sits at depth 0. Record fields sit one level below their
	/// record. Record array elements sit one level below the array, so their
	/// fields are two levels down, for one element or many.
	pub max_depth: u32,
}

impl Default for EmitOptions {
	fn default() -> Self {
		Self { max_depth: 64 }
	}
}

/// Non-fatal condition raised while emitting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmitWarning {
	/// Collection entries disagree on kind; the node was skipped.
	HeterogeneousCollection {
		/// Qualified name of the skipped collection.
		name: String,
		/// Kind of the first entry.
		first: Kind,
		/// First differing kind.
		found: Kind,
		/// 1-based row of the first differing entry.
		row: usize,
		/// 1-based column of the first differing entry.
		col: usize,
	},
}

impl std::fmt::Display for EmitWarning {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::HeterogeneousCollection { name, first, found, row, col } => {
				write!(f, "{name}: mixed collection entries ({first} vs {found} at {row},{col}), skipped")
			}
		}
	}
}

/// Emitted script text plus any non-fatal warnings.
#[derive(Debug, Clone, Default)]
pub struct Emitted {
	/// Assignment statements, newline-terminated.
	pub text: String,
	/// Warnings in emission order.
	pub warnings: Vec<EmitWarning>,
}

/// Serialize `value` under root `name` with default options.
pub fn serialize(name: &str, value: &Value) -> Result<String> {
	serialize_with(name, value, &EmitOptions::default()).map(|emitted| emitted.text)
}

/// Serialize `value` under root `name`, returning text and warnings.
///
/// Any fatal error discards all text produced so far.
pub fn serialize_with(name: &str, value: &Value, options: &EmitOptions) -> Result<Emitted> {
	let mut emitter = Emitter {
		out: String::new(),
		warnings: Vec::new(),
		max_depth: options.max_depth,
	};
	emitter.value(name, value, 0)?;
	Ok(Emitted {
		text: emitter.out,
		warnings: emitter.warnings,
	})
}

/// Append-only output buffer threaded through the recursion.
pub(crate) struct Emitter {
	pub(crate) out: String,
	pub(crate) warnings: Vec<EmitWarning>,
	pub(crate) max_depth: u32,
}

impl Emitter {
	pub(crate) fn value(&mut self, name: &str, value: &Value, depth: u32) -> Result<()> {
		if depth > self.max_depth {
			return Err(LitError::DepthExceeded { max_depth: self.max_depth });
		}

		match value {
			Value::Record(record) => self.record(name, record, depth),
			Value::RecordArray(items) => self.record_array(name, items, depth),
			Value::Numeric(array) => emit_numeric(&mut self.out, name, array),
			Value::Text(text) => emit_text(&mut self.out, name, text),
			Value::Collection(grid) => {
				if let Some(warning) = emit_collection(&mut self.out, name, grid)? {
					warn!(%warning, "skipping collection");
					self.warnings.push(warning);
				}
				Ok(())
			}
			Value::Unsupported { class } => Err(LitError::UnsupportedType {
				name: name.to_owned(),
				class: class.to_string(),
			}),
		}
	}
}
