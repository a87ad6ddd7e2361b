use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, LitError>;

/// Errors produced while building, loading, and serializing values.
#[derive(Debug, Error)]
pub enum LitError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Input document is not valid JSON.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// Decompression output exceeded configured safety limit.
	#[error("decompressed output exceeded limit {limit} bytes")]
	DecompressedTooLarge {
		/// Maximum allowed output bytes.
		limit: usize,
	},
	/// Value kind has no literal form at this position.
	#[error("unsupported type {class} at {name}")]
	UnsupportedType {
		/// Qualified name of the offending node.
		name: String,
		/// Class label reported by the value.
		class: String,
	},
	/// Numeric or text array has more than two effective dimensions.
	#[error("unsupported rank {rank} at {name} (expected <= 2)")]
	UnsupportedRank {
		/// Qualified name of the offending node.
		name: String,
		/// Effective rank of the array.
		rank: usize,
	},
	/// Serializer recursion depth exceeded configured limit.
	#[error("emit depth exceeded (max={max_depth})")]
	DepthExceeded {
		/// Configured depth ceiling.
		max_depth: u32,
	},
	/// Element storage does not match the declared shape.
	#[error("shape mismatch: shape holds {expected} elements, got {actual}")]
	ShapeMismatch {
		/// Element count implied by the shape.
		expected: usize,
		/// Element count supplied.
		actual: usize,
	},
	/// Text rows of unequal length.
	#[error("ragged text rows: row {row} has {actual} chars, expected {expected}")]
	RaggedRows {
		/// Zero-based row index.
		row: usize,
		/// Length of the first row.
		expected: usize,
		/// Length of the offending row.
		actual: usize,
	},
}
