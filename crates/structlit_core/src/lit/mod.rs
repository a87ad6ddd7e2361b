mod collection;
mod compression;
mod dispatch;
mod error;
mod json;
mod name;
mod numeric;
mod outline;
mod record;
mod scalar;
mod source;
mod text;
mod value;

/// Input compression detection and decoding.
pub use compression::{Compression, MAX_DECOMPRESSED_BYTES, ZSTD_MAGIC, decode_bytes};
/// Top-level serialization entry points and options.
pub use dispatch::{EmitOptions, EmitWarning, Emitted, serialize, serialize_with};
/// Error and result aliases.
pub use error::{LitError, Result};
/// JSON to value conversion.
pub use json::{parse_json, value_from_json};
/// Qualified name construction.
pub use name::{field_name, indexed_name};
/// Node listing in emission order.
pub use outline::{OutlineEntry, outline};
/// Literal token formatting.
pub use scalar::{FLOAT_SIGNIFICANT_DIGITS, format_float, format_int, format_scalar};
/// File-backed input documents.
pub use source::Source;
/// Runtime value model.
pub use value::{CharArray, Collection, FieldValue, Kind, NumericArray, NumericData, Record, Value};
