use std::path::Path;

use structlit::lit::Result;

/// Root name derived from an input path: the file name up to its first `.`.
pub(crate) fn default_root_name(path: &Path) -> String {
	let file_name = path.file_name().map(|name| name.to_string_lossy().into_owned()).unwrap_or_default();
	match file_name.split('.').next() {
		Some(stem) if !stem.is_empty() => stem.to_owned(),
		_ => "value".to_owned(),
	}
}

/// Render dimensions as `2x3`.
pub(crate) fn dims_label(dims: &[usize]) -> String {
	if dims.is_empty() {
		return "-".to_owned();
	}
	dims.iter().map(usize::to_string).collect::<Vec<_>>().join("x")
}

/// Print a serializable payload as pretty JSON on stdout.
pub(crate) fn emit_json<T: serde::Serialize>(payload: &T) -> Result<()> {
	let text = serde_json::to_string_pretty(payload)?;
	println!("{text}");
	Ok(())
}

#[cfg(test)]
mod tests {
	use std::path::Path;

	use structlit::lit::LitError;

	use super::{default_root_name, dims_label, emit_json};

	struct Unencodable;

	impl serde::Serialize for Unencodable {
		fn serialize<S: serde::Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
			Err(serde::ser::Error::custom("refused"))
		}
	}

	#[test]
	fn root_name_strips_every_extension() {
		assert_eq!(default_root_name(Path::new("dir/params.json")), "params");
		assert_eq!(default_root_name(Path::new("params.json.zst")), "params");
		assert_eq!(default_root_name(Path::new(".hidden")), "value");
	}

	#[test]
	fn dims_render_with_separator() {
		assert_eq!(dims_label(&[2, 3]), "2x3");
		assert_eq!(dims_label(&[]), "-");
	}

	#[test]
	fn json_encode_failure_is_an_error() {
		let err = emit_json(&Unencodable).expect_err("encoding refused");
		assert!(matches!(err, LitError::Json(_)));
	}
}
