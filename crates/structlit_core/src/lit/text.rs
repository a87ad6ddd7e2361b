use crate::lit::value::effective_dims;
use crate::lit::{CharArray, LitError, Result};

/// Append the literal for a character array.
///
/// A single row becomes `name = '<text>';`. Multiple rows become a bare
/// `name = ` header followed by one indented quoted line per row.
pub(crate) fn emit_text(out: &mut String, name: &str, text: &CharArray) -> Result<()> {
	let dims = effective_dims(&text.shape);
	if dims.len() > 2 {
		return Err(LitError::UnsupportedRank {
			name: name.to_owned(),
			rank: dims.len(),
		});
	}
	text.check_len()?;

	out.push_str(name);
	if dims[0] == 0 || dims[1] == 0 {
		out.push_str(" = '';\n");
		return Ok(());
	}

	if dims[0] == 1 {
		out.push_str(" = '");
		out.extend(text.chars.iter());
		out.push_str("';\n");
		return Ok(());
	}

	out.push_str(" = \n");
	for row in text.rows() {
		out.push_str("  '");
		out.push_str(&row);
		out.push_str("'\n");
	}
	Ok(())
}

#[cfg(test)]
mod tests;
