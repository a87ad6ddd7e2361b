use crate::lit::scalar::numeric_token;
use crate::lit::value::effective_dims;
use crate::lit::{LitError, NumericArray, Result};

/// Append the literal block for a numeric or boolean matrix.
pub(crate) fn emit_numeric(out: &mut String, name: &str, array: &NumericArray) -> Result<()> {
	let dims = effective_dims(&array.shape);
	if dims.len() > 2 {
		return Err(LitError::UnsupportedRank {
			name: name.to_owned(),
			rank: dims.len(),
		});
	}
	array.check_len()?;
	let (rows, cols) = (dims[0], dims[1]);

	out.push_str(name);
	if rows == 0 || cols == 0 {
		out.push_str(" = [];\n");
		return Ok(());
	}

	if rows == 1 && cols == 1 {
		out.push_str(" = ");
		out.push_str(&numeric_token(&array.data, 0));
		out.push_str(";\n");
		return Ok(());
	}

	if rows == 1 {
		out.push_str(" = [");
		for col in 0..cols {
			if col > 0 {
				out.push(' ');
			}
			out.push_str(&numeric_token(&array.data, col));
		}
		out.push_str("];\n");
		return Ok(());
	}

	// One line per row, every element followed by a single space.
	out.push_str(" = [\n");
	for row in 0..rows {
		for col in 0..cols {
			out.push_str(&numeric_token(&array.data, row * cols + col));
			out.push(' ');
		}
		out.push('\n');
	}
	out.push_str("];\n");
	Ok(())
}
