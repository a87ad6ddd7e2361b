use crate::lit::{Collection, EmitWarning, Result, format_scalar};

/// Append the brace literal for a collection grid.
///
/// Returns a warning instead of emitting anything when the entries do not all
/// share the kind of the first entry.
pub(crate) fn emit_collection(out: &mut String, name: &str, grid: &Collection) -> Result<Option<EmitWarning>> {
	grid.check_len()?;
	if grid.is_empty() {
		out.push_str(name);
		out.push_str(" = {};\n");
		return Ok(None);
	}

	let first = grid.items[0].kind();
	for (index, item) in grid.items.iter().enumerate() {
		let found = item.kind();
		if found != first {
			return Ok(Some(EmitWarning::HeterogeneousCollection {
				name: name.to_owned(),
				first,
				found,
				row: index / grid.cols + 1,
				col: index % grid.cols + 1,
			}));
		}
	}

	let tokens = grid.items.iter().map(|item| format_scalar(name, item)).collect::<Result<Vec<_>>>()?;

	out.push_str(name);
	if tokens.len() == 1 {
		out.push_str(" = { ");
		out.push_str(&tokens[0]);
		out.push_str(" };\n");
		return Ok(None);
	}

	out.push_str(" = {\n");
	let last = tokens.len() - 1;
	for (row, cells) in tokens.chunks(grid.cols).enumerate() {
		for (col, token) in cells.iter().enumerate() {
			out.push_str(token);
			if row * grid.cols + col != last {
				out.push_str(", ");
			}
		}
		out.push('\n');
	}
	out.push_str("};\n");
	Ok(None)
}
