/// Qualified name of a record field: `parent.label`.
pub fn field_name(parent: &str, label: &str) -> String {
	let mut out = String::with_capacity(parent.len() + label.len() + 1);
	out.push_str(parent);
	out.push('.');
	out.push_str(label);
	out
}

/// Qualified name of a 1-based array element: `parent(index)`.
pub fn indexed_name(parent: &str, index: usize) -> String {
	format!("{parent}({index})")
}
