use crate::lit::{Kind, Record, Value, field_name, indexed_name};

/// One node visited by the serializer.
#[derive(Debug, Clone, PartialEq)]
pub struct OutlineEntry {
	/// Qualified name the node is assigned to.
	pub name: String,
	/// Kind reported by the node.
	pub kind: Kind,
	/// Declared dimensions.
	pub dims: Vec<usize>,
}

/// List nodes in emission order under the names the serializer would use.
///
/// Containers are listed before their children. Collection entries are not entered.
pub fn outline(name: &str, value: &Value) -> Vec<OutlineEntry> {
	let mut out = Vec::new();
	walk(&mut out, name, value);
	out
}

fn walk(out: &mut Vec<OutlineEntry>, name: &str, value: &Value) {
	out.push(OutlineEntry {
		name: name.to_owned(),
		kind: value.kind(),
		dims: value.dims(),
	});

	match value {
		Value::Record(record) => walk_fields(out, name, record),
		Value::RecordArray(items) if items.len() == 1 => walk_fields(out, name, &items[0]),
		Value::RecordArray(items) => {
			for (index, item) in items.iter().enumerate() {
				let item_name = indexed_name(name, index + 1);
				out.push(OutlineEntry {
					name: item_name.clone(),
					kind: Kind::Record,
					dims: vec![1, 1],
				});
				walk_fields(out, &item_name, item);
			}
		}
		Value::Numeric(_) | Value::Text(_) | Value::Collection(_) | Value::Unsupported { .. } => {}
	}
}

fn walk_fields(out: &mut Vec<OutlineEntry>, name: &str, record: &Record) {
	for field in record.fields() {
		walk(out, &field_name(name, &field.name), &field.value);
	}
}
