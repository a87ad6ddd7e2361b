use serde_json::{Map, Value as Json};

use crate::lit::{Collection, NumericArray, NumericData, Record, Result, Value};

/// Parse a JSON document into a value tree.
pub fn parse_json(bytes: &[u8]) -> Result<Value> {
	let json: Json = serde_json::from_slice(bytes)?;
	Ok(value_from_json(json))
}

/// Convert a JSON tree into a value tree.
///
/// Objects become records (key order kept), rectangular number or boolean nests
/// become numeric arrays, arrays of objects become record arrays, and other
/// arrays become collections.
pub fn value_from_json(json: Json) -> Value {
	match json {
		Json::Null => Value::unsupported("null"),
		Json::Bool(v) => Value::from(v),
		Json::Number(v) => match v.as_i64() {
			Some(int) => Value::from(int),
			None => Value::from(v.as_f64().unwrap_or(f64::NAN)),
		},
		Json::String(v) => Value::from(v),
		Json::Array(items) => array_value(items),
		Json::Object(map) => Value::Record(record_from_map(map)),
	}
}

fn record_from_map(map: Map<String, Json>) -> Record {
	let mut record = Record::new();
	for (key, value) in map {
		record.insert(&key, value_from_json(value));
	}
	record
}

fn array_value(items: Vec<Json>) -> Value {
	if items.is_empty() {
		return Value::Numeric(NumericArray::empty());
	}

	if items.iter().all(Json::is_object) {
		let records = items
			.into_iter()
			.filter_map(|item| match item {
				Json::Object(map) => Some(record_from_map(map)),
				_ => None,
			})
			.collect();
		return Value::RecordArray(records);
	}

	if let Some(mut shape) = nest_shape(&items) {
		if shape.len() == 1 {
			shape.insert(0, 1);
		}
		let mut leaves = Vec::new();
		flatten(&items, &mut leaves);
		if let Some(data) = numeric_data(&leaves) {
			return Value::Numeric(NumericArray { shape, data });
		}
	}

	let cols = match items.first() {
		Some(Json::Array(first)) if !first.is_empty() => first.len(),
		_ => 0,
	};
	if cols > 0 && items.iter().all(|item| matches!(item, Json::Array(row) if row.len() == cols)) {
		let rows = items.len();
		let cells = items
			.into_iter()
			.flat_map(|item| match item {
				Json::Array(row) => row,
				other => vec![other],
			})
			.map(value_from_json)
			.collect();
		return Value::Collection(Collection { rows, cols, items: cells });
	}

	Value::Collection(Collection::row(items.into_iter().map(value_from_json).collect()))
}

/// Shape of a rectangular nest whose leaves are numbers or booleans.
fn nest_shape(items: &[Json]) -> Option<Vec<usize>> {
	match items.first()? {
		Json::Number(_) | Json::Bool(_) => {
			if items.iter().all(|item| matches!(item, Json::Number(_) | Json::Bool(_))) {
				Some(vec![items.len()])
			} else {
				None
			}
		}
		Json::Array(_) => {
			let mut inner: Option<Vec<usize>> = None;
			for item in items {
				let Json::Array(row) = item else {
					return None;
				};
				// An empty row contributes a zero-length dimension.
				let shape = if row.is_empty() { vec![0] } else { nest_shape(row)? };
				match &inner {
					Some(expected) if *expected != shape => return None,
					Some(_) => {}
					None => inner = Some(shape),
				}
			}
			let mut shape = vec![items.len()];
			shape.extend(inner?);
			Some(shape)
		}
		_ => None,
	}
}

fn flatten<'a>(items: &'a [Json], out: &mut Vec<&'a Json>) {
	for item in items {
		match item {
			Json::Array(inner) => flatten(inner, out),
			leaf => out.push(leaf),
		}
	}
}

fn numeric_data(leaves: &[&Json]) -> Option<NumericData> {
	if leaves.is_empty() {
		return Some(NumericData::Float(Vec::new()));
	}
	if leaves.iter().all(|leaf| leaf.is_boolean()) {
		return Some(NumericData::Bool(leaves.iter().filter_map(|leaf| leaf.as_bool()).collect()));
	}
	if !leaves.iter().all(|leaf| leaf.is_number()) {
		return None;
	}
	if let Some(ints) = leaves.iter().map(|leaf| leaf.as_i64()).collect::<Option<Vec<_>>>() {
		return Some(NumericData::Int(ints));
	}
	leaves.iter().map(|leaf| leaf.as_f64()).collect::<Option<Vec<_>>>().map(NumericData::Float)
}

#[cfg(test)]
mod tests;
