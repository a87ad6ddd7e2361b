use crate::lit::{LitError, Result};

/// Runtime value tree accepted by the serializer.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	/// Ordered named fields.
	Record(Record),
	/// Sequence of records, serialized element by element.
	RecordArray(Vec<Record>),
	/// Numeric or boolean grid.
	Numeric(NumericArray),
	/// Character grid; one row is a plain string.
	Text(CharArray),
	/// Two-dimensional grid of arbitrary values.
	Collection(Collection),
	/// Any value kind without a literal form.
	Unsupported {
		/// Class label reported in diagnostics.
		class: Box<str>,
	},
}

/// Class label a value reports for homogeneity checks and diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Kind {
	/// Record or record array.
	Record,
	/// Floating numeric array.
	Float,
	/// Integer numeric array.
	Int,
	/// Boolean array.
	Bool,
	/// Character array.
	Text,
	/// Collection grid.
	Collection,
	/// Unsupported value carrying its own label.
	Unsupported(Box<str>),
}

impl Kind {
	/// Render kind as its class label.
	pub fn as_str(&self) -> &str {
		match self {
			Self::Record => "struct",
			Self::Float => "double",
			Self::Int => "int64",
			Self::Bool => "logical",
			Self::Text => "char",
			Self::Collection => "cell",
			Self::Unsupported(class) => &**class,
		}
	}
}

impl std::fmt::Display for Kind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

impl Value {
	/// Kind reported by this value.
	pub fn kind(&self) -> Kind {
		match self {
			Self::Record(_) | Self::RecordArray(_) => Kind::Record,
			Self::Numeric(array) => array.kind(),
			Self::Text(_) => Kind::Text,
			Self::Collection(_) => Kind::Collection,
			Self::Unsupported { class } => Kind::Unsupported(class.clone()),
		}
	}

	/// Build an unsupported value with the given class label.
	pub fn unsupported(class: impl Into<Box<str>>) -> Self {
		Self::Unsupported { class: class.into() }
	}

	/// Dimensions as reported by `info` listings.
	pub fn dims(&self) -> Vec<usize> {
		match self {
			Self::Record(_) => vec![1, 1],
			Self::RecordArray(items) => vec![1, items.len()],
			Self::Numeric(array) => array.shape.clone(),
			Self::Text(text) => text.shape.clone(),
			Self::Collection(grid) => vec![grid.rows, grid.cols],
			Self::Unsupported { .. } => Vec::new(),
		}
	}
}

impl From<f64> for Value {
	fn from(v: f64) -> Self {
		Value::Numeric(NumericArray::float_scalar(v))
	}
}

impl From<i64> for Value {
	fn from(v: i64) -> Self {
		Value::Numeric(NumericArray::int_scalar(v))
	}
}

impl From<bool> for Value {
	fn from(v: bool) -> Self {
		Value::Numeric(NumericArray::bool_scalar(v))
	}
}

impl From<&str> for Value {
	fn from(v: &str) -> Self {
		Value::Text(CharArray::from_text(v))
	}
}

impl From<String> for Value {
	fn from(v: String) -> Self {
		Value::Text(CharArray::from_text(&v))
	}
}

impl From<Record> for Value {
	fn from(v: Record) -> Self {
		Value::Record(v)
	}
}

impl From<NumericArray> for Value {
	fn from(v: NumericArray) -> Self {
		Value::Numeric(v)
	}
}

impl From<CharArray> for Value {
	fn from(v: CharArray) -> Self {
		Value::Text(v)
	}
}

impl From<Collection> for Value {
	fn from(v: Collection) -> Self {
		Value::Collection(v)
	}
}

/// One named field of a record.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldValue {
	/// Field label.
	pub name: Box<str>,
	/// Field value.
	pub value: Value,
}

/// Ordered mapping of field label to value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
	fields: Vec<FieldValue>,
}

impl Record {
	/// Create an empty record.
	pub fn new() -> Self {
		Self::default()
	}

	/// Builder form of [`Record::insert`].
	pub fn with(mut self, name: &str, value: impl Into<Value>) -> Self {
		self.insert(name, value);
		self
	}

	/// Append a field, or replace the value of an existing label in place.
	pub fn insert(&mut self, name: &str, value: impl Into<Value>) {
		let value = value.into();
		match self.fields.iter_mut().find(|field| &*field.name == name) {
			Some(field) => field.value = value,
			None => self.fields.push(FieldValue {
				name: name.into(),
				value,
			}),
		}
	}

	/// Look up a field by label.
	pub fn get(&self, name: &str) -> Option<&Value> {
		self.fields.iter().find(|field| &*field.name == name).map(|field| &field.value)
	}

	/// Fields in insertion order.
	pub fn fields(&self) -> &[FieldValue] {
		&self.fields
	}

	/// Number of fields.
	pub fn len(&self) -> usize {
		self.fields.len()
	}

	/// Whether the record has no fields.
	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}
}

/// Element storage for numeric arrays.
#[derive(Debug, Clone, PartialEq)]
pub enum NumericData {
	/// Floating elements.
	Float(Vec<f64>),
	/// Integer elements.
	Int(Vec<i64>),
	/// Boolean elements.
	Bool(Vec<bool>),
}

impl NumericData {
	/// Number of stored elements.
	pub fn len(&self) -> usize {
		match self {
			Self::Float(items) => items.len(),
			Self::Int(items) => items.len(),
			Self::Bool(items) => items.len(),
		}
	}

	/// Whether no elements are stored.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

/// Numeric or boolean grid stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericArray {
	/// Dimension sizes, outermost first.
	pub shape: Vec<usize>,
	/// Row-major elements.
	pub data: NumericData,
}

impl NumericArray {
	/// Build an array, checking the element count against the shape.
	pub fn new(shape: Vec<usize>, data: NumericData) -> Result<Self> {
		let array = Self { shape, data };
		array.check_len()?;
		Ok(array)
	}

	/// Fails when the element count disagrees with the shape.
	pub(crate) fn check_len(&self) -> Result<()> {
		check_len(self.shape.iter().product(), self.data.len())
	}

	/// 0×0 floating array.
	pub fn empty() -> Self {
		Self {
			shape: vec![0, 0],
			data: NumericData::Float(Vec::new()),
		}
	}

	/// 1×1 floating array.
	pub fn float_scalar(v: f64) -> Self {
		Self {
			shape: vec![1, 1],
			data: NumericData::Float(vec![v]),
		}
	}

	/// 1×1 integer array.
	pub fn int_scalar(v: i64) -> Self {
		Self {
			shape: vec![1, 1],
			data: NumericData::Int(vec![v]),
		}
	}

	/// 1×1 boolean array.
	pub fn bool_scalar(v: bool) -> Self {
		Self {
			shape: vec![1, 1],
			data: NumericData::Bool(vec![v]),
		}
	}

	/// 1×N floating row.
	pub fn float_row(items: Vec<f64>) -> Self {
		Self {
			shape: vec![1, items.len()],
			data: NumericData::Float(items),
		}
	}

	/// M×N floating matrix from equal-length rows.
	pub fn float_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
		let cols = rows.first().map_or(0, Vec::len);
		if let Some(bad) = rows.iter().find(|row| row.len() != cols) {
			return Err(LitError::ShapeMismatch {
				expected: cols,
				actual: bad.len(),
			});
		}
		let shape = vec![rows.len(), cols];
		let data: Vec<f64> = rows.into_iter().flatten().collect();
		Self::new(shape, NumericData::Float(data))
	}

	/// Kind implied by the element subtype.
	pub fn kind(&self) -> Kind {
		match self.data {
			NumericData::Float(_) => Kind::Float,
			NumericData::Int(_) => Kind::Int,
			NumericData::Bool(_) => Kind::Bool,
		}
	}

	/// Rank after dropping trailing singleton dimensions past the second.
	pub fn rank(&self) -> usize {
		effective_dims(&self.shape).len()
	}
}

/// Character grid stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct CharArray {
	/// Dimension sizes, outermost first.
	pub shape: Vec<usize>,
	/// Row-major characters.
	pub chars: Vec<char>,
}

impl CharArray {
	/// Build a char array, checking the element count against the shape.
	pub fn new(shape: Vec<usize>, chars: Vec<char>) -> Result<Self> {
		let text = Self { shape, chars };
		text.check_len()?;
		Ok(text)
	}

	/// Fails when the character count disagrees with the shape.
	pub(crate) fn check_len(&self) -> Result<()> {
		check_len(self.shape.iter().product(), self.chars.len())
	}

	/// One-row text. An empty string is 0×0.
	pub fn from_text(text: &str) -> Self {
		let chars: Vec<char> = text.chars().collect();
		let shape = if chars.is_empty() { vec![0, 0] } else { vec![1, chars.len()] };
		Self { shape, chars }
	}

	/// Multi-row text from equal-length rows.
	pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
		let mut chars = Vec::new();
		let mut expected = 0;
		for (row, text) in rows.iter().enumerate() {
			let before = chars.len();
			chars.extend(text.as_ref().chars());
			let actual = chars.len() - before;
			if row == 0 {
				expected = actual;
			} else if actual != expected {
				return Err(LitError::RaggedRows { row, expected, actual });
			}
		}
		Ok(Self {
			shape: vec![rows.len(), expected],
			chars,
		})
	}

	/// Rank after dropping trailing singleton dimensions past the second.
	pub fn rank(&self) -> usize {
		effective_dims(&self.shape).len()
	}

	/// Rows as owned strings. Only meaningful for rank <= 2.
	pub fn rows(&self) -> Vec<String> {
		let dims = effective_dims(&self.shape);
		let cols = dims.get(1).copied().unwrap_or(0);
		if cols == 0 {
			return vec![String::new(); dims[0]];
		}
		self.chars.chunks(cols).map(|row| row.iter().collect()).collect()
	}
}

/// Two-dimensional grid of values stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct Collection {
	/// Row count.
	pub rows: usize,
	/// Column count.
	pub cols: usize,
	/// Row-major entries.
	pub items: Vec<Value>,
}

impl Collection {
	/// Build a grid, checking the item count against `rows * cols`.
	pub fn new(rows: usize, cols: usize, items: Vec<Value>) -> Result<Self> {
		let grid = Self { rows, cols, items };
		grid.check_len()?;
		Ok(grid)
	}

	/// Fails when the item count disagrees with `rows * cols`.
	pub(crate) fn check_len(&self) -> Result<()> {
		check_len(self.rows * self.cols, self.items.len())
	}

	/// 1×N grid.
	pub fn row(items: Vec<Value>) -> Self {
		Self {
			rows: 1,
			cols: items.len(),
			items,
		}
	}

	/// Whether either dimension is zero.
	pub fn is_empty(&self) -> bool {
		self.rows == 0 || self.cols == 0
	}
}

/// Normalize a shape to at least two dimensions, dropping trailing singletons past the second.
pub(crate) fn effective_dims(shape: &[usize]) -> Vec<usize> {
	let mut dims = match shape {
		[] => vec![1, 1],
		[n] => vec![1, *n],
		_ => shape.to_vec(),
	};
	while dims.len() > 2 && dims.last() == Some(&1) {
		dims.pop();
	}
	dims
}

fn check_len(expected: usize, actual: usize) -> Result<()> {
	if expected != actual {
		return Err(LitError::ShapeMismatch { expected, actual });
	}
	Ok(())
}

#[cfg(test)]
mod tests;
