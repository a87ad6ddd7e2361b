use crate::lit::{CharArray, Collection, Kind, LitError, NumericArray, NumericData, Record, Value};

#[test]
fn shape_must_match_element_count() {
	let err = NumericArray::new(vec![2, 3], NumericData::Float(vec![0.0; 5])).expect_err("5 != 6");
	assert!(matches!(err, LitError::ShapeMismatch { expected: 6, actual: 5 }));

	let err = CharArray::new(vec![1, 2], vec!['a']).expect_err("1 != 2");
	assert!(matches!(err, LitError::ShapeMismatch { expected: 2, actual: 1 }));

	let err = Collection::new(2, 2, vec![Value::from(1.0)]).expect_err("1 != 4");
	assert!(matches!(err, LitError::ShapeMismatch { expected: 4, actual: 1 }));
}

#[test]
fn ragged_float_rows_are_rejected() {
	let err = NumericArray::float_rows(vec![vec![1.0, 2.0], vec![3.0], vec![4.0, 5.0, 6.0]]).expect_err("ragged");
	assert!(matches!(err, LitError::ShapeMismatch { expected: 2, actual: 1 }));
}

#[test]
fn effective_rank_ignores_trailing_singletons() {
	let array = NumericArray::new(vec![2, 3, 1, 1], NumericData::Int(vec![0; 6])).expect("shape");
	assert_eq!(array.rank(), 2);
	let array = NumericArray::new(vec![4], NumericData::Int(vec![0; 4])).expect("shape");
	assert_eq!(array.rank(), 2);
	let array = NumericArray::new(vec![1, 1, 2], NumericData::Int(vec![0; 2])).expect("shape");
	assert_eq!(array.rank(), 3);
}

#[test]
fn kinds_report_class_labels() {
	assert_eq!(Value::from(1.0).kind().as_str(), "double");
	assert_eq!(Value::from(1_i64).kind().as_str(), "int64");
	assert_eq!(Value::from(false).kind().as_str(), "logical");
	assert_eq!(Value::from("s").kind().as_str(), "char");
	assert_eq!(Value::Record(Record::new()).kind(), Kind::Record);
	assert_eq!(Value::RecordArray(Vec::new()).kind(), Kind::Record);
	assert_eq!(Value::Collection(Collection::row(Vec::new())).kind().to_string(), "cell");
}

#[test]
fn record_lookup_and_order() {
	let record = Record::new().with("b", 1.0).with("a", "x");
	assert_eq!(record.len(), 2);
	assert_eq!(record.get("a"), Some(&Value::from("x")));
	assert!(record.get("missing").is_none());
	let names: Vec<&str> = record.fields().iter().map(|field| &*field.name).collect();
	assert_eq!(names, ["b", "a"]);
}

#[test]
fn text_rows_split_evenly() {
	let text = CharArray::from_rows(&["abc", "def"]).expect("equal rows");
	assert_eq!(text.shape, vec![2, 3]);
	assert_eq!(text.rows(), vec!["abc".to_owned(), "def".to_owned()]);
	assert_eq!(CharArray::from_text("").shape, vec![0, 0]);
}
