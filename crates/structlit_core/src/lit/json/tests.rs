use serde_json::json;
use structlit_testkit::fixture_json;

use crate::lit::{Kind, LitError, NumericData, Value, parse_json, serialize, serialize_with, value_from_json};

#[test]
fn object_keys_keep_document_order() {
	let value = parse_json(br#"{"zeta": 1, "alpha": 2.5, "mid": "m"}"#).expect("valid json");
	assert_eq!(serialize("o", &value).expect("emits"), "o.zeta = 1;\no.alpha = 2.5;\no.mid = 'm';\n");
}

#[test]
fn integer_literals_stay_exact() {
	let value = value_from_json(json!(1234567890123_i64));
	assert_eq!(value.kind(), Kind::Int);
	assert_eq!(serialize("n", &value).expect("emits"), "n = 1234567890123;\n");

	let value = value_from_json(json!(1234567.5));
	assert_eq!(serialize("n", &value).expect("emits"), "n = 1.23457e+06;\n");
}

#[test]
fn number_lists_become_rows_and_nests_become_matrices() {
	assert_eq!(serialize("v", &value_from_json(json!([1, 2, 3]))).expect("row"), "v = [1 2 3];\n");
	assert_eq!(serialize("v", &value_from_json(json!([1, 2.5]))).expect("promoted"), "v = [1 2.5];\n");
	assert_eq!(serialize("m", &value_from_json(json!([[1, 2], [3, 4]]))).expect("matrix"), "m = [\n1 2 \n3 4 \n];\n");
	assert_eq!(serialize("b", &value_from_json(json!([true, false]))).expect("bools"), "b = [1 0];\n");
}

#[test]
fn deep_numeric_nest_is_rank_three() {
	let value = value_from_json(json!([[[1, 2], [3, 4]], [[5, 6], [7, 8]]]));
	let Value::Numeric(array) = &value else {
		panic!("expected numeric array");
	};
	assert_eq!(array.shape, vec![2, 2, 2]);
	assert!(matches!(array.data, NumericData::Int(_)));
	assert!(matches!(serialize("c", &value), Err(LitError::UnsupportedRank { rank: 3, .. })));
}

#[test]
fn empty_array_is_empty_numeric() {
	assert_eq!(serialize("e", &value_from_json(json!([]))).expect("empty"), "e = [];\n");
}

#[test]
fn object_lists_become_record_arrays() {
	let value = value_from_json(json!([{"id": 1}, {"id": 2, "tag": "b"}]));
	assert_eq!(serialize("r", &value).expect("records"), "r(1).id = 1;\nr(2).id = 2;\nr(2).tag = 'b';\n");
}

#[test]
fn string_lists_become_collections() {
	assert_eq!(serialize("c", &value_from_json(json!(["x", "yz"]))).expect("cell"), "c = {\n'x', 'yz'\n};\n");
	assert_eq!(serialize("c", &value_from_json(json!([["a", "b"], ["c", "d"]]))).expect("grid"), "c = {\n'a', 'b', \n'c', 'd'\n};\n");
}

#[test]
fn mixed_lists_are_heterogeneous_collections() {
	let value = value_from_json(json!([1, "a"]));
	assert_eq!(value.kind(), Kind::Collection);
	let emitted = serialize_with("c", &value, &Default::default()).expect("not fatal");
	assert_eq!(emitted.text, "");
	assert_eq!(emitted.warnings.len(), 1);
}

#[test]
fn null_is_unsupported() {
	let value = value_from_json(json!({"a": 1, "b": null}));
	let err = serialize("o", &value).expect_err("null has no literal");
	assert!(matches!(err, LitError::UnsupportedType { ref name, ref class } if name == "o.b" && class == "null"));
}

#[test]
fn invalid_json_is_reported() {
	assert!(matches!(parse_json(b"{not json"), Err(LitError::Json(_))));
}

#[test]
fn nested_fixture_emits_expected_script() {
	let value = value_from_json(fixture_json("nested.json"));
	let text = serialize("nested", &value).expect("fixture emits");
	let expected = std::fs::read_to_string(structlit_testkit::fixture_path("nested.m")).expect("expected script");
	assert_eq!(text, expected);
}

#[test]
fn nest_of_empty_rows_is_an_empty_matrix() {
	let value = value_from_json(json!({"a": [[]], "b": 1}));
	assert_eq!(serialize("r", &value).expect("empty rows emit"), "r.a = [];\nr.b = 1;\n");

	let value = value_from_json(json!([[], [], []]));
	let Value::Numeric(array) = &value else {
		panic!("expected numeric, got {value:?}");
	};
	assert_eq!(array.shape, vec![3, 0]);
	assert_eq!(array.data, NumericData::Float(Vec::new()));
}
