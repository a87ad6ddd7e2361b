use super::emit_text;
use crate::lit::{CharArray, LitError};

fn render(name: &str, text: &CharArray) -> String {
	let mut out = String::new();
	emit_text(&mut out, name, text).expect("text emit succeeds");
	out
}

#[test]
fn single_row_is_quoted_assignment() {
	assert_eq!(render("s", &CharArray::from_text("hello world")), "s = 'hello world';\n");
}

#[test]
fn empty_text_is_empty_literal() {
	assert_eq!(render("s", &CharArray::from_text("")), "s = '';\n");
}

#[test]
fn multi_row_emits_header_and_indented_rows() {
	let text = CharArray::from_rows(&["ab", "cd"]).expect("equal rows");
	assert_eq!(render("t", &text), "t = \n  'ab'\n  'cd'\n");
}

#[test]
fn non_ascii_rows_split_on_chars() {
	let text = CharArray::from_rows(&["åé", "üö"]).expect("equal rows");
	assert_eq!(render("t", &text), "t = \n  'åé'\n  'üö'\n");
}

#[test]
fn ragged_rows_are_rejected_at_construction() {
	let err = CharArray::from_rows(&["abc", "d"]).expect_err("ragged rows");
	assert!(matches!(err, LitError::RaggedRows { row: 1, expected: 3, actual: 1 }));
}

#[test]
fn rank_three_text_is_rejected() {
	let text = CharArray::new(vec![2, 1, 2], "abcd".chars().collect()).expect("shape");
	let mut out = String::new();
	let err = emit_text(&mut out, "t", &text).expect_err("rank 3 should fail");
	assert!(matches!(err, LitError::UnsupportedRank { rank: 3, .. }));
}

#[test]
fn short_chars_are_a_shape_mismatch() {
	let text = CharArray {
		shape: vec![2, 3],
		chars: vec!['a'],
	};
	let mut out = String::new();
	let err = emit_text(&mut out, "t", &text).expect_err("one char cannot fill 2x3");
	assert!(matches!(err, LitError::ShapeMismatch { expected: 6, actual: 1 }));
	assert!(out.is_empty());
}
