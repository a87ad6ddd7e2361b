use crate::lit::value::effective_dims;
use crate::lit::{LitError, NumericData, Result, Value};

/// Significant digits used for floating literals (C `%g` default precision).
pub const FLOAT_SIGNIFICANT_DIGITS: usize = 6;

/// Placeholder emitted for records nested inside a collection.
const RECORD_PLACEHOLDER: &str = "'FIXME'";

/// Render a floating value in `%g` general format.
pub fn format_float(value: f64) -> String {
	if value.is_nan() {
		return "NaN".to_owned();
	}
	if value.is_infinite() {
		return if value > 0.0 { "Inf" } else { "-Inf" }.to_owned();
	}
	if value == 0.0 {
		return if value.is_sign_negative() { "-0" } else { "0" }.to_owned();
	}

	let precision = FLOAT_SIGNIFICANT_DIGITS;
	// Exponent after rounding to `precision` digits decides the notation.
	let sci = format!("{:.*e}", precision - 1, value);
	let Some((mantissa, exp)) = sci.split_once('e') else {
		return sci;
	};
	let Ok(exp) = exp.parse::<i32>() else {
		return sci;
	};

	if exp < -4 || exp >= precision as i32 {
		let sign = if exp < 0 { '-' } else { '+' };
		return format!("{}e{sign}{:02}", trim_fraction(mantissa), exp.unsigned_abs());
	}

	let decimals = (precision as i32 - 1 - exp) as usize;
	trim_fraction(&format!("{value:.decimals$}")).to_owned()
}

/// Render an integer value exactly.
pub fn format_int(value: i64) -> String {
	value.to_string()
}

fn format_bool(value: bool) -> &'static str {
	if value { "1" } else { "0" }
}

fn trim_fraction(text: &str) -> &str {
	if !text.contains('.') {
		return text;
	}
	text.trim_end_matches('0').trim_end_matches('.')
}

/// Render element `index` of numeric storage as a literal token.
pub(crate) fn numeric_token(data: &NumericData, index: usize) -> String {
	match data {
		NumericData::Float(items) => format_float(items[index]),
		NumericData::Int(items) => format_int(items[index]),
		NumericData::Bool(items) => format_bool(items[index]).to_owned(),
	}
}

/// Render one atomic value as a literal token.
///
/// Accepts single-row text, 1×1 numerics, and records (rendered as a
/// placeholder). `name` is only used for error reporting.
pub fn format_scalar(name: &str, value: &Value) -> Result<String> {
	match value {
		Value::Text(text) => {
			text.check_len()?;
			let dims = effective_dims(&text.shape);
			if dims.len() == 2 && dims[0] <= 1 {
				let body: String = text.chars.iter().collect();
				return Ok(format!("'{body}'"));
			}
		}
		Value::Numeric(array) => {
			if array.data.len() == 1 && effective_dims(&array.shape) == [1, 1] {
				return Ok(numeric_token(&array.data, 0));
			}
		}
		Value::Record(_) => return Ok(RECORD_PLACEHOLDER.to_owned()),
		Value::RecordArray(items) if items.len() == 1 => return Ok(RECORD_PLACEHOLDER.to_owned()),
		Value::RecordArray(_) | Value::Collection(_) | Value::Unsupported { .. } => {}
	}

	Err(LitError::UnsupportedType {
		name: name.to_owned(),
		class: value.kind().as_str().to_owned(),
	})
}
