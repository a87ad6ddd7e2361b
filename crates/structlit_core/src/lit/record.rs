use tracing::debug;

use crate::lit::dispatch::Emitter;
use crate::lit::{Record, Result, field_name, indexed_name};

impl Emitter {
	/// One assignment per field, in declaration order.
	pub(crate) fn record(&mut self, name: &str, record: &Record, depth: u32) -> Result<()> {
		for field in record.fields() {
			self.value(&field_name(name, &field.name), &field.value, depth + 1)?;
		}
		Ok(())
	}

	/// A single element keeps the bare name; longer arrays index from 1.
	///
	/// Elements sit one level below the array whatever its length.
	pub(crate) fn record_array(&mut self, name: &str, items: &[Record], depth: u32) -> Result<()> {
		match items {
			[] => {
				debug!(path = name, "empty record array emits nothing");
				Ok(())
			}
			[only] => self.record(name, only, depth + 1),
			_ => {
				for (index, item) in items.iter().enumerate() {
					self.record(&indexed_name(name, index + 1), item, depth + 1)?;
				}
				Ok(())
			}
		}
	}
}
