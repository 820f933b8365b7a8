use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use crate::ResumeError;
use crate::ResumeResult;
use crate::model::RawRow;

/// Read tab-separated records from `reader`. The first record is a header
/// and is discarded; records may have any number of fields.
pub fn read_tsv(reader: impl Read) -> ResumeResult<Vec<RawRow>> {
	let mut reader = ReaderBuilder::new()
		.delimiter(b'\t')
		.quote(b'"')
		.double_quote(true)
		.has_headers(true)
		.flexible(true)
		.from_reader(reader);

	let mut rows = vec![];
	for record in reader.records() {
		let record = record?;
		rows.push(RawRow::from_fields(record.iter()));
	}

	debug!(count = rows.len(), "read input rows");
	Ok(rows)
}

/// Read the tab-separated file at `path`.
pub fn read_tsv_file(path: &Path) -> ResumeResult<Vec<RawRow>> {
	if !path.is_file() {
		return Err(ResumeError::InputNotFound {
			path: path.display().to_string(),
		});
	}

	let file = std::fs::File::open(path)?;
	read_tsv(file)
}
