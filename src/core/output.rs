use crate::domain::model::FlatRow;
use crate::utils::error::{EtlError, Result};
use csv::{Terminator, WriterBuilder};

/// Renders the header row followed by one CSV row per flattened record.
///
/// The header is written even when there are no rows.
pub fn render_csv(rows: &[FlatRow]) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::CRLF)
        .from_writer(Vec::new());

    writer.write_record(FlatRow::HEADERS)?;
    for row in rows {
        writer.serialize(row)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| EtlError::IoError(e.into_error()))?;

    String::from_utf8(bytes).map_err(|e| EtlError::ProcessingError {
        message: format!("CSV output is not valid UTF-8: {}", e),
    })
}
