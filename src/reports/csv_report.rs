use csv::{Terminator, WriterBuilder};

use super::ReportSummary;

/// `Type,Value` header followed by one CRLF-terminated row per count
pub fn render_csv(summary: &ReportSummary) -> Result<Vec<u8>, csv::Error> {
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::CRLF)
        .from_writer(Vec::new());

    writer.write_record(["Type", "Value"])?;
    for (label, value) in summary.rows() {
        let value = value.to_string();
        writer.write_record([label, value.as_str()])?;
    }

    writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))
}
