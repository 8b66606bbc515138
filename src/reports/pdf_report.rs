use std::fmt::Write as _;

use super::{ReportSummary, REPORT_TITLE};

/// US Letter in points
const PAGE_WIDTH: u32 = 612;
const PAGE_HEIGHT: u32 = 792;
const LEFT_MARGIN: u32 = 50;
const TITLE_SIZE: u32 = 18;
const BODY_SIZE: u32 = 12;
const LINE_STEP: u32 = 20;

/// Single-page PDF: bold title, then one `label: value` line per count.
pub fn render_pdf(summary: &ReportSummary) -> Vec<u8> {
    let mut pdf = PdfWriter::new();

    pdf.object("<< /Type /Catalog /Pages 2 0 R >>");
    pdf.object("<< /Type /Pages /Kids [3 0 R] /Count 1 >>");
    pdf.object(&format!(
        "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {PAGE_WIDTH} {PAGE_HEIGHT}] \
         /Resources << /Font << /F1 4 0 R /F2 5 0 R >> >> /Contents 6 0 R >>"
    ));
    pdf.object("<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica-Bold >>");
    pdf.object("<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>");

    let content = page_content(summary);
    pdf.object(&format!(
        "<< /Length {} >>\nstream\n{}endstream",
        content.len(),
        content
    ));

    pdf.finish()
}

fn page_content(summary: &ReportSummary) -> String {
    let mut content = String::new();
    let mut y = PAGE_HEIGHT - 50;
    let _ = writeln!(
        content,
        "BT /F1 {TITLE_SIZE} Tf {LEFT_MARGIN} {y} Td ({}) Tj ET",
        escape_text(REPORT_TITLE)
    );

    y = PAGE_HEIGHT - 100;
    for (label, value) in summary.rows() {
        let line = format!("{label}: {value}");
        let _ = writeln!(
            content,
            "BT /F2 {BODY_SIZE} Tf {LEFT_MARGIN} {y} Td ({}) Tj ET",
            escape_text(&line)
        );
        y -= LINE_STEP;
    }
    content
}

/// Escape a literal string operand
fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '(' | ')') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Sequential object writer that records byte offsets for the xref table
struct PdfWriter {
    buf: Vec<u8>,
    offsets: Vec<usize>,
}

impl PdfWriter {
    fn new() -> Self {
        let mut buf = Vec::new();
        buf.extend_from_slice(b"%PDF-1.4\n");
        Self {
            buf,
            offsets: Vec::new(),
        }
    }

    fn object(&mut self, body: &str) {
        self.offsets.push(self.buf.len());
        let number = self.offsets.len();
        self.buf
            .extend_from_slice(format!("{number} 0 obj\n{body}\nendobj\n").as_bytes());
    }

    fn finish(mut self) -> Vec<u8> {
        let xref_start = self.buf.len();
        let mut tail = format!("xref\n0 {}\n0000000000 65535 f \n", self.offsets.len() + 1);
        for offset in &self.offsets {
            let _ = write!(tail, "{offset:010} 00000 n \n");
        }
        let _ = write!(
            tail,
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_start}\n%%EOF\n",
            self.offsets.len() + 1
        );
        self.buf.extend_from_slice(tail.as_bytes());
        self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::tests::patient;

    fn demo_pdf() -> String {
        let summary = ReportSummary::from_patients(&[
            patient(101, "35", "F", "ANC Due"),
            patient(102, "52", "M", "Diabetic"),
        ]);
        String::from_utf8(render_pdf(&summary)).unwrap()
    }

    #[test]
    fn lays_out_title_and_lines() {
        let pdf = demo_pdf();

        assert!(pdf.starts_with("%PDF-1.4"));
        assert!(pdf.trim_end().ends_with("%%EOF"));
        assert!(pdf.contains("/BaseFont /Helvetica-Bold"));
        assert!(pdf.contains("BT /F1 18 Tf 50 742 Td (ASHA Worker Report) Tj ET"));
        assert!(pdf.contains("BT /F2 12 Tf 50 692 Td (Total Patients: 2) Tj ET"));
        assert!(pdf.contains("BT /F2 12 Tf 50 672 Td (Male Patients: 1) Tj ET"));
        assert!(pdf.contains("BT /F2 12 Tf 50 652 Td (Female Patients: 1) Tj ET"));
        assert!(pdf.contains("BT /F2 12 Tf 50 632 Td (Children \\(under 12\\): 0) Tj ET"));
    }

    #[test]
    fn xref_offsets_point_at_objects() {
        let pdf = demo_pdf();
        let xref = pdf.find("\nxref\n").unwrap() + 1;
        let startxref: usize = pdf
            .rsplit("startxref\n")
            .next()
            .and_then(|tail| tail.lines().next())
            .and_then(|line| line.parse().ok())
            .unwrap();
        assert_eq!(startxref, xref);

        let entries: Vec<usize> = pdf[xref..]
            .lines()
            .skip(3)
            .take(6)
            .map(|line| line[..10].parse().unwrap())
            .collect();
        for (index, offset) in entries.iter().enumerate() {
            assert!(pdf[*offset..].starts_with(&format!("{} 0 obj", index + 1)));
        }
    }

    #[test]
    fn stream_length_matches_content() {
        let pdf = demo_pdf();
        let start = pdf.find("stream\n").unwrap() + "stream\n".len();
        let end = pdf.find("endstream").unwrap();
        let declared: usize = pdf
            .split("/Length ")
            .nth(1)
            .and_then(|rest| rest.split_whitespace().next())
            .and_then(|n| n.parse().ok())
            .unwrap();
        assert_eq!(declared, end - start);
    }
}
