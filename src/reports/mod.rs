//! Aggregate counts over the patient list and their downloadable renderings.

mod csv_report;
mod pdf_report;

pub use csv_report::render_csv;
pub use pdf_report::render_pdf;

use serde::Serialize;

use crate::db::{Patient, Worker};

pub const CSV_FILENAME: &str = "ASHA_Report.csv";
pub const PDF_FILENAME: &str = "ASHA_Report.pdf";
pub const REPORT_TITLE: &str = "ASHA Worker Report";

/// The four counts shown on the reports page and in both exports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReportSummary {
    pub total_patients: usize,
    pub male_patients: usize,
    pub female_patients: usize,
    pub children: usize,
}

impl ReportSummary {
    pub fn from_patients(patients: &[Patient]) -> Self {
        Self {
            total_patients: patients.len(),
            male_patients: patients.iter().filter(|p| p.is_male()).count(),
            female_patients: patients.iter().filter(|p| p.is_female()).count(),
            children: patients.iter().filter(|p| p.is_child()).count(),
        }
    }

    /// Labelled rows in export order
    pub fn rows(&self) -> [(&'static str, usize); 4] {
        [
            ("Total Patients", self.total_patients),
            ("Male Patients", self.male_patients),
            ("Female Patients", self.female_patients),
            ("Children (under 12)", self.children),
        ]
    }
}

/// Counters on the supervisor dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SupervisorStats {
    pub total_asha: usize,
    pub patients_in_sector: usize,
    pub anc_due_this_week: usize,
    pub unresolved_cases: usize,
}

impl SupervisorStats {
    pub fn collect(workers: &[Worker], patients: &[Patient]) -> Self {
        Self {
            total_asha: workers.len(),
            patients_in_sector: patients.len(),
            anc_due_this_week: patients.iter().filter(|p| p.is_anc_due()).count(),
            unresolved_cases: patients.iter().filter(|p| p.is_unresolved()).count(),
        }
    }
}
