//! List command report data structures.

use super::output::{Output, Report};

/// Record types of one catalog.
#[derive(Debug)]
pub struct ListReport {
    pub package: String,
    pub version: Option<String>,
    pub records: Vec<RecordSummary>,
}

#[derive(Debug)]
pub struct RecordSummary {
    pub fqn: String,
    /// Own fields, without inherited ones.
    pub fields: usize,
    pub parents: usize,
}

impl Report for ListReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.version {
            Some(version) => out.key_value("Package", &format!("{} v{}", self.package, version)),
            None => out.key_value("Package", &self.package),
        }
        out.newline();

        if self.records.is_empty() {
            out.preformatted("No record types");
            return;
        }

        out.section(&format!("Records ({})", self.records.len()));
        for record in &self.records {
            let extends = match record.parents {
                0 => String::new(),
                n => format!(", extends {n}"),
            };
            out.list_item(&format!("{} ({} fields{})", record.fqn, record.fields, extends));
        }
    }
}
