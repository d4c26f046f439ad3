use moodflag_domain::record::SubmissionRecord;
use std::fmt;

/// Column header of the answers table.
pub const TABLE_TITLE: &str = "Your Data";

/// Two-column `key | answer` view of a record.
#[derive(Debug, Clone, Copy)]
pub struct RecordTable<'a>(pub &'a SubmissionRecord);

impl fmt::Display for RecordTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key_width = self.0.entries().map(|(key, _)| key.len()).max().unwrap_or_default();
        let value_width = self
            .0
            .entries()
            .map(|(_, value)| value.len())
            .chain([TABLE_TITLE.len()])
            .max()
            .unwrap_or_default();

        writeln!(f, "{:key_width$} | {TABLE_TITLE}", "")?;
        writeln!(f, "{:-<key_width$}-+-{:-<value_width$}", "", "")?;
        for (key, value) in self.0.entries() {
            writeln!(f, "{key:<key_width$} | {value}")?;
        }
        Ok(())
    }
}

/// Renders the "Your Data" table shown before submission.
#[must_use]
pub fn render_record(record: &SubmissionRecord) -> String {
    RecordTable(record).to_string()
}
