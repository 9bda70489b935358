//! CSV export of filtered communications.
//!
//! Fields are joined with bare commas and no quoting, so a comma inside
//! notes or a company name shifts columns. Consumers needing strict CSV
//! should not rely on this format.

use crate::model::communication::Communication;
use crate::model::company::Company;

pub const CSV_HEADER: &str = "date,company,type,notes";

/// Renders `date,company,type,notes` rows, newline-joined with a header.
///
/// Dangling company ids render an empty company column.
pub fn export_csv(filtered: &[&Communication], companies: &[Company]) -> String {
    let mut lines = Vec::with_capacity(filtered.len() + 1);
    lines.push(CSV_HEADER.to_string());

    for comm in filtered {
        let company = companies
            .iter()
            .find(|company| company.id == comm.company_id)
            .map_or("", |company| company.name.as_str());
        lines.push(format!(
            "{},{},{},{}",
            comm.date.format("%Y-%m-%d"),
            company,
            comm.kind.label(),
            comm.notes.as_deref().unwrap_or_default()
        ));
    }

    lines.join("\n")
}
