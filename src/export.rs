use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::record::{CompanyRecord, COLUMNS};

/// Write the header plus one row per record, in order, to `path`.
pub fn write_csv(path: &Path, records: &[CompanyRecord]) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    write_records(file, records).with_context(|| format!("Failed to write {}", path.display()))
}

/// Header is written explicitly so an empty run still produces it.
pub fn write_records<W: Write>(out: W, records: &[CompanyRecord]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(out);

    writer.write_record(COLUMNS)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(records: &[CompanyRecord]) -> String {
        let mut buf = Vec::new();
        write_records(&mut buf, records).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn read_back(csv_text: &str) -> Vec<Vec<String>> {
        csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(csv_text.as_bytes())
            .records()
            .map(|r| r.unwrap().iter().map(str::to_string).collect())
            .collect()
    }

    #[test]
    fn empty_run_writes_header_only() {
        assert_eq!(
            render(&[]),
            "company_name,industry,sector,employees,location,description,social_media\n"
        );
    }

    #[test]
    fn every_row_has_seven_cells_and_no_link() {
        let records = vec![
            CompanyRecord {
                company_name: "Acme".into(),
                detail_link: Some("/Company/acme".into()),
                industry: "Retail".into(),
                ..Default::default()
            },
            CompanyRecord::default(),
        ];
        let text = render(&records);
        assert!(!text.contains("/Company/acme"));

        let rows = read_back(&text);
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| r.len() == 7));
        assert_eq!(rows[1], ["Acme", "Retail", "", "", "", "", ""]);
        assert_eq!(rows[2], ["", "", "", "", "", "", ""]);
    }

    #[test]
    fn quotes_delimiters_and_newlines() {
        let records = vec![CompanyRecord {
            company_name: "Cedar, Pine & \"Sons\"".into(),
            social_media: "Social media 1: a\nSocial media 2: b".into(),
            ..Default::default()
        }];
        let text = render(&records);
        assert!(text.contains("\"Cedar, Pine & \"\"Sons\"\"\""));
        assert!(text.contains("\"Social media 1: a\nSocial media 2: b\""));

        let rows = read_back(&text);
        assert_eq!(rows[1][0], "Cedar, Pine & \"Sons\"");
        assert_eq!(rows[1][6], "Social media 1: a\nSocial media 2: b");
    }

    #[test]
    fn writes_to_named_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("company headquarter dataset.csv");
        write_csv(&path, &[CompanyRecord::default()]).unwrap();
        let rows = read_back(&std::fs::read_to_string(&path).unwrap());
        assert_eq!(rows.len(), 2);
    }
}
