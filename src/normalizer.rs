use crate::model::{RawRow, Record};

// Header spellings seen in published record files, in probe order.
const COUNTY_KEYS: [&str; 3] = ["county", "County", "COUNTY"];
const PDF_KEYS: [&str; 3] = ["pdf_url", "PDF", "PDF Link"];

pub fn normalize_all(rows: &[RawRow]) -> Vec<Record> {
    rows.iter().map(normalize_row).collect()
}

/// Maps one raw row to a canonical record. Each output field takes the
/// first present, non-empty value among its accepted header spellings,
/// falling back to the empty string. Never fails.
pub fn normalize_row(row: &RawRow) -> Record {
    Record {
        county: pick(row, &COUNTY_KEYS),
        pdf_url: pick(row, &PDF_KEYS),
    }
}

fn pick(row: &RawRow, keys: &[&str]) -> String {
    keys.iter()
        .find_map(|key| row.get(key).filter(|value| !value.is_empty()))
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, &str)]) -> RawRow {
        RawRow::from_pairs(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn all_county_spellings_normalize_the_same() {
        for key in ["county", "County", "COUNTY"] {
            let record = normalize_row(&row(&[(key, "Essex"), ("pdf_url", "x")]));
            assert_eq!(record.county, "Essex");
        }
    }

    #[test]
    fn all_link_spellings_normalize_the_same() {
        for key in ["pdf_url", "PDF", "PDF Link"] {
            let record = normalize_row(&row(&[("county", "Essex"), (key, "https://x/y.pdf")]));
            assert_eq!(record.pdf_url, "https://x/y.pdf");
        }
    }

    #[test]
    fn first_non_empty_spelling_wins() {
        let record = normalize_row(&row(&[
            ("county", ""),
            ("County", "Suffolk"),
            ("COUNTY", "Norfolk"),
        ]));
        assert_eq!(record.county, "Suffolk");
    }

    #[test]
    fn missing_fields_become_empty_strings() {
        let record = normalize_row(&row(&[("something_else", "value")]));
        assert_eq!(
            record,
            Record {
                county: String::new(),
                pdf_url: String::new(),
            }
        );
    }

    #[test]
    fn unrecognized_columns_are_ignored() {
        let record = normalize_row(&row(&[
            ("detail_url", "https://x/detail"),
            ("COUNTY", "Plymouth"),
            ("PDF Link", "https://x/doc.pdf"),
        ]));
        assert_eq!(record.county, "Plymouth");
        assert_eq!(record.pdf_url, "https://x/doc.pdf");
    }
}
