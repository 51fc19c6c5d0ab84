// Record-file CSV parsing
use crate::model::{ParserError, RawRow};
use csv::ReaderBuilder;

pub trait RowParser {
    fn parse(&self, input: &str) -> Result<Vec<RawRow>, ParserError>;
}

pub struct CsvRowParser;

impl CsvRowParser {
    pub fn new() -> Self {
        Self
    }
}

impl RowParser for CsvRowParser {
    /// Parses CSV text into ordered rows keyed by the first line's
    /// headers. Rows whose every field is blank are skipped; rows
    /// shorter or longer than the header row are tolerated.
    fn parse(&self, input: &str) -> Result<Vec<RawRow>, ParserError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(input.as_bytes());

        let headers = reader.headers()?.clone();
        if headers.is_empty() {
            return Err(ParserError::MissingHeaders);
        }

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            if record.iter().all(|field| field.trim().is_empty()) {
                continue;
            }
            let pairs = headers
                .iter()
                .zip(record.iter())
                .map(|(header, field)| (header.to_string(), field.to_string()))
                .collect();
            rows.push(RawRow::from_pairs(pairs));
        }
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_headers_and_rows_in_order() {
        let input = "county,pdf_url\nEssex,https://x/a.pdf\nSuffolk,\n";
        let rows = CsvRowParser::new().parse(input).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("county"), Some("Essex"));
        assert_eq!(rows[0].get("pdf_url"), Some("https://x/a.pdf"));
        assert_eq!(rows[1].get("county"), Some("Suffolk"));
        assert_eq!(rows[1].get("pdf_url"), Some(""));
    }

    #[test]
    fn skips_blank_rows() {
        let input = "county,pdf_url\nEssex,https://x/a.pdf\n,\n\nSuffolk,https://x/b.pdf\n";
        let rows = CsvRowParser::new().parse(input).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].get("county"), Some("Suffolk"));
    }

    #[test]
    fn tolerates_short_rows() {
        let input = "county,pdf_url\nEssex\n";
        let rows = CsvRowParser::new().parse(input).unwrap();
        assert_eq!(rows[0].get("county"), Some("Essex"));
        assert_eq!(rows[0].get("pdf_url"), None);
    }

    #[test]
    fn preserves_header_spelling() {
        let input = "County,PDF Link\nNorfolk,https://x/c.pdf\n";
        let rows = CsvRowParser::new().parse(input).unwrap();
        assert_eq!(rows[0].get("County"), Some("Norfolk"));
        assert_eq!(rows[0].get("county"), None);
        assert_eq!(rows[0].get("PDF Link"), Some("https://x/c.pdf"));
    }

    #[test]
    fn empty_input_is_missing_headers() {
        let err = CsvRowParser::new().parse("").unwrap_err();
        assert!(matches!(err, ParserError::MissingHeaders));
    }
}
