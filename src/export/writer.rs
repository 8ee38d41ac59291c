// src/export/writer.rs
// =============================================================================
// Turns sorted repository records into CSV bytes.
//
// Cells are escaped here, before they reach the `csv` writer: a cell that is
// quoted gets its inner double quotes doubled, so any description survives a
// round trip through a CSV reader. The description column is always quoted,
// the other columns only when they contain a delimiter, a quote or a line
// break (or every cell, with QuoteStyle::Always).
// =============================================================================

use csv::{Terminator, WriterBuilder};
use std::borrow::Cow;

use super::{Column, ExportError};
use crate::config::QuoteStyle;
use crate::github::RepositoryRecord;

// Orders records by fork count, most forked first
//
// `sort_by` is stable, so repositories with equal fork counts keep the order
// the source returned them in.
pub fn sort_by_forks(records: &mut [RepositoryRecord]) {
    records.sort_by(|a, b| b.forks_count.cmp(&a.forks_count));
}

// Escapes one CSV cell
//
// With `force_quotes` the cell is always wrapped in double quotes. Otherwise
// it is only wrapped when it contains a comma, a double quote or a line
// break. Inside quotes, `"` becomes `""`.
pub fn escape_cell(value: &str, force_quotes: bool) -> Cow<'_, str> {
    let needs_quotes = force_quotes || value.contains([',', '"', '\n', '\r']);
    if !needs_quotes {
        return Cow::Borrowed(value);
    }

    let mut cell = String::with_capacity(value.len() + 2);
    cell.push('"');
    cell.push_str(&value.replace('"', "\"\""));
    cell.push('"');
    Cow::Owned(cell)
}

// Renders the header line followed by one line per record
//
// Every line, the last one included, ends with '\n'.
pub fn render_csv(
    records: &[RepositoryRecord],
    columns: &[Column],
    quote_style: QuoteStyle,
) -> Result<Vec<u8>, ExportError> {
    let quote_all = quote_style == QuoteStyle::Always;

    // Cells arrive already escaped, the writer only joins them
    let mut writer = WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(
        columns
            .iter()
            .map(|column| escape_cell(column.name(), quote_all).into_owned()),
    )?;
    for record in records {
        writer.write_record(columns.iter().map(|column| {
            let force = quote_all || column.always_quoted();
            escape_cell(&column.value(record), force).into_owned()
        }))?;
    }

    writer
        .into_inner()
        .map_err(|e| ExportError::Csv(e.into_error().into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_FIELDS;
    use crate::export::resolve_columns;

    fn render(records: &[RepositoryRecord]) -> String {
        let columns = resolve_columns(&DEFAULT_FIELDS).unwrap();
        String::from_utf8(render_csv(records, &columns, QuoteStyle::Necessary).unwrap()).unwrap()
    }

    fn described(name: &str, forks: u64, description: &str) -> RepositoryRecord {
        let mut record = RepositoryRecord::with_forks(name, forks);
        record.description = Some(description.to_string());
        record
    }

    #[test]
    fn test_sort_descending() {
        let mut records = vec![
            RepositoryRecord::with_forks("a", 5),
            RepositoryRecord::with_forks("b", 10),
        ];
        sort_by_forks(&mut records);
        assert_eq!(records[0].name, "b");
        assert_eq!(records[1].name, "a");
    }

    #[test]
    fn test_sort_keeps_source_order_on_ties() {
        let mut records = vec![
            RepositoryRecord::with_forks("first", 3),
            RepositoryRecord::with_forks("big", 9),
            RepositoryRecord::with_forks("second", 3),
            RepositoryRecord::with_forks("third", 3),
        ];
        sort_by_forks(&mut records);
        let names: Vec<_> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["big", "first", "second", "third"]);
    }

    #[test]
    fn test_escape_cell() {
        assert_eq!(escape_cell("plain", false), "plain");
        assert_eq!(escape_cell("plain", true), "\"plain\"");
        assert_eq!(escape_cell("", true), "\"\"");
        assert_eq!(escape_cell("a,b", false), "\"a,b\"");
        assert_eq!(escape_cell("say \"hi\"", false), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_cell("two\nlines", false), "\"two\nlines\"");
    }

    #[test]
    fn test_no_records_is_just_the_header() {
        assert_eq!(render(&[]), "name,private,description,archived,forks_count\n");
    }

    #[test]
    fn test_default_layout() {
        let output = render(&[described("central-ledger", 92, "Central ledger")]);
        assert_eq!(
            output,
            "name,private,description,archived,forks_count\n\
             central-ledger,false,\"Central ledger\",false,92\n"
        );
    }

    #[test]
    fn test_description_is_always_quote_wrapped() {
        let mut missing = RepositoryRecord::with_forks("b", 1);
        missing.description = None;
        let output = render(&[described("a", 5, "plain"), missing]);

        for row in output.lines().skip(1) {
            let third = row.split(',').nth(2).unwrap();
            assert!(
                third.starts_with('"') && third.ends_with('"'),
                "description not quoted in {}",
                row
            );
        }
        assert!(output.ends_with("b,false,\"\",false,1\n"));
    }

    #[test]
    fn test_description_with_delimiters_is_escaped() {
        let output = render(&[described("docs", 1, "Docs, \"guides\"\nand more")]);
        assert!(output.contains("\"Docs, \"\"guides\"\"\nand more\""));

        let mut reader = csv::Reader::from_reader(output.as_bytes());
        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].len(), 5);
        assert_eq!(&rows[0][0], "docs");
        assert_eq!(&rows[0][2], "Docs, \"guides\"\nand more");
        assert_eq!(&rows[0][4], "1");
    }

    #[test]
    fn test_other_columns_quoted_only_when_needed() {
        let columns = resolve_columns(&["name", "language"]).unwrap();
        let mut record = RepositoryRecord::with_forks("odd,name", 0);
        record.language = Some("Rust".to_string());

        let bytes = render_csv(&[record], &columns, QuoteStyle::Necessary).unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), "name,language\n\"odd,name\",Rust\n");
    }

    #[test]
    fn test_always_quote() {
        let columns = resolve_columns(&["name", "forks_count"]).unwrap();
        let bytes = render_csv(
            &[RepositoryRecord::with_forks("a", 2)],
            &columns,
            QuoteStyle::Always,
        )
        .unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), "\"name\",\"forks_count\"\n\"a\",\"2\"\n");
    }

    #[test]
    fn test_header_follows_configured_fields() {
        let columns = resolve_columns(&["forks_count", "language", "name"]).unwrap();
        let mut record = RepositoryRecord::with_forks("sdk", 4);
        record.language = Some("Rust".to_string());

        let bytes = render_csv(&[record], &columns, QuoteStyle::Necessary).unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "forks_count,language,name\n4,Rust,sdk\n"
        );
    }
}
