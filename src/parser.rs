use crate::columns::RawRow;
use crate::error::LoadError;
use log::warn;
use std::collections::HashMap;

/// Header row plus every data row of a CSV document
#[derive(Debug, Default)]
pub struct ParsedDocument {
    pub headers: Vec<String>,
    pub rows: Vec<RawRow>,
}

/// Parse CSV text using its first line as column headers.
///
/// Blank lines are skipped. Short lines leave the trailing headers absent,
/// extra cells are dropped, and a line that cannot be read is logged and
/// skipped rather than failing the whole document.
pub fn parse_document(text: &str) -> Result<ParsedDocument, LoadError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();

    let mut rows = Vec::new();
    for (line, record) in reader.records().enumerate() {
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                warn!("[Recipes] Skipping unreadable CSV record {}: {}", line + 1, e);
                continue;
            }
        };

        let mut cells: HashMap<String, Option<String>> = HashMap::with_capacity(headers.len());
        for (i, header) in headers.iter().enumerate() {
            // First occurrence of a duplicated header wins
            cells
                .entry(header.clone())
                .or_insert_with(|| record.get(i).map(str::to_string));
        }
        rows.push(RawRow::new(cells));
    }

    Ok(ParsedDocument { headers, rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::columns::Column;

    #[test]
    fn test_parse_header_keyed_rows() {
        let doc = parse_document("Nom de la recette,Type (sucré/salé)\nTarte,sucré\n,salé").unwrap();
        assert_eq!(doc.headers, vec!["Nom de la recette", "Type (sucré/salé)"]);
        assert_eq!(doc.rows.len(), 2);
        assert_eq!(doc.rows[0].get("Nom de la recette"), Some("Tarte"));
        assert_eq!(doc.rows[1].get("Nom de la recette"), Some(""));
        assert_eq!(doc.rows[1].text(Column::Type), "salé");
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let doc = parse_document("Nom de la recette\n\nTarte\n\n\nQuiche\n").unwrap();
        assert_eq!(doc.rows.len(), 2);
        assert_eq!(doc.rows[1].get("Nom de la recette"), Some("Quiche"));
    }

    #[test]
    fn test_short_and_long_rows_are_tolerated() {
        let doc = parse_document("a,b,c\n1\n1,2,3,4\n").unwrap();
        assert_eq!(doc.rows.len(), 2);
        assert_eq!(doc.rows[0].get("a"), Some("1"));
        assert_eq!(doc.rows[0].get("b"), None);
        assert_eq!(doc.rows[1].get("c"), Some("3"));
    }

    #[test]
    fn test_quoted_cells_with_commas_and_newlines() {
        let csv = "Nom de la recette,Instructions (étapes séparées par ;)\n\"Pâtes, sauce\",\"bouillir;\négoutter\"\n";
        let doc = parse_document(csv).unwrap();
        assert_eq!(doc.rows.len(), 1);
        assert_eq!(doc.rows[0].get("Nom de la recette"), Some("Pâtes, sauce"));
        assert_eq!(doc.rows[0].text(Column::Instructions), "bouillir;\négoutter");
    }

    #[test]
    fn test_byte_order_mark_is_stripped() {
        let doc = parse_document("\u{feff}ID,Nom de la recette\n1,Tarte\n").unwrap();
        assert_eq!(doc.headers[0], "ID");
        assert_eq!(doc.rows[0].id(), Some("1"));
    }

    #[test]
    fn test_duplicate_header_keeps_first() {
        let doc = parse_document("x,x\nfirst,second\n").unwrap();
        assert_eq!(doc.rows[0].get("x"), Some("first"));
    }

    #[test]
    fn test_header_only_document() {
        let doc = parse_document("Nom de la recette,ID\n").unwrap();
        assert_eq!(doc.headers.len(), 2);
        assert!(doc.rows.is_empty());
    }
}
