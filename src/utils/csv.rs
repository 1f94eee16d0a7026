//! CSV assembly for export downloads.

/// Builds a complete CSV document from a header and data rows.
pub fn csv_document(header: &[&str], rows: &[Vec<String>]) -> String {
    let mut out = String::new();
    push_row(&mut out, header.iter().copied());
    for row in rows {
        push_row(&mut out, row.iter().map(String::as_str));
    }
    out
}

fn push_row<'a>(buffer: &mut String, fields: impl Iterator<Item = &'a str>) {
    for (idx, field) in fields.enumerate() {
        if idx > 0 {
            buffer.push(',');
        }
        buffer.push_str(&escape_cell(field));
    }
    buffer.push('\n');
}

fn escape_cell(value: &str) -> String {
    let mut sanitized = value.replace('"', "\"\"");
    // Leading =, +, - or @ would be interpreted as a formula by spreadsheet
    // applications opening the export.
    if matches!(sanitized.chars().next(), Some('=' | '+' | '-' | '@')) {
        sanitized.insert(0, '\'');
    }
    format!("\"{}\"", sanitized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_are_quoted_and_joined() {
        let doc = csv_document(&["id", "name"], &[vec!["ab12".into(), "Alice".into()]]);
        assert_eq!(doc, "\"id\",\"name\"\n\"ab12\",\"Alice\"\n");
    }

    #[test]
    fn embedded_quotes_are_doubled() {
        let doc = csv_document(&["name"], &[vec!["say \"hi\"".into()]]);
        assert!(doc.contains("\"say \"\"hi\"\"\""));
    }

    #[test]
    fn formula_prefixes_are_guarded() {
        let doc = csv_document(&["name"], &[vec!["=SUM(A1)".into()]]);
        assert!(doc.contains("\"'=SUM(A1)\""));
    }

    #[test]
    fn commas_stay_inside_the_cell() {
        let doc = csv_document(&["name"], &[vec!["a,b".into()]]);
        assert_eq!(doc.lines().nth(1), Some("\"a,b\""));
    }
}
