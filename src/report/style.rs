//! HTML rendering for report tables.
//!
//! One self-contained document per table: embedded stylesheet, emphasised
//! header row, alternating row shading. All cell content passes through
//! entity escaping, so scraped text can never inject markup into the
//! report.

use std::fmt::Write as _;

use super::Table;

/// Embedded stylesheet shared by every report document.
const STYLESHEET: &str = "\
body { font-family: Arial, Helvetica, sans-serif; margin: 2em; }
table { border-collapse: collapse; width: 100%; }
caption { caption-side: top; text-align: left; font-size: 1.2em; font-weight: bold; padding-bottom: 0.5em; }
th, td { border: 1px solid #ddd; padding: 8px; text-align: left; vertical-align: top; }
th { background-color: #2f6f4f; color: white; font-weight: bold; }
tr:nth-child(even) { background-color: #f2f2f2; }
tr:hover { background-color: #e8f0ec; }";

/// Render a table as a complete standalone HTML document.
pub fn render_html(table: &Table) -> String {
    let caption = format!("{} — {}", table.name, table.scope.label());
    let mut out = String::with_capacity(1024);

    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    let _ = writeln!(out, "<title>{}</title>", escape(&caption));
    let _ = writeln!(out, "<style>\n{STYLESHEET}\n</style>");
    out.push_str("</head>\n<body>\n<table>\n");
    let _ = writeln!(out, "<caption>{}</caption>", escape(&caption));

    out.push_str("<thead>\n<tr>");
    for column in &table.columns {
        let _ = write!(out, "<th>{}</th>", escape(column));
    }
    out.push_str("</tr>\n</thead>\n<tbody>\n");

    for row in &table.rows {
        out.push_str("<tr>");
        for cell in row {
            let _ = write!(out, "<td>{}</td>", escape(cell));
        }
        out.push_str("</tr>\n");
    }

    out.push_str("</tbody>\n</table>\n</body>\n</html>\n");
    out
}

fn escape(text: &str) -> String {
    html_escape::encode_text(text).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Scope;

    fn table() -> Table {
        Table {
            name: "word_counts",
            scope: Scope::Page("https://a.example/x".into()),
            columns: vec!["Word", "Count"],
            rows: vec![
                vec!["rust".into(), "3".into()],
                vec!["<script>alert(1)</script>".into(), "1".into()],
            ],
        }
    }

    #[test]
    fn renders_complete_document() {
        let html = render_html(&table());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<style>"));
        assert!(html.contains("</html>"));
    }

    #[test]
    fn header_and_rows_present() {
        let html = render_html(&table());
        assert!(html.contains("<th>Word</th><th>Count</th>"));
        assert!(html.contains("<td>rust</td><td>3</td>"));
    }

    #[test]
    fn caption_names_table_and_scope() {
        let html = render_html(&table());
        assert!(html.contains("<caption>word_counts — https://a.example/x</caption>"));
    }

    #[test]
    fn cell_content_is_escaped() {
        let html = render_html(&table());
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn empty_table_still_renders_headers() {
        let mut t = table();
        t.rows.clear();
        let html = render_html(&t);
        assert!(html.contains("<th>Word</th>"));
        assert!(html.contains("<tbody>\n</tbody>"));
    }
}
