//! Server-rendered pages.
//!
//! The widget replaces the whole browser document with the `/process`
//! response body, so the results page is a complete HTML document.

use askama_escape::{escape, Html};
use chrono::Local;

use crate::process::{ProcessOutcome, SourceKind};

/// Render the results page for a successful extraction.
pub fn render_results_page(outcome: &ProcessOutcome) -> String {
    let source_label = match outcome.kind {
        SourceKind::Pdf => format!("PDF · {} page(s)", outcome.page_count),
        SourceKind::Image => "Image".to_string(),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>DocuScan - Results</title>
    <style>
        body {{ font-family: system-ui, sans-serif; margin: 0; background: #f6f7f9; color: #1c1e21; }}
        header {{ background: #1c1e21; color: #fff; padding: 1rem 2rem; }}
        .container {{ max-width: 860px; margin: 2rem auto; padding: 0 1rem; }}
        .meta {{ color: #5f6368; margin-bottom: 1rem; }}
        pre.extracted {{ background: #fff; border: 1px solid #dadce0; border-radius: 8px;
             padding: 1.5rem; white-space: pre-wrap; word-wrap: break-word; }}
        a.back {{ display: inline-block; margin-top: 1.5rem; }}
    </style>
</head>
<body>
    <header><strong>DocuScan</strong></header>
    <div class="container">
        <h1>Extracted Text</h1>
        <p class="meta">{file_name} &middot; {source_label} &middot; processed {timestamp}</p>
        <pre class="extracted">{text}</pre>
        <a class="back" href="/">Process another document</a>
    </div>
</body>
</html>
"#,
        file_name = escape(&outcome.file_name, Html),
        source_label = source_label,
        timestamp = Local::now().format("%Y-%m-%d %H:%M:%S"),
        text = escape(&outcome.text, Html),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(text: &str) -> ProcessOutcome {
        ProcessOutcome {
            file_name: "scan.pdf".into(),
            kind: SourceKind::Pdf,
            page_count: 2,
            text: text.into(),
        }
    }

    #[test]
    fn test_results_page_is_a_full_document() {
        let html = render_results_page(&outcome("hello world"));
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.trim_end().ends_with("</html>"));
        assert!(html.contains("hello world"));
        assert!(html.contains("scan.pdf"));
        assert!(html.contains("2 page(s)"));
    }

    #[test]
    fn test_extracted_text_is_escaped() {
        let html = render_results_page(&outcome("<script>alert(1)</script>"));
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
