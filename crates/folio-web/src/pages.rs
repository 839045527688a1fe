//! HTML page rendering.
//!
//! Pages are assembled as strings around a shared layout; user-supplied
//! text is always escaped before it is echoed back into a form or an
//! error banner.

use std::fmt::Write as _;

/// Escape text for safe embedding in HTML body or attribute position.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title} - folio</title>
<style>
body {{ font-family: Arial, sans-serif; max-width: 900px; margin: 2rem auto; color: #222; }}
nav a {{ margin-right: 1rem; }}
label {{ display: block; margin-top: 0.6rem; }}
input, textarea, select {{ font: inherit; padding: 0.2rem; }}
textarea {{ width: 24rem; height: 6rem; }}
.error {{ color: #b00020; border: 1px solid #b00020; padding: 0.5rem; margin: 0.8rem 0; }}
.result {{ margin-top: 1.2rem; }}
button {{ margin-top: 0.8rem; padding: 0.3rem 1rem; }}
</style>
</head>
<body>
<nav><a href="/">Home</a><a href="/stocks">Backtest</a><a href="/projection">Projection</a></nav>
{body}
</body>
</html>
"#,
        title = escape(title),
    )
}

fn error_banner(error: &Option<String>) -> String {
    match error {
        Some(message) => format!(r#"<div class="error">{}</div>"#, escape(message)),
        None => String::new(),
    }
}

pub fn index_page() -> String {
    layout(
        "Home",
        "<h1>folio</h1>\
         <p>Backtest the value of a portfolio over a historical window, or \
         project future wealth under periodic compounding with contributions.</p>\
         <ul>\
         <li><a href=\"/stocks\">Historical backtest</a></li>\
         <li><a href=\"/projection\">Forward projection</a></li>\
         </ul>",
    )
}

/// Everything the backtest page needs to re-render itself.
#[derive(Debug, Clone, Default)]
pub struct StocksView {
    pub start_date: String,
    pub end_date: String,
    pub holdings: String,
    pub error: Option<String>,
    pub chart: Option<String>,
}

pub fn stocks_page(view: &StocksView) -> String {
    let mut body = String::from("<h1>Historical backtest</h1>");
    body.push_str(&error_banner(&view.error));

    let _ = write!(
        body,
        r#"<form method="post" action="/stocks">
<label>Start date <input type="date" name="start_date" value="{start}"></label>
<label>End date <input type="date" name="end_date" value="{end}"></label>
<label>Holdings, one per line as TICKER AMOUNT
<textarea name="holdings" placeholder="AAPL 1000&#10;MSFT 500">{holdings}</textarea></label>
<button type="submit">Run backtest</button>
</form>"#,
        start = escape(&view.start_date),
        end = escape(&view.end_date),
        holdings = escape(&view.holdings),
    );

    // Chart markup is produced by our own renderer, never user input.
    if let Some(chart) = &view.chart {
        let _ = write!(body, r#"<div class="result">{chart}</div>"#);
    }

    layout("Historical backtest", &body)
}

/// Everything the projection page needs to re-render itself.
#[derive(Debug, Clone, Default)]
pub struct ProjectionView {
    pub start_amount: String,
    pub years: String,
    pub months: String,
    pub annual_return_rate: String,
    pub contribution_amount: String,
    pub contribution_timing: String,
    pub error: Option<String>,
    pub chart: Option<String>,
    pub final_value: Option<f64>,
}

pub fn projection_page(view: &ProjectionView) -> String {
    let mut body = String::from("<h1>Forward projection</h1>");
    body.push_str(&error_banner(&view.error));

    let monthly_selected = if view.contribution_timing == "yearly" {
        ("", " selected")
    } else {
        (" selected", "")
    };

    let _ = write!(
        body,
        r#"<form method="post" action="/projection">
<label>Starting amount <input name="start_amount" value="{start}"></label>
<label>Years <input name="years" value="{years}"></label>
<label>Months <input name="months" value="{months}"></label>
<label>Annual return rate (%) <input name="annual_return_rate" value="{rate}"></label>
<label>Contribution amount <input name="contribution_amount" value="{contribution}"></label>
<label>Contribution timing <select name="contribution_timing">
<option value="monthly"{monthly}>Monthly</option>
<option value="yearly"{yearly}>Yearly</option>
</select></label>
<button type="submit">Project</button>
</form>"#,
        start = escape(&view.start_amount),
        years = escape(&view.years),
        months = escape(&view.months),
        rate = escape(&view.annual_return_rate),
        contribution = escape(&view.contribution_amount),
        monthly = monthly_selected.0,
        yearly = monthly_selected.1,
    );

    if let Some(final_value) = view.final_value {
        let _ = write!(
            body,
            r#"<p class="result">Projected final value: <strong>{final_value:.2}</strong></p>"#
        );
    }
    if let Some(chart) = &view.chart {
        let _ = write!(body, r#"<div class="result">{chart}</div>"#);
    }

    layout("Forward projection", &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_html_metacharacters() {
        assert_eq!(
            escape(r#"<script>"a"&'b'</script>"#),
            "&lt;script&gt;&quot;a&quot;&amp;&#39;b&#39;&lt;/script&gt;"
        );
    }

    #[test]
    fn error_text_is_escaped_into_the_page() {
        let view = StocksView {
            error: Some(String::from("bad <ticker>")),
            ..StocksView::default()
        };
        let page = stocks_page(&view);
        assert!(page.contains("bad &lt;ticker&gt;"));
        assert!(!page.contains("bad <ticker>"));
    }

    #[test]
    fn projection_page_echoes_submitted_values() {
        let view = ProjectionView {
            start_amount: String::from("1000"),
            contribution_timing: String::from("yearly"),
            ..ProjectionView::default()
        };
        let page = projection_page(&view);
        assert!(page.contains(r#"value="1000""#));
        assert!(page.contains(r#"<option value="yearly" selected>"#));
    }
}
