use ammonia::clean_text;

use crate::web::dtos::ExtractResponse;

const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Furniture Extractor</title>
<style>
body { font-family: sans-serif; max-width: 48rem; margin: 2rem auto; padding: 0 1rem; }
form { display: flex; gap: 0.5rem; }
input[name="url"] { flex: 1; padding: 0.4rem; }
.error { color: #b00020; }
</style>
</head>
<body>
<h1>Furniture Extractor</h1>
"#;

const PAGE_TAIL: &str = "</body>\n</html>\n";

/// Render the single page of the app. Every dynamic string goes through
/// `clean_text`, so page content and error messages cannot inject markup.
pub fn render_page(view: &ExtractResponse) -> String {
    let mut page = String::from(PAGE_HEAD);

    page.push_str(&format!(
        concat!(
            "<form method=\"post\" action=\"/\">\n",
            "<input type=\"text\" name=\"url\" placeholder=\"https://\" value=\"{}\">\n",
            "<button type=\"submit\">Extract</button>\n",
            "</form>\n"
        ),
        clean_text(&view.url)
    ));

    if let Some(error) = &view.error {
        page.push_str(&format!(
            "<p class=\"error\">Error: {}</p>\n",
            clean_text(error)
        ));
    }

    if !view.items.is_empty() {
        page.push_str("<h2>Furniture found</h2>\n<ul class=\"items\">\n");
        for item in &view.items {
            page.push_str(&format!("<li>{}</li>\n", clean_text(item)));
        }
        page.push_str("</ul>\n");
    }

    page.push_str(PAGE_TAIL);
    page
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_form() {
        let page = render_page(&ExtractResponse::default());
        assert!(page.contains("<form method=\"post\""));
        assert!(page.contains("value=\"\""));
        assert!(!page.contains("class=\"error\""));
        assert!(!page.contains("<ul"));
    }

    #[test]
    fn test_items_listed_in_order() {
        let page = render_page(&ExtractResponse::found(
            "https://shop.test",
            vec!["Armchair".to_string(), "Bookcase".to_string()],
        ));
        let first = page.find("<li>Armchair</li>").unwrap();
        let second = page.find("<li>Bookcase</li>").unwrap();
        assert!(first < second);
        assert!(!page.contains("class=\"error\""));
    }

    #[test]
    fn test_error_shown_and_url_echoed() {
        let page = render_page(&ExtractResponse::failed(
            "https://shop.test/a",
            "http error 404 Not Found",
        ));
        assert!(page.contains(&clean_text("http error 404 Not Found")));
        assert!(page.contains(&format!("value=\"{}\"", clean_text("https://shop.test/a"))));
        assert!(!page.contains("<li>"));
    }

    #[test]
    fn test_markup_is_escaped() {
        let page = render_page(&ExtractResponse::found(
            "\"><script>alert(1)</script>",
            vec!["<b>chair</b>".to_string()],
        ));
        assert!(!page.contains("<script>"));
        assert!(!page.contains("<b>"));
        assert!(page.contains("&lt;b&gt;chair"));
    }
}
