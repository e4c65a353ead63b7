use std::sync::LazyLock;

use encoding_rs::Encoding;
use regex::Regex;

/// Bytes of the document inspected for `<meta>` declarations and sniffing.
const SNIFF_WINDOW: usize = 4096;

static HEADER_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)charset\s*=\s*["']?([^"'\s;]+)"#).expect("valid charset pattern")
});

static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta\s+[^>]*?charset\s*=\s*["']?([^"'\s/>;]+)"#)
        .expect("valid meta charset pattern")
});

/// Decode a response body to UTF-8.
///
/// The encoding comes from the `Content-Type` charset, then a `<meta>`
/// declaration (`charset` or `http-equiv`), then statistical detection.
/// Malformed sequences become U+FFFD instead of failing the fetch.
pub fn decode_body(content_type: Option<&str>, body: &[u8]) -> (String, &'static Encoding) {
    let encoding = sniff_encoding(content_type, body);
    let (decoded, actual, _had_errors) = encoding.decode(body);
    (decoded.into_owned(), actual)
}

fn sniff_encoding(content_type: Option<&str>, body: &[u8]) -> &'static Encoding {
    if let Some(encoding) = content_type.and_then(|ct| label_from(&HEADER_CHARSET, ct)) {
        return encoding;
    }

    let head = &body[..body.len().min(SNIFF_WINDOW)];
    let head_text = String::from_utf8_lossy(head);
    if let Some(encoding) = label_from(&META_CHARSET, &head_text) {
        return encoding;
    }

    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(head, body.len() <= SNIFF_WINDOW);
    detector.guess(None, true)
}

fn label_from(pattern: &Regex, haystack: &str) -> Option<&'static Encoding> {
    let label = pattern.captures(haystack)?.get(1)?.as_str().to_ascii_lowercase();
    Encoding::for_label(label.as_bytes())
}
