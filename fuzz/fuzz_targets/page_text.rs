#![no_main]

use libfuzzer_sys::fuzz_target;

use furniscrape::dictionary::Dictionaries;
use furniscrape::extractor::{accept, select_items};
use furniscrape::fetcher::paragraph_text;
use furniscrape::model::Entity;

fuzz_target!(|data: &[u8]| {
    let html = String::from_utf8_lossy(data);
    let text = paragraph_text(&html);

    let dictionaries = Dictionaries::new(
        vec!["chair".to_string(), "table".to_string(), "sofa".to_string()],
        vec!["furniture".to_string()],
        vec!["seat".to_string()],
    );

    // Every paragraph span becomes a candidate; survivors must pass the filter.
    let entities = text
        .split('.')
        .map(|span| Entity::new(span, "chair", 0.5));
    let items = select_items(entities, &dictionaries);

    assert!(items.windows(2).all(|pair| pair[0] < pair[1]));
    assert!(items.iter().all(|item| accept(item, &dictionaries)));
});
