use std::sync::Arc;

use crate::dictionary::Dictionaries;
use crate::extractor::{ExtractError, FurnitureExtractor, select_items};
use crate::model::{ENTITY_THRESHOLD, Entity, MockEntityModel, ModelError};

fn dictionaries() -> Dictionaries {
    Dictionaries::new(
        vec!["chair".to_string(), "table".to_string()],
        vec!["stool".to_string()],
        vec!["seat".to_string()],
    )
}

fn entity(text: &str) -> Entity {
    Entity::new(text, "chair", 0.8)
}

fn extractor_returning(entities: Vec<Entity>) -> FurnitureExtractor {
    let mut model = MockEntityModel::new();
    model
        .expect_predict_entities()
        .returning(move |_, _, _| Ok(entities.clone()));
    FurnitureExtractor::new(Some(Arc::new(model)), Arc::new(dictionaries()))
}

#[tokio::test]
async fn test_model_not_loaded() {
    let extractor = FurnitureExtractor::new(None, Arc::new(dictionaries()));

    let err = extractor
        .extract_furniture("An oak table and a leather chair.")
        .await
        .unwrap_err();

    assert!(matches!(err, ExtractError::ModelNotLoaded));
    assert_eq!(err.to_string(), "Model not loaded");
    assert!(!extractor.model_loaded());
}

#[tokio::test]
async fn test_passes_vocabulary_and_threshold_to_model() {
    let mut model = MockEntityModel::new();
    model
        .expect_predict_entities()
        .withf(|text, labels, threshold| {
            text.contains("oak table")
                && labels.len() == 2
                && labels[0] == "chair"
                && labels[1] == "table"
                && (*threshold - ENTITY_THRESHOLD).abs() < f32::EPSILON
        })
        .times(1)
        .returning(|_, _, _| Ok(vec![Entity::new("oak table", "table", 0.7)]));

    let extractor = FurnitureExtractor::new(Some(Arc::new(model)), Arc::new(dictionaries()));
    let items = extractor
        .extract_furniture("We sell an oak table.")
        .await
        .unwrap();

    assert_eq!(items, vec!["oak table"]);
}

#[tokio::test]
async fn test_filters_trims_and_sorts() {
    let extractor = extractor_returning(vec![
        entity("  Office Chair "),
        entity("Seat"),
        entity("So"),
        entity("stool"),
        entity("Lamp"),
        entity("Dining table"),
        entity("armchair"),
    ]);

    let items = extractor.extract_furniture("...").await.unwrap();

    assert_eq!(items, vec!["Dining table", "Office Chair", "armchair"]);
}

#[tokio::test]
async fn test_dedup_is_case_sensitive() {
    let extractor = extractor_returning(vec![
        entity("chair"),
        entity("Chair"),
        entity("chair "),
        entity("Chair"),
    ]);

    let items = extractor.extract_furniture("...").await.unwrap();

    assert_eq!(items, vec!["Chair", "chair"]);
}

#[tokio::test]
async fn test_repeated_extraction_is_stable() {
    let extractor = extractor_returning(vec![
        entity("wooden table"),
        entity("Office Chair"),
        entity("wooden table"),
    ]);

    let first = extractor.extract_furniture("same text").await.unwrap();
    let second = extractor.extract_furniture("same text").await.unwrap();

    assert_eq!(first, second);
    assert_eq!(first, vec!["Office Chair", "wooden table"]);
}

#[tokio::test]
async fn test_model_error_is_surfaced() {
    let mut model = MockEntityModel::new();
    model
        .expect_predict_entities()
        .returning(|_, _, _| Err(ModelError::Request("connection reset by peer".to_string())));
    let extractor = FurnitureExtractor::new(Some(Arc::new(model)), Arc::new(dictionaries()));

    let err = extractor.extract_furniture("text").await.unwrap_err();

    assert!(matches!(err, ExtractError::Model(_)));
    assert_eq!(
        err.to_string(),
        "inference request failed: connection reset by peer"
    );
}

#[tokio::test]
async fn test_no_entities_yields_empty_list() {
    let extractor = extractor_returning(Vec::new());
    let items = extractor.extract_furniture("").await.unwrap();
    assert!(items.is_empty());
}

#[test]
fn test_select_items_upholds_invariant() {
    let dicts = dictionaries();
    let items = select_items(
        ["ab", "STOOL", "seat", "Sofa", "table top", "Chair", "chair"]
            .into_iter()
            .map(entity),
        &dicts,
    );

    assert_eq!(items, vec!["Chair", "chair", "table top"]);
    for item in &items {
        assert!(item.chars().count() >= 3);
        assert!(!dicts.blacklist.contains(&item.to_lowercase()));
        assert!(crate::extractor::is_valid_furniture_term(item, &dicts));
    }
}
