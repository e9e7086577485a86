use bolt_domain::config::ClientConfig;
use bolt_domain::{CarDraft, CarId, CarRecord, Cents, Feature, FeatureId, OptionId};
use serde_json::json;

#[test]
fn feature_catalog_deserializes_from_backend_shape() {
    let raw = json!([
        {
            "id": 1,
            "name": "Color",
            "options": [
                { "id": 10, "feature_id": 1, "name": "Red", "image": "red.png", "price_in_cents": 0 },
                { "id": 11, "feature_id": 1, "name": "Blue", "image": "blue.png", "price_in_cents": 50000 }
            ]
        },
        { "id": 2, "name": "Spoiler" }
    ]);

    let features: Vec<Feature> = serde_json::from_value(raw).expect("catalog deserialize");
    assert_eq!(features.len(), 2);
    assert_eq!(features[0].first_option().map(|o| o.id), Some(OptionId(10)));
    assert_eq!(features[0].option(OptionId(11)).map(|o| o.price_in_cents), Some(Cents(50_000)));
    assert!(features[1].options.is_empty());
    assert_eq!(features[1].id, FeatureId(2));
}

#[test]
fn car_record_accepts_numeric_id_and_missing_flag() {
    let raw = json!({
        "id": 7,
        "name": "Speedy",
        "options": [
            { "id": 11, "feature_id": 1, "name": "Blue", "price_in_cents": 50000 },
            { "id": 20, "feature_id": 2, "name": "Chrome Rims", "price_in_cents": 125000 }
        ]
    });

    let record: CarRecord = serde_json::from_value(raw).expect("record deserialize");
    assert_eq!(record.id, CarId::new("7"));
    assert_eq!(record.is_convertible, None);
    assert_eq!(record.total_price(), Cents(175_000));
    assert_eq!(record.total_price().to_string(), "$1,750");
}

#[test]
fn car_record_reads_convertible_flag() {
    let raw = json!({ "id": "abc", "name": "Breeze", "isConvertible": true, "options": [] });

    let record: CarRecord = serde_json::from_value(raw).expect("record deserialize");
    assert_eq!(record.id.as_str(), "abc");
    assert_eq!(record.is_convertible, Some(true));
}

#[test]
fn draft_serializes_with_backend_field_names() {
    let draft = CarDraft {
        name: "Speedy".to_owned(),
        option_ids: vec![OptionId(10), OptionId(12)],
        is_convertible: false,
    };

    let value = serde_json::to_value(&draft).expect("draft serialize");
    assert_eq!(value, json!({ "name": "Speedy", "optionIds": [10, 12], "isConvertible": false }));
}

#[test]
fn client_config_defaults_and_overrides() {
    let defaults = ClientConfig::default();
    assert_eq!(defaults.api.base_url, "http://localhost:3001");
    assert_eq!(defaults.api.timeout_secs, 10);
    assert_eq!(defaults.logging.level, "info");
    assert!(defaults.logging.console);

    let raw = json!({
        "api": { "base_url": "https://cars.example.com" },
        "logging": { "level": "debug", "directory": "/tmp/bolt" }
    });
    let cfg: ClientConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.api.base_url, "https://cars.example.com");
    assert_eq!(cfg.api.timeout_secs, 10);
    assert_eq!(cfg.logging.directory, Some(std::path::PathBuf::from("/tmp/bolt")));
}
