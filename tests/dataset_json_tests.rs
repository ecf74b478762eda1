use heatmap_rs::core::Dataset;
use heatmap_rs::HeatmapError;

#[test]
fn wire_months_are_converted_to_zero_indexed() {
    let payload = r#"{
        "baseTemperature": 8.66,
        "monthlyVariance": [
            { "year": 1753, "month": 1, "variance": -1.366 },
            { "year": 1753, "month": 12, "variance": -0.005 }
        ]
    }"#;

    let dataset = Dataset::from_json_str(payload).expect("valid payload");

    assert_eq!(dataset.base_temperature(), 8.66);
    assert_eq!(dataset.records()[0].month, 0);
    assert_eq!(dataset.records()[1].month, 11);
}

#[test]
fn wire_month_outside_one_to_twelve_is_rejected() {
    let payload = r#"{
        "baseTemperature": 8.66,
        "monthlyVariance": [ { "year": 1753, "month": 13, "variance": 0.1 } ]
    }"#;
    assert!(matches!(
        Dataset::from_json_str(payload),
        Err(HeatmapError::Validation(_))
    ));

    let payload = r#"{
        "baseTemperature": 8.66,
        "monthlyVariance": [ { "year": 1753, "month": 0, "variance": 0.1 } ]
    }"#;
    assert!(matches!(
        Dataset::from_json_str(payload),
        Err(HeatmapError::Validation(_))
    ));
}

#[test]
fn missing_fields_are_a_validation_error() {
    let payload = r#"{ "monthlyVariance": [] }"#;
    assert!(matches!(
        Dataset::from_json_str(payload),
        Err(HeatmapError::Validation(_))
    ));

    let payload = r#"{
        "baseTemperature": 8.66,
        "monthlyVariance": [ { "year": 1753, "month": 1 } ]
    }"#;
    assert!(matches!(
        Dataset::from_json_str(payload),
        Err(HeatmapError::Validation(_))
    ));
}

#[test]
fn empty_record_sequence_is_rejected() {
    let payload = r#"{ "baseTemperature": 8.66, "monthlyVariance": [] }"#;
    assert!(matches!(
        Dataset::from_json_str(payload),
        Err(HeatmapError::Validation(_))
    ));
}

#[test]
fn non_numeric_variance_is_rejected() {
    let payload = r#"{
        "baseTemperature": 8.66,
        "monthlyVariance": [ { "year": 1753, "month": 1, "variance": "warm" } ]
    }"#;
    assert!(matches!(
        Dataset::from_json_str(payload),
        Err(HeatmapError::Validation(_))
    ));
}

#[test]
fn record_order_is_preserved_from_the_wire() {
    let payload = r#"{
        "baseTemperature": 1.0,
        "monthlyVariance": [
            { "year": 1999, "month": 3, "variance": 0.5 },
            { "year": 1753, "month": 7, "variance": -0.5 }
        ]
    }"#;

    let dataset = Dataset::from_json_str(payload).expect("valid payload");
    assert_eq!(dataset.records()[0].year, 1999);
    assert_eq!(dataset.records()[1].year, 1753);
    // Year domain is still sorted regardless of wire order.
    assert_eq!(dataset.year_domain(), vec![1753, 1999]);
}
