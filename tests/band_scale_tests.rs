use heatmap_rs::core::BandScale;

#[test]
fn bandwidth_reserves_outer_padding_on_both_sides() {
    let scale = BandScale::build([2000, 2001, 2002, 2003], 100.0, 0.05).expect("valid scale");

    assert!((scale.bandwidth() - 22.5).abs() <= 1e-9);
    let first = scale.position(2000).expect("first band");
    assert!((first - 5.0).abs() <= 1e-9);
}

#[test]
fn adjacent_bands_are_contiguous_and_non_overlapping() {
    let years = [1753, 1754, 1755, 1760, 1761];
    let scale = BandScale::build(years, 1070.0, 0.05).expect("valid scale");

    let positions: Vec<f64> = years
        .iter()
        .map(|year| scale.position(*year).expect("in-domain year"))
        .collect();

    for pair in positions.windows(2) {
        assert!(pair[0] + scale.bandwidth() <= pair[1] + 1e-9);
    }
}

#[test]
fn month_scale_uses_fixed_calendar_domain() {
    let scale = BandScale::months(120.0).expect("month scale");

    assert_eq!(scale.len(), 12);
    assert!((scale.bandwidth() - 10.0).abs() <= 1e-9);
    assert_eq!(scale.position(0).expect("january"), 0.0);
    assert!((scale.position(11).expect("december") - 110.0).abs() <= 1e-9);
}

#[test]
fn cloned_scale_maps_identically() {
    let scale = BandScale::build([2000, 2001, 2002], 300.0, 0.05).expect("valid scale");
    let clone = scale.clone();

    assert_eq!(clone.bandwidth(), scale.bandwidth());
    for year in [2000, 2001, 2002] {
        assert_eq!(
            clone.position(year).expect("in-domain year"),
            scale.position(year).expect("in-domain year")
        );
    }
}

#[test]
fn out_of_domain_lookup_is_a_domain_error() {
    let scale = BandScale::build([1900, 1901], 200.0, 0.0).expect("valid scale");

    let result = scale.position(1950);
    assert!(matches!(
        result,
        Err(heatmap_rs::HeatmapError::Domain(_))
    ));
}

#[test]
fn empty_domain_is_rejected() {
    let result = BandScale::<i32>::build([], 100.0, 0.05);
    assert!(result.is_err());
}

#[test]
fn duplicate_domain_values_are_rejected() {
    let result = BandScale::build([1900, 1900], 100.0, 0.0);
    assert!(result.is_err());
}

#[test]
fn invalid_range_and_padding_are_rejected() {
    assert!(BandScale::build([1], 0.0, 0.05).is_err());
    assert!(BandScale::build([1], f64::NAN, 0.05).is_err());
    assert!(BandScale::build([1], 100.0, 0.5).is_err());
    assert!(BandScale::build([1], 100.0, -0.1).is_err());
}
