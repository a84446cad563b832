//! Tests for query spec serialization

use super::*;

// ============================================================================
// Parameter Serialization Tests
// ============================================================================

#[test]
fn test_empty_spec_serializes_to_no_params() {
    let params = QuerySpec::new().to_params();
    assert!(params.is_empty());
}

#[test]
fn test_lists_are_comma_joined_in_order() {
    let params = QuerySpec::new()
        .cols(["date_stamp", "deaths:sum(cnt_death)"])
        .order_by(["date_stamp"])
        .to_params();

    assert_eq!(
        params.get("cols").map(String::as_str),
        Some("date_stamp,deaths:sum(cnt_death)")
    );
    assert_eq!(params.get("orderby").map(String::as_str), Some("date_stamp"));
}

#[test]
fn test_empty_list_is_omitted() {
    let params = QuerySpec::new().cols(Vec::<String>::new()).to_params();
    assert!(!params.contains_key("cols"));
}

#[test]
fn test_filters_use_where_parameter_name() {
    let params = QuerySpec::new()
        .filter(["date_stamp>=2020-03-01", "cnt_death>0"])
        .to_params();

    assert_eq!(
        params.get("where").map(String::as_str),
        Some("date_stamp>=2020-03-01,cnt_death>0")
    );
    assert!(!params.contains_key("filters"));
}

#[test]
fn test_flags_only_serialized_when_set() {
    let params = QuerySpec::new().to_params();
    assert!(!params.contains_key("metadata"));
    assert!(!params.contains_key("inject"));
    assert!(!params.contains_key("count"));
    assert!(!params.contains_key("totals"));

    let params = QuerySpec::new()
        .metadata(true)
        .inject(false)
        .count(true)
        .totals(false)
        .to_params();
    assert_eq!(params.get("metadata").map(String::as_str), Some("true"));
    assert_eq!(params.get("inject").map(String::as_str), Some("false"));
    assert_eq!(params.get("count").map(String::as_str), Some("true"));
    assert_eq!(params.get("totals").map(String::as_str), Some("false"));
}

#[test]
fn test_numeric_options_are_decimal() {
    let params = QuerySpec::new().col_limit(1000).col_offset(0).to_params();
    assert_eq!(params.get("collimit").map(String::as_str), Some("1000"));
    assert_eq!(params.get("coloffset").map(String::as_str), Some("0"));
}

#[test]
fn test_row_window_is_not_serialized() {
    let params = QuerySpec::new().limit(100).offset(50).to_params();
    assert!(!params.contains_key("limit"));
    assert!(!params.contains_key("offset"));
}

#[test]
fn test_format_hint() {
    let params = QuerySpec::new().format("mtna_simple").to_params();
    assert_eq!(params.get("format").map(String::as_str), Some("mtna_simple"));
}

#[test]
fn test_tabulate_options() {
    let params = QuerySpec::new()
        .dims(["date_stamp", "sex"])
        .measure(["deaths:sum(cnt_death)"])
        .totals(true)
        .to_params();

    assert_eq!(params.get("dims").map(String::as_str), Some("date_stamp,sex"));
    assert_eq!(
        params.get("measure").map(String::as_str),
        Some("deaths:sum(cnt_death)")
    );
    assert_eq!(params.get("totals").map(String::as_str), Some("true"));
}

// ============================================================================
// Flag Semantics Tests
// ============================================================================

#[test]
fn test_wants_metadata_defaults_on() {
    assert!(QuerySpec::new().wants_metadata());
    assert!(QuerySpec::new().metadata(true).wants_metadata());
    assert!(!QuerySpec::new().metadata(false).wants_metadata());
}

#[test]
fn test_wants_count_defaults_off() {
    assert!(!QuerySpec::new().wants_count());
    assert!(!QuerySpec::new().count(false).wants_count());
    assert!(QuerySpec::new().count(true).wants_count());
}

// ============================================================================
// Validation Tests
// ============================================================================

#[test]
fn test_zero_column_limit_is_usage_error() {
    let err = QuerySpec::new().col_limit(0).validate().unwrap_err();
    assert!(matches!(err, crate::Error::Usage { .. }));

    assert!(QuerySpec::new().col_limit(1).validate().is_ok());
    assert!(QuerySpec::new().validate().is_ok());
}

#[test]
fn test_zero_row_limit_is_allowed() {
    // A row limit of zero is a valid request for "no rows".
    assert!(QuerySpec::new().limit(0).validate().is_ok());
}
