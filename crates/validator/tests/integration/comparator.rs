//! Threshold comparison across value kinds.

use chrono::{DateTime, FixedOffset, TimeDelta, Timelike, Utc};
use condval::rules::{TIMESTAMP_FORMAT, is_within_max};
use condval::value::Inspect;
use rstest::rstest;
use std::time::Duration;

#[rstest]
#[case::less_uint64(&9u64, "10", true)]
#[case::equal_int(&10i64, "10", true)]
#[case::great_int(&11i32, "10", false)]
#[case::less_string(&"a", "2", true)]
#[case::equal_string(&"ab", "2", true)]
#[case::great_string(&"abc", "2", false)]
#[case::multibyte_string(&"ñandú", "5", true)]
#[case::duration_expression(&Duration::from_secs(5400), "1h30m", true)]
#[case::duration_nanoseconds(&Duration::from_nanos(10), "9", false)]
fn scalar_thresholds(#[case] value: &dyn Inspect, #[case] literal: &str, #[case] expected: bool) {
    assert_eq!(is_within_max(value.field_value(), literal), expected);
}

#[rstest]
#[case::less_slice(vec![1], true)]
#[case::equal_slice(vec![1, 2], true)]
#[case::great_slice(vec![1, 2, 3], false)]
#[case::empty_slice(vec![], true)]
fn slice_length(#[case] value: Vec<i64>, #[case] expected: bool) {
    assert_eq!(is_within_max(value.field_value(), "2"), expected);
}

fn now_without_nanos() -> DateTime<FixedOffset> {
    let now = Utc::now().with_nanosecond(0).unwrap();
    now.with_timezone(&FixedOffset::east_opt(2 * 3600).unwrap())
}

#[rstest]
#[case::less_date(TimeDelta::hours(1), true)]
#[case::equal_date(TimeDelta::zero(), true)]
#[case::great_date(TimeDelta::hours(-1), false)]
fn timestamps(#[case] shift: TimeDelta, #[case] expected: bool) {
    let at = now_without_nanos();
    let threshold = (at + shift).format(TIMESTAMP_FORMAT).to_string();
    assert_eq!(is_within_max(at.field_value(), &threshold), expected);
}

#[test]
fn timestamp_threshold_in_other_offset() {
    let at = now_without_nanos();
    let threshold = at.with_timezone(&Utc).format("%Y-%m-%dT%H:%M:%S+00:00").to_string();
    assert!(is_within_max(at.field_value(), &threshold));
}

#[test]
fn empty_collection_is_within_but_not_present() {
    let empty: Vec<String> = Vec::new();
    assert!(is_within_max(empty.field_value(), "0"));
    assert!(!condval::rules::is_present(empty.field_value(), &[]));
}
