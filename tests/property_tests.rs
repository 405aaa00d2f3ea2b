use nonnull_seq::*;
use quickcheck::{quickcheck, TestResult};
use std::collections::HashSet;

// Concatenation length is the sum of both sides
fn concat_count_is_additive(first: Vec<i32>, second: Vec<i32>) -> bool {
    let expected = first.len() + second.len();
    let lazy_first = from_values(first).map(|x| Some(*x));
    let combined = lazy_first.concat(from_values(second));
    combined.count().unwrap() == expected
}

// Map keeps exactly the present selections, in order
fn map_keeps_present_selections_in_order(input: Vec<Option<u16>>) -> bool {
    let expected: Vec<u16> = input.iter().flatten().copied().collect();
    let mapped = from_values(input).map(|x| *x);
    mapped.to_list().unwrap() == expected
}

// Filter never reorders and never grows
fn filter_is_an_ordered_subset(input: Vec<i8>) -> bool {
    let kept = from_values(input.clone()).filter(|x| *x >= 0).to_list().unwrap();
    kept.len() <= input.len()
        && kept.iter().all(|x| *x >= 0)
        && kept.as_slice() == input.iter().copied().filter(|x| *x >= 0).collect::<Vec<_>>()
}

// Distinct is idempotent and keeps first occurrences
fn distinct_is_idempotent(input: Vec<u8>) -> TestResult {
    if input.len() > 500 {
        return TestResult::discard();
    }
    let once = from_values(input.clone()).distinct().to_list().unwrap();
    let twice = once.clone().distinct().to_list().unwrap();
    if once != twice {
        return TestResult::failed();
    }

    let mut seen = HashSet::new();
    let expected: Vec<u8> = input.into_iter().filter(|x| seen.insert(*x)).collect();
    TestResult::from_bool(once == expected)
}

// Flat-map over present inner sequences yields the concatenation of all of them
fn flat_map_flattens_in_order(rows: Vec<Vec<u8>>) -> bool {
    let expected: Vec<u8> = rows.iter().flatten().copied().collect();
    let flattened = from_values(rows).flat_map(|row| Some(from_values(row.clone())));
    flattened.to_list().unwrap() == expected
}

// Results bridge is a pure pass-through
fn results_bridge_round_trips(input: Vec<i64>) -> bool {
    let source = from_values(input.clone());
    let through: SeqResult<Vec<i64>> = source.results().collect();
    through.unwrap() == input
}

#[test]
fn test_concat_count_is_additive() {
    quickcheck(concat_count_is_additive as fn(Vec<i32>, Vec<i32>) -> bool);
}

#[test]
fn test_map_keeps_present_selections_in_order() {
    quickcheck(map_keeps_present_selections_in_order as fn(Vec<Option<u16>>) -> bool);
}

#[test]
fn test_filter_is_an_ordered_subset() {
    quickcheck(filter_is_an_ordered_subset as fn(Vec<i8>) -> bool);
}

#[test]
fn test_distinct_is_idempotent() {
    quickcheck(distinct_is_idempotent as fn(Vec<u8>) -> TestResult);
}

#[test]
fn test_flat_map_flattens_in_order() {
    quickcheck(flat_map_flattens_in_order as fn(Vec<Vec<u8>>) -> bool);
}

#[test]
fn test_results_bridge_round_trips() {
    quickcheck(results_bridge_round_trips as fn(Vec<i64>) -> bool);
}
