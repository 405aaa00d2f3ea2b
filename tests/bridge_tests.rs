use nonnull_seq::*;

#[test]
fn test_results_yields_every_element_in_order() {
    let doubled = from_values(vec![1, 2, 3]).map(|x| Some(x * 2));
    let collected: SeqResult<Vec<i32>> = doubled.results().collect();
    assert_eq!(collected.unwrap(), vec![2, 4, 6]);
}

#[test]
fn test_results_is_usable_in_for_loops() {
    let mut seen = Vec::new();
    for item in from_values(vec!["foo", "bar"]).results() {
        seen.push(item.unwrap());
    }
    assert_eq!(seen, vec!["foo", "bar"]);
}

#[test]
fn test_results_reports_fault_then_stops() {
    let parsed = from_values(vec!["1", "x", "3"]).try_map(|s| Ok(Some(s.parse::<i32>()?)));
    let mut iter = parsed.results();

    assert_eq!(iter.next(), Some(Ok(1)));
    assert!(matches!(iter.next(), Some(Err(SeqError::Fault(_)))));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next(), None);
}

#[test]
fn test_results_over_absent_sequence() {
    let absent: Option<SeqList<u8>> = None;
    assert_eq!(SequenceExt::results(&absent).count(), 0);
}

#[test]
fn test_not_null_elides_absent_items() {
    let names = vec![None, Some("foo"), None, None, Some("bar"), None].not_null();
    assert_eq!(names.to_list().unwrap(), vec!["foo", "bar"]);
    assert_eq!(names.count().unwrap(), 2);
}

#[test]
fn test_not_null_all_absent_is_empty() {
    let nothing = not_null(vec![None::<i32>, None]);
    assert!(!nothing.any().unwrap());
}

#[test]
fn test_not_null_over_failed_items() {
    let items = not_null(vec![Ok(1), Err(SeqError::Io("broken pipe".to_string())), Ok(3)]);
    let mut cursor = items.cursor();

    assert!(cursor.advance().unwrap());
    assert_eq!(*cursor.current().unwrap(), 1);
    assert_eq!(
        cursor.advance().unwrap_err(),
        SeqError::Io("broken pipe".to_string())
    );
}

#[test]
fn test_not_null_each_cursor_starts_over() {
    let values = not_null([Some(1), None, Some(2)]);
    assert_eq!(values.first().unwrap(), 1);
    assert_eq!(values.last().unwrap(), 2);
    assert_eq!(values.into_inner(), [Some(1), None, Some(2)]);
}

#[test]
fn test_bridge_round_trip_through_iterator_adapters() {
    let source = from_values(vec![1, 2, 3, 4]);
    let windowed: Vec<i32> = source
        .results()
        .filter_map(Result::ok)
        .skip(1)
        .collect();
    let back = not_null(windowed.into_iter().map(Some).collect::<Vec<_>>());
    assert_eq!(back.to_list().unwrap(), vec![2, 3, 4]);
}
