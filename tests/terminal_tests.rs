use nonnull_seq::*;

#[test]
fn test_first() {
    assert_eq!(from_values(vec![4, 5, 6]).first().unwrap(), 4);
    assert_eq!(empty::<i32>().first().unwrap_err(), SeqError::Empty);
}

#[test]
fn test_first_or_default() {
    assert_eq!(empty::<i32>().first_or_default().unwrap(), 0);
    assert_eq!(
        from_values(vec!["x".to_string()]).first_or_default().unwrap(),
        "x"
    );
}

#[test]
fn test_first_where() {
    let values = from_values(vec![1, 3, 4, 5, 6]);
    assert_eq!(values.first_where(|x| x % 2 == 0).unwrap(), 4);
    assert_eq!(values.first_where(|x| *x > 10).unwrap_err(), SeqError::Empty);
    assert_eq!(values.first_or_default_where(|x| *x > 10).unwrap(), 0);
}

#[test]
fn test_last() {
    assert_eq!(from_values(vec![1, 3, 7, 9, 5]).last().unwrap(), 5);
    assert_eq!(empty::<u8>().last().unwrap_err(), SeqError::Empty);
}

#[test]
fn test_last_where() {
    let values = from_values(vec![1, 3, 5, 7, 9]);
    assert_eq!(values.last_where(|x| *x != 7 && *x != 9).unwrap(), 5);
    assert_eq!(values.last_where(|x| *x > 100).unwrap_err(), SeqError::Empty);
}

#[test]
fn test_last_or_default() {
    assert_eq!(empty::<String>().last_or_default().unwrap(), "");
    let values = from_values(vec![2, 4, 8]);
    assert_eq!(values.last_or_default().unwrap(), 8);
    assert_eq!(values.last_or_default_where(|x| *x < 5).unwrap(), 4);
    assert_eq!(values.last_or_default_where(|x| *x > 8).unwrap(), 0);
}

#[test]
fn test_single() {
    assert_eq!(from_values(vec!["only"]).single().unwrap(), "only");
    assert_eq!(empty::<&str>().single().unwrap_err(), SeqError::Empty);
    assert_eq!(
        from_values(vec![1, 2]).single().unwrap_err(),
        SeqError::MoreThanOne
    );
}

#[test]
fn test_single_or_default() {
    assert_eq!(empty::<u32>().single_or_default().unwrap(), 0);
    assert_eq!(from_values(vec![7u32]).single_or_default().unwrap(), 7);
    assert_eq!(
        from_values(vec![1u32, 2]).single_or_default().unwrap_err(),
        SeqError::MoreThanOne
    );
}

#[test]
fn test_single_where() {
    let values = from_values(vec![1, 2, 3, 4]);
    assert_eq!(values.single_where(|x| *x == 3).unwrap(), 3);
    assert_eq!(
        values.single_where(|x| x % 2 == 0).unwrap_err(),
        SeqError::MoreThanOne
    );
    assert_eq!(values.single_or_default_where(|x| *x > 4).unwrap(), 0);
}

#[test]
fn test_single_stops_after_second_element() {
    let pulled = std::cell::Cell::new(0);
    let values = from_values(vec![1, 2, 3, 4, 5]).map(|x| {
        pulled.set(pulled.get() + 1);
        Some(*x)
    });
    assert_eq!(values.single().unwrap_err(), SeqError::MoreThanOne);
    assert_eq!(pulled.get(), 2);
}

#[test]
fn test_element_at() {
    let values = from_values(vec!["a", "b", "c"]);
    assert_eq!(values.element_at(0).unwrap(), "a");
    assert_eq!(values.element_at(2).unwrap(), "c");
    assert_eq!(values.element_at(3).unwrap_err(), SeqError::Empty);
    assert_eq!(values.element_at_or_default(3).unwrap(), "");
}

#[test]
fn test_count() {
    assert_eq!(from_values(vec![1, 2, 3]).count().unwrap(), 3);
    assert_eq!(empty::<i32>().count().unwrap(), 0);
    let odd = from_values(vec![1, 2, 3, 4, 5]).filter(|x| x % 2 == 1);
    assert_eq!(odd.count().unwrap(), 3);
}

#[test]
fn test_count_where() {
    let words = from_values(vec!["foo", "bar", "baz", "zip"]);
    assert_eq!(words.count_where(|w| w.starts_with('b')).unwrap(), 2);
    assert_eq!(words.count_where(|w| w.is_empty()).unwrap(), 0);
}

#[test]
fn test_any() {
    assert!(from_values(vec![1]).any().unwrap());
    assert!(!empty::<i32>().any().unwrap());
    assert!(!from_values(vec![1, 3]).map(|x| (x % 2 == 0).then_some(*x)).any().unwrap());
}

#[test]
fn test_any_where() {
    let values = from_values(vec![1, 2, 3]);
    assert!(values.any_where(|x| *x == 2).unwrap());
    assert!(!values.any_where(|x| *x == 9).unwrap());
}

#[test]
fn test_any_advances_at_most_once() {
    let pulled = std::cell::Cell::new(0);
    let values = from_values(vec![1, 2, 3]).map(|x| {
        pulled.set(pulled.get() + 1);
        Some(*x)
    });
    assert!(values.any().unwrap());
    assert_eq!(pulled.get(), 1);
}

#[test]
fn test_terminal_operations_surface_faults() {
    let faulty = from_values(vec!["1", "oops"]).try_map(|s| Ok(Some(s.parse::<i64>()?)));
    assert_eq!(faulty.first().unwrap(), 1);
    assert!(matches!(faulty.last(), Err(SeqError::Fault(_))));
    assert!(matches!(faulty.count(), Err(SeqError::Fault(_))));
    assert!(matches!(faulty.single(), Err(SeqError::Fault(_))));
}

#[test]
fn test_free_function_forms() {
    let values = from_values(vec![10, 20, 30]);
    assert_eq!(terminal::first(&values).unwrap(), 10);
    assert_eq!(terminal::last(&values).unwrap(), 30);
    assert_eq!(terminal::element_at(&values, 1).unwrap(), 20);
    assert_eq!(terminal::count(&values).unwrap(), 3);
    assert!(terminal::any(&values).unwrap());
}
