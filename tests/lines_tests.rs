use nonnull_seq::*;
use std::io::{self, BufReader, Read};

fn text(input: &'static str) -> LineSource<io::Cursor<&'static str>> {
    lines(io::Cursor::new(input))
}

#[test]
fn test_empty_stream_has_no_lines() {
    assert_eq!(text("").count().unwrap(), 0);
}

#[test]
fn test_single_line_without_terminator() {
    let source = text("one line");
    assert_eq!(source.to_list().unwrap(), vec!["one line".to_string()]);
}

#[test]
fn test_multiple_lines() {
    assert_eq!(text("foo\nbar\nbaz").count().unwrap(), 3);
}

#[test]
fn test_leading_empty_line_is_an_element() {
    let all = text("\nbar\nbaz").to_list().unwrap();
    assert_eq!(all, vec!["".to_string(), "bar".to_string(), "baz".to_string()]);
}

#[test]
fn test_trailing_terminator_adds_no_line() {
    assert_eq!(text("foo\nbar\n").count().unwrap(), 2);
}

#[test]
fn test_empty_line_in_the_middle() {
    let all = text("foo\n\nbaz").to_list().unwrap();
    assert_eq!(all, vec!["foo".to_string(), "".to_string(), "baz".to_string()]);
}

#[test]
fn test_only_terminators() {
    assert_eq!(text("\n\n").count().unwrap(), 2);
}

#[test]
fn test_source_is_single_pass() {
    let source = text("foo\nbar\nbaz");
    assert!(!source.is_drained());
    assert_eq!(source.count().unwrap(), 3);
    assert!(source.is_drained());
    assert_eq!(source.count().unwrap(), 0);
}

#[test]
fn test_reader_untouched_until_advanced() {
    let source = text("foo\nbar");
    let _cursor = source.cursor();
    assert_eq!(source.first().unwrap(), "foo");
    assert_eq!(source.first().unwrap(), "bar");
}

#[test]
fn test_carriage_return_before_newline_is_trimmed() {
    let source = text("foo\r\nbar\r\n");
    assert_eq!(source.to_list().unwrap(), vec!["foo".to_string(), "bar".to_string()]);
}

#[test]
fn test_lone_carriage_return_ends_a_line() {
    let source = text("foo\rbar\rbaz");
    assert_eq!(
        source.to_list().unwrap(),
        vec!["foo".to_string(), "bar".to_string(), "baz".to_string()]
    );
}

#[test]
fn test_mixed_terminators() {
    let source = text("a\rb\nc\r\nd\r");
    assert_eq!(
        source.to_list().unwrap(),
        vec!["a".to_string(), "b".to_string(), "c".to_string(), "d".to_string()]
    );
}

#[test]
fn test_consecutive_carriage_returns_are_empty_lines() {
    assert_eq!(text("\r\r").count().unwrap(), 2);
    assert_eq!(text("\r\n\r\n").count().unwrap(), 2);
}

#[test]
fn test_crlf_split_across_buffer_refills() {
    let reader = BufReader::with_capacity(4, "abc\r\ndef\r\n".as_bytes());
    let source = reader.to_lines();
    assert_eq!(source.to_list().unwrap(), vec!["abc".to_string(), "def".to_string()]);
}

#[test]
fn test_invalid_utf8_surfaces_as_io_error() {
    let source = lines(io::Cursor::new(vec![b'o', b'k', b'\n', 0xff, 0xfe]));
    let mut cursor = source.cursor();
    assert!(cursor.advance().unwrap());
    assert_eq!(cursor.current().unwrap(), "ok");
    assert!(matches!(cursor.advance(), Err(SeqError::Io(_))));
}

#[test]
fn test_carriage_return_kept_when_configured() {
    let config = LineConfig {
        split_on_carriage_return: false,
        ..LineConfig::default()
    };
    let source = lines_with(io::Cursor::new("foo\r\nbar\rbaz"), config);
    assert_eq!(
        source.to_list().unwrap(),
        vec!["foo\r".to_string(), "bar\rbaz".to_string()]
    );
}

#[test]
fn test_lines_compose_with_adapters() {
    let numbers = BufReader::new("1\n\ntwo\n3\n".as_bytes())
        .to_lines()
        .map(|line| line.parse::<u32>().ok());
    assert_eq!(numbers.to_list().unwrap(), vec![1, 3]);
}

struct BrokenReader;

impl Read for BrokenReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::Other, "device unplugged"))
    }
}

#[test]
fn test_read_failure_surfaces_as_io_error() {
    let source = BufReader::new(BrokenReader).to_lines();
    match source.to_list() {
        Err(SeqError::Io(message)) => assert!(message.contains("device unplugged")),
        other => panic!("expected io error, got {:?}", other),
    }
}
