use super::*;

#[test]
fn test_len_and_emptiness() {
    let span = Span::new(4, 9);
    assert_eq!(span.len(), 5);
    assert!(!span.is_empty());
    assert!(Span::point(42).is_empty());
    assert_eq!(Span::point(42).to_range(), 42..42);
}

#[test]
fn test_cover_is_order_independent() {
    let class_kw = Span::new(0, 5);
    let body = Span::new(12, 14);
    assert_eq!(class_kw.cover(body), Span::new(0, 14));
    assert_eq!(body.cover(class_kw), Span::new(0, 14));
    assert_eq!(body.cover(Span::new(12, 13)), body);
}

#[test]
fn test_touches_only_when_adjacent() {
    // `>>` is lexed as two adjacent `>` tokens.
    assert!(Span::new(3, 4).touches(Span::new(4, 5)));
    assert!(!Span::new(3, 4).touches(Span::new(5, 6)));
}

#[test]
fn test_formatting() {
    let span = Span::new(100, 200);
    assert_eq!(format!("{span:?}"), "100..200");
    assert_eq!(span.to_string(), "100..200");
    assert_eq!(Span::default(), Span::DUMMY);
}
