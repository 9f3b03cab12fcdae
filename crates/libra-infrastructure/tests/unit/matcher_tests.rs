//! URL Pattern Matcher Tests

use libra_infrastructure::auth::UrlPatternMatcher;

fn matches(path: &str, pattern: &str) -> bool {
    UrlPatternMatcher::matches(path, pattern)
}

#[test]
fn test_reference_cases() {
    assert!(matches("/api/books/7", "/api/books/**"));
    assert!(matches("/api/books", "/api/books/**"));
    assert!(matches("/api/books/7", "/api/books/{id}"));
    assert!(!matches("/api/books/7/extra", "/api/books/{id}"));
    assert!(matches("/api/books", "/api/books"));
    assert!(!matches("/api/books/7", "/api/books"));
}

#[test]
fn test_wildcard_respects_segment_boundary() {
    assert!(matches("/api/books/7/chapters/2", "/api/books/**"));
    assert!(matches("/api/books/", "/api/books/**"));
    assert!(!matches("/api/booksX", "/api/books/**"));
    assert!(!matches("/api/book", "/api/books/**"));
    assert!(!matches("/api", "/api/books/**"));
}

#[test]
fn test_root_wildcard_matches_every_absolute_path() {
    assert!(matches("/", "/**"));
    assert!(matches("/anything/at/all", "/**"));
    assert!(!matches("relative", "/**"));
}

#[test]
fn test_named_segments() {
    assert!(matches("/api/books/7/delete", "/api/books/{id}/delete"));
    assert!(!matches("/api/books/7/remove", "/api/books/{id}/delete"));
    assert!(!matches("/api/books//delete", "/api/books/{id}/delete"));
    assert!(!matches("/api/books/", "/api/books/{id}"));
    assert!(!matches("/api/books", "/api/books/{id}"));
    assert!(matches("/users/3/books/9", "/users/{uid}/books/{bid}"));
}

#[test]
fn test_named_segments_under_wildcard() {
    assert!(matches("/api/users/3/books/9", "/api/users/{id}/**"));
    assert!(matches("/api/users/3", "/api/users/{id}/**"));
    assert!(!matches("/api/users", "/api/users/{id}/**"));
}

#[test]
fn test_literal_patterns_are_not_regex() {
    assert!(!matches("/api/booksX", "/api/books."));
    assert!(!matches("/api/b", "/api/[a-z]"));
    assert!(matches("/api/[a-z]", "/api/[a-z]"));
}

#[test]
fn test_exact_match_takes_precedence() {
    assert!(matches("/api/{id}", "/api/{id}"));
    assert!(matches("/api/**", "/api/**"));
}
