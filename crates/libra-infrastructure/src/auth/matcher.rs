//! URL pattern matching
//!
//! Three dialects, tried in order:
//! 1. exact equality
//! 2. `/**` suffix: the base itself or anything below it at a segment boundary
//! 3. `{name}` segments: each matches exactly one non-empty segment

const WILDCARD_SUFFIX: &str = "/**";

/// Matches request paths against permission URL patterns
#[derive(Debug, Clone, Copy, Default)]
pub struct UrlPatternMatcher;

impl UrlPatternMatcher {
    /// Whether `path` matches `pattern`
    pub fn matches(path: &str, pattern: &str) -> bool {
        if path == pattern {
            return true;
        }
        if let Some(base) = pattern.strip_suffix(WILDCARD_SUFFIX) {
            return matches_prefix(path, base);
        }
        if pattern.contains('{') {
            return matches_template(path, pattern);
        }
        false
    }
}

fn is_placeholder(segment: &str) -> bool {
    segment.len() > 2 && segment.starts_with('{') && segment.ends_with('}')
}

fn segment_matches(pattern: &str, segment: &str) -> bool {
    if is_placeholder(pattern) {
        !segment.is_empty()
    } else {
        pattern == segment
    }
}

fn matches_prefix(path: &str, base: &str) -> bool {
    if base.is_empty() {
        return path.starts_with('/');
    }

    let mut path_segments = path.split('/');
    base.split('/').all(|pattern| {
        path_segments
            .next()
            .is_some_and(|segment| segment_matches(pattern, segment))
    })
}

fn matches_template(path: &str, pattern: &str) -> bool {
    let mut path_segments = path.split('/');
    let mut pattern_segments = pattern.split('/');
    loop {
        match (pattern_segments.next(), path_segments.next()) {
            (Some(pattern), Some(segment)) if segment_matches(pattern, segment) => {}
            (None, None) => return true,
            _ => return false,
        }
    }
}
