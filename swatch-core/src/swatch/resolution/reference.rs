//! Reference syntax

use once_cell::sync::Lazy;
use regex::Regex;

/// `{dotted.path}` occurrence; group 1 is the path
pub static REFERENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{([^}]+)\}").unwrap());

/// Paths referenced by `text`, in order of occurrence (repeats included)
pub fn reference_targets(text: &str) -> impl Iterator<Item = &str> {
    REFERENCE
        .captures_iter(text)
        .filter_map(|captures| captures.get(1))
        .map(|target| target.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_reference() {
        assert_eq!(reference_targets("{b.c}").collect::<Vec<_>>(), vec!["b.c"]);
    }

    #[test]
    fn test_interleaved_references() {
        let targets: Vec<_> = reference_targets("{space.sm} solid {color.border}").collect();
        assert_eq!(targets, vec!["space.sm", "color.border"]);
    }

    #[test]
    fn test_no_references() {
        assert_eq!(reference_targets("16px").count(), 0);
        assert_eq!(reference_targets("{}").count(), 0);
        assert_eq!(reference_targets("{unterminated").count(), 0);
    }

    #[test]
    fn test_nested_braces_capture_inner_open() {
        assert_eq!(reference_targets("{{a}}").collect::<Vec<_>>(), vec!["{a"]);
    }
}
