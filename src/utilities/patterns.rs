// Pattern Matching Utilities
// Exclusion patterns applied while scanning a project directory

use std::path::Path;

/// Check if a single path component matches a pattern.
///
/// `*suffix` and `prefix*` match by suffix and prefix; any other pattern
/// must equal the component. Matching is case-insensitive.
pub fn matches_pattern(component: &str, pattern: &str) -> bool {
    let component = component.to_lowercase();
    let pattern = pattern.to_lowercase();

    if let Some(suffix) = pattern.strip_prefix('*') {
        component.ends_with(suffix)
    } else if let Some(prefix) = pattern.strip_suffix('*') {
        component.starts_with(prefix)
    } else {
        component == pattern
    }
}

/// Exclusion patterns for project member discovery
#[derive(Debug, Clone, Default)]
pub struct PatternMatcher {
    patterns: Vec<String>,
}

impl PatternMatcher {
    /// Create a new pattern matcher with the given patterns
    pub fn new(patterns: Vec<String>) -> Self {
        Self { patterns }
    }

    /// True when any component of `path` matches any pattern
    pub fn should_exclude(&self, path: &Path) -> bool {
        path.components().any(|component| {
            let component = component.as_os_str().to_string_lossy();
            self.patterns.iter().any(|p| matches_pattern(&component, p))
        })
    }

    /// Add more patterns
    pub fn extend<I: IntoIterator<Item = String>>(&mut self, patterns: I) {
        self.patterns.extend(patterns);
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffix_and_prefix_patterns() {
        assert!(matches_pattern("model.bak", "*.bak"));
        assert!(matches_pattern("draft_class.pgml", "draft_*"));
        assert!(!matches_pattern("class.pgml", "*.bak"));
    }

    #[test]
    fn test_exact_component_only() {
        let matcher = PatternMatcher::new(vec!["target".to_string()]);

        assert!(matcher.should_exclude(Path::new("target/model.xmi")));
        assert!(matcher.should_exclude(Path::new("nested/TARGET/model.xmi")));
        assert!(!matcher.should_exclude(Path::new("targets/model.xmi")));
    }

    #[test]
    fn test_extend() {
        let mut matcher = PatternMatcher::default();
        matcher.extend(vec!["*~".to_string(), ".git".to_string()]);

        assert_eq!(matcher.patterns().len(), 2);
        assert!(matcher.should_exclude(Path::new(".git/config")));
        assert!(matcher.should_exclude(Path::new("diagrams/class.pgml~")));
        assert!(!matcher.should_exclude(Path::new("diagrams/class.pgml")));
    }
}
