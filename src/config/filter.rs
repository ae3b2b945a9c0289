// Path filter module
// Builds the router filter predicate from the [router] section

use super::RouterConfig;

/// Rejection rules applied to normalized logical paths
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathFilter {
    deny_prefixes: Vec<String>,
    deny_traversal: bool,
}

impl PathFilter {
    pub const fn new(deny_prefixes: Vec<String>, deny_traversal: bool) -> Self {
        Self {
            deny_prefixes,
            deny_traversal,
        }
    }

    /// True when `path` must not be routed
    pub fn rejects(&self, path: &str) -> bool {
        if self.deny_traversal && path.split('/').any(|segment| segment == "..") {
            return true;
        }
        self.deny_prefixes
            .iter()
            .any(|prefix| path.starts_with(prefix.as_str()))
    }
}

impl RouterConfig {
    pub fn path_filter(&self) -> PathFilter {
        PathFilter::new(self.deny_prefixes.clone(), self.deny_traversal)
    }
}
