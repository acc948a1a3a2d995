//! Tag-based filter policy
//!
//! Severity thresholding lives in `Logger::log` (it needs the level
//! registry); this module owns the per-tag allow/deny decision.

use std::collections::HashSet;

/// Mutable allow/deny state for tag filtering.
///
/// `enable_tag`/`disable_tag` keep a tag out of both sets at once, so a
/// tag's fate is decided by the last call that named it. The sets can
/// still diverge if a caller seeds overlapping initial sets; in that
/// case the deny set wins, because it is checked first.
#[derive(Debug, Clone, Default)]
pub struct FilterPolicy {
    ignore_tags: HashSet<String>,
    accept_tags: HashSet<String>,
    ignore_all: bool,
}

impl FilterPolicy {
    pub fn new(
        ignore_all: bool,
        ignore_tags: HashSet<String>,
        accept_tags: HashSet<String>,
    ) -> Self {
        Self {
            ignore_tags,
            accept_tags,
            ignore_all,
        }
    }

    /// Whether a call carrying `tag` passes the tag filter.
    pub fn admits(&self, tag: &str) -> bool {
        if self.ignore_tags.contains(tag) {
            return false;
        }
        !(self.ignore_all && !self.accept_tags.contains(tag))
    }

    /// Admit `tag` even under global ignore; removes any standing deny.
    pub fn enable_tag(&mut self, tag: &str) {
        self.ignore_tags.remove(tag);
        self.accept_tags.insert(tag.to_string());
    }

    /// Deny `tag` regardless of level; removes any standing accept.
    pub fn disable_tag(&mut self, tag: &str) {
        self.accept_tags.remove(tag);
        self.ignore_tags.insert(tag.to_string());
    }

    /// Apply [`enable_tag`](Self::enable_tag) to each element in order.
    /// No atomicity across the batch.
    pub fn enable_tags<I, S>(&mut self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for tag in tags {
            self.enable_tag(tag.as_ref());
        }
    }

    /// Apply [`disable_tag`](Self::disable_tag) to each element in order.
    pub fn disable_tags<I, S>(&mut self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for tag in tags {
            self.disable_tag(tag.as_ref());
        }
    }

    /// `set_accept_all(true)` clears global ignore; `false` enables it.
    pub fn set_accept_all(&mut self, flag: bool) {
        self.ignore_all = !flag;
    }

    /// Suppress every tag not explicitly accepted.
    pub fn set_ignore_all(&mut self) {
        self.ignore_all = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_admits_everything() {
        let policy = FilterPolicy::default();
        assert!(policy.admits(""));
        assert!(policy.admits("db"));
    }

    #[test]
    fn test_disabled_tag_is_rejected() {
        let mut policy = FilterPolicy::default();
        policy.disable_tag("db");
        assert!(!policy.admits("db"));
        assert!(policy.admits("net"));
    }

    #[test]
    fn test_last_writer_wins_per_tag() {
        let mut policy = FilterPolicy::default();
        policy.disable_tag("db");
        policy.enable_tag("db");
        assert!(policy.admits("db"));
        policy.disable_tag("db");
        assert!(!policy.admits("db"));
    }

    #[test]
    fn test_ignore_all_spares_accepted_tags() {
        let mut policy = FilterPolicy::default();
        policy.enable_tag("keep");
        policy.set_ignore_all();
        assert!(policy.admits("keep"));
        assert!(!policy.admits("drop"));
        assert!(!policy.admits(""));
    }

    #[test]
    fn test_accept_all_clears_global_ignore() {
        let mut policy = FilterPolicy::default();
        policy.set_ignore_all();
        policy.set_accept_all(true);
        assert!(policy.admits("anything"));

        policy.set_accept_all(false);
        assert!(!policy.admits("anything"));
    }

    #[test]
    fn test_batch_operations_apply_in_order() {
        let mut policy = FilterPolicy::default();
        policy.disable_tags(["a", "b", "c"]);
        assert!(!policy.admits("a"));
        assert!(!policy.admits("c"));
        policy.enable_tags(vec!["b".to_string(), "c".to_string()]);
        assert!(!policy.admits("a"));
        assert!(policy.admits("b"));
        assert!(policy.admits("c"));
    }

    #[test]
    fn test_seeded_overlap_deny_wins() {
        let tags: HashSet<String> = ["x".to_string()].into();
        let policy = FilterPolicy::new(false, tags.clone(), tags);
        assert!(!policy.admits("x"));
    }
}
