//! Slash-delimited path queries over node names.
//!
//! A path such as `/app/db/host` is consumed one segment per tree level and
//! each segment is compared against a node's name only. The first segment
//! names the node the query starts on, so queries are always written from
//! the receiver's own name downwards.

use super::ConfigNode;

/// Result of a path query that found something.
#[derive(Debug, Clone)]
pub enum PathMatch<'a> {
    /// The path ended on the queried node itself.
    Node(&'a ConfigNode),
    /// Matches collected from descendants. May be empty.
    Nodes(Vec<&'a ConfigNode>),
}

impl<'a> PathMatch<'a> {
    pub fn first(&self) -> Option<&'a ConfigNode> {
        match self {
            PathMatch::Node(node) => Some(*node),
            PathMatch::Nodes(nodes) => nodes.first().copied(),
        }
    }

    pub fn into_vec(self) -> Vec<&'a ConfigNode> {
        match self {
            PathMatch::Node(node) => vec![node],
            PathMatch::Nodes(nodes) => nodes,
        }
    }
}

/// Mutable form of [`PathMatch`], returned by [`ConfigNode::children_at_mut`].
#[derive(Debug)]
pub enum PathMatchMut<'a> {
    Node(&'a mut ConfigNode),
    Nodes(Vec<&'a mut ConfigNode>),
}

impl<'a> PathMatchMut<'a> {
    pub fn into_vec(self) -> Vec<&'a mut ConfigNode> {
        match self {
            PathMatchMut::Node(node) => vec![node],
            PathMatchMut::Nodes(nodes) => nodes,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Accumulate {
    /// A child's match list replaces everything gathered so far.
    Replace,
    Union,
}

/// Splits off the first segment. Leading separators are skipped on both
/// the token and the remainder; an empty token yields `None`.
fn split_path(path: &str) -> Option<(&str, &str)> {
    let path = path.trim_start_matches('/');
    let (token, rest) = path.split_once('/').unwrap_or((path, ""));
    if token.is_empty() {
        return None;
    }
    Some((token, rest.trim_start_matches('/')))
}

impl ConfigNode {
    /// Looks up the nodes matching `path`.
    ///
    /// Returns `None` if the first segment is not this node's name,
    /// [`PathMatch::Node`] with `self` if the path has no further segments,
    /// and [`PathMatch::Nodes`] otherwise.
    ///
    /// When several children match and a child contributes a list of its own
    /// matches, that list replaces whatever earlier siblings contributed. So
    /// `/app/db/host` over two `db` children only yields the `host` nodes of
    /// the last `db`. Use [`children_union`](Self::children_union) to collect
    /// every match.
    pub fn children_at(&self, path: &str) -> Option<PathMatch<'_>> {
        self.collect_matches(path, Accumulate::Replace)
    }

    /// Like [`children_at`](Self::children_at), but gathers every matching
    /// descendant in document order.
    pub fn children_union(&self, path: &str) -> Option<PathMatch<'_>> {
        self.collect_matches(path, Accumulate::Union)
    }

    /// First descendant matched by [`children_at`](Self::children_at).
    ///
    /// A path that ends on this node itself yields `None`; only descendant
    /// matches are unwrapped.
    pub fn child_at(&self, path: &str) -> Option<&ConfigNode> {
        match self.children_at(path)? {
            PathMatch::Node(_) => None,
            PathMatch::Nodes(nodes) => nodes.first().copied(),
        }
    }

    /// Mutable counterpart of [`children_at`](Self::children_at), with the
    /// same matching rules.
    pub fn children_at_mut(&mut self, path: &str) -> Option<PathMatchMut<'_>> {
        let (token, rest) = split_path(path)?;
        if self.name() != Some(token) {
            return None;
        }
        if rest.is_empty() {
            return Some(PathMatchMut::Node(self));
        }

        let mut matches = Vec::new();
        for child in &mut self.children {
            match child.children_at_mut(rest) {
                Some(PathMatchMut::Nodes(nodes)) => matches = nodes,
                Some(PathMatchMut::Node(node)) => matches.push(node),
                None => {}
            }
        }
        Some(PathMatchMut::Nodes(matches))
    }

    /// Mutable counterpart of [`child_at`](Self::child_at).
    pub fn child_at_mut(&mut self, path: &str) -> Option<&mut ConfigNode> {
        match self.children_at_mut(path)? {
            PathMatchMut::Node(_) => None,
            PathMatchMut::Nodes(nodes) => nodes.into_iter().next(),
        }
    }

    /// Clears every child of this node if `path` starts with this node's
    /// name and continues below it.
    ///
    /// Only the first segment is checked: `/app/db` on `app` drops all of
    /// `app`'s children, not only the `db` ones.
    pub fn remove_children(&mut self, path: &str) -> &mut Self {
        if let Some((token, rest)) = split_path(path) {
            if self.name() == Some(token) && !rest.is_empty() {
                self.children.clear();
            }
        }
        self
    }

    fn collect_matches(&self, path: &str, mode: Accumulate) -> Option<PathMatch<'_>> {
        let (token, rest) = split_path(path)?;
        if self.name() != Some(token) {
            return None;
        }
        if rest.is_empty() {
            return Some(PathMatch::Node(self));
        }

        let mut matches = Vec::new();
        for child in &self.children {
            match (child.collect_matches(rest, mode), mode) {
                (Some(PathMatch::Nodes(nodes)), Accumulate::Replace) => matches = nodes,
                (Some(PathMatch::Nodes(nodes)), Accumulate::Union) => matches.extend(nodes),
                (Some(PathMatch::Node(node)), _) => matches.push(node),
                (None, _) => {}
            }
        }
        Some(PathMatch::Nodes(matches))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(xml: &str) -> ConfigNode {
        let mut node = ConfigNode::unnamed();
        node.init_from_str(xml).unwrap();
        node
    }

    fn sample() -> ConfigNode {
        parse(
            r#"<app>
                <db id="primary"><host>a</host><host>b</host></db>
                <cache/>
                <db id="replica"><host>c</host></db>
            </app>"#,
        )
    }

    fn values(matched: PathMatch<'_>) -> Vec<&str> {
        matched
            .into_vec()
            .into_iter()
            .map(|n| n.value().unwrap_or_default())
            .collect()
    }

    #[test]
    fn test_split_path() {
        assert_eq!(split_path("/app/db"), Some(("app", "db")));
        assert_eq!(split_path("app"), Some(("app", "")));
        assert_eq!(split_path("//app//db/"), Some(("app", "db/")));
        assert_eq!(split_path("/"), None);
        assert_eq!(split_path(""), None);
    }

    #[test]
    fn test_terminal_match_returns_self() {
        let root = sample();

        match root.children_at("/app") {
            Some(PathMatch::Node(node)) => assert!(node.identity_eq(&root)),
            other => panic!("expected terminal match, got {other:?}"),
        }
    }

    #[test]
    fn test_direct_children_are_collected() {
        let root = sample();
        let dbs = root.children_at("/app/db").unwrap().into_vec();

        let ids: Vec<_> = dbs.iter().map(|n| n.attribute("id").unwrap()).collect();
        assert_eq!(ids, ["primary", "replica"]);
    }

    #[test]
    fn test_last_list_replaces_earlier_matches() {
        let root = sample();

        assert_eq!(values(root.children_at("/app/db/host").unwrap()), ["c"]);
    }

    #[test]
    fn test_union_collects_all_matches() {
        let root = sample();

        assert_eq!(
            values(root.children_union("/app/db/host").unwrap()),
            ["a", "b", "c"]
        );
    }

    #[test]
    fn test_non_matching_root_segment() {
        let root = sample();

        assert!(root.children_at("/other").is_none());
        assert!(root.children_at("/other/db").is_none());
        assert!(root.child_at("/other/db").is_none());
    }

    #[test]
    fn test_no_matching_children_is_empty_list() {
        let root = sample();

        match root.children_at("/app/missing") {
            Some(PathMatch::Nodes(nodes)) => assert!(nodes.is_empty()),
            other => panic!("expected empty list, got {other:?}"),
        }
        assert!(root.child_at("/app/missing").is_none());
    }

    #[test]
    fn test_child_at_returns_first() {
        let root = sample();

        assert_eq!(root.child_at("/app/db").unwrap().attribute("id"), Some("primary"));
        assert!(root.child_at("/app").is_none());
        assert!(root.children_at("/app").unwrap().first().unwrap().identity_eq(&root));
    }

    #[test]
    fn test_child_at_mut_edits_nested_node() {
        let mut root = sample();

        root.child_at_mut("/app/db")
            .unwrap()
            .set_attribute("port", "5432")
            .add_child_with_name_and_value("host", "d");

        let primary = root.child_at("/app/db").unwrap();
        assert_eq!(primary.attribute("port"), Some("5432"));
        assert_eq!(primary.children().len(), 3);
        assert!(root.child_at_mut("/app").is_none());
    }

    #[test]
    fn test_children_at_mut_follows_replace_rule() {
        let mut root = sample();

        for host in root.children_at_mut("/app/db/host").unwrap().into_vec() {
            host.set_value(Some("patched".into()));
        }

        assert_eq!(
            values(root.children_union("/app/db/host").unwrap()),
            ["a", "b", "patched"]
        );
    }

    #[test]
    fn test_remove_children_is_blunt() {
        let mut root = sample();
        root.remove_children("/app/db");

        assert!(!root.has_children());
    }

    #[test]
    fn test_remove_children_ignores_terminal_and_foreign_paths() {
        let mut root = sample();
        root.remove_children("/app").remove_children("/other/db");

        assert_eq!(root.children().len(), 3);
    }
}
