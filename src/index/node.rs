use std::collections::HashMap;
use crate::index::matches::MatchId;

/// A node in the trie, keyed by one normalized character per level
#[derive(Debug, Default)]
pub struct TrieNode {
    depth: usize,
    matches: Vec<MatchId>,
    children: HashMap<char, TrieNode>,
}

impl TrieNode {
    pub fn new(depth: usize) -> Self {
        TrieNode {
            depth,
            matches: Vec::new(),
            children: HashMap::new(),
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Matches whose key starts with the path to this node
    pub fn matches(&self) -> &[MatchId] {
        &self.matches
    }

    pub fn push_match(&mut self, id: MatchId) {
        self.matches.push(id);
    }

    pub fn child(&self, c: char) -> Option<&TrieNode> {
        self.children.get(&c)
    }

    pub fn child_or_insert(&mut self, c: char) -> &mut TrieNode {
        let depth = self.depth + 1;
        self.children.entry(c).or_insert_with(|| TrieNode::new(depth))
    }

    /// Nodes in this subtree, this one included
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.values());
        }
        count
    }
}

// The derived drop glue recurses once per level, which overflows the stack
// on long keys. Detach children onto a heap stack instead.
impl Drop for TrieNode {
    fn drop(&mut self) {
        let mut stack: Vec<TrieNode> = self.children.drain().map(|(_, child)| child).collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.children.drain().map(|(_, child)| child));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn children_are_one_level_deeper() {
        let mut root = TrieNode::new(0);
        let child = root.child_or_insert('a').child_or_insert('b');
        assert_eq!(child.depth(), 2);
        assert_eq!(root.node_count(), 3);
        assert!(root.child('a').and_then(|a| a.child('b')).is_some());
        assert!(root.child('b').is_none());
    }

    #[test]
    fn existing_child_is_reused() {
        let mut root = TrieNode::new(0);
        root.child_or_insert('x').push_match(MatchId(0));
        root.child_or_insert('x').push_match(MatchId(1));
        assert_eq!(root.node_count(), 2);
        assert_eq!(root.child('x').map(|x| x.matches().len()), Some(2));
    }

    #[test]
    fn deep_chain_drops_without_overflow() {
        let mut root = TrieNode::new(0);
        let mut node = &mut root;
        for _ in 0..200_000 {
            node = node.child_or_insert('a');
        }
        assert_eq!(node.depth(), 200_000);
        assert_eq!(root.node_count(), 200_001);
        drop(root);
    }
}
