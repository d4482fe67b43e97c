use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::distance::Metric;

///A BK-tree over the metric space the edit distance induces on words: every
///child hangs off an edge labeled with its exact distance to the parent, so a
///range query only needs to follow edges within [d - max, d + max] of the
///distance d measured at the current node (triangle inequality). Queries are
///exact, there is no candidate filter that could miss a match.
///
///Slower to query than a [`SigIndex`](crate::SigIndex) on large dictionaries
///but needs no alphabet and no signature width tuning.
pub struct BkTree<M> {
    metric: M,
    root: Option<BkNode>,
    len: usize,
}

struct BkNode {
    word: String,
    children: HashMap<u32, BkNode>,
}

impl BkNode {
    fn new(word: String) -> BkNode {
        BkNode {
            word,
            children: HashMap::new(),
        }
    }
}

impl<M: Metric> BkTree<M> {
    pub fn new(metric: M) -> BkTree<M> {
        BkTree {
            metric,
            root: None,
            len: 0,
        }
    }

    ///Build a tree holding all the given words
    pub fn from_words<I, S>(metric: M, words: I) -> BkTree<M>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut tree = BkTree::new(metric);
        for word in words {
            tree.insert(word);
        }
        tree
    }

    ///Number of distinct words in the tree
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    ///Add a word to the tree. A word already present (distance 0 to an
    ///existing node) is left alone.
    pub fn insert<S: Into<String>>(&mut self, word: S) {
        let word = word.into();
        let BkTree { metric, root, len } = self;
        let mut node = match root {
            Some(node) => node,
            None => {
                *root = Some(BkNode::new(word));
                *len = 1;
                return;
            }
        };
        loop {
            let distance = metric.distance(&node.word, &word);
            if distance == 0 {
                return;
            }
            match node.children.entry(distance) {
                Entry::Occupied(child) => {
                    node = child.into_mut();
                }
                Entry::Vacant(slot) => {
                    slot.insert(BkNode::new(word));
                    *len += 1;
                    return;
                }
            }
        }
    }

    ///Tests whether the exact word is in the tree
    pub fn contains(&self, word: &str) -> bool {
        let mut node = match &self.root {
            Some(node) => node,
            None => return false,
        };
        loop {
            let distance = self.metric.distance(word, &node.word);
            if distance == 0 {
                return true;
            }
            match node.children.get(&distance) {
                Some(child) => node = child,
                None => return false,
            }
        }
    }

    ///All words within max_distance of the query, with their distances, in no
    ///particular order. Traversal is iterative over an explicit stack; at
    ///each node only the child edges the triangle inequality cannot rule out
    ///are followed.
    pub fn search(&self, query: &str, max_distance: u32) -> Vec<(&str, u32)> {
        let mut matches = Vec::new();
        let mut stack: Vec<&BkNode> = self.root.iter().collect();
        while let Some(node) = stack.pop() {
            let distance = self.metric.distance(query, &node.word);
            if distance <= max_distance {
                matches.push((node.word.as_str(), distance));
            }
            let lower = distance.saturating_sub(max_distance);
            let upper = distance.saturating_add(max_distance);
            for (edge, child) in node.children.iter() {
                if *edge >= lower && *edge <= upper {
                    stack.push(child);
                }
            }
        }
        matches
    }
}
