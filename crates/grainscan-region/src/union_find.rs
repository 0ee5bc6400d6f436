//! Disjoint-set forest over provisional labels
//!
//! Index 0 is reserved for background and is never a member of any set.
//! Sets are created in increasing index order, and a union always keeps
//! the smaller root, so every root is the earliest label of its set.

#[derive(Debug, Clone)]
pub(crate) struct DisjointSet {
    parent: Vec<u32>,
}

impl DisjointSet {
    pub(crate) fn new() -> Self {
        Self { parent: vec![0] }
    }

    /// Number of sets created so far (not the number of roots).
    pub(crate) fn len(&self) -> usize {
        self.parent.len() - 1
    }

    /// Create a singleton set and return its index.
    pub(crate) fn make_set(&mut self) -> u32 {
        let id = self.parent.len() as u32;
        self.parent.push(id);
        id
    }

    /// Root of `x`'s set, compressing the path behind it.
    pub(crate) fn find(&mut self, x: u32) -> u32 {
        let mut root = x;
        while self.parent[root as usize] != root {
            root = self.parent[root as usize];
        }
        let mut cur = x;
        while cur != root {
            let next = self.parent[cur as usize];
            self.parent[cur as usize] = root;
            cur = next;
        }
        root
    }

    /// Merge the sets of `a` and `b`, returning the surviving root.
    pub(crate) fn union(&mut self, a: u32, b: u32) -> u32 {
        let ra = self.find(a);
        let rb = self.find(b);
        let (lo, hi) = if ra <= rb { (ra, rb) } else { (rb, ra) };
        self.parent[hi as usize] = lo;
        lo
    }
}
