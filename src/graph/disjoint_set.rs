/// Union-find over vertex ids `1..=n` with path compression and
/// union-by-size.
///
/// Invariants: `find` always returns a root whose parent is itself, and the
/// `size` entry at a root equals the number of elements in its set.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<u32>,
    size: Vec<u32>,
}

impl DisjointSet {
    pub fn new(n: u32) -> Self {
        let mut parent = vec![0u32; n as usize + 1];
        let mut size = vec![0u32; n as usize + 1];
        for i in 1..=n {
            parent[i as usize] = i;
            size[i as usize] = 1;
        }
        DisjointSet { parent, size }
    }

    /// Representative of the set containing `x`, with full path compression.
    ///
    /// Iterative on purpose: a freshly built set over a path-shaped edge
    /// order can chain deep enough to overflow the stack before the first
    /// compression happens.
    pub fn find(&mut self, x: u32) -> u32 {
        let mut root = x;
        while self.parent[root as usize] != root {
            root = self.parent[root as usize];
        }

        let mut current = x;
        while current != root {
            let next = self.parent[current as usize];
            self.parent[current as usize] = root;
            current = next;
        }

        root
    }

    /// Merges the sets containing `x` and `y`; returns `false` without
    /// mutating anything when they already share a set.
    pub fn union(&mut self, x: u32, y: u32) -> bool {
        let mut x = self.find(x);
        let mut y = self.find(y);
        if x == y {
            return false;
        }

        if self.size[x as usize] > self.size[y as usize] {
            std::mem::swap(&mut x, &mut y);
        }
        self.parent[x as usize] = y;
        self.size[y as usize] += self.size[x as usize];

        true
    }

    pub fn set_size(&mut self, x: u32) -> u32 {
        let root = self.find(x);
        self.size[root as usize]
    }
}
