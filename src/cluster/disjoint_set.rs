/// Union-find over `n` elements identified by index, with union by size
///
/// Every element starts as its own root of size 1. `find` does no path
/// compression, so it only needs shared access and never moves a root.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl DisjointSet {
    /// Creates `n` singleton sets
    pub fn new(n: usize) -> Self {
        DisjointSet {
            parent: (0..n).collect(),
            size: vec![1; n],
        }
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the root of the set containing `i`
    ///
    /// # Panics
    ///
    /// Panics if `i` is outside `[0, n)`
    pub fn find(&self, mut i: usize) -> usize {
        while self.parent[i] != i {
            i = self.parent[i];
        }
        i
    }

    /// Merges the sets containing `i` and `j` and returns the surviving root
    ///
    /// The smaller tree is attached below the larger one; on a tie the root of
    /// `j` goes below the root of `i`. Merging two elements of the same set
    /// changes nothing and returns their shared root.
    ///
    /// # Panics
    ///
    /// Panics if `i` or `j` is outside `[0, n)`
    pub fn union(&mut self, i: usize, j: usize) -> usize {
        let ri = self.find(i);
        let rj = self.find(j);
        if ri == rj {
            return ri;
        }

        let (root, child) = if self.size[ri] < self.size[rj] {
            (rj, ri)
        } else {
            (ri, rj)
        };
        self.parent[child] = root;
        self.size[root] += self.size[child];
        root
    }

    /// Size of the set rooted at `root`
    ///
    /// Only meaningful for roots; a subsumed root keeps its stale size.
    pub fn size(&self, root: usize) -> usize {
        self.size[root]
    }

    /// Size of the set containing `i`
    pub fn component_size(&self, i: usize) -> usize {
        self.size[self.find(i)]
    }

    /// Direct parent link of `i`
    pub fn parent(&self, i: usize) -> usize {
        self.parent[i]
    }

    pub fn is_root(&self, i: usize) -> bool {
        self.parent[i] == i
    }

    /// Iterates over current roots in index order
    pub fn roots(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.len()).filter(move |&i| self.is_root(i))
    }
}
