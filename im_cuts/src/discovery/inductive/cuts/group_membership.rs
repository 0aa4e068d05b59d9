use petgraph::unionfind::UnionFind;

///
/// Assignment of activities (given by their index) to disjoint groups
///
/// Initially, every activity forms its own group.
///
pub trait GroupMembership {
    /// Merge the groups containing activities `a` and `b`
    ///
    /// Merging a group with itself does nothing.
    fn merge(&mut self, a: usize, b: usize);

    /// Current groups, ordered by their smallest member; members are sorted
    fn groups(&self) -> Vec<Vec<usize>>;
}

/// [`GroupMembership`] backed by a union-find structure
#[derive(Debug, Clone)]
pub struct UnionFindGroups {
    size: usize,
    union_find: UnionFind<usize>,
}

impl UnionFindGroups {
    /// One singleton group per activity index in `0..size`
    pub fn new(size: usize) -> Self {
        Self {
            size,
            union_find: UnionFind::new(size),
        }
    }
}

impl GroupMembership for UnionFindGroups {
    fn merge(&mut self, a: usize, b: usize) {
        self.union_find.union(a, b);
    }

    fn groups(&self) -> Vec<Vec<usize>> {
        let mut groups: Vec<Vec<usize>> = Vec::new();
        let mut group_of_root: Vec<Option<usize>> = vec![None; self.size];
        for act in 0..self.size {
            let root = self.union_find.find(act);
            match group_of_root[root] {
                Some(group) => groups[group].push(act),
                None => {
                    group_of_root[root] = Some(groups.len());
                    groups.push(vec![act]);
                }
            }
        }
        groups
    }
}
