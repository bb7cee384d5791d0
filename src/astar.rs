//! Generic A* over hashable nodes, in the style of
//! [pathfinding's astar function](https://docs.rs/pathfinding/latest/pathfinding/directed/astar/index.html).
//! Parent links and g-costs live in a per-search [IndexMap] keyed by node, so
//! no pre-search reset of the grid is needed: a search only ever touches the
//! nodes it actually reaches.
use fxhash::FxBuildHasher;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use num_traits::Zero;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

struct OpenEntry<K> {
    estimated_cost: K,
    cost: K,
    index: usize,
}

impl<K: PartialEq> Eq for OpenEntry<K> {}

impl<K: PartialEq> PartialEq for OpenEntry<K> {
    fn eq(&self, other: &Self) -> bool {
        self.estimated_cost.eq(&other.estimated_cost) && self.cost.eq(&other.cost)
    }
}

impl<K: Ord> PartialOrd for OpenEntry<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for OpenEntry<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap on estimated cost (f). Ties favour the entry with the
        // larger accumulated cost (g), i.e. the node with the smaller
        // heuristic estimate to the goal.
        match other.estimated_cost.cmp(&self.estimated_cost) {
            Ordering::Equal => self.cost.cmp(&other.cost),
            s => s,
        }
    }
}

/// Walks parent indices back from `start` (the goal's slot) and reverses,
/// so the returned path runs start to goal, both included.
fn reverse_path<N, V, F>(parents: &FxIndexMap<N, V>, mut parent: F, start: usize) -> Vec<N>
where
    N: Eq + Hash + Clone,
    F: FnMut(&V) -> usize,
{
    let mut path: Vec<N> = itertools::unfold(start, |i| {
        parents.get_index(*i).map(|(node, value)| {
            *i = parent(value);
            node.clone()
        })
    })
    .collect();
    path.reverse();
    path
}

pub(crate) fn astar<N, C, FN, IN, FH, FS>(
    start: &N,
    mut successors: FN,
    mut heuristic: FH,
    mut success: FS,
) -> Option<(Vec<N>, C)>
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, C)>,
    FH: FnMut(&N) -> C,
    FS: FnMut(&N) -> bool,
{
    let mut to_see = BinaryHeap::new();
    to_see.push(OpenEntry {
        estimated_cost: Zero::zero(),
        cost: Zero::zero(),
        index: 0,
    });
    let mut parents: FxIndexMap<N, (usize, C)> = FxIndexMap::default();
    parents.insert(start.clone(), (usize::MAX, Zero::zero()));
    while let Some(OpenEntry { cost, index, .. }) = to_see.pop() {
        let successors = {
            let (node, &(_, c)) = parents.get_index(index).unwrap();
            if success(node) {
                let path = reverse_path(&parents, |&(p, _)| p, index);
                return Some((path, cost));
            }
            // A node re-inserted after a cheaper route was found leaves its
            // old entry behind in the heap; skipping entries whose cost is
            // stale is what finalizes nodes (the closed set).
            if cost > c {
                continue;
            }
            successors(node)
        };
        for (successor, move_cost) in successors {
            let new_cost = cost + move_cost;
            let h;
            let n;
            match parents.entry(successor) {
                Vacant(e) => {
                    h = heuristic(e.key());
                    n = e.index();
                    e.insert((index, new_cost));
                }
                Occupied(mut e) => {
                    if e.get().1 > new_cost {
                        h = heuristic(e.key());
                        n = e.index();
                        e.insert((index, new_cost));
                    } else {
                        continue;
                    }
                }
            }

            to_see.push(OpenEntry {
                estimated_cost: new_cost + h,
                cost: new_cost,
                index: n,
            });
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    // 1D walk with unit steps: 0 -> 5 has exactly one optimal path.
    #[test]
    fn line_walk() {
        let (path, cost) = astar(
            &0i32,
            |&n| vec![(n - 1, 1), (n + 1, 1)],
            |&n| (5 - n).abs(),
            |&n| n == 5,
        )
        .unwrap();
        assert_eq!(path, vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(cost, 5);
    }

    #[test]
    fn trivial_start_is_goal() {
        let (path, cost) = astar(&7i32, |&n| vec![(n + 1, 1)], |_| 0, |&n| n == 7).unwrap();
        assert_eq!(path, vec![7]);
        assert_eq!(cost, 0);
    }

    #[test]
    fn exhausts_without_goal() {
        // Bounded successor set that never contains the goal.
        let result = astar(
            &0i32,
            |&n| if n < 3 { vec![(n + 1, 1)] } else { vec![] },
            |&n| 10 - n,
            |&n| n == 10,
        );
        assert!(result.is_none());
    }
}
