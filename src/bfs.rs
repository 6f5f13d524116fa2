//! A generic breadth-first search in the shape of
//! [pathfinding's bfs function](https://docs.rs/pathfinding/latest/pathfinding/directed/bfs/index.html).
//! Predecessors and step counts are kept in a single insertion-ordered map
//! so nodes can be addressed by index and the path reconstructed without a
//! separate backtrace structure.

use fxhash::{FxBuildHasher, FxHashSet};
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;

use std::collections::VecDeque;
use std::hash::Hash;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

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

/// Expands nodes in FIFO order from `start` until `success` holds, where
/// every successor is one step away. Returns the path from `start` up to and
/// including the matched node together with its step count, or [None] once
/// the reachable set is exhausted. Equal-length routes are resolved in favor
/// of the successor discovered first.
pub fn bfs<N, FN, IN, FS>(start: &N, mut successors: FN, mut success: FS) -> Option<(Vec<N>, i32)>
where
    N: Eq + Hash + Clone,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = N>,
    FS: FnMut(&N) -> bool,
{
    let mut discovered = VecDeque::new();
    discovered.push_back(0_usize);
    let mut expanded: FxHashSet<usize> = FxHashSet::default();
    let mut parents: FxIndexMap<N, (usize, i32)> = FxIndexMap::default();
    parents.insert(start.clone(), (usize::MAX, 0));
    while let Some(index) = discovered.pop_front() {
        let (successors, step_count) = {
            let (node, &(_, steps)) = parents.get_index(index).unwrap();
            if success(node) {
                let path = reverse_path(&parents, |&(p, _)| p, index);
                return Some((path, steps));
            }
            expanded.insert(index);
            (successors(node), steps + 1)
        };
        for successor in successors {
            let successor_index = match parents.entry(successor) {
                Vacant(e) => {
                    let successor_index = e.index();
                    e.insert((index, step_count));
                    successor_index
                }
                Occupied(mut e) => {
                    // An expanded node is final, and a recorded step count
                    // that is not strictly larger keeps its first discovery.
                    if expanded.contains(&e.index()) || e.get().1 <= step_count {
                        continue;
                    }
                    let successor_index = e.index();
                    e.insert((index, step_count));
                    successor_index
                }
            };
            discovered.push_back(successor_index);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Successor function for a corridor of integers 0..=9.
    fn line(node: &i32) -> Vec<i32> {
        let mut next = Vec::new();
        if *node > 0 {
            next.push(*node - 1);
        }
        if *node < 9 {
            next.push(*node + 1);
        }
        next
    }

    #[test]
    fn finds_shortest_line_path() {
        let (path, steps) = bfs(&2, line, |&n| n == 7).unwrap();
        assert_eq!(path, vec![2, 3, 4, 5, 6, 7]);
        assert_eq!(steps, 5);
    }

    #[test]
    fn start_matching_success_is_a_zero_step_path() {
        let (path, steps) = bfs(&4, line, |&n| n == 4).unwrap();
        assert_eq!(path, vec![4]);
        assert_eq!(steps, 0);
    }

    #[test]
    fn exhausting_the_component_yields_none() {
        assert!(bfs(&0, line, |&n| n == 42).is_none());
    }

    /// Two equal-length routes exist through 1 and 2; the route through the
    /// successor listed first must win.
    #[test]
    fn ties_resolve_to_the_first_discovery() {
        let successors = |&node: &i32| -> Vec<i32> {
            match node {
                0 => vec![1, 2],
                1 | 2 => vec![3],
                _ => vec![],
            }
        };
        let (path, steps) = bfs(&0, successors, |&n| n == 3).unwrap();
        assert_eq!(path, vec![0, 1, 3]);
        assert_eq!(steps, 2);
    }

    #[test]
    fn step_count_matches_path_length() {
        let (path, steps) = bfs(&0, line, |&n| n == 9).unwrap();
        assert_eq!(path.len() as i32, steps + 1);
    }
}
