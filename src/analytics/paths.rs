//! Minimum-path counting and enumeration over the shortest-path DAG.
//!
//! Both queries run backward from the destination over the predecessor
//! sets of an already-computed source, touching each needed ancestor once
//! and memoizing per destination inside the source's
//! [`ShortestPathTree`](crate::traversal::ShortestPathTree). The first call
//! for a source costs O(V+E); repeats are O(1) lookups.
//!
//! Counting is a topological accumulation: every minimum-cost path to `w`
//! factors uniquely through exactly one predecessor edge at its last step,
//! so `count[w] = Σ count[p]` over `p ∈ predecessors[w]`, with
//! `count[source] = 1`. Ancestors are visited predecessors-first, the
//! DAG's own dependency order; distance alone cannot order them, since
//! zero-weight edges put whole predecessor chains at equal distance.

use crate::store::{Graph, GraphError, GraphResult};
use crate::traversal::ShortestPathTree;

impl<P> Graph<P> {
    /// Number of minimum-cost paths from `u` to `v`.
    ///
    /// Requires [`compute_shortest_paths`](Self::compute_shortest_paths)
    /// to have run for `u`. Returns 0 when `v` is unreachable from `u`.
    ///
    /// # Errors
    ///
    /// [`GraphError::NotComputed`] when `u` has no computed result.
    pub fn count_paths(&mut self, u: usize, v: usize) -> GraphResult<u64> {
        self.check_node(u)?;
        self.check_node(v)?;
        let tree = self.trees.get_mut(&u).ok_or(GraphError::NotComputed { origin: u })?;
        Ok(count_in_tree(tree, v))
    }

    /// Number of minimum-cost paths from `u` to `v` passing through `w`.
    ///
    /// Zero whenever `w` lies on no shortest `u -> v` path, i.e. when
    /// `distance(u,w) + distance(w,v) != distance(u,v)` or any leg is
    /// unreachable. Otherwise the product of the two leg counts: with `w`
    /// fixed as a cut point, the sub-counts are independent.
    pub fn count_paths_through(&mut self, u: usize, w: usize, v: usize) -> GraphResult<u64> {
        let (d_uw, d_wv, d_uv) = match self.through_distances(u, w, v) {
            Ok(legs) => legs,
            Err(GraphError::PathNotFound { .. }) => return Ok(0),
            Err(err) => return Err(err),
        };
        if d_uw + d_wv != d_uv {
            return Ok(0);
        }
        Ok(self.count_paths(u, w)? * self.count_paths(w, v)?)
    }

    fn through_distances(&self, u: usize, w: usize, v: usize) -> GraphResult<(f64, f64, f64)> {
        Ok((self.distance_between(u, w)?, self.distance_between(w, v)?, self.distance_between(u, v)?))
    }

    /// All minimum-cost paths from `u` to `v`, each as a node-index
    /// sequence starting at `u`. `enumerate_paths(u, u)` is `[[u]]`.
    ///
    /// Output size is the path count, exponential in the worst case;
    /// memoization bounds the repeated subwork per (source, destination).
    ///
    /// # Errors
    ///
    /// [`GraphError::PathNotFound`] when `v` is unreachable from `u`,
    /// [`GraphError::NotComputed`] when `u` has no computed result.
    pub fn enumerate_paths(&mut self, u: usize, v: usize) -> GraphResult<Vec<Vec<usize>>> {
        self.check_node(u)?;
        self.check_node(v)?;
        let tree = self.trees.get_mut(&u).ok_or(GraphError::NotComputed { origin: u })?;
        if tree.distance(v).is_none() {
            return Err(GraphError::PathNotFound { from: u, to: v });
        }
        Ok(enumerate_in_tree(tree, v))
    }
}

/// Uncached ancestors of `v`, every predecessor listed before the nodes
/// it leads to. Iterative postorder over the predecessor DAG.
fn pending_ancestors<F>(tree: &ShortestPathTree, v: usize, cached: F) -> Vec<usize>
where
    F: Fn(&ShortestPathTree, usize) -> bool,
{
    let mut visited = vec![false; tree.distance.len()];
    let mut needed = Vec::new();
    let mut stack = vec![(v, false)];

    while let Some((w, expanded)) = stack.pop() {
        if expanded {
            needed.push(w);
            continue;
        }
        if visited[w] || cached(tree, w) {
            continue;
        }
        visited[w] = true;
        stack.push((w, true));
        for &p in &tree.predecessors[w] {
            if !visited[p] && !cached(tree, p) {
                stack.push((p, false));
            }
        }
    }
    needed
}

fn count_in_tree(tree: &mut ShortestPathTree, v: usize) -> u64 {
    match tree.path_counts.get(v) {
        None => return 0,
        Some(Some(count)) => return *count,
        Some(None) => {}
    }
    if tree.distance(v).is_none() {
        tree.path_counts[v] = Some(0);
        return 0;
    }

    let needed = pending_ancestors(tree, v, |tree, w| tree.path_counts[w].is_some());
    for &w in &needed {
        let count = if w == tree.source {
            1
        } else {
            tree.predecessors[w].iter().map(|&p| tree.path_counts[p].unwrap_or(0)).sum()
        };
        tree.path_counts[w] = Some(count);
    }
    tree.path_counts[v].unwrap_or(0)
}

fn enumerate_in_tree(tree: &mut ShortestPathTree, v: usize) -> Vec<Vec<usize>> {
    if let Some(routes) = &tree.routes[v] {
        return routes.clone();
    }

    let needed = pending_ancestors(tree, v, |tree, w| tree.routes[w].is_some());
    for &w in &needed {
        let routes = if w == tree.source {
            vec![vec![w]]
        } else {
            let mut extended = Vec::new();
            for &p in &tree.predecessors[w] {
                if let Some(parent_routes) = &tree.routes[p] {
                    for parent_route in parent_routes {
                        let mut route = parent_route.clone();
                        route.push(w);
                        extended.push(route);
                    }
                }
            }
            extended
        };
        tree.routes[w] = Some(routes);
    }
    tree.routes[v].clone().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn double_diamond() -> Graph<()> {
        // 0 -> {1, 2} -> 3 -> {4, 5} -> 6: four tied paths end to end.
        let mut graph = Graph::unit_weight();
        for _ in 0..7 {
            graph.add_node(());
        }
        for &(a, b) in &[(0, 1), (0, 2), (1, 3), (2, 3), (3, 4), (3, 5), (4, 6), (5, 6)] {
            graph.connect(a, b, 1.0, false).unwrap();
        }
        graph
    }

    #[test]
    fn count_to_self_is_one() {
        let mut graph = double_diamond();
        graph.compute_shortest_paths(0).unwrap();
        assert_eq!(graph.count_paths(0, 0).unwrap(), 1);
    }

    #[test]
    fn counts_multiply_across_diamonds() {
        let mut graph = double_diamond();
        graph.compute_shortest_paths(0).unwrap();

        assert_eq!(graph.count_paths(0, 3).unwrap(), 2);
        assert_eq!(graph.count_paths(0, 6).unwrap(), 4);
        // Memoized second call.
        assert_eq!(graph.count_paths(0, 6).unwrap(), 4);
    }

    #[test]
    fn count_matches_predecessor_sum() {
        let mut graph = double_diamond();
        graph.compute_shortest_paths(0).unwrap();

        for v in 1..graph.node_count() {
            let expected: u64 = {
                let preds: Vec<usize> =
                    graph.shortest_path_tree(0).unwrap().predecessors(v).to_vec();
                let mut total = 0;
                for p in preds {
                    total += graph.count_paths(0, p).unwrap();
                }
                total
            };
            assert_eq!(graph.count_paths(0, v).unwrap(), expected, "node {v}");
        }
    }

    #[test]
    fn unreachable_target_counts_zero() {
        let mut graph = Graph::unit_weight();
        for _ in 0..3 {
            graph.add_node(());
        }
        graph.connect(0, 1, 1.0, false).unwrap();
        graph.compute_shortest_paths(0).unwrap();

        assert_eq!(graph.count_paths(0, 2).unwrap(), 0);
        assert_eq!(
            graph.enumerate_paths(0, 2).unwrap_err(),
            GraphError::PathNotFound { from: 0, to: 2 }
        );
    }

    #[test]
    fn count_requires_computed_source() {
        let mut graph = double_diamond();
        assert_eq!(
            graph.count_paths(0, 6).unwrap_err(),
            GraphError::NotComputed { origin: 0 }
        );
    }

    #[test]
    fn zero_weight_chain_counts_and_enumerates() {
        // Both hops cost nothing, so every node sits at distance 0 and
        // the accumulation must follow the DAG, not the distances.
        let mut graph = Graph::weighted();
        for _ in 0..3 {
            graph.add_node(());
        }
        graph.connect(1, 2, 0.0, false).unwrap();
        graph.connect(2, 0, 0.0, false).unwrap();
        graph.compute_shortest_paths(1).unwrap();

        assert_eq!(graph.count_paths(1, 0).unwrap(), 1);
        assert_eq!(graph.count_paths(1, 2).unwrap(), 1);
        assert_eq!(graph.enumerate_paths(1, 0).unwrap(), vec![vec![1, 2, 0]]);
    }

    #[test]
    fn through_count_is_zero_off_the_shortest_path() {
        let mut graph = double_diamond();
        graph.compute_all_shortest_paths().unwrap();

        // Every end-to-end path runs through the waist.
        assert_eq!(graph.count_paths_through(0, 3, 6).unwrap(), 4);
        // Each branch node carries half of them.
        assert_eq!(graph.count_paths_through(0, 1, 6).unwrap(), 2);
        // 4 is not on any 0 -> 3 shortest path.
        assert_eq!(graph.count_paths_through(0, 4, 3).unwrap(), 0);
    }

    #[test]
    fn through_count_is_zero_across_components() {
        let mut graph = Graph::unit_weight();
        for _ in 0..4 {
            graph.add_node(());
        }
        graph.connect(0, 1, 1.0, true).unwrap();
        graph.connect(2, 3, 1.0, true).unwrap();
        graph.compute_all_shortest_paths().unwrap();

        assert_eq!(graph.count_paths_through(0, 2, 1).unwrap(), 0);
    }

    #[test]
    fn enumerate_lists_every_tied_route() {
        let mut graph = double_diamond();
        graph.compute_shortest_paths(0).unwrap();

        let mut routes = graph.enumerate_paths(0, 6).unwrap();
        routes.sort();
        assert_eq!(
            routes,
            vec![
                vec![0, 1, 3, 4, 6],
                vec![0, 1, 3, 5, 6],
                vec![0, 2, 3, 4, 6],
                vec![0, 2, 3, 5, 6],
            ]
        );
    }

    #[test]
    fn enumerate_self_is_singleton() {
        let mut graph = double_diamond();
        graph.compute_shortest_paths(0).unwrap();
        assert_eq!(graph.enumerate_paths(0, 0).unwrap(), vec![vec![0]]);
    }

    #[test]
    fn enumeration_length_matches_count() {
        let mut graph = double_diamond();
        graph.compute_shortest_paths(0).unwrap();

        for v in 0..graph.node_count() {
            let count = graph.count_paths(0, v).unwrap();
            if count > 0 {
                assert_eq!(graph.enumerate_paths(0, v).unwrap().len() as u64, count);
            }
        }
    }
}
