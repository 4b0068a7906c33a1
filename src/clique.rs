//! Maximal-clique search over small symmetric graphs.
//!
//! Candidate sets grow one node at a time; a node is admissible only if it
//! is connected to every current member. When no extension exists the
//! candidate is a maximal clique and competes for best-so-far. Realistic
//! graphs here are tens of nodes, so the search is exhaustive; the only
//! extra bookkeeping is a visited set over canonical member lists that
//! stops the same clique being rebuilt in every member order.

use std::collections::{HashMap, HashSet};

use crate::engine;

/// Undirected graph over string-named nodes.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: HashMap<String, HashSet<String>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a symmetric edge, creating the endpoints as needed.
    pub fn add_edge(&mut self, a: &str, b: &str) {
        self.adjacency
            .entry(a.to_owned())
            .or_default()
            .insert(b.to_owned());
        self.adjacency
            .entry(b.to_owned())
            .or_default()
            .insert(a.to_owned());
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }

    pub fn connected(&self, a: &str, b: &str) -> bool {
        self.adjacency
            .get(a)
            .map_or(false, |neighbors| neighbors.contains(b))
    }

    fn extensions(&self, members: &[String]) -> Vec<String> {
        self.adjacency
            .iter()
            .filter(|(node, _)| !members.contains(*node))
            .filter(|(_, neighbors)| members.iter().all(|m| neighbors.contains(m)))
            .map(|(node, _)| node.clone())
            .collect()
    }

    /// Find a largest fully-connected node set, returned with members
    /// sorted. Under ties any one maximum clique may be produced.
    pub fn largest_clique(&self) -> Vec<String> {
        // Canonical key per candidate set, so each clique is explored once
        // regardless of insertion order.
        let mut seen: HashSet<Vec<String>> = HashSet::new();
        let mut expand = |members: &Vec<String>| -> Vec<Vec<String>> {
            self.extensions(members)
                .into_iter()
                .filter_map(|node| {
                    let mut grown = members.clone();
                    grown.push(node);
                    grown.sort();
                    seen.insert(grown.clone()).then_some(grown)
                })
                .collect()
        };

        let mut best: Vec<String> = Vec::new();
        engine::search_best(&Vec::new(), &mut expand, &|members| members.len(), &mut best);
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph_from(edges: &[(&str, &str)]) -> Graph {
        let mut graph = Graph::new();
        for (a, b) in edges {
            graph.add_edge(a, b);
        }
        graph
    }

    #[test]
    fn test_triangle_with_pendant() {
        let graph = graph_from(&[("a", "b"), ("b", "c"), ("c", "a"), ("a", "d")]);
        let clique = graph.largest_clique();
        assert_eq!(clique, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_single_edge() {
        let graph = graph_from(&[("x", "y")]);
        assert_eq!(graph.largest_clique().len(), 2);
    }

    #[test]
    fn test_repeated_runs_agree_on_size() {
        let graph = graph_from(&[
            ("a", "b"),
            ("b", "c"),
            ("c", "a"),
            ("d", "e"),
            ("e", "f"),
            ("f", "d"),
        ]);
        // Two disjoint triangles tie; membership may differ, size may not.
        let first = graph.largest_clique();
        let second = graph.largest_clique();
        assert_eq!(first.len(), 3);
        assert_eq!(first.len(), second.len());
    }

    #[test]
    fn test_lan_party_clique() {
        let edges = [
            ("kh", "tc"),
            ("qp", "kh"),
            ("de", "cg"),
            ("ka", "co"),
            ("yn", "aq"),
            ("qp", "ub"),
            ("cg", "tb"),
            ("vc", "aq"),
            ("tb", "ka"),
            ("wh", "tc"),
            ("yn", "cg"),
            ("kh", "ub"),
            ("ta", "co"),
            ("de", "co"),
            ("tc", "td"),
            ("tb", "wq"),
            ("wh", "td"),
            ("ta", "ka"),
            ("td", "qp"),
            ("aq", "cg"),
            ("wq", "ub"),
            ("ub", "vc"),
            ("de", "ta"),
            ("wq", "aq"),
            ("wq", "vc"),
            ("wh", "yn"),
            ("ka", "de"),
            ("km", "kh"),
            ("kh", "ta"),
            ("co", "tc"),
            ("wh", "qp"),
            ("tb", "vc"),
            ("vc", "wq"),
        ];
        let graph = graph_from(&edges);
        assert_eq!(graph.largest_clique(), vec!["co", "de", "ka", "ta"]);
    }
}
