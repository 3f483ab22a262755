//! Friend Group Detection
//!
//! Maximal cliques in the graph of friendly relationships.

use petgraph::algo;
use petgraph::graph::{NodeIndex, UnGraph};

use crate::components::CatId;
use crate::world::World;

/// Smallest clique that counts as a friend group
pub const MIN_GROUP_SIZE: usize = 3;

/// Undirected graph over every cat with an edge per friendly relationship.
/// Node weights are cat ids and node indices match them.
pub fn friendship_graph(world: &World) -> UnGraph<CatId, ()> {
    let mut graph = UnGraph::with_capacity(world.cats.len(), 0);
    let nodes: Vec<NodeIndex> = world.cats.iter().map(|c| graph.add_node(c.id())).collect();

    for rel in world.relationships.values().filter(|r| r.is_friendly()) {
        let (a, b) = rel.key().as_tuple();
        if let (Some(&a), Some(&b)) = (nodes.get(a), nodes.get(b)) {
            graph.add_edge(a, b, ());
        }
    }
    graph
}

/// Every maximal clique as sorted cat ids, in sorted order so the result
/// does not depend on traversal order
pub fn maximal_cliques(graph: &UnGraph<CatId, ()>) -> Vec<Vec<CatId>> {
    if graph.node_count() == 0 {
        return Vec::new();
    }

    let mut cliques: Vec<Vec<CatId>> = algo::maximal_cliques(graph)
        .into_iter()
        .filter(|clique| !clique.is_empty())
        .map(|clique| {
            let mut cats: Vec<CatId> = clique.into_iter().map(|node| graph[node]).collect();
            cats.sort_unstable();
            cats
        })
        .collect();
    cliques.sort();
    cliques
}

/// Maximal friendly cliques large enough to count as friend groups
pub fn friend_groups(world: &World) -> Vec<Vec<CatId>> {
    maximal_cliques(&friendship_graph(world))
        .into_iter()
        .filter(|clique| clique.len() >= MIN_GROUP_SIZE)
        .collect()
}
