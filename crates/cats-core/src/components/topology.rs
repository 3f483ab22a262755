//! Location Graph
//!
//! Nodes are locations, edges are undirected paths between them.

use std::collections::BTreeSet;

use petgraph::algo::connected_components;
use petgraph::graph::{NodeIndex, UnGraph};
use serde::{Deserialize, Serialize};

use super::NodeId;
use crate::error::{SimError, SimResult};

/// A location with the edge degree it was generated to reach
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub number_of_edges: usize,
}

/// Unordered connection between two nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub node1: NodeId,
    pub node2: NodeId,
}

impl Edge {
    pub fn new(node1: NodeId, node2: NodeId) -> Self {
        Self { node1, node2 }
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.node1 == node || self.node2 == node
    }

    pub fn other_node(&self, node: NodeId) -> NodeId {
        if self.node2 == node {
            self.node1
        } else {
            self.node2
        }
    }
}

/// Nodes, edges and an adjacency index kept in step with the edge list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Topology {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    adjacency: Vec<BTreeSet<NodeId>>,
}

impl Topology {
    /// Create a topology with the given nodes and no edges.
    /// Node ids must equal their position.
    pub fn with_nodes(nodes: Vec<Node>) -> Self {
        let adjacency = vec![BTreeSet::new(); nodes.len()];
        Self {
            nodes,
            edges: Vec::new(),
            adjacency,
        }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: NodeId) -> SimResult<&Node> {
        self.nodes.get(id).ok_or(SimError::UnknownNode(id))
    }

    /// Neighbours reachable over one edge, in ascending id order
    pub fn neighbors(&self, id: NodeId) -> SimResult<&BTreeSet<NodeId>> {
        self.adjacency.get(id).ok_or(SimError::UnknownNode(id))
    }

    pub fn degree(&self, id: NodeId) -> usize {
        self.adjacency.get(id).map_or(0, BTreeSet::len)
    }

    /// Edges still missing to reach the node's target degree
    pub fn spare_capacity(&self, id: NodeId) -> usize {
        self.nodes
            .get(id)
            .map_or(0, |n| n.number_of_edges.saturating_sub(self.degree(id)))
    }

    pub fn has_edge(&self, a: NodeId, b: NodeId) -> bool {
        self.adjacency.get(a).is_some_and(|n| n.contains(&b))
    }

    /// Connect two distinct nodes. Returns false if the edge would be a
    /// self-loop or a duplicate.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId) -> SimResult<bool> {
        self.node(a)?;
        self.node(b)?;
        if a == b || self.has_edge(a, b) {
            return Ok(false);
        }
        self.edges.push(Edge::new(a, b));
        self.adjacency[a].insert(b);
        self.adjacency[b].insert(a);
        Ok(true)
    }

    /// Every node reachable from every other
    pub fn is_connected(&self) -> bool {
        self.nodes.is_empty() || connected_components(&self.to_graph()) == 1
    }

    /// The location graph as a petgraph graph; node weights are node ids
    /// and node indices match them.
    pub fn to_graph(&self) -> UnGraph<NodeId, ()> {
        let mut graph = UnGraph::with_capacity(self.nodes.len(), self.edges.len());
        let indices: Vec<NodeIndex> = self.nodes.iter().map(|n| graph.add_node(n.id)).collect();
        for edge in &self.edges {
            graph.add_edge(indices[edge.node1], indices[edge.node2], ());
        }
        graph
    }
}
