//! Topology Generation
//!
//! Builds a connected location graph whose node degrees follow a normal
//! distribution as closely as the available partners allow.

use crate::components::{Node, NodeId, Topology};
use crate::error::SimResult;
use crate::params::SimulationParameters;
use crate::rng::SimRng;

/// Draw a target edge degree for every node, rounded and floored at 1
fn generate_nodes(params: &SimulationParameters, rng: &mut SimRng) -> Vec<Node> {
    let sigma = params.var_edges.max(0.0).sqrt();
    (0..params.node_amount)
        .map(|id| {
            let drawn = rng.gauss(params.mean_edges, sigma).round().max(1.0);
            Node {
                id,
                number_of_edges: drawn as usize,
            }
        })
        .collect()
}

/// Link every node into one tree by repeatedly joining a random connected
/// node to a random unconnected one.
fn connect_spanning_tree(topology: &mut Topology, rng: &mut SimRng) -> SimResult<()> {
    let mut available: Vec<NodeId> = (1..topology.node_count()).collect();
    let mut connected: Vec<NodeId> = vec![0];

    while !available.is_empty() {
        let from = connected[rng.index(connected.len())];
        let to = available.remove(rng.index(available.len()));
        topology.add_edge(from, to)?;
        connected.push(to);
    }
    Ok(())
}

/// Top up nodes below their target degree with edges to other nodes that
/// still have spare capacity. Candidates are drawn without replacement, so
/// a node may end below its target once they run out.
fn fill_degrees(topology: &mut Topology, rng: &mut SimRng) -> SimResult<()> {
    let count = topology.node_count();

    for node in 0..count {
        if topology.spare_capacity(node) == 0 {
            continue;
        }

        let mut candidates: Vec<NodeId> = (0..count).filter(|&c| c != node).collect();
        while topology.spare_capacity(node) > 0 && !candidates.is_empty() {
            let candidate = candidates.remove(rng.index(candidates.len()));
            if topology.spare_capacity(candidate) > 0 {
                topology.add_edge(node, candidate)?;
            }
        }
    }
    Ok(())
}

/// Generate the location graph of a run
pub fn generate_topology(params: &SimulationParameters, rng: &mut SimRng) -> SimResult<Topology> {
    let mut topology = Topology::with_nodes(generate_nodes(params, rng));
    if topology.is_empty() {
        return Ok(topology);
    }

    connect_spanning_tree(&mut topology, rng)?;
    let tree_edges = topology.edges().len();
    fill_degrees(&mut topology, rng)?;

    tracing::debug!(
        nodes = topology.node_count(),
        tree_edges,
        edges = topology.edges().len(),
        "Generated topology"
    );
    Ok(topology)
}
