use std::collections::{BTreeMap, BTreeSet};

use petgraph::stable_graph::{NodeIndex, StableUnGraph};
use petgraph::visit::{EdgeRef, IntoEdgeReferences, IntoNodeIdentifiers, NodeIndexable};
use rand::seq::IteratorRandom;
use rand::Rng;
use tracing::{debug, info};

use crate::cuts::cut::Cut;
use crate::cuts::error::ContractionError;

/// Graph the contraction works on. Node indices are the original node identifiers and stay valid
/// after other nodes are removed.
pub type ContractionGraph = StableUnGraph<(), ()>;

/// An edge given by its endpoints. During contraction the first endpoint survives.
pub type Edge = (NodeIndex, NodeIndex);

/// The graph as it was before `edge` got contracted.
#[derive(Clone, Debug)]
pub struct StepRecord {
    pub graph: ContractionGraph,
    pub edge: Edge,
}

/// Every contraction in order, followed by the terminal two-node entry.
pub type StepLog = Vec<StepRecord>;

#[derive(Clone, Debug)]
pub struct Contraction {
    pub steps: StepLog,
    pub cut: Cut,
}

/// Copies any petgraph graph into a [`ContractionGraph`] keeping node indices intact.
///
/// Self-loops are dropped and parallel edges collapse into one.
pub fn to_contraction_graph<G>(graph: G) -> ContractionGraph
where
    G: NodeIndexable + IntoNodeIdentifiers + IntoEdgeReferences,
{
    let node_bound = graph.node_bound();
    let mut contraction_graph = ContractionGraph::with_capacity(node_bound, 0);
    for _ in 0..node_bound {
        contraction_graph.add_node(());
    }

    // holes in the source graph become holes here too
    let present: BTreeSet<usize> = graph
        .node_identifiers()
        .map(|node| NodeIndexable::to_index(&graph, node))
        .collect();
    for index in (0..node_bound).filter(|index| !present.contains(index)) {
        contraction_graph.remove_node(NodeIndex::new(index));
    }

    for edge in graph.edge_references() {
        let source = NodeIndexable::to_index(&graph, edge.source());
        let target = NodeIndexable::to_index(&graph, edge.target());
        if source != target {
            contraction_graph.update_edge(NodeIndex::new(source), NodeIndex::new(target), ());
        }
    }

    contraction_graph
}

fn choose_edge<R>(graph: &ContractionGraph, rng: &mut R) -> Option<Edge>
where
    R: Rng + ?Sized,
{
    graph
        .edge_indices()
        .choose(rng)
        .and_then(|edge| graph.edge_endpoints(edge))
}

/// Returns a copy of `graph` with `absorbed` merged into `survivor`.
fn contract_edge(graph: &ContractionGraph, survivor: NodeIndex, absorbed: NodeIndex) -> ContractionGraph {
    let mut contracted = graph.clone();
    let neighbors: Vec<NodeIndex> = contracted.neighbors(absorbed).collect();
    contracted.remove_node(absorbed);

    for neighbor in neighbors {
        // the contracted edge itself would become a self-loop
        if neighbor != survivor {
            // update_edge keeps an already existing survivor-neighbor edge instead of adding a parallel one
            contracted.update_edge(survivor, neighbor, ());
        }
    }

    contracted
}

/// Runs a single randomized contraction of `original` down to two super-nodes.
///
/// Fails when the graph has fewer than two nodes or runs out of edges before two nodes remain, in
/// which case nothing is returned.
pub fn contract<R>(original: &ContractionGraph, rng: &mut R) -> Result<Contraction, ContractionError>
where
    R: Rng + ?Sized,
{
    let node_count = original.node_count();
    if node_count < 2 {
        return Err(ContractionError::TooFewNodes { node_count });
    }

    let mut partitions: BTreeMap<NodeIndex, BTreeSet<NodeIndex>> = original
        .node_indices()
        .map(|node| (node, BTreeSet::from([node])))
        .collect();
    let mut steps = Vec::with_capacity(node_count - 1);
    let mut graph = original.clone();

    while graph.node_count() > 2 {
        let edge = choose_edge(&graph, rng).ok_or(ContractionError::EdgesExhausted {
            remaining_nodes: graph.node_count(),
        })?;
        let (survivor, absorbed) = edge;
        debug!(
            survivor = survivor.index(),
            absorbed = absorbed.index(),
            nodes = graph.node_count(),
            "contracting edge"
        );

        let absorbed_set = partitions.remove(&absorbed).unwrap_or_default();
        partitions.entry(survivor).or_default().extend(absorbed_set);

        let contracted = contract_edge(&graph, survivor, absorbed);
        // the recorded snapshot is never touched again
        steps.push(StepRecord { graph, edge });
        graph = contracted;
    }

    let terminal_edge = graph
        .edge_indices()
        .next()
        .and_then(|edge| graph.edge_endpoints(edge))
        .ok_or(ContractionError::EdgesExhausted {
            remaining_nodes: graph.node_count(),
        })?;
    steps.push(StepRecord {
        graph,
        edge: terminal_edge,
    });

    let mut sides = partitions.into_values();
    let (partition_a, partition_b) = match (sides.next(), sides.next(), sides.next()) {
        (Some(partition_a), Some(partition_b), None) => (partition_a, partition_b),
        _ => unreachable!("one partition per remaining node, and two nodes remain"),
    };

    let cut = Cut::from_partitions(original, partition_a, partition_b);
    info!(
        nodes = node_count,
        edges = original.edge_count(),
        steps = steps.len(),
        cut_size = cut.size,
        "contraction finished"
    );

    Ok(Contraction { steps, cut })
}
