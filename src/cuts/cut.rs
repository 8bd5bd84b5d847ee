use std::collections::BTreeSet;
use std::fmt;

use itertools::Itertools;
use petgraph::stable_graph::{EdgeIndex, NodeIndex};
use petgraph::visit::{EdgeRef, IntoEdgeReferences};

use crate::cuts::karger::ContractionGraph;

/// Which of the two final partitions a node ended up in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    A,
    B,
}

#[derive(Clone, Debug)]
pub struct Cut {
    pub partition_a: BTreeSet<NodeIndex>,
    pub partition_b: BTreeSet<NodeIndex>,
    /// Edges of the original graph crossing between the partitions
    pub cut_set: Vec<EdgeIndex>,
    pub size: usize,
}

impl Cut {
    pub fn new(
        partition_a: BTreeSet<NodeIndex>,
        partition_b: BTreeSet<NodeIndex>,
        cut_set: Vec<EdgeIndex>,
    ) -> Self {
        let size = cut_set.len();
        Self {
            partition_a,
            partition_b,
            cut_set,
            size,
        }
    }

    /// Builds the cut by classifying every edge of the uncontracted graph against the partitions.
    pub fn from_partitions(
        original: &ContractionGraph,
        partition_a: BTreeSet<NodeIndex>,
        partition_b: BTreeSet<NodeIndex>,
    ) -> Self {
        let cut_set = original
            .edge_references()
            .filter(|edge| {
                let (source, target) = (edge.source(), edge.target());
                (partition_a.contains(&source) && partition_b.contains(&target))
                    || (partition_b.contains(&source) && partition_a.contains(&target))
            })
            // (a, b) and (b, a) are the same undirected edge
            .unique_by(|edge| {
                let (source, target) = (edge.source(), edge.target());
                (source.min(target), source.max(target))
            })
            .map(|edge| edge.id())
            .collect();

        Self::new(partition_a, partition_b, cut_set)
    }

    pub fn side_of(&self, node: NodeIndex) -> Option<Side> {
        if self.partition_a.contains(&node) {
            Some(Side::A)
        } else if self.partition_b.contains(&node) {
            Some(Side::B)
        } else {
            None
        }
    }

    pub fn contains_edge(&self, edge: EdgeIndex) -> bool {
        self.cut_set.contains(&edge)
    }
}

impl PartialEq for Cut {
    fn eq(&self, other: &Self) -> bool {
        self.partition_a == other.partition_a
            && self.partition_b == other.partition_b
            && self.cut_set == other.cut_set
    }
}

fn format_nodes(nodes: &BTreeSet<NodeIndex>) -> String {
    format!("{{{}}}", nodes.iter().map(|node| node.index()).join(", "))
}

impl fmt::Display for Cut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Cut number is {}. Nodes {} are in one set and nodes {} in the other",
            self.size,
            format_nodes(&self.partition_a),
            format_nodes(&self.partition_b)
        )
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use petgraph::stable_graph::NodeIndex;

    use crate::cuts::cut::{Cut, Side};
    use crate::cuts::karger::ContractionGraph;

    fn nodes(indices: &[usize]) -> BTreeSet<NodeIndex> {
        indices.iter().map(|&index| NodeIndex::new(index)).collect()
    }

    #[test]
    fn counts_only_crossing_edges() {
        let graph = ContractionGraph::from_edges(&[(0, 1), (1, 2), (2, 3), (3, 0), (0, 2)]);
        let cut = Cut::from_partitions(&graph, nodes(&[0, 1]), nodes(&[2, 3]));

        assert_eq!(3usize, cut.size);
        let crossing: Vec<(usize, usize)> = cut
            .cut_set
            .iter()
            .filter_map(|&edge| graph.edge_endpoints(edge))
            .map(|(a, b)| (a.index(), b.index()))
            .collect();
        assert_eq!(vec![(1, 2), (3, 0), (0, 2)], crossing);
    }

    #[test]
    fn reversed_duplicate_counted_once() {
        let mut graph = ContractionGraph::from_edges(&[(0, 1)]);
        graph.add_edge(NodeIndex::new(1), NodeIndex::new(0), ());

        let cut = Cut::from_partitions(&graph, nodes(&[0]), nodes(&[1]));
        assert_eq!(1usize, cut.size);
    }

    #[test]
    fn sides_and_display() {
        let graph = ContractionGraph::from_edges(&[(0, 1), (1, 2)]);
        let cut = Cut::from_partitions(&graph, nodes(&[0]), nodes(&[1, 2]));

        assert_eq!(Some(Side::A), cut.side_of(NodeIndex::new(0)));
        assert_eq!(Some(Side::B), cut.side_of(NodeIndex::new(2)));
        assert_eq!(None, cut.side_of(NodeIndex::new(7)));
        assert_eq!(
            "Cut number is 1. Nodes {0} are in one set and nodes {1, 2} in the other",
            cut.to_string()
        );
    }
}
