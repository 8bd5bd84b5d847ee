use itertools::Itertools;
use petgraph::graph::{NodeIndex, UnGraph};
use rand::seq::SliceRandom;
use rand::Rng;

/// Random graph with `node_count` nodes and `edge_count` distinct edges, every such graph being
/// equally likely (G(n, m) model).
///
/// Asking for more edges than there are node pairs yields the complete graph.
pub fn gnm_random_graph<R>(node_count: usize, edge_count: usize, rng: &mut R) -> UnGraph<(), ()>
where
    R: Rng + ?Sized,
{
    let pairs: Vec<(usize, usize)> = (0..node_count).tuple_combinations().collect();
    let mut graph = UnGraph::with_capacity(node_count, edge_count.min(pairs.len()));
    for _ in 0..node_count {
        graph.add_node(());
    }

    for &(a, b) in pairs.choose_multiple(rng, edge_count) {
        graph.add_edge(NodeIndex::new(a), NodeIndex::new(b), ());
    }

    graph
}

#[cfg(test)]
mod tests {
    use petgraph::visit::EdgeRef;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::generator::gnm_random_graph;

    #[test]
    fn requested_sizes() {
        let mut rng = StdRng::seed_from_u64(0);
        let graph = gnm_random_graph(5, 7, &mut rng);
        assert_eq!(5usize, graph.node_count());
        assert_eq!(7usize, graph.edge_count());
    }

    #[test]
    fn edges_are_simple() {
        let mut rng = StdRng::seed_from_u64(1);
        let graph = gnm_random_graph(10, 30, &mut rng);
        let mut pairs: Vec<(usize, usize)> = graph
            .edge_references()
            .map(|edge| {
                let (a, b) = (edge.source().index(), edge.target().index());
                assert_ne!(a, b);
                (a.min(b), a.max(b))
            })
            .collect();
        pairs.sort();
        pairs.dedup();
        assert_eq!(30usize, pairs.len());
    }

    #[test]
    fn too_many_edges_gives_complete_graph() {
        let mut rng = StdRng::seed_from_u64(2);
        let graph = gnm_random_graph(4, 100, &mut rng);
        assert_eq!(6usize, graph.edge_count());
    }

    #[test]
    fn single_node_has_no_edges() {
        let mut rng = StdRng::seed_from_u64(3);
        let graph = gnm_random_graph(1, 3, &mut rng);
        assert_eq!(1usize, graph.node_count());
        assert_eq!(0usize, graph.edge_count());
    }
}
