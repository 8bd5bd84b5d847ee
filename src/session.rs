use petgraph::visit::{IntoEdgeReferences, IntoNodeIdentifiers, NodeIndexable};
use rand::Rng;
use tracing::info;

use crate::cuts::{contract, to_contraction_graph, ContractionError, ContractionGraph};
use crate::generator::gnm_random_graph;
use crate::navigator::{DisplaySnapshot, StepNavigator};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// State of one user session: the generated graph and the replay of its contraction.
#[derive(Clone, Debug)]
pub struct Session {
    original: ContractionGraph,
    navigator: StepNavigator,
}

impl Session {
    /// Generates a random graph and contracts it.
    pub fn generate<R>(node_count: usize, edge_count: usize, rng: &mut R) -> Result<Self, ContractionError>
    where
        R: Rng + ?Sized,
    {
        info!(node_count, edge_count, "generating graph");
        let graph = gnm_random_graph(node_count, edge_count, rng);
        Self::from_graph(&graph, rng)
    }

    pub fn from_graph<G, R>(graph: G, rng: &mut R) -> Result<Self, ContractionError>
    where
        G: NodeIndexable + IntoNodeIdentifiers + IntoEdgeReferences,
        R: Rng + ?Sized,
    {
        let original = to_contraction_graph(graph);
        let contraction = contract(&original, rng)?;
        Ok(Self {
            original,
            navigator: StepNavigator::new(contraction),
        })
    }

    pub fn navigate(&mut self, direction: Direction) -> DisplaySnapshot<'_> {
        match direction {
            Direction::Forward => self.navigator.advance(),
            Direction::Backward => self.navigator.retreat(),
        }
    }

    pub fn current(&self) -> DisplaySnapshot<'_> {
        self.navigator.current()
    }

    pub fn navigator(&self) -> &StepNavigator {
        &self.navigator
    }

    /// The graph as generated, before any contraction.
    pub fn original(&self) -> &ContractionGraph {
        &self.original
    }
}

#[cfg(test)]
mod tests {
    use petgraph::graph::UnGraph;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::cuts::ContractionError;
    use crate::navigator::DisplaySnapshot;
    use crate::session::{Direction, Session};

    #[test]
    fn generate_complete_graph() {
        let mut rng = StdRng::seed_from_u64(9);
        let session = Session::generate(6, 15, &mut rng).unwrap();

        assert_eq!(6usize, session.original().node_count());
        assert_eq!(15usize, session.original().edge_count());
        assert_eq!(5usize, session.navigator().len());
        assert_eq!(0usize, session.navigator().cursor());
        let cut = session.navigator().cut();
        assert_eq!(6usize, cut.partition_a.len() + cut.partition_b.len());
    }

    #[test]
    fn generate_rejects_single_node() {
        let mut rng = StdRng::seed_from_u64(0);
        let result = Session::generate(1, 1, &mut rng);
        assert_eq!(Some(ContractionError::TooFewNodes { node_count: 1 }), result.err());
    }

    #[test]
    fn generate_rejects_too_sparse_graph() {
        let mut rng = StdRng::seed_from_u64(0);
        // 5 nodes and a single edge can never be contracted down to two
        let result = Session::generate(5, 1, &mut rng);
        assert!(matches!(result, Err(ContractionError::EdgesExhausted { .. })));
    }

    #[test]
    fn navigate_to_final_cut_and_back() {
        let graph = UnGraph::<(), ()>::from_edges(&[(0, 1), (1, 2), (2, 3), (3, 0)]);
        let mut rng = StdRng::seed_from_u64(4);
        let mut session = Session::from_graph(&graph, &mut rng).unwrap();

        assert!(matches!(session.navigate(Direction::Forward), DisplaySnapshot::Step { index: 1, .. }));
        // terminal two-node entry
        assert!(matches!(session.navigate(Direction::Forward), DisplaySnapshot::Step { index: 2, .. }));
        match session.navigate(Direction::Forward) {
            DisplaySnapshot::Finished(cut) => assert_eq!(2usize, cut.size),
            DisplaySnapshot::Step { .. } => panic!("expected the final cut"),
        }
        assert!(matches!(session.navigate(Direction::Forward), DisplaySnapshot::Finished(_)));
        assert!(matches!(session.navigate(Direction::Backward), DisplaySnapshot::Step { index: 2, .. }));
        assert!(matches!(session.navigate(Direction::Backward), DisplaySnapshot::Step { index: 1, .. }));
        assert!(matches!(session.navigate(Direction::Backward), DisplaySnapshot::Step { index: 0, .. }));
        assert!(matches!(session.navigate(Direction::Backward), DisplaySnapshot::Step { index: 0, .. }));
    }

    #[test]
    fn sessions_are_independent() {
        let graph = UnGraph::<(), ()>::from_edges(&[(0, 1), (1, 2), (2, 0), (2, 3)]);
        let mut rng = StdRng::seed_from_u64(8);
        let mut first = Session::from_graph(&graph, &mut rng).unwrap();
        let second = Session::from_graph(&graph, &mut rng).unwrap();

        first.navigate(Direction::Forward);
        assert_eq!(1usize, first.navigator().cursor());
        assert_eq!(0usize, second.navigator().cursor());
    }
}
