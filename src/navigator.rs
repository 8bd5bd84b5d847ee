use crate::cuts::{Contraction, ContractionGraph, Cut, Edge, StepLog};

/// What should be shown for the current cursor position.
#[derive(Clone, Copy, Debug)]
pub enum DisplaySnapshot<'a> {
    /// `graph` right before `edge` gets contracted; `index` is zero-based
    Step {
        index: usize,
        graph: &'a ContractionGraph,
        edge: Edge,
    },
    /// Past the last recorded step
    Finished(&'a Cut),
}

impl PartialEq for DisplaySnapshot<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                DisplaySnapshot::Step {
                    index: index_a,
                    graph: graph_a,
                    edge: edge_a,
                },
                DisplaySnapshot::Step {
                    index: index_b,
                    graph: graph_b,
                    edge: edge_b,
                },
            ) => index_a == index_b && edge_a == edge_b && std::ptr::eq(*graph_a, *graph_b),
            (DisplaySnapshot::Finished(cut_a), DisplaySnapshot::Finished(cut_b)) => cut_a == cut_b,
            _ => false,
        }
    }
}

/// Cursor over a finished contraction. Moving past either end does nothing.
#[derive(Clone, Debug)]
pub struct StepNavigator {
    steps: StepLog,
    cut: Cut,
    cursor: usize,
}

impl StepNavigator {
    pub fn new(contraction: Contraction) -> Self {
        Self {
            steps: contraction.steps,
            cut: contraction.cut,
            cursor: 0,
        }
    }

    pub fn current(&self) -> DisplaySnapshot<'_> {
        match self.steps.get(self.cursor) {
            Some(step) => DisplaySnapshot::Step {
                index: self.cursor,
                graph: &step.graph,
                edge: step.edge,
            },
            None => DisplaySnapshot::Finished(&self.cut),
        }
    }

    pub fn advance(&mut self) -> DisplaySnapshot<'_> {
        if self.can_advance() {
            self.cursor += 1;
        }
        self.current()
    }

    pub fn retreat(&mut self) -> DisplaySnapshot<'_> {
        if self.can_retreat() {
            self.cursor -= 1;
        }
        self.current()
    }

    pub fn can_advance(&self) -> bool {
        self.cursor < self.steps.len()
    }

    pub fn can_retreat(&self) -> bool {
        self.cursor > 0
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of recorded steps, which is also the cursor value of the finished position.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn cut(&self) -> &Cut {
        &self.cut
    }
}
