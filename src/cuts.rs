mod cut;
mod error;
mod karger;

pub use cut::{Cut, Side};
pub use error::ContractionError;
pub use karger::{contract, to_contraction_graph, Contraction, ContractionGraph, Edge, StepLog};
