use std::collections::HashMap;

use eframe::{run_native, App, CreationContext};
use egui::{Button, Context, DragValue, Pos2, Style, Ui, Visuals};
use egui_graphs::{GraphView, SettingsInteraction, SettingsStyle};
use petgraph::prelude::StableUnGraph;
use petgraph::stable_graph::{DefaultIx, NodeIndex};
use petgraph::Undirected;
use rand::rngs::StdRng;
use tracing::{info, warn};

use crate::cuts::{ContractionGraph, Cut, Edge};
use crate::navigator::DisplaySnapshot;
use crate::session::{Direction, Session};
use crate::visualization::edge::{CustomEdgeShape, EdgeData, EdgeRole};
use crate::visualization::node::{CustomNodeShape, NodeData};

const MAX_NODES: usize = 50;
const MAX_EDGES: usize = MAX_NODES * (MAX_NODES - 1) / 2;

type ViewGraph =
    egui_graphs::Graph<NodeData, EdgeData, Undirected, DefaultIx, CustomNodeShape, CustomEdgeShape>;

/// Initial values of the graph generation inputs.
#[derive(Clone, Copy, Debug)]
pub struct ViewerSettings {
    pub node_count: usize,
    pub edge_count: usize,
}

struct ContractionApp {
    node_count: usize,
    edge_count: usize,
    rng: StdRng,
    session: Option<Session>,
    view: Option<ViewGraph>,
    // positions survive between steps so contracted graphs keep their shape
    layout: HashMap<NodeIndex, Pos2>,
    step_info: String,
}

impl ContractionApp {
    fn new(settings: ViewerSettings, rng: StdRng, _: &CreationContext<'_>) -> Self {
        Self {
            node_count: settings.node_count,
            edge_count: settings.edge_count,
            rng,
            session: None,
            view: None,
            layout: HashMap::new(),
            step_info: String::new(),
        }
    }

    fn generate(&mut self) {
        self.layout.clear();
        self.view = None;
        match Session::generate(self.node_count, self.edge_count, &mut self.rng) {
            Ok(session) => {
                info!(
                    steps = session.navigator().len(),
                    cut_size = session.navigator().cut().size,
                    "session ready"
                );
                self.session = Some(session);
                self.refresh();
            }
            Err(err) => {
                warn!(%err, "cannot compute a cut for this graph");
                self.session = None;
                self.step_info = format!("Cannot compute a cut for this graph: {err}");
            }
        }
    }

    fn navigate(&mut self, direction: Direction) {
        self.remember_layout();
        if let Some(session) = self.session.as_mut() {
            session.navigate(direction);
        }
        self.refresh();
    }

    fn refresh(&mut self) {
        let Some(session) = self.session.as_ref() else {
            return;
        };

        let (mut view, step_info) = match session.current() {
            DisplaySnapshot::Step { index, graph, edge } => (
                step_view(graph, edge),
                format!(
                    "Step {}: contract the edge ({}, {})",
                    index + 1,
                    edge.0.index(),
                    edge.1.index()
                ),
            ),
            DisplaySnapshot::Finished(cut) => (cut_view(session.original(), cut), cut.to_string()),
        };

        for (&index, &location) in self.layout.iter() {
            if let Some(node) = view.node_mut(index) {
                node.set_location(location);
            }
        }

        self.view = Some(view);
        self.step_info = step_info;
    }

    fn remember_layout(&mut self) {
        if let Some(view) = self.view.as_ref() {
            for (index, node) in view.nodes_iter() {
                self.layout.insert(index, node.location());
            }
        }
    }

    fn controls(&mut self, ui: &mut Ui) {
        ui.heading("Minimum cut visualization");
        ui.horizontal(|ui| {
            ui.label("Number of nodes:");
            ui.add(DragValue::new(&mut self.node_count).clamp_range(2..=MAX_NODES));
            ui.label("Number of edges:");
            ui.add(DragValue::new(&mut self.edge_count).clamp_range(1..=MAX_EDGES));
            if ui.button("Generate graph").clicked() {
                self.generate();
            }
        });
        ui.label(self.step_info.as_str());
    }

    fn navigation(&mut self, ui: &mut Ui) {
        let (can_retreat, can_advance, position) = match self.session.as_ref() {
            Some(session) => {
                let navigator = session.navigator();
                (
                    navigator.can_retreat(),
                    navigator.can_advance(),
                    format!("{} / {}", navigator.cursor(), navigator.len()),
                )
            }
            None => (false, false, String::new()),
        };

        ui.horizontal(|ui| {
            if ui.add_enabled(can_retreat, Button::new("Previous step")).clicked() {
                self.navigate(Direction::Backward);
            }
            if ui.add_enabled(can_advance, Button::new("Next step")).clicked() {
                self.navigate(Direction::Forward);
            }
            ui.label(position);
        });
    }
}

impl App for ContractionApp {
    fn update(&mut self, ctx: &Context, _: &mut eframe::Frame) {
        egui::TopBottomPanel::top("controls").show(ctx, |ui| self.controls(ui));
        egui::TopBottomPanel::bottom("navigation").show(ctx, |ui| self.navigation(ui));

        let settings_style = &SettingsStyle::new().with_labels_always(true);
        let interaction_settings = &SettingsInteraction::new()
            .with_dragging_enabled(true)
            .with_node_clicking_enabled(true);

        egui::CentralPanel::default().show(ctx, |ui| match self.view.as_mut() {
            Some(view) => {
                ui.add(
                    &mut GraphView::<_, _, _, _, CustomNodeShape, CustomEdgeShape>::new(view)
                        .with_styles(settings_style)
                        .with_interactions(interaction_settings),
                );
            }
            None => {
                ui.label("Generate a graph to start");
            }
        });
    }
}

/// The snapshot of a step with the edge about to be contracted highlighted.
fn step_view(graph: &ContractionGraph, edge: Edge) -> ViewGraph {
    let contracting = graph.find_edge(edge.0, edge.1);
    let g: StableUnGraph<NodeData, EdgeData> = graph.map(
        |node, _| NodeData::new(node.index(), None),
        |edge_index, _| match Some(edge_index) == contracting {
            true => EdgeData::new(EdgeRole::Contracting),
            false => EdgeData::new(EdgeRole::Plain),
        },
    );

    egui_graphs::Graph::from(&g)
}

/// The uncontracted graph colored by partition, with the cut edges highlighted.
fn cut_view(original: &ContractionGraph, cut: &Cut) -> ViewGraph {
    let g: StableUnGraph<NodeData, EdgeData> = original.map(
        |node, _| NodeData::new(node.index(), cut.side_of(node)),
        |edge_index, _| match cut.contains_edge(edge_index) {
            true => EdgeData::new(EdgeRole::Cut),
            false => EdgeData::new(EdgeRole::Plain),
        },
    );

    egui_graphs::Graph::from(&g)
}

/// Opens the interactive viewer and blocks until its window is closed.
pub fn run_viewer(settings: ViewerSettings, rng: StdRng) -> Result<(), eframe::Error> {
    let native_options = eframe::NativeOptions::default();
    run_native(
        "Karger Contraction Stepper",
        native_options,
        Box::new(move |cc| {
            // Set to dark mode always
            let style = Style {
                visuals: Visuals::dark(),
                ..Style::default()
            };
            cc.egui_ctx.set_style(style);
            let mut app = ContractionApp::new(settings, rng, cc);
            app.generate();
            Box::new(app)
        }),
    )
}
