use eframe::emath::{Pos2, Vec2};
use eframe::epaint::{CircleShape, FontFamily, FontId, Shape, Stroke, TextShape};
use egui::Color32;
use egui_graphs::{DisplayNode, DrawContext, NodeProps};
use petgraph::stable_graph::IndexType;
use petgraph::EdgeType;

use crate::cuts::Side;

pub(crate) trait PartitionInfo {
    fn get_partition(&self) -> Option<Side>;
    fn get_label(&self) -> String;
}

#[derive(Clone, Debug)]
pub(crate) struct NodeData {
    label: String,
    partition: Option<Side>,
}

impl NodeData {
    /// Node labelled with its original identifier, colored by `partition` if any.
    pub(crate) fn new(id: usize, partition: Option<Side>) -> Self {
        Self {
            label: id.to_string(),
            partition,
        }
    }
}

impl PartitionInfo for NodeData {
    fn get_partition(&self) -> Option<Side> {
        self.partition
    }

    fn get_label(&self) -> String {
        self.label.clone()
    }
}

struct PartitionColor;

impl PartitionColor {
    const A: Color32 = Color32::from_rgb(0x80, 0x80, 0xFF);
    const A_INTERACTED: Color32 = Color32::from_rgb(0xB0, 0xB0, 0xFF);
    const B: Color32 = Color32::from_rgb(0xFF, 0x80, 0x80);
    const B_INTERACTED: Color32 = Color32::from_rgb(0xFF, 0xB0, 0xB0);

    fn get(side: Side, is_interacted: bool) -> Color32 {
        match (side, is_interacted) {
            (Side::A, false) => Self::A,
            (Side::A, true) => Self::A_INTERACTED,
            (Side::B, false) => Self::B,
            (Side::B, true) => Self::B_INTERACTED,
        }
    }
}

#[derive(Clone)]
pub(crate) struct CustomNodeShape {
    pos: Pos2,
    label_text: String,
    selected: bool,
    dragged: bool,

    radius: f32,
    partition: Option<Side>,
}

impl<N: Clone + PartitionInfo> From<NodeProps<N>> for CustomNodeShape {
    fn from(node_props: NodeProps<N>) -> Self {
        Self {
            pos: node_props.location,
            label_text: node_props.payload.get_label(),
            selected: node_props.selected,
            dragged: node_props.dragged,
            radius: 8.0,
            partition: node_props.payload.get_partition(),
        }
    }
}

impl<N: Clone + PartitionInfo, E: Clone, Ty: EdgeType, Ix: IndexType> DisplayNode<N, E, Ty, Ix>
    for CustomNodeShape
{
    fn closest_boundary_point(&self, dir: Vec2) -> Pos2 {
        closest_point_on_circle(self.pos, self.radius, dir)
    }

    fn shapes(&mut self, ctx: &DrawContext) -> Vec<Shape> {
        let mut res = Vec::with_capacity(2);

        let is_interacted = self.selected || self.dragged;

        let color = match self.partition {
            Some(side) => PartitionColor::get(side, is_interacted),
            None => {
                let style = match is_interacted {
                    true => ctx.ctx.style().visuals.widgets.active,
                    false => ctx.ctx.style().visuals.widgets.inactive,
                };
                style.fg_stroke.color
            }
        };

        let circle_center = ctx.meta.canvas_to_screen_pos(self.pos);
        let circle_radius = ctx.meta.canvas_to_screen_size(self.radius);
        let circle_shape = CircleShape {
            center: circle_center,
            radius: circle_radius,
            fill: color,
            stroke: Stroke::default(),
        };
        res.push(circle_shape.into());

        let black = Color32::BLACK;

        let galley = ctx.ctx.fonts(|f| {
            f.layout_no_wrap(
                self.label_text.clone(),
                FontId::new(circle_radius, FontFamily::Monospace),
                black,
            )
        });

        // label goes in the middle of the circle
        let label_pos = Pos2::new(
            circle_center.x - galley.size().x / 2.,
            circle_center.y - galley.size().y / 2.,
        );

        let label_shape = TextShape::new(label_pos, galley, black);
        res.push(label_shape.into());

        res
    }

    fn update(&mut self, state: &NodeProps<N>) {
        self.pos = state.location;
        self.label_text = state.payload.get_label();
        self.selected = state.selected;
        self.dragged = state.dragged;
        self.partition = state.payload.get_partition();
    }

    fn is_inside(&self, pos: Pos2) -> bool {
        (pos - self.pos).length() <= self.radius
    }
}

fn closest_point_on_circle(center: Pos2, radius: f32, dir: Vec2) -> Pos2 {
    center + dir.normalized() * radius
}
