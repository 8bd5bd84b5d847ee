use eframe::emath::{Pos2, Vec2};
use eframe::epaint::Shape;
use egui::{Color32, Stroke};
use egui_graphs::{DisplayEdge, DisplayNode, DrawContext, EdgeProps, Node};
use petgraph::stable_graph::IndexType;
use petgraph::EdgeType;

// Based on DefaultEdgeShape, undirected only

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum EdgeRole {
    Plain,
    /// The edge the current step is about to contract
    Contracting,
    /// An original edge crossing the final cut
    Cut,
}

pub(crate) trait EdgeRoleInfo {
    fn get_role(&self) -> EdgeRole;
}

#[derive(Clone, Debug)]
pub(crate) struct EdgeData {
    role: EdgeRole,
}

impl EdgeData {
    pub(crate) fn new(role: EdgeRole) -> Self {
        Self { role }
    }
}

impl EdgeRoleInfo for EdgeData {
    fn get_role(&self) -> EdgeRole {
        self.role
    }
}

const CONTRACTING: Color32 = Color32::from_rgb(0x40, 0x80, 0xFF);
const CUT: Color32 = Color32::from_rgb(0xFF, 0x40, 0x40);

#[derive(Clone)]
pub(crate) struct CustomEdgeShape {
    selected: bool,
    width: f32,
    role: EdgeRole,
}

impl<E: Clone + EdgeRoleInfo> From<EdgeProps<E>> for CustomEdgeShape {
    fn from(edge_props: EdgeProps<E>) -> Self {
        Self {
            selected: edge_props.selected,
            width: 2.,
            role: edge_props.payload.get_role(),
        }
    }
}

impl<N: Clone, E: Clone + EdgeRoleInfo, Ty: EdgeType, Ix: IndexType, D: DisplayNode<N, E, Ty, Ix>>
    DisplayEdge<N, E, Ty, Ix, D> for CustomEdgeShape
{
    fn shapes(
        &mut self,
        start_node: &Node<N, E, Ty, Ix, D>,
        end_node: &Node<N, E, Ty, Ix, D>,
        ctx: &DrawContext,
    ) -> Vec<Shape> {
        let (color, width) = match self.role {
            EdgeRole::Contracting => (CONTRACTING, self.width * 2.),
            EdgeRole::Cut => (CUT, self.width * 2.),
            EdgeRole::Plain => {
                let style = match self.selected {
                    true => ctx.ctx.style().visuals.widgets.active,
                    false => ctx.ctx.style().visuals.widgets.inactive,
                };
                (style.fg_stroke.color, self.width)
            }
        };

        let dir = (end_node.location() - start_node.location()).normalized();
        let start = start_node.display().closest_boundary_point(dir);
        let end = end_node.display().closest_boundary_point(-dir);

        let stroke = Stroke::new(ctx.meta.canvas_to_screen_size(width), color);
        let points = [
            ctx.meta.canvas_to_screen_pos(start),
            ctx.meta.canvas_to_screen_pos(end),
        ];

        vec![Shape::line_segment(points, stroke)]
    }

    fn update(&mut self, state: &EdgeProps<E>) {
        self.selected = state.selected;
        self.role = state.payload.get_role();
    }

    fn is_inside(
        &self,
        start: &Node<N, E, Ty, Ix, D>,
        end: &Node<N, E, Ty, Ix, D>,
        pos: Pos2,
    ) -> bool {
        distance_segment_to_point(start.location(), end.location(), pos) <= self.width
    }
}

fn distance_segment_to_point(a: Pos2, b: Pos2, point: Pos2) -> f32 {
    let ab = b - a;
    let length_squared = ab.dot(ab);
    if length_squared == 0. {
        return (point - a).length();
    }

    // position of the projection along the segment, clamped to its endpoints
    let k = ((point - a).dot(ab) / length_squared).clamp(0., 1.);
    let closest: Vec2 = a.to_vec2() + ab * k;
    (point.to_vec2() - closest).length()
}

#[cfg(test)]
mod tests {
    use eframe::emath::Pos2;

    use crate::visualization::edge::distance_segment_to_point;

    #[test]
    fn distance_to_segment() {
        let a = Pos2::new(0., 0.);
        let b = Pos2::new(10., 0.);

        assert_eq!(3., distance_segment_to_point(a, b, Pos2::new(5., 3.)));
        assert_eq!(5., distance_segment_to_point(a, b, Pos2::new(-3., 4.)));
        assert_eq!(5., distance_segment_to_point(a, b, Pos2::new(13., -4.)));
        assert_eq!(5., distance_segment_to_point(a, a, Pos2::new(3., 4.)));
    }
}
