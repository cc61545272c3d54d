//! Model↔view coordinate transforms, hit testing, and frame projection.
//!
//! Model space is the unit square; view space is the canvas in pixels. The
//! forward transform centers a square of side `min(width, height)` inside the
//! canvas and scales the unit square uniformly onto it. The inverse is stored
//! alongside the forward transform and both are recomputed together on every
//! canvas resize; nothing is derived lazily per use.

use crate::geometry::Vec2;
use crate::graph::{Graph, Node, NodeShape};

/// Default node extent in view pixels used for hit testing.
const DEFAULT_NODE_SIZE: f64 = 24.0;

/// Uniform scale followed by a translation; the only transform shape this
/// crate needs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
	/// Uniform scale factor.
	pub scale: f64,
	/// Translation applied after scaling.
	pub offset: Vec2,
}

impl Transform {
	/// The identity transform.
	pub const IDENTITY: Self = Self {
		scale: 1.0,
		offset: Vec2::ZERO,
	};

	/// Apply to a point.
	pub fn apply(&self, point: Vec2) -> Vec2 {
		point * self.scale + self.offset
	}

	/// Exact inverse. A singular (zero-scale) transform inverts to the
	/// identity instead of producing non-finite values.
	pub fn inverse(&self) -> Self {
		if self.scale == 0.0 {
			return Self::IDENTITY;
		}
		Self {
			scale: 1.0 / self.scale,
			offset: self.offset * (-1.0 / self.scale),
		}
	}
}

/// Axis-aligned square region in model space, used for hit tests.
#[derive(Clone, Copy, Debug)]
pub struct Rect {
	/// Center point.
	pub center: Vec2,
	/// Half of the side length.
	pub half_extent: f64,
}

impl Rect {
	/// Whether `point` lies inside, boundary included.
	pub fn contains(&self, point: Vec2) -> bool {
		(point.x - self.center.x).abs() <= self.half_extent
			&& (point.y - self.center.y).abs() <= self.half_extent
	}
}

/// One drawable node in view space.
#[derive(Clone, Debug)]
pub struct NodeSprite {
	/// Node id.
	pub id: String,
	/// Position in view space.
	pub position: Vec2,
	/// Visual shape.
	pub shape: NodeShape,
}

/// One drawable edge in view space.
#[derive(Clone, Copy, Debug)]
pub struct EdgeLine {
	/// Source endpoint in view space.
	pub source: Vec2,
	/// Target endpoint in view space.
	pub target: Vec2,
}

/// Per-frame output for the renderer: nodes in canonical graph order, edges
/// in edge-list order.
#[derive(Clone, Debug, Default)]
pub struct Frame {
	/// Drawable nodes.
	pub nodes: Vec<NodeSprite>,
	/// Drawable edges.
	pub edges: Vec<EdgeLine>,
}

/// Holds the model↔view transform pair, performs hit tests, and projects the
/// graph into view space for drawing.
#[derive(Clone, Debug)]
pub struct Viewport {
	model_to_view: Transform,
	view_to_model: Transform,
	/// Node extent in view pixels. Hit rectangles keep this on-screen size
	/// regardless of how large the canvas scales the model.
	pub node_size: f64,
}

impl Default for Viewport {
	fn default() -> Self {
		Self {
			model_to_view: Transform::IDENTITY,
			view_to_model: Transform::IDENTITY,
			node_size: DEFAULT_NODE_SIZE,
		}
	}
}

impl Viewport {
	/// Viewport for an initial canvas size.
	pub fn new(width: f64, height: f64) -> Self {
		let mut viewport = Self::default();
		viewport.set_canvas_size(width, height);
		viewport
	}

	/// Recompute both transforms for a new canvas size.
	///
	/// Degenerate sizes (zero, negative, non-finite) leave both transforms at
	/// identity rather than going singular.
	pub fn set_canvas_size(&mut self, width: f64, height: f64) {
		let side = width.min(height);
		if !(side > 0.0) || !side.is_finite() {
			self.model_to_view = Transform::IDENTITY;
			self.view_to_model = Transform::IDENTITY;
			return;
		}
		self.model_to_view = Transform {
			scale: side,
			offset: Vec2::new((width - side) / 2.0, (height - side) / 2.0),
		};
		self.view_to_model = self.model_to_view.inverse();
	}

	/// Forward transform (model → view).
	pub fn model_to_view(&self) -> Transform {
		self.model_to_view
	}

	/// Inverse transform (view → model).
	pub fn view_to_model(&self) -> Transform {
		self.view_to_model
	}

	/// Hit rectangle for a node: a constant `node_size` square on screen, so
	/// its model-space half-extent shrinks as the canvas scale grows.
	pub fn model_rect(&self, node: &Node) -> Rect {
		Rect {
			center: node.position,
			half_extent: self.node_size / (2.0 * self.model_to_view.scale),
		}
	}

	/// Index of the first node in canonical order whose hit rectangle
	/// contains `view_point`, if any.
	pub fn hit_test(&self, graph: &Graph, view_point: Vec2) -> Option<usize> {
		let model_point = self.view_to_model.apply(view_point);
		graph
			.nodes()
			.iter()
			.position(|node| self.model_rect(node).contains(model_point))
	}

	/// Project the graph into view space for drawing.
	pub fn frame(&self, graph: &Graph) -> Frame {
		let nodes = graph
			.nodes()
			.iter()
			.map(|node| NodeSprite {
				id: node.id.clone(),
				position: self.model_to_view.apply(node.position),
				shape: node.shape,
			})
			.collect();
		let edges = graph
			.edges()
			.iter()
			.filter_map(|edge| {
				let source = graph.node_by_id(&edge.source)?;
				let target = graph.node_by_id(&edge.target)?;
				Some(EdgeLine {
					source: self.model_to_view.apply(source.position),
					target: self.model_to_view.apply(target.position),
				})
			})
			.collect();
		Frame { nodes, edges }
	}
}
