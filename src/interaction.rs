//! Drag interaction: pointer events grab a node, move it in model space, and
//! pin it against the simulation until release.
//!
//! One drag at a time. Within a frame, drag-driven writes happen before the
//! tick and win over it for the held node; the `interactive` flag on the node
//! is the mechanism that keeps the layout engines' hands off it.

use crate::geometry::Vec2;
use crate::graph::Graph;
use crate::view::Viewport;

/// Phase of a pointer event delivered by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerPhase {
	/// Pointer pressed.
	Down,
	/// Pointer moved while pressed.
	Move,
	/// Pointer released.
	Up,
}

/// A pointer event in view-space coordinates.
#[derive(Clone, Copy, Debug)]
pub struct PointerEvent {
	/// Gesture phase.
	pub phase: PointerPhase,
	/// Location in view space.
	pub location: Vec2,
}

/// Tracks the node currently under user control, if any.
///
/// Idle until a pointer-down hits a node; a miss leaves the gesture inert, so
/// moves and the release do nothing to the graph.
#[derive(Clone, Copy, Debug, Default)]
pub struct DragController {
	dragged: Option<usize>,
}

impl DragController {
	/// Route a pointer event to the matching drag handler.
	pub fn handle(&mut self, graph: &mut Graph, viewport: &Viewport, event: PointerEvent) {
		match event.phase {
			PointerPhase::Down => {
				self.pointer_down(graph, viewport, event.location);
			}
			PointerPhase::Move => self.pointer_move(graph, viewport, event.location),
			PointerPhase::Up => self.pointer_up(graph),
		}
	}

	/// Begin a drag if `location` hits a node. Returns the grabbed index.
	pub fn pointer_down(
		&mut self,
		graph: &Graph,
		viewport: &Viewport,
		location: Vec2,
	) -> Option<usize> {
		self.dragged = viewport.hit_test(graph, location);
		self.dragged
	}

	/// Move the dragged node to `location`, zero its velocity, and pin it
	/// against simulation-driven position writes.
	pub fn pointer_move(&mut self, graph: &mut Graph, viewport: &Viewport, location: Vec2) {
		let Some(index) = self.dragged else {
			return;
		};
		let node = graph.node_at_mut(index);
		node.position = viewport.view_to_model().apply(location);
		node.velocity = Vec2::ZERO;
		node.interactive = true;
	}

	/// Release the dragged node back to the simulation.
	pub fn pointer_up(&mut self, graph: &mut Graph) {
		if let Some(index) = self.dragged.take() {
			graph.node_at_mut(index).interactive = false;
		}
	}

	/// Index of the node currently being dragged, if any.
	pub fn dragged(&self) -> Option<usize> {
		self.dragged
	}
}
