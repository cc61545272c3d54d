//! Circular layout: even spacing on a slowly rotating ring.

use std::f64::consts::TAU;

use crate::geometry::Vec2;
use crate::graph::Graph;

/// Ring radius in model space.
const RADIUS: f64 = 0.4;
/// Ring center, the middle of the unit square.
const CENTER: Vec2 = Vec2::new(0.5, 0.5);
/// Ring rotation per tick, radians.
const ROTATION_STEP: f64 = 0.005;

/// Places nodes evenly on a circle in model space. The whole ring rotates by
/// a small fixed angle every tick, so the drawing slowly spins.
#[derive(Clone, Copy, Debug, Default)]
pub struct CircularLayout {
	start_angle: f64,
}

impl CircularLayout {
	/// One tick: reassign every non-interactive node onto the ring.
	///
	/// A dragged node keeps its slot only in the sense that it is skipped
	/// outright; the nodes after it close ranks into its angular position.
	/// With an empty graph this is a complete no-op.
	pub fn update(&mut self, graph: &mut Graph) {
		let count = graph.node_count();
		if count == 0 {
			return;
		}
		let step = TAU / count as f64;
		let mut angle = self.start_angle;
		for node in graph.nodes_mut() {
			if node.interactive {
				continue;
			}
			node.position = CENTER + Vec2::new(angle.cos(), angle.sin()) * RADIUS;
			node.velocity = Vec2::ZERO;
			angle += step;
		}
		self.start_angle += ROTATION_STEP;
	}

	/// Current ring rotation offset, radians.
	pub fn start_angle(&self) -> f64 {
		self.start_angle
	}
}
