//! Session facade: owns the graph, the active layout engine, the viewport,
//! and drag state. The host drives it with a canvas size, pointer events,
//! and one tick per rendered frame, then reads the projected frame back.

use log::debug;
use serde::Deserialize;

use crate::error::Result;
use crate::graph::{Graph, GraphData};
use crate::interaction::{DragController, PointerEvent};
use crate::layout::{LayoutEngine, LayoutKind};
use crate::view::{Frame, Viewport};

/// Recognized simulation options.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
pub struct SimConfig {
	/// Active layout strategy.
	#[serde(default)]
	pub layout: LayoutKind,
}

impl SimConfig {
	/// Parse options from JSON, e.g. `{ "layout": "circular" }`.
	pub fn from_json(json: &str) -> Result<Self> {
		Ok(serde_json::from_str(json)?)
	}
}

/// Owns all per-session state and exposes the host-facing surface.
///
/// All mutation flows through `&mut self` on one logical timeline, so within
/// a frame drag-driven writes land before the tick and win over it for the
/// held node. A multi-threaded host must serialize calls behind a single
/// lock; mid-tick reads would observe half-updated node state.
#[derive(Clone, Debug)]
pub struct Simulation {
	graph: Graph,
	engine: LayoutEngine,
	viewport: Viewport,
	drag: DragController,
}

impl Simulation {
	/// Build a session from parsed graph data and options.
	pub fn new(data: &GraphData, config: SimConfig) -> Result<Self> {
		Ok(Self {
			graph: Graph::from_data(data)?,
			engine: LayoutEngine::new(config.layout),
			viewport: Viewport::default(),
			drag: DragController::default(),
		})
	}

	/// Recompute view transforms for a new canvas size.
	pub fn set_canvas_size(&mut self, width: f64, height: f64) {
		self.viewport.set_canvas_size(width, height);
	}

	/// Feed one pointer event through the drag controller.
	pub fn pointer(&mut self, event: PointerEvent) {
		self.drag.handle(&mut self.graph, &self.viewport, event);
	}

	/// Advance the active layout by exactly one step.
	pub fn tick(&mut self) {
		self.engine.update(&mut self.graph);
	}

	/// Replace the layout strategy. Graph state is untouched; only the old
	/// strategy's private state (e.g. the circular ring's rotation phase) is
	/// discarded. Setting the already-active kind keeps that state.
	pub fn set_layout(&mut self, kind: LayoutKind) {
		if self.engine.kind() == kind {
			return;
		}
		debug!("spring-graph: switching layout to {:?}", kind);
		self.engine = LayoutEngine::new(kind);
	}

	/// Active layout kind.
	pub fn layout(&self) -> LayoutKind {
		self.engine.kind()
	}

	/// Read-only view of the graph for consumers.
	pub fn graph(&self) -> &Graph {
		&self.graph
	}

	/// The view transforms and hit-test surface.
	pub fn viewport(&self) -> &Viewport {
		&self.viewport
	}

	/// Project current node/edge positions into view space for drawing.
	pub fn frame(&self) -> Frame {
		self.viewport.frame(&self.graph)
	}
}

#[cfg(test)]
mod tests {
	use super::{SimConfig, Simulation};
	use crate::geometry::Vec2;
	use crate::graph::GraphData;
	use crate::layout::LayoutKind;

	fn data() -> GraphData {
		GraphData::from_json(
			r#"{
				"nodes": [{ "id": "a" }, { "id": "b" }, { "id": "c" }],
				"links": [
					{ "source": "a", "target": "b" },
					{ "source": "b", "target": "c" }
				]
			}"#,
		)
		.unwrap()
	}

	#[test]
	fn config_parses_both_layout_names_and_defaults() {
		let config = SimConfig::from_json(r#"{ "layout": "circular" }"#).unwrap();
		assert_eq!(config.layout, LayoutKind::Circular);

		let config = SimConfig::from_json(r#"{ "layout": "forceDirected" }"#).unwrap();
		assert_eq!(config.layout, LayoutKind::ForceDirected);

		let config = SimConfig::from_json("{}").unwrap();
		assert_eq!(config.layout, LayoutKind::ForceDirected);

		assert!(SimConfig::from_json(r#"{ "layout": "spiral" }"#).is_err());
	}

	#[test]
	fn ticks_move_the_graph_and_frames_project_it() {
		let mut sim = Simulation::new(&data(), SimConfig::default()).unwrap();
		sim.set_canvas_size(800.0, 600.0);

		let before: Vec<Vec2> = sim.graph().nodes().iter().map(|n| n.position).collect();
		sim.tick();
		let moved = sim
			.graph()
			.nodes()
			.iter()
			.zip(&before)
			.any(|(node, &p)| node.position != p);
		assert!(moved);

		let frame = sim.frame();
		assert_eq!(frame.nodes.len(), 3);
		assert_eq!(frame.edges.len(), 2);
		for (sprite, node) in frame.nodes.iter().zip(sim.graph().nodes()) {
			assert_eq!(sprite.id, node.id);
			assert_eq!(
				sprite.position,
				sim.viewport().model_to_view().apply(node.position)
			);
		}
	}

	#[test]
	fn switching_layout_preserves_graph_state() {
		let mut sim = Simulation::new(&data(), SimConfig::default()).unwrap();
		sim.set_canvas_size(600.0, 600.0);
		for _ in 0..10 {
			sim.tick();
		}

		let positions: Vec<Vec2> = sim.graph().nodes().iter().map(|n| n.position).collect();
		sim.set_layout(LayoutKind::Circular);
		assert_eq!(sim.layout(), LayoutKind::Circular);

		// The switch itself moves nothing; only the next tick does.
		for (node, position) in sim.graph().nodes().iter().zip(positions) {
			assert_eq!(node.position, position);
		}

		sim.tick();
		let center = Vec2::new(0.5, 0.5);
		for node in sim.graph().nodes() {
			assert!((node.position.distance(center) - 0.4).abs() < 1e-12);
		}
	}

	#[test]
	fn switching_back_resets_strategy_state_only() {
		let mut sim = Simulation::new(&data(), SimConfig::default()).unwrap();
		sim.set_layout(LayoutKind::Circular);
		sim.tick();
		sim.tick();

		// Round-trip through the other strategy discards the rotation phase.
		sim.set_layout(LayoutKind::ForceDirected);
		sim.set_layout(LayoutKind::Circular);
		sim.tick();

		let first_slot = Vec2::new(0.5 + 0.4, 0.5);
		let node = sim.graph().node_at(0);
		assert!((node.position.x - first_slot.x).abs() < 1e-12);
		assert!((node.position.y - first_slot.y).abs() < 1e-12);
	}
}
