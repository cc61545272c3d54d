//! Layout strategies and their selection.
//!
//! A single strategy is active at a time. Each strategy owns its private
//! state (e.g. the circular ring's rotation phase); switching strategies
//! discards that state but never touches graph state.

mod circular;
mod force;

pub use circular::CircularLayout;
pub use force::ForceDirectedLayout;

use serde::Deserialize;

use crate::graph::Graph;

/// Which layout strategy drives the simulation.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
pub enum LayoutKind {
	/// Even spacing on a slowly rotating circle.
	#[serde(rename = "circular")]
	Circular,
	/// Spring/charge physics simulation.
	#[default]
	#[serde(rename = "forceDirected")]
	ForceDirected,
}

/// The active layout strategy, tagged with its private state.
#[derive(Clone, Debug)]
pub enum LayoutEngine {
	/// See [`CircularLayout`].
	Circular(CircularLayout),
	/// See [`ForceDirectedLayout`].
	ForceDirected(ForceDirectedLayout),
}

impl LayoutEngine {
	/// Fresh engine for `kind` with default strategy state.
	pub fn new(kind: LayoutKind) -> Self {
		match kind {
			LayoutKind::Circular => Self::Circular(CircularLayout::default()),
			LayoutKind::ForceDirected => Self::ForceDirected(ForceDirectedLayout::default()),
		}
	}

	/// The kind this engine was built from.
	pub fn kind(&self) -> LayoutKind {
		match self {
			Self::Circular(_) => LayoutKind::Circular,
			Self::ForceDirected(_) => LayoutKind::ForceDirected,
		}
	}

	/// Advance every non-interactive node by exactly one simulation step,
	/// in place. Called once per rendered frame by the host.
	pub fn update(&mut self, graph: &mut Graph) {
		match self {
			Self::Circular(layout) => layout.update(graph),
			Self::ForceDirected(layout) => layout.update(graph),
		}
	}
}
