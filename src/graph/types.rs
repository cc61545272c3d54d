//! Graph data structures for input to the simulation.

use log::{info, warn};
use serde::Deserialize;

use crate::error::Result;

/// Visual kind of a node. Carried through to the renderer untouched; the
/// simulation never consults it.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NodeShape {
	/// Round node marker.
	#[default]
	Circle,
	/// Square node marker.
	Square,
	/// Diamond node marker.
	Diamond,
}

/// A node in the input graph.
#[derive(Clone, Debug, Deserialize)]
pub struct GraphNode {
	/// Unique identifier for this node. Used to reference nodes in links.
	pub id: String,
	/// Optional display label, passed through to the renderer.
	#[serde(default)]
	pub label: Option<String>,
	/// Visual shape, passed through to the renderer.
	#[serde(default)]
	pub shape: NodeShape,
}

/// An edge between two nodes. Undirected for simulation purposes.
#[derive(Clone, Debug, Deserialize)]
pub struct GraphLink {
	/// Source node ID.
	pub source: String,
	/// Target node ID.
	pub target: String,
}

/// Complete graph data: nodes and links.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct GraphData {
	pub nodes: Vec<GraphNode>,
	pub links: Vec<GraphLink>,
}

impl GraphData {
	/// Parse graph data from JSON.
	/// Expected format: `{ "nodes": [...], "links": [...] }`
	pub fn from_json(json: &str) -> Result<Self> {
		match serde_json::from_str::<GraphData>(json) {
			Ok(data) => {
				info!(
					"spring-graph: loaded {} nodes, {} links",
					data.nodes.len(),
					data.links.len()
				);
				Ok(data)
			}
			Err(e) => {
				warn!("spring-graph: failed to parse graph data: {}", e);
				Err(e.into())
			}
		}
	}
}
