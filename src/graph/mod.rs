//! Graph model: insertion-ordered nodes, edges, and the symmetric adjacency
//! index.
//!
//! Node order is insertion order and is the canonical iteration order for
//! rendering and every index-based API (drag, hit test); indices stay stable
//! for the lifetime of a session. The adjacency index is always exactly the
//! symmetric closure of the edge list.

mod types;

pub use types::{GraphData, GraphLink, GraphNode, NodeShape};

use std::collections::{HashMap, HashSet};
use std::f64::consts::TAU;

use log::info;

use crate::error::{Error, Result};
use crate::geometry::Vec2;

/// A simulated node: identity plus the state the layout engines integrate.
#[derive(Clone, Debug)]
pub struct Node {
	/// Unique id, referenced by edges and the adjacency index.
	pub id: String,
	/// Display label, passed through to the renderer.
	pub label: Option<String>,
	/// Visual shape, passed through to the renderer.
	pub shape: NodeShape,
	/// Position in model space, nominally within the unit square.
	pub position: Vec2,
	/// Velocity in model-space units per tick.
	pub velocity: Vec2,
	/// True while the node is under user control. Layout engines must treat
	/// this as a hard exclusion from their own position writes.
	pub interactive: bool,
}

/// An edge between two nodes, immutable after creation. Undirected as far as
/// the simulation is concerned.
#[derive(Clone, Debug)]
pub struct Edge {
	/// Source node id.
	pub source: String,
	/// Target node id.
	pub target: String,
}

/// Owning graph model shared by the layout engines and the drag controller.
#[derive(Clone, Debug, Default)]
pub struct Graph {
	nodes: Vec<Node>,
	edges: Vec<Edge>,
	id_to_index: HashMap<String, usize>,
	adjacency: HashMap<String, HashSet<String>>,
}

impl Graph {
	/// Build a graph from parsed input data.
	///
	/// Nodes keep input order and start evenly spread on a ring so the force
	/// simulation has distinct positions to work from. Duplicate node ids and
	/// links referencing unknown nodes are rejected.
	pub fn from_data(data: &GraphData) -> Result<Self> {
		let mut nodes = Vec::with_capacity(data.nodes.len());
		let mut id_to_index = HashMap::new();

		for (i, input) in data.nodes.iter().enumerate() {
			if id_to_index.insert(input.id.clone(), i).is_some() {
				return Err(Error::DuplicateNode {
					id: input.id.clone(),
				});
			}
			let angle = i as f64 * TAU / data.nodes.len() as f64;
			nodes.push(Node {
				id: input.id.clone(),
				label: input.label.clone(),
				shape: input.shape,
				position: Vec2::new(0.5 + 0.4 * angle.cos(), 0.5 + 0.4 * angle.sin()),
				velocity: Vec2::ZERO,
				interactive: false,
			});
		}

		let mut edges = Vec::with_capacity(data.links.len());
		for link in &data.links {
			if !id_to_index.contains_key(&link.source) || !id_to_index.contains_key(&link.target) {
				return Err(Error::MissingEndpoint {
					source: link.source.clone(),
					target: link.target.clone(),
				});
			}
			edges.push(Edge {
				source: link.source.clone(),
				target: link.target.clone(),
			});
		}

		let adjacency = build_adjacency(&edges);
		info!(
			"spring-graph: built graph with {} nodes, {} edges",
			nodes.len(),
			edges.len()
		);

		Ok(Self {
			nodes,
			edges,
			id_to_index,
			adjacency,
		})
	}

	/// Number of nodes.
	pub fn node_count(&self) -> usize {
		self.nodes.len()
	}

	/// Node at a position index.
	///
	/// Panics on out-of-range indices; callers are expected to only pass
	/// indices obtained from a hit test.
	pub fn node_at(&self, index: usize) -> &Node {
		&self.nodes[index]
	}

	/// Mutable node access by index. Same panic contract as [`Graph::node_at`].
	pub fn node_at_mut(&mut self, index: usize) -> &mut Node {
		&mut self.nodes[index]
	}

	/// Node lookup by id.
	pub fn node_by_id(&self, id: &str) -> Option<&Node> {
		self.id_to_index.get(id).map(|&i| &self.nodes[i])
	}

	/// Dense array index for a node id.
	pub fn index_of(&self, id: &str) -> Option<usize> {
		self.id_to_index.get(id).copied()
	}

	/// Nodes in canonical (insertion) order.
	pub fn nodes(&self) -> &[Node] {
		&self.nodes
	}

	/// Mutable access to all nodes, canonical order. Layout engines and the
	/// drag controller write node state through this.
	pub fn nodes_mut(&mut self) -> &mut [Node] {
		&mut self.nodes
	}

	/// Edges in input order.
	pub fn edges(&self) -> &[Edge] {
		&self.edges
	}

	/// Ids of the nodes directly connected to `id`.
	pub fn neighbors(&self, id: &str) -> Option<&HashSet<String>> {
		self.adjacency.get(id)
	}

	/// Append an edge, keeping the adjacency index symmetric.
	pub fn add_edge(&mut self, source: &str, target: &str) -> Result<()> {
		if !self.id_to_index.contains_key(source) || !self.id_to_index.contains_key(target) {
			return Err(Error::MissingEndpoint {
				source: source.to_string(),
				target: target.to_string(),
			});
		}
		self.edges.push(Edge {
			source: source.to_string(),
			target: target.to_string(),
		});
		self.adjacency
			.entry(source.to_string())
			.or_default()
			.insert(target.to_string());
		self.adjacency
			.entry(target.to_string())
			.or_default()
			.insert(source.to_string());
		Ok(())
	}
}

/// Build the symmetric adjacency index for an edge list: for every edge
/// `(s, t)`, `t` joins `s`'s neighbor set and `s` joins `t`'s. A self-loop
/// maps a node to itself.
pub fn build_adjacency(edges: &[Edge]) -> HashMap<String, HashSet<String>> {
	let mut adjacency: HashMap<String, HashSet<String>> = HashMap::new();
	for edge in edges {
		adjacency
			.entry(edge.source.clone())
			.or_default()
			.insert(edge.target.clone());
		adjacency
			.entry(edge.target.clone())
			.or_default()
			.insert(edge.source.clone());
	}
	adjacency
}
