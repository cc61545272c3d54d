//! Force-directed layout: all-pairs charge repulsion, spring attraction along
//! edges, and a constant per-tick drift toward the canvas center, integrated
//! with explicit Euler steps.
//!
//! Repulsion is O(n²) per tick with no spatial partitioning, which is fine
//! for the small graphs this crate targets and a scaling limit beyond them.
//! Disconnected components feel only repulsion and the centering drift, so
//! they spread apart without converging; that is expected behavior.

use crate::geometry::Vec2;
use crate::graph::Graph;

const FRICTION: f64 = 0.001;
const SPRING_LENGTH: f64 = 0.15;
const SPRING_CONSTANT: f64 = 40.0;
const CHARGE_CONSTANT: f64 = 0.05875;
const TIME_STEP: f64 = 0.5;
/// Squared distance below which a pair is treated as coincident and
/// contributes no repulsion.
const MIN_DISTANCE_SQUARED: f64 = 1e-8;

/// Middle of the unit square, the attractor for the centering drift.
const CENTER: Vec2 = Vec2::new(0.5, 0.5);

/// Spring/charge physics over the whole node set.
#[derive(Clone, Copy, Debug, Default)]
pub struct ForceDirectedLayout;

impl ForceDirectedLayout {
	/// One Euler step. All forces are computed from a snapshot of node state
	/// taken at the start of the tick, so no node observes another node's
	/// already-updated position within the same tick.
	pub fn update(&mut self, graph: &mut Graph) {
		let count = graph.node_count();
		if count == 0 {
			return;
		}

		let positions: Vec<Vec2> = graph.nodes().iter().map(|n| n.position).collect();

		// Resolve neighbor ids to dense indices once per tick, sorted so the
		// float accumulation order is reproducible.
		let neighbors: Vec<Vec<usize>> = graph
			.nodes()
			.iter()
			.map(|node| {
				let mut indices: Vec<usize> = graph
					.neighbors(&node.id)
					.map(|set| set.iter().filter_map(|id| graph.index_of(id)).collect())
					.unwrap_or_default();
				indices.sort_unstable();
				indices
			})
			.collect();

		let mut forces = vec![Vec2::ZERO; count];
		for i in 0..count {
			// Charge repulsion against every other node.
			for j in 0..count {
				if i == j {
					continue;
				}
				let delta = positions[i] - positions[j];
				let d2 = delta.length_squared();
				if d2 < MIN_DISTANCE_SQUARED {
					continue;
				}
				forces[i] += delta * (CHARGE_CONSTANT / d2);
			}
			// Spring attraction toward each connected neighbor. A pair at
			// zero distance has no defined direction and contributes nothing.
			for &j in &neighbors[i] {
				let delta = positions[j] - positions[i];
				let distance = delta.length();
				if distance == 0.0 {
					continue;
				}
				forces[i] += delta.normalized() * (SPRING_CONSTANT * (distance - SPRING_LENGTH));
			}
		}

		// Drift from the mean node position toward the canvas center. Added
		// straight to positions, not folded into the force term.
		let mean = positions.iter().fold(Vec2::ZERO, |acc, &p| acc + p) / count as f64;
		let centering = CENTER - mean;

		for (i, node) in graph.nodes_mut().iter_mut().enumerate() {
			let velocity = (node.velocity + forces[i] * TIME_STEP) * FRICTION;
			if node.interactive {
				// The user's drag owns this node; position stays put.
				node.velocity = Vec2::ZERO;
			} else {
				node.velocity = velocity;
				node.position += velocity + centering;
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::{
		CHARGE_CONSTANT, ForceDirectedLayout, FRICTION, SPRING_CONSTANT, SPRING_LENGTH, TIME_STEP,
	};
	use crate::geometry::Vec2;
	use crate::graph::{Graph, GraphData, GraphLink, GraphNode};

	fn graph(nodes: &[&str], links: &[(&str, &str)]) -> Graph {
		let data = GraphData {
			nodes: nodes
				.iter()
				.map(|id| GraphNode {
					id: id.to_string(),
					label: None,
					shape: Default::default(),
				})
				.collect(),
			links: links
				.iter()
				.map(|(s, t)| GraphLink {
					source: s.to_string(),
					target: t.to_string(),
				})
				.collect(),
		};
		Graph::from_data(&data).unwrap()
	}

	fn assert_close(a: Vec2, b: Vec2) {
		assert!(
			(a.x - b.x).abs() < 1e-12 && (a.y - b.y).abs() < 1e-12,
			"{a:?} != {b:?}"
		);
	}

	#[test]
	fn empty_graph_is_a_no_op() {
		let mut graph = graph(&[], &[]);
		ForceDirectedLayout.update(&mut graph);
		assert_eq!(graph.node_count(), 0);
	}

	#[test]
	fn dragged_node_is_left_exactly_in_place() {
		let mut graph = graph(&["a", "b"], &[("a", "b")]);
		let pinned = Vec2::new(0.3, 0.7);
		{
			let node = graph.node_at_mut(0);
			node.position = pinned;
			node.velocity = Vec2::new(0.2, -0.1);
			node.interactive = true;
		}

		ForceDirectedLayout.update(&mut graph);

		assert_eq!(graph.node_at(0).position, pinned);
		assert_eq!(graph.node_at(0).velocity, Vec2::ZERO);
		// The free node still moves.
		assert_ne!(graph.node_at(1).velocity, Vec2::ZERO);
	}

	#[test]
	fn connected_pair_settles_near_the_spring_length() {
		let mut graph = graph(&["a", "b"], &[("a", "b")]);
		graph.node_at_mut(0).position = Vec2::new(0.2, 0.5);
		graph.node_at_mut(1).position = Vec2::new(0.8, 0.5);

		let mut layout = ForceDirectedLayout;
		for _ in 0..500 {
			layout.update(&mut graph);
		}

		let separation = graph
			.node_at(0)
			.position
			.distance(graph.node_at(1).position);
		// Equilibrium sits slightly past the rest length where the charge
		// repulsion balances the spring.
		assert!(
			(separation - SPRING_LENGTH).abs() < 0.02,
			"separation {separation}"
		);
	}

	// Three mutually connected nodes at (0,0), (1,0), (0,1): every force term
	// is computable by hand, so one tick is checked against the closed-form
	// result.
	#[test]
	fn one_tick_matches_the_reference_calculation() {
		let mut graph = graph(
			&["a", "b", "c"],
			&[("a", "b"), ("a", "c"), ("b", "c")],
		);
		graph.node_at_mut(0).position = Vec2::new(0.0, 0.0);
		graph.node_at_mut(1).position = Vec2::new(1.0, 0.0);
		graph.node_at_mut(2).position = Vec2::new(0.0, 1.0);

		ForceDirectedLayout.update(&mut graph);

		// Unit-distance spring pull and the diagonal b↔c pair.
		let pull = SPRING_CONSTANT * (1.0 - SPRING_LENGTH);
		let sqrt2 = 2f64.sqrt();
		let diagonal_pull = SPRING_CONSTANT * (sqrt2 - SPRING_LENGTH) / sqrt2;
		let half_charge = CHARGE_CONSTANT / 2.0;

		let force_a = Vec2::new(pull - CHARGE_CONSTANT, pull - CHARGE_CONSTANT);
		let force_b = Vec2::new(
			CHARGE_CONSTANT + half_charge - pull - diagonal_pull,
			-half_charge + diagonal_pull,
		);
		let force_c = Vec2::new(
			-half_charge + diagonal_pull,
			CHARGE_CONSTANT + half_charge - pull - diagonal_pull,
		);

		let centering = Vec2::new(0.5 - 1.0 / 3.0, 0.5 - 1.0 / 3.0);
		let starts = [
			Vec2::new(0.0, 0.0),
			Vec2::new(1.0, 0.0),
			Vec2::new(0.0, 1.0),
		];

		for (i, force) in [force_a, force_b, force_c].into_iter().enumerate() {
			let velocity = force * TIME_STEP * FRICTION;
			assert_close(graph.node_at(i).velocity, velocity);
			assert_close(graph.node_at(i).position, starts[i] + velocity + centering);
		}
	}

	#[test]
	fn coincident_nodes_do_not_produce_nan() {
		let mut graph = graph(&["a", "b"], &[("a", "b")]);
		let spot = Vec2::new(0.5, 0.5);
		graph.node_at_mut(0).position = spot;
		graph.node_at_mut(1).position = spot;

		ForceDirectedLayout.update(&mut graph);

		for node in graph.nodes() {
			assert!(node.position.x.is_finite() && node.position.y.is_finite());
			assert!(node.velocity.x.is_finite() && node.velocity.y.is_finite());
		}
	}
}
