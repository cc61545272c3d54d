//! spring-graph: headless interactive graph layout simulation.
//!
//! This crate renders nothing itself. A host (canvas, GPU surface, test
//! harness) feeds it a canvas size and pointer events, calls
//! [`Simulation::tick`] once per rendered frame, and reads back view-space
//! node and edge positions via [`Simulation::frame`]. Layout strategies
//! (circular or force-directed) move nodes inside a normalized unit-square
//! model space; a dragged node is pinned against the simulation until
//! release.
//!
//! # Example
//!
//! ```
//! use spring_graph::{GraphData, SimConfig, Simulation};
//!
//! let data = GraphData::from_json(r#"{
//!     "nodes": [{ "id": "a" }, { "id": "b" }],
//!     "links": [{ "source": "a", "target": "b" }]
//! }"#)?;
//!
//! let mut sim = Simulation::new(&data, SimConfig::default())?;
//! sim.set_canvas_size(800.0, 600.0);
//! sim.tick();
//!
//! let frame = sim.frame();
//! assert_eq!(frame.nodes.len(), 2);
//! assert_eq!(frame.edges.len(), 1);
//! # Ok::<(), spring_graph::Error>(())
//! ```

pub mod error;
pub mod geometry;
pub mod graph;
pub mod interaction;
pub mod layout;
pub mod sim;
pub mod view;

pub use error::{Error, Result};
pub use geometry::Vec2;
pub use graph::{Edge, Graph, GraphData, GraphLink, GraphNode, Node, NodeShape};
pub use interaction::{DragController, PointerEvent, PointerPhase};
pub use layout::{CircularLayout, ForceDirectedLayout, LayoutEngine, LayoutKind};
pub use sim::{SimConfig, Simulation};
pub use view::{EdgeLine, Frame, NodeSprite, Rect, Transform, Viewport};
