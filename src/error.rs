//! Crate error type.

/// Errors produced while building a graph or parsing input.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// An edge references a node id that is not in the node set.
	#[error("graph contains an edge with a missing endpoint: {source} -> {target}")]
	MissingEndpoint {
		/// Source id of the offending edge.
		source: String,
		/// Target id of the offending edge.
		target: String,
	},
	/// Two input nodes share the same id.
	#[error("duplicate node id: {id}")]
	DuplicateNode {
		/// The repeated id.
		id: String,
	},
	/// Malformed graph-data or configuration JSON.
	#[error("invalid input JSON: {0}")]
	Parse(#[from] serde_json::Error),
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
