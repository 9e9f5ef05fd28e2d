//! World contract: the minimal trait a world must implement.
//!
//! Worlds provide domain data only: the concrete graph, problem or game, and
//! a JSON description of it. Worlds may NOT hash, bundle or choose policies;
//! those are runner concerns.

/// A world the scenario runner can package into a report bundle.
pub trait WorldV1 {
    /// Unique world identifier (e.g., `"ucs_routes"`).
    fn world_id(&self) -> &str;

    /// Description of the world's data, written to `fixture.json`.
    ///
    /// Must be integer-only JSON so it can be canonicalized.
    fn fixture(&self) -> serde_json::Value;
}
