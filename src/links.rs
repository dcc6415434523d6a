//! The connection set: directed wires between pins.
//!
//! Wires always flow output → input in storage, no matter which end the
//! user started dragging from. Direction is fixed by one normalization step
//! up front, so both drag origins go through identical validation.

use crate::error::ConnectError;
use crate::graph::{GraphStore, PinDirection};

/// One end of a wire as the user touched it: a pin on a node, before any
/// direction normalization.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WireEnd {
    pub node_id: String,
    pub pin_id: String,
    pub direction: PinDirection,
}

impl WireEnd {
    pub fn new(node_id: &str, pin_id: &str, direction: PinDirection) -> Self {
        Self {
            node_id: node_id.to_string(),
            pin_id: pin_id.to_string(),
            direction,
        }
    }
}

/// A directed edge from an output pin to an input pin.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Connection {
    /// Derived from the endpoints; stable for a given wire.
    pub id: String,
    pub from_node: String,
    pub from_pin: String,
    pub to_node: String,
    pub to_pin: String,
}

impl Connection {
    fn new(source: &WireEnd, target: &WireEnd) -> Self {
        Self {
            id: format!(
                "{}:{}-{}:{}",
                source.node_id, source.pin_id, target.node_id, target.pin_id
            ),
            from_node: source.node_id.clone(),
            from_pin: source.pin_id.clone(),
            to_node: target.node_id.clone(),
            to_pin: target.pin_id.clone(),
        }
    }
}

/// Order the two ends of a wire as (source, target).
///
/// Whichever end is an output becomes the source; whichever is an input
/// becomes the target. Two ends on the same side cannot form a wire.
fn normalize(a: WireEnd, b: WireEnd) -> Result<(WireEnd, WireEnd), ConnectError> {
    match (a.direction, b.direction) {
        (PinDirection::Output, PinDirection::Input) => Ok((a, b)),
        (PinDirection::Input, PinDirection::Output) => Ok((b, a)),
        (same, _) => Err(ConnectError::SameDirection(same)),
    }
}

/// Holds all settled wires for the current task attempt.
#[derive(Debug, Default)]
pub struct ConnectionSet {
    connections: Vec<Connection>,
}

impl ConnectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attempt to add a wire between two ends.
    ///
    /// Runs, in order: endpoint existence checks against the graph,
    /// direction normalization, the self-loop rule, and the single-input
    /// arity rule (an existing wire into the same target is removed before
    /// the new one is inserted). Fan-out from an output is unconstrained.
    ///
    /// A rejection leaves the set untouched; callers treat it as "no edge".
    pub fn connect(
        &mut self,
        graph: &GraphStore,
        a: WireEnd,
        b: WireEnd,
    ) -> Result<&Connection, ConnectError> {
        for end in [&a, &b] {
            let exists = graph
                .node(&end.node_id)
                .and_then(|n| n.pin_index(&end.pin_id, end.direction))
                .is_some();
            if !exists {
                return Err(ConnectError::PinNotFound {
                    node_id: end.node_id.clone(),
                    pin_id: end.pin_id.clone(),
                    direction: end.direction,
                });
            }
        }

        let (source, target) = normalize(a, b)?;

        if source.node_id == target.node_id {
            return Err(ConnectError::SelfLoop);
        }

        // Single-input arity: the new wire silently replaces any wire
        // already ending at this input.
        self.connections
            .retain(|c| !(c.to_node == target.node_id && c.to_pin == target.pin_id));

        self.connections.push(Connection::new(&source, &target));
        Ok(self.connections.last().expect("just pushed"))
    }

    /// Remove all wires.
    pub fn clear(&mut self) {
        self.connections.clear();
    }

    /// All wires, in insertion order.
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// First wire whose source node is `node_id`, if any. The traversal in
    /// the validator follows these forward.
    pub fn from_source(&self, node_id: &str) -> Option<&Connection> {
        self.connections.iter().find(|c| c.from_node == node_id)
    }

    /// The wire ending at the given (node, input-pin), if any. The arity
    /// rule guarantees at most one.
    pub fn into_target(&self, node_id: &str, pin_id: &str) -> Option<&Connection> {
        self.connections
            .iter()
            .find(|c| c.to_node == node_id && c.to_pin == pin_id)
    }

    pub fn len(&self) -> usize {
        self.connections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }
}
