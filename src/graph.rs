//! Node and pin data model, and the mutable graph store.
//!
//! A [`GraphStore`] holds the per-task working copy of the node layout: it
//! is seeded from an immutable task template and then mutated freely by the
//! interaction controller as the user drags nodes around. Connections live
//! separately in [`crate::links::ConnectionSet`].

use serde::{Deserialize, Serialize};

/// Semantic role of a node in the exercise graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeKind {
    /// The chain start: a variable, expression, or keyword payload.
    Variable,
    /// A member-access operator (`.` or `->`).
    Operator,
    /// The struct member being accessed.
    Member,
    /// Reserved for exercises that render a separate result node.
    Result,
}

/// Whether a pin accepts or emits connections. Fixed at creation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PinDirection {
    Input,
    Output,
}

/// Display tag for a pin's value category.
///
/// Only used for presentation (pin dot colors and labels); wiring rules
/// enforce direction, not type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PinType {
    Exec,
    Object,
    Pointer,
    Member,
}

/// A direction-fixed attachment point on a node.
///
/// Pin ids are unique within their owning node's input or output list, not
/// globally; a pin is addressed as (node id, pin id, direction).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pin {
    pub id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub pin_type: PinType,
}

impl Pin {
    pub fn new(id: &str, label: &str, pin_type: PinType) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            pin_type,
        }
    }
}

/// A positioned graph vertex with ordered input and output pin lists.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    /// Stable identifier; survives any number of drags.
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub inputs: Vec<Pin>,
    #[serde(default)]
    pub outputs: Vec<Pin>,
    /// Payload text shown in the node body, e.g. `Player p1` or `->`.
    #[serde(default)]
    pub content: Option<String>,
}

impl Node {
    /// Index of a pin within its own input or output list.
    pub fn pin_index(&self, pin_id: &str, direction: PinDirection) -> Option<usize> {
        self.pins(direction).iter().position(|p| p.id == pin_id)
    }

    /// The pin list for one side of the node.
    pub fn pins(&self, direction: PinDirection) -> &[Pin] {
        match direction {
            PinDirection::Input => &self.inputs,
            PinDirection::Output => &self.outputs,
        }
    }

    /// Payload text, or the empty string for nodes without one.
    pub fn content_text(&self) -> &str {
        self.content.as_deref().unwrap_or_default()
    }
}

/// The single source of truth for mutable node layout during a task attempt.
///
/// Seeded via [`load_template`](Self::load_template) with a deep copy of the
/// task's initial layout, so the template itself is never mutated and can be
/// replayed on retry.
#[derive(Debug, Default)]
pub struct GraphStore {
    nodes: Vec<Node>,
}

impl GraphStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all nodes with a deep copy of the template layout.
    ///
    /// Any prior working state is discarded wholesale; nothing is merged.
    pub fn load_template(&mut self, template: &[Node]) {
        self.nodes = template.to_vec();
    }

    /// Overwrite a node's position unconditionally. No bounds checking.
    ///
    /// Unknown ids are ignored: a drag can only originate from a node that
    /// exists, so there is nothing useful to report here.
    pub fn move_node(&mut self, id: &str, x: f32, y: f32) {
        if let Some(node) = self.nodes.iter_mut().find(|n| n.id == id) {
            node.x = x;
            node.y = y;
        }
    }

    /// Look up a node by id.
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// First node of the given kind, if any.
    pub fn node_of_kind(&self, kind: NodeKind) -> Option<&Node> {
        self.nodes.iter().find(|n| n.kind == kind)
    }

    /// All nodes, in template order (also the render order).
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
