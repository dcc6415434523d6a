//! The built-in arrow-vs-dot course.
//!
//! Five tasks over the same three-node vocabulary: a variable (or
//! expression) node, the two member-access operator nodes, and a struct
//! member node. Plain immutable data; the engine only ever looks tasks up
//! by index.

use crate::graph::{Node, NodeKind, Pin, PinType};
use crate::task::Task;

fn dot_operator() -> Node {
    Node {
        id: "node-dot".into(),
        title: "Dot Operator".into(),
        kind: NodeKind::Operator,
        x: 250.0,
        y: 50.0,
        inputs: vec![Pin::new("in", "Object", PinType::Object)],
        outputs: vec![Pin::new("out", "Member", PinType::Member)],
        content: Some(".".into()),
    }
}

fn arrow_operator() -> Node {
    Node {
        id: "node-arrow".into(),
        title: "Arrow Operator".into(),
        kind: NodeKind::Operator,
        x: 250.0,
        y: 250.0,
        inputs: vec![Pin::new("in", "Pointer", PinType::Pointer)],
        outputs: vec![Pin::new("out", "Member", PinType::Member)],
        content: Some("->".into()),
    }
}

fn struct_member() -> Node {
    Node {
        id: "node-mem".into(),
        title: "Struct Member".into(),
        kind: NodeKind::Member,
        x: 500.0,
        y: 150.0,
        inputs: vec![Pin::new("in", "Access", PinType::Member)],
        outputs: vec![],
        content: Some("int hp".into()),
    }
}

/// The start node every task varies: title, payload, and output pin type.
fn variable(title: &str, content: &str, out_label: &str, out_type: PinType) -> Node {
    Node {
        id: "node-var".into(),
        title: title.into(),
        kind: NodeKind::Variable,
        x: 20.0,
        y: 150.0,
        inputs: vec![],
        outputs: vec![Pin::new("out", out_label, out_type)],
        content: Some(content.into()),
    }
}

fn task(
    id: u32,
    context: &str,
    explanation: &str,
    start: Node,
    correct_operator: &str,
) -> Task {
    Task {
        id,
        context: context.into(),
        explanation: explanation.into(),
        nodes: vec![start, dot_operator(), arrow_operator(), struct_member()],
        correct_path: vec![
            "node-var".into(),
            correct_operator.into(),
            "node-mem".into(),
        ],
    }
}

/// The standard five-task course, in play order.
pub fn standard_course() -> Vec<Task> {
    vec![
        task(
            1,
            "You have an object `p1` (not a pointer). Connect the nodes to reach `hp`.",
            "Objects use the dot (.) operator to access their members.",
            variable("Variable", "Player p1", "Object", PinType::Object),
            "node-dot",
        ),
        task(
            2,
            "You have a pointer `ptr`. How do you get to `hp`?",
            "Pointers require the arrow (->) operator. It is shorthand for (*ptr).",
            variable("Pointer Variable", "Player* ptr", "Pointer", PinType::Pointer),
            "node-arrow",
        ),
        task(
            3,
            "We dereferenced the pointer: `(*ptr)`. That turns the address back into an object. Which operator now?",
            "(*ptr) yields the object itself, and objects take the dot (.).",
            variable("Expression", "(*ptr)", "Object", PinType::Object),
            "node-dot",
        ),
        task(
            4,
            "Accessing the array element `team[0]`. The array stores Player objects.",
            "The [] operator yields a reference to the object in the array. Use the dot.",
            variable("Array Element", "team[0]", "Object", PinType::Object),
            "node-dot",
        ),
        task(
            5,
            "Inside a class method we use `this`. It is a pointer to the current object.",
            "`this` in C++ is always a pointer. The arrow is required.",
            variable("Keyword", "this", "Pointer", PinType::Pointer),
            "node-arrow",
        ),
    ]
}
