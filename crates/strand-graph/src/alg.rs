//! Algorithm helpers over [`Graph`].

use rustc_hash::FxBuildHasher;

use crate::graph::Graph;

type HashSet<T> = hashbrown::HashSet<T, FxBuildHasher>;

struct Frame {
    id: String,
    preds: Vec<String>,
    next: usize,
}

impl Frame {
    fn new(graph: &Graph, id: String) -> Self {
        let preds = graph
            .node(&id)
            .map(|n| n.incoming().map(str::to_owned).collect())
            .unwrap_or_default();
        Self { id, preds, next: 0 }
    }
}

/// Finds one cycle in `graph`, returning its node ids in forward arc order,
/// or an empty vector when the graph is acyclic. A self-loop comes back as a
/// single-element cycle.
///
/// When several cycles coexist, which one is reported depends on internal
/// iteration order; callers get *some* genuine cycle, not a specific one.
pub fn find_cycle(graph: &Graph) -> Vec<String> {
    if graph.is_empty() {
        return Vec::new();
    }

    // Only nodes with both incoming and outgoing arcs can sit on a cycle.
    let mut candidates: Vec<String> = graph
        .nodes()
        .filter(|n| !n.is_source() && !n.is_sink())
        .map(|n| n.id().to_owned())
        .collect();

    // Private working copy, allocated on the first exhausted search. Nodes
    // visited by an exhausted search are provably cycle-free and get dropped
    // from it between rounds, so each node is walked at most twice overall.
    let mut reduced: Option<Graph> = None;

    while let Some(start) = candidates.first().cloned() {
        let search_in = reduced.as_ref().unwrap_or(graph);
        let mut visited: HashSet<String> = HashSet::default();
        if let Some(cycle) = search_backward(search_in, start, &mut visited) {
            return cycle;
        }

        if reduced.is_none() {
            if visited.len() == graph.node_count() {
                return Vec::new();
            }
            reduced = Some(reduced_copy(graph));
        }
        if let Some(rest) = reduced.as_mut() {
            for id in &visited {
                rest.remove_node(id);
            }
            candidates = rest.node_ids();
        }
    }

    Vec::new()
}

/// Depth-first walk along *incoming* arcs, on an explicit heap stack so the
/// recursion depth never depends on graph diameter. Searching backward means
/// that when a node already on the active stack comes up again, the stack
/// read top-down is the cycle in forward (successor) order.
///
/// A node that was visited on an exhausted branch is skipped, not reported:
/// only an on-stack repeat closes a cycle.
fn search_backward(
    graph: &Graph,
    start: String,
    visited: &mut HashSet<String>,
) -> Option<Vec<String>> {
    let mut stack: Vec<Frame> = Vec::new();
    let mut on_stack: HashSet<String> = HashSet::default();

    visited.insert(start.clone());
    on_stack.insert(start.clone());
    stack.push(Frame::new(graph, start));

    while let Some(top) = stack.last_mut() {
        if top.next >= top.preds.len() {
            on_stack.remove(&top.id);
            stack.pop();
            continue;
        }
        let pred = top.preds[top.next].clone();
        top.next += 1;

        if on_stack.contains(&pred) {
            let Some(at) = stack.iter().position(|f| f.id == pred) else {
                debug_assert!(false, "on-stack id missing from the frame stack");
                continue;
            };
            return Some(stack[at..].iter().rev().map(|f| f.id.clone()).collect());
        }
        if visited.insert(pred.clone()) {
            on_stack.insert(pred.clone());
            stack.push(Frame::new(graph, pred));
        }
    }
    None
}

fn reduced_copy(graph: &Graph) -> Graph {
    let mut copy = graph.clone();
    let arc_poor: Vec<String> = copy
        .nodes()
        .filter(|n| n.is_source() || n.is_sink())
        .map(|n| n.id().to_owned())
        .collect();
    for id in arc_poor {
        copy.remove_node(&id);
    }
    copy
}
