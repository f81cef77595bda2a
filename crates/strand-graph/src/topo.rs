use std::cmp::Ordering;

use crate::alg;
use crate::graph::{Graph, Node};

/// Outcome of a topological sort: either a full linear extension of the
/// graph, or the ids of one dependency cycle that prevents it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TopoResult {
    Order(Vec<String>),
    Cycle(Vec<String>),
}

type Comparator = Box<dyn Fn(&str, &str) -> Ordering + Send + Sync>;

/// Kahn's algorithm with an ordered frontier.
///
/// The injected comparator must impose a strict total order over node ids,
/// consistent across calls. Nodes that become available at the same time are
/// emitted in comparator order, which makes the output reproducible even
/// though the underlying node collection is unordered. One sorter can be
/// reused across graphs.
pub struct TopoSorter {
    cmp: Comparator,
}

impl TopoSorter {
    pub fn new<F>(cmp: F) -> Self
    where
        F: Fn(&str, &str) -> Ordering + Send + Sync + 'static,
    {
        Self { cmp: Box::new(cmp) }
    }

    /// Ascending node id as the tie-break.
    pub fn by_id() -> Self {
        Self::new(|a, b| a.cmp(b))
    }

    /// Sorts `graph` into [`TopoResult::Order`], where the source of every
    /// arc precedes its target, or reports one [`TopoResult::Cycle`] found in
    /// the unresolved remainder. The caller's graph is never mutated; the
    /// consuming pass runs on a private clone.
    pub fn sort(&self, graph: &Graph) -> TopoResult {
        if graph.is_empty() {
            return TopoResult::Order(Vec::new());
        }

        let mut work = graph.clone();
        let mut order: Vec<String> = Vec::with_capacity(work.node_count());

        // Frontier of arc-free nodes, sorted descending so the comparator
        // minimum pops off the back.
        let mut frontier: Vec<String> = work.sources().into_iter().map(str::to_owned).collect();
        frontier.sort_by(|a, b| (self.cmp)(b, a));

        while let Some(id) = frontier.pop() {
            let successors: Vec<String> = work
                .node(&id)
                .map(|n| n.outgoing().map(str::to_owned).collect())
                .unwrap_or_default();
            for to in successors {
                work.remove_arc(&id, &to);
                if work.node(&to).is_some_and(Node::is_source) {
                    self.insert_sorted(&mut frontier, to);
                }
            }
            work.remove_node(&id);
            order.push(id);
        }

        if !work.is_empty() {
            // Whatever survived the frontier sits on or behind a cycle.
            return TopoResult::Cycle(alg::find_cycle(&work));
        }
        TopoResult::Order(order)
    }

    fn insert_sorted(&self, frontier: &mut Vec<String>, id: String) {
        let at = frontier.partition_point(|other| (self.cmp)(other, &id) == Ordering::Greater);
        frontier.insert(at, id);
    }
}
