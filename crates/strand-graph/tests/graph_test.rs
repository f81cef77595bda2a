use strand_graph::Graph;

#[test]
fn from_adjacency_creates_nodes_for_every_mentioned_id() {
    let g = Graph::from_adjacency([("a", vec!["b", "c"]), ("d", vec![])]);

    assert_eq!(g.node_count(), 4);
    for id in ["a", "b", "c", "d"] {
        assert!(g.has_node(id), "missing node {id}");
    }
    assert!(g.has_arc("a", "b"));
    assert!(g.has_arc("a", "c"));
    assert!(!g.has_arc("b", "a"));
    assert!(!g.has_arc("a", "d"));
}

#[test]
fn from_adjacency_records_arcs_at_both_endpoints() {
    let g = Graph::from_adjacency([("a", vec!["b"])]);

    let a = g.node("a").expect("node a");
    let b = g.node("b").expect("node b");
    assert_eq!(a.outgoing().collect::<Vec<_>>(), vec!["b"]);
    assert_eq!(a.in_degree(), 0);
    assert_eq!(b.incoming().collect::<Vec<_>>(), vec!["a"]);
    assert_eq!(b.out_degree(), 0);
}

#[test]
fn add_node_rejects_a_duplicate_id() {
    let mut g = Graph::new();
    assert!(g.add_node("a"));
    assert!(!g.add_node("a"));
    assert_eq!(g.node_count(), 1);
}

#[test]
fn add_arc_requires_both_endpoints() {
    let mut g = Graph::new();
    g.add_node("a");

    assert!(!g.add_arc("a", "missing"));
    assert!(!g.add_arc("missing", "a"));
    assert!(!g.has_arc("a", "missing"));
}

#[test]
fn add_arc_is_idempotent() {
    let mut g = Graph::new();
    g.add_node("a");
    g.add_node("b");

    assert!(g.add_arc("a", "b"));
    assert!(!g.add_arc("a", "b"));

    let a = g.node("a").expect("node a");
    let b = g.node("b").expect("node b");
    assert_eq!(a.out_degree(), 1);
    assert_eq!(b.in_degree(), 1);
}

#[test]
fn self_loops_are_legal() {
    let mut g = Graph::new();
    g.add_node("a");

    assert!(g.add_arc("a", "a"));
    assert!(g.has_arc("a", "a"));
    let a = g.node("a").expect("node a");
    assert_eq!(a.in_degree(), 1);
    assert_eq!(a.out_degree(), 1);
}

#[test]
fn remove_arc_clears_both_endpoints() {
    let mut g = Graph::from_adjacency([("a", vec!["b"])]);

    assert!(g.remove_arc("a", "b"));
    assert!(!g.has_arc("a", "b"));
    assert!(g.node("a").is_some_and(|n| n.is_sink()));
    assert!(g.node("b").is_some_and(|n| n.is_source()));

    assert!(!g.remove_arc("a", "b"));
    assert!(!g.remove_arc("a", "missing"));
    assert!(!g.remove_arc("missing", "b"));
}

#[test]
fn remove_node_removes_every_incident_arc() {
    let mut g = Graph::from_adjacency([("a", vec!["x"]), ("b", vec!["x"]), ("x", vec!["c", "d"])]);

    assert!(g.remove_node("x"));
    assert!(!g.has_node("x"));
    assert!(!g.has_arc("a", "x"));
    assert!(!g.has_arc("b", "x"));
    assert!(!g.has_arc("x", "c"));
    assert!(!g.has_arc("x", "d"));
    for id in ["a", "b", "c", "d"] {
        let n = g.node(id).expect("surviving node");
        assert_eq!(n.in_degree() + n.out_degree(), 0, "stale arc on {id}");
    }

    assert!(!g.remove_node("x"));
}

#[test]
fn remove_node_handles_a_self_loop() {
    let mut g = Graph::new();
    g.add_node("a");
    g.add_arc("a", "a");

    assert!(g.remove_node("a"));
    assert!(g.is_empty());
}

#[test]
fn clone_is_fully_independent() {
    let mut original = Graph::from_adjacency([("a", vec!["b"]), ("b", vec!["c"])]);
    let mut copy = original.clone();

    copy.remove_arc("a", "b");
    copy.remove_node("c");
    copy.add_node("d");
    copy.add_arc("b", "d");

    assert!(original.has_arc("a", "b"));
    assert!(original.has_node("c"));
    assert!(!original.has_node("d"));

    original.remove_node("b");
    assert!(copy.has_node("b"));
    assert!(copy.has_arc("b", "d"));
}

#[test]
fn sources_are_the_nodes_without_incoming_arcs() {
    let g = Graph::from_adjacency([("a", vec!["c"]), ("b", vec!["c"]), ("c", vec![])]);

    let mut sources = g.sources();
    sources.sort_unstable();
    assert_eq!(sources, vec!["a", "b"]);
}

#[test]
fn empty_graph_reports_empty() {
    let g = Graph::new();
    assert!(g.is_empty());
    assert_eq!(g.node_count(), 0);
    assert_eq!(g.node_ids(), Vec::<String>::new());
}
