use rustc_hash::FxBuildHasher;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;
type HashSet<T> = hashbrown::HashSet<T, FxBuildHasher>;

/// A directed graph of string-identified nodes. Cycles and self-loops are
/// allowed; parallel arcs are not: an ordered pair `(from, to)` is present or
/// absent, never duplicated.
///
/// Every arc is recorded at both endpoints (`u -> v` exists iff `v` is in
/// `u`'s outgoing set and `u` is in `v`'s incoming set), and all mutations
/// keep the two sides consistent. Because nodes refer to their neighbors by
/// id rather than by reference, `clone()` yields a fully independent graph.
///
/// Not internally synchronized.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: HashMap<String, Node>,
}

/// A node of [`Graph`], identified by its id. Two nodes in the same graph can
/// never share an id.
#[derive(Debug, Clone)]
pub struct Node {
    id: String,
    // Both sets stay unallocated until the first incident arc.
    incoming: HashSet<String>,
    outgoing: HashSet<String>,
}

impl Node {
    fn new(id: String) -> Self {
        Self {
            id,
            incoming: HashSet::default(),
            outgoing: HashSet::default(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Ids of the nodes with an arc pointing at this node.
    pub fn incoming(&self) -> impl Iterator<Item = &str> {
        self.incoming.iter().map(String::as_str)
    }

    /// Ids of the nodes this node points at.
    pub fn outgoing(&self) -> impl Iterator<Item = &str> {
        self.outgoing.iter().map(String::as_str)
    }

    pub fn in_degree(&self) -> usize {
        self.incoming.len()
    }

    pub fn out_degree(&self) -> usize {
        self.outgoing.len()
    }

    /// True when the node has no incoming arcs.
    pub fn is_source(&self) -> bool {
        self.incoming.is_empty()
    }

    /// True when the node has no outgoing arcs.
    pub fn is_sink(&self) -> bool {
        self.outgoing.is_empty()
    }
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from an adjacency relation, with one arc per
    /// `(key, value member)` pair. A node is created for every id appearing
    /// anywhere in the relation, key or value member, so leaf dependencies
    /// that are never keys still exist as nodes.
    pub fn from_adjacency<I, K, S, V>(adjacency: I) -> Self
    where
        I: IntoIterator<Item = (K, S)>,
        K: Into<String>,
        S: IntoIterator<Item = V>,
        V: Into<String>,
    {
        let mut graph = Self::new();
        for (from, successors) in adjacency {
            let from = from.into();
            graph.add_node(from.clone());
            for to in successors {
                let to = to.into();
                graph.add_node(to.clone());
                graph.add_arc(&from, &to);
            }
        }
        graph
    }

    /// Adds a node with the given id. Returns false without effect when the
    /// id is already taken.
    pub fn add_node(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        if self.nodes.contains_key(&id) {
            return false;
        }
        self.nodes.insert(id.clone(), Node::new(id));
        true
    }

    /// Records the arc `from -> to` at both endpoints. Returns false when
    /// either node is missing or the arc already exists.
    pub fn add_arc(&mut self, from: &str, to: &str) -> bool {
        if self.has_arc(from, to) || !self.nodes.contains_key(from) || !self.nodes.contains_key(to)
        {
            return false;
        }
        if let Some(node) = self.nodes.get_mut(from) {
            node.outgoing.insert(to.to_owned());
        }
        if let Some(node) = self.nodes.get_mut(to) {
            node.incoming.insert(from.to_owned());
        }
        true
    }

    /// Removes the arc `from -> to` from both endpoints. Returns false when
    /// either node or the arc is absent.
    pub fn remove_arc(&mut self, from: &str, to: &str) -> bool {
        if !self.nodes.contains_key(to) {
            return false;
        }
        let Some(from_node) = self.nodes.get_mut(from) else {
            return false;
        };
        if !from_node.outgoing.remove(to) {
            return false;
        }
        if let Some(to_node) = self.nodes.get_mut(to) {
            to_node.incoming.remove(from);
        }
        true
    }

    /// Removes a node together with every arc incident to it, in both
    /// directions. Returns false when the node is absent.
    pub fn remove_node(&mut self, id: &str) -> bool {
        let Some(node) = self.nodes.remove(id) else {
            return false;
        };
        for from in &node.incoming {
            if let Some(n) = self.nodes.get_mut(from) {
                n.outgoing.remove(id);
            }
        }
        for to in &node.outgoing {
            if let Some(n) = self.nodes.get_mut(to) {
                n.incoming.remove(id);
            }
        }
        true
    }

    pub fn has_node(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn has_arc(&self, from: &str, to: &str) -> bool {
        self.nodes
            .get(from)
            .is_some_and(|n| n.outgoing.contains(to))
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// All nodes, in unspecified order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    pub fn node_ids(&self) -> Vec<String> {
        self.nodes.keys().cloned().collect()
    }

    /// Ids of the nodes without incoming arcs.
    pub fn sources(&self) -> Vec<&str> {
        self.nodes
            .values()
            .filter(|n| n.is_source())
            .map(|n| n.id())
            .collect()
    }
}
