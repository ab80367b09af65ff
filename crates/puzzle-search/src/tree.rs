//! Arena-allocated exploration tree.
//!
//! Nodes live in a slot vector and refer to each other by [`NodeId`]. A node
//! owns its children through the index list; the parent link is a plain index
//! used only to walk back to the root. Pruned subtrees are freed and their
//! slots reused.

use std::ops::Index;

use smallvec::SmallVec;

use crate::path::SolutionPath;

/// Index of a node inside a [`SearchTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A puzzle state together with its position in the exploration tree
#[derive(Debug)]
pub struct SearchNode<P> {
    state: P,
    parent: Option<NodeId>,
    children: SmallVec<[NodeId; 4]>,
}

impl<P> SearchNode<P> {
    fn new(state: P, parent: Option<NodeId>) -> Self {
        Self {
            state,
            parent,
            children: SmallVec::new(),
        }
    }

    pub fn state(&self) -> &P {
        &self.state
    }

    /// `None` for the root
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Children in insertion order
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// Exploration tree built by a single solver call
#[derive(Debug)]
pub struct SearchTree<P> {
    slots: Vec<Option<SearchNode<P>>>,
    free: Vec<usize>,
    root: NodeId,
    live: usize,
}

impl<P> SearchTree<P> {
    /// Create a tree holding only the root state
    pub fn new(root_state: P) -> Self {
        Self {
            slots: vec![Some(SearchNode::new(root_state, None))],
            free: Vec::new(),
            root: NodeId(0),
            live: 1,
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Number of nodes currently attached to the tree
    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Look up a node, returning `None` if its slot was freed
    pub fn get(&self, id: NodeId) -> Option<&SearchNode<P>> {
        self.slots.get(id.0).and_then(|slot| slot.as_ref())
    }

    /// Number of edges between `id` and the root
    pub fn depth(&self, id: NodeId) -> usize {
        let mut depth = 0;
        let mut cursor = self.get(id).and_then(SearchNode::parent);
        while let Some(parent) = cursor {
            depth += 1;
            cursor = self.get(parent).and_then(SearchNode::parent);
        }
        depth
    }

    /// Append `state` as the last child of `parent`
    pub fn add_child(&mut self, parent: NodeId, state: P) -> NodeId {
        let node = SearchNode::new(state, Some(parent));
        let id = match self.free.pop() {
            Some(index) => {
                self.slots[index] = Some(node);
                NodeId(index)
            }
            None => {
                self.slots.push(Some(node));
                NodeId(self.slots.len() - 1)
            }
        };
        if let Some(Some(parent_node)) = self.slots.get_mut(parent.0) {
            parent_node.children.push(id);
        }
        self.live += 1;
        id
    }

    /// Drop every descendant of `id`, leaving it a leaf.
    ///
    /// Returns the number of nodes freed.
    pub fn detach_children(&mut self, id: NodeId) -> usize {
        let mut pending: Vec<NodeId> = match self.slots.get_mut(id.0) {
            Some(Some(node)) => std::mem::take(&mut node.children).into_vec(),
            _ => return 0,
        };

        let mut freed = 0;
        while let Some(child) = pending.pop() {
            if let Some(node) = self.slots.get_mut(child.0).and_then(Option::take) {
                pending.extend(node.children);
                self.free.push(child.0);
                freed += 1;
            }
        }
        self.live -= freed;
        freed
    }

    /// Collapse the ancestor chain of `leaf` into a root-to-leaf path.
    ///
    /// The rest of the tree is dropped with `self`.
    pub fn into_path(mut self, leaf: NodeId) -> SolutionPath<P> {
        let mut states = Vec::new();
        let mut cursor = Some(leaf);
        while let Some(id) = cursor {
            let Some(node) = self.slots.get_mut(id.0).and_then(Option::take) else {
                break;
            };
            cursor = node.parent;
            states.push(node.state);
        }
        states.reverse();
        SolutionPath::from_states(states)
    }
}

impl<P> Index<NodeId> for SearchTree<P> {
    type Output = SearchNode<P>;

    fn index(&self, id: NodeId) -> &SearchNode<P> {
        match self.get(id) {
            Some(node) => node,
            None => panic!("search node {} was freed", id.0),
        }
    }
}
