//! Node storage for the Letter Trie.
//!
//! All nodes of a trie live in a `NodeArena` owned by that trie. Ownership flows
//! from the root towards the leaves through the child slots; the parent link of a
//! node is a plain handle used only to walk upwards while pruning. Slots of pruned
//! nodes are recycled by later insertions.

use super::node::{Letter, NodeId, TrieNode};
use super::Points;

/// Pending work while rendering a subtree.
#[derive(Debug, Clone, Copy)]
enum RenderStep {
    Enter(NodeId),
    Close,
}

/// Slot store owning every node of one trie.
#[derive(Debug, Clone)]
pub struct NodeArena {
    /// Node slots; `None` marks a released slot
    slots: Vec<Option<TrieNode>>,

    /// Released slots available for reuse
    free: Vec<NodeId>,

    /// The root node, never released
    root: NodeId,

    /// Number of occupied slots
    live: usize,
}

impl NodeArena {
    /// Creates an arena holding only a root node labelled `root_label`.
    pub fn new(root_label: char) -> Self {
        Self {
            slots: vec![Some(TrieNode::root(root_label))],
            free: Vec::new(),
            root: NodeId(0),
            live: 1,
        }
    }

    /// Handle of the root node.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Number of live nodes, root included.
    pub fn len(&self) -> usize {
        self.live
    }

    /// Returns the node behind a handle, `None` for released slots.
    pub fn get(&self, id: NodeId) -> Option<&TrieNode> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    fn get_mut(&mut self, id: NodeId) -> Option<&mut TrieNode> {
        self.slots.get_mut(id.0).and_then(Option::as_mut)
    }

    /// Returns the child of `node` for `letter`.
    pub fn child(&self, node: NodeId, letter: Letter) -> Option<NodeId> {
        self.get(node).and_then(|n| n.child(letter))
    }

    /// Whether `node` has at least one child.
    pub fn has_children(&self, node: NodeId) -> bool {
        self.get(node).is_some_and(TrieNode::has_children)
    }

    /// Points stored at `node`.
    pub fn value(&self, node: NodeId) -> Option<Points> {
        self.get(node).and_then(TrieNode::value)
    }

    /// Stores `value` at `node`. Returns `false` if the handle is stale.
    pub fn set_value(&mut self, node: NodeId, value: Option<Points>) -> bool {
        match self.get_mut(node) {
            Some(n) => {
                n.value = value;
                true
            }
            None => false,
        }
    }

    /// Creates a child of `parent` for `letter` and registers it in the parent's slot.
    ///
    /// An existing child is never replaced: if the slot is already occupied that child
    /// is returned. Returns `None` only when `parent` is stale.
    pub fn attach(&mut self, parent: NodeId, letter: Letter) -> Option<NodeId> {
        let existing = self.get(parent)?.child(letter);
        if existing.is_some() {
            return existing;
        }

        let id = self.allocate(TrieNode::child_of(parent, letter));
        if let Some(p) = self.get_mut(parent) {
            p.children[letter.index()] = Some(id);
        }
        tracing::trace!(letter = %letter.as_char(), node = id.0, "attached trie node");
        Some(id)
    }

    /// Walks one child link per letter starting at `start`.
    ///
    /// Returns the node at the end of the path, `start` itself for an empty path, or
    /// `None` as soon as a link is missing. Never modifies the tree.
    pub fn find(&self, start: NodeId, letters: &[Letter]) -> Option<NodeId> {
        let mut current = start;
        for &letter in letters {
            current = self.child(current, letter)?;
        }
        self.get(current).map(|_| current)
    }

    /// Walks the path for `letters`, creating every missing node along the way.
    ///
    /// Nodes shared with other keys are reused. Returns the terminal node, or `None`
    /// if `start` is stale.
    pub fn ensure_path(&mut self, start: NodeId, letters: &[Letter]) -> Option<NodeId> {
        let mut current = start;
        self.get(current)?;
        for &letter in letters {
            current = match self.child(current, letter) {
                Some(next) => next,
                None => self.attach(current, letter)?,
            };
        }
        Some(current)
    }

    /// Removes the value held at `target` and prunes nodes that became unnecessary.
    ///
    /// A target that still has children stays in place as a pure prefix node.
    /// Otherwise it is detached, and the walk continues upwards removing every
    /// ancestor left without children and without a value. The walk stops at the
    /// first ancestor that still has children, holds a value, or is the root.
    ///
    /// Returns the number of nodes removed.
    pub fn delete_node(&mut self, target: NodeId) -> usize {
        if !self.set_value(target, None) {
            return 0;
        }

        let mut pruned = 0;
        let mut current = target;
        while current != self.root {
            let (parent, letter) = match self.get(current) {
                Some(node) if !node.has_children() && node.value().is_none() => {
                    (node.parent(), node.letter())
                }
                _ => break,
            };

            if let (Some(parent), Some(letter)) = (parent, letter) {
                if let Some(p) = self.get_mut(parent) {
                    p.children[letter.index()] = None;
                }
            }
            self.release(current);
            pruned += 1;

            match parent {
                Some(parent) => current = parent,
                None => break,
            }
        }

        if pruned > 0 {
            tracing::trace!(pruned, "pruned trie nodes");
        }
        pruned
    }

    /// Canonical text form of the subtree rooted at `node`.
    ///
    /// The label comes first, followed by `[value]` for entries and by the children's
    /// renderings in alphabetical order wrapped in parentheses when there are any.
    pub fn render(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.render_into(node, &mut out);
        out
    }

    /// Depth-first walk with an explicit stack, so key length never limits the
    /// depth that can be rendered.
    fn render_into(&self, start: NodeId, out: &mut String) {
        let mut stack = vec![RenderStep::Enter(start)];

        while let Some(step) = stack.pop() {
            let id = match step {
                RenderStep::Enter(id) => id,
                RenderStep::Close => {
                    out.push(')');
                    continue;
                }
            };
            let Some(node) = self.get(id) else {
                continue;
            };

            out.push(node.label());
            if let Some(value) = node.value() {
                out.push('[');
                out.push_str(&value.to_string());
                out.push(']');
            }
            if node.has_children() {
                out.push('(');
                stack.push(RenderStep::Close);
                // Reversed so the alphabetically first child is popped first
                let children: Vec<NodeId> = node.children().collect();
                stack.extend(children.into_iter().rev().map(RenderStep::Enter));
            }
        }
    }

    fn allocate(&mut self, node: TrieNode) -> NodeId {
        self.live += 1;
        match self.free.pop() {
            Some(id) => {
                if let Some(slot) = self.slots.get_mut(id.0) {
                    *slot = Some(node);
                }
                id
            }
            None => {
                self.slots.push(Some(node));
                NodeId(self.slots.len() - 1)
            }
        }
    }

    fn release(&mut self, id: NodeId) {
        if id == self.root {
            return;
        }
        if let Some(slot) = self.slots.get_mut(id.0) {
            if slot.take().is_some() {
                self.live -= 1;
                self.free.push(id);
            }
        }
    }
}
