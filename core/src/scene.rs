//! The owned visual output tree.
//!
//! Tally does not render anything itself and does not depend on a host scene graph. Components
//! that produce visuals own a [`VisualTree`]: a flat arena of [`Node`]s addressed by [`NodeId`]
//! handles, with explicit parent/child links. The component that creates a node is its sole owner
//! and the only caller of [`VisualTree::detach`]; hosts receive the tree by shared reference and
//! walk it to draw.
//!
//! Positions are absolute scene coordinates with `y` growing downward; parenting conveys
//! ownership and draw grouping, not a coordinate transform.

use crate::color::Rgba;
use log::trace;

/// A 2D point or offset in scene units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Handle to a node in a [`VisualTree`].
///
/// Handles stay valid until the node is detached; afterwards, lookups return [`None`]. Slots are
/// reused, so a stale handle held across a detach may later resolve to an unrelated node — don't
/// hold handles to nodes you don't own.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct NodeId(usize);

/// A connected polyline drawn as a stroke, optionally with arrowheads at either end.
#[derive(Clone, Debug, PartialEq)]
pub struct Polyline {
    pub points: Vec<Vec2>,
    pub stroke: Rgba,
    pub line_width: f32,
    pub start_arrow: bool,
    pub end_arrow: bool,
    pub arrow_size: f32,
    pub opacity: f32,
    pub z_index: i32,
}

impl Default for Polyline {
    fn default() -> Self {
        Self {
            points: Vec::new(),
            stroke: Rgba::WHITE,
            line_width: 1.0,
            start_arrow: false,
            end_arrow: false,
            arrow_size: 0.0,
            opacity: 1.0,
            z_index: 0,
        }
    }
}

/// A single run of text anchored at its position.
#[derive(Clone, Debug, PartialEq)]
pub struct Text {
    pub content: String,
    pub position: Vec2,
    pub font_size: f32,
    pub fill: Rgba,
    pub opacity: f32,
}

impl Default for Text {
    fn default() -> Self {
        Self {
            content: String::new(),
            position: Vec2::ZERO,
            font_size: 1.0,
            fill: Rgba::WHITE,
            opacity: 1.0,
        }
    }
}

/// Payload of a tree node.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    /// Invisible grouping node; the tree root is one.
    Group,
    Polyline(Polyline),
    Text(Text),
}

#[derive(Clone, Debug, PartialEq)]
struct Slot {
    node: Node,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Arena-owned tree of visual nodes.
///
/// Storage is a slab: detached slots go on a free list and are reused by later attaches, so a
/// reconciler that churns nodes does not grow the arena without bound.
#[derive(Clone, Debug, PartialEq)]
pub struct VisualTree {
    slots: Vec<Option<Slot>>,
    free: Vec<usize>,
    root: NodeId,
}

impl Default for VisualTree {
    fn default() -> Self {
        Self::new()
    }
}

impl VisualTree {
    /// Creates a tree containing only a root [`Node::Group`].
    pub fn new() -> Self {
        Self {
            slots: vec![Some(Slot {
                node: Node::Group,
                parent: None,
                children: Vec::new(),
            })],
            free: Vec::new(),
            root: NodeId(0),
        }
    }

    /// The root group node. Never detachable.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Adds `node` as the last child of `parent` and returns its handle.
    ///
    /// # Panics
    ///
    /// Panics if `parent` refers to a detached node.
    pub fn attach(&mut self, parent: NodeId, node: Node) -> NodeId {
        let id = match self.free.pop() {
            Some(index) => {
                self.slots[index] = Some(Slot {
                    node,
                    parent: Some(parent),
                    children: Vec::new(),
                });
                NodeId(index)
            }
            None => {
                self.slots.push(Some(Slot {
                    node,
                    parent: Some(parent),
                    children: Vec::new(),
                }));
                NodeId(self.slots.len() - 1)
            }
        };
        match self.slots.get_mut(parent.0).and_then(Option::as_mut) {
            Some(slot) => slot.children.push(id),
            None => panic!("attach target {parent:?} is not in the tree"),
        }
        trace!("attached node {id:?} under {parent:?}");
        id
    }

    /// Removes `id` and its entire subtree from the tree, returning their slots to the free list.
    ///
    /// Does nothing if the node was already detached; detaching the root is ignored.
    pub fn detach(&mut self, id: NodeId) {
        if id == self.root {
            return;
        }
        let Some(slot) = self.slots.get_mut(id.0).and_then(Option::take) else {
            return;
        };
        if let Some(parent) = slot.parent {
            if let Some(parent_slot) = self.slots[parent.0].as_mut() {
                parent_slot.children.retain(|child| *child != id);
            }
        }
        let mut pending = slot.children;
        while let Some(child) = pending.pop() {
            if let Some(child_slot) = self.slots[child.0].take() {
                pending.extend(child_slot.children);
                self.free.push(child.0);
            }
        }
        self.free.push(id.0);
        trace!("detached node {id:?} and its subtree");
    }

    /// Whether `id` currently resolves to a node.
    pub fn contains(&self, id: NodeId) -> bool {
        self.slots.get(id.0).map_or(false, Option::is_some)
    }

    /// Number of live nodes, including the root.
    pub fn node_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.slots.get(id.0)?.as_ref().map(|slot| &slot.node)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.slots.get_mut(id.0)?.as_mut().map(|slot| &mut slot.node)
    }

    /// Child handles of `id`, in attach order. Empty for detached nodes.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.slots
            .get(id.0)
            .and_then(Option::as_ref)
            .map_or(&[], |slot| slot.children.as_slice())
    }

    pub fn polyline(&self, id: NodeId) -> Option<&Polyline> {
        match self.get(id)? {
            Node::Polyline(line) => Some(line),
            _ => None,
        }
    }

    pub fn polyline_mut(&mut self, id: NodeId) -> Option<&mut Polyline> {
        match self.get_mut(id)? {
            Node::Polyline(line) => Some(line),
            _ => None,
        }
    }

    pub fn text(&self, id: NodeId) -> Option<&Text> {
        match self.get(id)? {
            Node::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn text_mut(&mut self, id: NodeId) -> Option<&mut Text> {
        match self.get_mut(id)? {
            Node::Text(text) => Some(text),
            _ => None,
        }
    }
}
