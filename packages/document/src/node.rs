use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Component configuration: an open JSON object keyed by field name.
///
/// Keys not declared in a component's field schema are preserved verbatim
/// across save/load and ignored by rendering. `serde_json::Map` keeps keys
/// sorted, so serialization order is stable.
pub type Props = serde_json::Map<String, Value>;

/// The root zone of a page: an ordered sequence of placed components.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ComponentTree {
    #[serde(default)]
    pub nodes: Vec<ComponentNode>,
}

/// One placed component.
///
/// `component` must name a registered component type at render time.
/// Nesting happens only through named slots; each slot holds an ordered
/// child list owned by this node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentNode {
    #[serde(rename = "type")]
    pub component: String,

    #[serde(default, skip_serializing_if = "Props::is_empty")]
    pub props: Props,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub slots: BTreeMap<String, Vec<ComponentNode>>,
}

impl ComponentTree {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn with_node(mut self, node: ComponentNode) -> Self {
        self.nodes.push(node);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Total number of nodes in the tree, slot children included.
    pub fn node_count(&self) -> usize {
        self.nodes.iter().map(ComponentNode::subtree_size).sum()
    }
}

impl ComponentNode {
    pub fn new(component: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            props: Props::new(),
            slots: BTreeMap::new(),
        }
    }

    pub fn with_prop(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.props.insert(key.into(), value.into());
        self
    }

    pub fn with_slot(mut self, name: impl Into<String>, children: Vec<ComponentNode>) -> Self {
        self.slots.insert(name.into(), children);
        self
    }

    pub fn slot(&self, name: &str) -> &[ComponentNode] {
        self.slots.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Node count of this subtree, itself included.
    pub fn subtree_size(&self) -> usize {
        1 + self
            .slots
            .values()
            .flatten()
            .map(ComponentNode::subtree_size)
            .sum::<usize>()
    }
}
