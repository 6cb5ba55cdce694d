//! Traversal of rule chains through their predecessor links.

use crate::rules::node::Rule;

/// Nodes of the chain ending at `tail`, ordered from the root to `tail`.
pub fn root_first<'r, T>(tail: &'r dyn Rule<T>) -> Vec<&'r dyn Rule<T>> {
    let mut nodes = nearest_first(tail);
    nodes.reverse();
    nodes
}

/// Nodes of the chain ending at `tail`, ordered from `tail` back to the root.
pub fn nearest_first<'r, T>(tail: &'r dyn Rule<T>) -> Vec<&'r dyn Rule<T>> {
    let mut nodes = Vec::new();
    let mut current = Some(tail);
    while let Some(node) = current {
        nodes.push(node);
        current = node.previous();
    }
    nodes
}
