//! Shared nesting state for composite tag families.
//!
//! A family is a named group of related tags (currently "list") that share a
//! nesting stack and depth-scoped counters during one parse pass. The state
//! is owned by the caller and handed to strategies through the tag context,
//! so concurrent parses can never observe each other's nesting.

use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct FamilyState {
    stacks: HashMap<String, Vec<String>>,
    counters: HashMap<String, u32>,
}

fn counter_key(family: &str, tag: &str, depth: usize) -> String {
    format!("{family}-{tag}-{depth}")
}

impl FamilyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all nesting context. Called at the start of every parse pass.
    pub fn reset(&mut self) {
        self.stacks.clear();
        self.counters.clear();
    }

    /// Current nesting depth of a family (0 when no scope is open).
    pub fn depth(&self, family: &str) -> usize {
        self.stacks.get(family).map_or(0, Vec::len)
    }

    /// The tag kind of the innermost open scope.
    pub fn top(&self, family: &str) -> Option<&str> {
        self.stacks
            .get(family)
            .and_then(|stack| stack.last())
            .map(String::as_str)
    }

    /// Open a nested scope and initialize its depth-scoped counter to zero.
    pub fn push(&mut self, family: &str, tag: &str) {
        let stack = self.stacks.entry(family.to_string()).or_default();
        stack.push(tag.to_string());
        let depth = stack.len();
        self.counters.insert(counter_key(family, tag, depth), 0);
    }

    /// Close the innermost scope. The scope's counter is deleted, so a
    /// sibling reopened at the same depth starts counting fresh.
    pub fn pop(&mut self, family: &str) -> Option<String> {
        let stack = self.stacks.get_mut(family)?;
        let depth = stack.len();
        let tag = stack.pop()?;
        self.counters.remove(&counter_key(family, &tag, depth));
        Some(tag)
    }

    /// Increment and return the counter for `tag` at the current depth.
    pub fn advance(&mut self, family: &str, tag: &str) -> u32 {
        let depth = self.depth(family);
        let counter = self
            .counters
            .entry(counter_key(family, tag, depth))
            .or_insert(0);
        *counter += 1;
        *counter
    }
}
