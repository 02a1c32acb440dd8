//! Tag name to strategy lookup.

use crate::strategy::{
    BoldStrategy, CodeStrategy, HeadingStrategy, ItalicStrategy, LineBreakStrategy, LinkStrategy,
    MarkStrategy, ParagraphStrategy, SmallTextStrategy, SpanStrategy, StrikethroughStrategy,
    TagStrategy, UnderlineStrategy, list_strategy,
};
use std::collections::HashMap;
use std::sync::Arc;

pub struct StrategyRegistry {
    strategies: HashMap<String, Arc<dyn TagStrategy>>,
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl StrategyRegistry {
    pub fn empty() -> Self {
        Self {
            strategies: HashMap::new(),
        }
    }

    /// The full built-in tag vocabulary.
    pub fn with_defaults() -> Self {
        let mut registry = Self::empty();
        registry.register(Arc::new(BoldStrategy));
        registry.register(Arc::new(ItalicStrategy));
        registry.register(Arc::new(UnderlineStrategy));
        registry.register(Arc::new(SpanStrategy));
        registry.register(Arc::new(HeadingStrategy));
        registry.register(Arc::new(ParagraphStrategy));
        registry.register(Arc::new(LinkStrategy));
        registry.register(Arc::new(LineBreakStrategy));
        registry.register(Arc::new(CodeStrategy));
        registry.register(Arc::new(SmallTextStrategy));
        registry.register(Arc::new(MarkStrategy));
        registry.register(Arc::new(StrikethroughStrategy));
        registry.register(Arc::new(list_strategy()));
        registry
    }

    /// Just the inline emphasis tags and line breaks.
    pub fn minimal() -> Self {
        let mut registry = Self::empty();
        registry.register(Arc::new(BoldStrategy));
        registry.register(Arc::new(ItalicStrategy));
        registry.register(Arc::new(UnderlineStrategy));
        registry.register(Arc::new(LineBreakStrategy));
        registry
    }

    /// Register a strategy for every tag name it declares. Last registration
    /// wins for a name already claimed.
    pub fn register(&mut self, strategy: Arc<dyn TagStrategy>) {
        for name in strategy.tag_names() {
            self.strategies
                .insert((*name).to_string(), Arc::clone(&strategy));
        }
    }

    /// Remove the strategy serving one tag name. Other names declared by the
    /// same strategy stay registered.
    pub fn remove(&mut self, tag: &str) -> bool {
        self.strategies.remove(&tag.to_ascii_lowercase()).is_some()
    }

    pub fn resolve(&self, tag: &str) -> Option<&Arc<dyn TagStrategy>> {
        self.strategies.get(&tag.to_ascii_lowercase())
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.strategies.contains_key(&tag.to_ascii_lowercase())
    }

    pub fn tag_names(&self) -> impl Iterator<Item = &str> {
        self.strategies.keys().map(String::as_str)
    }
}
