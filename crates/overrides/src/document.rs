//! A minimal element tree to resolve against.

use boxcss::ElementMeta;
use boxcss::types::BoxModel;

/// An element and its children.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    pub meta: ElementMeta,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            meta: ElementMeta::new(tag),
            children: Vec::new(),
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.meta = self.meta.with_id(id);
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.meta = self.meta.with_class(class);
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Depth-first search. Returns the first element for which `predicate`
    /// holds, with its ancestors ordered parent first.
    pub fn find<F>(&self, mut predicate: F) -> Option<(ElementMeta, Vec<ElementMeta>)>
    where
        F: FnMut(&ElementMeta, &[ElementMeta]) -> bool,
    {
        let mut stack = Vec::new();
        self.find_inner(&mut predicate, &mut stack)
    }

    fn find_inner<F>(
        &self,
        predicate: &mut F,
        stack: &mut Vec<ElementMeta>,
    ) -> Option<(ElementMeta, Vec<ElementMeta>)>
    where
        F: FnMut(&ElementMeta, &[ElementMeta]) -> bool,
    {
        let ancestors: Vec<ElementMeta> = stack.iter().rev().cloned().collect();
        if predicate(&self.meta, &ancestors) {
            return Some((self.meta.clone(), ancestors));
        }

        stack.push(self.meta.clone());
        let mut found = None;
        for child in &self.children {
            found = child.find_inner(predicate, stack);
            if found.is_some() {
                break;
            }
        }
        stack.pop();
        found
    }
}

/// One element's resolved box model.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedNode {
    pub meta: ElementMeta,
    /// Distance from the tree root.
    pub depth: usize,
    pub model: BoxModel,
}
