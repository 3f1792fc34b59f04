//! Resolving computed margin/padding with the override layer applied.

use boxcss::parser::cascade::{CascadeResult, compute_cascade};
use boxcss::parser::{StyleSheet, parse_stylesheet, parse_stylesheet_strict};
use boxcss::types::BoxModel;
use boxcss::{CascadeMode, ElementMeta, LayeredSheet};

use crate::context::PageContext;
use crate::document::{Element, ResolvedNode};
use crate::error::Result;
use crate::region::Region;
use crate::rule::OverrideSet;

/// Resolver settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolverConfig {
    /// How theme and override declarations are ranked against each other.
    pub mode: CascadeMode,
    /// Refuse base themes containing anything the parser would skip.
    pub strict_theme: bool,
}

/// A base theme plus an override layer, ready to resolve elements.
///
/// The override sheet always sits after the theme in document order.
#[derive(Debug, Clone)]
pub struct Resolver {
    theme: StyleSheet,
    overrides: StyleSheet,
    priority: i32,
    config: ResolverConfig,
}

impl Resolver {
    pub fn new(theme: StyleSheet, overrides: &OverrideSet) -> Self {
        Self::with_config(theme, overrides, ResolverConfig::default())
    }

    pub fn with_config(theme: StyleSheet, overrides: &OverrideSet, config: ResolverConfig) -> Self {
        Self {
            theme,
            overrides: overrides.to_stylesheet(),
            priority: overrides.priority,
            config,
        }
    }

    /// Parses the theme CSS according to `config.strict_theme`.
    pub fn from_sources(
        theme_css: &str,
        overrides: &OverrideSet,
        config: ResolverConfig,
    ) -> Result<Self> {
        let theme = if config.strict_theme {
            parse_stylesheet_strict(theme_css)?
        } else {
            parse_stylesheet(theme_css)?
        };
        if !theme.skipped.is_empty() {
            log::debug!("theme: {} construct(s) skipped", theme.skipped.len());
        }
        Ok(Self::with_config(theme, overrides, config))
    }

    pub fn config(&self) -> ResolverConfig {
        self.config
    }

    pub fn theme(&self) -> &StyleSheet {
        &self.theme
    }

    /// Full cascade result for one element. `ancestors` run from the parent
    /// up to, but not including, `<body>`; the page context supplies the body.
    pub fn resolve_traced(
        &self,
        element: &ElementMeta,
        ancestors: &[ElementMeta],
        context: &PageContext,
    ) -> CascadeResult {
        log::trace!(
            "resolve {}#{} under {} ancestor(s), page {:?}",
            element.tag,
            element.id.as_deref().unwrap_or(""),
            ancestors.len(),
            context.flags
        );
        let chain = with_body(ancestors, context);
        let sheets = [
            LayeredSheet::theme(&self.theme),
            LayeredSheet::overrides(&self.overrides, self.priority),
        ];
        compute_cascade(element, &chain, &sheets, self.config.mode)
    }

    pub fn resolve(
        &self,
        element: &ElementMeta,
        ancestors: &[ElementMeta],
        context: &PageContext,
    ) -> BoxModel {
        self.resolve_traced(element, ancestors, context).model
    }

    /// What the theme alone produces, for comparison.
    pub fn resolve_theme_only(
        &self,
        element: &ElementMeta,
        ancestors: &[ElementMeta],
        context: &PageContext,
    ) -> BoxModel {
        let chain = with_body(ancestors, context);
        compute_cascade(
            element,
            &chain,
            &[LayeredSheet::theme(&self.theme)],
            self.config.mode,
        )
        .model
    }

    /// Resolves every element of a tree rooted just below `<body>`.
    pub fn resolve_document(&self, root: &Element, context: &PageContext) -> Vec<ResolvedNode> {
        let mut out = Vec::new();
        let mut stack = Vec::new();
        self.resolve_subtree(root, context, &mut stack, &mut out);
        out
    }

    fn resolve_subtree(
        &self,
        element: &Element,
        context: &PageContext,
        stack: &mut Vec<ElementMeta>,
        out: &mut Vec<ResolvedNode>,
    ) {
        // The stack runs root first; the cascade wants parent first
        let ancestors: Vec<ElementMeta> = stack.iter().rev().cloned().collect();
        let model = self.resolve(&element.meta, &ancestors, context);

        out.push(ResolvedNode {
            meta: element.meta.clone(),
            depth: stack.len(),
            model,
        });

        stack.push(element.meta.clone());
        for child in &element.children {
            self.resolve_subtree(child, context, stack, out);
        }
        stack.pop();
    }

    /// Resolves the first element in document order that `region` selects.
    pub fn resolve_region(
        &self,
        region: &Region,
        root: &Element,
        context: &PageContext,
    ) -> Option<BoxModel> {
        let (meta, ancestors) = root.find(|meta, ancestors| region.matches(meta, ancestors))?;
        Some(self.resolve(&meta, &ancestors, context))
    }
}

fn with_body(ancestors: &[ElementMeta], context: &PageContext) -> Vec<ElementMeta> {
    let mut chain = Vec::with_capacity(ancestors.len() + 1);
    chain.extend_from_slice(ancestors);
    chain.push(context.body());
    chain
}
