//! Page context and the predicates that gate scoped override rules.
//!
//! WordPress exposes the kind of page being rendered as classes on `<body>`
//! (`home`, `single`, `error404`, ...). [`PageFlags`] mirrors the ones the
//! override layer can key on, and [`PageContext::body`] turns a context back
//! into the `<body>` element the cascade matches against.

use bitflags::bitflags;
use boxcss::ElementMeta;
use boxcss::parser::{CompoundSelector, Selector};

bitflags! {
    /// Page kinds, one per WordPress body class.
    ///
    /// ```
    /// use overrides::context::PageFlags;
    ///
    /// let flags = PageFlags::HOME | PageFlags::FRONT_PAGE;
    /// assert!(flags.contains(PageFlags::HOME));
    /// assert_eq!(PageFlags::from_class("error404"), Some(PageFlags::NOT_FOUND));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct PageFlags: u16 {
        /// The blog index / home view (`.home`)
        const HOME       = 0b0000_0001;
        /// A static front page (`.front-page`)
        const FRONT_PAGE = 0b0000_0010;
        /// A single post (`.single`)
        const SINGLE     = 0b0000_0100;
        /// A static page (`.page`)
        const PAGE       = 0b0000_1000;
        /// Any archive listing (`.archive`)
        const ARCHIVE    = 0b0001_0000;
        /// Search results (`.search`)
        const SEARCH     = 0b0010_0000;
        /// Not found (`.error404`)
        const NOT_FOUND  = 0b0100_0000;
    }
}

const CLASS_NAMES: [(PageFlags, &str); 7] = [
    (PageFlags::HOME, "home"),
    (PageFlags::FRONT_PAGE, "front-page"),
    (PageFlags::SINGLE, "single"),
    (PageFlags::PAGE, "page"),
    (PageFlags::ARCHIVE, "archive"),
    (PageFlags::SEARCH, "search"),
    (PageFlags::NOT_FOUND, "error404"),
];

impl PageFlags {
    pub fn from_class(class: &str) -> Option<Self> {
        CLASS_NAMES
            .iter()
            .find(|(_, name)| *name == class)
            .map(|(flag, _)| *flag)
    }

    /// Body class names for every set flag, in declaration order.
    pub fn class_names(&self) -> Vec<&'static str> {
        CLASS_NAMES
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect()
    }
}

/// What is being rendered right now.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageContext {
    pub flags: PageFlags,
    /// Additional body classes that are not page kinds (`logged-in`, ...).
    pub extra_classes: Vec<String>,
}

impl PageContext {
    pub fn new(flags: PageFlags) -> Self {
        Self {
            flags,
            extra_classes: Vec::new(),
        }
    }

    pub fn home() -> Self {
        Self::new(PageFlags::HOME)
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.extra_classes.push(class.into());
        self
    }

    pub fn is_home(&self) -> bool {
        self.flags.contains(PageFlags::HOME)
    }

    /// The `<body>` element this context renders as.
    ///
    /// Page-kind classes come from `flags` only. An extra class that names a
    /// page kind is left off, so body-class selectors agree with
    /// [`ContextPredicate::holds`].
    pub fn body(&self) -> ElementMeta {
        let mut body = ElementMeta::new("body");
        for class in self.flags.class_names() {
            body = body.with_class(class);
        }
        for class in &self.extra_classes {
            if PageFlags::from_class(class).is_some() {
                log::debug!("body class `{class}` ignored; page kinds come from flags");
                continue;
            }
            body = body.with_class(class.clone());
        }
        body
    }
}

/// Gate on whether an override rule applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContextPredicate {
    #[default]
    Always,
    /// Holds when the page has every one of these flags.
    Page(PageFlags),
}

impl ContextPredicate {
    pub fn holds(&self, context: &PageContext) -> bool {
        match self {
            ContextPredicate::Always => true,
            ContextPredicate::Page(flags) => context.flags.contains(*flags),
        }
    }

    /// The body-class compound selector this predicate renders as, if any.
    pub fn compound(&self) -> Option<CompoundSelector> {
        match self {
            ContextPredicate::Always => None,
            ContextPredicate::Page(flags) if flags.is_empty() => None,
            ContextPredicate::Page(flags) => Some(CompoundSelector::new(
                flags
                    .class_names()
                    .into_iter()
                    .map(|c| Selector::Class(c.to_string()))
                    .collect(),
            )),
        }
    }
}
