//! The `<head>` fragment pipeline.
//!
//! The override block only wins in a browser because it comes after the
//! theme's stylesheet links. [`HeadBuilder`] always emits it last;
//! [`audit_order`] checks asset lists assembled some other way.

use std::fmt::Write as _;

use crate::error::{OverrideError, Result};
use crate::rule::OverrideSet;

/// How a script element is fetched and run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScriptLoad {
    #[default]
    Blocking,
    Defer,
    Async,
}

impl ScriptLoad {
    fn attribute(&self) -> &'static str {
        match self {
            ScriptLoad::Blocking => "",
            ScriptLoad::Defer => " defer",
            ScriptLoad::Async => " async",
        }
    }
}

/// One element of the head, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadAsset {
    Charset(String),
    Viewport(String),
    Title(String),
    Meta { name: String, content: String },
    Icon { href: String, sizes: Option<String> },
    AppleTouchIcon { href: String },
    /// An HTML comment that labels the group below it.
    Comment(String),
    Script { src: String, load: ScriptLoad },
    Stylesheet { href: String },
    /// The rendered override `<style>` block.
    OverrideBlock(String),
}

impl HeadAsset {
    fn render(&self, out: &mut String) {
        let _ = match self {
            HeadAsset::Charset(charset) => writeln!(out, "<meta charset=\"{}\">", escape(charset)),
            HeadAsset::Viewport(content) => writeln!(
                out,
                "<meta name=\"viewport\" content=\"{}\">",
                escape(content)
            ),
            HeadAsset::Title(title) => writeln!(out, "<title>{}</title>", escape(title)),
            HeadAsset::Meta { name, content } => writeln!(
                out,
                "<meta name=\"{}\" content=\"{}\">",
                escape(name),
                escape(content)
            ),
            HeadAsset::Icon { href, sizes } => match sizes {
                Some(sizes) => writeln!(
                    out,
                    "<link rel=\"icon\" href=\"{}\" sizes=\"{}\">",
                    escape(href),
                    escape(sizes)
                ),
                None => writeln!(out, "<link rel=\"icon\" href=\"{}\">", escape(href)),
            },
            HeadAsset::AppleTouchIcon { href } => {
                writeln!(out, "<link rel=\"apple-touch-icon\" href=\"{}\">", escape(href))
            }
            HeadAsset::Comment(text) => writeln!(out, "\n<!-- {} -->", comment_text(text)),
            HeadAsset::Script { src, load } => writeln!(
                out,
                "<script{} src=\"{}\"></script>",
                load.attribute(),
                escape(src)
            ),
            HeadAsset::Stylesheet { href } => {
                writeln!(out, "<link rel=\"stylesheet\" href=\"{}\">", escape(href))
            }
            HeadAsset::OverrideBlock(block) => write!(out, "{block}"),
        };
    }
}

/// Breaks up every run of dashes, since `--` may not appear inside a comment.
fn comment_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut prev = None;
    for c in raw.chars() {
        if c == '-' && prev == Some('-') {
            out.push(' ');
        }
        out.push(c);
        prev = Some(c);
    }
    out
}

/// Escapes text for use in HTML attributes and text nodes.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Checks that no stylesheet link follows an override block.
///
/// A violation is not repaired. It is logged and reported so the pipeline
/// that produced the order can be fixed.
pub fn audit_order(assets: &[HeadAsset]) -> Result<()> {
    let Some(override_index) = assets
        .iter()
        .position(|a| matches!(a, HeadAsset::OverrideBlock(_)))
    else {
        return Ok(());
    };

    let late = assets
        .iter()
        .enumerate()
        .skip(override_index + 1)
        .find(|(_, a)| matches!(a, HeadAsset::Stylesheet { .. }));

    if let Some((stylesheet_index, _)) = late {
        log::warn!(
            "override block at {override_index} precedes stylesheet at {stylesheet_index}; \
             overrides may lose to the theme"
        );
        return Err(OverrideError::OverrideBeforeStylesheet {
            override_index,
            stylesheet_index,
        });
    }
    Ok(())
}

/// A complete head fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Head {
    pub lang: String,
    pub html_class: Option<String>,
    pub assets: Vec<HeadAsset>,
}

impl Head {
    /// Wraps assets assembled elsewhere, refusing a misplaced override block.
    pub fn from_assets(
        lang: impl Into<String>,
        html_class: Option<String>,
        assets: Vec<HeadAsset>,
    ) -> Result<Self> {
        audit_order(&assets)?;
        Ok(Self {
            lang: lang.into(),
            html_class,
            assets,
        })
    }

    /// Renders from the doctype through `</head>`.
    pub fn render(&self) -> String {
        let mut out = String::from("<!DOCTYPE html>\n");
        let _ = match &self.html_class {
            Some(class) => writeln!(
                out,
                "<html class=\"{}\" lang=\"{}\">",
                escape(class),
                escape(&self.lang)
            ),
            None => writeln!(out, "<html lang=\"{}\">", escape(&self.lang)),
        };
        out.push_str("<head>\n");
        for asset in &self.assets {
            asset.render(&mut out);
        }
        out.push_str("</head>\n");
        out
    }
}

/// Builds a head in the fixed group order: metadata, icons, scripts,
/// stylesheets, overrides.
#[derive(Debug, Clone, Default)]
pub struct HeadBuilder {
    lang: String,
    html_class: Option<String>,
    meta: Vec<HeadAsset>,
    icons: Vec<HeadAsset>,
    scripts: Vec<HeadAsset>,
    stylesheets: Vec<HeadAsset>,
    overrides: Option<(Option<String>, String)>,
}

impl HeadBuilder {
    pub fn new(lang: impl Into<String>) -> Self {
        Self {
            lang: lang.into(),
            ..Default::default()
        }
    }

    pub fn html_class(mut self, class: impl Into<String>) -> Self {
        self.html_class = Some(class.into());
        self
    }

    pub fn charset(mut self, charset: impl Into<String>) -> Self {
        self.meta.push(HeadAsset::Charset(charset.into()));
        self
    }

    pub fn viewport(mut self, content: impl Into<String>) -> Self {
        self.meta.push(HeadAsset::Viewport(content.into()));
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.meta.push(HeadAsset::Title(title.into()));
        self
    }

    pub fn meta(mut self, name: impl Into<String>, content: impl Into<String>) -> Self {
        self.meta.push(HeadAsset::Meta {
            name: name.into(),
            content: content.into(),
        });
        self
    }

    pub fn description(self, content: impl Into<String>) -> Self {
        self.meta("description", content)
    }

    pub fn icon(mut self, href: impl Into<String>, sizes: impl Into<String>) -> Self {
        self.icons.push(HeadAsset::Icon {
            href: href.into(),
            sizes: Some(sizes.into()),
        });
        self
    }

    pub fn apple_touch_icon(mut self, href: impl Into<String>) -> Self {
        self.icons.push(HeadAsset::AppleTouchIcon { href: href.into() });
        self
    }

    /// Adds a labelled script group. Pass an empty label for no comment.
    pub fn script(mut self, label: &str, src: impl Into<String>, load: ScriptLoad) -> Self {
        if !label.is_empty() {
            self.scripts.push(HeadAsset::Comment(label.to_string()));
        }
        self.scripts.push(HeadAsset::Script {
            src: src.into(),
            load,
        });
        self
    }

    /// Adds a labelled group of stylesheet links.
    pub fn stylesheets<I, S>(mut self, label: &str, hrefs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if !label.is_empty() {
            self.stylesheets.push(HeadAsset::Comment(label.to_string()));
        }
        self.stylesheets.extend(
            hrefs
                .into_iter()
                .map(|href| HeadAsset::Stylesheet { href: href.into() }),
        );
        self
    }

    /// Sets the override layer. It is rendered after every stylesheet no
    /// matter when this is called.
    pub fn overrides(mut self, label: Option<&str>, set: &OverrideSet) -> Self {
        self.overrides = Some((label.map(str::to_string), set.render_style_block()));
        self
    }

    pub fn build(self) -> Head {
        let mut assets = self.meta;
        assets.extend(self.icons);
        assets.extend(self.scripts);
        assets.extend(self.stylesheets);
        if let Some((label, block)) = self.overrides {
            if let Some(label) = label {
                assets.push(HeadAsset::Comment(label));
            }
            assets.push(HeadAsset::OverrideBlock(block));
        }
        Head {
            lang: self.lang,
            html_class: self.html_class,
            assets,
        }
    }

    /// The IBCA site head: metadata, favicons, web fonts, jQuery, Slick,
    /// the theme stylesheet and the slider-gap overrides.
    pub fn ibca() -> Self {
        const UPLOADS: &str =
            "https://ibca.jp/wp-content/uploads/2025/05/cropped-8426167e536ec96e143cb0c91eed5a5e";

        HeadBuilder::new("ja")
            .html_class("pc")
            .charset("UTF-8")
            .viewport("width=device-width")
            .title("IBCA | The essence of beauty")
            .description("The essence of beauty")
            .meta(
                "google-site-verification",
                "BbvCam5gk15NKckQqqk7gg2e81fnCbrNa3Zmyfhw7o8",
            )
            .icon(format!("{UPLOADS}-32x32.gif"), "32x32")
            .icon(format!("{UPLOADS}-192x192.gif"), "192x192")
            .apple_touch_icon(format!("{UPLOADS}-180x180.gif"))
            .script(
                "TypeSquare Web Fonts",
                "//webfonts.sakura.ne.jp/js/sakurav3.js?fadein=0&ver=3.1.4",
                ScriptLoad::Defer,
            )
            .script(
                "jQuery",
                "https://code.jquery.com/jquery-3.7.1.min.js",
                ScriptLoad::Blocking,
            )
            .stylesheets(
                "Slick Slider",
                [
                    "https://cdn.jsdelivr.net/npm/slick-carousel@1.8.1/slick/slick.css",
                    "https://cdn.jsdelivr.net/npm/slick-carousel@1.8.1/slick/slick-theme.css",
                ],
            )
            .stylesheets("Theme CSS", ["/ibca_testo/assets/css/style.css"])
            .overrides(
                Some("Custom Override: スライダー下の余白除去"),
                OverrideSet::slider_gap(),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape("a&b \"c\" <d>"), "a&amp;b &quot;c&quot; &lt;d&gt;");
    }

    #[test]
    fn test_comment_text_has_no_double_dash() {
        assert_eq!(comment_text("a---b"), "a- - -b");
        assert_eq!(comment_text("a--b-c"), "a- -b-c");
        assert_eq!(comment_text("--"), "- -");

        let head = HeadBuilder::new("en").script("x---y", "/a.js", ScriptLoad::Blocking).build();
        let html = head.render();
        let comment = html
            .split("<!--")
            .nth(1)
            .and_then(|rest| rest.split("-->").next())
            .expect("comment rendered");
        assert!(!comment.contains("--"), "comment body was {comment:?}");
    }

    #[test]
    fn test_overrides_render_last_even_if_set_first() {
        let head = HeadBuilder::new("en")
            .overrides(None, OverrideSet::slider_gap())
            .stylesheets("", ["/theme.css"])
            .build();
        assert!(matches!(head.assets.last(), Some(HeadAsset::OverrideBlock(_))));
        assert!(audit_order(&head.assets).is_ok());
    }

    #[test]
    fn test_audit_flags_late_stylesheet() {
        let assets = vec![
            HeadAsset::Stylesheet { href: "a.css".into() },
            HeadAsset::OverrideBlock("<style></style>\n".into()),
            HeadAsset::Comment("late".into()),
            HeadAsset::Stylesheet { href: "theme.css".into() },
        ];
        let err = audit_order(&assets).unwrap_err();
        assert!(matches!(
            err,
            OverrideError::OverrideBeforeStylesheet {
                override_index: 1,
                stylesheet_index: 3
            }
        ));
        assert!(Head::from_assets("en", None, assets).is_err());
    }

    #[test]
    fn test_script_load_attributes() {
        let head = HeadBuilder::new("en")
            .script("", "/a.js", ScriptLoad::Async)
            .script("", "/b.js", ScriptLoad::Blocking)
            .build();
        let html = head.render();
        assert!(html.contains("<script async src=\"/a.js\"></script>\n"));
        assert!(html.contains("<script src=\"/b.js\"></script>\n"));
        assert!(!html.contains("<!--"), "empty labels emit no comment");
    }

    #[test]
    fn test_audit_without_override_block_passes() {
        let assets = vec![HeadAsset::Stylesheet { href: "a.css".into() }];
        assert!(audit_order(&assets).is_ok());
    }
}
