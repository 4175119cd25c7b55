use ego_tree::NodeRef;
use scraper::node::Node;
use scraper::{ElementRef, Html};

use crate::article::find_article;

/// Renders article HTML into MDX-flavored Markdown.
pub trait Converter: Send + Sync {
    fn convert(&self, html: &str) -> Result<String, ConvertError>;
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConvertError {
    #[error("no article element found")]
    NoArticle,
}

/// Tree-walking converter for the puzzle-page HTML subset.
///
/// Walks the first `article` element and emits Markdown for the supported
/// tags. Elements outside the supported set are dead ends: they emit
/// nothing and their children are not visited.
#[derive(Debug, Default, Clone, Copy)]
pub struct MdxConverter;

impl Converter for MdxConverter {
    fn convert(&self, html: &str) -> Result<String, ConvertError> {
        let document = Html::parse_document(html);
        let article = find_article(&document).ok_or(ConvertError::NoArticle)?;
        let mut state = RenderState::new();
        state.render_element(article);
        Ok(state.into_markdown())
    }
}

struct RenderState {
    buffer: String,
    list_depth: usize,
}

impl RenderState {
    fn new() -> Self {
        Self {
            buffer: String::new(),
            list_depth: 0,
        }
    }

    fn into_markdown(self) -> String {
        self.buffer.trim().to_string()
    }

    fn render_node(&mut self, node: NodeRef<'_, Node>) {
        match node.value() {
            Node::Text(text) => self.append_text(text),
            Node::Element(_) => {
                if let Some(element) = ElementRef::wrap(node) {
                    self.render_element(element);
                }
            }
            _ => {}
        }
    }

    fn render_element(&mut self, element: ElementRef<'_>) {
        match element.value().name() {
            "article" | "pre" => self.render_children(element),
            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
                let level = usize::from(element.value().name().as_bytes()[1] - b'0');
                self.open_block();
                self.buffer.push_str(&"#".repeat(level));
                self.buffer.push(' ');
                self.render_children(element);
                self.close_line();
            }
            "p" => {
                self.open_block();
                self.render_children(element);
                self.close_line();
            }
            "strong" => {
                self.buffer.push_str("**");
                self.render_children(element);
                self.buffer.push_str("**");
            }
            "em" => {
                self.buffer.push('*');
                self.render_children(element);
                self.buffer.push('*');
            }
            "a" => {
                self.buffer.push('[');
                self.render_children(element);
                self.buffer.push_str("](");
                self.buffer
                    .push_str(element.value().attr("href").unwrap_or(""));
                self.buffer.push(')');
            }
            "code" => {
                if is_inside_pre(element) {
                    self.render_code_block(element);
                } else {
                    self.buffer.push('`');
                    self.render_children(element);
                    self.buffer.push('`');
                }
            }
            "ul" => self.render_list(element, "- "),
            "ol" => self.render_list(element, "1. "),
            // Unsupported tags are dead ends: no output, children unvisited.
            _ => {}
        }
    }

    fn render_children(&mut self, element: ElementRef<'_>) {
        for child in element.children() {
            self.render_node(child);
        }
    }

    /// Appends trimmed text, restoring one boundary space on each side where
    /// the raw text had whitespace. Whitespace-only nodes emit nothing.
    fn append_text(&mut self, text: &str) {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return;
        }
        if text.starts_with(char::is_whitespace) && self.wants_boundary_space() {
            self.buffer.push(' ');
        }
        self.buffer.push_str(trimmed);
        if text.ends_with(char::is_whitespace) {
            self.buffer.push(' ');
        }
    }

    fn wants_boundary_space(&self) -> bool {
        self.buffer
            .chars()
            .next_back()
            .is_some_and(|last| !last.is_whitespace())
    }

    /// Fenced code block for `code` inside `pre`. Direct children contribute
    /// raw text content, untrimmed; no Markdown is interpreted inside.
    fn render_code_block(&mut self, element: ElementRef<'_>) {
        self.open_block();
        self.buffer.push_str("```");
        self.buffer.push_str(language_tag(element));
        self.buffer.push('\n');
        for child in element.children() {
            append_raw_text(&mut self.buffer, child);
        }
        self.buffer.push_str("\n```\n");
    }

    fn render_list(&mut self, element: ElementRef<'_>, marker: &str) {
        self.buffer.push('\n');
        self.list_depth += 1;
        for child in element.children() {
            let Some(item) = ElementRef::wrap(child) else {
                continue;
            };
            if item.value().name() != "li" {
                continue;
            }
            self.buffer.push_str(&"  ".repeat(self.list_depth - 1));
            self.buffer.push_str(marker);
            self.render_children(item);
            self.close_line();
        }
        self.list_depth -= 1;
    }

    /// Ensures exactly one blank line before a block element.
    fn open_block(&mut self) {
        self.trim_trailing_spaces();
        if self.buffer.is_empty() {
            return;
        }
        while !self.buffer.ends_with("\n\n") {
            self.buffer.push('\n');
        }
    }

    /// Ends a block line, dropping any dangling boundary space first.
    fn close_line(&mut self) {
        self.trim_trailing_spaces();
        self.buffer.push('\n');
    }

    fn trim_trailing_spaces(&mut self) {
        while self.buffer.ends_with(' ') || self.buffer.ends_with('\t') {
            self.buffer.pop();
        }
    }
}

fn is_inside_pre(element: ElementRef<'_>) -> bool {
    element
        .parent()
        .and_then(ElementRef::wrap)
        .is_some_and(|parent| parent.value().name() == "pre")
}

/// Language tag from a `class` attribute with the `language-` prefix, or the
/// empty string for a plain fence.
fn language_tag(element: ElementRef<'_>) -> &str {
    element
        .value()
        .attr("class")
        .and_then(|class| class.strip_prefix("language-"))
        .unwrap_or("")
}

fn append_raw_text(buffer: &mut String, node: NodeRef<'_, Node>) {
    match node.value() {
        Node::Text(text) => buffer.push_str(text),
        Node::Element(_) => {
            for child in node.children() {
                append_raw_text(buffer, child);
            }
        }
        _ => {}
    }
}
