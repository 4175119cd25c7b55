use ego_tree::NodeRef;
use scraper::node::Node;
use scraper::{ElementRef, Html};

/// Tag marking the main content region of a puzzle page.
const ARTICLE_TAG: &str = "article";

/// Finds the first `article` element in a parsed document, if any.
pub fn find_article(document: &Html) -> Option<ElementRef<'_>> {
    locate_article(document.tree.root())
}

/// Pre-order depth-first search for the first `article` element at or below
/// `node`. Children are searched left to right, each subtree fully before
/// the next sibling.
pub fn locate_article(node: NodeRef<'_, Node>) -> Option<ElementRef<'_>> {
    if let Some(element) = ElementRef::wrap(node) {
        if element.value().name() == ARTICLE_TAG {
            return Some(element);
        }
    }
    node.children().find_map(locate_article)
}

/// Returns the outer HTML of the first `article` element in `html`.
pub fn extract_article_html(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    find_article(&document).map(|element| element.html())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_article_regardless_of_depth() {
        let doc = Html::parse_document(
            "<html><body><div><section><article><p>deep</p></article></section></div></body></html>",
        );
        let article = find_article(&doc).expect("article present");
        assert_eq!(article.value().name(), "article");
    }

    #[test]
    fn first_article_in_document_order_wins() {
        let doc = Html::parse_document(
            r#"<body><article id="a"></article><article id="b"></article></body>"#,
        );
        let article = find_article(&doc).expect("article present");
        assert_eq!(article.value().attr("id"), Some("a"));
    }

    #[test]
    fn missing_article_yields_none() {
        let doc = Html::parse_document("<html><body><div>no main content</div></body></html>");
        assert!(find_article(&doc).is_none());
    }

    #[test]
    fn outer_html_keeps_the_article_wrapper() {
        let html = extract_article_html(r#"<body><article class="day-desc"><p>x</p></article></body>"#)
            .expect("article present");
        assert!(html.starts_with(r#"<article class="day-desc">"#));
        assert!(html.ends_with("</article>"));
    }
}
