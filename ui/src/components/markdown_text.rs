//! Renders CMS-supplied markdown safely.
//!
//! Uses pulldown-cmark with raw HTML disabled, so markdown coming from
//! the content service can never inject script into the page.

use pulldown_cmark::{Options, Parser, html};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// The markdown text to render.
    pub text: AttrValue,
    /// Additional CSS classes for the container.
    #[prop_or_default]
    pub class: Classes,
}

/// Renders markdown text with raw HTML escaped, not interpreted.
#[function_component]
pub fn MarkdownText(props: &Props) -> Html {
    let html_content = render_markdown(&props.text);

    let base_classes = classes!(
        "prose",
        "prose-neutral",
        "dark:prose-invert",
        "max-w-none",
        props.class.clone()
    );

    html! {
        <div class={base_classes}>
            { Html::from_html_unchecked(html_content.into()) }
        </div>
    }
}

fn render_markdown(markdown: &str) -> String {
    // ENABLE_RAW_HTML stays off; CMS bodies are untrusted input
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_SMART_PUNCTUATION;

    let parser = Parser::new_ext(markdown, options);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);

    html_output
}

#[cfg(test)]
mod tests {
    use super::render_markdown;

    #[test]
    fn raw_html_is_escaped() {
        let rendered = render_markdown("hello <script>alert(1)</script>");
        assert!(!rendered.contains("<script>"));
        assert!(rendered.contains("&lt;script&gt;"));
    }

    #[test]
    fn markdown_formatting_is_preserved() {
        let rendered = render_markdown("# Heading\n\nSome **bold** text");
        assert!(rendered.contains("<h1>"));
        assert!(rendered.contains("<strong>"));
    }
}
