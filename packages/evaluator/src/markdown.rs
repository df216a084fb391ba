//! Markdown to VDOM conversion
//!
//! Uses pulldown-cmark to parse CommonMark (plus tables and strikethrough)
//! and builds [`VNode`] trees from the event stream. Raw HTML is never
//! interpreted: it is kept as text and escaped by the render target. Link
//! and image URLs go through the [`UrlSanitizer`]; a rejected link degrades
//! to its text, a rejected image to its alt text.

use crate::sanitize::UrlSanitizer;
use crate::vdom::VNode;
use crate::vdom_ext::text_content;
use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag};

enum FrameKind {
    Element(VNode),
    /// `code` element, wrapped in `pre` on close
    CodeBlock(VNode),
    /// Children are spliced into the parent
    Transparent,
    TableHead,
    Image { src: String, title: String },
}

struct Frame {
    kind: FrameKind,
    children: Vec<VNode>,
}

impl Frame {
    fn new(kind: FrameKind) -> Self {
        Self {
            kind,
            children: Vec::new(),
        }
    }

    fn close(self) -> Vec<VNode> {
        match self.kind {
            FrameKind::Element(node) => vec![node.with_children(self.children)],
            FrameKind::CodeBlock(code) => {
                vec![VNode::element("pre").with_child(code.with_children(self.children))]
            }
            FrameKind::Transparent => self.children,
            FrameKind::TableHead => vec![VNode::element("thead")
                .with_child(VNode::element("tr").with_children(self.children))],
            FrameKind::Image { src, title } => {
                let alt: String = self.children.iter().map(text_content).collect();
                let mut img = VNode::element("img").with_attr("src", src).with_attr("alt", alt);
                if !title.is_empty() {
                    img = img.with_attr("title", title);
                }
                vec![img]
            }
        }
    }
}

fn heading_tag(level: HeadingLevel) -> &'static str {
    match level {
        HeadingLevel::H1 => "h1",
        HeadingLevel::H2 => "h2",
        HeadingLevel::H3 => "h3",
        HeadingLevel::H4 => "h4",
        HeadingLevel::H5 => "h5",
        HeadingLevel::H6 => "h6",
    }
}

fn open_frame(tag: Tag<'_>, in_table_head: bool, sanitizer: &dyn UrlSanitizer) -> FrameKind {
    let element = |name: &str| FrameKind::Element(VNode::element(name));

    match tag {
        Tag::Paragraph => element("p"),
        Tag::Heading { level, .. } => element(heading_tag(level)),
        Tag::BlockQuote { .. } => element("blockquote"),
        Tag::CodeBlock(kind) => {
            let mut code = VNode::element("code");
            if let CodeBlockKind::Fenced(lang) = kind {
                let lang = lang.split_whitespace().next().unwrap_or_default();
                if !lang.is_empty() {
                    code = code.with_class(format!("language-{}", lang));
                }
            }
            FrameKind::CodeBlock(code)
        }
        Tag::List(Some(start)) => {
            let list = VNode::element("ol");
            if start == 1 {
                FrameKind::Element(list)
            } else {
                FrameKind::Element(list.with_attr("start", start.to_string()))
            }
        }
        Tag::List(None) => element("ul"),
        Tag::Item => element("li"),
        Tag::Table(_) => element("table"),
        Tag::TableHead => FrameKind::TableHead,
        Tag::TableRow => element("tr"),
        Tag::TableCell => element(if in_table_head { "th" } else { "td" }),
        Tag::Emphasis => element("em"),
        Tag::Strong => element("strong"),
        Tag::Strikethrough => element("del"),
        Tag::Link { dest_url, title, .. } => match sanitizer.sanitize(&dest_url) {
            Some(href) => {
                let mut link = VNode::element("a").with_attr("href", href);
                if !title.is_empty() {
                    link = link.with_attr("title", title.to_string());
                }
                FrameKind::Element(link)
            }
            None => FrameKind::Transparent,
        },
        Tag::Image { dest_url, title, .. } => match sanitizer.sanitize(&dest_url) {
            Some(src) => FrameKind::Image {
                src,
                title: title.to_string(),
            },
            None => FrameKind::Transparent,
        },
        _ => FrameKind::Transparent,
    }
}

/// Render markdown source into block-level nodes
pub fn render_markdown(source: &str, sanitizer: &dyn UrlSanitizer) -> Vec<VNode> {
    let options =
        Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES | Options::ENABLE_TASKLISTS;

    let mut stack = vec![Frame::new(FrameKind::Transparent)];
    let mut in_table_head = false;

    for event in Parser::new_ext(source, options) {
        match event {
            Event::Start(tag) => {
                if matches!(tag, Tag::TableHead) {
                    in_table_head = true;
                }
                stack.push(Frame::new(open_frame(tag, in_table_head, sanitizer)));
            }
            Event::End(_) => {
                // The root frame is never closed by an event
                if stack.len() < 2 {
                    continue;
                }
                let Some(frame) = stack.pop() else { continue };
                if matches!(frame.kind, FrameKind::TableHead) {
                    in_table_head = false;
                }

                let nodes = frame.close();
                if let Some(parent) = stack.last_mut() {
                    parent.children.extend(nodes);
                }
            }
            Event::Text(text) | Event::Html(text) | Event::InlineHtml(text) => {
                push(&mut stack, VNode::text(text.to_string()));
            }
            Event::Code(code) => {
                push(
                    &mut stack,
                    VNode::element("code").with_child(VNode::text(code.to_string())),
                );
            }
            Event::SoftBreak => push(&mut stack, VNode::text("\n")),
            Event::HardBreak => push(&mut stack, VNode::element("br")),
            Event::Rule => push(&mut stack, VNode::element("hr")),
            Event::TaskListMarker(checked) => {
                let mut checkbox = VNode::element("input")
                    .with_attr("type", "checkbox")
                    .with_attr("disabled", "");
                if checked {
                    checkbox = checkbox.with_attr("checked", "");
                }
                push(&mut stack, checkbox);
            }
            Event::FootnoteReference(label) => {
                push(
                    &mut stack,
                    VNode::element("sup").with_child(VNode::text(label.to_string())),
                );
            }
            _ => {}
        }
    }

    // Fold frames left open
    while stack.len() > 1 {
        if let Some(frame) = stack.pop() {
            let nodes = frame.close();
            if let Some(parent) = stack.last_mut() {
                parent.children.extend(nodes);
            }
        }
    }

    stack.pop().map(|root| root.children).unwrap_or_default()
}

fn push(stack: &mut [Frame], node: VNode) {
    if let Some(frame) = stack.last_mut() {
        frame.children.push(node);
    }
}
