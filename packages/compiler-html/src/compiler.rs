use apiview_evaluator::{VNode, VirtualDomDocument};
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during HTML compilation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    #[error("Invalid tag name: {0:?}")]
    InvalidTagName(String),

    #[error("Invalid attribute name {name:?} on <{tag}>")]
    InvalidAttributeName { tag: String, name: String },
}

/// Options for HTML compilation
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Pretty print HTML
    pub pretty: bool,
    /// Indentation string
    pub indent: String,
    /// Page title used by [`compile_to_html`]
    pub title: String,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            pretty: true,
            indent: "  ".to_string(),
            title: "API Documentation".to_string(),
        }
    }
}

struct Context {
    options: CompileOptions,
    depth: usize,
    /// Nesting of inline content; no layout whitespace is emitted while > 0
    inline_depth: usize,
    buffer: String,
}

impl Context {
    fn new(options: CompileOptions) -> Self {
        Self {
            options,
            depth: 0,
            inline_depth: 0,
            buffer: String::new(),
        }
    }

    fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn layout(&self) -> bool {
        self.options.pretty && self.inline_depth == 0
    }

    fn add_line(&mut self, text: &str) {
        self.add_indent();
        self.add(text);
        self.add_newline();
    }

    fn add_newline(&mut self) {
        if self.layout() {
            self.add("\n");
        }
    }

    fn add_indent(&mut self) {
        if !self.layout() {
            return;
        }
        for _ in 0..self.depth {
            self.buffer.push_str(&self.options.indent);
        }
    }

    fn enter_inline(&mut self) {
        self.inline_depth += 1;
    }

    fn leave_inline(&mut self) {
        self.inline_depth = self.inline_depth.saturating_sub(1);
    }

    fn indent(&mut self) {
        self.depth += 1;
    }

    fn dedent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
    }

    fn get_output(self) -> String {
        self.buffer
    }
}

/// Compile a rendered document to a standalone HTML page
pub fn compile_to_html(
    document: &VirtualDomDocument,
    options: CompileOptions,
) -> Result<String, CompileError> {
    let mut ctx = Context::new(options);

    ctx.add_line("<!DOCTYPE html>");
    ctx.add_line("<html>");
    ctx.indent();

    compile_head(&mut ctx);

    ctx.add_line("<body>");
    ctx.indent();

    compile_nodes(&document.nodes, &mut ctx)?;

    ctx.dedent();
    ctx.add_line("</body>");

    ctx.dedent();
    ctx.add_line("</html>");

    debug!(nodes = document.nodes.len(), "Compiled HTML page");
    Ok(ctx.get_output())
}

/// Compile only the rendered nodes, without the surrounding page
pub fn compile_fragment(
    document: &VirtualDomDocument,
    options: CompileOptions,
) -> Result<String, CompileError> {
    let mut ctx = Context::new(options);
    compile_nodes(&document.nodes, &mut ctx)?;
    Ok(ctx.get_output())
}

fn compile_head(ctx: &mut Context) {
    ctx.add_line("<head>");
    ctx.indent();

    ctx.add_line("<meta charset=\"UTF-8\">");
    ctx.add_line("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">");
    let title = format!("<title>{}</title>", escape_html(&ctx.options.title));
    ctx.add_line(&title);

    ctx.dedent();
    ctx.add_line("</head>");
}

fn compile_nodes(nodes: &[VNode], ctx: &mut Context) -> Result<(), CompileError> {
    for node in nodes {
        match node {
            VNode::Element {
                tag,
                attributes,
                children,
            } => compile_tag(tag, attributes, children, ctx)?,
            VNode::Text { content } => ctx.add_line(&escape_html(content)),
        }
    }
    Ok(())
}

fn compile_tag(
    name: &str,
    attributes: &BTreeMap<String, String>,
    children: &[VNode],
    ctx: &mut Context,
) -> Result<(), CompileError> {
    if !is_valid_tag_name(name) {
        return Err(CompileError::InvalidTagName(name.to_string()));
    }

    ctx.add_indent();
    ctx.add(&format!("<{}", name));

    for (attr_name, value) in attributes {
        if !is_valid_attribute_name(attr_name) {
            return Err(CompileError::InvalidAttributeName {
                tag: name.to_string(),
                name: attr_name.clone(),
            });
        }
        ctx.add(&format!(" {}=\"{}\"", attr_name, escape_html(value)));
    }

    if children.is_empty() && is_self_closing(name) {
        ctx.add(" />");
        ctx.add_newline();
        return Ok(());
    }

    ctx.add(">");

    // Break lines only between block children; inline and preformatted
    // content is emitted verbatim
    if is_block_content(name, children) {
        ctx.add_newline();
        ctx.indent();
        compile_nodes(children, ctx)?;
        ctx.dedent();
        ctx.add_indent();
    } else {
        ctx.enter_inline();
        let result = compile_nodes(children, ctx);
        ctx.leave_inline();
        result?;
    }

    ctx.add(&format!("</{}>", name));
    ctx.add_newline();

    Ok(())
}

pub(crate) fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn is_self_closing(tag: &str) -> bool {
    matches!(
        tag,
        "img"
            | "input"
            | "br"
            | "hr"
            | "meta"
            | "link"
            | "area"
            | "base"
            | "col"
            | "embed"
            | "param"
            | "source"
            | "track"
            | "wbr"
    )
}

fn is_valid_tag_name(tag: &str) -> bool {
    let mut chars = tag.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '-')
        }
        _ => false,
    }
}

fn is_valid_attribute_name(name: &str) -> bool {
    !name.is_empty()
        && name.chars().all(|c| {
            !c.is_whitespace()
                && !c.is_control()
                && !matches!(c, '"' | '\'' | '>' | '/' | '=' | '<')
        })
}

fn preserves_whitespace(tag: &str) -> bool {
    matches!(tag, "pre" | "textarea")
}

fn is_block_content(tag: &str, children: &[VNode]) -> bool {
    !children.is_empty()
        && !preserves_whitespace(tag)
        && children
            .iter()
            .all(|child| matches!(child, VNode::Element { .. }))
}
