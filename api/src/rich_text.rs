// cms rich-text documents, flattened back into markdown
//
// the cms hands post bodies out as a tree of typed nodes. the site renders
// markdown, so the tree is written out as the markdown it was authored from;
// a body that is already a string passes through untouched

use serde_json::Value;
use tracing::debug;

pub fn body_markdown(body: Option<Value>) -> anyhow::Result<String> {
    match body {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(markdown)) => Ok(markdown),
        Some(tree @ Value::Object(_)) => Ok(tree_markdown(&tree)),
        Some(other) => Err(anyhow::Error::msg(format!(
            "post body is neither markdown nor a rich-text tree: {other}"
        ))),
    }
}

pub fn tree_markdown(root: &Value) -> String {
    let mut out = String::new();
    block(root, &mut out);

    let trimmed = out.trim_end().len();
    out.truncate(trimmed);
    out.push('\n');
    out
}

fn kind(node: &Value) -> &str {
    node.get("type").and_then(Value::as_str).unwrap_or_default()
}

fn children(node: &Value) -> &[Value] {
    node.get("children")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

fn field<'a>(node: &'a Value, name: &str) -> &'a str {
    node.get(name).and_then(Value::as_str).unwrap_or_default()
}

fn flag(node: &Value, name: &str) -> bool {
    node.get(name).and_then(Value::as_bool).unwrap_or(false)
}

fn heading_level(kind: &str) -> Option<usize> {
    let level = kind.strip_prefix('h')?.parse::<usize>().ok()?;
    (1..=6).contains(&level).then_some(level)
}

fn block(node: &Value, out: &mut String) {
    let kind = kind(node);

    if let Some(level) = heading_level(kind) {
        out.push_str(&"#".repeat(level));
        out.push(' ');
        out.push_str(inline_all(children(node)).trim());
        out.push_str("\n\n");
        return;
    }

    match kind {
        "root" => {
            for child in children(node) {
                block(child, out);
            }
        }
        "p" => {
            out.push_str(&inline_all(children(node)));
            out.push_str("\n\n");
        }
        "blockquote" => {
            for line in inline_all(children(node)).lines() {
                out.push_str("> ");
                out.push_str(line);
                out.push('\n');
            }
            out.push('\n');
        }
        "ul" | "ol" => {
            list(node, 0, out);
            out.push('\n');
        }
        "code_block" => {
            out.push_str("```");
            out.push_str(field(node, "lang"));
            out.push('\n');
            let value = field(node, "value");
            out.push_str(value);
            if !value.ends_with('\n') {
                out.push('\n');
            }
            out.push_str("```\n\n");
        }
        "hr" => out.push_str("---\n\n"),
        "img" => {
            out.push_str(&image(node));
            out.push_str("\n\n");
        }
        "text" => {
            out.push_str(&inline(node));
            out.push_str("\n\n");
        }
        other => {
            debug!("rich-text block {other:?} written as a paragraph");
            let text = inline_all(children(node));
            if !text.is_empty() {
                out.push_str(&text);
                out.push_str("\n\n");
            }
        }
    }
}

fn list(node: &Value, depth: usize, out: &mut String) {
    let ordered = kind(node) == "ol";
    let indent = "   ".repeat(depth);

    for (idx, item) in children(node).iter().enumerate() {
        let marker = if ordered {
            format!("{}. ", idx + 1)
        } else {
            String::from("- ")
        };

        let mut text = String::new();
        let mut nested = Vec::new();

        for part in children(item) {
            match kind(part) {
                "ul" | "ol" => nested.push(part),
                // list item content wraps the inline nodes of an item
                "lic" | "p" => text.push_str(&inline_all(children(part))),
                _ => text.push_str(&inline(part)),
            }
        }

        out.push_str(&indent);
        out.push_str(&marker);
        out.push_str(text.trim());
        out.push('\n');

        for sublist in nested {
            list(sublist, depth + 1, out);
        }
    }
}

fn inline_all(nodes: &[Value]) -> String {
    nodes.iter().map(inline).collect()
}

fn inline(node: &Value) -> String {
    match kind(node) {
        "text" => {
            let text = field(node, "text");
            if text.is_empty() {
                return String::new();
            }
            if flag(node, "code") {
                return format!("`{text}`");
            }

            let mut text = text.to_owned();
            if flag(node, "italic") {
                text = format!("*{text}*");
            }
            if flag(node, "bold") {
                text = format!("**{text}**");
            }
            if flag(node, "strikethrough") {
                text = format!("~~{text}~~");
            }
            text
        }
        "a" => format!("[{}]({})", inline_all(children(node)), field(node, "url")),
        "img" => image(node),
        "break" => String::from("  \n"),
        _ => match node.get("text").and_then(Value::as_str) {
            Some(text) => text.to_owned(),
            None => inline_all(children(node)),
        },
    }
}

fn image(node: &Value) -> String {
    format!("![{}]({})", field(node, "alt"), field(node, "url"))
}
