//! Indented text outline

use std::fmt::Write;

use settings_tree::TreeNode;

use super::RenderOptions;

const REDACTED: &str = "[REDACTED]";

/// Render a forest as an indented outline.
///
/// Branches end with `/`, settings print as `name = value`. Branches at the
/// depth limit are collapsed to a count of the settings below them.
pub fn render_text(forest: &[TreeNode], options: &RenderOptions) -> String {
    let mut out = String::new();
    for node in forest {
        write_node(&mut out, node, 1, options);
    }
    out
}

fn write_node(out: &mut String, node: &TreeNode, depth: usize, options: &RenderOptions) {
    let pad = " ".repeat((depth - 1) * options.indent);
    let name = display_name(&node.name);

    match node.value() {
        Some(value) if options.show_values => {
            let key = node
                .payload
                .as_ref()
                .map(|p| p.key.as_str())
                .unwrap_or(&node.name);
            let shown = if options.is_secret(key) {
                REDACTED.to_string()
            } else {
                value.replace('\n', "\\n")
            };
            let _ = write!(out, "{}{} = {}", pad, name, shown);
        }
        Some(_) => {
            let _ = write!(out, "{}{}", pad, name);
        }
        None => {
            let _ = write!(out, "{}{}/", pad, name);
        }
    }

    if node.is_leaf() {
        out.push('\n');
        return;
    }

    if options.max_depth != 0 && depth >= options.max_depth {
        let hidden = node.setting_count() - usize::from(node.is_setting());
        let _ = writeln!(out, " … ({} more)", hidden);
        return;
    }

    out.push('\n');
    for child in &node.children {
        write_node(out, child, depth + 1, options);
    }
}

fn display_name(name: &str) -> &str {
    if name.is_empty() {
        "\"\""
    } else {
        name
    }
}
