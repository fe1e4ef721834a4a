//! Graphviz output.
//!
//! Emits a `digraph docker` document with one edge and one node statement per image, in
//! input order. Parentless images hang off an invisible `base` node so they stay anchored
//! without drawing an arrow. Feed the result to `dot -Tpng` or similar.

use crate::image::{truncate_id, Image};
use crate::size::human_size;

/// Render `images` as a Graphviz document. Identifiers are always truncated.
pub fn render_dot(images: &[Image]) -> String {
    let mut dot = String::from("digraph docker {\n");

    for image in images {
        let id = image.short_id();

        if image.is_root() {
            dot.push_str(&format!(" base -> \"{}\" [style=invis]\n", id));
        } else {
            dot.push_str(&format!(
                " \"{}\" -> \"{}\"\n",
                truncate_id(&image.parent_id),
                id
            ));
        }

        let label = format!(
            "{} (+{}) ({})",
            id,
            human_size(image.size),
            human_size(image.virtual_size)
        );
        if image.is_tagged() {
            dot.push_str(&format!(
                " \"{}\" [label=\"{}\\n{}\",shape=box,fillcolor=\"paleturquoise\",style=\"filled,rounded\"];\n",
                id,
                label,
                image.repo_tags.join("\\n")
            ));
        } else {
            dot.push_str(&format!(" \"{}\" [label=\"{}\"];\n", id, label));
        }
    }

    dot.push_str(" base [style=invisible]\n}\n");
    dot
}
