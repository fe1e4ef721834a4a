//! Indented ASCII tree rendering.
//!
//! Walks a [`Hierarchy`] depth-first, pre-order, one line per image:
//!
//! ```text
//! └─511136ea3c5a Virtual Size: 0.0 B
//!   |─6170bb7b0ad1 Virtual Size: 0.0 B
//!   | └─79fdb1362c84 Virtual Size: 274.1 MB Tags: ubuntu:12.04
//!   └─f10ebce2c0e1 Virtual Size: 103.7 MB Tags: base:latest
//! ```
//!
//! Every sibling but the last gets `|─` and passes a `| ` column down to its children;
//! the last (or only) sibling gets `└─` and passes a blank column.

use std::collections::HashSet;

use crate::error::{VizError, VizResult};
use crate::hierarchy::Hierarchy;
use crate::image::Image;
use crate::size::human_size;

const MIDDLE_BRANCH: &str = "|─";
const LAST_BRANCH: &str = "└─";
const MIDDLE_INDENT: &str = "| ";
const LAST_INDENT: &str = "  ";

/// Render the hierarchy starting from its roots.
///
/// `no_trunc` prints full identifiers instead of the 12-character short form.
pub fn render_tree(hierarchy: &Hierarchy<'_>, no_trunc: bool) -> VizResult<String> {
    let mut walker = TreeWalker {
        hierarchy,
        no_trunc,
        output: String::new(),
        ancestors: HashSet::new(),
    };
    walker.walk(hierarchy.roots(), "")?;
    Ok(walker.output)
}

struct TreeWalker<'h, 'a> {
    hierarchy: &'h Hierarchy<'a>,
    no_trunc: bool,
    output: String,
    /// Ids on the path from the current root to the node being rendered
    ancestors: HashSet<&'a str>,
}

impl<'h, 'a> TreeWalker<'h, 'a> {
    fn walk(&mut self, images: &[&'a Image], prefix: &str) -> VizResult<()> {
        let hierarchy = self.hierarchy;

        for (index, &image) in images.iter().enumerate() {
            let (branch, indent) = if index + 1 < images.len() {
                (MIDDLE_BRANCH, MIDDLE_INDENT)
            } else {
                (LAST_BRANCH, LAST_INDENT)
            };

            self.print_node(image, prefix, branch);

            if let Some(children) = hierarchy.children_of(&image.id) {
                if !self.ancestors.insert(image.id.as_str()) {
                    return Err(VizError::Cycle {
                        id: image.id.clone(),
                    });
                }
                self.walk(children, &format!("{}{}", prefix, indent))?;
                self.ancestors.remove(image.id.as_str());
            }
        }

        Ok(())
    }

    fn print_node(&mut self, image: &Image, prefix: &str, branch: &str) {
        let id = if self.no_trunc {
            image.id.as_str()
        } else {
            image.short_id()
        };

        self.output.push_str(&format!(
            "{}{}{} Virtual Size: {}",
            prefix,
            branch,
            id,
            human_size(image.virtual_size)
        ));
        if image.is_tagged() {
            self.output
                .push_str(&format!(" Tags: {}\n", image.repo_tags.join(", ")));
        } else {
            self.output.push('\n');
        }
    }
}
