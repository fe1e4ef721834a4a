//! Forest reconstruction from parent pointers.
//!
//! [`Hierarchy::build`] makes one pass over the records, collecting roots (records with no
//! parent) and grouping every other record under its parent id. Both keep input order.
//! The structure borrows the records and lives for a single render.

use log::{debug, warn};
use std::collections::{HashMap, HashSet};

use crate::image::Image;

/// Stand-in start node used when a start token matches no record.
static UNMATCHED_START: Image = Image {
    id: String::new(),
    parent_id: String::new(),
    repo_tags: Vec::new(),
    virtual_size: 0,
    size: 0,
    created: 0,
};

#[derive(Debug)]
pub struct Hierarchy<'a> {
    roots: Vec<&'a Image>,
    children: HashMap<&'a str, Vec<&'a Image>>,
}

impl<'a> Hierarchy<'a> {
    /// Group `images` by parent and pick the nodes rendering starts from.
    ///
    /// Without a start token the roots are every parentless record. With one, the roots
    /// are the single record whose id, short id, or any tag equals the token. When
    /// several records match, the last one in input order is used; when none match,
    /// an empty placeholder record is used instead.
    pub fn build(images: &'a [Image], start: Option<&str>) -> Self {
        let start = start.filter(|token| !token.is_empty());

        let mut roots = Vec::new();
        let mut children: HashMap<&'a str, Vec<&'a Image>> = HashMap::new();
        let mut start_image: Option<&'a Image> = None;

        for image in images {
            if image.is_root() {
                roots.push(image);
            } else {
                children
                    .entry(image.parent_id.as_str())
                    .or_default()
                    .push(image);
            }

            if let Some(token) = start {
                if image.matches(token) {
                    start_image = Some(image);
                }
            }
        }

        debug!(
            "Built hierarchy: {} roots, {} parents with children",
            roots.len(),
            children.len()
        );
        warn_dangling_parents(images, &children);

        let roots = match start {
            Some(token) => {
                let image = start_image.unwrap_or_else(|| {
                    warn!("No image matches '{}'", token);
                    &UNMATCHED_START
                });
                vec![image]
            }
            None => roots,
        };

        Self { roots, children }
    }

    /// Nodes rendering starts from.
    pub fn roots(&self) -> &[&'a Image] {
        &self.roots
    }

    /// Direct children of `id` in input order, or `None` for a leaf.
    pub fn children_of(&self, id: &str) -> Option<&[&'a Image]> {
        self.children.get(id).map(Vec::as_slice)
    }
}

fn warn_dangling_parents(images: &[Image], children: &HashMap<&str, Vec<&Image>>) {
    let ids: HashSet<&str> = images.iter().map(|image| image.id.as_str()).collect();
    let mut dangling: Vec<&str> = children
        .keys()
        .copied()
        .filter(|parent| !ids.contains(parent))
        .collect();

    if !dangling.is_empty() {
        dangling.sort_unstable();
        warn!(
            "{} parent id(s) not present in input, their children are not reachable: {}",
            dangling.len(),
            dangling.join(", ")
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(id: &str, parent: &str, tags: &[&str]) -> Image {
        Image {
            id: id.to_string(),
            parent_id: parent.to_string(),
            repo_tags: tags.iter().map(|t| t.to_string()).collect(),
            ..Default::default()
        }
    }

    fn ids(images: &[&Image]) -> Vec<String> {
        images.iter().map(|image| image.id.clone()).collect()
    }

    fn sample() -> Vec<Image> {
        vec![
            image("aaa111111111", "", &["<none>:<none>"]),
            image("bbb222222222", "aaa111111111", &["x:latest"]),
            image("ccc333333333", "", &["base:1"]),
            image("ddd444444444", "aaa111111111", &["<none>:<none>"]),
            image("eee555555555", "bbb222222222", &["x:latest", "x:2"]),
        ]
    }

    #[test]
    fn test_roots_in_input_order() {
        let images = sample();
        let hierarchy = Hierarchy::build(&images, None);
        assert_eq!(
            ids(hierarchy.roots()),
            vec!["aaa111111111", "ccc333333333"]
        );
    }

    #[test]
    fn test_children_grouped_in_input_order() {
        let images = sample();
        let hierarchy = Hierarchy::build(&images, None);
        assert_eq!(
            ids(hierarchy.children_of("aaa111111111").unwrap()),
            vec!["bbb222222222", "ddd444444444"]
        );
        assert!(hierarchy.children_of("ccc333333333").is_none());
    }

    #[test]
    fn test_empty_start_token_is_ignored() {
        let images = sample();
        let hierarchy = Hierarchy::build(&images, Some(""));
        assert_eq!(hierarchy.roots().len(), 2);
    }

    #[test]
    fn test_start_token_matches_id_short_id_and_tag() {
        let images = sample();

        let by_id = Hierarchy::build(&images, Some("ccc333333333"));
        assert_eq!(ids(by_id.roots()), vec!["ccc333333333"]);

        let by_tag = Hierarchy::build(&images, Some("base:1"));
        assert_eq!(ids(by_tag.roots()), vec!["ccc333333333"]);

        let long = vec![image("fff666666666abcdef", "", &["<none>:<none>"])];
        let by_short = Hierarchy::build(&long, Some("fff666666666"));
        assert_eq!(ids(by_short.roots()), vec!["fff666666666abcdef"]);
    }

    #[test]
    fn test_last_matching_start_wins() {
        let images = sample();
        let hierarchy = Hierarchy::build(&images, Some("x:latest"));
        assert_eq!(ids(hierarchy.roots()), vec!["eee555555555"]);
    }

    #[test]
    fn test_unmatched_start_uses_placeholder() {
        let images = sample();
        let hierarchy = Hierarchy::build(&images, Some("missing:tag"));
        assert_eq!(hierarchy.roots().len(), 1);
        assert_eq!(hierarchy.roots()[0], &Image::default());
    }

    #[test]
    fn test_children_kept_for_start_subtree() {
        let images = sample();
        let hierarchy = Hierarchy::build(&images, Some("aaa111111111"));
        assert_eq!(ids(hierarchy.roots()), vec!["aaa111111111"]);
        assert_eq!(hierarchy.children_of("aaa111111111").unwrap().len(), 2);
        assert_eq!(hierarchy.children_of("bbb222222222").unwrap().len(), 1);
    }

    #[test]
    fn test_dangling_parent_is_not_a_root() {
        let images = vec![
            image("aaa111111111", "", &[]),
            image("bbb222222222", "zzz999999999", &[]),
        ];
        let hierarchy = Hierarchy::build(&images, None);
        assert_eq!(ids(hierarchy.roots()), vec!["aaa111111111"]);
        assert_eq!(hierarchy.children_of("zzz999999999").unwrap().len(), 1);
    }
}
