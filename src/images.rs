//! The `images` command: bytes in, rendered text out.
//!
//! [`render_images`] runs the whole pipeline on an in-memory buffer:
//! - parse the JSON image list,
//! - for [`RenderMode::Tree`], build the [`Hierarchy`] and walk it,
//! - for [`RenderMode::Dot`], emit the graph straight from the flat list.
//!
//! [`run`] does the same after pulling the buffer from a [`Source`].

use log::{debug, info};

use crate::dot::render_dot;
use crate::error::{VizError, VizResult};
use crate::hierarchy::Hierarchy;
use crate::parser::parse_images;
use crate::sources::Source;
use crate::tree::render_tree;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RenderMode {
    Tree,
    Dot,
}

impl RenderMode {
    /// Resolve the `--dot`/`--tree` flags. Dot wins when both are given.
    pub fn from_flags(dot: bool, tree: bool) -> VizResult<Self> {
        if dot {
            Ok(RenderMode::Dot)
        } else if tree {
            Ok(RenderMode::Tree)
        } else {
            Err(VizError::Usage(
                "Please specify either --dot or --tree".to_string(),
            ))
        }
    }
}

#[derive(Debug, Clone)]
pub struct ImagesOptions {
    pub mode: RenderMode,
    /// Print full identifiers in tree mode
    pub no_trunc: bool,
    /// Id, short id, or tag of the image to root the tree at
    pub start: Option<String>,
}

impl ImagesOptions {
    pub fn new(mode: RenderMode) -> Self {
        Self {
            mode,
            no_trunc: false,
            start: None,
        }
    }
}

pub fn render_images(raw: &[u8], options: &ImagesOptions) -> VizResult<String> {
    let images = parse_images(raw)?;

    match options.mode {
        RenderMode::Dot => {
            debug!("Rendering {} images as dot", images.len());
            Ok(render_dot(&images))
        }
        RenderMode::Tree => {
            debug!(
                "Rendering {} images as tree (start: {:?}, no_trunc: {})",
                images.len(),
                options.start,
                options.no_trunc
            );
            let hierarchy = Hierarchy::build(&images, options.start.as_deref());
            render_tree(&hierarchy, options.no_trunc)
        }
    }
}

pub fn run(source: &dyn Source, options: &ImagesOptions) -> VizResult<String> {
    info!("Reading images from {}", source.name());
    let raw = source.read_input()?;
    render_images(&raw, options)
}
