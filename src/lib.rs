pub mod dot;
pub mod error;
pub mod hierarchy;
pub mod image;
pub mod images;
pub mod notifier;
pub mod parser;
pub mod size;
pub mod sources;
pub mod tree;

// Re-exports for easy access
pub use error::{VizError, VizResult};
pub use hierarchy::Hierarchy;
pub use image::Image;
pub use images::{render_images, ImagesOptions, RenderMode};
pub use sources::FileSource;
pub use sources::Source;
pub use sources::StdinSource;
