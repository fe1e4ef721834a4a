use log::debug;

use crate::error::VizResult;
use crate::image::Image;

/// Decode a JSON array of image records, keeping input order.
pub fn parse_images(raw: &[u8]) -> VizResult<Vec<Image>> {
    let images: Vec<Image> = serde_json::from_slice(raw)?;
    debug!("Parsed {} image records", images.len());
    Ok(images)
}
