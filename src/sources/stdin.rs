use log::debug;
use std::io::Read;

use super::Source;
use crate::error::{VizError, VizResult};

/// Reads the image list piped on standard input, e.g. from the docker API
pub struct StdinSource;

impl StdinSource {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdinSource {
    fn default() -> Self {
        Self::new()
    }
}

impl Source for StdinSource {
    fn name(&self) -> &str {
        "stdin"
    }

    fn read_input(&self) -> VizResult<Vec<u8>> {
        let mut buffer = Vec::new();
        std::io::stdin()
            .lock()
            .read_to_end(&mut buffer)
            .map_err(|source| VizError::InputRead {
                source_name: self.name().to_string(),
                source,
            })?;

        debug!("Read {} bytes from stdin", buffer.len());
        Ok(buffer)
    }
}
