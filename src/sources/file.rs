use log::debug;
use std::fs;
use std::path::PathBuf;

use super::Source;
use crate::error::{VizError, VizResult};

/// Reads a previously saved image list, e.g. `curl --unix-socket ... > images.json`
pub struct FileSource {
    path: PathBuf,
    name: String,
}

impl FileSource {
    pub fn new(path: PathBuf) -> Self {
        let name = path.display().to_string();
        Self { path, name }
    }
}

impl Source for FileSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn read_input(&self) -> VizResult<Vec<u8>> {
        let buffer = fs::read(&self.path).map_err(|source| VizError::InputRead {
            source_name: self.name.clone(),
            source,
        })?;

        debug!("Read {} bytes from {}", buffer.len(), self.name);
        Ok(buffer)
    }
}
