use crate::error::VizResult;

/// Source trait for obtaining the raw image list from wherever it lives
pub trait Source {
    /// Returns the name of the source for identification in logs and errors
    fn name(&self) -> &str;

    /// Reads the entire input into memory.
    /// Either the whole buffer is returned or an `InputRead` error, never a partial read
    fn read_input(&self) -> VizResult<Vec<u8>>;
}
