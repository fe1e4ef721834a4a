mod file;
mod source;
mod stdin;

pub use file::FileSource;
pub use source::Source;
pub use stdin::StdinSource;
