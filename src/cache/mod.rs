mod publisher;
mod reader;

pub use publisher::CachePublisher;
pub use reader::CacheReader;
