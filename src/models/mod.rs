mod news;
mod snapshot;

pub use news::{NewsRecord, Window};
pub use snapshot::{
    CategoryCount, CountryCount, HomepageSnapshot, KeywordCount, SourceCount, TrendSnapshot,
};
