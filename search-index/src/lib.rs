pub mod models;
pub mod tokenizer;
pub mod keywords;
pub mod builder;

// 重新导出常用类型，方便直接使用
pub use builder::SearchIndexBuilder;
pub use models::{IndexerConfig, SearchIndex};
