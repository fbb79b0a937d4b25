pub mod frontmatter;
pub mod models;

// 重新导出常用模块和函数，方便直接使用
pub use frontmatter::{get_string, get_tags, split_frontmatter, Frontmatter};
pub use models::ArticleMetadata;
