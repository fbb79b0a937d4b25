use serde::{Deserialize, Serialize};

/// 文章元数据 - 存储索引所需的文章基本信息
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ArticleMetadata {
    /// 文章唯一标识符（来自所在目录名）
    pub slug: String,
    /// 文章标题
    pub title: String,
    /// 文章描述
    pub description: String,
    /// 文章标签列表（保留原始大小写）
    pub tags: Vec<String>,
    /// 发布日期（frontmatter 提供什么就按字符串保存）
    pub date: String,
    /// 文章正文，仅用于关键词提取
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub content: String,
}
