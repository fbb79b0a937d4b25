use std::collections::{BTreeMap, HashSet};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// 默认的最小词长，低于该长度的词元被丢弃
pub const DEFAULT_MIN_WORD_LENGTH: usize = 4;
/// 默认保留的高频关键词数量
pub const DEFAULT_TOP_KEYWORDS_COUNT: usize = 30;
/// 默认的关键词最低出现次数，达到即入选（与排名无关）
pub const DEFAULT_MIN_KEYWORD_FREQUENCY: usize = 3;

/// 默认停用词表 - 常见英文虚词加上文章里高频出现的通用词
pub static DEFAULT_STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "this", "that", "with", "from", "have", "will", "your", "they",
        "been", "were", "their", "there", "these", "those", "would",
        "could", "should", "about", "which", "where", "when", "what",
        "them", "then", "than", "into", "through", "during", "before",
        "after", "above", "below", "between", "under", "again", "further",
        "once", "here", "more", "most", "other", "some", "such", "only",
        "same", "also", "very", "just", "each", "being", "doing", "make",
        "made", "uses", "used", "using", "example", "code", "like", "well",
    ]
    .iter()
    .cloned()
    .collect()
});

/// 索引生成配置 - 显式传入管道入口，便于单独测试
#[derive(Clone, Debug)]
pub struct IndexerConfig {
    /// 词元的最小长度
    pub min_word_length: usize,
    /// 每篇文章按频率排名保留的关键词数量
    pub top_keywords_count: usize,
    /// 关键词入选的最低出现次数
    pub min_keyword_frequency: usize,
    /// 停用词表
    pub stopwords: HashSet<String>,
}

impl Default for IndexerConfig {
    fn default() -> Self {
        Self {
            min_word_length: DEFAULT_MIN_WORD_LENGTH,
            top_keywords_count: DEFAULT_TOP_KEYWORDS_COUNT,
            min_keyword_frequency: DEFAULT_MIN_KEYWORD_FREQUENCY,
            stopwords: DEFAULT_STOPWORDS.iter().map(|w| w.to_string()).collect(),
        }
    }
}

/// 索引中的文章条目 - 只保留客户端展示所需信息
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct IndexArticle {
    /// 文章标题
    pub title: String,
    /// 文章描述
    pub description: String,
    /// 文章标签列表（原始大小写）
    pub tags: Vec<String>,
    /// 发布日期
    pub date: String,
}

/// 索引元数据 - 存储索引的统计信息
#[derive(Serialize, Deserialize, Debug)]
pub struct IndexMetadata {
    /// 索引包含的文章数量
    pub total_articles: usize,
    /// 索引包含的关键词数量
    pub total_keywords: usize,
    /// 索引包含的标签数量
    pub total_tags: usize,
    /// 索引生成时间（RFC 3339）
    pub generated_at: String,
}

/// 搜索索引 - 输出给客户端搜索使用的完整数据
///
/// 字段名是与消费方的接口约定，`keywords` 和 `tags` 保证升序排列，
/// 客户端靠这一点做二分查找。
#[derive(Serialize, Deserialize, Debug)]
pub struct SearchIndex {
    /// 关键词到文章 slug 列表的倒排索引
    pub index: BTreeMap<String, Vec<String>>,
    /// 升序排列的关键词列表
    pub keywords: Vec<String>,
    /// 标签到文章 slug 列表的倒排索引（与内容关键词分开维护）
    #[serde(rename = "tagIndex")]
    pub tag_index: BTreeMap<String, Vec<String>>,
    /// 升序排列的标签列表
    pub tags: Vec<String>,
    /// slug 到文章元数据的查找表
    pub articles: BTreeMap<String, IndexArticle>,
    /// 索引统计信息
    pub metadata: IndexMetadata,
}
