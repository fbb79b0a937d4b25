use std::collections::{HashMap, HashSet};

use crate::models::IndexerConfig;

/// 从词元序列中选出文章的内容关键词
///
/// 统计词频后按（频率降序，词典序升序）排序，保证相同输入的输出
/// 完全可复现。入选条件取两条标准的并集：排名进入前
/// `top_keywords_count`，或出现次数达到 `min_keyword_frequency`
/// （与排名无关）。结果沿用排序后的顺序。
pub fn select_keywords(words: &[String], config: &IndexerConfig) -> Vec<String> {
    let mut word_counts: HashMap<&str, usize> = HashMap::new();
    for word in words {
        *word_counts.entry(word).or_insert(0) += 1;
    }

    let mut counted: Vec<(&str, usize)> = word_counts.into_iter().collect();
    // 频率相同的词按词典序排，避免依赖哈希表的遍历顺序
    counted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    counted
        .into_iter()
        .enumerate()
        .filter(|&(rank, (_, count))| {
            rank < config.top_keywords_count || count >= config.min_keyword_frequency
        })
        .map(|(_, (word, _))| word.to_string())
        .collect()
}

/// 把文章声明的标签放到内容关键词前面，并做大小写不敏感去重
///
/// 去重保留首次出现，标签先进所以同名时总是标签占位；
/// 输出统一为小写形式。
pub fn merge_tag_keywords(tags: &[String], content_keywords: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut merged = Vec::new();

    for keyword in tags.iter().chain(content_keywords.iter()) {
        let lower = keyword.to_lowercase();
        if seen.insert(lower.clone()) {
            merged.push(lower);
        }
    }

    merged
}
