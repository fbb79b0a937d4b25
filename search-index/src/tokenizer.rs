use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::IndexerConfig;

/// 整段围栏代码块，跨行非贪婪匹配
static CODE_BLOCK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)```.*?```").unwrap());
/// 行内代码
static INLINE_CODE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`[^`]+`").unwrap());
/// http/https 链接
static URL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"https?://\S+").unwrap());
/// Markdown 结构符号
static MARKDOWN_PUNCT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[#*_\[\](){}]").unwrap());
/// 纯小写字母构成的词元
static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b[a-z]+\b").unwrap());

/// 从正文中提取归一化的词元序列
///
/// 依次做整段替换：去掉围栏代码块、行内代码、URL，把 Markdown
/// 结构符号换成空格保留词边界，再对小写化文本提取 a-z 词元。
/// 连字符和撇号会把词拆开，数字会让整个词落选。
/// 返回顺序为首次扫描到的顺序，重复词元保留。
pub fn extract_words(text: &str, config: &IndexerConfig) -> Vec<String> {
    let text = CODE_BLOCK_RE.replace_all(text, "");
    let text = INLINE_CODE_RE.replace_all(&text, "");
    let text = URL_RE.replace_all(&text, "");
    let text = MARKDOWN_PUNCT_RE.replace_all(&text, " ");

    let lowered = text.to_lowercase();

    WORD_RE
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .filter(|word| word.len() >= config.min_word_length && !config.stopwords.contains(word))
        .collect()
}
