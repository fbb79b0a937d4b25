use std::collections::HashMap;
use std::io;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_yaml::Value;

/// frontmatter 块模式: 开头的 --- 行、元数据块、第二个 --- 行、正文
static FRONTMATTER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)^---\s*\n(.*?)\n---\s*\n(.*)$").unwrap());

/// frontmatter 解析结果 - 扁平的键值映射
pub type Frontmatter = HashMap<String, Value>;

/// 从文件原始文本中拆分 frontmatter 和正文
///
/// 文本不以 --- 分隔符开头时返回空映射，整个输入作为正文；
/// 元数据块解析失败则返回错误，由调用方中止整个构建。
pub fn split_frontmatter(content: &str) -> Result<(Frontmatter, String), io::Error> {
    let captures = match FRONTMATTER_RE.captures(content) {
        Some(captures) => captures,
        // 没有分隔符不算错误，按无元数据处理
        None => return Ok((HashMap::new(), content.to_string())),
    };

    let block = captures.get(1).map_or("", |m| m.as_str());
    let body = captures.get(2).map_or("", |m| m.as_str());

    let frontmatter: Frontmatter = serde_yaml::from_str(block).map_err(|e| {
        io::Error::new(io::ErrorKind::InvalidData, format!("frontmatter 解析失败: {}", e))
    })?;

    Ok((frontmatter, body.to_string()))
}

/// 从 frontmatter 中读取字符串字段
///
/// 数字和布尔值转成字符串形式，缺失或其他类型一律返回空字符串。
pub fn get_string(frontmatter: &Frontmatter, key: &str) -> String {
    match frontmatter.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

/// 从 frontmatter 中读取标签列表，兼容序列和单个标量两种写法
pub fn get_tags(frontmatter: &Frontmatter) -> Vec<String> {
    match frontmatter.get("tags") {
        Some(Value::Sequence(tags)) => tags
            .iter()
            .filter_map(|v| v.as_str().map(String::from))
            .collect(),
        Some(Value::String(tag)) => vec![tag.clone()],
        _ => Vec::new(),
    }
}
