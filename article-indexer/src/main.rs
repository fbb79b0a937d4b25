use std::fs;
use std::path::Path;
use clap::{Command, Arg, ArgAction};
use walkdir::WalkDir;

use search_index::builder::SearchIndexBuilder;
use search_index::models::{
    IndexerConfig, DEFAULT_MIN_KEYWORD_FREQUENCY, DEFAULT_MIN_WORD_LENGTH,
    DEFAULT_TOP_KEYWORDS_COUNT,
};
use utils_common::{get_string, get_tags, split_frontmatter, ArticleMetadata};

/// 每个文章目录里约定的内容文件名
const CONTENT_FILE_NAME: &str = "index.md";

// 主函数
fn main() {
    // 设置命令行参数
    let matches = Command::new("文章搜索索引生成器")
        .version(env!("CARGO_PKG_VERSION"))
        .author("New Echoes")
        .about("扫描 Markdown 文章并生成搜索索引")
        .arg(Arg::new("source")
            .short('s')
            .long("source")
            .value_name("SOURCE_DIR")
            .help("文章源目录路径")
            .default_value("src/content/articles"))
        .arg(Arg::new("output")
            .short('o')
            .long("output")
            .value_name("OUTPUT_FILE")
            .help("索引输出文件路径")
            .default_value("public/search-index.json"))
        .arg(Arg::new("verbose")
            .short('v')
            .long("verbose")
            .help("显示详细信息")
            .action(ArgAction::SetTrue))
        .arg(Arg::new("top_keywords")
            .long("top-keywords")
            .value_name("COUNT")
            .help("每篇文章按词频保留的关键词数量")
            .value_parser(clap::value_parser!(usize))
            .default_value("30"))
        .arg(Arg::new("min_frequency")
            .long("min-frequency")
            .value_name("COUNT")
            .help("关键词入选需要的最低出现次数")
            .value_parser(clap::value_parser!(usize))
            .default_value("3"))
        .arg(Arg::new("min_word_length")
            .long("min-word-length")
            .value_name("LEN")
            .help("参与统计的单词最小长度")
            .value_parser(clap::value_parser!(usize))
            .default_value("4"))
        .get_matches();

    // 获取参数值
    let source_dir = matches.get_one::<String>("source").unwrap();
    let output_file = matches.get_one::<String>("output").unwrap();
    let verbose = matches.get_flag("verbose");
    let config = IndexerConfig {
        top_keywords_count: matches
            .get_one::<usize>("top_keywords")
            .copied()
            .unwrap_or(DEFAULT_TOP_KEYWORDS_COUNT),
        min_keyword_frequency: matches
            .get_one::<usize>("min_frequency")
            .copied()
            .unwrap_or(DEFAULT_MIN_KEYWORD_FREQUENCY),
        min_word_length: matches
            .get_one::<usize>("min_word_length")
            .copied()
            .unwrap_or(DEFAULT_MIN_WORD_LENGTH),
        ..IndexerConfig::default()
    };

    // 检查目录
    let source_path = std::path::Path::new(source_dir);
    if !source_path.exists() || !source_path.is_dir() {
        eprintln!("错误: 源目录不存在或不是有效目录 '{}'", source_dir);
        std::process::exit(1);
    }

    println!("开始生成搜索索引...");
    println!("源目录: {}", source_dir);
    println!("输出文件: {}", output_file);

    // 生成索引
    match generate_index(source_dir, output_file, verbose, config) {
        Ok(_) => println!("索引生成成功！"),
        Err(e) => {
            eprintln!("错误: 索引生成失败: {}", e);
            std::process::exit(1);
        }
    }
}

// 生成索引的主函数
fn generate_index(
    source_dir: &str,
    output_file: &str,
    verbose: bool,
    config: IndexerConfig,
) -> Result<(), String> {
    // 记录开始时间
    let start_time = std::time::Instant::now();

    // 扫描文章目录
    println!("扫描文章目录...");
    let (articles, skipped_count) = scan_article_dirs(source_dir, verbose)?;

    let article_count = articles.len();
    println!("扫描完成。找到 {} 篇有效文章，跳过 {} 个目录。", article_count, skipped_count);

    // 创建搜索索引构建器
    let mut search_builder = SearchIndexBuilder::with_config(config);

    // 添加文章到构建器
    for article in articles {
        search_builder.add_article(article);
    }

    // 保存索引
    println!("正在生成和保存索引...");
    search_builder.save_search_index(output_file)?;

    // 计算耗时
    let elapsed = start_time.elapsed();
    println!("索引生成完成！耗时: {:.2}秒", elapsed.as_secs_f32());

    Ok(())
}

// 扫描文章目录并提取文章数据
//
// 源目录的每个直接子目录算一篇文章，目录名就是 slug，
// 正文取子目录下的 index.md。没有内容文件的子目录跳过并计数。
// 子目录按名称排序后依次处理，保证输出可复现。
fn scan_article_dirs(dir_path: &str, verbose: bool) -> Result<(Vec<ArticleMetadata>, usize), String> {
    let mut articles = Vec::new();
    let mut skipped_count = 0;

    // 遍历源目录的直接子目录
    for entry in WalkDir::new(dir_path)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| format!("遍历目录时出错: {}", e))?;

        // 只处理子目录，源目录下的散文件不算文章
        if !entry.file_type().is_dir() {
            continue;
        }

        let content_path = entry.path().join(CONTENT_FILE_NAME);
        if !content_path.is_file() {
            skipped_count += 1;
            continue;
        }

        let slug = entry.file_name().to_string_lossy().to_string();
        let article = load_article(&content_path, slug)?;

        if verbose {
            println!("处理: {}", content_path.display());
        }

        articles.push(article);
    }

    Ok((articles, skipped_count))
}

// 读取单个内容文件并构建文章元数据
fn load_article(content_path: &Path, slug: String) -> Result<ArticleMetadata, String> {
    // 读取文件内容
    let raw = fs::read_to_string(content_path)
        .map_err(|e| format!("无法读取文件 {}: {}", content_path.display(), e))?;

    // 拆分 frontmatter 和正文，元数据块损坏时中止整个构建
    let (frontmatter, body) = split_frontmatter(&raw)
        .map_err(|e| format!("解析文件 {} 失败: {}", content_path.display(), e))?;

    Ok(ArticleMetadata {
        slug,
        title: get_string(&frontmatter, "title"),
        description: get_string(&frontmatter, "description"),
        tags: get_tags(&frontmatter),
        date: get_string(&frontmatter, "date"),
        content: body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{create_dir_all, write};
    use tempfile::tempdir;

    fn write_article(root: &Path, slug: &str, content: &str) {
        let dir = root.join(slug);
        create_dir_all(&dir).unwrap();
        write(dir.join(CONTENT_FILE_NAME), content).unwrap();
    }

    #[test]
    fn test_slug_comes_from_directory_name() {
        let dir = tempdir().unwrap();
        write_article(
            dir.path(),
            "my-first-post",
            "---\ntitle: First\ntags:\n  - intro\ndate: 2024-02-01\n---\nSome body text here.",
        );

        let (articles, skipped) = scan_article_dirs(dir.path().to_str().unwrap(), false).unwrap();

        assert_eq!(skipped, 0);
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].slug, "my-first-post");
        assert_eq!(articles[0].title, "First");
        assert_eq!(articles[0].tags, vec!["intro"]);
        assert_eq!(articles[0].date, "2024-02-01");
        assert_eq!(articles[0].content, "Some body text here.");
    }

    #[test]
    fn test_directories_without_content_file_are_skipped() {
        let dir = tempdir().unwrap();
        write_article(dir.path(), "real-post", "---\ntitle: Real\n---\nBody");
        create_dir_all(dir.path().join("drafts")).unwrap();
        // 源目录下的散文件不算文章，也不计入跳过数
        write(dir.path().join("notes.txt"), "not an article").unwrap();

        let (articles, skipped) = scan_article_dirs(dir.path().to_str().unwrap(), false).unwrap();

        assert_eq!(articles.len(), 1);
        assert_eq!(skipped, 1);
    }

    #[test]
    fn test_articles_processed_in_sorted_order() {
        let dir = tempdir().unwrap();
        write_article(dir.path(), "zebra-post", "---\ntitle: Z\n---\nBody");
        write_article(dir.path(), "alpha-post", "---\ntitle: A\n---\nBody");
        write_article(dir.path(), "mango-post", "---\ntitle: M\n---\nBody");

        let (articles, _) = scan_article_dirs(dir.path().to_str().unwrap(), false).unwrap();
        let slugs: Vec<&str> = articles.iter().map(|a| a.slug.as_str()).collect();

        assert_eq!(slugs, vec!["alpha-post", "mango-post", "zebra-post"]);
    }

    #[test]
    fn test_missing_frontmatter_defaults_to_empty_metadata() {
        let dir = tempdir().unwrap();
        write_article(dir.path(), "bare-post", "Just body text, no delimiters.");

        let (articles, _) = scan_article_dirs(dir.path().to_str().unwrap(), false).unwrap();

        assert_eq!(articles[0].title, "");
        assert_eq!(articles[0].description, "");
        assert!(articles[0].tags.is_empty());
        assert_eq!(articles[0].content, "Just body text, no delimiters.");
    }

    #[test]
    fn test_malformed_frontmatter_aborts_the_scan() {
        let dir = tempdir().unwrap();
        write_article(dir.path(), "good-post", "---\ntitle: Good\n---\nBody");
        write_article(dir.path(), "broken-post", "---\ntitle: [unclosed\n---\nBody");

        let result = scan_article_dirs(dir.path().to_str().unwrap(), false);

        assert!(result.is_err());
        assert!(result.unwrap_err().contains("broken-post"));
    }

    #[test]
    fn test_empty_source_directory_produces_empty_index() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("articles");
        create_dir_all(&source).unwrap();
        let output = dir.path().join("search-index.json");

        generate_index(
            source.to_str().unwrap(),
            output.to_str().unwrap(),
            false,
            IndexerConfig::default(),
        )
        .unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();

        assert_eq!(value["metadata"]["total_articles"], 0);
        assert!(value["keywords"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_full_pipeline_writes_consumable_index() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("articles");
        write_article(
            &source,
            "rust-post",
            "---\ntitle: Rust Post\ntags:\n  - Rust\ndate: 2024-03-01\n---\nOwnership ownership ownership makes lifetimes tractable.",
        );
        let output = dir.path().join("public").join("search-index.json");

        generate_index(
            source.to_str().unwrap(),
            output.to_str().unwrap(),
            false,
            IndexerConfig::default(),
        )
        .unwrap();

        let written = fs::read_to_string(&output).unwrap();
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();

        assert_eq!(value["metadata"]["total_articles"], 1);
        assert_eq!(value["articles"]["rust-post"]["title"], "Rust Post");
        assert_eq!(value["index"]["ownership"][0], "rust-post");
        assert_eq!(value["tagIndex"]["rust"][0], "rust-post");
    }
}
