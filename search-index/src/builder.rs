use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use chrono::Utc;
use utils_common::models::ArticleMetadata;

use crate::keywords;
use crate::models::{IndexArticle, IndexMetadata, IndexerConfig, SearchIndex};
use crate::tokenizer;

/// 搜索索引构建器
pub struct SearchIndexBuilder {
    articles: Vec<ArticleMetadata>,
    config: IndexerConfig,
}

impl SearchIndexBuilder {
    /// 创建使用默认配置的索引构建器
    pub fn new() -> Self {
        Self::with_config(IndexerConfig::default())
    }

    /// 创建使用指定配置的索引构建器
    pub fn with_config(config: IndexerConfig) -> Self {
        Self {
            articles: Vec::new(),
            config,
        }
    }

    /// 获取构建器中的文章数量
    pub fn get_article_count(&self) -> usize {
        self.articles.len()
    }

    /// 添加文章到索引构建器，构建时按加入顺序处理
    pub fn add_article(&mut self, article: ArticleMetadata) {
        self.articles.push(article);
    }

    /// 计算单篇文章的最终关键词列表：标签在前，内容关键词在后
    fn article_keywords(&self, article: &ArticleMetadata) -> Vec<String> {
        let words = tokenizer::extract_words(&article.content, &self.config);
        let content_keywords = keywords::select_keywords(&words, &self.config);
        keywords::merge_tag_keywords(&article.tags, &content_keywords)
    }

    /// 构建搜索索引
    ///
    /// 没有文章也能得到合法的空索引，所以不会失败。
    pub fn build_search_index(&self) -> SearchIndex {
        let mut index: BTreeMap<String, Vec<String>> = BTreeMap::new();
        let mut tag_index: BTreeMap<String, Vec<String>> = BTreeMap::new();
        let mut articles: BTreeMap<String, IndexArticle> = BTreeMap::new();

        for article in &self.articles {
            // 文章查找表，slug 重复时后写的覆盖先写的
            articles.insert(
                article.slug.clone(),
                IndexArticle {
                    title: article.title.clone(),
                    description: article.description.clone(),
                    tags: article.tags.clone(),
                    date: article.date.clone(),
                },
            );

            // 关键词倒排索引，同一关键词下每篇文章只出现一次
            for keyword in self.article_keywords(article) {
                let slugs = index.entry(keyword).or_insert_with(Vec::new);
                if !slugs.contains(&article.slug) {
                    slugs.push(article.slug.clone());
                }
            }

            // 标签倒排索引，与内容关键词分开维护
            for tag in &article.tags {
                let slugs = tag_index.entry(tag.to_lowercase()).or_insert_with(Vec::new);
                if !slugs.contains(&article.slug) {
                    slugs.push(article.slug.clone());
                }
            }
        }

        // BTreeMap 的键本身就是升序，直接导出排好序的列表
        let keywords_list: Vec<String> = index.keys().cloned().collect();
        let tags_list: Vec<String> = tag_index.keys().cloned().collect();

        // 输出构建统计
        println!("索引构建统计:");
        println!("- 文章数量: {}", articles.len());
        println!("- 关键词数量: {}", index.len());
        println!("- 标签数量: {}", tag_index.len());

        let metadata = IndexMetadata {
            total_articles: articles.len(),
            total_keywords: index.len(),
            total_tags: tag_index.len(),
            generated_at: Utc::now().to_rfc3339(),
        };

        SearchIndex {
            index,
            keywords: keywords_list,
            tag_index,
            tags: tags_list,
            articles,
            metadata,
        }
    }

    /// 构建搜索索引并写入文件
    ///
    /// 输出是两空格缩进的 JSON，键序稳定方便 diff；
    /// 父目录不存在时会先创建。
    pub fn save_search_index(&self, path: &str) -> Result<(), String> {
        let search_index = self.build_search_index();

        let json = serde_json::to_string_pretty(&search_index)
            .map_err(|e| format!("序列化搜索索引失败: {}", e))?;

        if let Some(parent) = Path::new(path).parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|e| format!("无法创建输出目录 {}: {}", parent.display(), e))?;
            }
        }

        let mut search_file = File::create(path)
            .map_err(|e| format!("无法创建搜索索引文件: {}", e))?;

        search_file
            .write_all(json.as_bytes())
            .map_err(|e| format!("无法写入搜索索引文件: {}", e))?;

        Ok(())
    }
}
