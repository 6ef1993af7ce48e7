// src/domain/knowledge.rs

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Article {
    pub id: u32,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct KnowledgeCategory {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub articles: Vec<Article>,
}

/// Category slug selected when none is given.
pub const DEFAULT_CATEGORY: &str = "rights";

/// Looks up a category by slug, falling back to the first one.
pub fn select_category<'a>(
    categories: &'a [KnowledgeCategory],
    slug: &str,
) -> Option<&'a KnowledgeCategory> {
    categories
        .iter()
        .find(|c| c.slug == slug)
        .or_else(|| categories.first())
}

/// Articles from every category whose title or description contains `query`.
/// Each hit is paired with the category it belongs to.
pub fn search_articles<'a>(
    categories: &'a [KnowledgeCategory],
    query: &str,
) -> Vec<(&'a KnowledgeCategory, &'a Article)> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    categories
        .iter()
        .flat_map(|c| c.articles.iter().map(move |a| (c, a)))
        .filter(|(_, a)| {
            a.title.to_lowercase().contains(&needle) || a.description.to_lowercase().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories() -> Vec<KnowledgeCategory> {
        let article = |id: u32, title: &str, description: &str| Article {
            id,
            title: title.to_string(),
            description: description.to_string(),
        };
        vec![
            KnowledgeCategory {
                slug: "rights".into(),
                title: "Know Your Rights".into(),
                description: "d".into(),
                articles: vec![article(1, "Right to Information (RTI) Guide", "Learn how to file RTI applications")],
            },
            KnowledgeCategory {
                slug: "reporting".into(),
                title: "Reporting Corruption".into(),
                description: "d".into(),
                articles: vec![
                    article(3, "Documentation Guidelines", "How to gather and preserve evidence"),
                    article(4, "Whistleblower Protection", "Understanding your rights as a whistleblower"),
                ],
            },
        ]
    }

    #[test]
    fn unknown_slug_falls_back_to_first_category() {
        let cats = categories();
        assert_eq!(select_category(&cats, "reporting").unwrap().slug, "reporting");
        assert_eq!(select_category(&cats, "nope").unwrap().slug, "rights");
        assert!(select_category(&[], "rights").is_none());
    }

    #[test]
    fn search_spans_categories() {
        let cats = categories();
        let hits: Vec<u32> = search_articles(&cats, "RIGHTS").iter().map(|(_, a)| a.id).collect();
        assert_eq!(hits, vec![4]);

        let hits = search_articles(&cats, "rti");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].0.slug, "rights");

        assert!(search_articles(&cats, "   ").is_empty());
    }
}
