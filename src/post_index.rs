use std::collections::{BTreeMap, HashMap};

use crate::content::PostRecord;

/// Posts grouped by publication year.
pub struct YearIndex<'a> {
    years: BTreeMap<i32, Vec<&'a PostRecord>>,
}

impl<'a> YearIndex<'a> {
    pub fn build(posts: &'a [PostRecord]) -> YearIndex<'a> {
        let mut years: BTreeMap<i32, Vec<&PostRecord>> = BTreeMap::new();
        for post in posts {
            years.entry(post.year()).or_default().push(post);
        }
        YearIndex { years }
    }

    /// Newest year first, posts in the order they were supplied.
    pub fn newest_first(&self) -> impl Iterator<Item = (i32, &[&'a PostRecord])> {
        self.years.iter().rev().map(|(year, posts)| (*year, posts.as_slice()))
    }
}

/// Posts grouped by category, remembering the order categories were found in.
pub struct CategoryIndex<'a> {
    categories: Vec<(&'a str, Vec<&'a PostRecord>)>,
}

impl<'a> CategoryIndex<'a> {
    pub fn build(posts: &'a [PostRecord]) -> CategoryIndex<'a> {
        let mut positions: HashMap<&str, usize> = HashMap::new();
        let mut categories: Vec<(&str, Vec<&PostRecord>)> = vec![];
        for post in posts {
            let category = post.category.as_str();
            match positions.get(category) {
                Some(&pos) => categories[pos].1.push(post),
                None => {
                    positions.insert(category, categories.len());
                    categories.push((category, vec![post]));
                }
            }
        }
        CategoryIndex { categories }
    }

    pub fn in_discovery_order(&self) -> impl Iterator<Item = (&'a str, &[&'a PostRecord])> {
        self.categories.iter().map(|(name, posts)| (*name, posts.as_slice()))
    }

    pub fn by_name(&self) -> Vec<(&'a str, &[&'a PostRecord])> {
        let mut sorted: Vec<_> = self.in_discovery_order().collect();
        sorted.sort_by(|a, b| a.0.cmp(b.0));
        sorted
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use crate::test_data::post_record as post;

    use super::*;

    fn slugs(posts: &[&PostRecord]) -> Vec<String> {
        posts.iter().map(|p| p.slug.0.clone()).collect()
    }

    #[test]
    fn test_years_descending() {
        let posts = vec![
            post("c", "2025-03-01", "Technical"),
            post("b", "2024-12-31", "Tutorial"),
            post("a", "2024-01-01", "Technical"),
            post("z", "2022-06-01", "General"),
        ];
        let index = YearIndex::build(&posts);
        let years: Vec<_> = index.newest_first().map(|(y, p)| (y, slugs(p))).collect();
        assert_eq!(years, vec![
            (2025, vec!["c".to_string()]),
            (2024, vec!["b".to_string(), "a".to_string()]),
            (2022, vec!["z".to_string()]),
        ]);
    }

    #[test]
    fn test_categories_keep_discovery_order() {
        let posts = vec![
            post("c", "2025-03-01", "Technical"),
            post("b", "2024-12-31", "Tips & Tricks"),
            post("a", "2024-01-01", "Technical"),
            post("z", "2022-06-01", "General"),
        ];
        let index = CategoryIndex::build(&posts);
        assert_eq!(index.len(), 3);

        let found: Vec<_> = index.in_discovery_order().map(|(name, p)| (name, p.len())).collect();
        assert_eq!(found, vec![("Technical", 2), ("Tips & Tricks", 1), ("General", 1)]);

        let sorted: Vec<_> = index.by_name().into_iter().map(|(name, p)| (name, slugs(p))).collect();
        assert_eq!(sorted, vec![
            ("General", vec!["z".to_string()]),
            ("Technical", vec!["c".to_string(), "a".to_string()]),
            ("Tips & Tricks", vec!["b".to_string()]),
        ]);
    }

    #[test]
    fn test_empty() {
        let posts: Vec<PostRecord> = vec![];
        assert!(CategoryIndex::build(&posts).is_empty());
        assert_eq!(YearIndex::build(&posts).newest_first().count(), 0);
    }
}
