#[cfg(test)]
pub const POST_DATA: &str = r#"---
title: Writing your first LaTeX document
description: Step by step guide to your first document
date: 2024-01-15
author: Jane Doe
category: Tutorial
tags: [beginner, latex]
image: /images/blog/first-document.png
readTime: 8 min read
---

# Writing your first LaTeX document

Every document starts with a `\documentclass`.

<Tip>
  Use the template gallery if you are in a hurry.
</Tip>
"#;

#[cfg(test)]
pub const POST_WITHOUT_HEADER: &str = "# Notes

Nothing but prose in here.
";

#[cfg(test)]
pub fn post_source(title: &str, date: &str, category: &str) -> String {
    format!("---\ntitle: {}\ndescription: About {}\ndate: {}\ncategory: {}\n---\n\nBody of {}\n", title, title, date, category, title)
}

#[cfg(test)]
pub fn post_record(slug: &str, date: &str, category: &str) -> crate::content::PostRecord {
    crate::content::PostRecord {
        slug: crate::content::Slug(slug.to_string()),
        title: slug.to_uppercase(),
        description: format!("About {}", slug),
        date: chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        author: "Jane Doe".to_string(),
        tags: vec![],
        category: category.to_string(),
        image: None,
        read_time: "5 min read".to_string(),
    }
}
