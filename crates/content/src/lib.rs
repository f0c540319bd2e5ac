#![deny(unsafe_code)]

//! Static portfolio content behind a provider seam.
//!
//! Everything here is compiled-in data: article metadata and bodies, the
//! skills taxonomy, and the work history. The [`ContentSource`] trait is the
//! boundary the UI consumes, so a future real data source can replace
//! [`StaticContent`] without touching the panels.

use std::time::Duration;

pub mod article;
mod articles;
mod experience;
mod skills;

pub use article::{Article, ArticleId, ArticleMeta};
pub use experience::WorkExperience;
pub use skills::{SkillCategory, SkillsData};

/// Fixed cosmetic latency for the simulated content fetch.
pub const SIMULATED_FETCH_DELAY: Duration = Duration::from_millis(600);

/// Read-only access to the portfolio's fixed records.
///
/// Lookups return `None` on a miss rather than failing; enumerations return
/// records in a fixed author-defined order. Calls cannot fail.
pub trait ContentSource: Send + Sync {
    /// All articles, internal entries first, in listing order.
    fn articles(&self) -> &[Article];

    /// Reading order of internal articles, used for previous/next paging.
    fn internal_order(&self) -> &[ArticleId];

    /// Markdown body for an internal article; `None` for unknown or
    /// external ids.
    fn article_body(&self, id: ArticleId) -> Option<&'static str>;

    fn skills(&self) -> &SkillsData;

    fn experience(&self) -> &[WorkExperience];

    /// How long the simulated fetch should appear to take. A real source
    /// would return `Duration::ZERO` and do actual work instead.
    fn simulated_latency(&self) -> Duration {
        SIMULATED_FETCH_DELAY
    }
}

/// The compiled-in content set.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticContent;

impl ContentSource for StaticContent {
    fn articles(&self) -> &[Article] {
        article::ARTICLES
    }

    fn internal_order(&self) -> &[ArticleId] {
        article::INTERNAL_ORDER
    }

    fn article_body(&self, id: ArticleId) -> Option<&'static str> {
        article::body_for(id)
    }

    fn skills(&self) -> &SkillsData {
        &skills::SKILLS
    }

    fn experience(&self) -> &[WorkExperience] {
        experience::EXPERIENCE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn article_lookup_hits_and_misses() {
        let content = StaticContent;

        let body = content.article_body(article::MAINTAINABLE_CODE);
        assert!(body.is_some_and(|text| text.contains("Scale vs. Opinionation")));

        assert_eq!(content.article_body(ArticleId::new("no-such-article")), None);
    }

    #[test]
    fn listing_keeps_internal_entries_before_external() {
        let content = StaticContent;
        let articles = content.articles();

        let first_external = articles
            .iter()
            .position(Article::is_external)
            .expect("fixture contains external demos");
        assert!(articles[..first_external].iter().all(|a| !a.is_external()));
        assert!(articles[first_external..].iter().all(Article::is_external));
    }

    #[test]
    fn internal_order_matches_listing_and_has_bodies() {
        let content = StaticContent;

        let listed_internal: Vec<ArticleId> = content
            .articles()
            .iter()
            .filter(|a| !a.is_external())
            .map(Article::id)
            .collect();
        assert_eq!(listed_internal, content.internal_order());

        for id in content.internal_order() {
            assert!(
                content.article_body(*id).is_some(),
                "internal article {id:?} must have a body"
            );
        }
    }

    #[test]
    fn external_entries_carry_links_and_no_body() {
        let content = StaticContent;

        for entry in content.articles().iter().filter(|a| a.is_external()) {
            assert!(entry.external_link().is_some());
            assert_eq!(content.article_body(entry.id()), None);
        }
    }

    #[test]
    fn enumeration_order_is_stable() {
        let content = StaticContent;

        let ids: Vec<&str> = content.articles().iter().map(|a| a.id().as_str()).collect();
        assert_eq!(
            ids,
            [
                "generative-design-system",
                "universal-components",
                "maintainable-code",
                "tetris-demo",
                "physics-demo",
            ]
        );

        let categories: Vec<&str> = content
            .skills()
            .technical
            .iter()
            .map(|category| category.name)
            .collect();
        assert_eq!(
            categories,
            [
                "Frontend Frameworks",
                "Languages",
                "Styling",
                "Tools & Testing",
                "Concepts",
            ]
        );

        assert_eq!(content.experience()[0].company, "Etch");
    }
}
