use crate::articles;

/// Stable identifier for one article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArticleId(pub &'static str);

impl ArticleId {
    /// Creates a typed article identifier.
    pub const fn new(raw: &'static str) -> Self {
        Self(raw)
    }

    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

/// Listing metadata shared by both article variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArticleMeta {
    pub id: ArticleId,
    pub title: &'static str,
    pub description: &'static str,
    pub date: &'static str,
    pub read_time: Option<&'static str>,
}

/// One entry in the article list.
///
/// Internal articles have a readable body; external articles only carry a
/// link that opens outside the app. The variant is the discriminant; there
/// is no separate `type` field to keep in sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Article {
    Internal(ArticleMeta),
    External { meta: ArticleMeta, link: &'static str },
}

impl Article {
    pub const fn meta(&self) -> &ArticleMeta {
        match self {
            Self::Internal(meta) => meta,
            Self::External { meta, .. } => meta,
        }
    }

    pub const fn id(&self) -> ArticleId {
        self.meta().id
    }

    /// Returns the outbound link for external entries.
    pub const fn external_link(&self) -> Option<&'static str> {
        match self {
            Self::Internal(_) => None,
            Self::External { link, .. } => Some(link),
        }
    }

    pub const fn is_external(&self) -> bool {
        matches!(self, Self::External { .. })
    }
}

pub const GENERATIVE_DESIGN_SYSTEM: ArticleId = ArticleId::new("generative-design-system");
pub const UNIVERSAL_COMPONENTS: ArticleId = ArticleId::new("universal-components");
pub const MAINTAINABLE_CODE: ArticleId = ArticleId::new("maintainable-code");

/// All articles, in the order the projects panel lists them:
/// internal pieces first, then the external demos.
pub(crate) static ARTICLES: &[Article] = &[
    Article::Internal(ArticleMeta {
        id: GENERATIVE_DESIGN_SYSTEM,
        title: "The Generative Design System: Why AI Should Learn Your Patterns, Not Follow Your Rules",
        description: "Stop enforcing consistency manually. Start teaching it through examples. How exemplar-driven architecture creates self-improving design systems.",
        date: "June 2025",
        read_time: Some("7 min read"),
    }),
    Article::Internal(ArticleMeta {
        id: UNIVERSAL_COMPONENTS,
        title: "What if components stopped pretending they were universal?",
        description: "Article about how universal components are misleading.",
        date: "March 2024",
        read_time: Some("8 min read"),
    }),
    Article::Internal(ArticleMeta {
        id: MAINTAINABLE_CODE,
        title: "Maintainability in UI Design Systems: Scale vs. Opinionation",
        description: "Some ideas about maintainablity over the long term.",
        date: "October 2023",
        read_time: Some("6 min read"),
    }),
    Article::External {
        meta: ArticleMeta {
            id: ArticleId::new("tetris-demo"),
            title: "Codepen Tetris demo",
            description: "Fun challenge to build playable tetris inside codpen.",
            date: "December 2023",
            read_time: None,
        },
        link: "https://codepen.io/carl-j-m/pen/VYZxpWW",
    },
    Article::External {
        meta: ArticleMeta {
            id: ArticleId::new("physics-demo"),
            title: "Codepen physics demo",
            description: "Another game experiment, this time with physics.",
            date: "January 2024",
            read_time: None,
        },
        link: "https://codepen.io/carl-j-m/pen/MYgVzKG",
    },
];

/// Reading order for previous/next navigation between internal articles.
pub(crate) static INTERNAL_ORDER: &[ArticleId] = &[
    GENERATIVE_DESIGN_SYSTEM,
    UNIVERSAL_COMPONENTS,
    MAINTAINABLE_CODE,
];

/// Markdown body lookup for internal articles.
pub(crate) fn body_for(id: ArticleId) -> Option<&'static str> {
    match id {
        GENERATIVE_DESIGN_SYSTEM => Some(articles::generative_design_system::BODY),
        UNIVERSAL_COMPONENTS => Some(articles::universal_components::BODY),
        MAINTAINABLE_CODE => Some(articles::maintainable_code::BODY),
        _ => None,
    }
}
