use chatfolio_content::ArticleId;

/// The mutually exclusive top-level views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Chat,
    Projects,
    Skills,
    Experience,
    Article(ArticleId),
}

impl Panel {
    /// The article currently open, if any.
    pub fn open_article(&self) -> Option<ArticleId> {
        match self {
            Self::Article(id) => Some(*id),
            _ => None,
        }
    }
}

/// User-triggered navigation input. Time never produces one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    OpenProjects,
    OpenSkills,
    OpenExperience,
    /// Open an internal article from the projects list.
    OpenArticle(ArticleId),
    NextArticle,
    PreviousArticle,
    /// Header chevron: chat from a section, projects from the reader.
    Back,
    /// Footer control: chat from anywhere.
    Home,
}

/// Rejection reason for navigation input that has no legal transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavRejection {
    QuickActionOutsideChat,
    ArticleOutsideProjects,
    NoArticleOpen,
    AtFirstArticle,
    AtLastArticle,
    UnknownArticle,
    AlreadyAtChat,
}

/// Applies one navigation action deterministically.
///
/// `internal_order` is the provider's fixed reading order; paging never
/// wraps around its ends.
pub fn apply(
    panel: Panel,
    action: NavAction,
    internal_order: &[ArticleId],
) -> Result<Panel, NavRejection> {
    match action {
        NavAction::OpenProjects | NavAction::OpenSkills | NavAction::OpenExperience => {
            if panel != Panel::Chat {
                return Err(NavRejection::QuickActionOutsideChat);
            }
            Ok(match action {
                NavAction::OpenProjects => Panel::Projects,
                NavAction::OpenSkills => Panel::Skills,
                _ => Panel::Experience,
            })
        }
        NavAction::OpenArticle(id) => {
            if panel != Panel::Projects {
                return Err(NavRejection::ArticleOutsideProjects);
            }
            if !internal_order.contains(&id) {
                return Err(NavRejection::UnknownArticle);
            }
            Ok(Panel::Article(id))
        }
        NavAction::NextArticle => {
            let id = panel.open_article().ok_or(NavRejection::NoArticleOpen)?;
            next_article(internal_order, id)
                .map(Panel::Article)
                .ok_or(NavRejection::AtLastArticle)
        }
        NavAction::PreviousArticle => {
            let id = panel.open_article().ok_or(NavRejection::NoArticleOpen)?;
            previous_article(internal_order, id)
                .map(Panel::Article)
                .ok_or(NavRejection::AtFirstArticle)
        }
        NavAction::Back => match panel {
            Panel::Chat => Err(NavRejection::AlreadyAtChat),
            Panel::Article(_) => Ok(Panel::Projects),
            Panel::Projects | Panel::Skills | Panel::Experience => Ok(Panel::Chat),
        },
        NavAction::Home => {
            if panel == Panel::Chat {
                return Err(NavRejection::AlreadyAtChat);
            }
            Ok(Panel::Chat)
        }
    }
}

/// The article before `id` in reading order, if `id` is known and not first.
pub fn previous_article(internal_order: &[ArticleId], id: ArticleId) -> Option<ArticleId> {
    let index = internal_order.iter().position(|entry| *entry == id)?;
    index.checked_sub(1).map(|prev| internal_order[prev])
}

/// The article after `id` in reading order, if `id` is known and not last.
pub fn next_article(internal_order: &[ArticleId], id: ArticleId) -> Option<ArticleId> {
    let index = internal_order.iter().position(|entry| *entry == id)?;
    internal_order.get(index + 1).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIRST: ArticleId = ArticleId::new("first");
    const MIDDLE: ArticleId = ArticleId::new("middle");
    const LAST: ArticleId = ArticleId::new("last");
    const ORDER: &[ArticleId] = &[FIRST, MIDDLE, LAST];

    #[test]
    fn quick_actions_only_leave_chat() {
        assert_eq!(
            apply(Panel::Chat, NavAction::OpenSkills, ORDER),
            Ok(Panel::Skills)
        );
        assert_eq!(
            apply(Panel::Projects, NavAction::OpenSkills, ORDER),
            Err(NavRejection::QuickActionOutsideChat)
        );
    }

    #[test]
    fn opening_articles_requires_the_projects_list() {
        assert_eq!(
            apply(Panel::Projects, NavAction::OpenArticle(MIDDLE), ORDER),
            Ok(Panel::Article(MIDDLE))
        );
        assert_eq!(
            apply(Panel::Chat, NavAction::OpenArticle(MIDDLE), ORDER),
            Err(NavRejection::ArticleOutsideProjects)
        );
        assert_eq!(
            apply(
                Panel::Projects,
                NavAction::OpenArticle(ArticleId::new("missing")),
                ORDER
            ),
            Err(NavRejection::UnknownArticle)
        );
    }

    #[test]
    fn paging_never_wraps() {
        assert_eq!(
            apply(Panel::Article(FIRST), NavAction::PreviousArticle, ORDER),
            Err(NavRejection::AtFirstArticle)
        );
        assert_eq!(
            apply(Panel::Article(LAST), NavAction::NextArticle, ORDER),
            Err(NavRejection::AtLastArticle)
        );
        assert_eq!(
            apply(Panel::Article(MIDDLE), NavAction::NextArticle, ORDER),
            Ok(Panel::Article(LAST))
        );
        assert_eq!(
            apply(Panel::Article(MIDDLE), NavAction::PreviousArticle, ORDER),
            Ok(Panel::Article(FIRST))
        );
    }

    #[test]
    fn paging_requires_an_open_article() {
        assert_eq!(
            apply(Panel::Skills, NavAction::NextArticle, ORDER),
            Err(NavRejection::NoArticleOpen)
        );
    }

    #[test]
    fn back_unwinds_reader_to_projects_and_sections_to_chat() {
        assert_eq!(
            apply(Panel::Article(MIDDLE), NavAction::Back, ORDER),
            Ok(Panel::Projects)
        );
        assert_eq!(apply(Panel::Projects, NavAction::Back, ORDER), Ok(Panel::Chat));
        assert_eq!(
            apply(Panel::Experience, NavAction::Back, ORDER),
            Ok(Panel::Chat)
        );
        assert_eq!(
            apply(Panel::Chat, NavAction::Back, ORDER),
            Err(NavRejection::AlreadyAtChat)
        );
    }

    #[test]
    fn home_returns_to_chat_from_any_other_panel() {
        for panel in [
            Panel::Projects,
            Panel::Skills,
            Panel::Experience,
            Panel::Article(LAST),
        ] {
            assert_eq!(apply(panel, NavAction::Home, ORDER), Ok(Panel::Chat));
        }
        assert_eq!(
            apply(Panel::Chat, NavAction::Home, ORDER),
            Err(NavRejection::AlreadyAtChat)
        );
    }

    #[test]
    fn adjacency_helpers_mirror_the_reading_order() {
        assert_eq!(previous_article(ORDER, FIRST), None);
        assert_eq!(previous_article(ORDER, MIDDLE), Some(FIRST));
        assert_eq!(next_article(ORDER, LAST), None);
        assert_eq!(next_article(ORDER, FIRST), Some(MIDDLE));
        assert_eq!(next_article(ORDER, ArticleId::new("missing")), None);
    }
}
