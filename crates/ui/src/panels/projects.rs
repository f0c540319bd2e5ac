use std::sync::Arc;

use gpui::prelude::FluentBuilder as _;
use gpui::*;
use gpui_component::{ActiveTheme, Icon, IconName, h_flex, label::Label, v_flex};

use chatfolio_content::{Article, ArticleId, ContentSource};

use crate::panels::loading_placeholder;

/// Emitted when an internal article row is activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArticleActivated {
    pub id: ArticleId,
}

/// The "My Articles & Demos" list.
///
/// Internal rows hand the selection to the shell; external rows open in the
/// system browser and deliberately leave the panel state untouched.
pub struct ProjectsPanel {
    source: Arc<dyn ContentSource>,
    articles: Option<Vec<Article>>,
    load_task: Option<Task<()>>,
}

impl EventEmitter<ArticleActivated> for ProjectsPanel {}

impl ProjectsPanel {
    pub fn new(source: Arc<dyn ContentSource>, cx: &mut Context<Self>) -> Self {
        let mut this = Self {
            source,
            articles: None,
            load_task: None,
        };
        this.spawn_load(cx);
        this
    }

    pub fn is_loading(&self) -> bool {
        self.articles.is_none()
    }

    fn spawn_load(&mut self, cx: &mut Context<Self>) {
        let source = self.source.clone();
        let delay = source.simulated_latency();

        self.load_task = Some(cx.spawn(async move |this, cx| {
            cx.background_executor().timer(delay).await;

            let _ = this.update(cx, |this, cx| {
                this.articles = Some(source.articles().to_vec());
                this.load_task = None;
                cx.notify();
            });
        }));
    }

    fn activate(&mut self, article: Article, cx: &mut Context<Self>) {
        match article.external_link() {
            Some(link) => {
                // Fire-and-forget; no panel transition for external demos.
                cx.open_url(link);
            }
            None => cx.emit(ArticleActivated { id: article.id() }),
        }
    }

    fn render_article_row(&self, ix: usize, article: Article, cx: &Context<Self>) -> AnyElement {
        let theme = cx.theme();
        let meta = *article.meta();
        let is_external = article.is_external();

        div()
            .id(("article-row", ix))
            .w_full()
            .p_3()
            .rounded_lg()
            .bg(theme.background)
            .border_1()
            .border_color(theme.border)
            .cursor_pointer()
            .hover(|el| el.border_color(theme.primary))
            .on_click(cx.listener(move |this, _, _window, cx| {
                this.activate(article, cx);
            }))
            .child(
                h_flex()
                    .items_start()
                    .gap_2()
                    .child(
                        v_flex()
                            .flex_1()
                            .min_w_0()
                            .gap_1()
                            .child(Label::new(meta.title).text_sm().font_semibold())
                            .child(
                                Label::new(meta.description)
                                    .text_sm()
                                    .text_color(theme.muted_foreground),
                            )
                            .child(
                                h_flex()
                                    .gap_3()
                                    .child(
                                        Label::new(meta.date)
                                            .text_xs()
                                            .text_color(theme.muted_foreground),
                                    )
                                    .when_some(meta.read_time, |row, read_time| {
                                        row.child(
                                            Label::new(read_time)
                                                .text_xs()
                                                .text_color(theme.muted_foreground),
                                        )
                                    }),
                            ),
                    )
                    .when(is_external, |row| {
                        row.child(
                            Icon::new(IconName::ExternalLink)
                                .size(px(14.))
                                .text_color(theme.muted_foreground),
                        )
                    }),
            )
            .into_any_element()
    }
}

impl Render for ProjectsPanel {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.theme();

        let body = match &self.articles {
            None => loading_placeholder(
                "Loading articles...",
                theme.primary,
                theme.muted_foreground,
            ),
            Some(articles) => v_flex()
                .id("projects-list")
                .size_full()
                .min_h_0()
                .overflow_y_scroll()
                .gap_2()
                .px_3()
                .py_3()
                .children(
                    articles
                        .iter()
                        .copied()
                        .enumerate()
                        .map(|(ix, article)| self.render_article_row(ix, article, cx)),
                )
                .into_any_element(),
        };

        v_flex().size_full().min_h_0().child(body)
    }
}
