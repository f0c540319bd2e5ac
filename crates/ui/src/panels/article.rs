use std::sync::Arc;

use gpui::prelude::FluentBuilder as _;
use gpui::*;
use gpui_component::{ActiveTheme, h_flex, label::Label, text::TextView, v_flex};

use chatfolio_content::{ArticleId, ArticleMeta, ContentSource};

/// The full-article reader.
///
/// Unlike the section panels there is no simulated fetch here: the body is
/// a compiled-in string and renders immediately. A lookup miss (an id with
/// no matching record) renders an empty reader rather than panicking.
pub struct ArticleView {
    id: ArticleId,
    meta: Option<ArticleMeta>,
    body: Option<&'static str>,
}

impl ArticleView {
    pub fn new(source: &Arc<dyn ContentSource>, id: ArticleId, _cx: &mut Context<Self>) -> Self {
        let meta = source
            .articles()
            .iter()
            .find(|article| article.id() == id)
            .map(|article| *article.meta());
        let body = source.article_body(id);

        if meta.is_none() || body.is_none() {
            tracing::warn!("article lookup missed for {:?}", id);
        }

        Self { id, meta, body }
    }

    pub fn article_id(&self) -> ArticleId {
        self.id
    }

    pub fn title(&self) -> Option<&'static str> {
        self.meta.map(|meta| meta.title)
    }
}

impl Render for ArticleView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.theme();

        v_flex()
            .id("article-view")
            .size_full()
            .min_h_0()
            .overflow_y_scroll()
            .px_4()
            .py_3()
            .gap_3()
            .when_some(self.meta, |el, meta| {
                let byline = match meta.read_time {
                    Some(read_time) => format!("{} · {}", meta.date, read_time),
                    None => meta.date.to_string(),
                };
                el.child(
                    Label::new(byline)
                        .text_xs()
                        .text_color(theme.muted_foreground),
                )
            })
            .when_some(self.body, |el, body| {
                el.child(
                    div()
                        .w_full()
                        .p_4()
                        .rounded_lg()
                        .bg(theme.background)
                        .border_1()
                        .border_color(theme.border)
                        .child(
                            h_flex().w_full().child(
                                TextView::markdown(
                                    ElementId::Name(SharedString::from(format!(
                                        "article-body-{}",
                                        self.id.as_str()
                                    ))),
                                    body,
                                )
                                .selectable(true),
                            ),
                        ),
                )
            })
    }
}
