use std::sync::Arc;

use gpui::*;
use gpui_component::{ActiveTheme, h_flex, label::Label, v_flex};

use chatfolio_content::{ContentSource, WorkExperience};

use crate::panels::loading_placeholder;

/// The work-history view, newest position first.
pub struct ExperiencePanel {
    source: Arc<dyn ContentSource>,
    jobs: Option<Vec<WorkExperience>>,
    load_task: Option<Task<()>>,
}

impl ExperiencePanel {
    pub fn new(source: Arc<dyn ContentSource>, cx: &mut Context<Self>) -> Self {
        let mut this = Self {
            source,
            jobs: None,
            load_task: None,
        };
        this.spawn_load(cx);
        this
    }

    pub fn is_loading(&self) -> bool {
        self.jobs.is_none()
    }

    fn spawn_load(&mut self, cx: &mut Context<Self>) {
        let source = self.source.clone();
        let delay = source.simulated_latency();

        self.load_task = Some(cx.spawn(async move |this, cx| {
            cx.background_executor().timer(delay).await;

            let _ = this.update(cx, |this, cx| {
                this.jobs = Some(source.experience().to_vec());
                this.load_task = None;
                cx.notify();
            });
        }));
    }

    fn render_job(&self, job: &WorkExperience, cx: &Context<Self>) -> AnyElement {
        let theme = cx.theme();

        let highlights = job.highlights.iter().map(|highlight| {
            h_flex()
                .items_start()
                .gap_2()
                .child(
                    div()
                        .size(px(5.))
                        .mt(px(6.))
                        .flex_shrink_0()
                        .rounded_full()
                        .bg(theme.primary.opacity(0.6)),
                )
                .child(Label::new(*highlight).text_xs())
        });

        v_flex()
            .w_full()
            .p_3()
            .gap_1()
            .rounded_lg()
            .bg(theme.background)
            .border_1()
            .border_color(theme.border)
            .child(Label::new(job.role).text_sm().font_semibold())
            .child(Label::new(job.company).text_sm().text_color(theme.primary))
            .child(
                Label::new(job.period)
                    .text_xs()
                    .text_color(theme.muted_foreground),
            )
            .child(
                Label::new(job.description)
                    .text_sm()
                    .text_color(theme.muted_foreground),
            )
            .child(v_flex().gap_1().mt_1().children(highlights))
            .into_any_element()
    }
}

impl Render for ExperiencePanel {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.theme();

        let body = match &self.jobs {
            None => loading_placeholder(
                "Loading experience...",
                theme.primary,
                theme.muted_foreground,
            ),
            Some(jobs) => v_flex()
                .id("experience-list")
                .size_full()
                .min_h_0()
                .overflow_y_scroll()
                .gap_2()
                .px_3()
                .py_3()
                .children(jobs.iter().map(|job| self.render_job(job, cx)))
                .into_any_element(),
        };

        v_flex().size_full().min_h_0().child(body)
    }
}
