use std::sync::Arc;

use gpui::*;
use gpui_component::{ActiveTheme, h_flex, label::Label, v_flex};

use chatfolio_content::{ContentSource, SkillsData};

use crate::panels::loading_placeholder;

/// The skills taxonomy view: technical categories as chip groups, then the
/// soft skills.
pub struct SkillsPanel {
    source: Arc<dyn ContentSource>,
    skills: Option<SkillsData>,
    load_task: Option<Task<()>>,
}

impl SkillsPanel {
    pub fn new(source: Arc<dyn ContentSource>, cx: &mut Context<Self>) -> Self {
        let mut this = Self {
            source,
            skills: None,
            load_task: None,
        };
        this.spawn_load(cx);
        this
    }

    pub fn is_loading(&self) -> bool {
        self.skills.is_none()
    }

    fn spawn_load(&mut self, cx: &mut Context<Self>) {
        let source = self.source.clone();
        let delay = source.simulated_latency();

        self.load_task = Some(cx.spawn(async move |this, cx| {
            cx.background_executor().timer(delay).await;

            let _ = this.update(cx, |this, cx| {
                this.skills = Some(*source.skills());
                this.load_task = None;
                cx.notify();
            });
        }));
    }

    fn chip_row(
        skills: &'static [&'static str],
        chip_bg: Hsla,
        chip_fg: Hsla,
    ) -> impl IntoElement {
        h_flex().flex_wrap().gap_2().children(skills.iter().map(move |skill| {
            div()
                .px_2()
                .py_1()
                .rounded_md()
                .bg(chip_bg)
                .text_xs()
                .text_color(chip_fg)
                .child(*skill)
        }))
    }
}

impl Render for SkillsPanel {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.theme();

        let body = match self.skills {
            None => loading_placeholder("Loading skills...", theme.primary, theme.muted_foreground),
            Some(skills) => {
                let technical = skills.technical.iter().map(|category| {
                    v_flex()
                        .gap_2()
                        .child(
                            Label::new(category.name)
                                .text_sm()
                                .text_color(theme.muted_foreground),
                        )
                        .child(Self::chip_row(
                            category.skills,
                            theme.primary.opacity(0.12),
                            theme.primary,
                        ))
                });

                v_flex()
                    .id("skills-list")
                    .size_full()
                    .min_h_0()
                    .overflow_y_scroll()
                    .gap_4()
                    .px_3()
                    .py_3()
                    .child(Label::new("Technical Skills").font_semibold())
                    .children(technical)
                    .child(Label::new("Soft Skills").font_semibold())
                    .child(Self::chip_row(
                        skills.soft,
                        theme.muted,
                        theme.foreground,
                    ))
                    .into_any_element()
            }
        };

        v_flex().size_full().min_h_0().child(body)
    }
}
