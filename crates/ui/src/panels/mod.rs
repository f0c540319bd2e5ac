//! Content panels behind the panel switcher.
//!
//! Each section panel is created fresh when entered and dropped when left;
//! the one-shot simulated-load task dies with the view, so a late load can
//! never write into a panel the user already navigated away from.

pub mod article;
pub mod experience;
pub mod projects;
pub mod skills;

pub use article::ArticleView;
pub use experience::ExperiencePanel;
pub use projects::{ArticleActivated, ProjectsPanel};
pub use skills::SkillsPanel;

use gpui::*;
use gpui_component::{h_flex, label::Label, v_flex};

/// Centered placeholder shown while a panel's simulated fetch is pending.
pub(crate) fn loading_placeholder(text: &'static str, accent: Hsla, muted: Hsla) -> AnyElement {
    v_flex()
        .size_full()
        .items_center()
        .justify_center()
        .gap_3()
        .child(
            h_flex().gap_1().children((0..3usize).map(move |ix| {
                div()
                    .size(px(10.))
                    .rounded_full()
                    .bg(accent.opacity(0.3))
                    .with_animation(
                        ("panel-loading-dot", ix),
                        Animation::new(std::time::Duration::from_millis(1200)).repeat(),
                        move |el, delta| {
                            let phase = (delta + ix as f32 * 0.2) % 1.0;
                            let pulse = (phase * std::f32::consts::TAU).sin() * 0.5 + 0.5;
                            el.bg(accent.opacity(0.2 + 0.8 * pulse))
                        },
                    )
            })),
        )
        .child(Label::new(text).text_sm().text_color(muted))
        .into_any_element()
}
