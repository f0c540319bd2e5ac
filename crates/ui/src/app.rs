use std::path::PathBuf;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use gpui::prelude::FluentBuilder;
use gpui::*;
use gpui_component::{
    ActiveTheme, Disableable, IconName, Sizable,
    button::{Button, ButtonVariants},
    h_flex,
    label::Label,
    v_flex,
};

use chatfolio_content::{ArticleId, ContentSource, StaticContent};

use crate::chat::{ChatView, PanelRequested};
use crate::navigation::{self, NavAction, Panel};
use crate::panels::{ArticleActivated, ArticleView, ExperiencePanel, ProjectsPanel, SkillsPanel};
use crate::settings::SettingsStore;

/// Returns the default themes directory path.
/// This is a pure function to allow deterministic testing of path resolution.
pub fn default_themes_path() -> PathBuf {
    PathBuf::from("./themes")
}

pub const PERSONA_NAME: &str = "Carl Mensah";
pub const PERSONA_STATUS: &str = "Software Developer • Available";

const CONTACT_EMAIL_URL: &str = "mailto:carlmensahmail@gmail.com";
const GITHUB_URL: &str = "https://github.com/Carl-J-M";
const LINKEDIN_URL: &str = "https://www.linkedin.com/in/carl-mensah/";

#[cfg(target_os = "macos")]
const WINDOW_TOOLBAR_LEFT_SAFE_PADDING: f32 = 78.0;
#[cfg(not(target_os = "macos"))]
const WINDOW_TOOLBAR_LEFT_SAFE_PADDING: f32 = 16.0;
#[cfg(target_os = "windows")]
const WINDOW_TOOLBAR_RIGHT_SAFE_PADDING: f32 = 120.0;
#[cfg(not(target_os = "windows"))]
const WINDOW_TOOLBAR_RIGHT_SAFE_PADDING: f32 = 16.0;

gpui::actions!(shell, [Quit]);

/// Computes the header height using a Zed-style responsive formula.
///
/// Tall enough for the persona identity row while still respecting user
/// font scaling via rem size.
fn window_toolbar_height(window: &Window) -> Pixels {
    (2.5 * window.rem_size()).max(px(52.0))
}

/// The active content view entity, recreated on every panel switch.
///
/// Dropping the previous variant drops its in-flight simulated-load task,
/// which is what keeps late loads from writing into a stale panel.
enum SectionView {
    None,
    Projects(Entity<ProjectsPanel>),
    Skills(Entity<SkillsPanel>),
    Experience(Entity<ExperiencePanel>),
    Article(Entity<ArticleView>),
}

/// Main application shell: header, panel switching, footer.
///
/// The chat view is created once and stays alive across panel switches so
/// the reveal sequence keeps running in the background; section views are
/// per-visit.
pub struct PortfolioShell {
    content: Arc<dyn ContentSource>,
    settings: SettingsStore,
    panel: Panel,
    chat_view: Entity<ChatView>,
    section: SectionView,
    title_bar_should_move: bool,
}

impl PortfolioShell {
    pub fn new(_window: &mut Window, cx: &mut Context<Self>) -> Self {
        let content: Arc<dyn ContentSource> = Arc::new(StaticContent);
        let settings = SettingsStore::load();
        let reduce_motion = settings.settings().reduce_motion;

        let chat_view = cx.new(|cx| ChatView::new(reduce_motion, cx));

        cx.subscribe(&chat_view, |this, _, event: &PanelRequested, cx| {
            this.apply_nav(event.action, cx);
        })
        .detach();

        Self {
            content,
            settings,
            panel: Panel::Chat,
            chat_view,
            section: SectionView::None,
            title_bar_should_move: false,
        }
    }

    pub fn active_panel(&self) -> Panel {
        self.panel
    }

    /// Routes one navigation input through the transition function.
    fn apply_nav(&mut self, action: NavAction, cx: &mut Context<Self>) {
        match navigation::apply(self.panel, action, self.content.internal_order()) {
            Ok(next) => {
                if next != self.panel {
                    self.panel = next;
                    self.rebuild_section(cx);
                }
                cx.notify();
            }
            Err(rejection) => {
                tracing::debug!(?action, ?rejection, "ignored navigation input");
            }
        }
    }

    fn rebuild_section(&mut self, cx: &mut Context<Self>) {
        self.section = match self.panel {
            Panel::Chat => SectionView::None,
            Panel::Projects => {
                let source = self.content.clone();
                let panel = cx.new(|cx| ProjectsPanel::new(source, cx));
                cx.subscribe(&panel, |this, _, event: &ArticleActivated, cx| {
                    this.apply_nav(NavAction::OpenArticle(event.id), cx);
                })
                .detach();
                SectionView::Projects(panel)
            }
            Panel::Skills => {
                let source = self.content.clone();
                SectionView::Skills(cx.new(|cx| SkillsPanel::new(source, cx)))
            }
            Panel::Experience => {
                let source = self.content.clone();
                SectionView::Experience(cx.new(|cx| ExperiencePanel::new(source, cx)))
            }
            Panel::Article(id) => {
                let source = self.content.clone();
                SectionView::Article(cx.new(|cx| ArticleView::new(&source, id, cx)))
            }
        };
    }

    fn panel_title(&self) -> Option<SharedString> {
        match self.panel {
            Panel::Chat => None,
            Panel::Projects => Some("My Articles & Demos".into()),
            Panel::Skills => Some("Skills".into()),
            Panel::Experience => Some("Work Experience".into()),
            Panel::Article(id) => Some(self.article_title(id).unwrap_or("Article").into()),
        }
    }

    fn article_title(&self, id: ArticleId) -> Option<&'static str> {
        self.content
            .articles()
            .iter()
            .find(|article| article.id() == id)
            .map(|article| article.meta().title)
    }

    fn toggle_theme_mode(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let next = self.settings.settings().as_ref().clone().with_toggled_mode();

        if let Err(error) = self.settings.update(next.clone()) {
            tracing::error!("failed to persist appearance settings: {}", error);
        }

        next.apply_theme(Some(window), cx);
        cx.notify();
    }
}

impl Render for PortfolioShell {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.theme();
        let toolbar_height = window_toolbar_height(window);

        let body: AnyElement = match &self.section {
            SectionView::Projects(panel) => panel.clone().into_any_element(),
            SectionView::Skills(panel) => panel.clone().into_any_element(),
            SectionView::Experience(panel) => panel.clone().into_any_element(),
            SectionView::Article(panel) => panel.clone().into_any_element(),
            SectionView::None => self.chat_view.clone().into_any_element(),
        };

        div()
            .size_full()
            .relative()
            .bg(theme.background)
            .child(
                v_flex()
                    .size_full()
                    .child(
                        v_flex()
                            .id("shell-body")
                            .flex_1()
                            .min_w_0()
                            .min_h_0()
                            .pt(toolbar_height)
                            .overflow_hidden()
                            .child(body),
                    )
                    .child(self.render_footer(cx)),
            )
            .child(
                div()
                    .absolute()
                    .top_0()
                    .left_0()
                    .right_0()
                    .child(self.render_header(window, toolbar_height, cx)),
            )
    }
}

impl PortfolioShell {
    fn render_header(
        &self,
        window: &Window,
        toolbar_height: Pixels,
        cx: &Context<Self>,
    ) -> impl IntoElement {
        let theme = cx.theme();
        let title = self.panel_title();
        let in_chat = title.is_none();

        h_flex()
            .id("shell-header")
            .window_control_area(WindowControlArea::Drag)
            .on_mouse_down_out(cx.listener(|this, _, _window, _cx| {
                this.title_bar_should_move = false;
            }))
            .on_mouse_up(
                MouseButton::Left,
                cx.listener(|this, _, _window, _cx| {
                    this.title_bar_should_move = false;
                }),
            )
            .on_mouse_down(
                MouseButton::Left,
                cx.listener(|this, _, _window, _cx| {
                    this.title_bar_should_move = true;
                }),
            )
            .on_mouse_move(cx.listener(|this, _, window, _cx| {
                if this.title_bar_should_move {
                    this.title_bar_should_move = false;
                    window.start_window_move();
                }
            }))
            .w_full()
            .h(toolbar_height)
            .flex_shrink_0()
            .pl(px(WINDOW_TOOLBAR_LEFT_SAFE_PADDING))
            .pr(px(WINDOW_TOOLBAR_RIGHT_SAFE_PADDING))
            .items_center()
            .gap_2()
            .bg(theme.primary)
            .text_color(theme.primary_foreground)
            .when(!in_chat, |bar| {
                bar.child(
                    Button::new("header-back")
                        .ghost()
                        .small()
                        .icon(IconName::ChevronLeft)
                        .on_click(cx.listener(|this, _, _window, cx| {
                            this.apply_nav(NavAction::Back, cx);
                        })),
                )
            })
            .map(|bar| match title {
                None => bar.child(self.render_persona_identity(cx)),
                Some(title) => bar.child(
                    h_flex().flex_1().min_w_0().justify_center().child(
                        Label::new(title)
                            .text_sm()
                            .font_semibold()
                            .text_color(theme.primary_foreground),
                    ),
                ),
            })
            .when(
                cfg!(target_os = "linux") && window.window_controls().window_menu,
                |title_bar| {
                    title_bar.on_mouse_down(MouseButton::Right, |event, window, _| {
                        window.show_window_menu(event.position);
                    })
                },
            )
            .child(self.render_linux_window_controls(window, cx))
    }

    fn render_persona_identity(&self, cx: &Context<Self>) -> impl IntoElement {
        let theme = cx.theme();

        h_flex()
            .id("persona-identity")
            .flex_1()
            .min_w_0()
            .items_center()
            .gap_2()
            .child(
                div()
                    .relative()
                    .child(
                        div()
                            .size(px(32.))
                            .rounded_full()
                            .bg(theme.primary_foreground.opacity(0.2))
                            .flex()
                            .items_center()
                            .justify_center()
                            .child(
                                Label::new("C")
                                    .text_sm()
                                    .font_semibold()
                                    .text_color(theme.primary_foreground),
                            ),
                    )
                    .child(
                        // Presence dot pinned to the avatar corner.
                        div()
                            .absolute()
                            .bottom_0()
                            .right_0()
                            .size(px(9.))
                            .rounded_full()
                            .bg(rgb(0x4caf50))
                            .border_1()
                            .border_color(theme.primary_foreground),
                    ),
            )
            .child(
                v_flex()
                    .gap_0()
                    .child(
                        Label::new(PERSONA_NAME)
                            .text_sm()
                            .font_semibold()
                            .text_color(theme.primary_foreground),
                    )
                    .child(
                        Label::new(PERSONA_STATUS)
                            .text_xs()
                            .text_color(theme.primary_foreground.opacity(0.8)),
                    ),
            )
    }

    fn render_linux_window_controls(&self, window: &Window, cx: &Context<Self>) -> AnyElement {
        #[cfg(target_os = "linux")]
        {
            let maximize_icon = if window.is_maximized() {
                IconName::WindowRestore
            } else {
                IconName::WindowMaximize
            };

            h_flex()
                .id("linux-window-controls")
                .items_center()
                // Keep clicks on window controls out of the drag gesture.
                .on_mouse_down(MouseButton::Left, |_, _, cx| cx.stop_propagation())
                .on_mouse_down(MouseButton::Right, |_, _, cx| cx.stop_propagation())
                .gap_2()
                .ml_2()
                .child(
                    Button::new("linux-window-minimize")
                        .ghost()
                        .small()
                        .icon(IconName::WindowMinimize)
                        .on_click(cx.listener(|_, _, window, _| {
                            window.minimize_window();
                        })),
                )
                .child(
                    Button::new("linux-window-maximize")
                        .ghost()
                        .small()
                        .icon(maximize_icon)
                        .on_click(cx.listener(|_, _, window, _| {
                            window.zoom_window();
                        })),
                )
                .child(
                    Button::new("linux-window-close")
                        .ghost()
                        .small()
                        .icon(IconName::WindowClose)
                        .on_click(cx.listener(|_, _, window, _| {
                            window.remove_window();
                        })),
                )
                .into_any_element()
        }

        #[cfg(not(target_os = "linux"))]
        {
            let _ = (window, cx);
            div().into_any_element()
        }
    }

    fn render_footer(&self, cx: &Context<Self>) -> impl IntoElement {
        let theme = cx.theme();
        let in_chat = self.panel == Panel::Chat;
        let open_article = self.panel.open_article();

        let is_dark = self.settings.settings().theme_mode.is_dark();
        let mode_label = if is_dark { "Light" } else { "Dark" };

        v_flex()
            .id("shell-footer")
            .w_full()
            .flex_shrink_0()
            .bg(theme.background)
            .border_t_1()
            .border_color(theme.border)
            .child(div().w_full().h(px(3.)).bg(theme.primary))
            .child(
                h_flex()
                    .w_full()
                    .items_center()
                    .justify_between()
                    .gap_2()
                    .px_3()
                    .py_2()
                    .child(
                        v_flex()
                            .gap_1()
                            .when_some(open_article, |column, id| {
                                column.child(self.render_article_pager(id, cx))
                            })
                            .when(!in_chat, |column| {
                                column.child(
                                    Button::new("footer-home")
                                        .outline()
                                        .small()
                                        .child("← Home")
                                        .on_click(cx.listener(|this, _, _window, cx| {
                                            this.apply_nav(NavAction::Home, cx);
                                        })),
                                )
                            })
                            .child(
                                Label::new(format!(
                                    "© {} Carl Mensah • Built with Rust & GPUI",
                                    copyright_year()
                                ))
                                .text_xs()
                                .text_color(theme.muted_foreground),
                            ),
                    )
                    .child(
                        h_flex()
                            .items_center()
                            .gap_1()
                            .child(
                                Button::new("footer-theme-toggle")
                                    .ghost()
                                    .small()
                                    .child(mode_label)
                                    .on_click(cx.listener(|this, _, window, cx| {
                                        this.toggle_theme_mode(window, cx);
                                    })),
                            )
                            .child(
                                Button::new("footer-email")
                                    .ghost()
                                    .small()
                                    .child("Email")
                                    .on_click(|_, _, cx| {
                                        cx.open_url(CONTACT_EMAIL_URL);
                                    }),
                            )
                            .child(
                                Button::new("footer-github")
                                    .ghost()
                                    .small()
                                    .child("GitHub")
                                    .on_click(|_, _, cx| {
                                        cx.open_url(GITHUB_URL);
                                    }),
                            )
                            .child(
                                Button::new("footer-linkedin")
                                    .ghost()
                                    .small()
                                    .child("LinkedIn")
                                    .on_click(|_, _, cx| {
                                        cx.open_url(LINKEDIN_URL);
                                    }),
                            ),
                    ),
            )
    }

    fn render_article_pager(&self, id: ArticleId, cx: &Context<Self>) -> impl IntoElement {
        let internal_order = self.content.internal_order();
        let previous = navigation::previous_article(internal_order, id);
        let next = navigation::next_article(internal_order, id);

        h_flex()
            .gap_2()
            .child(
                Button::new("footer-previous-article")
                    .outline()
                    .small()
                    .icon(IconName::ChevronLeft)
                    .child(
                        previous
                            .and_then(|prev| self.article_title(prev))
                            .unwrap_or("Previous"),
                    )
                    .disabled(previous.is_none())
                    .on_click(cx.listener(|this, _, _window, cx| {
                        this.apply_nav(NavAction::PreviousArticle, cx);
                    })),
            )
            .child(
                Button::new("footer-next-article")
                    .outline()
                    .small()
                    .icon(IconName::ChevronRight)
                    .child(
                        next.and_then(|next| self.article_title(next))
                            .unwrap_or("Next"),
                    )
                    .disabled(next.is_none())
                    .on_click(cx.listener(|this, _, _window, cx| {
                        this.apply_nav(NavAction::NextArticle, cx);
                    })),
            )
    }
}

/// Current year for the footer small print.
fn copyright_year() -> i64 {
    let days_since_epoch = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| (elapsed.as_secs() / 86_400) as i64)
        .unwrap_or(0);
    year_of_unix_days(days_since_epoch)
}

/// Year of a civil date given as days since 1970-01-01 (Hinnant's
/// `civil_from_days`, reduced to the year component).
fn year_of_unix_days(days: i64) -> i64 {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    if month <= 2 { y + 1 } else { y }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn themes_path_is_relative_to_working_directory() {
        assert_eq!(default_themes_path(), PathBuf::from("./themes"));
    }

    #[test]
    fn unix_day_years_cross_boundaries_correctly() {
        assert_eq!(year_of_unix_days(0), 1970);
        assert_eq!(year_of_unix_days(364), 1970);
        assert_eq!(year_of_unix_days(365), 1971);
        // 2026-01-01 is 20,454 days after the epoch.
        assert_eq!(year_of_unix_days(20_453), 2025);
        assert_eq!(year_of_unix_days(20_454), 2026);
        // Leap day handling: 2024-02-29 and 2024-03-01.
        assert_eq!(year_of_unix_days(19_782), 2024);
        assert_eq!(year_of_unix_days(19_783), 2024);
    }
}
