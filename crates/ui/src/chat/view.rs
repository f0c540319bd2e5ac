use std::time::Duration;

use gpui::prelude::FluentBuilder as _;
use gpui::*;
use gpui_component::{
    ActiveTheme, Sizable,
    button::{Button, ButtonVariants},
    h_flex, v_flex,
};

use crate::chat::events::PanelRequested;
use crate::chat::message_list::MessageList;
use crate::chat::script::{INTRO_SCRIPT, ScriptedMessage};
use crate::chat::timeline::{ScheduledStep, TimelineStep, reveal_schedule};
use crate::navigation::NavAction;

/// The chat panel: a message list driven by the reveal timeline, with the
/// quick-action row that appears once the script has finished.
///
/// The timeline driver is a single task; dropping this view (or replacing
/// the task) cancels every not-yet-fired step as one group, so reveal state
/// is never mutated after teardown.
pub struct ChatView {
    script: &'static [ScriptedMessage],
    message_list: Entity<MessageList>,
    quick_actions_visible: bool,
    reveal_task: Option<Task<()>>,
}

impl EventEmitter<PanelRequested> for ChatView {}

impl ChatView {
    /// Creates the chat view and starts the one-shot reveal sequence.
    ///
    /// With `reduce_motion` set the timed schedule is skipped entirely: the
    /// whole script and the quick actions appear immediately.
    pub fn new(reduce_motion: bool, cx: &mut Context<Self>) -> Self {
        let script = INTRO_SCRIPT;
        let message_list = cx.new(|cx| MessageList::new(script, cx));

        let mut this = Self {
            script,
            message_list,
            quick_actions_visible: false,
            reveal_task: None,
        };

        if reduce_motion {
            this.reveal_everything(cx);
        } else {
            this.start_reveal(cx);
        }

        this
    }

    pub fn quick_actions_visible(&self) -> bool {
        self.quick_actions_visible
    }

    fn start_reveal(&mut self, cx: &mut Context<Self>) {
        let schedule = reveal_schedule(self.script);

        self.reveal_task = Some(cx.spawn(async move |this, cx| {
            let mut elapsed = Duration::ZERO;

            for ScheduledStep { at, step } in schedule {
                let wait = at.saturating_sub(elapsed);
                if !wait.is_zero() {
                    cx.background_executor().timer(wait).await;
                }
                elapsed = at;

                if this
                    .update(cx, |this, cx| this.apply_step(step, cx))
                    .is_err()
                {
                    // View is gone; the remaining steps die with the task.
                    break;
                }
            }
        }));
    }

    fn reveal_everything(&mut self, cx: &mut Context<Self>) {
        let total = self.script.len();
        self.message_list.update(cx, |list, cx| {
            list.set_progress(total, false, cx);
        });
        self.quick_actions_visible = true;
        cx.notify();
    }

    fn apply_step(&mut self, step: TimelineStep, cx: &mut Context<Self>) {
        match step {
            TimelineStep::TypingStarted => {
                let revealed = self.message_list.read(cx).revealed();
                self.message_list.update(cx, |list, cx| {
                    list.set_progress(revealed, true, cx);
                });
            }
            TimelineStep::Revealed(index) => {
                self.message_list.update(cx, |list, cx| {
                    list.set_progress(index + 1, false, cx);
                });
            }
            TimelineStep::Completed => {
                self.quick_actions_visible = true;
                self.reveal_task = None;
                tracing::info!("introduction script finished");
                cx.notify();
            }
        }
    }

    fn request_panel(&mut self, action: NavAction, cx: &mut Context<Self>) {
        cx.emit(PanelRequested { action });
    }

    fn render_quick_actions(&self, cx: &Context<Self>) -> impl IntoElement {
        let theme = cx.theme();

        let actions = [
            ("quick-action-projects", "View Projects", NavAction::OpenProjects),
            ("quick-action-skills", "Skills", NavAction::OpenSkills),
            (
                "quick-action-experience",
                "Work Experience",
                NavAction::OpenExperience,
            ),
        ];

        h_flex()
            .id("chat-quick-actions")
            .w_full()
            .flex_shrink_0()
            .gap_2()
            .px_3()
            .py_2()
            .border_t_1()
            .border_color(theme.border)
            .bg(theme.background)
            .children(actions.map(|(id, label, action)| {
                Button::new(id)
                    .outline()
                    .small()
                    .child(label)
                    .on_click(cx.listener(move |this, _, _window, cx| {
                        this.request_panel(action, cx);
                    }))
            }))
    }
}

impl Render for ChatView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        v_flex()
            .id("chat-view")
            .size_full()
            .min_h_0()
            .overflow_hidden()
            .child(
                div()
                    .id("chat-view-messages")
                    .flex_1()
                    .min_h_0()
                    .child(self.message_list.clone()),
            )
            .when(self.quick_actions_visible, |el| {
                el.child(self.render_quick_actions(cx))
            })
    }
}
