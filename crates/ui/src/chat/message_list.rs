use std::rc::Rc;

use gpui::prelude::FluentBuilder as _;
use gpui::*;
use gpui_component::{ActiveTheme, h_flex, label::Label, v_flex, v_virtual_list};

use crate::chat::script::{MessageKind, ScriptedMessage, Sender};
use crate::chat::scroll_manager::ScrollManager;

const DEFAULT_CONTENT_WIDTH: Pixels = px(460.);
const LIST_HORIZONTAL_PADDING: Pixels = px(16.);
const CONTENT_WIDTH_CHANGE_EPSILON: f32 = 1.0;
const BUBBLE_MAX_WIDTH_RATIO: f32 = 0.75;
const CHIP_BUBBLE_MAX_WIDTH_RATIO: f32 = 0.85;
const BUBBLE_PADDING_X: Pixels = px(14.);
const BUBBLE_PADDING_Y: Pixels = px(10.);
const CHIP_HEIGHT: Pixels = px(24.);
const CHIP_GAP: Pixels = px(6.);
const CHIP_PADDING_X: Pixels = px(10.);
const TYPING_ROW_HEIGHT: Pixels = px(36.);
const TYPING_DOT_SIZE: Pixels = px(8.);
const TYPING_DOT_PERIOD_MS: u64 = 1400;
const ESTIMATED_TEXT_LINE_HEIGHT: Pixels = px(18.);
const ESTIMATED_CHAR_WIDTH: f32 = 7.0;

/// One virtual-list row: a revealed script entry, or the typing indicator
/// trailing the conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Row {
    Message(usize),
    Typing,
}

/// Renders the revealed prefix of the script as chat bubbles.
///
/// The script itself is immutable, so row heights are cached per index and
/// invalidated only when the list width changes; visible rows get a real
/// layout measurement to replace the estimate.
pub struct MessageList {
    script: &'static [ScriptedMessage],
    revealed: usize,
    typing: bool,
    item_sizes: Rc<Vec<Size<Pixels>>>,
    measured_heights: Vec<Option<Pixels>>,
    content_width: Option<Pixels>,
    scroll_manager: ScrollManager,
}

impl MessageList {
    pub fn new(script: &'static [ScriptedMessage], _cx: &mut Context<Self>) -> Self {
        Self {
            script,
            revealed: 0,
            typing: false,
            item_sizes: Rc::new(Vec::new()),
            measured_heights: vec![None; script.len()],
            content_width: None,
            scroll_manager: ScrollManager::new(),
        }
    }

    pub fn revealed(&self) -> usize {
        self.revealed
    }

    pub fn is_typing(&self) -> bool {
        self.typing
    }

    /// Moves the reveal state forward and keeps the tail in view.
    pub fn set_progress(&mut self, revealed: usize, typing: bool, cx: &mut Context<Self>) {
        let revealed = revealed.min(self.script.len());
        let grew = revealed > self.revealed || (typing && !self.typing);

        self.revealed = revealed;
        self.typing = typing;
        self.rebuild_item_sizes();

        if grew {
            self.scroll_manager.request_scroll_to_bottom();
        }

        cx.notify();
    }

    fn rows(&self) -> Vec<Row> {
        let mut rows: Vec<Row> = (0..self.revealed).map(Row::Message).collect();
        if self.typing {
            rows.push(Row::Typing);
        }
        rows
    }

    fn update_content_width(&mut self, cx: &mut Context<Self>) {
        let list_width = self.scroll_manager.content_width();
        if list_width <= Pixels::ZERO {
            return;
        }

        let next_content_width = (list_width - LIST_HORIZONTAL_PADDING * 2).max(px(1.));
        let width_changed = self.content_width.is_none_or(|current| {
            (f32::from(current) - f32::from(next_content_width)).abs()
                > CONTENT_WIDTH_CHANGE_EPSILON
        });

        if width_changed {
            self.content_width = Some(next_content_width);
            // Widths invalidate every cached measurement.
            self.measured_heights = vec![None; self.script.len()];
            self.rebuild_item_sizes();
            cx.notify();
        }
    }

    fn rebuild_item_sizes(&mut self) {
        let content_width = self.content_width.unwrap_or(DEFAULT_CONTENT_WIDTH);

        let sizes = self
            .rows()
            .iter()
            .map(|row| {
                let height = match row {
                    Row::Message(index) => self.measured_heights[*index].unwrap_or_else(|| {
                        estimate_row_height(&self.script[*index], content_width)
                    }),
                    Row::Typing => TYPING_ROW_HEIGHT,
                };
                size(px(0.), height)
            })
            .collect();

        self.item_sizes = Rc::new(sizes);
    }

    fn measure_visible_rows(
        &mut self,
        visible_range: std::ops::Range<usize>,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let rows = self.rows();
        if rows.is_empty() {
            return;
        }

        let content_width = self.content_width.unwrap_or(DEFAULT_CONTENT_WIDTH);
        let available_space = size(
            AvailableSpace::Definite(content_width),
            AvailableSpace::MinContent,
        );
        let mut updated = false;

        for row_index in visible_range {
            let Some(Row::Message(index)) = rows.get(row_index).copied() else {
                continue;
            };

            let mut element = self.render_message_row(index, cx);
            let measured = element.layout_as_root(available_space, window, cx).height;

            let entry = &mut self.measured_heights[index];
            if entry.is_none_or(|height| pixels_changed(height, measured)) {
                *entry = Some(measured);
                updated = true;
            }
        }

        if updated {
            self.rebuild_item_sizes();
            cx.notify();
        }
    }

    fn render_row(&self, row: Row, cx: &mut Context<Self>) -> AnyElement {
        match row {
            Row::Message(index) => self.render_message_row(index, cx),
            Row::Typing => self.render_typing_row(cx),
        }
    }

    fn render_message_row(&self, index: usize, cx: &mut Context<Self>) -> AnyElement {
        let theme = cx.theme();
        let message = &self.script[index];
        let content_width = self.content_width.unwrap_or(DEFAULT_CONTENT_WIDTH);

        if let MessageKind::SkillChips(skills) = message.kind {
            let chip_bg = theme.primary.opacity(0.12);
            let chips = skills.iter().map(|skill| {
                div()
                    .px(CHIP_PADDING_X)
                    .h(CHIP_HEIGHT)
                    .flex()
                    .items_center()
                    .rounded_md()
                    .bg(chip_bg)
                    .text_xs()
                    .text_color(theme.primary)
                    .child(*skill)
            });

            return h_flex()
                .w_full()
                .justify_start()
                .child(
                    h_flex()
                        .max_w(content_width * CHIP_BUBBLE_MAX_WIDTH_RATIO)
                        .flex_wrap()
                        .gap(CHIP_GAP)
                        .px(BUBBLE_PADDING_X)
                        .py(BUBBLE_PADDING_Y)
                        .rounded_lg()
                        .bg(theme.primary.opacity(0.06))
                        .children(chips),
                )
                .into_any_element();
        }

        let bubble_max = content_width * BUBBLE_MAX_WIDTH_RATIO;
        let bubble = match message.sender {
            Sender::Visitor => div()
                .max_w(bubble_max)
                .px(BUBBLE_PADDING_X)
                .py(BUBBLE_PADDING_Y)
                .rounded_lg()
                .bg(theme.accent)
                .text_color(theme.accent_foreground)
                .child(Label::new(message.text).text_sm()),
            Sender::Carl => div()
                .max_w(bubble_max)
                .px(BUBBLE_PADDING_X)
                .py(BUBBLE_PADDING_Y)
                .rounded_lg()
                .bg(theme.background)
                .border_1()
                .border_color(theme.border)
                .text_color(theme.foreground)
                .child(Label::new(message.text).text_sm()),
        };

        h_flex()
            .w_full()
            .map(|row| match message.sender {
                Sender::Visitor => row.justify_end(),
                Sender::Carl => row.justify_start(),
            })
            .child(bubble)
            .into_any_element()
    }

    fn render_typing_row(&self, cx: &mut Context<Self>) -> AnyElement {
        let theme = cx.theme();
        let dot_color = theme.muted_foreground;

        let dots = (0..3usize).map(|ix| {
            div()
                .size(TYPING_DOT_SIZE)
                .rounded_full()
                .bg(dot_color.opacity(0.4))
                .with_animation(
                    ("typing-dot", ix),
                    Animation::new(std::time::Duration::from_millis(TYPING_DOT_PERIOD_MS))
                        .repeat(),
                    move |el, delta| {
                        // Offset each dot's phase so the wave travels.
                        let phase = (delta + ix as f32 * 0.2) % 1.0;
                        let pulse = (phase * std::f32::consts::TAU).sin() * 0.5 + 0.5;
                        el.bg(dot_color.opacity(0.3 + 0.7 * pulse))
                    },
                )
        });

        h_flex()
            .w_full()
            .justify_start()
            .child(
                h_flex()
                    .gap_1()
                    .px(BUBBLE_PADDING_X)
                    .py(BUBBLE_PADDING_Y)
                    .rounded_lg()
                    .bg(theme.background)
                    .border_1()
                    .border_color(theme.border)
                    .children(dots),
            )
            .into_any_element()
    }
}

impl Render for MessageList {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        self.update_content_width(cx);
        self.scroll_manager.apply_pending_scroll();

        v_flex().size_full().min_h_0().child(
            v_virtual_list(
                cx.entity().clone(),
                "chat-message-list",
                self.item_sizes.clone(),
                |this, visible_range, window, cx| {
                    this.update_content_width(cx);
                    this.measure_visible_rows(visible_range.clone(), window, cx);
                    let rows = this.rows();
                    visible_range
                        .filter_map(|row_index| {
                            rows.get(row_index)
                                .map(|row| this.render_row(*row, cx))
                        })
                        .collect::<Vec<_>>()
                },
            )
            .size_full()
            .px_4()
            .py_3()
            .gap_3()
            .track_scroll(self.scroll_manager.handle()),
        )
    }
}

fn estimate_row_height(message: &ScriptedMessage, content_width: Pixels) -> Pixels {
    match message.kind {
        MessageKind::SkillChips(skills) => {
            let bubble_width = content_width * CHIP_BUBBLE_MAX_WIDTH_RATIO;
            let available = (bubble_width - BUBBLE_PADDING_X * 2).max(px(1.));
            let rows = estimate_chip_rows(skills, available);
            CHIP_HEIGHT * rows + CHIP_GAP * rows.saturating_sub(1) + BUBBLE_PADDING_Y * 2
        }
        MessageKind::Plain => {
            let bubble_width = content_width * BUBBLE_MAX_WIDTH_RATIO;
            let text_width = (bubble_width - BUBBLE_PADDING_X * 2).max(px(1.));
            estimate_text_height(message.text, text_width) + BUBBLE_PADDING_Y * 2
        }
    }
}

fn estimate_chip_rows(skills: &[&str], available: Pixels) -> usize {
    if skills.is_empty() {
        return 1;
    }

    let available = f32::from(available).max(1.0);
    let mut rows = 1usize;
    let mut line_width = 0.0f32;

    for skill in skills {
        let chip_width = skill.chars().count() as f32 * ESTIMATED_CHAR_WIDTH
            + f32::from(CHIP_PADDING_X) * 2.0;
        let proposed = if line_width == 0.0 {
            chip_width
        } else {
            line_width + f32::from(CHIP_GAP) + chip_width
        };

        if proposed > available && line_width > 0.0 {
            rows += 1;
            line_width = chip_width;
        } else {
            line_width = proposed;
        }
    }

    rows
}

fn estimate_text_height(content: &str, width: Pixels) -> Pixels {
    if content.is_empty() {
        return ESTIMATED_TEXT_LINE_HEIGHT;
    }

    let chars_per_line = (f32::from(width) / ESTIMATED_CHAR_WIDTH).floor().max(1.0) as usize;

    let mut line_count = 0usize;
    for line in content.lines() {
        let char_count = line.chars().count().max(1);
        line_count += char_count.div_ceil(chars_per_line);
    }

    ESTIMATED_TEXT_LINE_HEIGHT * line_count.max(1)
}

fn pixels_changed(a: Pixels, b: Pixels) -> bool {
    (f32::from(a) - f32::from(b)).abs() > 0.5
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::script::INTRO_SCRIPT;

    #[test]
    fn every_script_row_estimates_a_positive_height() {
        for message in INTRO_SCRIPT {
            let height = estimate_row_height(message, px(460.));
            assert!(height > Pixels::ZERO, "zero-height row for {message:?}");
        }
    }

    #[test]
    fn narrower_lists_never_shrink_estimates() {
        for message in INTRO_SCRIPT {
            let wide = estimate_row_height(message, px(680.));
            let narrow = estimate_row_height(message, px(320.));
            assert!(
                narrow >= wide,
                "narrowing the list must not shrink {message:?}"
            );
        }
    }

    #[test]
    fn chip_rows_wrap_deterministically() {
        let skills = ["React", "Vue", "Angular", "TypeScript"];

        // Generous width: everything on one row.
        assert_eq!(estimate_chip_rows(&skills, px(2000.)), 1);

        // One chip per row once nothing fits beside anything else.
        assert_eq!(estimate_chip_rows(&skills, px(1.)), skills.len());

        assert_eq!(estimate_chip_rows(&[], px(200.)), 1);
    }

    #[test]
    fn long_lines_wrap_by_estimated_character_width() {
        let narrow = estimate_text_height(&"x".repeat(200), px(140.));
        let single = estimate_text_height("x", px(140.));
        assert!(narrow >= single * 8);
    }
}
