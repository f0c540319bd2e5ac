use std::time::Duration;

use crate::chat::script::{ScriptedMessage, Sender};

/// Lead time the typing indicator gets before a persona message lands.
pub const TYPING_LEAD: Duration = Duration::from_millis(500);
/// Pause between the last reveal and the quick-action row appearing.
pub const COMPLETION_PAUSE: Duration = Duration::from_millis(500);

/// One state mutation the reveal driver applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineStep {
    /// Turn the typing indicator on ahead of the next persona message.
    TypingStarted,
    /// Turn the indicator off and extend the revealed prefix to `index + 1`.
    Revealed(usize),
    /// The whole script is visible; show the quick actions.
    Completed,
}

/// A step paired with its elapsed time from sequence start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledStep {
    pub at: Duration,
    pub step: TimelineStep,
}

/// Expands a script into the full reveal schedule.
///
/// Delays accumulate: message `i` reveals at `delay_1 + .. + delay_i`. A
/// typing step precedes every persona message after the first by
/// [`TYPING_LEAD`], clamped so it never lands before the previous step;
/// when the gap is shorter than the lead, typing begins immediately after
/// the previous reveal. The emitted `at` values are therefore monotonically
/// non-decreasing, and the final step is [`TimelineStep::Completed`],
/// [`COMPLETION_PAUSE`] after the last reveal (at zero for an empty script).
pub fn reveal_schedule(script: &[ScriptedMessage]) -> Vec<ScheduledStep> {
    let mut steps = Vec::with_capacity(script.len() * 2 + 1);
    let mut cumulative = Duration::ZERO;
    let mut previous = Duration::ZERO;

    for (index, message) in script.iter().enumerate() {
        cumulative += message.delay;

        if message.sender == Sender::Carl && index > 0 {
            let typing_at = cumulative.saturating_sub(TYPING_LEAD).max(previous);
            steps.push(ScheduledStep {
                at: typing_at,
                step: TimelineStep::TypingStarted,
            });
            previous = typing_at;
        }

        let reveal_at = cumulative.max(previous);
        steps.push(ScheduledStep {
            at: reveal_at,
            step: TimelineStep::Revealed(index),
        });
        previous = reveal_at;
    }

    steps.push(ScheduledStep {
        at: if script.is_empty() {
            Duration::ZERO
        } else {
            previous + COMPLETION_PAUSE
        },
        step: TimelineStep::Completed,
    });

    steps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::script::{INTRO_SCRIPT, MessageKind};

    const fn carl(delay_ms: u64) -> ScriptedMessage {
        ScriptedMessage {
            sender: Sender::Carl,
            text: "line",
            delay: Duration::from_millis(delay_ms),
            kind: MessageKind::Plain,
        }
    }

    const fn visitor(delay_ms: u64) -> ScriptedMessage {
        ScriptedMessage {
            sender: Sender::Visitor,
            text: "line",
            delay: Duration::from_millis(delay_ms),
            kind: MessageKind::Plain,
        }
    }

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn reveals_land_on_cumulative_delays() {
        let script = [carl(1000), visitor(1500), carl(2000)];
        let schedule = reveal_schedule(&script);

        let reveals: Vec<(usize, Duration)> = schedule
            .iter()
            .filter_map(|entry| match entry.step {
                TimelineStep::Revealed(index) => Some((index, entry.at)),
                _ => None,
            })
            .collect();

        assert_eq!(reveals, [(0, ms(1000)), (1, ms(2500)), (2, ms(4500))]);
    }

    #[test]
    fn typing_precedes_later_persona_messages_only() {
        let script = [carl(1000), visitor(1500), carl(2000), carl(1000)];
        let schedule = reveal_schedule(&script);

        // No typing before the opener or before visitor lines.
        let typing_times: Vec<Duration> = schedule
            .iter()
            .filter(|entry| entry.step == TimelineStep::TypingStarted)
            .map(|entry| entry.at)
            .collect();
        assert_eq!(typing_times, [ms(4000), ms(5000)]);
    }

    #[test]
    fn short_gap_clamps_typing_to_previous_reveal() {
        // Second message trails the first by less than the typing lead.
        let script = [carl(1000), carl(300)];
        let schedule = reveal_schedule(&script);

        assert_eq!(
            schedule,
            [
                ScheduledStep {
                    at: ms(1000),
                    step: TimelineStep::Revealed(0)
                },
                ScheduledStep {
                    at: ms(1000),
                    step: TimelineStep::TypingStarted
                },
                ScheduledStep {
                    at: ms(1300),
                    step: TimelineStep::Revealed(1)
                },
                ScheduledStep {
                    at: ms(1800),
                    step: TimelineStep::Completed
                },
            ]
        );
    }

    #[test]
    fn back_to_back_persona_messages_type_between_reveals() {
        // The opener gets no typing step; the follow-up's lead is clamped
        // into the 500ms gap.
        let script = [carl(1000), carl(500)];
        let schedule = reveal_schedule(&script);

        assert_eq!(
            schedule,
            [
                ScheduledStep {
                    at: ms(1000),
                    step: TimelineStep::Revealed(0)
                },
                ScheduledStep {
                    at: ms(1000),
                    step: TimelineStep::TypingStarted
                },
                ScheduledStep {
                    at: ms(1500),
                    step: TimelineStep::Revealed(1)
                },
                ScheduledStep {
                    at: ms(2000),
                    step: TimelineStep::Completed
                },
            ]
        );
    }

    #[test]
    fn completion_follows_last_reveal_by_the_pause() {
        let script = [visitor(700)];
        let schedule = reveal_schedule(&script);

        assert_eq!(
            schedule.last(),
            Some(&ScheduledStep {
                at: ms(1200),
                step: TimelineStep::Completed
            })
        );
    }

    #[test]
    fn empty_script_completes_immediately() {
        assert_eq!(
            reveal_schedule(&[]),
            [ScheduledStep {
                at: Duration::ZERO,
                step: TimelineStep::Completed
            }]
        );
    }

    #[test]
    fn schedule_is_monotone_for_the_real_script() {
        let schedule = reveal_schedule(INTRO_SCRIPT);

        for window in schedule.windows(2) {
            assert!(window[0].at <= window[1].at, "schedule must never rewind");
        }

        let reveal_count = schedule
            .iter()
            .filter(|entry| matches!(entry.step, TimelineStep::Revealed(_)))
            .count();
        assert_eq!(reveal_count, INTRO_SCRIPT.len());
        assert_eq!(
            schedule.last().map(|entry| entry.step),
            Some(TimelineStep::Completed)
        );
    }
}
