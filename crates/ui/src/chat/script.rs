use std::time::Duration;

/// Chat participant for one scripted line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sender {
    /// The portfolio persona driving the conversation.
    Carl,
    /// The scripted stand-in for the person reading.
    Visitor,
}

/// Bubble shape for one scripted line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Plain,
    /// A wrapped row of skill chips instead of prose.
    SkillChips(&'static [&'static str]),
}

/// One line of the fixed introduction script.
///
/// `delay` is the time since the *previous* message's reveal, not an
/// absolute offset; the timeline accumulates these in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptedMessage {
    pub sender: Sender,
    pub text: &'static str,
    pub delay: Duration,
    pub kind: MessageKind,
}

impl ScriptedMessage {
    const fn carl(text: &'static str, delay_ms: u64) -> Self {
        Self {
            sender: Sender::Carl,
            text,
            delay: Duration::from_millis(delay_ms),
            kind: MessageKind::Plain,
        }
    }

    const fn visitor(text: &'static str, delay_ms: u64) -> Self {
        Self {
            sender: Sender::Visitor,
            text,
            delay: Duration::from_millis(delay_ms),
            kind: MessageKind::Plain,
        }
    }

    const fn skills(text: &'static str, delay_ms: u64, skills: &'static [&'static str]) -> Self {
        Self {
            sender: Sender::Carl,
            text,
            delay: Duration::from_millis(delay_ms),
            kind: MessageKind::SkillChips(skills),
        }
    }
}

/// The introduction conversation, in reveal order.
pub static INTRO_SCRIPT: &[ScriptedMessage] = &[
    ScriptedMessage::carl("Hey, I'm Carl 👋", 1000),
    ScriptedMessage::carl(
        "I'm a software developer from the UK, actively seeking out new opportunities.",
        1500,
    ),
    ScriptedMessage::visitor("Hey Carl, what do you specialize in?", 2000),
    ScriptedMessage::carl("I specialize in:", 1000),
    ScriptedMessage::skills(
        "React, TypeScript, and modern CSS",
        1800,
        &[
            "React",
            "Vue",
            "Angular",
            "TypeScript",
            "Storybook",
            "SCSS",
            "Component Architecture",
            "Responsive Design",
            "Mobile first design",
        ],
    ),
    ScriptedMessage::carl(
        "I love building component systems that scale and delight users.",
        1700,
    ),
    ScriptedMessage::visitor(
        "That sounds great! What kind of projects have you worked on?",
        1500,
    ),
    ScriptedMessage::carl(
        "I've built hundreds of complex forms and care about user experience. Each project taught me something new about performance, accessibility, and user experience.",
        2000,
    ),
    ScriptedMessage::carl(
        "Most recently though, I've been working at Etch as a front-end developer, building and maintaing several component libraries and turning Figma prototypes into fully realised journeys.",
        2400,
    ),
];
