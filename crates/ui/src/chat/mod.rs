/// Event contracts for chat module wiring.
pub mod events;
pub mod message_list;
/// The fixed introduction script and its message model.
pub mod script;
pub mod scroll_manager;
/// Reveal schedule computation for the scripted conversation.
pub mod timeline;
pub mod view;

pub use events::PanelRequested;
pub use message_list::MessageList;
pub use script::{INTRO_SCRIPT, MessageKind, ScriptedMessage, Sender};
pub use scroll_manager::ScrollManager;
pub use timeline::{COMPLETION_PAUSE, ScheduledStep, TYPING_LEAD, TimelineStep, reveal_schedule};
pub use view::ChatView;
