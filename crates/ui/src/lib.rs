#![deny(unsafe_code)]

/// Application shell: header, panel switching, footer.
///
/// This crate is a desktop portfolio presented as a chat conversation,
/// built with GPUI and gpui-component. A scripted introduction reveals
/// itself over time; quick actions lead to static content panels.
pub mod app;
/// Scripted conversation: script data, reveal timeline, chat views.
pub mod chat;
/// Pure panel-switcher state machine.
pub mod navigation;
/// Content panels (projects, skills, experience, article reader).
pub mod panels;
/// Appearance settings persistence.
pub mod settings;
