//! Control loop, composers and alerting for the Herald polling bot.
//!
//! - [`ControlLoop`] - login, poll, compose, publish, on a fixed cadence
//! - [`LexicalComposer`] / [`HistoryComposer`] - the two comment variants
//! - [`EmailAlerter`] / [`NoopAlerter`] - what happens when the loop stops
//! - [`HeraldConfig`] - layered configuration

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod alert;
mod compose;
mod config;
mod control;
mod cursor;

pub use alert::{ALERT_SUBJECT, EmailAlerter, NoopAlerter, alert_body};
pub use compose::{
    HistoryComposer, LexicalComposer, candidate_words, escape_table_cell, render_history_comment,
    render_lexical_comment,
};
pub use config::{
    AlertConfig, BotSection, BotVariant, HeraldConfig, HistoryConfig, ScheduleConfig,
};
pub use control::{ControlLoop, CycleReport, LoopSettings, LoopState};
pub use cursor::Cursor;
