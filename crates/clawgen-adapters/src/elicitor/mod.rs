//! Elicitor adapters: how questions reach a person (or a script).

mod line;
mod scripted;

pub use line::LineElicitor;
pub use scripted::ScriptedElicitor;
