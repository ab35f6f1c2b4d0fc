//! Session record assembly for XML emission

mod assembler;
mod escape;

pub use assembler::{assemble, ActivityRecord, DatasetRecord, Param, SessionRecord};
pub use escape::escape_text;
