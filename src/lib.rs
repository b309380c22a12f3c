//! complete-statement - Heuristic statement completion for text editors
//!
//! This library provides functionality to:
//! - Classify a source line as a block opener, closing brace, or plain statement
//! - Synthesize the text insertions and cursor moves that complete the line
//! - Apply the resulting edit plan to any host editor through a narrow trait

pub mod action;
pub mod buffer;
pub mod classify;
pub mod cli;
pub mod complete;
pub mod config;
pub mod extension;
pub mod host;
pub mod indent;
