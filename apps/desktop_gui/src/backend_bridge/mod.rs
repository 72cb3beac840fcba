//! Backend bridge: command types and the worker thread that serves them.

pub mod commands;
pub mod runtime;
