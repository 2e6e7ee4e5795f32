//! Backend bridge: command queue types and the worker thread that performs attempts.

pub mod commands;
pub mod runtime;
