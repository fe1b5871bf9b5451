// Adapters layer: concrete implementations for external systems (files, console, mail).

pub mod console;
pub mod mail;
pub mod roster;
pub mod storage;
pub mod template;
