// Service module exports

pub mod drag;
pub mod event;
pub mod layout;
pub mod settings;
