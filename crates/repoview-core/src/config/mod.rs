//! Configuration management.
//!
//! Repository identity, API settings, layout, colours ([`theme::Theme`]) and
//! key bindings ([`keymap::Keymap`]) are read from one TOML file at startup.

pub mod keymap;
pub mod settings;
pub mod theme;
