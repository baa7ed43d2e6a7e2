//! ui-kit
//!
//! Common Button, TextInput and Modal widgets for GPUI applications, plus the
//! overlay layer (scroll lock, document key listeners, modal lifecycle) that
//! gives the modal its open/close side effects.

pub mod app;
pub mod assets;
pub mod components;
pub mod constants;
pub mod error;
pub mod helpers;
pub mod i18n;
pub mod overlay;
pub mod states;
pub mod theme;
