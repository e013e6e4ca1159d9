#![cfg_attr(test, allow(unused_crate_dependencies))]
//! Terminal presentation for chime toasts.
//!
//! [`layout`] places the presenter's views in a corner of the screen,
//! [`ToastStack`] draws them into a ratatui buffer and [`hit_test`] maps mouse
//! positions back to toasts and their close buttons.

mod layout;
mod style;
mod text;
mod widget;

pub use layout::{Anchor, Hit, StackLayout, StackStyle, ToastSlot, hit_test, layout};
pub use style::KindStyle;
pub use widget::ToastStack;
