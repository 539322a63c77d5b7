//! Overlay rendering.
//!
//! - `layout`: the three text regions and their markup
//! - `style`: the stylesheet applied on (re)initialization

mod layout;
mod style;

pub use layout::{readout, OverlayLayout, PLACEHOLDER};
pub use style::stylesheet;
