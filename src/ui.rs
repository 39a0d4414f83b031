//! Terminal UI for navi.
//!
//! - [render]: frame layout and the entry list.
//! - [widgets]: prompt bar, preview pane, help footer and metadata line.
//! - [icons]: Nerd Font icon tables.

pub mod icons;
pub mod render;
pub mod widgets;

pub use render::{ScreenAreas, layout_areas, render};
