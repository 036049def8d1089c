//! Viewport transform and pointer interaction.

mod hit;
mod viewport;

pub use hit::{hit_test, HoverEvent, Interaction, SelectionEvent, HIT_TOLERANCE_PX};
pub use viewport::{Viewport, ViewportChanged, ViewportConfig};
