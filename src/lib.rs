//! Diplomap library.
//!
//! Paints Diplomacy board snapshots onto SVG map artwork: territories are
//! filled with their owner's color and unit tokens are cloned from template
//! elements and placed at fixed coordinates. Exposes the board types, the SVG
//! document model, the renderer, and a thread-safe live view.

pub mod board;
pub mod logging;
pub mod render;
pub mod svg;
pub mod view;

pub use board::{BoardConfig, CoordinateTable};
pub use render::{MapRenderer, RenderOptions, RenderReport, RenderWarning};
pub use svg::{MapDocument, SvgDocument, SvgError};
pub use view::{MapView, UpdateOutcome};

/// Paints `config` onto `doc` with the standard coordinates and default
/// options.
pub fn render<D: MapDocument>(doc: &mut D, config: &BoardConfig) -> RenderReport {
    MapRenderer::default().render(doc, config)
}
