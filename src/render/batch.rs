//! Rendering a whole game history at once.
//!
//! Each turn is painted onto its own copy of the base map, so turns run in
//! parallel on the rayon pool and results come back in input order.

use rayon::prelude::*;

use super::report::RenderReport;
use super::MapRenderer;
use crate::board::state::TurnSnapshot;
use crate::svg::SvgDocument;

/// One painted turn.
#[derive(Debug, Clone)]
pub struct BatchItem {
    pub name: String,
    pub document: SvgDocument,
    pub report: RenderReport,
}

/// Paints every snapshot onto a fresh copy of `base`.
pub fn render_batch(renderer: &MapRenderer, base: &SvgDocument, turns: &[TurnSnapshot]) -> Vec<BatchItem> {
    turns
        .par_iter()
        .map(|turn| {
            let mut document = base.clone();
            let report = renderer.render(&mut document, &turn.board);
            BatchItem { name: turn.name.clone(), document, report }
        })
        .collect()
}
