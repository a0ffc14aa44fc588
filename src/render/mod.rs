//! Painting a board snapshot onto a map document.
//!
//! A pass has two layers: territory fills first, then unit tokens on top.
//! Tokens are deep clones of an army or fleet template element, positioned
//! from the coordinate table and appended to the units layer. Problems with
//! individual entries are logged and skipped; they never abort the pass.

pub mod batch;
pub mod options;
pub mod report;

pub use batch::{render_batch, BatchItem};
pub use options::{RenderOptions, DEFAULT_TOKEN_STYLE};
pub use report::{RenderReport, RenderWarning};

use crate::board::coords::CoordinateTable;
use crate::board::state::BoardConfig;
use crate::board::territory::territory_id;
use crate::board::unit::UnitType;
use crate::svg::MapDocument;

/// Attribute marking elements created by [`MapRenderer::place_units`].
pub const TOKEN_MARKER: &str = "data-unit";

/// Paints ownership and units. Holds no state between passes.
#[derive(Debug, Clone)]
pub struct MapRenderer {
    options: RenderOptions,
    coordinates: CoordinateTable,
}

impl Default for MapRenderer {
    fn default() -> Self {
        MapRenderer::new(RenderOptions::default(), CoordinateTable::standard())
    }
}

impl MapRenderer {
    pub fn new(options: RenderOptions, coordinates: CoordinateTable) -> Self {
        MapRenderer { options, coordinates }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn coordinates(&self) -> &CoordinateTable {
        &self.coordinates
    }

    /// Runs a full pass: clears old tokens (if configured), colors
    /// territories, then places units.
    pub fn render<D: MapDocument>(&self, doc: &mut D, config: &BoardConfig) -> RenderReport {
        let mut report = RenderReport::default();
        if self.options.clear_tokens {
            report.cleared = self.clear_units(doc);
        }
        report.merge(self.color_territories(doc, config));
        report.merge(self.place_units(doc, config));
        log::debug!(
            "render pass: {} territories colored, {} tokens placed, {} cleared, {} warnings",
            report.colored,
            report.placed,
            report.cleared,
            report.warnings.len()
        );
        report
    }

    /// Sets `style="fill: <color>"` on every owned territory's element.
    ///
    /// Only the `style` attribute is written, and each pass overwrites the
    /// last, so repeating it with the same snapshot changes nothing.
    pub fn color_territories<D: MapDocument>(&self, doc: &mut D, config: &BoardConfig) -> RenderReport {
        let mut report = RenderReport::default();
        for (territory, faction) in &config.owns {
            let id = territory_id(territory);
            let Some(element) = doc.element_by_id(&id) else {
                report.warn(RenderWarning::MissingElement { territory: territory.clone(), id });
                continue;
            };
            let Some(color) = config.color_of(faction) else {
                report.warn(RenderWarning::MissingColor { faction: faction.clone() });
                continue;
            };
            doc.set_attribute(element, "style", &format!("fill: {}", color));
            report.colored += 1;
        }
        report
    }

    /// Clones a template per unit and appends it to the units layer.
    ///
    /// Earlier tokens are left in place, so calling this twice with the same
    /// snapshot draws every unit twice. [`MapRenderer::render`] clears first.
    pub fn place_units<D: MapDocument>(&self, doc: &mut D, config: &BoardConfig) -> RenderReport {
        let mut report = RenderReport::default();
        if config.units.is_empty() {
            return report;
        }
        let Some(layer) = doc.element_by_id(&self.options.units_layer) else {
            report.warn(RenderWarning::MissingTemplate { id: self.options.units_layer.clone() });
            return report;
        };
        let army = doc.element_by_id(&self.options.army_template);
        let fleet = doc.element_by_id(&self.options.fleet_template);

        for (i, unit) in config.units.iter().enumerate() {
            let (unit_type, known) = UnitType::resolve_tag(&unit.unit_type);
            if !known {
                report.warn(RenderWarning::UnknownUnitType {
                    tag: unit.unit_type.clone(),
                    location: unit.location.clone(),
                });
            }
            let (template, template_id) = match unit_type {
                UnitType::Army => (army, &self.options.army_template),
                UnitType::Fleet => (fleet, &self.options.fleet_template),
            };
            let Some(template) = template else {
                report.warn(RenderWarning::MissingTemplate { id: template_id.clone() });
                continue;
            };
            let Some(position) = self.coordinates.get(&unit.location) else {
                report.warn(RenderWarning::MissingCoordinate { location: unit.location.clone() });
                continue;
            };

            let label = format!("{} {}", unit_type.tag(), unit.location);
            let token = doc.deep_clone(template);
            doc.set_attribute(token, "id", &format!("{}{}", unit_type.tag(), i));
            let style = match config.color_of(&unit.faction) {
                Some(color) => self.options.token_style_for(color),
                None => {
                    report.warn(RenderWarning::MissingColor { faction: unit.faction.clone() });
                    self.options.token_style.clone()
                }
            };
            // Always overwritten: templates are usually hidden.
            doc.set_attribute(token, "style", &style);
            doc.set_attribute(token, "x", &position.x.to_string());
            doc.set_attribute(token, "y", &position.y.to_string());
            doc.set_attribute(token, "title", &label);
            doc.set_attribute(token, TOKEN_MARKER, &unit.faction);

            let title = match doc.find_descendant(token, "title") {
                Some(title) => title,
                None => {
                    let title = doc.create_element("title");
                    doc.append_child(token, title);
                    title
                }
            };
            doc.set_text(title, &label);

            doc.append_child(layer, token);
            report.placed += 1;
        }
        report
    }

    /// Removes tokens placed by earlier passes. Templates and any other
    /// children of the units layer stay. Returns the number removed.
    pub fn clear_units<D: MapDocument>(&self, doc: &mut D) -> usize {
        let Some(layer) = doc.element_by_id(&self.options.units_layer) else {
            return 0;
        };
        let mut removed = 0;
        for child in doc.child_elements(layer) {
            if doc.attribute(child, TOKEN_MARKER).is_some() && doc.remove_child(layer, child) {
                removed += 1;
            }
        }
        removed
    }
}

/// Extracts the fill color from an inline `style` attribute.
///
/// Accepts both `fill: #fff` and `fill:#fff` declarations.
pub fn style_fill(style: &str) -> Option<&str> {
    style.split(';').find_map(|decl| {
        let (key, value) = decl.split_once(':')?;
        (key.trim() == "fill").then(|| value.trim())
    })
}
