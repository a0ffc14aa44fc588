//! End-to-end render passes against the test map artwork.

use std::collections::HashMap;

use diplomap::board::{BoardConfig, CoordinateTable, Point, UnitEntry, STANDARD_TERRITORIES};
use diplomap::render::{style_fill, MapRenderer, RenderOptions, RenderWarning, TOKEN_MARKER};
use diplomap::svg::{MapDocument, NodeId, SvgDocument};

const MAP: &str = include_str!("fixtures/map.svg");

fn map() -> SvgDocument {
    SvgDocument::parse(MAP).expect("fixture map parses")
}

fn board(owns: &[(&str, &str)], colors: &[(&str, &str)], units: &[(&str, &str, &str)]) -> BoardConfig {
    BoardConfig {
        owns: owns.iter().map(|(t, f)| (t.to_string(), f.to_string())).collect(),
        colors: colors.iter().map(|(f, c)| (f.to_string(), c.to_string())).collect::<HashMap<_, _>>(),
        units: units.iter().map(|(l, t, f)| UnitEntry::new(l, t, f)).collect(),
    }
}

fn fill_of(doc: &SvgDocument, id: &str) -> Option<String> {
    let node = doc.element_by_id(id)?;
    style_fill(doc.attribute(node, "style")?).map(str::to_string)
}

fn tokens(doc: &SvgDocument) -> Vec<NodeId> {
    let layer = doc.element_by_id("prototypes").unwrap();
    doc.child_elements(layer)
        .into_iter()
        .filter(|&n| doc.attribute(n, TOKEN_MARKER).is_some())
        .collect()
}

#[test]
fn paris_scenario() {
    let mut doc = map();
    let config = board(&[("Paris", "France")], &[("France", "#3399ff")], &[("Paris", "A", "France")]);
    let report = diplomap::render(&mut doc, &config);
    assert!(report.is_clean(), "{:?}", report.warnings);

    assert_eq!(fill_of(&doc, "paris").as_deref(), Some("#3399ff"));

    let placed = tokens(&doc);
    assert_eq!(placed.len(), 1);
    let token = placed[0];
    assert_eq!(doc.attribute(token, "x"), Some("274"));
    assert_eq!(doc.attribute(token, "y"), Some("459"));
    assert_eq!(style_fill(doc.attribute(token, "style").unwrap()), Some("#3399ff"));
    assert_eq!(doc.attribute(token, "title"), Some("A Paris"));
    let title = doc.find_descendant(token, "title").unwrap();
    assert_eq!(doc.text_content(title), "A Paris");

    // Cloned from the army template, not the fleet one.
    assert!(doc.find_descendant(token, "circle").is_some());
}

#[test]
fn every_colored_territory_gets_its_faction_color() {
    let mut doc = map();
    let config = BoardConfig::initial();
    let report = diplomap::render(&mut doc, &config);
    assert!(report.is_clean(), "{:?}", report.warnings);
    assert_eq!(report.colored, config.owns.len());

    for (territory, faction) in &config.owns {
        assert_eq!(fill_of(&doc, territory).as_deref(), config.color_of(faction), "{}", territory);
    }
    // Neutral territories keep their original fill.
    assert_eq!(fill_of(&doc, "belgium").as_deref(), Some("#ffffff"));
}

#[test]
fn one_token_per_valid_unit_at_its_coordinates() {
    let mut doc = map();
    let units = [
        ("Vienna", "A", "Austria-Hungary"),
        ("Trieste", "F", "Austria-Hungary"),
        ("St. Petersburg (SC)", "F", "Russia"),
        ("Spain (NC)", "F", "France"),
        ("Atlantis", "A", "France"),
    ];
    let config = BoardConfig { units: units.iter().map(|(l, t, f)| UnitEntry::new(l, t, f)).collect(), ..BoardConfig::initial() };
    let report = diplomap::render(&mut doc, &config);
    assert_eq!(report.placed, 4);
    assert_eq!(
        report.warnings,
        vec![RenderWarning::MissingCoordinate { location: "Atlantis".to_string() }]
    );

    let coords = CoordinateTable::standard();
    let placed = tokens(&doc);
    assert_eq!(placed.len(), 4);
    for (token, (location, tag, _)) in placed.iter().zip(units.iter()) {
        let expected = coords.get(location).unwrap();
        assert_eq!(doc.attribute(*token, "x"), Some(expected.x.to_string().as_str()));
        assert_eq!(doc.attribute(*token, "y"), Some(expected.y.to_string().as_str()));
        assert_eq!(doc.attribute(*token, "title"), Some(format!("{} {}", tag, location).as_str()));
    }
}

#[test]
fn coloring_twice_is_a_pure_overwrite() {
    let renderer = MapRenderer::default();
    let config = BoardConfig::initial();

    let mut once = map();
    renderer.color_territories(&mut once, &config);
    let mut twice = map();
    renderer.color_territories(&mut twice, &config);
    renderer.color_territories(&mut twice, &config);

    assert_eq!(once.to_svg_string().unwrap(), twice.to_svg_string().unwrap());
}

#[test]
fn placing_twice_doubles_the_tokens() {
    let renderer = MapRenderer::default();
    let config = board(
        &[],
        &[("France", "#3399ff")],
        &[("Paris", "A", "France"), ("Brest", "F", "France")],
    );
    let mut doc = map();
    renderer.place_units(&mut doc, &config);
    assert_eq!(tokens(&doc).len(), 2);
    renderer.place_units(&mut doc, &config);
    assert_eq!(tokens(&doc).len(), 4);
}

#[test]
fn full_render_replaces_earlier_tokens() {
    let renderer = MapRenderer::default();
    let config = board(&[], &[("France", "#3399ff")], &[("Paris", "A", "France")]);
    let mut doc = map();
    renderer.render(&mut doc, &config);
    let report = renderer.render(&mut doc, &config);
    assert_eq!(report.cleared, 1);
    assert_eq!(tokens(&doc).len(), 1);
}

#[test]
fn render_accumulates_when_clearing_is_off() {
    let options = RenderOptions { clear_tokens: false, ..RenderOptions::default() };
    let renderer = MapRenderer::new(options, CoordinateTable::standard());
    let config = board(&[], &[("France", "#3399ff")], &[("Paris", "A", "France")]);
    let mut doc = map();
    renderer.render(&mut doc, &config);
    renderer.render(&mut doc, &config);
    assert_eq!(tokens(&doc).len(), 2);
}

#[test]
fn unknown_unit_type_uses_fleet_template() {
    let mut doc = map();
    let config = board(&[], &[("France", "#3399ff")], &[("Brest", "X", "France")]);
    let report = diplomap::render(&mut doc, &config);
    assert_eq!(report.placed, 1);
    assert_eq!(
        report.warnings,
        vec![RenderWarning::UnknownUnitType { tag: "X".to_string(), location: "Brest".to_string() }]
    );

    let token = tokens(&doc)[0];
    assert!(doc.find_descendant(token, "circle").is_none());
    let title = doc.find_descendant(token, "title").unwrap();
    assert_eq!(doc.text_content(title), "F Brest");
}

#[test]
fn missing_territory_does_not_affect_others() {
    let mut doc = map();
    let config = board(&[("Nowhere", "France"), ("Paris", "France")], &[("France", "#3399ff")], &[]);
    let report = diplomap::render(&mut doc, &config);
    assert_eq!(report.colored, 1);
    assert_eq!(
        report.warnings,
        vec![RenderWarning::MissingElement { territory: "Nowhere".to_string(), id: "nowhere".to_string() }]
    );
    assert_eq!(fill_of(&doc, "paris").as_deref(), Some("#3399ff"));
}

#[test]
fn missing_unit_color_still_shows_token() {
    let mut doc = map();
    let config = board(&[], &[], &[("Paris", "A", "France")]);
    let report = diplomap::render(&mut doc, &config);
    assert_eq!(report.placed, 1);
    assert_eq!(report.warnings, vec![RenderWarning::MissingColor { faction: "France".to_string() }]);

    let token = tokens(&doc)[0];
    let style = doc.attribute(token, "style").unwrap();
    assert!(!style.contains("display:none"), "token hidden: {}", style);
    assert!(style.contains("display:inline"));
    assert_eq!(style_fill(style), None);
}

#[test]
fn only_style_attributes_change_on_territories() {
    let mut doc = map();
    diplomap::render(&mut doc, &BoardConfig::initial());
    let out = doc.to_svg_string().unwrap();
    assert!(out.contains(r##"<path id="paris" d="M"##));
    let reparsed = SvgDocument::parse(&out).unwrap();
    for t in STANDARD_TERRITORIES.iter() {
        let node = reparsed.element_by_id(&t.element_id()).unwrap();
        assert!(reparsed.attribute(node, "d").is_some());
        assert_eq!(reparsed.attribute(node, "x"), None);
    }
}

#[test]
fn custom_coordinate_table_moves_tokens() {
    let mut coords = CoordinateTable::new();
    coords.insert("Paris", Point::new(10.0, 20.0));
    let renderer = MapRenderer::new(RenderOptions::default(), coords);
    let mut doc = map();
    let config = board(&[], &[("France", "#3399ff")], &[("Paris", "A", "France"), ("Brest", "F", "France")]);
    let report = renderer.render(&mut doc, &config);
    assert_eq!(report.placed, 1);
    let token = tokens(&doc)[0];
    assert_eq!(doc.attribute(token, "x"), Some("10"));
    assert_eq!(doc.attribute(token, "y"), Some("20"));
}

#[test]
fn repeated_renders_reuse_document_memory() {
    let renderer = MapRenderer::default();
    let config = board(
        &[("Paris", "France")],
        &[("France", "#3399ff")],
        &[("Paris", "A", "France"), ("Brest", "F", "France")],
    );
    let mut doc = map();
    renderer.render(&mut doc, &config);
    let settled = doc.arena_len();
    for _ in 0..1000 {
        renderer.render(&mut doc, &config);
    }
    assert_eq!(doc.arena_len(), settled);
    assert_eq!(tokens(&doc).len(), 2);
}
