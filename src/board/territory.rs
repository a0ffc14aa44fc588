//! Static metadata for the standard Diplomacy map.
//!
//! Every territory is listed alphabetically by display name together with its
//! home power, supply-center status and the pixel position where a unit token
//! is drawn. Split-coast provinces get extra token positions for each coast.

use super::coords::Point;
use super::power::Power;

/// The number of territories on the standard map.
pub const TERRITORY_COUNT: usize = 75;

/// The number of supply centers on the standard map.
pub const SUPPLY_CENTER_COUNT: usize = 34;

/// Static metadata for one territory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TerritoryInfo {
    pub name: &'static str,
    pub home_power: Option<Power>,
    pub is_supply_center: bool,
    pub position: Point,
}

impl TerritoryInfo {
    const fn new(
        name: &'static str,
        home_power: Option<Power>,
        is_supply_center: bool,
        position: Point,
    ) -> Self {
        TerritoryInfo { name, home_power, is_supply_center, position }
    }

    /// Returns the SVG element id of this territory's shape.
    pub fn element_id(&self) -> String {
        territory_id(self.name)
    }
}

/// Derives the SVG element id for a territory name.
///
/// Lowercases and drops spaces, dots and parentheses, so `"St. Petersburg"`
/// becomes `stpetersburg`. Already-derived ids come back unchanged.
pub fn territory_id(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, ' ' | '.' | '(' | ')'))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Looks up a territory by display name.
pub fn find_territory(name: &str) -> Option<&'static TerritoryInfo> {
    STANDARD_TERRITORIES.iter().find(|t| t.name == name)
}

/// Compile-time territory table, sorted by name.
pub static STANDARD_TERRITORIES: [TerritoryInfo; TERRITORY_COUNT] = [
    TerritoryInfo::new("Adriatic Sea", None, false, Point::new(442.0, 593.0)),
    TerritoryInfo::new("Aegean Sea", None, false, Point::new(594.0, 713.0)),
    TerritoryInfo::new("Albania", None, false, Point::new(525.0, 634.0)),
    TerritoryInfo::new("Ankara", Some(Power::Turkey), true, Point::new(748.0, 614.0)),
    TerritoryInfo::new("Apulia", Some(Power::Italy), false, Point::new(461.0, 620.0)),
    TerritoryInfo::new("Armenia", Some(Power::Turkey), false, Point::new(861.0, 621.0)),
    TerritoryInfo::new("Baltic Sea", None, false, Point::new(473.0, 337.0)),
    TerritoryInfo::new("Barents Sea", None, false, Point::new(634.0, 12.0)),
    TerritoryInfo::new("Belgium", None, true, Point::new(314.0, 409.0)),
    TerritoryInfo::new("Berlin", Some(Power::Germany), true, Point::new(438.0, 379.0)),
    TerritoryInfo::new("Black Sea", None, false, Point::new(712.0, 566.0)),
    TerritoryInfo::new("Bohemia", Some(Power::Austria), false, Point::new(450.0, 446.0)),
    TerritoryInfo::new("Brest", Some(Power::France), true, Point::new(231.0, 446.0)),
    TerritoryInfo::new("Budapest", Some(Power::Austria), true, Point::new(540.0, 500.0)),
    TerritoryInfo::new("Bulgaria", None, true, Point::new(599.0, 593.0)),
    TerritoryInfo::new("Burgundy", Some(Power::France), false, Point::new(314.0, 474.0)),
    TerritoryInfo::new("Clyde", Some(Power::England), false, Point::new(240.0, 259.0)),
    TerritoryInfo::new("Constantinople", Some(Power::Turkey), true, Point::new(656.0, 637.0)),
    TerritoryInfo::new("Denmark", None, true, Point::new(410.0, 316.0)),
    TerritoryInfo::new("Eastern Mediterranean", None, false, Point::new(677.0, 742.0)),
    TerritoryInfo::new("Edinburgh", Some(Power::England), true, Point::new(275.0, 262.0)),
    TerritoryInfo::new("English Channel", None, false, Point::new(219.0, 409.0)),
    TerritoryInfo::new("Finland", Some(Power::Russia), false, Point::new(575.0, 175.0)),
    TerritoryInfo::new("Galicia", Some(Power::Austria), false, Point::new(555.0, 450.0)),
    TerritoryInfo::new("Gascony", Some(Power::France), false, Point::new(241.0, 517.0)),
    TerritoryInfo::new("Greece", None, true, Point::new(557.0, 651.0)),
    TerritoryInfo::new("Gulf of Bothnia", None, false, Point::new(521.0, 267.0)),
    TerritoryInfo::new("Gulf of Lyon", None, false, Point::new(271.0, 608.0)),
    TerritoryInfo::new("Helgoland Bight", None, false, Point::new(370.0, 350.0)),
    TerritoryInfo::new("Holland", None, true, Point::new(335.0, 382.0)),
    TerritoryInfo::new("Ionian Sea", None, false, Point::new(475.0, 726.0)),
    TerritoryInfo::new("Irish Sea", None, false, Point::new(165.0, 373.0)),
    TerritoryInfo::new("Kiel", Some(Power::Germany), true, Point::new(387.0, 386.0)),
    TerritoryInfo::new("Liverpool", Some(Power::England), true, Point::new(252.0, 321.0)),
    TerritoryInfo::new("Livonia", Some(Power::Russia), false, Point::new(569.0, 316.0)),
    TerritoryInfo::new("London", Some(Power::England), true, Point::new(277.0, 375.0)),
    TerritoryInfo::new("Marseilles", Some(Power::France), true, Point::new(293.0, 547.0)),
    TerritoryInfo::new("Mid-Atlantic Ocean", None, false, Point::new(35.0, 462.0)),
    TerritoryInfo::new("Moscow", Some(Power::Russia), true, Point::new(770.0, 285.0)),
    TerritoryInfo::new("Munich", Some(Power::Germany), true, Point::new(389.0, 458.0)),
    TerritoryInfo::new("Naples", Some(Power::Italy), true, Point::new(457.0, 658.0)),
    TerritoryInfo::new("North Africa", None, false, Point::new(164.0, 716.0)),
    TerritoryInfo::new("North Atlantic Ocean", None, false, Point::new(75.0, 152.0)),
    TerritoryInfo::new("North Sea", None, false, Point::new(315.0, 289.0)),
    TerritoryInfo::new("Norway", None, true, Point::new(412.0, 193.0)),
    TerritoryInfo::new("Norwegian Sea", None, false, Point::new(338.0, 72.0)),
    TerritoryInfo::new("Paris", Some(Power::France), true, Point::new(274.0, 459.0)),
    TerritoryInfo::new("Picardy", Some(Power::France), false, Point::new(288.0, 426.0)),
    TerritoryInfo::new("Piedmont", Some(Power::Italy), false, Point::new(360.0, 535.0)),
    TerritoryInfo::new("Portugal", None, true, Point::new(85.0, 558.0)),
    TerritoryInfo::new("Prussia", Some(Power::Germany), false, Point::new(504.0, 359.0)),
    TerritoryInfo::new("Rome", Some(Power::Italy), true, Point::new(411.0, 612.0)),
    TerritoryInfo::new("Ruhr", Some(Power::Germany), false, Point::new(359.0, 424.0)),
    TerritoryInfo::new("Rumania", None, true, Point::new(622.0, 537.0)),
    TerritoryInfo::new("Serbia", None, true, Point::new(535.0, 580.0)),
    TerritoryInfo::new("Sevastopol", Some(Power::Russia), true, Point::new(770.0, 430.0)),
    TerritoryInfo::new("Silesia", Some(Power::Germany), false, Point::new(471.0, 413.0)),
    TerritoryInfo::new("Skagerrak", None, false, Point::new(414.0, 278.0)),
    TerritoryInfo::new("Smyrna", Some(Power::Turkey), true, Point::new(712.0, 680.0)),
    TerritoryInfo::new("Spain", None, true, Point::new(154.0, 607.0)),
    TerritoryInfo::new("St. Petersburg", Some(Power::Russia), true, Point::new(758.0, 124.0)),
    TerritoryInfo::new("Sweden", None, true, Point::new(480.0, 185.0)),
    TerritoryInfo::new("Syria", Some(Power::Turkey), false, Point::new(832.0, 693.0)),
    TerritoryInfo::new("Trieste", Some(Power::Austria), true, Point::new(470.0, 551.0)),
    TerritoryInfo::new("Tunisia", None, true, Point::new(351.0, 733.0)),
    TerritoryInfo::new("Tuscany", Some(Power::Italy), false, Point::new(395.0, 577.0)),
    TerritoryInfo::new("Tyrolia", Some(Power::Austria), false, Point::new(413.0, 500.0)),
    TerritoryInfo::new("Tyrrhenian Sea", None, false, Point::new(392.0, 650.0)),
    TerritoryInfo::new("Ukraine", Some(Power::Russia), false, Point::new(631.0, 423.0)),
    TerritoryInfo::new("Venice", Some(Power::Italy), true, Point::new(406.0, 548.0)),
    TerritoryInfo::new("Vienna", Some(Power::Austria), true, Point::new(486.0, 476.0)),
    TerritoryInfo::new("Wales", Some(Power::England), false, Point::new(222.0, 363.0)),
    TerritoryInfo::new("Warsaw", Some(Power::Russia), true, Point::new(552.0, 403.0)),
    TerritoryInfo::new("Western Mediterranean", None, false, Point::new(243.0, 667.0)),
    TerritoryInfo::new("Yorkshire", Some(Power::England), false, Point::new(278.0, 332.0)),
];

/// Token positions for the individual coasts of split-coast provinces.
pub static COAST_POSITIONS: [(&str, Point); 6] = [
    ("Bulgaria (SC)", Point::new(600.0, 633.0)),
    ("Bulgaria (EC)", Point::new(638.0, 589.0)),
    ("Spain (NC)", Point::new(148.0, 515.0)),
    ("Spain (SC)", Point::new(192.0, 634.0)),
    ("St. Petersburg (NC)", Point::new(680.0, 63.0)),
    ("St. Petersburg (SC)", Point::new(587.0, 249.0)),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::power::ALL_POWERS;

    #[test]
    fn table_is_sorted_and_unique() {
        for pair in STANDARD_TERRITORIES.windows(2) {
            assert!(pair[0].name < pair[1].name, "{} >= {}", pair[0].name, pair[1].name);
        }
    }

    #[test]
    fn supply_center_count() {
        let count = STANDARD_TERRITORIES.iter().filter(|t| t.is_supply_center).count();
        assert_eq!(count, SUPPLY_CENTER_COUNT);
    }

    #[test]
    fn every_power_has_home_centers() {
        for p in ALL_POWERS {
            let homes = STANDARD_TERRITORIES
                .iter()
                .filter(|t| t.home_power == Some(p) && t.is_supply_center)
                .count();
            let expected = if p == Power::Russia { 4 } else { 3 };
            assert_eq!(homes, expected, "{:?}", p);
        }
    }

    #[test]
    fn ids_strip_punctuation() {
        assert_eq!(territory_id("St. Petersburg"), "stpetersburg");
        assert_eq!(territory_id("Spain (NC)"), "spainnc");
        assert_eq!(territory_id("Mid-Atlantic Ocean"), "mid-atlanticocean");
        assert_eq!(territory_id("paris"), "paris");
    }

    #[test]
    fn ids_are_idempotent() {
        for t in STANDARD_TERRITORIES.iter() {
            let id = t.element_id();
            assert_eq!(territory_id(&id), id);
        }
    }

    #[test]
    fn coasts_belong_to_known_territories() {
        for (name, _) in COAST_POSITIONS.iter() {
            let base = name.split(" (").next().unwrap();
            assert!(find_territory(base).map_or(false, |t| t.is_supply_center), "{}", name);
        }
    }
}
