use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Region {
    #[serde(alias = "Europe")]
    Europe,
    #[serde(alias = "Asia")]
    Asia,
    #[serde(alias = "North America")]
    NorthAmerica,
    #[serde(alias = "South America")]
    SouthAmerica,
    #[serde(alias = "Africa")]
    Africa,
    #[serde(alias = "Oceania")]
    Oceania,
    #[serde(alias = "Middle East")]
    MiddleEast,
}

/// Region for a country name as the planner's city data spells it.
/// Countries missing from the table belong to no region.
pub fn region_of(country: &str) -> Option<Region> {
    let region = match country {
        "France" | "Spain" | "Italy" | "UK" | "United Kingdom" | "Germany" | "Portugal"
        | "Netherlands" | "Belgium" | "Switzerland" | "Austria" | "Greece" | "Ireland"
        | "Sweden" | "Norway" | "Denmark" | "Finland" | "Iceland" | "Poland" | "Czechia"
        | "Czech Republic" | "Hungary" | "Croatia" => Region::Europe,
        "Japan" | "Thailand" | "Indonesia" | "China" | "South Korea" | "Vietnam"
        | "Singapore" | "Malaysia" | "India" | "Philippines" | "Nepal" | "Sri Lanka" => {
            Region::Asia
        }
        "USA" | "United States" | "Canada" | "Mexico" | "Cuba" | "Costa Rica" => {
            Region::NorthAmerica
        }
        "Brazil" | "Argentina" | "Peru" | "Chile" | "Colombia" | "Ecuador" => {
            Region::SouthAmerica
        }
        "Morocco" | "Egypt" | "Kenya" | "South Africa" | "Tanzania" | "Ghana" => Region::Africa,
        "Australia" | "New Zealand" | "Fiji" => Region::Oceania,
        "UAE" | "United Arab Emirates" | "Turkey" | "Israel" | "Jordan" | "Qatar" | "Oman" => {
            Region::MiddleEast
        }
        _ => return None,
    };
    Some(region)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("France", Some(Region::Europe))]
    #[case("UK", Some(Region::Europe))]
    #[case("Bangkok", None)]
    #[case("Thailand", Some(Region::Asia))]
    #[case("UAE", Some(Region::MiddleEast))]
    #[case("Australia", Some(Region::Oceania))]
    #[case("france", None)]
    fn maps_countries_to_regions(#[case] country: &str, #[case] expected: Option<Region>) {
        assert_eq!(region_of(country), expected);
    }
}
