//! End-to-end tests for the suggestion engine over a realistic catalog

use airsuggest::{
    AirportRecord, Catalog, CatalogLoader, DisplayCategory, LocationRecord, SearchField, Section,
    normalize, suggest,
};

fn location(city: &str, state: Option<&str>, country: &str, timezone: &str) -> LocationRecord {
    LocationRecord {
        city: city.to_string(),
        state: state.map(String::from),
        country: country.to_string(),
        timezone: timezone.to_string(),
    }
}

fn airport(iata: &str, name: &str, city: &str, country: &str) -> AirportRecord {
    AirportRecord {
        iata: iata.to_string(),
        name: name.to_string(),
        city: city.to_string(),
        country: country.to_string(),
    }
}

/// A catalog with eleven airports in cities starting with "ch", so a "ch"
/// query has more candidates than the result budget admits
fn crowded_catalog() -> Catalog {
    Catalog::build(
        vec![
            location("Chicago", Some("Illinois"), "United States", "America/Chicago"),
            location("Charlotte", Some("North Carolina"), "United States", "America/New_York"),
            location("Chattanooga", Some("Tennessee"), "United States", "America/New_York"),
            location("Cheyenne", Some("Wyoming"), "United States", "America/Denver"),
            location("Charleston", Some("South Carolina"), "United States", "America/New_York"),
            location("Chihuahua", None, "Mexico", "America/Chihuahua"),
            location("Christchurch", Some("Canterbury"), "New Zealand", "Pacific/Auckland"),
            location("Chengdu", Some("Sichuan"), "China", "Asia/Shanghai"),
            location("Chiang Mai", None, "Thailand", "Asia/Bangkok"),
            location("Chisinau", None, "Moldova", "Europe/Chisinau"),
        ],
        vec![
            airport("ORD", "O'Hare International Airport", "Chicago", "United States"),
            airport("MDW", "Midway International Airport", "Chicago", "United States"),
            airport("CLT", "Charlotte Douglas International Airport", "Charlotte", "United States"),
            airport("CHA", "Chattanooga Metropolitan Airport", "Chattanooga", "United States"),
            airport("CYS", "Cheyenne Regional Airport", "Cheyenne", "United States"),
            airport("CHS", "Charleston International Airport", "Charleston", "United States"),
            airport("CUU", "General Roberto Fierro Villalobos International Airport", "Chihuahua", "Mexico"),
            airport("CHC", "Christchurch International Airport", "Christchurch", "New Zealand"),
            airport("CTU", "Chengdu Shuangliu International Airport", "Chengdu", "China"),
            airport("CNX", "Chiang Mai International Airport", "Chiang Mai", "Thailand"),
            airport("KIV", "Chisinau International Airport", "Chisinau", "Moldova"),
        ],
    )
    .unwrap()
}

/// A small catalog tuned for ordering assertions
fn small_catalog() -> Catalog {
    Catalog::build(
        vec![
            location("Chicago", Some("Illinois"), "United States", "America/Chicago"),
            location("Orlando", Some("Florida"), "United States", "America/New_York"),
            location("Memphis", Some("Tennessee"), "United States", "America/Chicago"),
            location("Toronto", None, "Canada", "America/Toronto"),
        ],
        vec![
            airport("ORD", "O'Hare International Airport", "Chicago", "United States"),
            airport("MDW", "Midway International Airport", "Chicago", "United States"),
            airport("OBK", "Chicago Executive Airport", "Chicago", "United States"),
            airport("MCO", "Orlando International Airport", "Orlando", "United States"),
            airport("MEM", "Memphis International Airport", "Memphis", "United States"),
            airport("YYZ", "Toronto Pearson International Airport", "Toronto", "Canada"),
        ],
    )
    .unwrap()
}

fn all_codes(sections: &[Section]) -> Vec<String> {
    sections
        .iter()
        .flat_map(|s| s.suggestions.iter().map(|r| r.code.clone()))
        .collect()
}

#[test]
fn total_results_never_exceed_the_budget() {
    let catalog = crowded_catalog();

    // eleven airports qualify for "ch" by city alone
    let sections = suggest(&catalog, "ch");
    assert_eq!(all_codes(&sections).len(), 10);

    // a universally broad single letter stays bounded too
    let sections = suggest(&catalog, "c");
    assert!(all_codes(&sections).len() <= 10);
}

#[test]
fn no_airport_appears_twice_in_a_response() {
    let catalog = crowded_catalog();

    for query in ["c", "ch", "chi", "char", "international"] {
        let mut codes = all_codes(&suggest(&catalog, query));
        let total = codes.len();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), total, "duplicate airport for query {query:?}");
    }
}

#[test]
fn short_queries_rank_city_matches_ahead_of_code_matches() {
    let catalog = small_catalog();

    // "or" is below code length: the city pass runs before the iata pass,
    // so Orlando's airport leads and O'Hare is claimed as a code prefix
    let sections = suggest(&catalog, "or");
    assert_eq!(sections[0].location, "Orlando, Florida");
    assert_eq!(sections[0].suggestions[0].matched_field, SearchField::City);

    let ord = sections
        .iter()
        .flat_map(|s| &s.suggestions)
        .find(|s| s.code == "ORD")
        .expect("ORD should match as a code prefix");
    assert_eq!(ord.matched_field, SearchField::Iata);
}

#[test]
fn code_length_queries_rank_code_matches_first() {
    let catalog = small_catalog();

    let sections = suggest(&catalog, "ord");
    let first = &sections[0].suggestions[0];
    assert_eq!(first.code, "ORD");
    assert_eq!(first.matched_field, SearchField::Iata);
}

#[test]
fn long_queries_never_match_codes() {
    let catalog = small_catalog();

    let sections = suggest(&catalog, "chicago executive");
    assert!(!sections.is_empty());
    for section in &sections {
        for suggestion in &section.suggestions {
            assert_ne!(suggestion.matched_field, SearchField::Iata);
        }
    }
}

#[test]
fn code_length_query_that_is_no_known_code_yields_no_code_match() {
    let catalog = small_catalog();

    // "tor" is code-shaped but not a code; Toronto is found by city, and
    // the iata pass contributes nothing
    let sections = suggest(&catalog, "tor");
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].suggestions[0].code, "YYZ");
    assert_eq!(sections[0].suggestions[0].matched_field, SearchField::City);
}

#[test]
fn city_with_two_airports_relabels_both_to_b() {
    let catalog = small_catalog();

    let sections = suggest(&catalog, "chicago");
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].location, "Chicago, Illinois");
    assert_eq!(sections[0].suggestions.len(), 3);
    assert!(
        sections[0]
            .suggestions
            .iter()
            .all(|s| s.display == DisplayCategory::B)
    );
}

#[test]
fn unique_name_match_keeps_category_c() {
    let catalog = small_catalog();

    let sections = suggest(&catalog, "ohare");
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].suggestions.len(), 1);
    let only = &sections[0].suggestions[0];
    assert_eq!(only.code, "ORD");
    assert_eq!(only.matched_field, SearchField::Name);
    assert_eq!(only.display, DisplayCategory::C);
}

#[test]
fn us_locations_omit_the_country_in_display_strings() {
    let catalog = small_catalog();

    let sections = suggest(&catalog, "chicago");
    assert_eq!(sections[0].location, "Chicago, Illinois");

    let sections = suggest(&catalog, "toronto");
    assert_eq!(sections[0].location, "Toronto, Canada");
    assert_eq!(sections[0].suggestions[0].location, "Toronto, Canada");
}

#[test]
fn groups_are_ordered_by_their_best_match() {
    let catalog = small_catalog();

    // "m": Memphis matches by city (priority 1), Chicago through Midway's
    // name (priority 2), Orlando only through MCO's code prefix (priority 5);
    // ascending best-match order wins over load order
    let sections = suggest(&catalog, "m");
    let locations: Vec<&str> = sections.iter().map(|s| s.location.as_str()).collect();
    assert_eq!(
        locations,
        vec!["Memphis, Tennessee", "Chicago, Illinois", "Orlando, Florida"]
    );
}

#[test]
fn members_are_ordered_by_field_priority_then_name() {
    let catalog = small_catalog();

    // "o": Orlando by city (1); within Chicago, O'Hare by name (2) ranks
    // ahead of OBK by code prefix (5)
    let sections = suggest(&catalog, "o");
    assert_eq!(sections[0].location, "Orlando, Florida");
    let chicago = sections
        .iter()
        .find(|s| s.location == "Chicago, Illinois")
        .expect("Chicago group");
    let codes: Vec<&str> = chicago.suggestions.iter().map(|s| s.code.as_str()).collect();
    assert_eq!(codes, vec!["ORD", "OBK"]);

    // equal priorities fall back to alphabetical order of normalized names
    let sections = suggest(&catalog, "chicago");
    let codes = all_codes(&sections);
    assert_eq!(codes, vec!["OBK", "MDW", "ORD"]);
}

#[test]
fn queries_are_normalized_before_matching() {
    let catalog = small_catalog();

    assert_eq!(suggest(&catalog, "  CHICAGO  "), suggest(&catalog, "chicago"));
    assert_eq!(suggest(&catalog, "O'Hare"), suggest(&catalog, "ohare"));
    assert_eq!(normalize(&normalize("  O'Hare  ")), normalize("  O'Hare  "));
}

#[test]
fn empty_queries_yield_empty_responses() {
    let catalog = small_catalog();

    assert!(suggest(&catalog, "").is_empty());
    assert!(suggest(&catalog, "   \t ").is_empty());
}

#[test]
fn catalog_loads_from_json_rows() {
    let json = r#"{
        "locations": [
            { "city": "Chicago", "state": "Illinois", "country": "United States", "timezone": "America/Chicago" }
        ],
        "airports": [
            { "iata": "ORD", "name": "O'Hare International Airport", "city": "Chicago", "country": "United States" }
        ]
    }"#;

    let catalog = CatalogLoader::load_from_json(json).unwrap();
    let sections = suggest(&catalog, "ord");
    assert_eq!(sections[0].suggestions[0].name, "O'Hare International Airport");
}
