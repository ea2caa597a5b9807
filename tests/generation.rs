//! Integration tests for the generation pipeline

use pretty_assertions::assert_eq;

use grid_stencil::{
    generate, generate_from_config, realize, GenerateError, GridPos, Legend, LegendConfig,
    LegendEntry, ListingHost, Template,
};

fn legend(pairs: &[(&str, &str)]) -> Legend<()> {
    let mut legend = Legend::new();
    for (key, name) in pairs {
        legend
            .insert(*key, Some(Template::new(*name, ())))
            .expect("Should insert");
    }
    legend
}

#[test]
fn test_walled_room_listing() {
    let map = "W,W,W\nW,F,W\nW,W,W";
    let placements =
        generate(map, &legend(&[("W", "Wall"), ("F", "Floor")])).expect("Should generate");

    let mut host = ListingHost::new();
    realize(&placements, &mut host);
    insta::assert_snapshot!(host.finish(), @r###"
    Wall0 (0, 0, 0)
    Wall1 (1, 0, 0)
    Wall2 (2, 0, 0)
    Wall3 (0, 1, 0)
    Floor4 (1, 1, 0)
    Wall5 (2, 1, 0)
    Wall6 (0, 2, 0)
    Wall7 (1, 2, 0)
    Wall8 (2, 2, 0)
    "###);
}

#[test]
fn test_counter_is_shared_across_templates() {
    let placements =
        generate("A,B\nB,A", &legend(&[("A", "Altar"), ("B", "Barrel")])).expect("Should generate");

    let names: Vec<&str> = placements.iter().map(|p| p.instance_name.as_str()).collect();
    assert_eq!(names, vec!["Altar0", "Barrel1", "Barrel2", "Altar3"]);
}

#[test]
fn test_only_bound_symbols_generate() {
    let placements = generate("A,C\nC,A", &legend(&[("A", "TemplateX")])).expect("Should generate");

    let summary: Vec<(&str, GridPos)> = placements
        .iter()
        .map(|p| (p.instance_name.as_str(), p.position))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("TemplateX0", GridPos::new(0, 0)),
            ("TemplateX1", GridPos::new(1, 1)),
        ]
    );
}

#[test]
fn test_generation_is_deterministic() {
    let map = "W,F,W\n.,W,.";
    let table = legend(&[("W", "Wall"), ("F", "Floor")]);

    let first = generate(map, &table).expect("Should generate");
    let second = generate(map, &table).expect("Should generate");
    assert_eq!(first, second);
}

#[test]
fn test_crlf_and_lf_maps_are_equivalent() {
    let table = legend(&[("W", "Wall"), ("F", "Floor")]);

    let unix = generate("W,F\nF,W", &table).expect("Should generate");
    let dos = generate("W,F\r\nF,W", &table).expect("Should generate");
    assert_eq!(unix, dos);
}

#[test]
fn test_unicode_symbols_use_cell_coordinates() {
    let placements =
        generate("木,水\n水,木", &legend(&[("木", "Tree"), ("水", "Water")])).expect("Should generate");

    let summary: Vec<(&str, GridPos)> = placements
        .iter()
        .map(|p| (p.instance_name.as_str(), p.position))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("Tree0", GridPos::new(0, 0)),
            ("Water1", GridPos::new(1, 0)),
            ("Water2", GridPos::new(0, 1)),
            ("Tree3", GridPos::new(1, 1)),
        ]
    );
}

#[test]
fn test_keys_are_whitespace_sensitive() {
    let placements = generate("W, W\nW ,W", &legend(&[("W", "Wall")])).expect("Should generate");

    let positions: Vec<GridPos> = placements.iter().map(|p| p.position).collect();
    assert_eq!(positions, vec![GridPos::new(0, 0), GridPos::new(1, 1)]);
}

#[test]
fn test_ragged_map_keeps_row_lengths() {
    let placements = generate("W\nW,W,W", &legend(&[("W", "Wall")])).expect("Should generate");

    let positions: Vec<GridPos> = placements.iter().map(|p| p.position).collect();
    assert_eq!(
        positions,
        vec![
            GridPos::new(0, 0),
            GridPos::new(0, 1),
            GridPos::new(1, 1),
            GridPos::new(2, 1),
        ]
    );
}

#[test]
fn test_empty_input_is_reported_missing() {
    let result = generate("", &legend(&[("W", "Wall")]));
    assert!(matches!(result, Err(GenerateError::InputMissing)));
}

#[test]
fn test_config_resize_drops_trailing_entries() {
    let config = LegendConfig::new(
        1,
        vec![
            LegendEntry::new("W", Template::new("Wall", ())),
            LegendEntry::new("F", Template::new("Floor", ())),
        ],
    );

    // F fell off the list, so its cells are skipped rather than matched
    let placements = generate_from_config("W,F", &config).expect("Should generate");
    assert_eq!(placements.len(), 1);
    assert_eq!(placements[0].instance_name, "Wall0");
}

#[test]
fn test_unassigned_entry_fails_generation() {
    let config = LegendConfig::new(
        2,
        vec![
            LegendEntry::new("W", Template::new("Wall", ())),
            LegendEntry::unassigned("F"),
        ],
    );

    let result = generate_from_config("W,F", &config);
    match result {
        Err(GenerateError::Placement(e)) => {
            assert!(e.to_string().contains("\"F\""));
            assert!(e.to_string().contains("(1, 0, 0)"));
        }
        other => panic!("Expected placement error, got {:?}", other),
    }
}

#[test]
fn test_template_handles_travel_with_placements() {
    let mut table: Legend<u32> = Legend::new();
    table
        .insert("W", Some(Template::new("Wall", 7)))
        .expect("Should insert");

    let placements = generate("W,W", &table).expect("Should generate");
    assert_eq!(placements[0].template.handle, 7);
    assert_eq!(placements[1].template.handle, 7);
}
