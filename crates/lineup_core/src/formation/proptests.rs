//! Property-based tests for the layout pipeline.

use super::*;
use crate::config::PitchSpace;
use crate::models::Player;
use proptest::prelude::*;
use std::sync::Arc;

fn outfield_tag_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(Some("LB".to_string())),
        Just(Some("CB".to_string())),
        Just(Some("RCB".to_string())),
        Just(Some("CDM".to_string())),
        Just(Some("LM".to_string())),
        Just(Some("CAM".to_string())),
        Just(Some("RW".to_string())),
        Just(Some("ST".to_string())),
        Just(Some("libero".to_string())),
        Just(None),
    ]
}

fn player_strategy() -> impl Strategy<Value = Player> {
    ("[A-Za-z]{1,8}", outfield_tag_strategy())
        .prop_map(|(name, position)| Player { name: Some(name), name_en: None, position })
}

fn keeper() -> Arc<Player> {
    Arc::new(Player::new("Keeper", "GK"))
}

fn line_sizes_strategy() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(1u32..=11, 1..=6)
}

fn descriptor_of(sizes: &[u32]) -> String {
    sizes.iter().map(u32::to_string).collect::<Vec<_>>().join("-")
}

/// Roster with one keeper at a random index and at least `sum(sizes)`
/// outfield players.
fn valid_case_strategy() -> impl Strategy<Value = (Vec<u32>, Vec<Arc<Player>>)> {
    line_sizes_strategy().prop_flat_map(|sizes| {
        let required = sizes.iter().sum::<u32>() as usize;
        (
            Just(sizes),
            prop::collection::vec(player_strategy(), required..=required + 4),
            any::<prop::sample::Index>(),
        )
            .prop_map(|(sizes, outfield, keeper_at)| {
                let mut roster: Vec<Arc<Player>> = outfield.into_iter().map(Arc::new).collect();
                let at = keeper_at.index(roster.len() + 1);
                roster.insert(at, keeper());
                (sizes, roster)
            })
    })
}

proptest! {
    /// Property: parsing never panics, is deterministic, and keeps only positive sizes
    #[test]
    fn prop_parser_deterministic(input in ".{0,24}") {
        let first = parse_line_sizes(&input);
        let second = parse_line_sizes(&input);
        prop_assert_eq!(&first, &second);
        prop_assert!(first.iter().all(|&size| size > 0));
    }

    /// Property: well-formed descriptors parse back to their sizes
    #[test]
    fn prop_parser_reads_written_sizes(sizes in line_sizes_strategy()) {
        prop_assert_eq!(parse_line_sizes(&descriptor_of(&sizes)), sizes);
    }

    /// Property: distribution places required + 1 players, outfield in roster order
    #[test]
    fn prop_distribution_conserves_players((sizes, roster) in valid_case_strategy()) {
        let descriptor = FormationDescriptor::parse(&descriptor_of(&sizes)).unwrap();
        let result = distribute(&roster, &descriptor).unwrap();
        let required = descriptor.outfield_total();

        let total: usize = result.lines.iter().map(Line::len).sum();
        prop_assert_eq!(total, required + 1);

        let outfield_in_roster: Vec<&Arc<Player>> =
            roster.iter().filter(|player| !player.is_goalkeeper()).take(required).collect();
        let outfield_in_lines: Vec<&Arc<Player>> =
            result.lines[..result.lines.len() - 1].iter().flat_map(Line::iter).collect();
        prop_assert_eq!(outfield_in_lines.len(), outfield_in_roster.len());
        for (placed, expected) in outfield_in_lines.iter().zip(&outfield_in_roster) {
            prop_assert!(Arc::ptr_eq(*placed, *expected));
        }
    }

    /// Property: the last line holds exactly the roster's goalkeeper
    #[test]
    fn prop_goalkeeper_line_is_last((sizes, roster) in valid_case_strategy()) {
        let data = analyze(&roster, &descriptor_of(&sizes));
        prop_assert!(!data.is_fallback());
        let last = data.lines.last().unwrap();
        prop_assert_eq!(last.len(), 1);
        prop_assert!(last.players[0].is_goalkeeper());
    }

    /// Property: every computed point stays inside the margins
    #[test]
    fn prop_coordinates_in_bounds(sizes in prop::collection::vec(1usize..=12, 1..=7)) {
        let pitch = PitchSpace::default();
        let lines: Vec<Line> = sizes
            .iter()
            .map(|&n| Line::new((0..n).map(|_| keeper()).collect()))
            .collect();

        for placement in calculate_placements(&pitch, &lines) {
            prop_assert!(placement.point.x >= 4.0 && placement.point.x <= 96.0);
            prop_assert!(placement.point.y >= 4.0 && placement.point.y <= 136.0);
        }
    }

    /// Property: sorting a shuffled line gives the same name/tag order
    #[test]
    fn prop_sorter_ignores_insertion_order(
        (players, shuffled) in prop::collection::vec(player_strategy(), 1..=11)
            .prop_flat_map(|players| {
                let shuffled = Just(players.clone()).prop_shuffle();
                (Just(players), shuffled)
            })
    ) {
        let summary = |line: &Line| -> Vec<(u8, String)> {
            line.iter()
                .map(|p| (position_priority(p.position_tag()), p.display_name().to_string()))
                .collect()
        };

        let mut original = Line::new(players.into_iter().map(Arc::new).collect());
        let mut reordered = Line::new(shuffled.into_iter().map(Arc::new).collect());
        sort_line(&mut original);
        sort_line(&mut reordered);

        prop_assert_eq!(summary(&original), summary(&reordered));
    }

    /// Property: rosters without a goalkeeper always get a valid fallback
    #[test]
    fn prop_fallback_without_goalkeeper(
        outfield in prop::collection::vec(player_strategy(), 1..=16),
        formation in "[0-9x-]{0,9}",
    ) {
        let roster: Vec<Arc<Player>> = outfield.into_iter().map(Arc::new).collect();
        let data = analyze(&roster, &formation);
        let pitch = PitchSpace::default();

        prop_assert_eq!(data.formation_label.as_str(), FALLBACK_LABEL);
        prop_assert_eq!(data.lines.last().map(Line::len), Some(1));
        prop_assert_eq!(data.placements.len(), roster.len().min(11));
        prop_assert!(data.placements.iter().all(|p| p.point.within_margins(&pitch)));
    }

    /// Property: analyzing twice pairs the same players with the same points
    #[test]
    fn prop_analysis_idempotent((sizes, roster) in valid_case_strategy()) {
        let formation = descriptor_of(&sizes);
        let first = analyze(&roster, &formation);
        let second = analyze(&roster, &formation);

        prop_assert_eq!(first.positions(), second.positions());
        for (a, b) in first.placements.iter().zip(&second.placements) {
            prop_assert!(Arc::ptr_eq(&a.player, &b.player));
        }
    }
}
