//! Left-to-right ordering inside a tactical line.

use super::types::Line;
use crate::models::{Player, PositionTag};
use std::sync::Arc;

/// Rank given to absent or unrecognized position tags (sorts last).
pub const UNRANKED: u8 = u8::MAX;

/// Lateral rank of a position tag: left side lowest, right side highest.
pub fn position_priority(tag: Option<PositionTag>) -> u8 {
    use PositionTag::*;

    match tag {
        Some(GK) => 0,
        Some(LB | LWB | LM | LW) => 1,
        Some(LCB | LDM | LCM | LAM | LF) => 2,
        Some(CB | CDM | CM | CAM | CF | ST | DF | MF | FW) => 3,
        Some(RCB | RDM | RCM | RAM | RF) => 4,
        Some(RB | RWB | RM | RW) => 5,
        None => UNRANKED,
    }
}

fn sort_key(player: &Arc<Player>) -> (u8, &str) {
    (position_priority(player.position_tag()), player.display_name())
}

/// Orders one line by `(priority, display name)`.
///
/// Roster order never decides: equal ranks fall back to a byte-wise name
/// comparison, so shuffled inputs sort identically.
pub fn sort_line(line: &mut Line) {
    line.players.sort_by(|a, b| sort_key(a).cmp(&sort_key(b)));
}

pub fn sort_lines(lines: &mut [Line]) {
    for line in lines.iter_mut() {
        sort_line(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(players: &[(&str, &str)]) -> Line {
        Line::new(
            players.iter().map(|(name, tag)| Arc::new(Player::new(*name, *tag))).collect(),
        )
    }

    fn names(line: &Line) -> Vec<&str> {
        line.iter().map(|p| p.display_name()).collect()
    }

    #[test]
    fn test_back_four_sorted_left_to_right() {
        let mut back_four = line(&[("Rb", "RB"), ("Cb2", "RCB"), ("Lb", "LB"), ("Cb1", "LCB")]);
        sort_line(&mut back_four);
        assert_eq!(names(&back_four), vec!["Lb", "Cb1", "Cb2", "Rb"]);
    }

    #[test]
    fn test_equal_rank_uses_display_name() {
        let mut midfield = line(&[("Zidane", "CM"), ("Alonso", "CM"), ("Modric", "CM")]);
        sort_line(&mut midfield);
        assert_eq!(names(&midfield), vec!["Alonso", "Modric", "Zidane"]);
    }

    #[test]
    fn test_unknown_tags_sort_after_recognized_ones() {
        let mut attack = line(&[("Aaron", "libero"), ("Zed", "RW"), ("Bo", "")]);
        attack.players.push(Arc::new(Player {
            name: Some("Abe".to_string()),
            name_en: None,
            position: None,
        }));
        sort_line(&mut attack);
        assert_eq!(names(&attack), vec!["Zed", "Aaron", "Abe", "Bo"]);
    }

    #[test]
    fn test_international_name_used_when_local_missing() {
        let mut pair = Line::new(vec![
            Arc::new(Player { name: None, name_en: Some("Park".into()), position: None }),
            Arc::new(Player { name: Some("Hwang".into()), name_en: None, position: None }),
        ]);
        sort_line(&mut pair);
        assert_eq!(names(&pair), vec!["Hwang", "Park"]);
    }

    #[test]
    fn test_priority_table() {
        assert_eq!(position_priority(Some(PositionTag::GK)), 0);
        let rank = |tag| position_priority(Some(tag));
        assert!(rank(PositionTag::LB) < rank(PositionTag::CB));
        assert!(rank(PositionTag::CB) < rank(PositionTag::RB));
        assert!(position_priority(Some(PositionTag::RW)) < UNRANKED);
        assert_eq!(position_priority(None), UNRANKED);
    }
}
