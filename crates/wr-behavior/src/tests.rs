//! Unit tests for wr-behavior.

use wr_agent::{CellContent, CellView, KnowledgeBase, Waste};
use wr_core::{AgentId, AgentRng, Color, Pos, WasteId, ZoneLayout};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Knowledge for a robot of `color` at `pos` on a 21-wide grid, seeing the
/// clipped 3x3 block around it with only tiles in it.
fn kb_at(color: Color, pos: Pos) -> KnowledgeBase {
    let zone = ZoneLayout::new(21).unwrap().zone(color);
    let mut kb = KnowledgeBase::new(zone, pos);
    for dx in -1..=1 {
        for dy in -1..=1 {
            let p = Pos::new(pos.x + dx, pos.y + dy);
            if p.x < 0 || p.y < 0 || p.y >= 5 || !zone.reaches_x(p.x) {
                continue;
            }
            kb.neighbours.push(CellView { pos: p, contents: vec![CellContent::Tile { color }] });
        }
    }
    kb
}

fn drop_waste(kb: &mut KnowledgeBase, at: Pos, color: Color) {
    let cell = kb.neighbours.iter_mut().find(|c| c.pos == at).expect("cell visible");
    cell.contents.push(CellContent::Waste { id: WasteId(99), color });
}

fn held(color: Color) -> Waste {
    Waste::new(WasteId(1), color)
}

fn rng() -> AgentRng {
    AgentRng::new(0, AgentId(0))
}

// ── Action ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod action_tests {
    use super::*;
    use crate::{Action, HandleWaste};

    #[test]
    fn exactly_one_half_is_set() {
        let m = Action::Move(Pos::new(1, 2));
        assert_eq!(m.movement(), Some(Pos::new(1, 2)));
        assert_eq!(m.handle_waste(), None);

        let h = Action::Handle(HandleWaste::Transform);
        assert_eq!(h.movement(), None);
        assert_eq!(h.handle_waste(), Some(HandleWaste::Transform));
    }

    #[test]
    fn display() {
        assert_eq!(Action::Move(Pos::new(1, 2)).to_string(), "move (1, 2)");
        assert_eq!(Action::Handle(HandleWaste::DropOffAndNotify).to_string(), "drop_off_notify");
    }
}

// ── Red (terminal) branch ─────────────────────────────────────────────────────

#[cfg(test)]
mod terminal_tests {
    use super::*;
    use crate::policy::decide;
    use crate::{Action, HandleWaste};

    #[test]
    fn carrying_moves_right_until_edge() {
        let mut kb = kb_at(Color::Red, Pos::new(15, 2));
        kb.carry = vec![held(Color::Red)];
        assert_eq!(decide(&kb, &mut rng()).unwrap(), Action::Move(Pos::new(16, 2)));
    }

    #[test]
    fn carrying_at_edge_drops_off() {
        let mut kb = kb_at(Color::Red, Pos::new(20, 2));
        kb.carry = vec![held(Color::Red)];
        assert_eq!(decide(&kb, &mut rng()).unwrap(), Action::Handle(HandleWaste::DropOff));
    }

    #[test]
    fn picks_up_own_color_off_edge() {
        let mut kb = kb_at(Color::Red, Pos::new(16, 1));
        drop_waste(&mut kb, Pos::new(16, 1), Color::Red);
        assert_eq!(decide(&kb, &mut rng()).unwrap(), Action::Handle(HandleWaste::PickUp));
    }

    #[test]
    fn does_not_pick_up_on_edge() {
        let mut kb = kb_at(Color::Red, Pos::new(20, 1));
        drop_waste(&mut kb, Pos::new(20, 1), Color::Red);
        let action = decide(&kb, &mut rng()).unwrap();
        assert!(action.movement().is_some(), "expected a move, got {action}");
    }

    #[test]
    fn ignores_other_colors_here() {
        let mut kb = kb_at(Color::Red, Pos::new(16, 1));
        drop_waste(&mut kb, Pos::new(16, 1), Color::Yellow);
        assert!(decide(&kb, &mut rng()).unwrap().movement().is_some());
    }
}

// ── Green / yellow (relay) branch ─────────────────────────────────────────────

#[cfg(test)]
mod relay_tests {
    use super::*;
    use crate::policy::decide;
    use crate::{Action, HandleWaste};

    #[test]
    fn full_carry_transforms() {
        let mut kb = kb_at(Color::Yellow, Pos::new(9, 2));
        kb.carry = vec![held(Color::Yellow), held(Color::Yellow)];
        assert_eq!(decide(&kb, &mut rng()).unwrap(), Action::Handle(HandleWaste::Transform));
    }

    #[test]
    fn transformed_unit_heads_right_then_notifies() {
        let mut kb = kb_at(Color::Green, Pos::new(4, 0));
        kb.carry = vec![held(Color::Yellow)];
        assert_eq!(decide(&kb, &mut rng()).unwrap(), Action::Move(Pos::new(5, 0)));

        let mut kb = kb_at(Color::Green, Pos::new(6, 0));
        kb.carry = vec![held(Color::Yellow)];
        assert_eq!(
            decide(&kb, &mut rng()).unwrap(),
            Action::Handle(HandleWaste::DropOffAndNotify)
        );
    }

    #[test]
    fn promoted_head_is_delivered_before_the_surplus() {
        let mut kb = kb_at(Color::Green, Pos::new(4, 2));
        kb.carry = vec![held(Color::Yellow), held(Color::Green)];
        assert_eq!(decide(&kb, &mut rng()).unwrap(), Action::Move(Pos::new(5, 2)));

        let mut kb = kb_at(Color::Yellow, Pos::new(13, 2));
        kb.carry = vec![held(Color::Red), held(Color::Yellow)];
        assert_eq!(
            decide(&kb, &mut rng()).unwrap(),
            Action::Handle(HandleWaste::DropOffAndNotify)
        );
    }

    #[test]
    fn three_own_color_units_compact_once() {
        let mut kb = kb_at(Color::Green, Pos::new(3, 2));
        kb.carry = vec![held(Color::Green); 3];
        assert_eq!(decide(&kb, &mut rng()).unwrap(), Action::Handle(HandleWaste::Transform));
    }

    #[test]
    fn single_own_color_unit_keeps_foraging() {
        let mut kb = kb_at(Color::Green, Pos::new(6, 2));
        kb.carry = vec![held(Color::Green)];
        let action = decide(&kb, &mut rng()).unwrap();
        assert!(action.movement().is_some(), "a lone green unit is never dropped: {action}");

        drop_waste(&mut kb, Pos::new(6, 2), Color::Green);
        assert_eq!(decide(&kb, &mut rng()).unwrap(), Action::Handle(HandleWaste::PickUp));
    }

    #[test]
    fn empty_picks_up_here() {
        let mut kb = kb_at(Color::Yellow, Pos::new(8, 3));
        drop_waste(&mut kb, Pos::new(8, 3), Color::Yellow);
        assert_eq!(decide(&kb, &mut rng()).unwrap(), Action::Handle(HandleWaste::PickUp));
    }
}

// ── look_for_waste / step_right ───────────────────────────────────────────────

#[cfg(test)]
mod search_tests {
    use super::*;
    use crate::BehaviorError;
    use crate::policy::{look_for_waste, step_right, waste_available};

    #[test]
    fn first_visible_waste_in_observation_order() {
        let mut kb = kb_at(Color::Green, Pos::new(3, 2));
        drop_waste(&mut kb, Pos::new(4, 3), Color::Green);
        drop_waste(&mut kb, Pos::new(2, 1), Color::Green);
        // (2, 1) precedes (4, 3) in the column-major neighbourhood order.
        assert_eq!(look_for_waste(&kb, &mut rng()).unwrap(), Pos::new(2, 1));
    }

    #[test]
    fn rightmost_column_is_skipped_by_search() {
        let mut kb = kb_at(Color::Green, Pos::new(5, 2));
        drop_waste(&mut kb, Pos::new(6, 2), Color::Green);
        drop_waste(&mut kb, Pos::new(4, 3), Color::Yellow);
        kb.handoff_hints.push_back(Pos::new(0, 0));
        // The only green waste is on column 6, so the hint wins.
        assert_eq!(look_for_waste(&kb, &mut rng()).unwrap(), Pos::new(4, 1));
    }

    #[test]
    fn oldest_hint_is_followed_diagonally() {
        let mut kb = kb_at(Color::Yellow, Pos::new(10, 0));
        kb.handoff_hints.extend([Pos::new(6, 3), Pos::new(13, 0)]);
        assert_eq!(look_for_waste(&kb, &mut rng()).unwrap(), Pos::new(9, 1));
    }

    #[test]
    fn standing_on_hint_stays_put() {
        let mut kb = kb_at(Color::Yellow, Pos::new(6, 3));
        kb.handoff_hints.push_back(Pos::new(6, 3));
        assert_eq!(look_for_waste(&kb, &mut rng()).unwrap(), Pos::new(6, 3));
    }

    #[test]
    fn random_fallback_stays_within_view() {
        let kb = kb_at(Color::Green, Pos::new(6, 2));
        let mut r = rng();
        for _ in 0..50 {
            let p = look_for_waste(&kb, &mut r).unwrap();
            assert!(kb.neighbours.iter().any(|c| c.pos == p));
            assert!(p.x < 7);
        }
    }

    #[test]
    fn random_fallback_may_pick_rightmost_column() {
        let kb = kb_at(Color::Green, Pos::new(6, 2));
        let mut r = rng();
        let hit_edge = (0..200).any(|_| look_for_waste(&kb, &mut r).unwrap().x == 6);
        assert!(hit_edge);
    }

    #[test]
    fn empty_view_is_an_error() {
        let zone = ZoneLayout::new(21).unwrap().zone(Color::Green);
        let kb = KnowledgeBase::new(zone, Pos::new(1, 1));
        assert!(matches!(
            look_for_waste(&kb, &mut rng()),
            Err(BehaviorError::NoCandidateMove { .. })
        ));
    }

    #[test]
    fn step_right_moves_one_column() {
        let kb = kb_at(Color::Yellow, Pos::new(12, 4));
        assert_eq!(step_right(&kb), Pos::new(13, 4));
    }

    #[test]
    #[should_panic(expected = "zone boundary")]
    fn step_right_at_boundary_panics() {
        let kb = kb_at(Color::Yellow, Pos::new(13, 4));
        step_right(&kb);
    }

    #[test]
    fn waste_available_checks_own_cell_and_color() {
        let mut kb = kb_at(Color::Yellow, Pos::new(9, 2));
        assert!(!waste_available(&kb));
        drop_waste(&mut kb, Pos::new(9, 3), Color::Yellow);
        assert!(!waste_available(&kb));
        drop_waste(&mut kb, Pos::new(9, 2), Color::Green);
        assert!(!waste_available(&kb));
        drop_waste(&mut kb, Pos::new(9, 2), Color::Yellow);
        assert!(waste_available(&kb));
    }
}

// ── BehaviorModel ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod model_tests {
    use super::*;
    use crate::{Action, BehaviorModel, BehaviorResult, HandleWaste, ZonePolicy};

    struct AlwaysTransform;

    impl BehaviorModel for AlwaysTransform {
        fn decide(&self, _a: AgentId, _k: &KnowledgeBase, _r: &mut AgentRng) -> BehaviorResult<Action> {
            Ok(Action::Handle(HandleWaste::Transform))
        }
    }

    #[test]
    fn zone_policy_delegates_to_policy() {
        let mut kb = kb_at(Color::Red, Pos::new(20, 0));
        kb.carry = vec![held(Color::Red)];
        let action = ZonePolicy.decide(AgentId(0), &kb, &mut rng()).unwrap();
        assert_eq!(action, Action::Handle(HandleWaste::DropOff));
    }

    #[test]
    fn model_is_object_safe_via_box() {
        let model: Box<dyn BehaviorModel> = Box::new(AlwaysTransform);
        let kb = kb_at(Color::Green, Pos::new(0, 0));
        assert_eq!(
            model.decide(AgentId(0), &kb, &mut rng()).unwrap(),
            Action::Handle(HandleWaste::Transform)
        );
    }
}
