//! Unit tests for wr-agent.

use wr_core::{Color, Pos, Round, WasteId, Zone, ZoneLayout};

use crate::{CellContent, CellView, Observation, Waste};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn zone(color: Color) -> Zone {
    ZoneLayout::new(21).unwrap().zone(color)
}

fn waste(id: u32, color: Color) -> Waste {
    Waste::new(WasteId(id), color)
}

fn obs(round: u64, position: Pos) -> Observation {
    Observation {
        round:                Round(round),
        neighbours:           vec![CellView { pos: position, contents: vec![] }],
        position,
        carry:                vec![],
        incoming_handoff:     None,
        waste_just_picked_up: false,
    }
}

// ── Waste lifecycle ───────────────────────────────────────────────────────────

#[cfg(test)]
mod waste_tests {
    use super::*;
    use crate::{WasteLedger, compact};

    #[test]
    fn promote_advances_one_tier() {
        let mut w = waste(0, Color::Green);
        assert_eq!(w.promote(), Color::Yellow);
        assert_eq!(w.promote(), Color::Red);
    }

    #[test]
    #[should_panic(expected = "cannot be promoted")]
    fn promote_red_panics() {
        waste(0, Color::Red).promote();
    }

    #[test]
    fn compact_destroys_head_and_promotes_next() {
        let mut carry = vec![waste(1, Color::Yellow), waste(2, Color::Yellow)];
        let destroyed = compact(&mut carry);
        assert_eq!(destroyed.id, WasteId(1));
        assert_eq!(carry.len(), 1);
        assert_eq!(carry[0].id, WasteId(2));
        assert_eq!(carry[0].color(), Color::Red);
    }

    #[test]
    #[should_panic(expected = "compaction needs two")]
    fn compact_single_panics() {
        let mut carry = vec![waste(1, Color::Green)];
        compact(&mut carry);
    }

    #[test]
    #[should_panic(expected = "compaction needs two")]
    fn compact_empty_panics() {
        compact(&mut Vec::new());
    }

    #[test]
    fn ledger_take_and_put() {
        let mut ledger = WasteLedger::new();
        let a = ledger.spawn(Color::Green);
        let b = ledger.spawn(Color::Red);
        assert_ne!(a.id, b.id);
        assert_eq!(ledger.placed_len(), 0);

        ledger.put(a);
        ledger.put(b);
        assert_eq!(ledger.placed_by_color(), [1, 0, 1]);

        let held = ledger.take(a.id).unwrap();
        assert!(ledger.get(a.id).is_none());
        assert!(ledger.take(a.id).is_none());
        assert_eq!(ledger.placed_len(), 1);

        ledger.put(held);
        assert_eq!(ledger.get(a.id).map(|w| w.color()), Some(Color::Green));
    }

    #[test]
    #[should_panic(expected = "placed twice")]
    fn ledger_put_twice_panics() {
        let mut ledger = WasteLedger::new();
        let a = ledger.spawn(Color::Green);
        ledger.put(a);
        ledger.put(a);
    }
}

// ── KnowledgeBase ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod knowledge_tests {
    use super::*;
    use crate::KnowledgeBase;

    #[test]
    fn update_overwrites_snapshot_fields() {
        let mut kb = KnowledgeBase::new(zone(Color::Green), Pos::new(0, 0));
        let mut o = obs(1, Pos::new(2, 3));
        o.carry = vec![waste(5, Color::Green)];
        o.neighbours[0].contents.push(CellContent::Tile { color: Color::Green });
        kb.update(&o);
        assert_eq!(kb.position, Pos::new(2, 3));
        assert_eq!(kb.carry, o.carry);
        assert_eq!(kb.neighbours, o.neighbours);
    }

    #[test]
    fn hints_append_in_arrival_order() {
        let mut kb = KnowledgeBase::new(zone(Color::Yellow), Pos::new(8, 0));
        for (round, x) in [(1, 6), (2, 5), (3, 6)] {
            let mut o = obs(round, Pos::new(8, 0));
            o.incoming_handoff = Some(Pos::new(x, 0));
            kb.update(&o);
        }
        let hints: Vec<_> = kb.handoff_hints.iter().copied().collect();
        assert_eq!(hints, vec![Pos::new(6, 0), Pos::new(5, 0), Pos::new(6, 0)]);
        assert_eq!(kb.oldest_hint(), Some(Pos::new(6, 0)));
    }

    #[test]
    fn pickup_at_hint_retires_first_match_only() {
        let mut kb = KnowledgeBase::new(zone(Color::Yellow), Pos::new(8, 0));
        kb.handoff_hints.extend([Pos::new(6, 1), Pos::new(6, 2), Pos::new(6, 1)]);

        let mut o = obs(4, Pos::new(6, 1));
        o.waste_just_picked_up = true;
        kb.update(&o);

        let hints: Vec<_> = kb.handoff_hints.iter().copied().collect();
        assert_eq!(hints, vec![Pos::new(6, 2), Pos::new(6, 1)]);
    }

    #[test]
    fn pickup_elsewhere_keeps_hints() {
        let mut kb = KnowledgeBase::new(zone(Color::Yellow), Pos::new(8, 0));
        kb.handoff_hints.push_back(Pos::new(6, 1));
        let mut o = obs(4, Pos::new(9, 1));
        o.waste_just_picked_up = true;
        kb.update(&o);
        assert_eq!(kb.handoff_hints.len(), 1);
    }

    #[test]
    fn update_is_idempotent() {
        let mut o = obs(7, Pos::new(6, 1));
        o.incoming_handoff = Some(Pos::new(6, 4));

        let mut once = KnowledgeBase::new(zone(Color::Yellow), Pos::new(8, 0));
        once.update(&o);

        let mut twice = KnowledgeBase::new(zone(Color::Yellow), Pos::new(8, 0));
        twice.update(&o);
        twice.update(&o);

        assert_eq!(once, twice);
        assert_eq!(twice.handoff_hints.len(), 1);
    }

    #[test]
    fn here_finds_own_cell() {
        let mut kb = KnowledgeBase::new(zone(Color::Green), Pos::new(0, 0));
        assert!(kb.here().is_none());
        kb.update(&obs(1, Pos::new(1, 1)));
        assert_eq!(kb.here().map(|c| c.pos), Some(Pos::new(1, 1)));
    }
}

// ── Message ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod message_tests {
    use super::*;
    use crate::{Message, Performative};

    #[test]
    fn handoff_is_addressed_downstream() {
        let m = Message::inform_handoff(Color::Green, Pos::new(6, 2));
        assert_eq!(m.recipient, Color::Yellow);
        assert_eq!(m.performative, Performative::InformHandoff);
        assert_eq!(m.payload, Pos::new(6, 2));
        assert_eq!(Message::inform_handoff(Color::Yellow, Pos::new(13, 0)).recipient, Color::Red);
    }

    #[test]
    #[should_panic(expected = "no downstream")]
    fn red_cannot_notify() {
        Message::inform_handoff(Color::Red, Pos::new(20, 0));
    }
}

// ── Robot / store ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod robot_tests {
    use super::*;
    use crate::{Message, RobotStoreBuilder};

    #[test]
    fn store_counts_by_color() {
        let (store, _) = RobotStoreBuilder::new(0)
            .robot(zone(Color::Green), Pos::new(0, 0))
            .robot(zone(Color::Yellow), Pos::new(7, 0))
            .robot(zone(Color::Red), Pos::new(14, 0))
            .build();
        let colors: Vec<_> = store.iter().map(|r| r.color()).collect();
        assert_eq!(colors, vec![Color::Green, Color::Yellow, Color::Red]);
        assert_eq!(store.count_by_color(), [1, 1, 1]);
    }

    #[test]
    fn perceive_consumes_cached_observation() {
        let (mut store, _) = RobotStoreBuilder::new(0)
            .robot(zone(Color::Yellow), Pos::new(8, 0))
            .build();
        let ids = store.ids();
        let robot = store.get_mut(ids[0]);

        let mut o = obs(2, Pos::new(8, 0));
        o.incoming_handoff = Some(Pos::new(6, 0));
        robot.last_observation = Some(o);

        assert!(robot.perceive());
        assert!(!robot.perceive());
        assert_eq!(robot.knowledge.handoff_hints.len(), 1);
    }

    #[test]
    fn take_handoff_reads_newest_and_keeps_rest() {
        let (mut store, _) = RobotStoreBuilder::new(0)
            .robot(zone(Color::Red), Pos::new(15, 0))
            .build();
        let robot = store.get_mut(store.ids()[0]);
        robot.inbox.push(Message::inform_handoff(Color::Yellow, Pos::new(13, 1)));
        robot.inbox.push(Message::inform_handoff(Color::Yellow, Pos::new(13, 4)));

        assert_eq!(robot.take_handoff(), Some(Pos::new(13, 4)));
        assert_eq!(robot.inbox.len(), 1);
        assert_eq!(robot.take_handoff(), Some(Pos::new(13, 1)));
        assert_eq!(robot.take_handoff(), None);
    }

    #[test]
    fn rngs_line_up_with_robots() {
        let (store, rngs) = RobotStoreBuilder::new(9)
            .robot(zone(Color::Green), Pos::new(1, 1))
            .robot(zone(Color::Green), Pos::new(2, 1))
            .build();
        assert_eq!(store.len(), rngs.len());
        assert_eq!(store.get(store.ids()[1]).pos, Pos::new(2, 1));
    }
}
