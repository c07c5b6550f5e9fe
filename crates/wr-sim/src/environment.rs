//! The world state and its single transition function.
//!
//! [`Environment::apply`] is the only place grid contents, the waste ledger,
//! carry-lists and the mailbox change during a run.  It executes one robot's
//! action and returns what that robot perceives afterwards.

use tracing::{debug, trace};

use wr_agent::{
    compact, CellContent, CellView, Message, Observation, RobotStore, WasteLedger,
};
use wr_behavior::{Action, HandleWaste};
use wr_core::{AgentId, Color, Entity, EntityKind, Pos, Round, WasteId, Zone, ZoneLayout};
use wr_grid::MultiGrid;

use crate::{MessageService, RoundSummary, SimError, SimResult};

/// Grid, wastes, robots, and the hand-off mailbox.
///
/// State is read through the accessors; it changes only through the setup
/// methods and [`apply`](Self::apply).
pub struct Environment {
    layout:  ZoneLayout,
    grid:    MultiGrid,
    ledger:  WasteLedger,
    mailbox: MessageService,
    robots:  RobotStore,
    round:   Round,
}

impl Environment {
    /// An empty world with one zone-coloured tile in every cell.
    pub fn new(layout: ZoneLayout, height: u32) -> SimResult<Self> {
        let mut grid = MultiGrid::new(layout.width(), height);
        for zone in layout.zones() {
            for x in zone.x_min..zone.x_max {
                for y in 0..height as i32 {
                    grid.place_at(Entity::Tile(zone.color), Pos::new(x, y))?;
                }
            }
        }
        Ok(Self {
            layout,
            grid,
            ledger: WasteLedger::new(),
            mailbox: MessageService::new(),
            robots: RobotStore::new(),
            round:  Round::ZERO,
        })
    }

    /// The round currently being simulated; `Round::ZERO` during setup.
    #[inline]
    pub fn round(&self) -> Round {
        self.round
    }

    pub(crate) fn begin_round(&mut self, round: Round) {
        self.round = round;
    }

    #[inline]
    pub fn layout(&self) -> &ZoneLayout {
        &self.layout
    }

    #[inline]
    pub fn grid(&self) -> &MultiGrid {
        &self.grid
    }

    /// Wastes currently on the grid, plus the destroyed count.
    #[inline]
    pub fn ledger(&self) -> &WasteLedger {
        &self.ledger
    }

    #[inline]
    pub fn mailbox(&self) -> &MessageService {
        &self.mailbox
    }

    #[inline]
    pub fn robots(&self) -> &RobotStore {
        &self.robots
    }

    /// Robot state outside the world transition: the decision phase updates
    /// knowledge and the cached observation through this.
    #[inline]
    pub(crate) fn robots_mut(&mut self) -> &mut RobotStore {
        &mut self.robots
    }

    // ── Setup ─────────────────────────────────────────────────────────────

    /// Create a waste of `color` and put it on the grid at `pos`.
    pub fn place_waste(&mut self, color: Color, pos: Pos) -> SimResult<WasteId> {
        let waste = self.ledger.spawn(color);
        self.grid.place_at(Entity::Waste(waste.id), pos)?;
        self.ledger.put(waste);
        Ok(waste.id)
    }

    /// Put every robot of `robots` on the grid and give each its first
    /// observation, so the first round's decisions see their surroundings.
    ///
    /// # Errors
    ///
    /// [`SimError::Placement`] if a robot starts in a column its zone cannot
    /// reach; a grid error if it starts off the grid.
    pub fn install_robots(&mut self, robots: RobotStore) -> SimResult<()> {
        for robot in robots.iter() {
            if !robot.zone.reaches_x(robot.pos.x) {
                return Err(SimError::Placement { color: robot.color(), pos: robot.pos });
            }
            self.grid.place_at(Entity::Robot(robot.id), robot.pos)?;
        }
        self.robots = robots;
        for agent in self.robots.ids() {
            let obs = self.observe(agent)?;
            self.robots.get_mut(agent).last_observation = Some(obs);
        }
        Ok(())
    }

    // ── Round plumbing ────────────────────────────────────────────────────

    /// Deliver messages sent in earlier rounds.  Returns the number of inbox
    /// copies made.
    pub fn dispatch_round(&mut self) -> usize {
        self.mailbox.dispatch_round(self.round, &mut self.robots)
    }

    // ── Transition ────────────────────────────────────────────────────────

    /// Execute `action` for `agent` and return its next observation.
    ///
    /// # Panics
    ///
    /// Panics on actions no policy emits: a move that is not to an adjacent
    /// cell within the robot's reach, a transform without two carried wastes,
    /// or a drop-off with nothing carried.
    pub fn apply(&mut self, agent: AgentId, action: Action) -> SimResult<Observation> {
        let mut picked_up = false;
        match action {
            Action::Move(to) => self.move_robot(agent, to)?,
            Action::Handle(HandleWaste::PickUp) => {
                picked_up = true;
                self.pick_up(agent)?;
            }
            Action::Handle(HandleWaste::Transform) => self.transform(agent),
            Action::Handle(HandleWaste::DropOff) => {
                self.drop_off(agent)?;
            }
            Action::Handle(HandleWaste::DropOffAndNotify) => {
                let at = self.drop_off(agent)?;
                let color = self.robots.get(agent).color();
                self.mailbox.send(self.round, Message::inform_handoff(color, at));
                debug!(round = self.round.0, %agent, %at, "hand-off announced");
            }
        }
        self.perceive(agent, picked_up)
    }

    /// The observation `agent` would receive without acting.  Used for the
    /// initial percept; reads one hand-off notice from the inbox like
    /// [`apply`](Self::apply) does.
    pub fn observe(&mut self, agent: AgentId) -> SimResult<Observation> {
        self.perceive(agent, false)
    }

    fn move_robot(&mut self, agent: AgentId, to: Pos) -> SimResult<()> {
        let robot = self.robots.get_mut(agent);
        assert!(
            robot.zone.reaches_x(to.x) && robot.pos.is_adjacent_or_same(to),
            "{agent} cannot move from {} to {to}",
            robot.pos,
        );
        self.grid.move_to(Entity::Robot(agent), robot.pos, to)?;
        trace!(%agent, from = %robot.pos, %to, "move");
        robot.pos = to;
        Ok(())
    }

    /// Collect every co-located waste of the robot's own colour.
    fn pick_up(&mut self, agent: AgentId) -> SimResult<()> {
        let robot = self.robots.get_mut(agent);
        let (color, pos) = (robot.color(), robot.pos);
        let ledger = &mut self.ledger;
        let here: Vec<WasteId> = self
            .grid
            .contents_at(pos)?
            .iter()
            .filter_map(|e| match *e {
                Entity::Waste(id) if ledger.get(id).is_some_and(|w| w.color() == color) => Some(id),
                _ => None,
            })
            .collect();
        for id in &here {
            self.grid.remove_from(Entity::Waste(*id), pos)?;
            if let Some(waste) = ledger.take(*id) {
                robot.carry.push(waste);
            }
        }
        debug!(round = self.round.0, %agent, %pos, picked = here.len(), "pick up");
        Ok(())
    }

    fn transform(&mut self, agent: AgentId) {
        let robot = self.robots.get_mut(agent);
        let destroyed = compact(&mut robot.carry);
        debug!(
            round = self.round.0,
            %agent,
            into = %robot.carry[0].color(),
            "transformed two {} wastes",
            destroyed.color(),
        );
        self.ledger.record_destroyed(destroyed);
    }

    /// Release the head of the carry-list onto the robot's cell.
    fn drop_off(&mut self, agent: AgentId) -> SimResult<Pos> {
        let robot = self.robots.get_mut(agent);
        let Some(&waste) = robot.carry.first() else {
            panic!("{agent} has nothing to drop off");
        };
        self.grid.place_at(Entity::Waste(waste.id), robot.pos)?;
        robot.carry.remove(0);
        self.ledger.put(waste);
        debug!(round = self.round.0, %agent, at = %robot.pos, color = %waste.color(), "drop off");
        Ok(robot.pos)
    }

    /// Build `agent`'s percept from the current world state.
    fn perceive(&mut self, agent: AgentId, picked_up: bool) -> SimResult<Observation> {
        let robot = self.robots.get(agent);
        let neighbours = self.neighbour_view(robot.pos, robot.zone)?;
        let robot = self.robots.get_mut(agent);
        Ok(Observation {
            round:                self.round,
            neighbours,
            position:             robot.pos,
            carry:                robot.carry.clone(),
            incoming_handoff:     robot.take_handoff(),
            waste_just_picked_up: picked_up,
        })
    }

    /// The Moore neighbourhood of `pos`, centre included, limited to the
    /// columns `zone` can reach.
    fn neighbour_view(&self, pos: Pos, zone: Zone) -> SimResult<Vec<CellView>> {
        self.grid
            .neighborhood(pos, true, true)
            .into_iter()
            .filter(|p| zone.reaches_x(p.x))
            .map(|p| -> SimResult<CellView> {
                let contents = self
                    .grid
                    .contents_at(p)?
                    .iter()
                    .filter_map(|e| self.content_of(*e))
                    .collect();
                Ok(CellView { pos: p, contents })
            })
            .collect()
    }

    fn content_of(&self, entity: Entity) -> Option<CellContent> {
        Some(match entity {
            Entity::Tile(color) => CellContent::Tile { color },
            // Placed wastes are always in the ledger; held ones never reach the grid.
            Entity::Waste(id) => CellContent::Waste { id, color: self.ledger.get(id)?.color() },
            Entity::Robot(id) => CellContent::Robot { id, color: self.robots.get(id).color() },
        })
    }

    // ── Counting ──────────────────────────────────────────────────────────

    /// Entities of `kind` currently on the grid.
    pub fn count_by_kind(&self, kind: EntityKind) -> usize {
        self.grid.count_kind(kind)
    }

    /// End-of-round figures; `delivered` is this round's dispatch count.
    pub fn summary(&self, delivered: usize) -> RoundSummary {
        RoundSummary {
            round:            self.round,
            placed:           self.ledger.placed_by_color(),
            held:             self.robots.held_wastes(),
            destroyed:        self.ledger.destroyed(),
            delivered,
            pending_messages: self.mailbox.pending_len(),
        }
    }
}
