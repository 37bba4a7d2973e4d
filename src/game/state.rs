use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::bases::{BaseState, FIRST, HOME_PLATE, SECOND, SLOTS, THIRD};
use super::{BatterId, Event, LineupTracker, Side, Team};
use crate::error::InvariantViolation;

/// Stable identifier used to correlate a game with its stored result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GameId(pub u32);

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameOutcome {
    HomeWin,
    AwayWin,
    Draw,
}

/// Final score of a completed game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalScore {
    pub game_id: GameId,
    pub home: u32,
    pub away: u32,
}

impl FinalScore {
    pub fn outcome(&self) -> GameOutcome {
        use std::cmp::Ordering;
        match self.home.cmp(&self.away) {
            Ordering::Greater => GameOutcome::HomeWin,
            Ordering::Less => GameOutcome::AwayWin,
            Ordering::Equal => GameOutcome::Draw,
        }
    }
}

impl fmt::Display for FinalScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Home score is {}. Away score is {}.", self.home, self.away)?;
        match self.outcome() {
            GameOutcome::HomeWin => f.write_str("Home team won"),
            GameOutcome::AwayWin => f.write_str("Away team won"),
            GameOutcome::Draw => f.write_str("Result is a draw"),
        }
    }
}

/// What a single resolved event did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayOutcome {
    pub event: Event,
    pub side: Side,
    pub runs_scored: u8,
    pub stranded: u8,
    pub inning_ended: bool,
}

/// One game of baseball: both teams, their batting orders, the bases and
/// the side currently at bat.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    id: GameId,
    teams: [Team; 2],
    lineups: LineupTracker,
    bases: BaseState,
    batting: Side,
}

impl GameState {
    /// Create a fresh game. The away side bats first and its leadoff
    /// hitter is already at the plate.
    pub fn new(id: GameId) -> Self {
        let (lineups, leadoff) = LineupTracker::with_leadoff_up(Side::Away);
        GameState {
            id,
            teams: [Team::new(Side::Home), Team::new(Side::Away)],
            lineups,
            bases: BaseState::with_batter(leadoff),
            batting: Side::Away,
        }
    }

    pub fn id(&self) -> GameId {
        self.id
    }

    /// Side currently at bat
    pub fn batting(&self) -> Side {
        self.batting
    }

    pub fn team(&self, side: Side) -> &Team {
        &self.teams[side.index()]
    }

    fn team_mut(&mut self, side: Side) -> &mut Team {
        &mut self.teams[side.index()]
    }

    pub fn bases(&self) -> &BaseState {
        &self.bases
    }

    pub fn lineups(&self) -> &LineupTracker {
        &self.lineups
    }

    /// Both sides have batted their nine innings
    pub fn is_complete(&self) -> bool {
        Side::BOTH.iter().all(|&s| self.team(s).has_finished_batting())
    }

    pub fn final_score(&self) -> FinalScore {
        FinalScore {
            game_id: self.id,
            home: self.team(Side::Home).runs(),
            away: self.team(Side::Away).runs(),
        }
    }

    /// Every batter belonging to `side`, whether waiting in the order or
    /// standing on a base, sorted.
    pub fn accounted_batters(&self, side: Side) -> Vec<BatterId> {
        let mut all: Vec<BatterId> = self.lineups.waiting(side).collect();
        if side == self.batting {
            all.extend(self.bases.occupants());
        }
        all.sort();
        all
    }

    /// Apply one event to the game.
    pub fn resolve_event(&mut self, event: Event) -> Result<PlayOutcome, InvariantViolation> {
        if self.is_complete() {
            return Err(InvariantViolation::GameOver(self.id));
        }
        let outcome = match event {
            Event::Out => self.handle_out()?,
            Event::Advance(n @ 1..=4) => self.handle_score(n)?,
            Event::Advance(n) => return Err(InvariantViolation::InvalidAdvance(n)),
        };
        trace!(
            game = %self.id,
            side = outcome.side.name(),
            %event,
            runs = outcome.runs_scored,
            "event resolved"
        );
        Ok(outcome)
    }

    fn take_batter(&mut self) -> Result<BatterId, InvariantViolation> {
        self.bases
            .take(HOME_PLATE)
            .ok_or(InvariantViolation::NoBatterAtPlate(self.id))
    }

    fn call_up_next(&mut self) -> Result<(), InvariantViolation> {
        let next = self.lineups.next_batter(self.batting)?;
        self.bases.place(HOME_PLATE, next)
    }

    fn handle_out(&mut self) -> Result<PlayOutcome, InvariantViolation> {
        let side = self.batting;
        let batter = self.take_batter()?;
        self.lineups.return_batter(side, batter);

        let inning_ended = self.team_mut(side).record_out();
        let mut stranded = 0;
        if inning_ended {
            for slot in [THIRD, SECOND, FIRST] {
                if let Some(runner) = self.bases.take(slot) {
                    self.lineups.return_batter(side, runner);
                    stranded += 1;
                }
            }
            self.batting = side.other();
            debug!(
                game = %self.id,
                side = side.name(),
                innings = self.team(side).innings_completed(),
                stranded,
                "half inning over"
            );
        }

        self.call_up_next()?;
        Ok(PlayOutcome {
            event: Event::Out,
            side,
            runs_scored: 0,
            stranded,
            inning_ended,
        })
    }

    fn handle_score(&mut self, advanced: u8) -> Result<PlayOutcome, InvariantViolation> {
        let side = self.batting;
        let batter = self.take_batter()?;
        let step = advanced as usize;
        let mut runs = 0;

        // Lead runner first so every landing base is already vacated.
        for slot in [THIRD, SECOND, FIRST] {
            if let Some(runner) = self.bases.take(slot) {
                runs += self.advance(side, runner, slot + step)?;
            }
        }
        runs += self.advance(side, batter, HOME_PLATE + step)?;

        self.team_mut(side).add_runs(runs);
        self.call_up_next()?;
        Ok(PlayOutcome {
            event: Event::Advance(advanced),
            side,
            runs_scored: runs,
            stranded: 0,
            inning_ended: false,
        })
    }

    /// Move a runner to `target`, or home if the target is past third.
    /// Returns the runs this scored.
    fn advance(
        &mut self,
        side: Side,
        runner: BatterId,
        target: usize,
    ) -> Result<u8, InvariantViolation> {
        if target >= SLOTS {
            self.lineups.return_batter(side, runner);
            Ok(1)
        } else {
            self.bases.place(target, runner)?;
            Ok(0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{INNINGS_PER_GAME, LINEUP_SIZE, OUTS_PER_INNING};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    /// Take runners for the batting side off the front of its order and
    /// put them on the given bases.
    fn put_runners(state: &mut GameState, slots: &[usize]) {
        for &slot in slots {
            let runner = state.lineups.next_batter(state.batting).unwrap();
            state.bases.place(slot, runner).unwrap();
        }
    }

    fn assert_conserved(state: &GameState) {
        let full: Vec<BatterId> = (0..LINEUP_SIZE).map(BatterId).collect();
        for side in Side::BOTH {
            assert_eq!(state.accounted_batters(side), full, "{} batters", side.name());
        }
    }

    #[test]
    fn test_initial_state() {
        let state = GameState::new(GameId(1));
        assert_eq!(state.id(), GameId(1));
        assert_eq!(state.batting(), Side::Away);
        assert_eq!(state.bases().at_bat(), Some(BatterId(0)));
        assert_eq!(state.bases().runner_count(), 0);
        assert_eq!(state.lineups().len(Side::Away), 8);
        assert_eq!(state.lineups().len(Side::Home), 9);
        assert!(!state.is_complete());
        assert_conserved(&state);
    }

    #[test]
    fn test_home_run_with_empty_bases() {
        let mut state = GameState::new(GameId(0));
        let play = state.resolve_event(Event::Advance(4)).unwrap();

        assert_eq!(play.runs_scored, 1);
        assert_eq!(state.team(Side::Away).runs(), 1);
        assert_eq!(state.bases().runner_count(), 0);
        assert_eq!(state.bases().at_bat(), Some(BatterId(1)));
        // The batter who scored rejoins the end of the order
        assert_eq!(state.lineups().waiting(Side::Away).last(), Some(BatterId(0)));
        assert_conserved(&state);
    }

    #[test]
    fn test_single_with_bases_loaded() {
        let mut state = GameState::new(GameId(0));
        put_runners(&mut state, &[FIRST, SECOND, THIRD]);
        let on_first = state.bases().get(FIRST);
        let on_second = state.bases().get(SECOND);
        let batter = state.bases().at_bat();

        let play = state.resolve_event(Event::Advance(1)).unwrap();

        assert_eq!(play.runs_scored, 1);
        assert_eq!(state.team(Side::Away).runs(), 1);
        assert_eq!(state.bases().get(THIRD), on_second);
        assert_eq!(state.bases().get(SECOND), on_first);
        assert_eq!(state.bases().get(FIRST), batter);
        assert_conserved(&state);
    }

    #[test]
    fn test_double_with_bases_loaded() {
        let mut state = GameState::new(GameId(0));
        put_runners(&mut state, &[FIRST, SECOND, THIRD]);
        let on_first = state.bases().get(FIRST);
        let batter = state.bases().at_bat();

        let play = state.resolve_event(Event::Advance(2)).unwrap();

        assert_eq!(play.runs_scored, 2);
        assert_eq!(state.team(Side::Away).runs(), 2);
        assert_eq!(state.bases().get(THIRD), on_first);
        assert_eq!(state.bases().get(SECOND), batter);
        assert_eq!(state.bases().get(FIRST), None);
        assert_conserved(&state);
    }

    #[test]
    fn test_triple_clears_bases() {
        let mut state = GameState::new(GameId(0));
        put_runners(&mut state, &[FIRST, THIRD]);
        let batter = state.bases().at_bat();

        let play = state.resolve_event(Event::Advance(3)).unwrap();

        assert_eq!(play.runs_scored, 2);
        assert_eq!(state.bases().get(THIRD), batter);
        assert_eq!(state.bases().get(SECOND), None);
        assert_eq!(state.bases().get(FIRST), None);
        assert_conserved(&state);
    }

    #[test]
    fn test_grand_slam_scores_four() {
        let mut state = GameState::new(GameId(0));
        put_runners(&mut state, &[FIRST, SECOND, THIRD]);

        let play = state.resolve_event(Event::Advance(4)).unwrap();

        assert_eq!(play.runs_scored, 4);
        assert_eq!(state.team(Side::Away).runs(), 4);
        assert_eq!(state.bases().runner_count(), 0);
        assert_conserved(&state);
    }

    #[test]
    fn test_third_out_strands_runner_and_flips_side() {
        let mut state = GameState::new(GameId(0));
        state.resolve_event(Event::Out).unwrap();
        state.resolve_event(Event::Out).unwrap();
        put_runners(&mut state, &[SECOND]);
        let runner = state.bases().get(SECOND).unwrap();
        assert_eq!(state.team(Side::Away).outs_this_inning(), 2);

        let play = state.resolve_event(Event::Out).unwrap();

        assert!(play.inning_ended);
        assert_eq!(play.stranded, 1);
        assert_eq!(state.team(Side::Away).runs(), 0);
        assert_eq!(state.team(Side::Away).outs_this_inning(), 0);
        assert_eq!(state.team(Side::Away).innings_completed(), 1);
        assert_eq!(state.batting(), Side::Home);
        assert_eq!(state.bases().get(SECOND), None);
        assert_eq!(state.bases().at_bat(), Some(BatterId(0)));
        assert!(state.lineups().waiting(Side::Away).any(|b| b == runner));
        assert_conserved(&state);
    }

    #[test]
    fn test_score_never_flips_side() {
        let mut state = GameState::new(GameId(0));
        for n in 1..=4 {
            state.resolve_event(Event::Advance(n)).unwrap();
            assert_eq!(state.batting(), Side::Away);
        }
    }

    #[test]
    fn test_game_ends_after_nine_innings_each() {
        let mut state = GameState::new(GameId(3));
        let outs_per_game = 2 * INNINGS_PER_GAME as usize * OUTS_PER_INNING as usize;

        for _ in 0..outs_per_game - 1 {
            state.resolve_event(Event::Out).unwrap();
            assert!(!state.is_complete());
        }
        state.resolve_event(Event::Out).unwrap();

        assert!(state.is_complete());
        assert_eq!(state.team(Side::Home).innings_completed(), 9);
        assert_eq!(state.team(Side::Away).innings_completed(), 9);
        assert_eq!(state.final_score().outcome(), GameOutcome::Draw);
        assert_eq!(
            state.resolve_event(Event::Out),
            Err(InvariantViolation::GameOver(GameId(3)))
        );
    }

    #[test]
    fn test_invalid_advance_rejected_without_mutation() {
        let mut state = GameState::new(GameId(0));
        let before = state.clone();
        assert_eq!(
            state.resolve_event(Event::Advance(5)),
            Err(InvariantViolation::InvalidAdvance(5))
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_random_games_hold_invariants() {
        let mut rng = StdRng::seed_from_u64(7);
        for game in 0..20 {
            let mut state = GameState::new(GameId(game));
            while !state.is_complete() {
                let event = Event::ALL[rng.random_range(0..Event::ALL.len())];
                let side = state.batting();
                let before = *state.team(side);
                let other_before = *state.team(side.other());

                assert!(before.outs_this_inning() < OUTS_PER_INNING);
                let play = state.resolve_event(event).unwrap();
                let after = *state.team(side);

                assert_eq!(after.runs(), before.runs() + u32::from(play.runs_scored));
                assert!(play.runs_scored <= 4);
                assert_eq!(*state.team(side.other()), other_before);
                if play.inning_ended {
                    assert_eq!(after.innings_completed(), before.innings_completed() + 1);
                    assert_eq!(after.outs_this_inning(), 0);
                    assert_eq!(state.batting(), side.other());
                } else {
                    assert_eq!(after.innings_completed(), before.innings_completed());
                    assert_eq!(state.batting(), side);
                }
                assert!(state.bases().at_bat().is_some());
                assert_conserved(&state);
            }
        }
    }

    #[test]
    fn test_final_score_report() {
        let score = FinalScore {
            game_id: GameId(0),
            home: 5,
            away: 3,
        };
        assert_eq!(score.outcome(), GameOutcome::HomeWin);
        assert_eq!(
            score.to_string(),
            "Home score is 5. Away score is 3.\nHome team won"
        );

        let score = FinalScore { home: 2, away: 2, ..score };
        assert_eq!(score.to_string().lines().last(), Some("Result is a draw"));
    }
}
