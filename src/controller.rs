//! Application state: the cube, the scramble history, the move queue and
//! what the move-list panel shows.

use rand::{rngs::StdRng, SeedableRng};

use crate::prelude::*;
use crate::sequencer::{Commit, InFlight, MoveSequencer};

pub const SCRAMBLE_LENGTH: usize = 25;

/// A control a user can activate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Turn(Move),
    Scramble,
    Solve,
    Reset,
    Speed(Speed),
}

impl core::str::FromStr for Control {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Control> {
        if s.eq_ignore_ascii_case("scramble") {
            return Ok(Control::Scramble);
        }
        if s.eq_ignore_ascii_case("solve") {
            return Ok(Control::Solve);
        }
        if s.eq_ignore_ascii_case("reset") {
            return Ok(Control::Reset);
        }
        if let Ok(speed) = s.parse() {
            return Ok(Control::Speed(speed));
        }
        s.parse()
            .map(Control::Turn)
            .map_err(|e| anyhow::anyhow!("Unrecognized control {}: {}", s, e))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Title {
    Welcome,
    Scramble,
    Scrambled,
    Solution,
    Solved,
    Manual,
}

impl std::fmt::Display for Title {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s = match self {
            Title::Welcome => "Welcome!",
            Title::Scramble => "Scramble",
            Title::Scrambled => "Scrambled",
            Title::Solution => "Solution Steps",
            Title::Solved => "Solved!",
            Title::Manual => "Manual Move",
        };
        write!(f, "{}", s)
    }
}

/// The move-list panel: the moves of the running (or last) batch and which
/// one is executing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveList {
    pub title: Title,
    pub moves: Vec<Move>,
    pub step: Option<usize>,
}

impl Default for MoveList {
    fn default() -> Self {
        MoveList {
            title: Title::Welcome,
            moves: Vec::new(),
            step: None,
        }
    }
}

impl MoveList {
    fn start(&mut self, title: Title, moves: &[Move], busy: bool) {
        if busy {
            self.moves.extend_from_slice(moves);
        } else {
            self.moves = moves.to_vec();
            self.step = Some(0);
            self.title = title;
        }
    }

    fn committed(&mut self, batch_finished: bool) {
        if batch_finished {
            self.step = None;
            self.title = match self.title {
                Title::Scramble => Title::Scrambled,
                Title::Solution => Title::Solved,
                other => other,
            };
        } else if let Some(step) = &mut self.step {
            *step += 1;
        }
    }
}

impl std::fmt::Display for MoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}:", self.title)?;
        for (i, m) in self.moves.iter().enumerate() {
            if self.step == Some(i) {
                write!(f, " [{}]", m)?;
            } else {
                write!(f, " {}", m)?;
            }
        }
        Ok(())
    }
}

pub struct Controller {
    cube: Cube,
    history: Vec<Move>,
    sequencer: MoveSequencer,
    speed: Speed,
    move_list: MoveList,
    rng: StdRng,
}

impl Default for Controller {
    fn default() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    /// A controller whose scrambles are reproducible.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Controller {
            cube: Cube::solved(),
            history: Vec::new(),
            sequencer: MoveSequencer::new(),
            speed: Speed::default(),
            move_list: MoveList::default(),
            rng,
        }
    }

    pub fn activate(&mut self, control: Control) {
        log::debug!("Activated {:?}", control);
        match control {
            Control::Turn(m) => self.turn(m),
            Control::Scramble => self.scramble(),
            Control::Solve => self.solve(),
            Control::Reset => self.reset(),
            Control::Speed(speed) => self.set_speed(speed),
        }
    }

    pub fn scramble(&mut self) {
        let scramble = random_sequence(&mut self.rng, SCRAMBLE_LENGTH);
        log::info!("Scrambling with {}", format_moves(&scramble));

        self.history.extend_from_slice(&scramble);
        self.enqueue(Title::Scramble, scramble);
    }

    pub fn solve(&mut self) {
        if self.history.is_empty() {
            log::debug!("Nothing to solve");
            return;
        }

        let solution = inverse_sequence(&self.history);
        log::info!("Solving with {}", format_moves(&solution));

        self.history.clear();
        self.enqueue(Title::Solution, solution);
    }

    pub fn turn(&mut self, move_: Move) {
        self.enqueue(Title::Manual, vec![move_]);
    }

    /// Back to a solved cube with nothing queued. A move in flight is
    /// dropped without being applied.
    pub fn reset(&mut self) {
        self.sequencer.clear();
        self.history.clear();
        self.cube = Cube::solved();
        self.move_list = MoveList::default();
        log::info!("Reset");
    }

    pub fn set_speed(&mut self, speed: Speed) {
        self.speed = speed;
    }

    fn enqueue(&mut self, title: Title, moves: Vec<Move>) {
        let busy = self.sequencer.remaining() > 0;
        self.move_list.start(title, &moves, busy);
        self.sequencer.extend(moves);
    }

    pub fn tick(&mut self, dt: Duration) -> Option<Commit> {
        let commit = self.sequencer.advance(&self.cube, dt, self.speed)?;
        log::debug!("Applied {}", commit.move_);

        self.cube = commit.cube.clone();
        self.move_list.committed(commit.batch_finished);
        if commit.batch_finished {
            log::info!("{}", self.move_list.title);
        }
        Some(commit)
    }

    pub fn cube(&self) -> &Cube {
        &self.cube
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn has_history(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn is_animating(&self) -> bool {
        self.sequencer.is_animating()
    }

    pub fn is_idle(&self) -> bool {
        self.sequencer.remaining() == 0
    }

    pub fn can_solve(&self) -> bool {
        self.has_history() && !self.is_animating()
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    pub fn sequencer(&self) -> &MoveSequencer {
        &self.sequencer
    }

    pub fn in_flight(&self) -> Option<InFlight> {
        self.sequencer.in_flight()
    }

    pub fn move_list(&self) -> &MoveList {
        &self.move_list
    }
}

pub fn format_moves(moves: &[Move]) -> String {
    moves
        .iter()
        .map(|m| m.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_micros(16_667);

    fn run_until_idle(controller: &mut Controller) -> usize {
        let mut commits = 0;
        for _ in 0..100_000 {
            if controller.is_idle() {
                break;
            }
            if controller.tick(FRAME).is_some() {
                commits += 1;
            }
        }
        assert!(controller.is_idle());
        commits
    }

    #[test]
    fn parses_controls() {
        assert_eq!(
            "R'".parse::<Control>().unwrap(),
            Control::Turn("R'".parse().unwrap())
        );
        assert_eq!("scramble".parse::<Control>().unwrap(), Control::Scramble);
        assert_eq!("Solve".parse::<Control>().unwrap(), Control::Solve);
        assert_eq!("RESET".parse::<Control>().unwrap(), Control::Reset);
        assert_eq!(
            "Fast".parse::<Control>().unwrap(),
            Control::Speed(Speed::Fast)
        );
        assert!("Shuffle".parse::<Control>().is_err());
    }

    #[test]
    fn scramble_then_solve_returns_to_solved() {
        let mut controller = Controller::seeded(42);
        controller.activate(Control::Speed(Speed::Fast));

        controller.scramble();
        assert_eq!(controller.history().len(), SCRAMBLE_LENGTH);
        assert_eq!(run_until_idle(&mut controller), SCRAMBLE_LENGTH);
        assert_eq!(
            *controller.cube(),
            Cube::solved().apply_all(controller.history().to_vec())
        );
        assert!(controller.can_solve());

        controller.solve();
        assert!(!controller.has_history());
        assert_eq!(run_until_idle(&mut controller), SCRAMBLE_LENGTH);
        assert!(controller.cube().is_solved());
    }

    #[test]
    fn solve_without_history_is_a_no_op() {
        let mut controller = Controller::seeded(1);
        controller.solve();
        assert!(controller.is_idle());
        assert_eq!(*controller.move_list(), MoveList::default());
    }

    #[test]
    fn second_solve_is_a_no_op() {
        let mut controller = Controller::seeded(2);
        controller.scramble();
        controller.solve();
        assert_eq!(controller.sequencer().remaining(), 2 * SCRAMBLE_LENGTH);

        controller.solve();
        assert_eq!(controller.sequencer().remaining(), 2 * SCRAMBLE_LENGTH);

        run_until_idle(&mut controller);
        assert!(controller.cube().is_solved());
    }

    #[test]
    fn manual_turn_applies_one_move() {
        let mut controller = Controller::seeded(3);
        controller.activate("F'".parse().unwrap());
        assert_eq!(run_until_idle(&mut controller), 1);
        assert_eq!(*controller.cube(), cube_with_moves("F'"));
        assert!(!controller.has_history());
        assert_eq!(controller.move_list().title, Title::Manual);
    }

    #[test]
    fn reset_mid_animation_discards_everything() {
        let mut controller = Controller::seeded(4);
        controller.scramble();
        for _ in 0..30 {
            controller.tick(FRAME);
        }
        assert!(controller.is_animating());
        assert_eq!(controller.sequencer().remaining(), SCRAMBLE_LENGTH - 2);

        controller.reset();
        assert!(controller.cube().is_solved());
        assert!(controller.is_idle());
        assert!(!controller.has_history());
        assert!(controller.in_flight().is_none());
        assert_eq!(*controller.move_list(), MoveList::default());

        assert!(controller.tick(FRAME).is_none());
        assert!(controller.cube().is_solved());
    }

    #[test]
    fn reset_when_idle_is_idempotent() {
        let mut controller = Controller::seeded(5);
        controller.reset();
        controller.reset();
        assert!(controller.cube().is_solved());
        assert!(controller.is_idle());
    }

    #[test]
    fn move_list_tracks_the_running_batch() {
        let mut controller = Controller::seeded(6);
        controller.scramble();
        assert_eq!(controller.move_list().title, Title::Scramble);
        assert_eq!(controller.move_list().step, Some(0));
        assert_eq!(controller.move_list().moves, controller.history());

        while controller.tick(FRAME).is_none() {}
        assert_eq!(controller.move_list().step, Some(1));

        run_until_idle(&mut controller);
        assert_eq!(controller.move_list().title, Title::Scrambled);
        assert_eq!(controller.move_list().step, None);

        controller.solve();
        assert_eq!(controller.move_list().title, Title::Solution);
        run_until_idle(&mut controller);
        assert_eq!(controller.move_list().title, Title::Solved);
        assert_eq!(controller.move_list().to_string().matches(' ').count(), 25);
    }

    #[test]
    fn moves_issued_mid_batch_extend_the_list() {
        let mut controller = Controller::seeded(7);
        controller.turn("R".parse().unwrap());
        controller.tick(FRAME);
        controller.turn("U".parse().unwrap());

        assert_eq!(controller.move_list().moves, Move::parse_sequence("R U").unwrap());
        assert_eq!(controller.move_list().step, Some(0));

        run_until_idle(&mut controller);
        assert_eq!(*controller.cube(), cube_with_moves("R U"));
    }

    #[test]
    fn turn_during_scramble_keeps_scramble_title() {
        let mut controller = Controller::seeded(9);
        controller.scramble();
        controller.tick(FRAME);
        controller.turn("L".parse().unwrap());
        assert_eq!(controller.move_list().title, Title::Scramble);
        assert_eq!(controller.move_list().moves.len(), SCRAMBLE_LENGTH + 1);

        run_until_idle(&mut controller);
        assert_eq!(controller.move_list().title, Title::Scrambled);
    }

    #[test]
    fn speed_changes_take_effect() {
        let mut controller = Controller::seeded(8);
        controller.activate("Slow".parse().unwrap());
        assert_eq!(controller.speed(), Speed::Slow);

        controller.turn("D".parse().unwrap());
        assert_eq!(run_until_idle(&mut controller), 1);
    }
}
