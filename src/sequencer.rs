//! Queue of pending moves and the single move being animated.

use std::collections::VecDeque;

use smallvec::SmallVec;

use crate::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Idle,
    Animating,
}

/// A move whose animation finished and which has been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    pub move_: Move,
    pub cube: Cube,
    /// Nothing is left in the queue.
    pub batch_finished: bool,
}

/// Everything a renderer needs to draw the move being animated.
#[derive(Debug, Clone, PartialEq)]
pub struct InFlight {
    pub move_: Move,
    /// Linear progress from 0.0 to 1.0.
    pub progress: f32,
    /// Eased rotation in degrees, signed by direction.
    pub angle: f32,
    pub axis: Axis,
    /// Which end of `axis` the turning layer sits on.
    pub layer_sign: i8,
    pub layer: SmallVec<[Sticker; 21]>,
}

#[derive(Debug, Clone, Default)]
pub struct MoveSequencer {
    queue: VecDeque<Move>,
    current: Option<Move>,
    clock: AnimationClock,
}

impl MoveSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> State {
        match self.current {
            Some(_) => State::Animating,
            None => State::Idle,
        }
    }

    pub fn is_animating(&self) -> bool {
        self.state() == State::Animating
    }

    pub fn enqueue(&mut self, move_: Move) {
        self.queue.push_back(move_);
    }

    pub fn extend(&mut self, moves: impl IntoIterator<Item = Move>) {
        self.queue.extend(moves);
    }

    /// Drops the queue and the move in flight without applying either.
    pub fn clear(&mut self) {
        if let Some(dropped) = self.current.take() {
            log::debug!(
                "Discarding {} at {:.1} degrees",
                dropped,
                self.clock.angle()
            );
        }
        self.queue.clear();
        self.clock.reset();
    }

    /// Moves waiting behind the one in flight.
    pub fn pending(&self) -> &VecDeque<Move> {
        &self.queue
    }

    pub fn current(&self) -> Option<Move> {
        self.current
    }

    /// Queued moves plus the one in flight.
    pub fn remaining(&self) -> usize {
        self.queue.len() + self.current.iter().count()
    }

    /// Runs one tick. Starts the next queued move when idle, advances the
    /// animation, and applies the move to `cube` once it reaches a quarter
    /// turn.
    pub fn advance(&mut self, cube: &Cube, dt: Duration, speed: Speed) -> Option<Commit> {
        if self.current.is_none() {
            self.current = Some(self.queue.pop_front()?);
            self.clock.reset();
        }

        let move_ = self.current?;
        self.clock.advance(dt, speed);
        if !self.clock.is_done() {
            return None;
        }

        self.current = None;
        self.clock.reset();
        let cube = cube.clone().apply(move_);
        log::trace!("Committed {}, {} queued", move_, self.queue.len());

        Some(Commit {
            move_,
            cube,
            batch_finished: self.queue.is_empty(),
        })
    }

    pub fn in_flight(&self) -> Option<InFlight> {
        let move_ = self.current?;
        Some(InFlight {
            move_,
            progress: self.clock.progress(),
            angle: self.clock.eased_angle() * f32::from(move_.direction.sign()),
            axis: move_.face.axis(),
            layer_sign: move_.face.layer_sign(),
            layer: layer(move_.face),
        })
    }

    /// Rotation to draw `sticker` at: the in-flight angle for stickers in
    /// the turning layer, zero for everything else.
    pub fn sticker_angle(&self, sticker: Sticker) -> f32 {
        match self.in_flight() {
            Some(in_flight) if in_flight.layer.contains(&sticker) => in_flight.angle,
            _ => 0.0,
        }
    }
}
