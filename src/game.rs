use std::sync::mpsc::{Receiver, RecvTimeoutError, TryRecvError};
use std::time::{Duration, Instant};

use anyhow::Result;
use log::{info, warn};
use rand::Rng;

use crate::food::FoodPlacer;
use crate::input::Intent;
use crate::state::{GameState, StepOutcome};
use crate::term::Renderer;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    Running,
    Stopped,
}

/// Why a loop handed control back.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LoopExit {
    Quit,
    Restart,
}

/// Drives one game. Sole owner of its `GameState`; the input thread only
/// reaches it through the intent channel. Once stopped it never steps
/// again, a restart is a new loop.
pub struct GameLoop<'a, R: Rng> {
    state: GameState,
    placer: &'a mut FoodPlacer<R>,
    phase: Phase,
    period: Duration,
}

impl<'a, R: Rng> GameLoop<'a, R> {
    pub fn new(placer: &'a mut FoodPlacer<R>, period: Duration) -> Result<Self> {
        let state = GameState::new(placer)?;
        Ok(GameLoop { state, placer, phase: Phase::Running, period })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[cfg(test)]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// One step followed by one render pass.
    pub fn tick(&mut self, renderer: &mut impl Renderer) -> Result<StepOutcome> {
        let outcome = self.state.step(self.placer)?;
        if !self.state.is_alive() {
            self.phase = Phase::Stopped;
        }
        renderer.render(&self.state.snapshot())?;
        Ok(outcome)
    }

    /// Runs until the player quits or asks for a new game.
    pub fn run(&mut self, intents: &Receiver<Intent>, renderer: &mut impl Renderer) -> Result<LoopExit> {
        renderer.render(&self.state.snapshot())?;
        let mut next_tick = Instant::now() + self.period;

        loop {
            if self.phase == Phase::Stopped {
                return Ok(self.wait_after_game_over(intents));
            }

            let now = Instant::now();
            if now >= next_tick {
                // Whatever arrived while we were busy still lands before the step.
                if let Some(exit) = self.drain(intents) {
                    return Ok(exit);
                }
                self.tick(renderer)?;
                next_tick += self.period;
                // Don't try to catch up after a stall.
                if next_tick < now {
                    next_tick = now + self.period;
                }
                continue;
            }

            match intents.recv_timeout(next_tick - now) {
                Ok(intent) => {
                    if let Some(exit) = self.apply(intent) {
                        return Ok(exit);
                    }
                }
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => {
                    warn!("input channel closed, quitting");
                    return Ok(LoopExit::Quit);
                }
            }
        }
    }

    fn drain(&mut self, intents: &Receiver<Intent>) -> Option<LoopExit> {
        loop {
            match intents.try_recv() {
                Ok(intent) => {
                    if let Some(exit) = self.apply(intent) {
                        return Some(exit);
                    }
                }
                Err(TryRecvError::Empty) => return None,
                Err(TryRecvError::Disconnected) => {
                    warn!("input channel closed, quitting");
                    return Some(LoopExit::Quit);
                }
            }
        }
    }

    fn apply(&mut self, intent: Intent) -> Option<LoopExit> {
        match intent {
            Intent::Move(dir) => {
                self.state.set_direction(dir);
                None
            }
            Intent::Quit => Some(LoopExit::Quit),
            // Only meaningful once the game is over.
            Intent::Restart => None,
        }
    }

    fn wait_after_game_over(&self, intents: &Receiver<Intent>) -> LoopExit {
        loop {
            match intents.recv() {
                Ok(Intent::Quit) => return LoopExit::Quit,
                Ok(Intent::Restart) => return LoopExit::Restart,
                Ok(Intent::Move(_)) => {}
                Err(_) => {
                    warn!("input channel closed, quitting");
                    return LoopExit::Quit;
                }
            }
        }
    }
}

/// Plays games back to back until the player quits. The placer, and with
/// it the random source, is shared by every game.
pub struct Session<R: Rng> {
    placer: FoodPlacer<R>,
    period: Duration,
}

impl<R: Rng> Session<R> {
    pub fn new(placer: FoodPlacer<R>, period: Duration) -> Self {
        Session { placer, period }
    }

    pub fn run(&mut self, intents: &Receiver<Intent>, renderer: &mut impl Renderer) -> Result<()> {
        let mut games = 0u32;

        loop {
            games += 1;
            info!("starting game {}", games);

            let mut game = GameLoop::new(&mut self.placer, self.period)?;
            let exit = game.run(intents, renderer)?;
            info!("game {} finished with score {}", games, game.state().score());

            match exit {
                LoopExit::Quit => return Ok(()),
                LoopExit::Restart => info!("restarting"),
            }
        }
    }
}
