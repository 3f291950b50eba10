use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::EngineError;

/// Phases of one round. The machine is cyclic: cleanup always returns to
/// betting, and `Error` is a recovery sink reachable from anywhere.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    Betting,
    Dealing,
    PlayerTurn,
    DealerTurn,
    Settlement,
    Cleanup,
    Error,
}

/// Commands gated by the per-phase whitelist before they reach any other
/// component.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Command {
    PlaceBet,
    IncreaseBet,
    ClearBet,
    PlaceSideBet,
    ClearSideBet,
    DealCards,
    Hit,
    Stand,
    DoubleDown,
    Split,
    Surrender,
    TakeInsurance,
    DeclineInsurance,
    PlayDealer,
    EndRound,
    ResetRound,
    ResetGame,
    ClearError,
}

/// Allowed next states for each phase. Any transition not listed here is
/// rejected; the error phase is additionally reachable from every state.
fn allowed_transitions(from: GamePhase) -> &'static [GamePhase] {
    match from {
        GamePhase::Betting => &[GamePhase::Dealing, GamePhase::Cleanup],
        GamePhase::Dealing => &[
            GamePhase::PlayerTurn,
            GamePhase::DealerTurn,
            GamePhase::Settlement,
        ],
        GamePhase::PlayerTurn => &[GamePhase::DealerTurn, GamePhase::Settlement],
        GamePhase::DealerTurn => &[GamePhase::Settlement],
        GamePhase::Settlement => &[GamePhase::Betting, GamePhase::Cleanup],
        GamePhase::Cleanup => &[GamePhase::Betting],
        // Controlled recovery only: clear_error / reset_game return to betting
        GamePhase::Error => &[GamePhase::Betting],
    }
}

/// Commands permitted while a phase is active.
pub fn phase_allows(phase: GamePhase, command: Command) -> bool {
    use Command as C;
    match phase {
        GamePhase::Betting => matches!(
            command,
            C::PlaceBet
                | C::IncreaseBet
                | C::ClearBet
                | C::PlaceSideBet
                | C::ClearSideBet
                | C::DealCards
        ),
        // Transitional: nothing is accepted mid-deal
        GamePhase::Dealing => false,
        GamePhase::PlayerTurn => matches!(
            command,
            C::Hit
                | C::Stand
                | C::DoubleDown
                | C::Split
                | C::Surrender
                | C::TakeInsurance
                | C::DeclineInsurance
        ),
        GamePhase::DealerTurn => matches!(command, C::PlayDealer),
        GamePhase::Settlement => matches!(command, C::EndRound),
        GamePhase::Cleanup => matches!(command, C::ResetRound | C::ResetGame),
        GamePhase::Error => matches!(command, C::ClearError | C::ResetGame),
    }
}

/// One accepted transition, appended to an append-only history. The reason
/// tag is caller-supplied metadata and never participates in legality.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhaseTransition {
    pub from: GamePhase,
    pub to: GamePhase,
    pub ts: String,
    pub reason: String,
}

/// Explicit transition-table state machine with recorded history.
///
/// A rejected transition leaves the machine in its current state and returns
/// [`EngineError::InvalidTransition`]; the caller retries with a legal move.
#[derive(Debug)]
pub struct PhaseMachine {
    current: GamePhase,
    history: Vec<PhaseTransition>,
}

impl PhaseMachine {
    pub fn new() -> Self {
        Self {
            current: GamePhase::Betting,
            history: Vec::new(),
        }
    }

    pub fn current(&self) -> GamePhase {
        self.current
    }

    pub fn history(&self) -> &[PhaseTransition] {
        &self.history
    }

    pub fn allows(&self, command: Command) -> bool {
        phase_allows(self.current, command)
    }

    pub fn can_transition(&self, to: GamePhase) -> bool {
        to == GamePhase::Error || allowed_transitions(self.current).contains(&to)
    }

    pub fn transition(&mut self, to: GamePhase, reason: &str) -> Result<(), EngineError> {
        if !self.can_transition(to) {
            return Err(EngineError::InvalidTransition {
                from: self.current,
                to,
            });
        }
        self.history.push(PhaseTransition {
            from: self.current,
            to,
            ts: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            reason: reason.to_string(),
        });
        self.current = to;
        Ok(())
    }
}

impl Default for PhaseMachine {
    fn default() -> Self {
        Self::new()
    }
}
