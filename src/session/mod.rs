//! Game session management
//!
//! The `GameSession` finite-state machine owns one round of the game:
//! landing → recording → analyzing → results → (reset) → landing,
//! with narration side effects at the transitions and the acceptance
//! gates guarding the network.

mod config;
mod session;

pub use config::SessionConfig;
pub use session::{GameSession, Phase};
