// src/tournament/mod.rs

pub mod lobby;
pub mod runtime;

pub use lobby::{LobbyError, TournamentLobby};
pub use runtime::TournamentRuntime;
