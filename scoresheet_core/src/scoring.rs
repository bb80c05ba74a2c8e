pub mod coercion;
pub mod leaderboard;
pub mod ledger;
pub mod players;

pub use coercion::*;
pub use leaderboard::*;
pub use ledger::*;
pub use players::*;
