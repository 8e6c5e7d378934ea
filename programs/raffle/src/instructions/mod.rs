pub mod enter_raffle;
pub mod fulfill_randomness;
pub mod initialize;
pub mod perform_upkeep;
pub mod views;

pub use enter_raffle::*;
pub use fulfill_randomness::*;
pub use initialize::*;
pub use perform_upkeep::*;
pub use views::*;
