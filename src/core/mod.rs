pub mod config;
pub mod error;
pub mod types;

pub use config::{load_config, BattleConfig};
pub use error::{ClashError, Result};
pub use types::{ArmySide, Round, SoldierId};
