//! Army Clash - two randomly recruited armies fight until one is wiped out

pub mod battle;
pub mod core;
