//! Orrery application: the metadata service, the headless animation driver
//! and the command-line metadata lookup.

pub mod commands;
pub mod game_loop;
pub mod platform;
