//! Four small terminal games on one room/collision core: a multi-room
//! explorer, a point-and-click scene, a hybrid of the two, and a combat
//! arena.

pub mod combat;
pub mod config;
pub mod controller;
pub mod display;
pub mod entities;
pub mod error;
pub mod geometry;
pub mod input;
pub mod levels;
pub mod movement;
pub mod render;
pub mod room;
pub mod timer;
