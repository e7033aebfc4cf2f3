pub(crate) mod actor;
pub(crate) mod config;
pub(crate) mod direction;
pub(crate) mod geometry;
pub(crate) mod input;
pub(crate) mod paths;
pub(crate) mod render;
pub(crate) mod scene;
pub(crate) mod wrap;

pub mod game_app;
pub mod logging;
