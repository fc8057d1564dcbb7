pub mod bodies;
pub mod camera;
pub mod input;
pub mod orbit;
pub mod ui;
