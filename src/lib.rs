pub mod config;
pub mod geometry;
pub mod kinematics;
pub mod state;
pub mod view;
