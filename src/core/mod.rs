pub mod challenge;
pub mod record;
pub mod registry;
pub mod solver;
