pub mod ability_effects;
pub mod accuracy;
pub mod conditions;
pub mod damage;
pub mod engine;
pub mod move_effects;
pub mod order;
pub mod state;
pub mod stats;

#[cfg(test)]
mod tests;
