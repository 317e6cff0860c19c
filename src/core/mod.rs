pub mod capsule;
pub mod habits;
pub mod workouts;
