pub mod ai;
pub mod anti_stick;
pub mod collision;
pub mod control;
pub mod kinematics;
pub mod respawn;
pub mod scoring;
pub mod timers;
pub mod ultimate;

pub use ai::{drive_ai, AiBrain};
pub use anti_stick::*;
pub use collision::*;
pub use control::*;
pub use kinematics::*;
pub use respawn::*;
pub use scoring::*;
pub use timers::*;
pub use ultimate::*;
