pub mod movement;
pub mod rules;
pub mod spawn;

pub use movement::*;
pub use rules::*;
pub use spawn::*;
