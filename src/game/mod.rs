pub mod grid;
pub mod round;
pub mod validator;

pub use grid::GridGenerator;
pub use round::{RoundState, RoundStatus};
pub use validator::SelectionValidator;
