pub mod game;

pub use game::{
    Direction, FoundWords, GeneratedGrid, Grid, Placement, Position, DIRECTIONS,
};
