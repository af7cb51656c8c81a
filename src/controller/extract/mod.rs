pub mod live;
pub mod player;
pub mod rules;
pub mod schedule;

pub use live::extract_live;
pub use player::extract_player;
pub use schedule::extract_schedule;
