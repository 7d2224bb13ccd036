pub mod item;

pub use item::{Item, MAX_TEXT_LEN};
