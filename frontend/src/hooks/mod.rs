pub mod use_entries;
pub mod use_tally;

pub use use_entries::*;
pub use use_tally::*;
