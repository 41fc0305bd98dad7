//! Rating records and the rating line parser.
//!
//! This module contains:
//! - `SpecialRating` - symbolic ratings (`PASS`, `++`, `--`, `!`, `*`, `#`, `<`, `$`)
//! - `RatingRecord`, `SongInfo`, `ScoreKind` - one parsed rating line
//! - `parse_line` - the rating line grammar

mod parser;
mod record;
mod special;

pub use parser::*;
pub use record::*;
pub use special::*;
