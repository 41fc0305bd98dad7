//! Song folders and their step charts.
//!
//! This module contains:
//! - `ChartField` - chart header tags collected into the batch CSV
//! - `FolderName` - title and stepartist parsed from a song folder name
//! - `ChartFile` - `.sm`/`.dwi` lookup, decoding and header scanning

mod chart;
mod field;
mod folder;

pub use chart::*;
pub use field::*;
pub use folder::*;
