//! Domain modules, organized as vertical slices.
//!
//! Each domain owns its types, wire representations, conversions, and any
//! state containers, under one directory:
//!
//! - `coin/` — ranked coins: wire decoding, list state, async manager
//! - `favorites/` — persisted favorite coin ids with change notifications

pub mod coin;
pub mod favorites;
