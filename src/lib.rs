//! Reusable puzzle cores for the Advent of Code 2023 solutions.
//!
//! Two of the 2023 puzzles carry algorithms worth keeping as a library
//! rather than burying in a day module:
//!
//! - [`pipes`] traces the closed pipe loop of a 2-D grid and classifies
//!   every other cell as inside or outside the loop by ray casting.
//! - [`remap`] composes chained interval-remapping stages and searches them
//!   forward and backward, including a boundary-candidate minimum search
//!   that avoids enumerating billions of seeds.
//!
//! The binary's day modules (`day10`, `day05`) are thin consumers of these.

#![warn(clippy::pedantic)]
#![warn(
    clippy::allow_attributes,
    clippy::collection_is_never_read,
    clippy::equatable_if_let,
    clippy::needless_collect,
    clippy::use_self
)]

pub mod pipes;
pub mod remap;
