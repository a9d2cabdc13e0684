//! Solutions implemented for Advent of Code 2023.
//!
//! Each submodule is one day's self-contained solution. A module registers
//! itself with [`#[register_puzzle]`][aoc_harness::registry::register_puzzle]
//! on its `Puzzle` type; the binary then finds it through
//! [`aoc_harness::registry::find_day`], so adding a day is just adding the
//! submodule here.

#![warn(clippy::dbg_macro, clippy::print_stderr, clippy::print_stdout)]

mod day01;
mod day02;
mod day03;
mod day04;
mod day05;
mod day06;
mod day07;
mod day08;
mod day09;
mod day10;
mod day11;
