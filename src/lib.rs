//! # Introduction
//!
//! sortty animates classic sorting algorithms as a bar chart in the terminal.
//! Each algorithm is instrumented to record a step log, a linear list of
//! `compare`, `overwrite` and `swap` operations against index positions. A
//! single replay driver then applies that log one step per tick to its own
//! copy of the array, whichever algorithm produced it.
//!
//! ## Pipeline
//!
//! ```text
//! Array → Generator → StepLog → ReplayDriver → Frames → TUI
//!                        ↕
//!                      Store
//! ```
//!
//! 1. [`algorithm`]: the closed set of five sorts, with names, complexity
//!    labels and pseudocode.
//! 2. [`generator`]: runs a sort on a private copy of the input and records
//!    every primitive operation into a [`steps::StepLog`].
//! 3. [`steps`]: the [`steps::Step`] records, their JSON shape and
//!    validation against an array length.
//! 4. [`driver`]: [`driver::ReplayDriver`], the play/pause/reset session that
//!    applies one step per tick behind a cancellable timer.
//! 5. [`store`]: saving, listing, loading and deleting step logs.
//! 6. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! ## Supported algorithms
//!
//! Merge sort (stable, top-down), quick sort (Lomuto, last-element pivot),
//! bubble sort (all passes), selection sort, insertion sort.

pub mod algorithm;
pub mod config;
pub mod driver;
pub mod errors;
pub mod generator;
pub mod steps;
pub mod store;
pub mod telemetry;
pub mod ui;
