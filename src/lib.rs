// Copyright 2026 Gridmap Contributors
// SPDX-License-Identifier: Apache-2.0

//! Gridmap runtime library — acquisition pipeline for power-grid map data.
//!
//! Fetches the geographic layers of a network (buses, transmission lines)
//! from the analysis service, absorbs the cached-vs-background-task split
//! behind a uniform tabular result, and derives the map layer configuration
//! the viewer renders.

pub mod acquisition;
pub mod config;
pub mod error;
pub mod map;
pub mod session;
