// Copyright 2026 Gridmap Contributors
// SPDX-License-Identifier: Apache-2.0

//! The acquisition pipeline.
//!
//! One cycle fans out a fetch per geographic layer, absorbs the service's
//! cached-vs-background-task response split, and assembles the non-empty
//! results into a dataset collection.

pub mod classifier;
pub mod fetcher;
pub mod http_client;
pub mod orchestrator;
pub mod poller;
