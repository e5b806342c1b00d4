// Copyright 2026 Gridmap Contributors
// SPDX-License-Identifier: Apache-2.0

//! CLI command implementations.

pub mod config_cmd;
pub mod view_cmd;
