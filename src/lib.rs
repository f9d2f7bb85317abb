// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod chart;
pub mod cli;
pub mod commands;
pub mod db;
pub mod logging;
pub mod models;
pub mod money;
pub mod persistence;
pub mod report;
pub mod store;
pub mod totals;
pub mod utils;
