// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod salary;
pub mod expenses;
pub mod summary;
pub mod chart;
pub mod categories;
pub mod exporter;
pub mod importer;
pub mod reset;
