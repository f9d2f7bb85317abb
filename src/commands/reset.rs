// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::persistence::SnapshotGateway;
use anyhow::Result;

/// Drop the stored snapshot; the next command starts from the first-run state.
pub fn handle(gateway: &dyn SnapshotGateway) -> Result<()> {
    gateway.clear()?;
    println!("Data cleared.");
    Ok(())
}
