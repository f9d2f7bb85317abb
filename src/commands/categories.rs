// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::Category;
use crate::utils::pretty_table;
use anyhow::Result;

pub fn handle() -> Result<()> {
    let data = Category::ALL
        .into_iter()
        .map(|c| vec![c.id().to_string(), c.name().to_string(), c.color().to_string()])
        .collect();
    println!("{}", pretty_table(&["ID", "Category", "Color"], data));
    Ok(())
}
