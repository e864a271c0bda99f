// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use repcast_core::EntityKind;
use thiserror::Error;

/// Result type for conversion operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while converting a representation item
///
/// Every variant is fatal to the item that raised it and to nothing else:
/// the router recovers by skipping the item and moving on.
#[derive(Error, Debug)]
pub enum Error {
    #[error("No conversion algorithm for {0}")]
    Unimplemented(EntityKind),

    #[error("Invalid item: {0}")]
    InvalidItem(String),

    #[error("Graph error: {0}")]
    Graph(#[from] repcast_core::Error),
}

impl Error {
    /// Shorthand for an invalid-item error with a formatted message
    pub fn invalid(msg: impl Into<String>) -> Self {
        Error::InvalidItem(msg.into())
    }
}
