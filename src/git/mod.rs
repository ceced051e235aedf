// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Git integration module.

mod repo;

pub use repo::Repository;
