// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message validation rules.

mod checker;

pub use checker::Checker;
