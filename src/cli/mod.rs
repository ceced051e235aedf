// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command-line interface.

pub mod args;
mod dispatch;

pub use args::Cli;
pub use dispatch::run;
