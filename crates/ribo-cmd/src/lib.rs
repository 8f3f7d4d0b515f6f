//! ribo-align command-line host
//!
//! Wires the alignment core to trajectory files:
//!
//! - **settings**: TOML-backed [`AlignSettings`] with command-line overrides
//! - **prepare**: centralise or align the first frame of a loaded trajectory
//! - **commands**: the `center` and `align` operations behind the binary
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use ribo_cmd::{commands, AlignSettings};
//!
//! let report = commands::align(
//!     Path::new("incoming.xyz"),
//!     Path::new("reference.xyz"),
//!     Path::new("aligned.xyz"),
//!     &AlignSettings::default(),
//! )?;
//! println!("{report}");
//! # Ok::<(), ribo_cmd::CmdError>(())
//! ```

pub mod commands;
mod error;
pub mod prepare;
pub mod settings;

pub use error::{CmdError, CmdResult};
pub use prepare::{prepare_trajectory, Preparation, Prepared};
pub use settings::AlignSettings;
