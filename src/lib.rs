#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod core;
#[cfg(feature = "std")]
mod logging;
pub mod player;
pub mod prelude;
#[cfg(feature = "std")]
pub mod session;

pub use crate::core::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use player::*;
#[cfg(feature = "std")]
pub use session::{Command, Frontend, Session, SessionConfig};
