//! Architecture-specific implementations.
//!
//! This module provides the hardware side of the console: video memory, the
//! interrupt controllers, the keyboard port and the serial log.
//! Currently supported: x86_64.

#[cfg(target_arch = "x86_64")]
pub mod x86_64;
