//! Fuel intake seam.
//!
//! Dropped files feed the flame: every 20 bytes of file size is worth one
//! Kelvin. The simulation only needs a file's size, so the filesystem is
//! abstracted behind [`FuelProbe`]; tests substitute fixed or failing probes
//! and the frontend passes [`FsProbe`].

use std::io;
use std::path::Path;
use thiserror::Error;

/// Reports the size of a would-be fuel file.
pub trait FuelProbe {
    /// Size of the file at `path` in bytes.
    fn size_of(&self, path: &Path) -> io::Result<u64>;
}

/// Standard-library probe backed by `std::fs::metadata`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsProbe;

impl FuelProbe for FsProbe {
    fn size_of(&self, path: &Path) -> io::Result<u64> {
        std::fs::metadata(path).map(|meta| meta.len())
    }
}

/// Why a fuel drop did not heat the flame.
///
/// All variants are recoverable: the simulation surfaces a status message
/// and keeps running.
#[derive(Debug, Error)]
pub enum FuelError {
    /// The same file was already thrown into the fire this round.
    #[error("this file has already been thrown into the fire")]
    Duplicate,

    /// The flame is out; only a reset helps now.
    #[error("the flame is extinguished and cannot take fuel")]
    Extinguished,

    /// The file's size could not be read. The file is not recorded as
    /// consumed, so the drop may be retried.
    #[error("could not read fuel file: {0}")]
    Unreadable(#[from] io::Error),
}

/// Result of an accepted fuel drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FuelGain {
    /// File size in bytes.
    pub bytes: u64,
    /// Temperature delta before clamping, in Kelvin.
    pub kelvin: i64,
}
