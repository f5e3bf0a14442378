//! dtgen library exports.
//!
//! The pipeline, in order:
//! - `dump` loads the file list of a firmware dump
//! - `partition` discovers partitions and assigns files to them
//! - `blobs` vetoes files the AOSP build already provides
//! - `sections` groups the remaining blobs
//! - `proprietary_files` renders the grouped list
//!
//! `devicetree` runs all of it and writes the output folder.

pub mod blobs;
pub mod common;
pub mod config;
pub mod device_info;
pub mod devicetree;
pub mod dump;
pub mod error;
pub mod fstab;
pub mod logging;
pub mod partition;
pub mod proprietary_files;
pub mod props;
pub mod sections;

pub use devicetree::DeviceTree;
pub use error::{DtError, Result};
