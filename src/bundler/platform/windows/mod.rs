//! Windows bundling support.
//!
//! # Supported Formats
//!
//! - **Inno Setup Installer (.exe)**: via [`inno`] module using `ISCC.exe`

pub mod inno;
