// crates/patch_props/src/processor/mod.rs

pub mod file_patcher;

pub use file_patcher::{DefaultFilePatcher, FilePatcher};
