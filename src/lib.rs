//! # Pinpack Core Library
//!
//! This crate contains the core logic of the `pinpack` tool – a single-shot
//! command that forces dependency versions inside a `package.json` manifest
//! and records every override in the manifest's `resolutions` section.
//!
//! Packages already listed under `dependencies` or `devDependencies` get
//! their version constraint overwritten; packages listed nowhere still end
//! up pinned under `resolutions`. The manifest is rewritten in place with
//! its key order intact.
//!
//! This library is built for the `pinpack` CLI, but you can also reuse it
//! as a backend in other tools.
//!
//! ## Modules Overview
//! - [`manifest`] – Loading, mutating, and serializing `package.json` manifests
//! - [`patch`] – Override pairs and the single-shot patch entry point

pub mod manifest;
pub mod patch;

pub use manifest::*;
pub use patch::*;
