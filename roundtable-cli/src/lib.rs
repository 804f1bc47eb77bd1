//! Baked-in meeting variants for the roundtable pipeline.
//!
//! Each variant fixes a topic, four roles, five stages, a model, and an
//! output filename; the binaries in `src/bin/` are thin wrappers that pick
//! a variant and hand it to [`launch::launch`].

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, missing_docs, rust_2018_idioms)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]

pub mod launch;
pub mod meetings;
