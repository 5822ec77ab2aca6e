//! Patch numeric fields of the JSON inputs used by the Raman Monte-Carlo runs.
//!
//! A patch loads one document, rewrites the scalars at a fixed [`TargetPath`]
//! and saves the document back over the same file with its key order intact.

mod document;
mod error;
mod patch;
mod patcher;
mod path;

pub use document::{ConfigDocument, OutputStyle};
pub use error::{InputError, PatchError};
pub use patch::{
    Assignment, BifurcationCoeffs, PREDICTED_LASER, PREDICTED_RAMAN, Patch, PatchValue,
    SCATTER_OFFSET, ScatterConstants, ScatterMode, ScatterPatch, SlabPatch,
};
pub use patcher::{ConfigPatcher, PatchReport};
pub use path::{BIFURCATION, PathSegment, SLAB_TRANSLATION, TargetPath};

/// Default material file holding the Bifurcation coefficients.
pub const MATERIAL_PATH: &str = "input/raman/materials/intralipid.json";
/// Default surface file holding the slab translation.
pub const SLAB_PATH: &str = "input/raman/surfaces/slab.json";
