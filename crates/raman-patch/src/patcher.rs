use std::fmt;
use std::path::{Path, PathBuf};

use derive_new::new;

use crate::document::{ConfigDocument, OutputStyle};
use crate::error::PatchError;
use crate::patch::{Assignment, Patch};
use crate::path::TargetPath;

/// Loads a document, applies one patch and writes it back to the same file.
#[derive(new, Debug, Clone, Copy, Default)]
pub struct ConfigPatcher {
    style: OutputStyle,
}

impl ConfigPatcher {
    /// Nothing is written unless the whole patch applies.
    pub fn apply<P: Patch + ?Sized>(
        &self,
        path: impl AsRef<Path>,
        patch: &P,
    ) -> Result<PatchReport, PatchError> {
        let mut document = ConfigDocument::load(path)?;
        let target = patch.target();
        log::debug!("Patching {} in {}", target, document.path().display());

        let assignments = patch.apply(&mut document)?;
        document.save(self.style)?;

        let report = PatchReport::new(document.path().to_path_buf(), target, assignments);
        log::debug!("{report}");
        Ok(report)
    }
}

/// What a successful patch changed.
#[derive(new, Debug, Clone, PartialEq)]
pub struct PatchReport {
    pub path: PathBuf,
    pub target: TargetPath,
    pub assignments: Vec<Assignment>,
}

impl fmt::Display for PatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Patched {}:", self.path.display())?;
        for (i, assignment) in self.assignments.iter().enumerate() {
            let sep = if i == 0 { " " } else { ", " };
            write!(f, "{sep}{assignment}")?;
        }
        Ok(())
    }
}
