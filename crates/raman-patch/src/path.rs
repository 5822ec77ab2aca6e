use std::fmt;

/// One step into a JSON document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathSegment {
    Key(&'static str),
    Index(usize),
}

/// Static location of the value a patch rewrites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetPath {
    segments: &'static [PathSegment],
}

/// Scattering coefficients of a material file.
pub const BIFURCATION: TargetPath = TargetPath::new(&[
    PathSegment::Key("optics"),
    PathSegment::Key("scat_coeff"),
    PathSegment::Key("Bifurcation"),
]);

/// Translation vector of a surface file.
pub const SLAB_TRANSLATION: TargetPath =
    TargetPath::new(&[PathSegment::Key("trans"), PathSegment::Key("trans")]);

impl TargetPath {
    pub const fn new(segments: &'static [PathSegment]) -> Self {
        Self { segments }
    }

    pub fn segments(&self) -> &'static [PathSegment] {
        self.segments
    }

    /// The first `len` segments, clamped to the path length.
    pub fn prefix(&self, len: usize) -> TargetPath {
        TargetPath::new(&self.segments[..len.min(self.segments.len())])
    }

    /// Dotted name of a field below this path, e.g. `optics.scat_coeff.Bifurcation.a`.
    pub fn field(&self, name: &str) -> String {
        if self.segments.is_empty() {
            name.to_string()
        } else {
            format!("{self}.{name}")
        }
    }
}

impl fmt::Display for TargetPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Key(key) if i == 0 => write!(f, "{key}")?,
                PathSegment::Key(key) => write!(f, ".{key}")?,
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}
