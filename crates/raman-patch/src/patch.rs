use std::fmt;
use std::str::FromStr;

use derive_new::new;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::document::ConfigDocument;
use crate::error::PatchError;
use crate::path::{BIFURCATION, SLAB_TRANSLATION, TargetPath};

/// Subtracted from the input to get `b` in offset mode.
pub const SCATTER_OFFSET: f64 = 50.0;
/// Laser line the material response was fitted against.
pub const PREDICTED_LASER: f64 = 2740.0 / 4.0;
/// Raman line paired with [`PREDICTED_LASER`].
pub const PREDICTED_RAMAN: f64 = 2360.0 / 4.0;

/// The single numeric argument of a patch. Always finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatchValue(f64);

impl PatchValue {
    pub fn new(value: f64) -> Result<Self, PatchError> {
        if value.is_finite() {
            Ok(Self(value))
        } else {
            Err(PatchError::InvalidArgument {
                value: value.to_string(),
                reason: "value must be finite".to_string(),
            })
        }
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl FromStr for PatchValue {
    type Err = PatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(PatchError::InvalidArgument {
                value: s.to_string(),
                reason: "expected a number".to_string(),
            });
        }

        let value = trimmed
            .parse::<f64>()
            .map_err(|e| PatchError::InvalidArgument {
                value: s.to_string(),
                reason: e.to_string(),
            })?;
        Self::new(value)
    }
}

/// How `b` is derived from the input in a scattering patch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum ScatterMode {
    /// `b = v - offset`
    Offset,
    /// `b = v / predicted_laser * predicted_raman`
    Ratio,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScatterConstants {
    pub offset: f64,
    pub predicted_laser: f64,
    pub predicted_raman: f64,
}

impl Default for ScatterConstants {
    fn default() -> Self {
        Self {
            offset: SCATTER_OFFSET,
            predicted_laser: PREDICTED_LASER,
            predicted_raman: PREDICTED_RAMAN,
        }
    }
}

impl ScatterConstants {
    pub fn coefficients(&self, mode: ScatterMode, value: PatchValue) -> BifurcationCoeffs {
        let v = value.get();
        let b = match mode {
            ScatterMode::Offset => v - self.offset,
            ScatterMode::Ratio => {
                let ratio = v / self.predicted_laser;
                ratio * self.predicted_raman
            }
        };
        BifurcationCoeffs { a: v, b }
    }
}

/// The `a`/`b` pair stored under `optics.scat_coeff.Bifurcation`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BifurcationCoeffs {
    pub a: f64,
    pub b: f64,
}

/// A field written by a patch and the value it now holds.
#[derive(new, Debug, Clone, PartialEq)]
pub struct Assignment {
    pub field: String,
    pub value: f64,
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.field, self.value)
    }
}

pub trait Patch {
    /// Where in the document this patch writes.
    fn target(&self) -> TargetPath;

    /// Rewrites the targeted scalars of `document` and leaves everything else alone.
    fn apply(&self, document: &mut ConfigDocument) -> Result<Vec<Assignment>, PatchError>;
}

/// Sets the Bifurcation scattering coefficients of a material.
#[derive(new, Debug, Clone, Copy, PartialEq)]
pub struct ScatterPatch {
    pub mode: ScatterMode,
    pub value: PatchValue,
    #[new(default)]
    pub constants: ScatterConstants,
}

impl ScatterPatch {
    pub fn with_constants(mut self, constants: ScatterConstants) -> Self {
        self.constants = constants;
        self
    }

    pub fn coefficients(&self) -> BifurcationCoeffs {
        self.constants.coefficients(self.mode, self.value)
    }
}

impl Patch for ScatterPatch {
    fn target(&self) -> TargetPath {
        BIFURCATION
    }

    fn apply(&self, document: &mut ConfigDocument) -> Result<Vec<Assignment>, PatchError> {
        let target = self.target();
        let coeffs = self.coefficients();
        let a = number(coeffs.a)?;
        let b = number(coeffs.b)?;

        let leaf = document.resolve_mut(&target)?;
        // Both fields are checked before either is written.
        let missing = ["a", "b"]
            .into_iter()
            .find(|name| !leaf.get(*name).is_some_and(Value::is_number));
        if let Some(name) = missing {
            return Err(document.missing(target.field(name)));
        }

        for (name, value) in [("a", a), ("b", b)] {
            if let Some(slot) = leaf.get_mut(name) {
                *slot = value;
            }
        }

        Ok(vec![
            Assignment::new(target.field("a"), coeffs.a),
            Assignment::new(target.field("b"), coeffs.b),
        ])
    }
}

/// Moves a slab surface along the first axis of its translation vector.
#[derive(new, Debug, Clone, Copy, PartialEq)]
pub struct SlabPatch {
    pub value: PatchValue,
}

impl Patch for SlabPatch {
    fn target(&self) -> TargetPath {
        SLAB_TRANSLATION
    }

    fn apply(&self, document: &mut ConfigDocument) -> Result<Vec<Assignment>, PatchError> {
        let target = self.target();
        let field = format!("{target}[0]");
        let value = number(self.value.get())?;

        let slot = match document.resolve_mut(&target)? {
            Value::Array(items) => items.first_mut().filter(|item| item.is_number()),
            _ => None,
        };
        match slot {
            Some(slot) => *slot = value,
            None => return Err(document.missing(field)),
        }

        Ok(vec![Assignment::new(field, self.value.get())])
    }
}

fn number(value: f64) -> Result<Value, PatchError> {
    Number::from_f64(value)
        .map(Value::Number)
        .ok_or_else(|| PatchError::InvalidArgument {
            value: value.to_string(),
            reason: "derived value is not finite".to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn value(v: f64) -> PatchValue {
        PatchValue::new(v).unwrap()
    }

    fn material(leaf: Value) -> ConfigDocument {
        ConfigDocument::from_value(
            "intralipid.json",
            json!({ "optics": { "scat_coeff": { "Bifurcation": leaf } } }),
        )
    }

    #[rstest]
    #[case("700", 700.0)]
    #[case(" -12.5 ", -12.5)]
    #[case("1e3", 1000.0)]
    fn patch_value_parses_numbers(#[case] input: &str, #[case] expected: f64) {
        assert_eq!(input.parse::<PatchValue>().unwrap().get(), expected);
    }

    #[rstest]
    #[case("abc")]
    #[case("")]
    #[case("   ")]
    #[case("NaN")]
    #[case("inf")]
    fn patch_value_rejects_garbage(#[case] input: &str) {
        let err = input.parse::<PatchValue>().unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn offset_mode_subtracts_constant() {
        let coeffs = ScatterConstants::default().coefficients(ScatterMode::Offset, value(700.0));
        assert_eq!(coeffs, BifurcationCoeffs { a: 700.0, b: 650.0 });
    }

    #[test]
    fn ratio_mode_at_laser_line_gives_raman_line() {
        let coeffs = ScatterConstants::default().coefficients(ScatterMode::Ratio, value(685.0));
        assert_eq!(coeffs, BifurcationCoeffs { a: 685.0, b: 590.0 });
    }

    #[test]
    fn ratio_mode_scales_proportionally() {
        let coeffs = ScatterConstants::default().coefficients(ScatterMode::Ratio, value(1370.0));
        assert_eq!(coeffs.b, (1370.0 / 685.0) * 590.0);
    }

    #[test]
    fn mode_names() {
        assert_eq!(ScatterMode::Offset.to_string(), "offset");
        assert_eq!("ratio".parse::<ScatterMode>().unwrap(), ScatterMode::Ratio);
    }

    #[test]
    fn scatter_patch_keeps_sibling_fields() {
        let mut doc = material(json!({ "kind": "fit", "a": 1.0, "b": 2.0, "c": 3.0 }));
        let assignments = ScatterPatch::new(ScatterMode::Offset, value(700.0))
            .apply(&mut doc)
            .unwrap();

        assert_eq!(
            doc.get(&BIFURCATION),
            Some(&json!({ "kind": "fit", "a": 700.0, "b": 650.0, "c": 3.0 }))
        );
        assert_eq!(assignments[0].to_string(), "optics.scat_coeff.Bifurcation.a = 700");
        assert_eq!(assignments[1].to_string(), "optics.scat_coeff.Bifurcation.b = 650");
    }

    #[test]
    fn scatter_patch_requires_both_fields() {
        let mut doc = material(json!({ "a": 1.0 }));
        let before = doc.clone();
        let err = ScatterPatch::new(ScatterMode::Ratio, value(685.0))
            .apply(&mut doc)
            .unwrap_err();

        match err {
            PatchError::MissingField { field, .. } => {
                assert_eq!(field, "optics.scat_coeff.Bifurcation.b")
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(doc, before);
    }

    #[test]
    fn scatter_patch_reports_missing_path_first() {
        let mut doc = ConfigDocument::from_value("m.json", json!({ "optics": {} }));
        let err = ScatterPatch::new(ScatterMode::Offset, value(1.0))
            .apply(&mut doc)
            .unwrap_err();
        match err {
            PatchError::MissingField { field, .. } => assert_eq!(field, "optics.scat_coeff"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn zero_laser_constant_is_rejected() {
        let constants = ScatterConstants {
            predicted_laser: 0.0,
            ..Default::default()
        };
        let mut doc = material(json!({ "a": 1.0, "b": 2.0 }));
        let err = ScatterPatch::new(ScatterMode::Ratio, value(10.0))
            .with_constants(constants)
            .apply(&mut doc)
            .unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn slab_patch_moves_first_component() {
        let mut doc = ConfigDocument::from_value(
            "slab.json",
            json!({ "mesh": "slab.obj", "trans": { "trans": [0.0, 1.0, 2.0], "rot": [0, 0, 0] } }),
        );
        let assignments = SlabPatch::new(value(-3.25)).apply(&mut doc).unwrap();

        assert_eq!(
            doc.root(),
            &json!({ "mesh": "slab.obj", "trans": { "trans": [-3.25, 1.0, 2.0], "rot": [0, 0, 0] } })
        );
        assert_eq!(assignments, vec![Assignment::new("trans.trans[0]".to_string(), -3.25)]);
    }

    #[rstest]
    #[case(json!({ "trans": { "trans": [] } }))]
    #[case(json!({ "trans": { "trans": "x" } }))]
    #[case(json!({ "trans": { "trans": ["x", 1.0] } }))]
    #[case(json!({ "trans": {} }))]
    fn slab_patch_rejects_bad_translation(#[case] root: Value) {
        let mut doc = ConfigDocument::from_value("slab.json", root);
        let err = SlabPatch::new(value(1.0)).apply(&mut doc).unwrap_err();
        assert!(err.is_missing_field());
    }
}
