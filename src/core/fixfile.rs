//! Fixfile directory layouts
//!
//! Coefficient files live under `fix/` in per-category directories, each
//! holding one subdirectory per byte order. The directory set changed after
//! the v2.0.x series, so both layouts are kept.

/// Byte-order subdirectories copied under every fixfile directory
pub const FIXFILE_FORMATS: [&str; 2] = ["Big_Endian", "Little_Endian"];

const LEGACY_DIRS: [&str; 6] = [
  "TauCoeff/ODAS",
  "TauCoeff/ODPS",
  "SpcCoeff",
  "AerosolCoeff",
  "CloudCoeff",
  "EmisCoeff",
];

const CURRENT_DIRS: [&str; 14] = [
  "TauCoeff/ODAS",
  "TauCoeff/ODPS",
  "SpcCoeff",
  "AerosolCoeff",
  "CloudCoeff",
  "EmisCoeff/IR_Ice/SEcategory",
  "EmisCoeff/IR_Land/SEcategory",
  "EmisCoeff/IR_Snow/SEcategory",
  "EmisCoeff/IR_Water",
  "EmisCoeff/MW_Water",
  "EmisCoeff/VIS_Ice/SEcategory",
  "EmisCoeff/VIS_Land/SEcategory",
  "EmisCoeff/VIS_Snow/SEcategory",
  "EmisCoeff/VIS_Water/SEcategory",
];

/// Which fixfile directory structure a release uses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FixfileLayout {
  /// v2.0.x structure
  Legacy,
  #[default]
  Current,
}

impl FixfileLayout {
  /// Relative directories under `fix/`, in copy order
  pub fn dirs(self) -> &'static [&'static str] {
    match self {
      FixfileLayout::Legacy => &LEGACY_DIRS,
      FixfileLayout::Current => &CURRENT_DIRS,
    }
  }

  /// Number of copies the fixfile tree needs (directories x formats)
  pub fn copy_count(self) -> usize {
    self.dirs().len() * FIXFILE_FORMATS.len()
  }
}
