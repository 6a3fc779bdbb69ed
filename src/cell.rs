use crate::attribute::Attribute;

/// One grid position: a byte plus the attribute it was written with.
/// Attribute changes never retroactively alter previously written cells,
/// so this pairing is captured at write time and never re-derived.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub chr: u8,
    pub attrib: Attribute,
}

impl Default for Cell {
    /// `{chr=NUL, attrib=default}` — what `Grid::clear` resets cells to.
    fn default() -> Self {
        Cell {
            chr: crate::c0::NUL,
            attrib: Attribute::default(),
        }
    }
}
