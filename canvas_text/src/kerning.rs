// Copyright 2025 the Canvas Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pair kerning without shaping.
//!
//! Pair adjustment lookups of the `kern` feature in `GPOS` are used when the font has any for
//! the default or Latin script. Otherwise the legacy `kern` table is read.

use skrifa::raw::tables::gpos::{Gpos, PairPos, PositionSubtables, ValueContext};
use skrifa::raw::tables::kern::{Kern, Subtable, SubtableKind};
use skrifa::raw::types::Tag;
use skrifa::raw::{ReadError, TableProvider};
use skrifa::{FontRef, GlyphId};

const KERN_FEATURE: Tag = Tag::new(b"kern");

/// Scripts whose default language system provides the kerning lookups, in order.
const SCRIPTS: [Tag; 2] = [Tag::new(b"DFLT"), Tag::new(b"latn")];

// OpenType `kern` subtable coverage bits that have no accessor on `Subtable`.
const OT_MINIMUM: u16 = 0x2;
const OT_OVERRIDE: u16 = 0x8;

#[derive(Clone)]
pub(crate) enum PairKerning<'a> {
    /// Pair positioning subtables in lookup order.
    Gpos(Vec<PairPos<'a>>),
    Kern(Kern<'a>),
    None,
}

impl<'a> PairKerning<'a> {
    pub(crate) fn new(font: &FontRef<'a>) -> Self {
        match font.gpos().and_then(|gpos| pair_subtables(&gpos)) {
            Ok(subtables) if !subtables.is_empty() => return Self::Gpos(subtables),
            Ok(_) | Err(ReadError::TableIsMissing(_)) => {}
            Err(err) => log::debug!("ignoring GPOS kerning: {err}"),
        }
        match font.kern() {
            Ok(kern) => Self::Kern(kern),
            Err(_) => Self::None,
        }
    }

    /// Name of the table kerning is read from.
    pub(crate) fn source(&self) -> Option<&'static str> {
        match self {
            Self::Gpos(_) => Some("GPOS"),
            Self::Kern(_) => Some("kern"),
            Self::None => None,
        }
    }

    /// Returns the adjustment to the advance of `left` when followed by `right`, in font
    /// units.
    pub(crate) fn value(&self, left: GlyphId, right: GlyphId) -> i32 {
        match self {
            Self::Gpos(subtables) => subtables
                .iter()
                .find_map(|subtable| pair_adjustment(subtable, left, right))
                .unwrap_or(0),
            Self::Kern(kern) => legacy_kerning(kern, left, right),
            Self::None => 0,
        }
    }
}

/// Collects the pair positioning subtables of the `kern` feature.
fn pair_subtables<'a>(gpos: &Gpos<'a>) -> Result<Vec<PairPos<'a>>, ReadError> {
    let lookups = gpos.lookup_list()?.lookups();
    let mut subtables = Vec::new();
    for index in kern_lookup_indices(gpos)? {
        if let PositionSubtables::Pair(pairs) = lookups.get(usize::from(index))?.subtables()? {
            for subtable in pairs.iter() {
                subtables.push(subtable?);
            }
        }
    }
    Ok(subtables)
}

/// Lookup indices of the `kern` feature for the first script in [`SCRIPTS`] that has any.
fn kern_lookup_indices(gpos: &Gpos<'_>) -> Result<Vec<u16>, ReadError> {
    let scripts = gpos.script_list()?;
    let features = gpos.feature_list()?;
    for tag in SCRIPTS {
        let Some(record) = scripts
            .script_records()
            .iter()
            .find(|record| record.script_tag() == tag)
        else {
            continue;
        };
        let script = record.script(scripts.offset_data())?;
        let Some(lang_sys) = script.default_lang_sys().transpose()? else {
            continue;
        };
        let mut indices = Vec::new();
        for feature_index in lang_sys.feature_indices() {
            let Some(feature) = features
                .feature_records()
                .get(usize::from(feature_index.get()))
            else {
                continue;
            };
            if feature.feature_tag() == KERN_FEATURE {
                let feature = feature.feature(features.offset_data())?;
                indices.extend(feature.lookup_list_indices().iter().map(|index| index.get()));
            }
        }
        if !indices.is_empty() {
            indices.sort_unstable();
            indices.dedup();
            return Ok(indices);
        }
    }
    Ok(Vec::new())
}

/// Returns the x advance adjustment of the first glyph, or `None` if `subtable` does not
/// cover the pair.
fn pair_adjustment(subtable: &PairPos<'_>, left: GlyphId, right: GlyphId) -> Option<i32> {
    match subtable {
        PairPos::Format1(pairs) => {
            let index = pairs.coverage().ok()?.get(left)?;
            let set = pairs.pair_sets().get(usize::from(index)).ok()?;
            set.pair_value_records()
                .iter()
                .filter_map(Result::ok)
                .find(|record| GlyphId::from(record.second_glyph()) == right)
                .map(|record| record.value_record1().x_advance().unwrap_or(0).into())
        }
        PairPos::Format2(classes) => {
            classes.coverage().ok()?.get(left)?;
            let class1 = classes.class_def1().ok()?.get(left);
            let class2 = classes.class_def2().ok()?.get(right);
            let [first, _] = classes
                .values(class1, class2, &ValueContext::default())
                .ok()?;
            Some(first.x_advance.into())
        }
    }
}

/// Sums the horizontal subtables of a `kern` table.
fn legacy_kerning(kern: &Kern<'_>, left: GlyphId, right: GlyphId) -> i32 {
    let mut value = 0;
    for subtable in kern.subtables().filter_map(Result::ok) {
        if !subtable.is_horizontal() || subtable.is_cross_stream() || subtable.is_variable() {
            continue;
        }
        let coverage = match &subtable {
            Subtable::Ot(ot) => ot.coverage(),
            Subtable::Aat(_) => 0,
        };
        if coverage & OT_MINIMUM != 0 {
            continue;
        }
        let adjustment = match subtable.kind() {
            Ok(SubtableKind::Format0(pairs)) => pairs.kerning(left, right),
            Ok(SubtableKind::Format2(classes)) => classes.kerning(left, right),
            _ => None,
        };
        match adjustment {
            Some(adjustment) if coverage & OT_OVERRIDE != 0 => value = adjustment,
            Some(adjustment) => value += adjustment,
            None => {}
        }
    }
    value
}

#[cfg(test)]
mod tests {
    use super::PairKerning;
    use skrifa::GlyphId;
    use skrifa::raw::tables::kern::Kern;
    use skrifa::raw::{FontData, FontRead};

    /// Builds an OpenType `kern` table of format 0 subtables from `(coverage, pairs)`.
    fn ot_table(subtables: &[(u16, &[(u16, u16, i16)])]) -> Vec<u8> {
        let mut data = Vec::new();
        data.extend(0_u16.to_be_bytes());
        data.extend(u16::try_from(subtables.len()).unwrap().to_be_bytes());
        for &(coverage, pairs) in subtables {
            let count = u16::try_from(pairs.len()).unwrap();
            data.extend(0_u16.to_be_bytes());
            data.extend((14 + 6 * count).to_be_bytes());
            data.extend(coverage.to_be_bytes());
            // The binary search header is not used when reading.
            for value in [count, 0, 0, 0] {
                data.extend(value.to_be_bytes());
            }
            for &(left, right, value) in pairs {
                data.extend(left.to_be_bytes());
                data.extend(right.to_be_bytes());
                data.extend(value.to_be_bytes());
            }
        }
        data
    }

    fn kerning(data: &[u8], left: u32, right: u32) -> i32 {
        let kern = Kern::read(FontData::new(data)).unwrap();
        PairKerning::Kern(kern).value(GlyphId::new(left), GlyphId::new(right))
    }

    #[test]
    fn subtables_accumulate_unless_overriding() {
        let data = ot_table(&[
            (0x0001, &[(1, 2, -50)]),
            (0x0001, &[(1, 2, -10), (4, 4, 8)]),
        ]);
        assert_eq!(kerning(&data, 1, 2), -60);
        assert_eq!(kerning(&data, 4, 4), 8);
        assert_eq!(kerning(&data, 2, 1), 0);

        let data = ot_table(&[(0x0001, &[(1, 2, -50)]), (0x0009, &[(1, 2, -10)])]);
        assert_eq!(kerning(&data, 1, 2), -10);
    }

    #[test]
    fn vertical_minimum_and_cross_stream_subtables_are_skipped() {
        let pairs: &[(u16, u16, i16)] = &[(1, 2, -50)];
        for coverage in [0x0000, 0x0003, 0x0005] {
            let data = ot_table(&[(coverage, pairs)]);
            assert_eq!(kerning(&data, 1, 2), 0, "coverage {coverage:#06x}");
        }
    }

    #[test]
    fn glyphs_beyond_16_bits_do_not_kern() {
        let data = ot_table(&[(0x0001, &[(1, 2, -50)])]);
        assert_eq!(kerning(&data, (1 << 16) | 1, 2), 0);
    }
}
