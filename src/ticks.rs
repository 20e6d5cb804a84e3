//! Tick layout for the ruler scale.
//!
//! A mark is drawn every millimetre over the full 150 mm run. Marks at
//! 5 mm multiples are taller, marks at centimetre boundaries are tallest
//! and carry a numeric label.

use crate::constants::RULER_LENGTH_MM;

/// Visual weight of a tick mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickKind {
    /// Plain 1 mm mark.
    Minor,
    /// Half-centimetre mark.
    Median,
    /// Centimetre mark, drawn with a numeric label.
    Major,
}

/// A single mark on the ruler scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    /// Distance from the origin in millimetres.
    pub mm: u32,
    /// Visual weight of the mark.
    pub kind: TickKind,
}

impl Tick {
    /// Offset of this mark from the scale origin, in logical points.
    pub fn offset_points(&self, points_per_mm: f64) -> f32 {
        (self.mm as f64 * points_per_mm) as f32
    }

    /// Centimetre value to print at this mark, for major ticks only.
    pub fn label(&self) -> Option<u32> {
        match self.kind {
            TickKind::Major => Some(self.mm / 10),
            _ => None,
        }
    }
}

/// Classifies a millimetre position on the scale.
pub fn kind_for_mm(mm: u32) -> TickKind {
    if mm % 10 == 0 {
        TickKind::Major
    } else if mm % 5 == 0 {
        TickKind::Median
    } else {
        TickKind::Minor
    }
}

/// All marks on the scale, from the origin through 150 mm inclusive.
pub fn scale_ticks() -> Vec<Tick> {
    (0..=RULER_LENGTH_MM)
        .map(|mm| Tick {
            mm,
            kind: kind_for_mm(mm),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_has_a_tick_per_millimetre() {
        assert_eq!(scale_ticks().len(), RULER_LENGTH_MM as usize + 1);
    }

    #[test]
    fn fifteen_major_ticks_plus_origin() {
        let majors: Vec<_> = scale_ticks()
            .into_iter()
            .filter(|t| t.kind == TickKind::Major)
            .collect();
        assert_eq!(majors.len(), 16);
        let labels: Vec<_> = majors.iter().filter_map(Tick::label).collect();
        assert_eq!(labels, (0u32..=15).collect::<Vec<_>>());
    }

    #[test]
    fn tick_kinds_follow_millimetre_position() {
        assert_eq!(kind_for_mm(0), TickKind::Major);
        assert_eq!(kind_for_mm(5), TickKind::Median);
        assert_eq!(kind_for_mm(7), TickKind::Minor);
        assert_eq!(kind_for_mm(10), TickKind::Major);
        assert_eq!(kind_for_mm(145), TickKind::Median);
        assert_eq!(kind_for_mm(150), TickKind::Major);
    }

    #[test]
    fn tick_spacing_is_uniform() {
        let points_per_mm = 3.7801;
        let offsets: Vec<f32> = scale_ticks()
            .iter()
            .map(|t| t.offset_points(points_per_mm))
            .collect();
        for pair in offsets.windows(2) {
            let spacing = pair[1] - pair[0];
            assert!((spacing - points_per_mm as f32).abs() < 1e-3);
        }
    }

    #[test]
    fn minor_ticks_carry_no_label() {
        let tick = Tick {
            mm: 3,
            kind: kind_for_mm(3),
        };
        assert_eq!(tick.label(), None);
    }
}
