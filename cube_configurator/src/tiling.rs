//! Splits a requested width into fixed-size segments and lays them out along X.

use std::num::NonZeroU32;

/// One slice of the requested width, positioned along the row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlacedSegment {
    pub index: usize,
    pub width: u32,
    /// Left edge of the segment.
    pub offset: u32,
}

/// Returns `ceil(width / unit)` segment widths. Every segment is `unit` wide
/// except the last, which takes the remainder. The widths sum to `width`.
pub fn tile_width(width: u32, unit: NonZeroU32) -> Vec<u32> {
    let unit = unit.get();
    let count = width.div_ceil(unit) as usize;
    let mut segments = vec![unit; count];
    if let Some(last) = segments.last_mut() {
        *last = width - (count as u32 - 1) * unit;
    }
    segments
}

/// Assigns each width a running offset with `spacing` between segments.
/// Offsets saturate at `u32::MAX` instead of wrapping.
pub fn place_segments(widths: &[u32], spacing: u32) -> Vec<PlacedSegment> {
    let mut offset = 0;
    widths
        .iter()
        .enumerate()
        .map(|(index, &width)| {
            let segment = PlacedSegment {
                index,
                width,
                offset,
            };
            offset = offset.saturating_add(width).saturating_add(spacing);
            segment
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit(n: u32) -> NonZeroU32 {
        NonZeroU32::new(n).unwrap()
    }

    #[test]
    fn known_widths() {
        assert_eq!(tile_width(60, unit(60)), vec![60]);
        assert_eq!(tile_width(90, unit(60)), vec![60, 30]);
        assert_eq!(tile_width(120, unit(60)), vec![60, 60]);
        assert_eq!(tile_width(61, unit(60)), vec![60, 1]);
    }

    #[test]
    fn narrow_width_is_single_segment() {
        assert_eq!(tile_width(30, unit(60)), vec![30]);
        assert_eq!(tile_width(1, unit(60)), vec![1]);
    }

    #[test]
    fn zero_width_has_no_segments() {
        assert!(tile_width(0, unit(60)).is_empty());
    }

    #[test]
    fn segments_cover_width_exactly() {
        let u = unit(60);
        for w in 30..=2_000 {
            let segments = tile_width(w, u);
            assert_eq!(segments.iter().sum::<u32>(), w, "width {w}");
            assert_eq!(segments.len() as u32, w.div_ceil(60), "width {w}");

            let last = *segments.last().unwrap();
            assert!(last > 0 && last <= 60, "width {w} last {last}");
            assert!(segments[..segments.len() - 1].iter().all(|&s| s == 60));
        }
    }

    #[test]
    fn offsets_skip_trailing_spacing() {
        let placed = place_segments(&[60, 60, 30], 5);
        let offsets: Vec<u32> = placed.iter().map(|s| s.offset).collect();
        assert_eq!(offsets, vec![0, 65, 130]);

        let last = placed.last().unwrap();
        assert_eq!(last.offset + last.width, 160);
        assert_eq!(last.index, 2);
    }

    #[test]
    fn offsets_saturate_instead_of_overflowing() {
        let placed = place_segments(&[u32::MAX - 10, 60, 60], 5);
        let offsets: Vec<u32> = placed.iter().map(|s| s.offset).collect();
        assert_eq!(offsets, vec![0, u32::MAX, u32::MAX]);
    }

    #[test]
    fn empty_layout() {
        assert!(place_segments(&[], 5).is_empty());
    }
}
