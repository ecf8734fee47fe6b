use std::ops::Range;

use itertools::Itertools;
use serde::Deserialize;
use serde::Serialize;

/// One solid-colored run of the path, covering `range` of coordinate
/// indices.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct StrokeSpan {
    pub range: Range<usize>,
    pub color: palette::Srgba<u8>,
}

/// How the stroke is colored: one color for the whole path, or a palette
/// rendered as consecutive solid segments. The two modes are a tagged
/// choice so that "both at once" is unrepresentable.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum StrokePaint {
    Uniform(palette::Srgba<u8>),
    /// Invariant: at least two colors.
    Gradient(Vec<palette::Srgba<u8>>),
}

impl StrokePaint {
    /// Resolves the declarative color fields: a palette of two or more
    /// colors wins over the uniform color, which wins over the fallback.
    /// A palette of fewer than two entries is ignored.
    pub fn resolve(
        color: Option<palette::Srgba<u8>>,
        colors: &[palette::Srgba<u8>],
        fallback: palette::Srgba<u8>,
    ) -> Self {
        if colors.len() >= 2 {
            Self::Gradient(colors.to_vec())
        } else {
            Self::Uniform(color.unwrap_or(fallback))
        }
    }

    /// Partitions a path of `point_count` coordinates into solid spans.
    ///
    /// A gradient of k colors yields k - 1 spans; span i covers coordinate
    /// indices `[i * n / (k - 1), (i + 1) * n / (k - 1))` and takes the
    /// i-th palette color. An empty path has no spans in either mode.
    pub fn spans(&self, point_count: usize) -> Vec<StrokeSpan> {
        if point_count == 0 {
            return Vec::new();
        }
        match self {
            Self::Uniform(color) => vec![StrokeSpan {
                range: 0..point_count,
                color: *color,
            }],
            Self::Gradient(colors) => {
                debug_assert!(colors.len() >= 2);
                let segments = colors.len() - 1;
                (0..=segments)
                    .map(|index| index * point_count / segments)
                    .tuple_windows()
                    .zip(colors)
                    .map(|((start, end), color)| StrokeSpan {
                        range: start..end,
                        color: *color,
                    })
                    .collect()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::BLACK;
    use crate::palette::BLUE;
    use crate::palette::GREEN;
    use crate::palette::RED;

    #[test]
    fn palette_of_two_or_more_wins_over_uniform() {
        let paint = StrokePaint::resolve(
            Some(RED.into()),
            &[GREEN.into(), BLUE.into()],
            BLACK.into(),
        );
        assert_eq!(
            paint,
            StrokePaint::Gradient(vec![GREEN.into(), BLUE.into()])
        );
    }

    #[test]
    fn single_entry_palette_is_ignored() {
        let paint = StrokePaint::resolve(Some(RED.into()), &[GREEN.into()], BLACK.into());
        assert_eq!(paint, StrokePaint::Uniform(RED.into()));
    }

    #[test]
    fn fallback_applies_when_unstyled() {
        let paint = StrokePaint::resolve(None, &[], BLACK.into());
        assert_eq!(paint, StrokePaint::Uniform(BLACK.into()));
    }

    #[test]
    fn uniform_paint_is_one_span() {
        let spans = StrokePaint::Uniform(RED.into()).spans(4);
        assert_eq!(
            spans,
            vec![StrokeSpan {
                range: 0..4,
                color: RED.into(),
            }]
        );
    }

    #[test]
    fn empty_path_has_no_spans() {
        assert!(StrokePaint::Uniform(RED.into()).spans(0).is_empty());
        assert!(StrokePaint::Gradient(vec![RED.into(), GREEN.into()])
            .spans(0)
            .is_empty());
    }

    #[test]
    fn three_colors_over_four_points_split_evenly() {
        let paint = StrokePaint::Gradient(vec![RED.into(), GREEN.into(), BLUE.into()]);
        assert_eq!(
            paint.spans(4),
            vec![
                StrokeSpan {
                    range: 0..2,
                    color: RED.into(),
                },
                StrokeSpan {
                    range: 2..4,
                    color: GREEN.into(),
                },
            ]
        );
    }

    #[test]
    fn uneven_partition_follows_floor_boundaries() {
        let paint = StrokePaint::Gradient(vec![RED.into(), GREEN.into(), BLUE.into()]);
        let spans = paint.spans(5);
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].range, 0..2);
        assert_eq!(spans[1].range, 2..5);
    }

    #[test]
    fn spans_tile_the_whole_path() {
        let paint = StrokePaint::Gradient(vec![
            RED.into(),
            GREEN.into(),
            BLUE.into(),
            BLACK.into(),
        ]);
        for point_count in 1..20 {
            let spans = paint.spans(point_count);
            assert_eq!(spans.len(), 3);
            assert_eq!(spans.first().unwrap().range.start, 0);
            assert_eq!(spans.last().unwrap().range.end, point_count);
            for pair in spans.windows(2) {
                assert_eq!(pair[0].range.end, pair[1].range.start);
            }
        }
    }
}
