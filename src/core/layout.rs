//! Panel geometry captured from the host layout.
//!
//! A [`PanelSet`] is validated once and never changes afterwards; all index
//! math in the navigator goes through it.

use super::error::NavError;
use smallvec::SmallVec;

/// One horizontally laid out content region.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Panel {
    pub offset: f64,
    pub width: f64,
}

impl Panel {
    pub fn new(offset: f64, width: f64) -> Self {
        Self { offset, width }
    }

    #[inline]
    pub fn end(&self) -> f64 {
        self.offset + self.width
    }

    /// Half-open containment: `[offset, offset + width)`.
    #[inline]
    pub fn contains(&self, x: f64) -> bool {
        x >= self.offset && x < self.end()
    }
}

/// Scroll position of the viewport that hosts the panels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollSample {
    pub scroll_left: f64,
    pub viewport_width: f64,
}

impl ScrollSample {
    pub fn new(scroll_left: f64, viewport_width: f64) -> Self {
        Self {
            scroll_left,
            viewport_width,
        }
    }

    #[inline]
    pub fn center(&self) -> f64 {
        self.scroll_left + self.viewport_width / 2.0
    }
}

/// Supplies panel geometry once, when a navigator is built.
pub trait LayoutSource {
    fn panels(&self) -> Vec<Panel>;
}

impl LayoutSource for Vec<Panel> {
    fn panels(&self) -> Vec<Panel> {
        self.clone()
    }
}

// Landing pages rarely carry more than a handful of panels
type PanelVec = SmallVec<[Panel; 8]>;

/// Ordered, non-empty, immutable sequence of panels.
#[derive(Clone, Debug, PartialEq)]
pub struct PanelSet {
    panels: PanelVec,
}

impl PanelSet {
    /// Validates and captures `panels`.
    ///
    /// Offsets must be finite and non-decreasing, widths finite and positive,
    /// and at least one panel must be present.
    pub fn new(panels: impl IntoIterator<Item = Panel>) -> Result<Self, NavError> {
        let panels: PanelVec = panels.into_iter().collect();
        if panels.is_empty() {
            return Err(NavError::EmptyPanelSet);
        }
        let mut previous: Option<f64> = None;
        for (index, p) in panels.iter().enumerate() {
            if !p.offset.is_finite() || !p.width.is_finite() {
                return Err(NavError::NonFiniteGeometry {
                    index,
                    offset: p.offset,
                    width: p.width,
                });
            }
            if p.width <= 0.0 {
                return Err(NavError::NonPositiveWidth {
                    index,
                    width: p.width,
                });
            }
            if let Some(prev) = previous {
                if p.offset < prev {
                    return Err(NavError::OffsetOutOfOrder {
                        index,
                        offset: p.offset,
                        previous: prev,
                    });
                }
            }
            previous = Some(p.offset);
        }
        Ok(Self { panels })
    }

    pub fn from_source(source: &dyn LayoutSource) -> Result<Self, NavError> {
        Self::new(source.panels())
    }

    /// Evenly sized panels laid out back to back from offset 0.
    pub fn uniform(count: usize, width: f64) -> Result<Self, NavError> {
        Self::new((0..count).map(|i| Panel::new(i as f64 * width, width)))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.panels.len()
    }

    // Always false once constructed
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    #[inline]
    pub fn last_index(&self) -> usize {
        self.panels.len() - 1
    }

    pub fn iter(&self) -> impl Iterator<Item = &Panel> {
        self.panels.iter()
    }

    /// Saturating clamp of any requested index into `[0, N-1]`.
    #[inline]
    pub fn clamp_index(&self, index: i64) -> usize {
        index.clamp(0, self.last_index() as i64) as usize
    }

    /// Start offset of the panel at `index` after clamping.
    pub fn offset_of(&self, index: i64) -> f64 {
        self.panels[self.clamp_index(index)].offset
    }

    /// Index of the first panel whose interval holds the viewport center.
    ///
    /// `None` when the center lies outside every panel, which happens at the
    /// extreme ends of the scroll range when rounding lands on a boundary.
    pub fn index_from_scroll_offset(&self, scroll_left: f64, viewport_width: f64) -> Option<usize> {
        let center = ScrollSample::new(scroll_left, viewport_width).center();
        self.panels.iter().position(|p| p.contains(center))
    }

    #[inline]
    pub fn index_at(&self, sample: ScrollSample) -> Option<usize> {
        self.index_from_scroll_offset(sample.scroll_left, sample.viewport_width)
    }
}
