use super::layout::{PanelSet, ScrollSample};

/// One-shot entrance tracking for panels.
///
/// A panel enters once its left edge, shifted by `trigger_offset_px`, reaches
/// the viewport center. Entered panels stay entered.
#[derive(Clone, Debug)]
pub struct PanelEntrance {
    trigger_offset_px: f64,
    entered: Vec<bool>,
}

impl PanelEntrance {
    pub fn new(panel_count: usize, trigger_offset_px: f64) -> Self {
        Self {
            trigger_offset_px,
            entered: vec![false; panel_count],
        }
    }

    /// Returns the indices that entered with this sample, in panel order.
    pub fn update(&mut self, panels: &PanelSet, sample: ScrollSample) -> Vec<usize> {
        let center = sample.center();
        if !center.is_finite() {
            return Vec::new();
        }
        let mut newly = Vec::new();
        for (i, p) in panels.iter().enumerate() {
            let Some(flag) = self.entered.get_mut(i) else {
                break;
            };
            if !*flag && p.offset + self.trigger_offset_px <= center {
                *flag = true;
                newly.push(i);
            }
        }
        newly
    }

    pub fn all_entered(&self) -> bool {
        self.entered.iter().all(|e| *e)
    }
}
