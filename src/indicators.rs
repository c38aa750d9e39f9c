use crate::constants::{ACTIVE_CLASS, DOT_SELECTOR};
use crate::core::IndicatorView;
use crate::dom;
use web_sys as web;

/// Dot buttons under a navigator root, one per panel.
pub struct DotIndicators {
    dots: Vec<web::Element>,
}

impl DotIndicators {
    pub fn collect(root: &web::Element) -> Self {
        Self {
            dots: dom::query_all(root, DOT_SELECTOR),
        }
    }

    pub fn dots(&self) -> &[web::Element] {
        &self.dots
    }
}

impl IndicatorView for DotIndicators {
    fn set_active(&self, index: usize) {
        for (i, dot) in self.dots.iter().enumerate() {
            let on = i == index;
            _ = dot.class_list().toggle_with_force(ACTIVE_CLASS, on);
            if on {
                _ = dot.set_attribute("aria-current", "true");
            } else {
                _ = dot.remove_attribute("aria-current");
            }
        }
    }
}
