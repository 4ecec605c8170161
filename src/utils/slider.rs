use crate::catalog::SliderSpec;

/// Steps moved by a page key.
pub const PAGE_STEPS: u32 = 10;

/// A bounded value that moves on a fixed grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UsageSlider {
    spec: &'static SliderSpec,
    value: u32,
}

impl UsageSlider {
    pub fn new(spec: &'static SliderSpec) -> Self {
        Self {
            spec,
            value: spec.default,
        }
    }

    pub fn spec(&self) -> &'static SliderSpec {
        self.spec
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    /// Set a value, clamped to the bounds.
    pub fn set(&mut self, value: u32) {
        self.value = value.clamp(self.spec.min, self.spec.max);
    }

    pub fn increase(&mut self) {
        self.set(self.value.saturating_add(self.spec.step));
    }

    pub fn decrease(&mut self) {
        self.set(self.value.saturating_sub(self.spec.step));
    }

    pub fn page_up(&mut self) {
        self.set(self.value.saturating_add(self.spec.step * PAGE_STEPS));
    }

    pub fn page_down(&mut self) {
        self.set(self.value.saturating_sub(self.spec.step * PAGE_STEPS));
    }

    pub fn to_min(&mut self) {
        self.value = self.spec.min;
    }

    pub fn to_max(&mut self) {
        self.value = self.spec.max;
    }

    /// Position within the range as a ratio in `0.0..=1.0`.
    pub fn ratio(&self) -> f64 {
        let span = self.spec.max - self.spec.min;
        if span == 0 {
            return 0.0;
        }
        f64::from(self.value - self.spec.min) / f64::from(span)
    }
}
