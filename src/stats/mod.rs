//! Running min/max tracking

/// Smallest and largest value observed for a metric
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub min: f64,
    pub max: f64,
}

impl Extent {
    /// Extent of a single observation
    pub fn new(value: f64) -> Self {
        Self { min: value, max: value }
    }

    /// Widen the extent to cover `value`
    pub fn widen(self, value: f64) -> Self {
        Self { min: self.min.min(value), max: self.max.max(value) }
    }

    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Fold a new observation into an optional extent
///
/// The first observation seeds the extent; later ones only ever widen it.
pub fn update(extent: Option<Extent>, value: f64) -> Extent {
    match extent {
        Some(extent) => extent.widen(value),
        None => Extent::new(value),
    }
}
