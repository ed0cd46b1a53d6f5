//! Value conversions applied between the timeline domain and the
//! attribute's native domain.

pub trait Modifier<T> {
    fn modify(&self, value: T) -> T;
}

/// Pass-through.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Identity;

impl<T> Modifier<T> for Identity {
    #[inline]
    fn modify(&self, value: T) -> T {
        value
    }
}

/// Linear scaling by a fixed factor, either multiplying or dividing.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Scaler {
    factor: f64,
    divide: bool,
}

impl Scaler {
    /// `v -> v * factor`
    pub const fn multiply(factor: f64) -> Self {
        Self {
            factor,
            divide: false,
        }
    }

    /// `v -> v / factor`
    pub const fn divide(factor: f64) -> Self {
        Self {
            factor,
            divide: true,
        }
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }
}

impl Modifier<f64> for Scaler {
    #[inline]
    fn modify(&self, value: f64) -> f64 {
        if self.divide {
            value / self.factor
        } else {
            value * self.factor
        }
    }
}
