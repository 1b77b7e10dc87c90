//! Generic accumulator drill

use std::ops::{Add, Div, Mul, Sub};

/// Numeric kinds the accumulator works over: any primitive with the four
/// arithmetic operators and a zero default, integer or float alike.
pub trait Number:
    Copy
    + Default
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
}

impl<T> Number for T where
    T: Copy
        + Default
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<Output = T>
        + Div<Output = T>
{
}

/// Running-total accumulator. Starts at zero; every operation folds its
/// operand into the total in call order.
#[derive(Debug, Clone, Default)]
pub struct Calc<T: Number> {
    total: T,
}

impl<T: Number> Calc<T> {
    /// New accumulator with total zero
    pub fn new() -> Self {
        Self { total: T::default() }
    }

    /// New accumulator with a given starting total
    pub fn with_total(total: T) -> Self {
        Self { total }
    }

    pub fn add(&mut self, v: T) -> &mut Self {
        self.total = self.total + v;
        self
    }

    pub fn multiply(&mut self, v: T) -> &mut Self {
        self.total = self.total * v;
        self
    }

    pub fn subtract(&mut self, v: T) -> &mut Self {
        self.total = self.total - v;
        self
    }

    /// Primitive division semantics apply: integer totals truncate and
    /// dividing an integer total by zero panics.
    pub fn divide(&mut self, v: T) -> &mut Self {
        self.total = self.total / v;
        self
    }

    /// Current running total
    pub fn total(&self) -> T {
        self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_sequence() {
        let mut c = Calc::<f64>::new();
        c.add(3.2).multiply(2.5).subtract(5.0).divide(2.0);

        // ((0 + 3.2) * 2.5 - 5) / 2
        assert_eq!(c.total(), 1.5);
    }

    #[test]
    fn test_integer_truncation() {
        let mut c = Calc::<i64>::new();
        c.add(7).divide(2);
        assert_eq!(c.total(), 3);
    }

    #[test]
    fn test_starts_at_zero() {
        assert_eq!(Calc::<i32>::new().total(), 0);
        assert_eq!(Calc::<f32>::new().total(), 0.0);
    }

    #[test]
    fn test_with_total() {
        let mut c = Calc::with_total(10.0_f64);
        c.subtract(4.0);
        assert_eq!(c.total(), 6.0);
    }
}
