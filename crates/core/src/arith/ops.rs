//! Operator overloads for [`SoftFloat`].

use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::arith::{add, mul, sub};
use crate::layout::Format;
use crate::value::SoftFloat;

impl<F: Format> Add for SoftFloat<F> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        add(self, rhs)
    }
}

impl<F: Format> Sub for SoftFloat<F> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        sub(self, rhs)
    }
}

impl<F: Format> Mul for SoftFloat<F> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        mul(self, rhs)
    }
}

impl<F: Format> Neg for SoftFloat<F> {
    type Output = Self;

    fn neg(self) -> Self {
        self.negated()
    }
}

impl<F: Format> AddAssign for SoftFloat<F> {
    fn add_assign(&mut self, rhs: Self) {
        *self = add(*self, rhs);
    }
}

impl<F: Format> SubAssign for SoftFloat<F> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = sub(*self, rhs);
    }
}

impl<F: Format> MulAssign for SoftFloat<F> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = mul(*self, rhs);
    }
}
