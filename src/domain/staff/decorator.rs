//! Salary decorators.
//!
//! [`Payable`] is the seam shared by employees and the wrappers around them.
//! A [`BonusDecorator`] adds a fixed amount to whatever it wraps and leaves
//! the wrapped value untouched. Layers compose additively.

use std::fmt;

use super::employee::Employee;
use super::strategy::check_bonus;
use crate::domain::foundation::ValidationError;

/// Anything with a computed salary and a printable summary.
pub trait Payable {
    /// Computed salary.
    fn calculate_salary(&self) -> f64;

    /// Human-readable summary.
    fn get_info(&self) -> String;

    /// Wraps `self` in a [`BonusDecorator`].
    ///
    /// # Errors
    ///
    /// - `InvalidBonus` if `amount` is negative
    fn with_bonus(self, amount: f64) -> Result<BonusDecorator<Self>, ValidationError>
    where
        Self: Sized,
    {
        BonusDecorator::new(self, amount)
    }
}

impl Payable for Employee {
    fn calculate_salary(&self) -> f64 {
        Employee::calculate_salary(self)
    }

    fn get_info(&self) -> String {
        Employee::get_info(self)
    }
}

impl<T: Payable + ?Sized> Payable for &T {
    fn calculate_salary(&self) -> f64 {
        (**self).calculate_salary()
    }

    fn get_info(&self) -> String {
        (**self).get_info()
    }
}

impl<T: Payable + ?Sized> Payable for Box<T> {
    fn calculate_salary(&self) -> f64 {
        (**self).calculate_salary()
    }

    fn get_info(&self) -> String {
        (**self).get_info()
    }
}

/// Adds a flat bonus on top of the wrapped salary.
#[derive(Debug, Clone)]
pub struct BonusDecorator<P> {
    inner: P,
    amount: f64,
}

impl<P: Payable> BonusDecorator<P> {
    /// Wraps `inner` with a flat bonus.
    ///
    /// # Errors
    ///
    /// - `InvalidBonus` if `amount` is negative
    pub fn new(inner: P, amount: f64) -> Result<Self, ValidationError> {
        check_bonus(amount)?;
        Ok(Self { inner, amount })
    }

    /// Returns the wrapped value.
    pub fn inner(&self) -> &P {
        &self.inner
    }

    /// Returns the bonus this layer adds.
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Removes this layer.
    pub fn into_inner(self) -> P {
        self.inner
    }
}

impl<P: Payable> Payable for BonusDecorator<P> {
    fn calculate_salary(&self) -> f64 {
        self.inner.calculate_salary() + self.amount
    }

    fn get_info(&self) -> String {
        format!("{} + bonus {:.2}", self.inner.get_info(), self.amount)
    }
}

impl<P: Payable> fmt::Display for BonusDecorator<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get_info())
    }
}
