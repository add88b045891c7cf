//! Salary computation strategies.
//!
//! Each variant carries the role fields it needs, so the computation never
//! falls back to defaults at read time. Defaults are applied once, when the
//! strategy is constructed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::errors::BuildError;
use super::level::Level;
use super::validator::{is_non_negative, validate_name};
use crate::domain::foundation::ValidationError;

/// The role of an employee, as chosen by the builder or the factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmployeeKind {
    Employee,
    Manager,
    Developer,
    Salesperson,
}

impl EmployeeKind {
    /// Returns the lowercase label.
    pub fn as_str(&self) -> &'static str {
        match self {
            EmployeeKind::Employee => "employee",
            EmployeeKind::Manager => "manager",
            EmployeeKind::Developer => "developer",
            EmployeeKind::Salesperson => "salesperson",
        }
    }
}

impl fmt::Display for EmployeeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EmployeeKind {
    type Err = BuildError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "employee" | "base" => Ok(EmployeeKind::Employee),
            "manager" => Ok(EmployeeKind::Manager),
            "developer" => Ok(EmployeeKind::Developer),
            "salesperson" => Ok(EmployeeKind::Salesperson),
            _ => Err(BuildError::unknown_kind(s)),
        }
    }
}

/// How an employee's pay is derived from the stored fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SalaryStrategy {
    /// Pay is the base salary.
    #[default]
    #[serde(rename = "employee")]
    Base,
    /// Base salary plus a fixed bonus.
    Manager { bonus: f64 },
    /// Base salary scaled by seniority.
    Developer {
        level: Level,
        #[serde(default)]
        skills: Vec<String>,
    },
    /// Base salary plus commission on sales.
    Salesperson {
        commission_rate: f64,
        sales_volume: f64,
    },
}

impl SalaryStrategy {
    /// Manager strategy with the given bonus.
    pub fn manager(bonus: f64) -> Self {
        SalaryStrategy::Manager { bonus }
    }

    /// Developer strategy with the given level and skills.
    pub fn developer<I, S>(level: Level, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        SalaryStrategy::Developer {
            level,
            skills: skills.into_iter().map(Into::into).collect(),
        }
    }

    /// Salesperson strategy with the given commission rate and sales volume.
    pub fn salesperson(commission_rate: f64, sales_volume: f64) -> Self {
        SalaryStrategy::Salesperson {
            commission_rate,
            sales_volume,
        }
    }

    /// Computes pay from the base salary and the role fields.
    pub fn calculate(&self, base_salary: f64) -> f64 {
        match self {
            SalaryStrategy::Base => base_salary,
            SalaryStrategy::Manager { bonus } => base_salary + bonus,
            SalaryStrategy::Developer { level, .. } => base_salary * level.multiplier(),
            SalaryStrategy::Salesperson {
                commission_rate,
                sales_volume,
            } => base_salary + sales_volume * commission_rate,
        }
    }

    /// Returns the role this strategy belongs to.
    pub fn kind(&self) -> EmployeeKind {
        match self {
            SalaryStrategy::Base => EmployeeKind::Employee,
            SalaryStrategy::Manager { .. } => EmployeeKind::Manager,
            SalaryStrategy::Developer { .. } => EmployeeKind::Developer,
            SalaryStrategy::Salesperson { .. } => EmployeeKind::Salesperson,
        }
    }

    /// Checks the role fields and normalizes the skill list.
    ///
    /// Skills are trimmed and de-duplicated, keeping first occurrence order.
    ///
    /// # Errors
    ///
    /// - `InvalidBonus` if the bonus is negative
    /// - `InvalidCommission` if the commission rate or sales volume is negative
    /// - `EmptyName` if a skill is blank
    pub(crate) fn validated(self) -> Result<Self, ValidationError> {
        match self {
            SalaryStrategy::Base => Ok(SalaryStrategy::Base),
            SalaryStrategy::Manager { bonus } => {
                check_bonus(bonus)?;
                Ok(SalaryStrategy::Manager { bonus })
            }
            SalaryStrategy::Developer { level, skills } => {
                let mut normalized: Vec<String> = Vec::with_capacity(skills.len());
                for skill in skills {
                    let skill = validate_name("skill", &skill)?;
                    if !normalized.contains(&skill) {
                        normalized.push(skill);
                    }
                }
                Ok(SalaryStrategy::Developer {
                    level,
                    skills: normalized,
                })
            }
            SalaryStrategy::Salesperson {
                commission_rate,
                sales_volume,
            } => {
                check_commission_rate(commission_rate)?;
                check_sales_volume(sales_volume)?;
                Ok(SalaryStrategy::Salesperson {
                    commission_rate,
                    sales_volume,
                })
            }
        }
    }
}

pub(crate) fn check_bonus(bonus: f64) -> Result<(), ValidationError> {
    if !is_non_negative(bonus) {
        return Err(ValidationError::invalid_bonus(format!(
            "bonus must be a non-negative amount, got {}",
            bonus
        )));
    }
    Ok(())
}

pub(crate) fn check_commission_rate(rate: f64) -> Result<(), ValidationError> {
    if !is_non_negative(rate) {
        return Err(ValidationError::invalid_commission(format!(
            "commission rate must be non-negative, got {}",
            rate
        )));
    }
    Ok(())
}

pub(crate) fn check_sales_volume(volume: f64) -> Result<(), ValidationError> {
    if !is_non_negative(volume) {
        return Err(ValidationError::invalid_commission(format!(
            "sales volume must be non-negative, got {}",
            volume
        )));
    }
    Ok(())
}
