//! Employee entity.
//!
//! A single entity type covers every role. The role-specific fields live in
//! the [`SalaryStrategy`] the employee holds, so `calculate_salary` stays
//! polymorphic without a subclass per role.
//!
//! # Identity
//!
//! Two employees are equal when their ids match. Names and salaries may
//! differ between equal employees; nothing beyond id uniqueness inside a
//! single repository or department is enforced.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Add;

use super::level::Level;
use super::strategy::{check_bonus, check_sales_volume, EmployeeKind, SalaryStrategy};
use super::validator::{validate_amount, validate_id, validate_name};
use crate::domain::foundation::{EmployeeId, ValidationError};

/// An employee with a validated identity and a salary strategy.
///
/// # Invariants
///
/// - `id` is positive
/// - `name` and `department` are non-empty and trimmed
/// - `base_salary` is finite and non-negative
/// - role fields satisfy their strategy's rules
#[derive(Debug, Clone)]
pub struct Employee {
    id: EmployeeId,
    name: String,
    department: String,
    base_salary: f64,
    strategy: SalaryStrategy,
}

impl Employee {
    /// Creates a base employee whose pay is the base salary.
    ///
    /// # Errors
    ///
    /// - `InvalidId` if `id <= 0`
    /// - `EmptyName` if name or department is blank
    /// - `NegativeSalary` if `base_salary < 0`
    pub fn new(
        id: i64,
        name: impl Into<String>,
        department: impl Into<String>,
        base_salary: f64,
    ) -> Result<Self, ValidationError> {
        Self::with_strategy(id, name, department, base_salary, SalaryStrategy::Base)
    }

    /// Creates an employee bound to an explicit salary strategy.
    ///
    /// # Errors
    ///
    /// Any identity error from [`Employee::new`], plus the role errors
    /// raised by the strategy (`InvalidBonus`, `InvalidCommission`).
    pub fn with_strategy(
        id: i64,
        name: impl Into<String>,
        department: impl Into<String>,
        base_salary: f64,
        strategy: SalaryStrategy,
    ) -> Result<Self, ValidationError> {
        let id = validate_id(id)?;
        let name = validate_name("name", name)?;
        let base_salary = validate_amount("base_salary", base_salary)?;
        let department = validate_name("department", department)?;
        let strategy = strategy.validated()?;

        Ok(Self {
            id,
            name,
            department,
            base_salary,
            strategy,
        })
    }

    /// Creates a manager earning `base_salary + bonus`.
    pub fn manager(
        id: i64,
        name: impl Into<String>,
        department: impl Into<String>,
        base_salary: f64,
        bonus: f64,
    ) -> Result<Self, ValidationError> {
        Self::with_strategy(id, name, department, base_salary, SalaryStrategy::manager(bonus))
    }

    /// Creates a developer earning `base_salary * level multiplier`.
    pub fn developer<I, S>(
        id: i64,
        name: impl Into<String>,
        department: impl Into<String>,
        base_salary: f64,
        skills: I,
        level: Level,
    ) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_strategy(
            id,
            name,
            department,
            base_salary,
            SalaryStrategy::developer(level, skills),
        )
    }

    /// Creates a salesperson earning `base_salary + sales_volume * commission_rate`.
    pub fn salesperson(
        id: i64,
        name: impl Into<String>,
        department: impl Into<String>,
        base_salary: f64,
        commission_rate: f64,
        sales_volume: f64,
    ) -> Result<Self, ValidationError> {
        Self::with_strategy(
            id,
            name,
            department,
            base_salary,
            SalaryStrategy::salesperson(commission_rate, sales_volume),
        )
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the employee ID.
    pub fn id(&self) -> EmployeeId {
        self.id
    }

    /// Returns the employee name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the department label.
    pub fn department(&self) -> &str {
        &self.department
    }

    /// Returns the base salary.
    pub fn base_salary(&self) -> f64 {
        self.base_salary
    }

    /// Returns the bound salary strategy.
    pub fn strategy(&self) -> &SalaryStrategy {
        &self.strategy
    }

    /// Returns the employee's role.
    pub fn kind(&self) -> EmployeeKind {
        self.strategy.kind()
    }

    /// Returns the bonus for managers.
    pub fn bonus(&self) -> Option<f64> {
        match self.strategy {
            SalaryStrategy::Manager { bonus } => Some(bonus),
            _ => None,
        }
    }

    /// Returns the level for developers.
    pub fn level(&self) -> Option<Level> {
        match self.strategy {
            SalaryStrategy::Developer { level, .. } => Some(level),
            _ => None,
        }
    }

    /// Returns the skills of a developer; empty for other roles.
    pub fn skills(&self) -> &[String] {
        match &self.strategy {
            SalaryStrategy::Developer { skills, .. } => skills,
            _ => &[],
        }
    }

    /// Returns the commission rate for salespeople.
    pub fn commission_rate(&self) -> Option<f64> {
        match self.strategy {
            SalaryStrategy::Salesperson {
                commission_rate, ..
            } => Some(commission_rate),
            _ => None,
        }
    }

    /// Returns the sales volume for salespeople.
    pub fn sales_volume(&self) -> Option<f64> {
        match self.strategy {
            SalaryStrategy::Salesperson { sales_volume, .. } => Some(sales_volume),
            _ => None,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Salary
    // ─────────────────────────────────────────────────────────────────────────

    /// Computes pay through the bound strategy.
    pub fn calculate_salary(&self) -> f64 {
        self.strategy.calculate(self.base_salary)
    }

    /// Orders two employees by computed salary.
    pub fn salary_cmp(&self, other: &Employee) -> Ordering {
        self.calculate_salary().total_cmp(&other.calculate_salary())
    }

    /// Returns true when this employee earns strictly less than `other`.
    pub fn is_paid_less_than(&self, other: &Employee) -> bool {
        self.salary_cmp(other) == Ordering::Less
    }

    /// Human-readable summary with name, department and computed salary.
    pub fn get_info(&self) -> String {
        let salary = self.calculate_salary();
        match &self.strategy {
            SalaryStrategy::Base => {
                format!("{} ({}): {:.2}", self.name, self.department, salary)
            }
            SalaryStrategy::Manager { bonus } => format!(
                "{} ({}): {:.2} (bonus: {:.2})",
                self.name, self.department, salary, bonus
            ),
            SalaryStrategy::Developer { level, skills } => format!(
                "{} ({}, {}): {:.2}; skills: {}",
                self.name,
                self.department,
                level,
                salary,
                if skills.is_empty() {
                    "none".to_string()
                } else {
                    skills.join(", ")
                }
            ),
            SalaryStrategy::Salesperson {
                commission_rate,
                sales_volume,
            } => format!(
                "{} ({}): {:.2} (sales: {:.2}, commission: {})",
                self.name, self.department, salary, sales_volume, commission_rate
            ),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Renames the employee, returning the old name.
    ///
    /// # Errors
    ///
    /// - `EmptyName` if the new name is blank
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<String, ValidationError> {
        let name = validate_name("name", name)?;
        Ok(std::mem::replace(&mut self.name, name))
    }

    /// Changes the base salary, returning the old one.
    ///
    /// # Errors
    ///
    /// - `NegativeSalary` if the new salary is negative
    pub fn set_base_salary(&mut self, base_salary: f64) -> Result<f64, ValidationError> {
        let base_salary = validate_amount("base_salary", base_salary)?;
        Ok(std::mem::replace(&mut self.base_salary, base_salary))
    }

    /// Changes a manager's bonus, returning the old one.
    ///
    /// # Errors
    ///
    /// - `RoleMismatch` if the employee is not a manager
    /// - `InvalidBonus` if the bonus is negative
    pub fn set_bonus(&mut self, new_bonus: f64) -> Result<f64, ValidationError> {
        let id = self.id;
        match &mut self.strategy {
            SalaryStrategy::Manager { bonus } => {
                check_bonus(new_bonus)?;
                Ok(std::mem::replace(bonus, new_bonus))
            }
            other => Err(role_mismatch(id, EmployeeKind::Manager, other.kind())),
        }
    }

    /// Adds a skill to a developer.
    ///
    /// Returns `false` if the skill was already present.
    ///
    /// # Errors
    ///
    /// - `RoleMismatch` if the employee is not a developer
    /// - `EmptyName` if the skill is blank
    pub fn add_skill(&mut self, skill: impl Into<String>) -> Result<bool, ValidationError> {
        let id = self.id;
        match &mut self.strategy {
            SalaryStrategy::Developer { skills, .. } => {
                let skill = validate_name("skill", skill)?;
                if skills.contains(&skill) {
                    return Ok(false);
                }
                skills.push(skill);
                Ok(true)
            }
            other => Err(role_mismatch(id, EmployeeKind::Developer, other.kind())),
        }
    }

    /// Records a new sales volume for a salesperson, returning the old one.
    ///
    /// # Errors
    ///
    /// - `RoleMismatch` if the employee is not a salesperson
    /// - `InvalidCommission` if the volume is negative
    pub fn update_sales(&mut self, new_volume: f64) -> Result<f64, ValidationError> {
        let id = self.id;
        match &mut self.strategy {
            SalaryStrategy::Salesperson { sales_volume, .. } => {
                check_sales_volume(new_volume)?;
                Ok(std::mem::replace(sales_volume, new_volume))
            }
            other => Err(role_mismatch(id, EmployeeKind::Salesperson, other.kind())),
        }
    }
}

fn role_mismatch(id: EmployeeId, expected: EmployeeKind, actual: EmployeeKind) -> ValidationError {
    ValidationError::RoleMismatch {
        id: id.value(),
        expected: expected.as_str(),
        actual: actual.as_str(),
    }
}

impl PartialEq for Employee {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Employee {}

impl Hash for Employee {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Adding two employees sums their computed salaries.
impl<'a> Add<&'a Employee> for &'a Employee {
    type Output = f64;

    fn add(self, other: &'a Employee) -> f64 {
        self.calculate_salary() + other.calculate_salary()
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get_info())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Employee {
        Employee::new(1, "Alice", "Engineering", 5000.0).unwrap()
    }

    fn manager() -> Employee {
        Employee::manager(2, "Bob", "Engineering", 5000.0, 1000.0).unwrap()
    }

    fn developer(level: Level) -> Employee {
        Employee::developer(3, "Carol", "Engineering", 5000.0, ["rust"], level).unwrap()
    }

    fn salesperson() -> Employee {
        Employee::salesperson(4, "Dave", "Sales", 4000.0, 0.15, 50000.0).unwrap()
    }

    // Construction tests

    #[test]
    fn base_employee_earns_base_salary() {
        let emp = base();
        assert_eq!(emp.calculate_salary(), 5000.0);
        assert_eq!(emp.kind(), EmployeeKind::Employee);
    }

    #[test]
    fn manager_earns_base_plus_bonus() {
        assert_eq!(manager().calculate_salary(), 6000.0);
    }

    #[test]
    fn developer_salary_follows_level() {
        assert_eq!(developer(Level::Junior).calculate_salary(), 5000.0);
        assert_eq!(developer(Level::Middle).calculate_salary(), 7500.0);
        assert_eq!(developer(Level::Senior).calculate_salary(), 10000.0);
    }

    #[test]
    fn salesperson_earns_commission() {
        assert!((salesperson().calculate_salary() - 11500.0).abs() < 1e-9);
    }

    #[test]
    fn construction_trims_name_and_department() {
        let emp = Employee::new(1, "  Alice ", " Ops ", 10.0).unwrap();
        assert_eq!(emp.name(), "Alice");
        assert_eq!(emp.department(), "Ops");
    }

    #[test]
    fn construction_rejects_blank_department() {
        match Employee::new(1, "Alice", " ", 10.0) {
            Err(ValidationError::EmptyName { field }) => assert_eq!(field, "department"),
            other => panic!("Expected EmptyName, got {:?}", other),
        }
    }

    type Maker = fn(i64, &str, f64) -> Result<Employee, ValidationError>;

    #[test]
    fn every_role_rejects_invalid_identity() {
        let makers: [Maker; 4] = [
            |id: i64, name: &str, salary: f64| Employee::new(id, name, "D", salary),
            |id: i64, name: &str, salary: f64| Employee::manager(id, name, "D", salary, 0.0),
            |id: i64, name: &str, salary: f64| {
                Employee::developer(id, name, "D", salary, Vec::<String>::new(), Level::Junior)
            },
            |id: i64, name: &str, salary: f64| {
                Employee::salesperson(id, name, "D", salary, 0.1, 0.0)
            },
        ];

        for make in makers {
            assert!(matches!(make(0, "A", 1.0), Err(ValidationError::InvalidId { .. })));
            assert!(matches!(make(-1, "A", 1.0), Err(ValidationError::InvalidId { .. })));
            assert!(matches!(make(1, "", 1.0), Err(ValidationError::EmptyName { .. })));
            assert!(matches!(make(1, "   ", 1.0), Err(ValidationError::EmptyName { .. })));
            assert!(matches!(make(1, "A", -1.0), Err(ValidationError::NegativeSalary { .. })));
        }
    }

    #[test]
    fn manager_rejects_negative_bonus() {
        assert!(matches!(
            Employee::manager(1, "A", "D", 10.0, -5.0),
            Err(ValidationError::InvalidBonus { .. })
        ));
    }

    // Identity and operators

    #[test]
    fn equality_is_by_id_only() {
        let a = Employee::new(7, "Alice", "Ops", 100.0).unwrap();
        let b = Employee::manager(7, "Someone Else", "Sales", 900.0, 50.0).unwrap();
        let c = Employee::new(8, "Alice", "Ops", 100.0).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn ordering_is_by_salary_not_id() {
        let cheap = Employee::new(9, "Z", "D", 100.0).unwrap();
        let pricey = Employee::new(1, "A", "D", 900.0).unwrap();
        assert!(cheap.is_paid_less_than(&pricey));
        assert!(!pricey.is_paid_less_than(&cheap));
        assert_eq!(pricey.salary_cmp(&cheap), Ordering::Greater);
    }

    #[test]
    fn sorting_by_salary_cmp() {
        let mut staff = vec![developer(Level::Senior), base(), manager()];
        staff.sort_by(Employee::salary_cmp);
        let salaries: Vec<f64> = staff.iter().map(Employee::calculate_salary).collect();
        assert_eq!(salaries, vec![5000.0, 6000.0, 10000.0]);
    }

    #[test]
    fn adding_employees_sums_salaries() {
        assert_eq!(&base() + &manager(), 11000.0);
    }

    // Info

    #[test]
    fn info_contains_name_department_and_salary() {
        for emp in [base(), manager(), developer(Level::Middle), salesperson()] {
            let info = emp.get_info();
            assert!(info.contains(emp.name()), "{}", info);
            assert!(info.contains(emp.department()), "{}", info);
            assert!(
                info.contains(&format!("{:.2}", emp.calculate_salary())),
                "{}",
                info
            );
        }
    }

    #[test]
    fn info_is_role_specific() {
        assert!(manager().get_info().contains("bonus: 1000.00"));
        assert!(developer(Level::Senior).get_info().contains("senior"));
        assert!(developer(Level::Senior).get_info().contains("skills: rust"));
        assert!(salesperson().get_info().contains("sales: 50000.00"));
    }

    #[test]
    fn display_matches_info() {
        let emp = manager();
        assert_eq!(emp.to_string(), emp.get_info());
    }

    // Mutation tests

    #[test]
    fn set_name_revalidates() {
        let mut emp = base();
        assert_eq!(emp.set_name("Alicia").unwrap(), "Alice");
        assert_eq!(emp.name(), "Alicia");
        assert!(emp.set_name("  ").is_err());
        assert_eq!(emp.name(), "Alicia");
    }

    #[test]
    fn set_base_salary_revalidates() {
        let mut emp = base();
        emp.set_base_salary(6000.0).unwrap();
        assert_eq!(emp.calculate_salary(), 6000.0);
        assert!(matches!(
            emp.set_base_salary(-1.0),
            Err(ValidationError::NegativeSalary { .. })
        ));
        assert_eq!(emp.base_salary(), 6000.0);
    }

    #[test]
    fn set_bonus_applies_to_managers_only() {
        let mut mgr = manager();
        assert_eq!(mgr.set_bonus(2000.0).unwrap(), 1000.0);
        assert_eq!(mgr.calculate_salary(), 7000.0);
        assert!(matches!(mgr.set_bonus(-1.0), Err(ValidationError::InvalidBonus { .. })));

        let mut emp = base();
        assert!(matches!(
            emp.set_bonus(10.0),
            Err(ValidationError::RoleMismatch { expected: "manager", .. })
        ));
    }

    #[test]
    fn add_skill_suppresses_duplicates() {
        let mut dev = developer(Level::Junior);
        assert!(dev.add_skill("sql").unwrap());
        assert!(!dev.add_skill("rust").unwrap());
        assert_eq!(dev.skills(), ["rust".to_string(), "sql".to_string()]);
        assert!(base().add_skill("rust").is_err());
    }

    #[test]
    fn update_sales_changes_commission() {
        let mut sp = salesperson();
        assert_eq!(sp.update_sales(10000.0).unwrap(), 50000.0);
        assert!((sp.calculate_salary() - 5500.0).abs() < 1e-9);
        assert!(matches!(
            sp.update_sales(-1.0),
            Err(ValidationError::InvalidCommission { .. })
        ));
        assert_eq!(sp.sales_volume(), Some(10000.0));
    }

    #[test]
    fn role_accessors_are_none_for_other_roles() {
        let emp = base();
        assert_eq!(emp.bonus(), None);
        assert_eq!(emp.level(), None);
        assert!(emp.skills().is_empty());
        assert_eq!(emp.commission_rate(), None);
        assert_eq!(emp.sales_volume(), None);
    }
}
