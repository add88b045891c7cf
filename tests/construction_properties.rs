//! Property tests for employee construction and salary aggregation.

use proptest::prelude::*;

use staffing::domain::foundation::ValidationError;
use staffing::domain::organization::Department;
use staffing::domain::staff::{BonusDecorator, Employee, Payable};

fn valid_name() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z .'-]{0,30}"
}

fn salary() -> impl Strategy<Value = f64> {
    0.0f64..1_000_000.0
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: valid inputs always build a base employee paid its base salary.
    #[test]
    fn property_valid_base_employee(id in 1i64..i64::MAX, name in valid_name(), base in salary()) {
        let emp = Employee::new(id, name.clone(), "Dept", base).unwrap();
        prop_assert_eq!(emp.id().value(), id);
        prop_assert_eq!(emp.name(), name.trim());
        prop_assert_eq!(emp.calculate_salary(), base);
    }

    /// PROPERTY: non-positive ids are always rejected.
    #[test]
    fn property_non_positive_id_rejected(id in i64::MIN..=0, name in valid_name(), base in salary()) {
        let is_invalid_id = matches!(
            Employee::new(id, name, "Dept", base),
            Err(ValidationError::InvalidId { .. })
        );
        prop_assert!(is_invalid_id);
    }

    /// PROPERTY: negative salaries are always rejected.
    #[test]
    fn property_negative_salary_rejected(base in -1_000_000.0f64..-0.001) {
        let is_negative = matches!(
            Employee::new(1, "Name", "Dept", base),
            Err(ValidationError::NegativeSalary { .. })
        );
        prop_assert!(is_negative);
    }

    /// PROPERTY: department total equals the sum of member salaries.
    #[test]
    fn property_department_total_is_sum(
        bases in proptest::collection::vec(salary(), 0..20),
        bonus in 0.0f64..10_000.0,
    ) {
        let mut dept = Department::new("Dept").unwrap();
        let mut expected = 0.0;
        for (i, base) in bases.iter().enumerate() {
            let emp = Employee::manager(i as i64 + 1, "M", "Dept", *base, bonus).unwrap();
            expected += emp.calculate_salary();
            dept.add(emp);
        }
        prop_assert!((dept.calculate_total_salary() - expected).abs() < 1e-6);
    }

    /// PROPERTY: stacked bonuses add up regardless of order.
    #[test]
    fn property_bonus_stacking_is_additive(base in salary(), a in 0.0f64..10_000.0, b in 0.0f64..10_000.0) {
        let emp = Employee::new(1, "Name", "Dept", base).unwrap();
        let ab = BonusDecorator::new(BonusDecorator::new(&emp, a).unwrap(), b).unwrap();
        let ba = BonusDecorator::new(BonusDecorator::new(&emp, b).unwrap(), a).unwrap();
        prop_assert!((ab.calculate_salary() - (base + a + b)).abs() < 1e-6);
        prop_assert!((ab.calculate_salary() - ba.calculate_salary()).abs() < 1e-6);
        prop_assert_eq!(emp.calculate_salary(), base);
    }
}
