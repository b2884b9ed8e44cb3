use serde::{Deserialize, Serialize};

use roster_core::EmployeeNumber;

/// Employment status lifecycle.
///
/// A fresh record starts as `Former` (not yet hired); `hire`/`fire` toggle
/// between the two states and nothing else does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmploymentStatus {
    Current,
    Former,
}

/// One employee's stored state.
///
/// Records are created by the roster with caller-supplied names; the
/// identifier is fixed at construction and has no setter. Salary and
/// employment state change only through the explicit operations below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    number: EmployeeNumber,
    first_name: String,
    last_name: String,
    salary: i64,
    status: EmploymentStatus,
}

impl Employee {
    /// Salary every record starts with.
    pub const STARTING_SALARY: i64 = 30_000;

    /// Conventional promote/demote amount.
    pub const DEFAULT_RAISE: i64 = 1_000;

    /// Create a record with the given identifier and names.
    ///
    /// Starts at [`Self::STARTING_SALARY`] and not yet hired. The roster is
    /// the usual construction path and guarantees identifier uniqueness;
    /// records built directly (e.g. in tests) carry whatever identifier the
    /// caller supplies.
    pub fn new(
        number: EmployeeNumber,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            number,
            first_name: first_name.into(),
            last_name: last_name.into(),
            salary: Self::STARTING_SALARY,
            status: EmploymentStatus::Former,
        }
    }

    pub fn number(&self) -> EmployeeNumber {
        self.number
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn set_first_name(&mut self, first_name: impl Into<String>) {
        self.first_name = first_name.into();
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn set_last_name(&mut self, last_name: impl Into<String>) {
        self.last_name = last_name.into();
    }

    pub fn salary(&self) -> i64 {
        self.salary
    }

    /// Replace the salary. Not validated; negative values are representable
    /// and accepted.
    pub fn set_salary(&mut self, salary: i64) {
        self.salary = salary;
    }

    pub fn status(&self) -> EmploymentStatus {
        self.status
    }

    pub fn is_hired(&self) -> bool {
        self.status == EmploymentStatus::Current
    }

    /// Raise the salary by `amount`.
    ///
    /// The conventional raise is [`Self::DEFAULT_RAISE`]. No upper bound is
    /// checked and a negative `amount` is accepted as-is.
    pub fn promote(&mut self, amount: i64) {
        self.set_salary(self.salary + amount);
    }

    /// Lower the salary by `amount`; symmetric to [`promote`](Self::promote).
    ///
    /// May drive the salary negative.
    pub fn demote(&mut self, amount: i64) {
        self.set_salary(self.salary - amount);
    }

    /// Hire (or rehire) the employee. Idempotent.
    pub fn hire(&mut self) {
        self.status = EmploymentStatus::Current;
    }

    /// Dismiss the employee. Idempotent; the record stays in the roster.
    pub fn fire(&mut self) {
        self.status = EmploymentStatus::Former;
    }
}

impl core::fmt::Display for Employee {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Employee: {}, {}", self.last_name, self.first_name)?;
        writeln!(f, "-------")?;
        writeln!(
            f,
            "{}",
            if self.is_hired() {
                "Current Employee"
            } else {
                "Former Employee"
            }
        )?;
        writeln!(f, "Employee Number: {}", self.number)?;
        write!(f, "Salary: ${}", self.salary)
    }
}
