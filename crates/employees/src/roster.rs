use std::collections::HashMap;
use std::io::{self, Write};

use tracing::debug;

use roster_core::{DomainError, DomainResult, EmployeeNumber};

use crate::employee::Employee;

/// First identifier a fresh roster hands out.
pub const FIRST_EMPLOYEE_NUMBER: u32 = 1000;

/// In-memory registry of employee records.
///
/// The roster exclusively owns record storage. Callers address records
/// through the [`EmployeeNumber`] handle returned by
/// [`add_employee`](Self::add_employee) and re-enter through the accessors
/// below, so handles stay valid across later insertions. Insertion order is
/// preserved and is the enumeration order of every view.
///
/// Each instance owns its own identifier counter; independent rosters assign
/// independent sequences.
#[derive(Debug, Clone)]
pub struct Roster {
    employees: Vec<Employee>,
    by_number: HashMap<EmployeeNumber, usize>,
    next_number: u32,
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}

impl Roster {
    /// Create an empty roster with its counter at [`FIRST_EMPLOYEE_NUMBER`].
    pub fn new() -> Self {
        Self {
            employees: Vec::new(),
            by_number: HashMap::new(),
            next_number: FIRST_EMPLOYEE_NUMBER,
        }
    }

    /// Insert a new record with the given names and return its handle.
    ///
    /// The identifier is the counter value at insertion; the counter then
    /// advances and never hands out the same value twice, even once the
    /// record is no longer employed. The fresh record carries
    /// [`Employee::STARTING_SALARY`] and is not yet hired; hiring is the
    /// caller's explicit follow-up, not the roster's.
    pub fn add_employee(
        &mut self,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> EmployeeNumber {
        let number = EmployeeNumber::from(self.next_number);
        self.next_number += 1;

        self.by_number.insert(number, self.employees.len());
        self.employees.push(Employee::new(number, first_name, last_name));

        debug!(number = %number, "employee record added");
        number
    }

    /// Look up a record by identifier.
    pub fn employee(&self, number: EmployeeNumber) -> DomainResult<&Employee> {
        self.by_number
            .get(&number)
            .map(|&idx| &self.employees[idx])
            .ok_or(DomainError::NotFound)
    }

    /// Look up a record by identifier for mutation.
    pub fn employee_mut(&mut self, number: EmployeeNumber) -> DomainResult<&mut Employee> {
        match self.by_number.get(&number) {
            Some(&idx) => Ok(&mut self.employees[idx]),
            None => Err(DomainError::NotFound),
        }
    }

    /// Look up the first record (in insertion order) matching both names.
    ///
    /// When several records share both names only the earliest inserted one
    /// is ever returned; there is no disambiguation by identifier.
    pub fn employee_by_name(&self, first_name: &str, last_name: &str) -> DomainResult<&Employee> {
        self.employees
            .iter()
            .find(|e| e.first_name() == first_name && e.last_name() == last_name)
            .ok_or(DomainError::NotFound)
    }

    /// Mutable variant of [`employee_by_name`](Self::employee_by_name).
    pub fn employee_by_name_mut(
        &mut self,
        first_name: &str,
        last_name: &str,
    ) -> DomainResult<&mut Employee> {
        self.employees
            .iter_mut()
            .find(|e| e.first_name() == first_name && e.last_name() == last_name)
            .ok_or(DomainError::NotFound)
    }

    /// Hire (or rehire) the record with the given identifier.
    pub fn hire(&mut self, number: EmployeeNumber) -> DomainResult<()> {
        self.employee_mut(number)?.hire();
        debug!(number = %number, "employee hired");
        Ok(())
    }

    /// Dismiss the record with the given identifier. The record stays in the
    /// roster as a former employee.
    pub fn fire(&mut self, number: EmployeeNumber) -> DomainResult<()> {
        self.employee_mut(number)?.fire();
        debug!(number = %number, "employee fired");
        Ok(())
    }

    /// Raise the record's salary by `amount`.
    pub fn promote(&mut self, number: EmployeeNumber, amount: i64) -> DomainResult<()> {
        self.employee_mut(number)?.promote(amount);
        debug!(number = %number, amount, "employee promoted");
        Ok(())
    }

    /// Lower the record's salary by `amount`.
    pub fn demote(&mut self, number: EmployeeNumber, amount: i64) -> DomainResult<()> {
        self.employee_mut(number)?.demote(amount);
        debug!(number = %number, amount, "employee demoted");
        Ok(())
    }

    /// All records, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Employee> {
        self.employees.iter()
    }

    /// Records currently employed, in insertion order.
    pub fn current(&self) -> impl Iterator<Item = &Employee> {
        self.employees.iter().filter(|e| e.is_hired())
    }

    /// Records not (or no longer) employed, in insertion order.
    pub fn former(&self) -> impl Iterator<Item = &Employee> {
        self.employees.iter().filter(|e| !e.is_hired())
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Write every record's summary to `out`, in insertion order.
    pub fn display_all<W: Write>(&self, out: &mut W) -> io::Result<()> {
        Self::display(self.iter(), out)
    }

    /// Write the summaries of currently employed records to `out`.
    pub fn display_current<W: Write>(&self, out: &mut W) -> io::Result<()> {
        Self::display(self.current(), out)
    }

    /// Write the summaries of former records to `out`.
    pub fn display_former<W: Write>(&self, out: &mut W) -> io::Result<()> {
        Self::display(self.former(), out)
    }

    fn display<'a, W: Write>(
        employees: impl Iterator<Item = &'a Employee>,
        out: &mut W,
    ) -> io::Result<()> {
        for employee in employees {
            writeln!(out, "{employee}")?;
            writeln!(out)?;
        }
        Ok(())
    }
}
