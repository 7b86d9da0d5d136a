use crate::commands::get::EmployeeFilter;
use crate::commands::{self, CmdResult};
use crate::error::{Result, RosterError};
use crate::model::Employee;
use crate::store::DataStore;

/// Facade over the command modules. This is the seam any UI talks to.
///
/// Raw user input is normalized here (the id trimmed, the text fields
/// title-cased) and validated before a command runs, so the command layer
/// only ever sees well-formed records.
pub struct RosterApi<S: DataStore> {
    store: S,
}

impl<S: DataStore> RosterApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn add(&mut self, id: &str, name: &str, department: &str, role: &str) -> Result<CmdResult> {
        let employee = Employee::from_input(id, name, department, role);
        employee.validate()?;
        commands::add::run(&mut self.store, employee)
    }

    /// Replace the record identified by `id` with a record built from the
    /// given fields. `new_id` may differ from `id`, subject to uniqueness.
    pub fn update(
        &mut self,
        id: &str,
        new_id: &str,
        name: &str,
        department: &str,
        role: &str,
    ) -> Result<CmdResult> {
        let updated = Employee::from_input(new_id, name, department, role);
        updated.validate()?;
        commands::update::run(&mut self.store, id.trim(), updated)
    }

    pub fn delete(&mut self, id: &str) -> Result<CmdResult> {
        commands::delete::run(&mut self.store, id.trim())
    }

    pub fn list(&self) -> Result<CmdResult> {
        commands::get::run(&self.store, &EmployeeFilter::default())
    }

    pub fn search(&self, filter: &EmployeeFilter) -> Result<CmdResult> {
        commands::get::run(&self.store, filter)
    }

    /// Fetch a single record by exact id.
    pub fn get(&self, id: &str) -> Result<Employee> {
        let id = id.trim();
        let mut result = commands::get::run(&self.store, &EmployeeFilter::by_id(id))?;
        result
            .listed
            .pop()
            .ok_or_else(|| RosterError::NotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn add_normalizes_input() {
        let mut api = RosterApi::new(InMemoryStore::new());
        api.add(" 104233 ", "ada lovelace", "it", "staff engineer")
            .unwrap();

        let employee = api.get("104233").unwrap();
        assert_eq!(employee.name, "Ada Lovelace");
        assert_eq!(employee.department, "IT");
        assert_eq!(employee.role, "Staff Engineer");
    }

    #[test]
    fn add_rejects_invalid_input_before_the_store() {
        let mut api = RosterApi::new(InMemoryStore::new());

        let result = api.add("12ab56", "Ada", "IT", "Dev");
        assert!(matches!(result, Err(RosterError::Validation(_))));

        let result = api.add("104233", "", "IT", "Dev");
        assert!(matches!(result, Err(RosterError::Validation(_))));

        assert!(api.list().unwrap().listed.is_empty());
    }

    #[test]
    fn update_normalizes_and_replaces() {
        let mut api = RosterApi::new(InMemoryStore::new());
        api.add("104233", "Ada", "IT", "Dev").unwrap();
        api.update("104233", "104233", "ada lovelace", "engineering", "dev")
            .unwrap();

        let employee = api.get("104233").unwrap();
        assert_eq!(employee.name, "Ada Lovelace");
        assert_eq!(employee.department, "Engineering");
    }

    #[test]
    fn get_unknown_id_is_not_found() {
        let api = RosterApi::new(InMemoryStore::new());
        assert!(matches!(api.get("104233"), Err(RosterError::NotFound(_))));
    }

    #[test]
    fn delete_trims_its_argument() {
        let mut api = RosterApi::new(InMemoryStore::new());
        api.add("104233", "Ada", "IT", "Dev").unwrap();
        api.delete(" 104233 ").unwrap();
        assert!(api.list().unwrap().listed.is_empty());
    }
}
