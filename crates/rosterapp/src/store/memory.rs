use super::DataStore;
use crate::error::{Result, RosterError};
use crate::model::Employee;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    employees: Vec<Employee>,
    simulate_write_error: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.simulate_write_error = simulate;
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Employee>> {
        Ok(self.employees.clone())
    }

    fn save(&mut self, employees: &[Employee]) -> Result<()> {
        if self.simulate_write_error {
            return Err(RosterError::Store("Simulated write error".to_string()));
        }
        self.employees = employees.to_vec();
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_employee(mut self, id: &str, name: &str, department: &str, role: &str) -> Self {
            let mut employees = self.store.load().unwrap();
            employees.push(Employee::new(id, name, department, role));
            self.store.save(&employees).unwrap();
            self
        }

        pub fn with_employees(mut self, count: usize) -> Self {
            let mut employees = self.store.load().unwrap();
            for i in 0..count {
                employees.push(Employee::new(
                    format!("{:06}", 100000 + i),
                    format!("Employee {}", i + 1),
                    "Engineering",
                    "Engineer",
                ));
            }
            self.store.save(&employees).unwrap();
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::StoreFixture;
    use super::*;

    #[test]
    fn save_replaces_collection() {
        let mut store = InMemoryStore::new();
        store
            .save(&[Employee::new("104233", "Ada", "IT", "Dev")])
            .unwrap();
        store
            .save(&[Employee::new("115599", "Grace", "IT", "Dev")])
            .unwrap();

        let employees = store.load().unwrap();
        assert_eq!(employees.len(), 1);
        assert_eq!(employees[0].id, "115599");
    }

    #[test]
    fn simulated_write_error_fails_save() {
        let mut store = InMemoryStore::new();
        store.set_simulate_write_error(true);
        let result = store.save(&[Employee::new("104233", "Ada", "IT", "Dev")]);
        assert!(matches!(result, Err(RosterError::Store(_))));
    }

    #[test]
    fn fixture_builds_sequential_ids() {
        let fixture = StoreFixture::new().with_employees(3);
        let employees = fixture.store.load().unwrap();
        assert_eq!(employees.len(), 3);
        assert_eq!(employees[0].id, "100000");
        assert_eq!(employees[2].id, "100002");
    }
}
