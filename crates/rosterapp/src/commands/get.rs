use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Employee;
use crate::store::DataStore;

/// Linear-scan filter over the collection.
///
/// The id matches exactly; the text fields match on a case-insensitive
/// substring. Unset fields match everything, so the default filter lists the
/// whole collection.
#[derive(Debug, Clone, Default)]
pub struct EmployeeFilter {
    pub id: Option<String>,
    pub name: Option<String>,
    pub department: Option<String>,
    pub role: Option<String>,
}

impl EmployeeFilter {
    pub fn by_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Default::default()
        }
    }

    fn matches(&self, employee: &Employee) -> bool {
        if let Some(id) = &self.id {
            if employee.id != *id {
                return false;
            }
        }
        for (term, value) in [
            (&self.name, &employee.name),
            (&self.department, &employee.department),
            (&self.role, &employee.role),
        ] {
            if let Some(term) = term {
                if !value.to_lowercase().contains(&term.to_lowercase()) {
                    return false;
                }
            }
        }
        true
    }
}

pub fn run<S: DataStore>(store: &S, filter: &EmployeeFilter) -> Result<CmdResult> {
    let employees = store.load()?;
    let listed = employees
        .into_iter()
        .filter(|e| filter.matches(e))
        .collect();
    Ok(CmdResult::default().with_listed(listed))
}
