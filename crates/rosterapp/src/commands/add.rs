use crate::commands::{helpers, CmdMessage, CmdResult};
use crate::error::{Result, RosterError};
use crate::model::Employee;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S, employee: Employee) -> Result<CmdResult> {
    let mut employees = store.load()?;

    if helpers::find_by_id(&employees, &employee.id).is_some() {
        return Err(RosterError::DuplicateId(employee.id));
    }

    employees.push(employee.clone());
    store.save(&employees)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Employee added: {} ({})",
        employee.name, employee.id
    )));
    result.affected.push(employee);
    Ok(result)
}
