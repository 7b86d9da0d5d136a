use crate::commands::{helpers, CmdMessage, CmdResult};
use crate::error::{Result, RosterError};
use crate::model::Employee;
use crate::store::DataStore;

/// Replace the record identified by `id` with `updated`, preserving its
/// position in the collection. The id itself may change, subject to
/// uniqueness against the other records.
pub fn run<S: DataStore>(store: &mut S, id: &str, updated: Employee) -> Result<CmdResult> {
    let mut employees = store.load()?;

    let position = helpers::position_of(&employees, id)
        .ok_or_else(|| RosterError::NotFound(id.to_string()))?;

    if updated.id != id && helpers::find_by_id(&employees, &updated.id).is_some() {
        return Err(RosterError::DuplicateId(updated.id));
    }

    employees[position] = updated.clone();
    store.save(&employees)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Employee updated: {} ({})",
        updated.name, updated.id
    )));
    result.affected.push(updated);
    Ok(result)
}
