use crate::commands::{helpers, CmdMessage, CmdResult};
use crate::error::{Result, RosterError};
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S, id: &str) -> Result<CmdResult> {
    let mut employees = store.load()?;

    let position = helpers::position_of(&employees, id)
        .ok_or_else(|| RosterError::NotFound(id.to_string()))?;

    let removed = employees.remove(position);
    store.save(&employees)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Employee deleted: {} ({})",
        removed.name, removed.id
    )));
    result.affected.push(removed);
    Ok(result)
}
