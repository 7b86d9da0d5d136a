use crate::model::Employee;

pub fn find_by_id<'a>(employees: &'a [Employee], id: &str) -> Option<&'a Employee> {
    employees.iter().find(|e| e.id == id)
}

pub fn position_of(employees: &[Employee], id: &str) -> Option<usize> {
    employees.iter().position(|e| e.id == id)
}
