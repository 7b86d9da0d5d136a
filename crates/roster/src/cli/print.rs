use super::setup::OutputFormat;
use colored::Colorize;
use rosterapp::commands::{CmdMessage, MessageLevel};
use rosterapp::model::Employee;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_employees(employees: &[Employee], format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(employees),
        OutputFormat::Text => print_rows(employees),
    }
}

fn print_json(employees: &[Employee]) {
    match serde_json::to_string_pretty(employees) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("{}", format!("Failed to encode records: {}", e).red()),
    }
}

fn print_rows(employees: &[Employee]) {
    if employees.is_empty() {
        println!("No employees found.");
        return;
    }

    for employee in employees {
        println!(
            "{} - {} ({}) | {}",
            employee.id.yellow(),
            employee.name.bold(),
            employee.department,
            employee.role.dimmed()
        );
    }
}
