use super::DataStore;
use crate::error::{Result, RosterError};
use crate::model::Employee;
use log::debug;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parent_dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    fn ensure_file(&self) -> Result<()> {
        if self.path.exists() {
            return Ok(());
        }
        fs::create_dir_all(self.parent_dir()).map_err(RosterError::Io)?;
        fs::File::create(&self.path).map_err(RosterError::Io)?;
        debug!("created backing file {}", self.path.display());
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<Vec<Employee>> {
        self.ensure_file()?;

        let content = fs::read_to_string(&self.path).map_err(RosterError::Io)?;
        let employees: Vec<Employee> = content.lines().filter_map(Employee::parse_line).collect();

        debug!(
            "loaded {} records from {}",
            employees.len(),
            self.path.display()
        );
        Ok(employees)
    }

    fn save(&mut self, employees: &[Employee]) -> Result<()> {
        let dir = self.parent_dir();
        fs::create_dir_all(&dir).map_err(RosterError::Io)?;

        // Write to a temp file in the same directory, then rename over the
        // backing file. Same directory keeps the rename on one filesystem;
        // the temp file is removed on drop if anything fails before persist.
        let mut tmp = NamedTempFile::new_in(&dir).map_err(RosterError::Io)?;
        for employee in employees {
            writeln!(tmp, "{}", employee.to_line()).map_err(RosterError::Io)?;
        }
        tmp.persist(&self.path)
            .map_err(|e| RosterError::Io(e.error))?;

        debug!(
            "saved {} records to {}",
            employees.len(),
            self.path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn load_creates_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("employees.txt");
        let store = FileStore::new(&path);

        let employees = store.load().unwrap();
        assert!(employees.is_empty());
        assert!(path.exists());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("employees.txt"));

        let employees = vec![
            Employee::new("104233", "Ada Lovelace", "Engineering", "Staff Engineer"),
            Employee::new("115599", "Grace Hopper", "IT", "Director"),
        ];
        store.save(&employees).unwrap();

        assert_eq!(store.load().unwrap(), employees);
    }

    #[test]
    fn save_creates_missing_parent_dir() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("nested").join("employees.txt"));

        store
            .save(&[Employee::new("104233", "Ada", "IT", "Dev")])
            .unwrap();
        assert_eq!(store.load().unwrap().len(), 1);
    }
}
