use crate::model::Project;
use eyre::{Error, WrapErr, ensure};
use serde::Deserialize;
use std::collections::HashSet;
use std::io;
use std::path::Path;
use tracing::trace;

#[derive(Debug, Deserialize)]
struct Record {
    name: String,
    value: u64,
    hours: u32,
}

/// Load projects from a CSV file with a `name,value,hours` header.
pub fn load_projects(path: &Path) -> Result<Vec<Project>, Error> {
    let file = std::fs::File::open(path)
        .wrap_err_with(|| format!("cannot open projects file {}", path.display()))?;
    read_projects(file).wrap_err_with(|| format!("cannot load projects from {}", path.display()))
}

/// Read projects from CSV data. Project names must be unique.
pub fn read_projects(reader: impl io::Read) -> Result<Vec<Project>, Error> {
    let mut names = HashSet::new();
    let mut projects = Vec::new();
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    for (row, record) in reader.deserialize::<Record>().enumerate() {
        let record = record.wrap_err_with(|| format!("invalid record at row {}", row + 1))?;
        ensure!(
            names.insert(record.name.clone()),
            "duplicate project name {} at row {}",
            record.name,
            row + 1
        );
        let project = Project::new(record.name, record.value, record.hours)?;
        trace!(project = %project, "Loaded project");
        projects.push(project);
    }
    Ok(projects)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_projects() {
        let data = "name,value,hours\nProjeto A, 12, 4\nProjeto B,10,3\n";
        let projects = read_projects(data.as_bytes()).unwrap();
        assert_eq!(
            projects,
            vec![
                Project::new("Projeto A", 12, 4).unwrap(),
                Project::new("Projeto B", 10, 3).unwrap(),
            ]
        );
    }

    #[test]
    fn test_invalid_rows() {
        assert!(read_projects("name,value,hours\nA,-1,4\n".as_bytes()).is_err());
        assert!(read_projects("name,value,hours\nA,3,0\n".as_bytes()).is_err());
        assert!(read_projects("name,value,hours\nA,3\n".as_bytes()).is_err());
        assert!(read_projects("name,value,hours\nA,3,1\nA,4,2\n".as_bytes()).is_err());
        assert!(read_projects("name,value,hours\n".as_bytes()).unwrap().is_empty());
    }
}
