//! Sheet Store Module
//!
//! Tabular row store standing behind the registry endpoint: a header row plus
//! rows of strings, loaded from one JSON file at startup and saved after
//! every mutation.

use std::fs;
use std::path::PathBuf;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{RegistryError, Result};
use crate::models::{Student, StudentInput};
use crate::sheet::ColumnMap;

/// Prefix for generated student ids.
const ID_PREFIX: &str = "STU";

/// On-disk shape of the sheet.
#[derive(Debug, Serialize, Deserialize)]
struct SheetFile {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

// == Sheet Store ==
/// Row store for student records.
#[derive(Debug)]
pub struct SheetStore {
    /// Data file; `None` keeps the sheet in memory only
    path: Option<PathBuf>,
    /// Name <-> index mapping, built once
    columns: ColumnMap,
    /// Data rows in column order
    rows: Vec<Vec<String>>,
}

impl SheetStore {
    // == Constructors ==
    /// Opens the sheet from a data file, starting empty if it does not exist.
    pub fn open(path: PathBuf) -> Result<Self> {
        let columns = ColumnMap::student();
        let rows = if path.exists() {
            let contents = fs::read_to_string(&path)?;
            let file: SheetFile = serde_json::from_str(&contents)?;
            if file.header != columns.header() {
                return Err(RegistryError::Storage(format!(
                    "unexpected header in {}",
                    path.display()
                )));
            }
            debug!(rows = file.rows.len(), path = %path.display(), "sheet loaded");
            file.rows
        } else {
            Vec::new()
        };
        Ok(Self {
            path: Some(path),
            columns,
            rows,
        })
    }

    /// Creates an in-memory sheet, used by tests and embedded servers.
    pub fn in_memory() -> Self {
        Self {
            path: None,
            columns: ColumnMap::student(),
            rows: Vec::new(),
        }
    }

    // == List ==
    /// Returns all student records in row order.
    pub fn list(&self) -> Vec<Student> {
        self.rows.iter().map(|row| self.row_to_student(row)).collect()
    }

    // == Get ==
    /// Returns the student with the given id.
    pub fn get(&self, id: &str) -> Result<Student> {
        let index = self.find_row("id", id).ok_or(RegistryError::NotFound)?;
        Ok(self.row_to_student(&self.rows[index]))
    }

    // == Add ==
    /// Appends a new student row, assigning an id and stamping both
    /// timestamps. A roll-number collision leaves the sheet untouched.
    pub fn add(&mut self, input: &StudentInput) -> Result<Student> {
        if self.find_row("rollNo", input.roll_no.trim()).is_some() {
            return Err(RegistryError::DuplicateRollNo);
        }
        let now = Utc::now().to_rfc3339();
        let student = Student::from_input(self.generate_id(), input, &now);
        self.rows.push(self.student_to_row(&student));
        self.save()?;
        debug!(id = %student.id, roll_no = %student.roll_no, "student added");
        Ok(student)
    }

    // == Update ==
    /// Overwrites the mutable fields of an existing row and restamps
    /// `updatedAt`. The roll number may not collide with another row.
    pub fn update(&mut self, id: &str, input: &StudentInput) -> Result<Student> {
        let index = self.find_row("id", id).ok_or(RegistryError::NotFound)?;
        if let Some(other) = self.find_row("rollNo", input.roll_no.trim()) {
            if other != index {
                return Err(RegistryError::DuplicateRollNo);
            }
        }
        let now = Utc::now().to_rfc3339();
        let updates = [
            ("name", input.name.trim()),
            ("fatherName", input.father_name.trim()),
            ("email", input.email.trim()),
            ("phone", input.phone.trim()),
            ("course", input.course.trim()),
            ("semester", input.semester.trim()),
            ("rollNo", input.roll_no.trim()),
            ("updatedAt", now.as_str()),
        ];
        for (column, value) in updates {
            self.set_cell(index, column, value);
        }
        self.save()?;
        debug!(id, "student updated");
        Ok(self.row_to_student(&self.rows[index]))
    }

    // == Delete ==
    /// Removes the row with the given id.
    pub fn delete(&mut self, id: &str) -> Result<()> {
        let index = self.find_row("id", id).ok_or(RegistryError::NotFound)?;
        self.rows.remove(index);
        self.save()?;
        debug!(id, "student deleted");
        Ok(())
    }

    // == Generate Id ==
    /// Produces the next sequential id (`STU0001`, `STU0002`, ...).
    ///
    /// Scans for the highest numeric suffix so deletions never cause a live
    /// id to be reissued.
    pub fn generate_id(&self) -> String {
        let max = self
            .rows
            .iter()
            .filter_map(|row| {
                self.cell(row, "id")
                    .strip_prefix(ID_PREFIX)
                    .and_then(|suffix| suffix.parse::<u32>().ok())
            })
            .max()
            .unwrap_or(0);
        format!("{}{:04}", ID_PREFIX, max + 1)
    }

    // == Length ==
    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the sheet has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    // == Row Access ==
    /// Finds the first row whose `column` cell equals `value`.
    fn find_row(&self, column: &str, value: &str) -> Option<usize> {
        let col = self.columns.index(column)?;
        self.rows
            .iter()
            .position(|row| row.get(col).map(String::as_str) == Some(value))
    }

    fn cell<'a>(&self, row: &'a [String], column: &str) -> &'a str {
        self.columns
            .index(column)
            .and_then(|col| row.get(col))
            .map(String::as_str)
            .unwrap_or_default()
    }

    fn set_cell(&mut self, index: usize, column: &str, value: &str) {
        if let Some(col) = self.columns.index(column) {
            if let Some(cell) = self.rows[index].get_mut(col) {
                *cell = value.to_string();
            }
        }
    }

    fn row_to_student(&self, row: &[String]) -> Student {
        Student {
            id: self.cell(row, "id").to_string(),
            name: self.cell(row, "name").to_string(),
            father_name: self.cell(row, "fatherName").to_string(),
            email: self.cell(row, "email").to_string(),
            phone: self.cell(row, "phone").to_string(),
            course: self.cell(row, "course").to_string(),
            semester: self.cell(row, "semester").to_string(),
            roll_no: self.cell(row, "rollNo").to_string(),
            created_at: self.cell(row, "createdAt").to_string(),
            updated_at: self.cell(row, "updatedAt").to_string(),
        }
    }

    fn student_to_row(&self, student: &Student) -> Vec<String> {
        // Column order comes from the map, not from field order here
        (0..self.columns.len())
            .map(|index| {
                match self.columns.name(index).unwrap_or_default() {
                    "id" => student.id.clone(),
                    "name" => student.name.clone(),
                    "fatherName" => student.father_name.clone(),
                    "email" => student.email.clone(),
                    "phone" => student.phone.clone(),
                    "course" => student.course.clone(),
                    "semester" => student.semester.clone(),
                    "rollNo" => student.roll_no.clone(),
                    "createdAt" => student.created_at.clone(),
                    "updatedAt" => student.updated_at.clone(),
                    _ => String::new(),
                }
            })
            .collect()
    }

    // == Persistence ==
    /// Writes the header and rows to the data file, if one is configured.
    fn save(&self) -> Result<()> {
        let Some(ref path) = self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = SheetFile {
            header: self.columns.header().to_vec(),
            rows: self.rows.clone(),
        };
        let contents = serde_json::to_string_pretty(&file)?;
        fs::write(path, contents)?;
        Ok(())
    }
}
