//! Record Operations Module
//!
//! Business rules layered over the request client and the local cache:
//! read-through caching for list/record queries, invalidate-before-mutate
//! for the write paths, and client-side search/sort over a fetched list.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cache::{CacheStats, CacheStore};
use crate::client::RequestClient;
use crate::error::Result;
use crate::models::{ApiRequest, ApiResponse, Student, StudentInput};

/// Cache key for the full student list.
pub const LIST_CACHE_KEY: &str = "students_list";

/// Cache key for one student record.
pub fn record_cache_key(student_id: &str) -> String {
    format!("student_{}", student_id)
}

/// Pattern matching every registry cache key (the list and all records).
const ALL_KEYS_PATTERN: &str = "^student";

// == Registry ==
/// Record operations over the remote endpoint with a local read cache.
///
/// Both collaborators are injected at construction; nothing here reaches for
/// process-global state.
pub struct Registry {
    client: RequestClient,
    cache: CacheStore,
    ttl_seconds: u64,
}

impl Registry {
    /// Creates a registry from its collaborators.
    pub fn new(client: RequestClient, cache: CacheStore, ttl_seconds: u64) -> Self {
        Self {
            client,
            cache,
            ttl_seconds,
        }
    }

    // == Reads ==
    /// Fetches the full student list, serving from cache when fresh.
    ///
    /// A cache hit is wrapped in the same `{success: true, ...}` envelope the
    /// network path produces, so callers cannot tell the origins apart. Hits
    /// are never revalidated against the backend; the short TTL bounds
    /// staleness.
    pub async fn get_students(&mut self) -> Result<ApiResponse> {
        if let Some(students) = self.cache.get::<Vec<Student>>(LIST_CACHE_KEY) {
            debug!(count = students.len(), "student list served from cache");
            return Ok(ApiResponse::with_students(students));
        }

        let response = self.client.request(&ApiRequest::GetStudents).await?;
        if response.success {
            if let Some(ref students) = response.students {
                self.cache.set(LIST_CACHE_KEY, students, self.ttl_seconds);
            }
        }
        Ok(response)
    }

    /// Fetches one student by id, serving from cache when fresh.
    pub async fn get_student(&mut self, student_id: &str) -> Result<ApiResponse> {
        let key = record_cache_key(student_id);
        if let Some(student) = self.cache.get::<Student>(&key) {
            debug!(student_id, "student record served from cache");
            return Ok(ApiResponse {
                success: true,
                student: Some(student),
                ..ApiResponse::default()
            });
        }

        let response = self
            .client
            .request(&ApiRequest::GetStudent {
                student_id: student_id.to_string(),
            })
            .await?;
        if response.success {
            if let Some(ref student) = response.student {
                self.cache.set(&key, student, self.ttl_seconds);
            }
        }
        Ok(response)
    }

    // == Mutations ==
    /// Adds a student. The list key is invalidated before the request goes
    /// out, so a failed mutation can never leave a stale positive entry that
    /// assumes it succeeded.
    pub async fn add_student(&mut self, input: StudentInput) -> Result<ApiResponse> {
        input.validate()?;
        self.cache.remove(LIST_CACHE_KEY);
        self.client
            .request(&ApiRequest::AddStudent { student: input })
            .await
    }

    /// Updates a student; invalidates the list and the record key first.
    pub async fn update_student(
        &mut self,
        student_id: &str,
        input: StudentInput,
    ) -> Result<ApiResponse> {
        input.validate()?;
        self.cache.remove(LIST_CACHE_KEY);
        self.cache.remove(&record_cache_key(student_id));
        self.client
            .request(&ApiRequest::UpdateStudent {
                student_id: student_id.to_string(),
                student: input,
            })
            .await
    }

    /// Deletes a student; invalidates the list and the record key first.
    pub async fn delete_student(&mut self, student_id: &str) -> Result<ApiResponse> {
        self.cache.remove(LIST_CACHE_KEY);
        self.cache.remove(&record_cache_key(student_id));
        self.client
            .request(&ApiRequest::DeleteStudent {
                student_id: student_id.to_string(),
            })
            .await
    }

    /// Asks the endpoint for the next unused student id. Never cached.
    pub async fn generate_student_id(&mut self) -> Result<ApiResponse> {
        self.client.request(&ApiRequest::GenerateStudentId).await
    }

    // == Cache Management ==
    /// Drops every cached registry key (the list and all records) in one
    /// pass. Used when the caller knows the backend changed underneath it.
    pub fn invalidate_all(&mut self) -> usize {
        self.cache.invalidate_pattern(ALL_KEYS_PATTERN)
    }

    /// Read-only snapshot of the cache contents.
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }
}

// == Search and Sort ==

/// Sortable student fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    Name,
    RollNo,
    Course,
    Semester,
    CreatedAt,
}

/// Case-insensitive substring search over name, roll number, email, and
/// course. An empty query matches everything.
pub fn search_students(students: &[Student], query: &str) -> Vec<Student> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return students.to_vec();
    }
    students
        .iter()
        .filter(|s| {
            s.name.to_lowercase().contains(&query)
                || s.roll_no.to_lowercase().contains(&query)
                || s.email.to_lowercase().contains(&query)
                || s.course.to_lowercase().contains(&query)
        })
        .cloned()
        .collect()
}

/// Sorts students in place by the given field.
pub fn sort_students(students: &mut [Student], field: SortField, ascending: bool) {
    students.sort_by(|a, b| {
        let ordering = match field {
            SortField::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortField::RollNo => a.roll_no.to_lowercase().cmp(&b.roll_no.to_lowercase()),
            SortField::Course => a.course.to_lowercase().cmp(&b.course.to_lowercase()),
            // Numeric semesters compare by value, not lexically
            SortField::Semester => {
                let left = a.semester.parse::<u8>().unwrap_or(u8::MAX);
                let right = b.semester.parse::<u8>().unwrap_or(u8::MAX);
                left.cmp(&right)
            }
            SortField::CreatedAt => a.created_at.cmp(&b.created_at),
        };
        if ascending {
            ordering
        } else {
            ordering.reverse()
        }
    });
}
