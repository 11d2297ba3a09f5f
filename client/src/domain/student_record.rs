//! Student record returned by the portal backend.

use serde::Serialize;

/// One student as described by the backend.
///
/// Only `student_id` is required. Every other field is independently present
/// or absent; adapters map empty backend values to `None` so "present" always
/// means "has something to show".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRecord {
    /// Backend primary key for the student.
    pub student_id: String,
    /// Full name.
    pub name: Option<String>,
    /// Enrollment number as stored by the backend.
    pub enrollment_no: Option<String>,
    /// College the student belongs to.
    pub college_name: Option<String>,
    /// Course of study.
    pub course_name: Option<String>,
    /// Branch or specialisation.
    pub branch_name: Option<String>,
    /// Contact mobile number.
    pub mobile_no: Option<String>,
    /// Father's name.
    pub father_name: Option<String>,
    /// Postal address.
    pub address: Option<String>,
    /// Blood group.
    pub blood_group: Option<String>,
    /// Academic phase.
    pub phase: Option<String>,
    /// College bus route number.
    pub bus_route_no: Option<String>,
    /// College bus stop.
    pub bus_stop: Option<String>,
    /// Preferred photo locator.
    pub primary_image_path: Option<String>,
    /// Fallback photo locator.
    pub backup_image_path: Option<String>,
}

impl StudentRecord {
    /// Build a record carrying only the required identifier.
    ///
    /// # Examples
    /// ```
    /// use student_portal_client::domain::StudentRecord;
    ///
    /// let record = StudentRecord {
    ///     name: Some("Asha".to_owned()),
    ///     ..StudentRecord::new("S1")
    /// };
    /// assert_eq!(record.student_id, "S1");
    /// assert!(record.address.is_none());
    /// ```
    pub fn new(student_id: impl Into<String>) -> Self {
        Self {
            student_id: student_id.into(),
            ..Self::default()
        }
    }
}
