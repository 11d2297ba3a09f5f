//! Detail rows shown on a student card.
//!
//! The sequence is fixed: seven mandatory rows, each falling back to
//! [`NOT_AVAILABLE`], then the optional rows that are present, in priority
//! order. The output is stable for a given record.

use serde::Serialize;

use crate::domain::StudentRecord;

/// Placeholder value for absent mandatory fields.
pub const NOT_AVAILABLE: &str = "N/A";

/// One labelled value on the student card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailRow {
    /// Human-readable label.
    pub label: &'static str,
    /// Value to display.
    pub value: String,
    /// Font Awesome icon class hint.
    pub icon: &'static str,
}

fn mandatory_fields(record: &StudentRecord) -> [(&'static str, &'static str, Option<&str>); 7] {
    [
        ("Student ID", "fas fa-id-badge", Some(record.student_id.as_str())),
        ("Student Name", "fas fa-user", record.name.as_deref()),
        ("Enrollment No", "fas fa-hashtag", record.enrollment_no.as_deref()),
        ("College Name", "fas fa-university", record.college_name.as_deref()),
        ("Course", "fas fa-graduation-cap", record.course_name.as_deref()),
        ("Branch", "fas fa-code-branch", record.branch_name.as_deref()),
        ("Mobile Number", "fas fa-phone", record.mobile_no.as_deref()),
    ]
}

fn optional_fields(record: &StudentRecord) -> [(&'static str, &'static str, Option<&str>); 6] {
    [
        ("Father's Name", "fas fa-male", record.father_name.as_deref()),
        ("Address", "fas fa-map-marker-alt", record.address.as_deref()),
        ("Blood Group", "fas fa-tint", record.blood_group.as_deref()),
        ("Phase", "fas fa-layer-group", record.phase.as_deref()),
        ("Bus Route No", "fas fa-bus", record.bus_route_no.as_deref()),
        ("Bus Stop", "fas fa-map-pin", record.bus_stop.as_deref()),
    ]
}

/// Build the ordered detail rows for `record`.
///
/// # Examples
/// ```
/// use student_portal_client::domain::{StudentRecord, render_fields};
///
/// let rows = render_fields(&StudentRecord::new("S1"));
/// assert_eq!(rows.len(), 7);
/// assert_eq!(rows[0].value, "S1");
/// assert_eq!(rows[1].value, "N/A");
/// ```
#[must_use]
pub fn render_fields(record: &StudentRecord) -> Vec<DetailRow> {
    let mandatory = mandatory_fields(record)
        .into_iter()
        .map(|(label, icon, value)| DetailRow {
            label,
            value: present(value).unwrap_or(NOT_AVAILABLE).to_owned(),
            icon,
        });
    let optional = optional_fields(record)
        .into_iter()
        .filter_map(|(label, icon, value)| {
            present(value).map(|text| DetailRow {
                label,
                value: text.to_owned(),
                icon,
            })
        });
    mandatory.chain(optional).collect()
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.is_empty())
}
