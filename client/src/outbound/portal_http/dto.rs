//! DTOs for the portal backend JSON contract.
//!
//! Replies decode into these transport DTOs first, then map into domain
//! values in one pass. The backend is loose about types, so text fields accept
//! strings, numbers, and booleans; empty strings and zero count as absent.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::domain::StudentRecord;
use crate::domain::ports::{DirectoryReply, HealthReport};

/// Body of `POST /api/student`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct StudentLookupBody<'a> {
    pub(super) enrollment_no: &'a str,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct StudentResponseDto {
    #[serde(default)]
    success: Value,
    #[serde(default, deserialize_with = "lenient_text")]
    message: Option<String>,
    #[serde(default)]
    data: Option<Value>,
}

/// Error envelope sent with non-success statuses.
#[derive(Debug, Default, Deserialize)]
pub(super) struct ErrorBodyDto {
    #[serde(default, deserialize_with = "lenient_text")]
    pub(super) message: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct HealthResponseDto {
    #[serde(default, deserialize_with = "lenient_text")]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct StudentDataDto {
    #[serde(rename = "StudentID", default, deserialize_with = "lenient_text")]
    student_id: Option<String>,
    #[serde(rename = "Name", default, deserialize_with = "lenient_text")]
    name: Option<String>,
    #[serde(rename = "Enrollmentno", default, deserialize_with = "lenient_text")]
    enrollment_no: Option<String>,
    #[serde(rename = "CollegeName", default, deserialize_with = "lenient_text")]
    college_name: Option<String>,
    #[serde(rename = "CourseName", default, deserialize_with = "lenient_text")]
    course_name: Option<String>,
    #[serde(rename = "BranchName", default, deserialize_with = "lenient_text")]
    branch_name: Option<String>,
    #[serde(rename = "MobileNo", default, deserialize_with = "lenient_text")]
    mobile_no: Option<String>,
    #[serde(rename = "FatherName", default, deserialize_with = "lenient_text")]
    father_name: Option<String>,
    #[serde(rename = "Address", default, deserialize_with = "lenient_text")]
    address: Option<String>,
    #[serde(rename = "Blood", default, deserialize_with = "lenient_text")]
    blood_group: Option<String>,
    #[serde(rename = "Phase", default, deserialize_with = "lenient_text")]
    phase: Option<String>,
    #[serde(rename = "BusRouteNo", default, deserialize_with = "lenient_text")]
    bus_route_no: Option<String>,
    #[serde(rename = "BusStop", default, deserialize_with = "lenient_text")]
    bus_stop: Option<String>,
    #[serde(rename = "imageFolderPath", default, deserialize_with = "lenient_text")]
    primary_image_path: Option<String>,
    #[serde(rename = "imageFolderPath1", default, deserialize_with = "lenient_text")]
    backup_image_path: Option<String>,
}

/// Failure while mapping a decoded success reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum ReplyMappingError {
    /// The body was not JSON.
    Decode(String),
    /// `success` was truthy but the record is unusable.
    MalformedRecord(String),
}

impl StudentResponseDto {
    /// Decode a 2xx body. Well-formed JSON that is not an object carries no
    /// `success` flag and is treated as a miss.
    pub(super) fn from_slice(body: &[u8]) -> Result<Self, ReplyMappingError> {
        let value: Value = serde_json::from_slice(body)
            .map_err(|error| ReplyMappingError::Decode(format!("invalid student JSON: {error}")))?;
        if !value.is_object() {
            return Ok(Self::default());
        }
        serde_json::from_value(value)
            .map_err(|error| ReplyMappingError::Decode(format!("invalid student reply: {error}")))
    }

    pub(super) fn into_domain_reply(self) -> Result<DirectoryReply, ReplyMappingError> {
        if !is_truthy(&self.success) {
            return Ok(DirectoryReply::NotFound {
                message: self.message,
            });
        }

        let data = match self.data {
            Some(data @ Value::Object(_)) => data,
            _ => {
                return Err(ReplyMappingError::MalformedRecord(
                    "success reply without a data object".to_owned(),
                ));
            }
        };
        let record: StudentDataDto = serde_json::from_value(data).map_err(|error| {
            ReplyMappingError::MalformedRecord(format!("invalid student data: {error}"))
        })?;
        record.into_domain_record().map(DirectoryReply::Found)
    }
}

impl StudentDataDto {
    fn into_domain_record(self) -> Result<StudentRecord, ReplyMappingError> {
        let student_id = self.student_id.ok_or_else(|| {
            ReplyMappingError::MalformedRecord("record is missing StudentID".to_owned())
        })?;

        Ok(StudentRecord {
            student_id,
            name: self.name,
            enrollment_no: self.enrollment_no,
            college_name: self.college_name,
            course_name: self.course_name,
            branch_name: self.branch_name,
            mobile_no: self.mobile_no,
            father_name: self.father_name,
            address: self.address,
            blood_group: self.blood_group,
            phase: self.phase,
            bus_route_no: self.bus_route_no,
            bus_stop: self.bus_stop,
            primary_image_path: self.primary_image_path,
            backup_image_path: self.backup_image_path,
        })
    }
}

impl HealthResponseDto {
    pub(super) fn into_domain(self) -> HealthReport {
        HealthReport {
            message: self.message,
        }
    }
}

/// JavaScript-style truthiness, matching how the backend's own client reads
/// the `success` flag.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|raw| match raw {
        Value::String(text) if !text.is_empty() => Some(text),
        Value::Number(number) if number.as_f64().is_some_and(|n| n != 0.0) => {
            Some(number.to_string())
        }
        Value::Bool(true) => Some("true".to_owned()),
        _ => None,
    }))
}
