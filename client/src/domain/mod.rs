//! Domain model and services for the enrollment-number lookup.
//!
//! Purpose: validate lookups, classify backend replies, resolve photos, and
//! render the student card view model. The domain depends only on the traits
//! in [`ports`]; HTTP concerns live in `crate::outbound`.
//!
//! Public surface:
//! - `LookupRequest` / `validate`: enrollment-number shape checks.
//! - `StudentLookupClient`: `search` and `resolve_photo`.
//! - `LookupSession`: serialised searches over a single rendered view.
//! - `CardView`: pure rendering of outcomes into a view model.

pub mod card_view;
pub mod detail_rows;
pub mod health;
pub mod lookup;
pub mod lookup_request;
pub mod photo;
pub mod ports;
pub mod session;
pub mod student_record;

pub use self::card_view::{Banner, CardView, PhotoView, StudentCard};
pub use self::detail_rows::{DetailRow, NOT_AVAILABLE, render_fields};
pub use self::health::report_backend_health;
pub use self::lookup::{LookupOutcome, StudentLookupClient};
pub use self::lookup_request::{LookupRequest, LookupRequestError, validate};
pub use self::photo::{PhotoResolution, resolve_photo};
pub use self::session::LookupSession;
pub use self::student_record::StudentRecord;
