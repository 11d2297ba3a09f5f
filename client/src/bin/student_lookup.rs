//! Look up students by enrollment number and print their portal cards.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::ffi::OsString;
use std::io::{self, Write};
use std::sync::Arc;

use clap::Parser;
use ortho_config::OrthoConfig;
use student_portal_client::PortalClientSettings;
use student_portal_client::domain::{
    Banner, CardView, LookupSession, PhotoView, StudentLookupClient, report_backend_health,
};
use student_portal_client::outbound::portal_http::PortalHttpClient;
use tokio::runtime::Builder;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

/// `student-lookup` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "student-lookup",
    about = "Fetch student details from the portal backend by enrollment number",
    version
)]
struct CliArgs {
    /// Enrollment numbers to look up, in order.
    #[arg(value_name = "ENROLLMENT_NO", required = true)]
    enrollment_numbers: Vec<String>,
    /// Portal backend origin. Overrides `STUDENT_PORTAL_SERVER_URL`.
    #[arg(long = "server-url", value_name = "url")]
    server_url: Option<String>,
    /// Per-request timeout in seconds. Overrides `STUDENT_PORTAL_TIMEOUT_SECS`.
    #[arg(long = "timeout-secs", value_name = "seconds")]
    timeout_secs: Option<u64>,
    /// Skip the start-up health probe.
    #[arg(long = "skip-health-check")]
    skip_health_check: bool,
}

fn main() -> io::Result<()> {
    let args = CliArgs::try_parse().map_err(io::Error::other)?;
    let settings = resolve_settings(&args)?;
    init_tracing(settings.json_logs);

    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|error| io::Error::other(format!("create Tokio runtime: {error}")))?;
    runtime.block_on(async_main(args, settings))
}

async fn async_main(args: CliArgs, settings: PortalClientSettings) -> io::Result<()> {
    let server_url = settings.server_url().map_err(invalid_input)?;
    let timeout = settings.timeout().map_err(invalid_input)?;
    let portal = Arc::new(
        PortalHttpClient::new(server_url, timeout)
            .map_err(|error| io::Error::other(format!("create portal client: {error}")))?,
    );

    if settings.health_check {
        report_backend_health(portal.as_ref()).await;
    }

    let images = Arc::new(portal.image_probe());
    let session = LookupSession::new(StudentLookupClient::new(portal, images));

    let mut stdout = io::stdout().lock();
    for enrollment_no in &args.enrollment_numbers {
        let view = session.submit(enrollment_no).await;
        write_view(&mut stdout, enrollment_no, &view)?;
    }
    stdout.flush()
}

fn resolve_settings(args: &CliArgs) -> io::Result<PortalClientSettings> {
    let mut settings = PortalClientSettings::load_from_iter([OsString::from("student-lookup")])
        .map_err(|error| io::Error::other(format!("load configuration: {error}")))?;
    if let Some(server_url) = &args.server_url {
        settings.server_url = Some(server_url.clone());
    }
    if args.timeout_secs.is_some() {
        settings.timeout_secs = args.timeout_secs;
    }
    if args.skip_health_check {
        settings.health_check = false;
    }
    Ok(settings)
}

fn init_tracing(json: bool) {
    let builder = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr);
    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    if let Err(error) = result {
        warn!(%error, "tracing init failed");
    }
}

fn invalid_input(error: impl std::fmt::Display) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, error.to_string())
}

fn write_view(out: &mut impl Write, enrollment_no: &str, view: &CardView) -> io::Result<()> {
    writeln!(out, "== {enrollment_no}")?;
    match &view.banner {
        Some(Banner::Success(message)) => writeln!(out, "ok: {message}")?,
        Some(Banner::Error(message)) => writeln!(out, "error: {message}")?,
        None => {}
    }
    let Some(card) = &view.card else {
        return Ok(());
    };
    let width = card
        .rows
        .iter()
        .map(|row| row.label.chars().count())
        .max()
        .unwrap_or(0);
    for row in &card.rows {
        writeln!(out, "{:<width$}  {}", row.label, row.value)?;
    }
    match &card.photo {
        PhotoView::Image { src, .. } => writeln!(out, "{:<width$}  {src}", "Photo"),
        PhotoView::Placeholder { caption } => writeln!(out, "{:<width$}  {caption}", "Photo"),
        PhotoView::Pending => writeln!(out, "{:<width$}  (loading)", "Photo"),
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for CLI parsing and card output.

    use env_lock::lock_env;
    use rstest::rstest;
    use student_portal_client::domain::{LookupOutcome, PhotoResolution, StudentRecord};

    use super::*;

    #[rstest]
    fn parses_multiple_numbers_and_overrides() {
        let args = CliArgs::try_parse_from([
            "student-lookup",
            "--server-url",
            "http://portal.test",
            "--skip-health-check",
            "AB123",
            "CD456",
        ])
        .expect("arguments should parse");
        assert_eq!(args.enrollment_numbers, ["AB123", "CD456"]);
        assert_eq!(args.server_url.as_deref(), Some("http://portal.test"));
        assert!(args.skip_health_check);
    }

    #[rstest]
    fn requires_at_least_one_number() {
        assert!(CliArgs::try_parse_from(["student-lookup"]).is_err());
    }

    #[rstest]
    fn cli_flags_override_environment_settings() {
        let _guard = lock_env([
            (
                "STUDENT_PORTAL_SERVER_URL",
                Some("http://env.portal.test".to_owned()),
            ),
            ("STUDENT_PORTAL_TIMEOUT_SECS", Some("30".to_owned())),
            ("STUDENT_PORTAL_HEALTH_CHECK", None::<String>),
            ("STUDENT_PORTAL_JSON_LOGS", None::<String>),
        ]);
        let args = CliArgs::try_parse_from([
            "student-lookup",
            "--server-url",
            "http://cli.portal.test",
            "--skip-health-check",
            "AB123",
        ])
        .expect("arguments should parse");

        let settings = resolve_settings(&args).expect("settings should resolve");

        assert_eq!(settings.server_url.as_deref(), Some("http://cli.portal.test"));
        assert_eq!(settings.timeout_secs, Some(30));
        assert!(!settings.health_check);
        assert!(!settings.json_logs);
    }

    #[rstest]
    fn writes_aligned_card() {
        let record = StudentRecord {
            name: Some("Asha".to_owned()),
            ..StudentRecord::new("S1")
        };
        let view = CardView::render(&LookupOutcome::Success(record), &PhotoResolution::NoPhoto);

        let mut out = Vec::new();
        write_view(&mut out, "AB123", &view).expect("write to buffer");
        let text = String::from_utf8(out).expect("utf-8 output");

        assert!(text.starts_with("== AB123\nok: Student details retrieved successfully!\n"));
        assert!(text.contains("Student ID     S1\n"));
        assert!(text.contains("Student Name   Asha\n"));
        assert!(text.ends_with("Photo          Photo Not Available\n"));
    }

    #[rstest]
    fn writes_error_banner_only() {
        let view = CardView::render(
            &LookupOutcome::NotFound("none".to_owned()),
            &PhotoResolution::NoPhoto,
        );
        let mut out = Vec::new();
        write_view(&mut out, "AB123", &view).expect("write to buffer");
        assert_eq!(
            String::from_utf8(out).expect("utf-8 output"),
            "== AB123\nerror: none\n"
        );
    }
}
