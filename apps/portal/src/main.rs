//! Coursegate portal runtime.
//!
//! A headless front end for the course catalog: it signs in as the
//! configured user, loads the dashboard, and optionally opens one
//! course detail screen, logging what the user would see.

#![forbid(unsafe_code)]

use std::env;
use std::sync::Arc;
use std::time::Duration;

use coursegate_application::{CandidateInstructorSource, CourseService};
use coursegate_core::{AppError, AppResult, ResourceId, UserIdentity};
use coursegate_domain::LessonBrowser;
use coursegate_infrastructure::{
    HttpRecordStore, TracingNavigationSink, TracingNotificationSink, UuidCandidateSource,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone)]
struct PortalConfig {
    record_store_url: String,
    user_id: String,
    user_name: String,
    course_id: Option<String>,
    invite_instructor: bool,
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = PortalConfig::load()?;
    let http_client = reqwest::Client::builder()
        .timeout(Duration::from_secs(15))
        .build()
        .map_err(|error| {
            AppError::Persistence(format!("failed to build HTTP client: {error}"))
        })?;

    let store = Arc::new(HttpRecordStore::new(
        http_client,
        config.record_store_url.clone(),
    ));
    let courses = CourseService::new(
        store.clone(),
        store,
        Arc::new(TracingNotificationSink::new()),
        Arc::new(TracingNavigationSink::new()),
    );

    let actor = UserIdentity::new(
        ResourceId::from(config.user_id.as_str()),
        config.user_name.clone(),
    );

    info!(
        record_store_url = %config.record_store_url,
        user_id = %actor.id(),
        user_name = actor.name(),
        "coursegate-portal started"
    );

    let dashboard = courses.my_courses(&actor).await?;
    info!(course_count = dashboard.len(), "dashboard loaded");
    for course in &dashboard {
        info!(course_id = %course.id(), name = course.name(), "visible course");
    }

    let Some(course_id) = config.course_id else {
        return Ok(());
    };
    let course_id = ResourceId::from(course_id.as_str());

    let detail = courses.course_detail(&actor, &course_id).await?;
    info!(
        course_id = %course_id,
        name = detail.course.name(),
        is_creator = detail.roles.is_creator(),
        is_instructor = detail.roles.is_instructor(),
        lesson_count = detail.lessons.len(),
        "course detail loaded"
    );

    let browser = LessonBrowser::new();
    let page = browser.project(&detail.lessons);
    info!(
        page = page.page,
        total_pages = page.total_pages,
        "first lesson page"
    );
    for lesson in &page.items {
        info!(
            lesson_id = %lesson.id(),
            title = lesson.title(),
            status = lesson.status().as_str(),
            "lesson"
        );
    }

    if config.invite_instructor {
        let candidate = UuidCandidateSource::new().next_candidate().await?;
        let updated = courses
            .add_instructor(&actor, &course_id, candidate)
            .await?;
        info!(
            course_id = %course_id,
            roster_size = updated.instructors().len(),
            "instructor added"
        );
    }

    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}

impl PortalConfig {
    fn load() -> AppResult<Self> {
        let record_store_url = env::var("RECORD_STORE_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:3001".to_owned())
            .trim_end_matches('/')
            .to_owned();
        let user_id = required_env("PORTAL_USER_ID")?;
        let user_name = required_env("PORTAL_USER_NAME")?;
        let course_id = env::var("PORTAL_COURSE_ID")
            .ok()
            .map(|value| value.trim().to_owned())
            .filter(|value| !value.is_empty());
        let invite_instructor = parse_env_bool("PORTAL_INVITE_INSTRUCTOR", false)?;

        if invite_instructor && course_id.is_none() {
            return Err(AppError::Validation(
                "PORTAL_INVITE_INSTRUCTOR requires PORTAL_COURSE_ID".to_owned(),
            ));
        }

        Ok(Self {
            record_store_url,
            user_id,
            user_name,
            course_id,
            invite_instructor,
        })
    }
}

fn required_env(name: &str) -> AppResult<String> {
    env::var(name).map_err(|_| AppError::Validation(format!("{name} is required")))
}

fn parse_env_bool(name: &str, default: bool) -> AppResult<bool> {
    match env::var(name) {
        Ok(value) => value.parse::<bool>().map_err(|error| {
            AppError::Validation(format!("invalid {name} value '{value}': {error}"))
        }),
        Err(_) => Ok(default),
    }
}
