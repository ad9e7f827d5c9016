//! Tracing-backed sinks for development. Logs notices and navigation
//! intents instead of driving a user interface.

use async_trait::async_trait;
use coursegate_application::{NavigationIntent, NavigationSink, Notice, NoticeKind, NotificationSink};
use coursegate_core::AppResult;
use tracing::{error, info, warn};

/// Notification sink that logs notices to tracing output.
#[derive(Debug, Clone, Default)]
pub struct TracingNotificationSink;

impl TracingNotificationSink {
    /// Creates a new tracing notification sink.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl NotificationSink for TracingNotificationSink {
    async fn publish(&self, notice: Notice) -> AppResult<()> {
        match notice.kind {
            NoticeKind::Success => info!("{}", notice.message),
            NoticeKind::Warning => warn!("{}", notice.message),
            NoticeKind::Error => error!("{}", notice.message),
        }

        Ok(())
    }
}

/// Navigation sink that logs screen transitions to tracing output.
#[derive(Debug, Clone, Default)]
pub struct TracingNavigationSink;

impl TracingNavigationSink {
    /// Creates a new tracing navigation sink.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl NavigationSink for TracingNavigationSink {
    async fn navigate(&self, intent: NavigationIntent) -> AppResult<()> {
        match intent {
            NavigationIntent::AccessDenied => info!("navigating to the access-denied screen"),
            NavigationIntent::Dashboard => info!("navigating to the dashboard"),
            NavigationIntent::CourseDetail(course_id) => {
                info!(course_id = %course_id, "navigating to course detail");
            }
        }

        Ok(())
    }
}
