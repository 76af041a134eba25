//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::HttpInventoryClient;
use crate::config::AppConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// Message shown in the banner above the page
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Bumped to refetch the listing collection - read
    pub reload_trigger: ReadSignal<u32>,
    /// Bumped to refetch the listing collection - write
    set_reload_trigger: WriteSignal<u32>,
    /// Current banner message - read
    pub notice: ReadSignal<Option<Notice>>,
    /// Current banner message - write
    set_notice: WriteSignal<Option<Notice>>,
    config: StoredValue<AppConfig>,
}

impl AppContext {
    pub fn new(
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        notice: (ReadSignal<Option<Notice>>, WriteSignal<Option<Notice>>),
        config: AppConfig,
    ) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            notice: notice.0,
            set_notice: notice.1,
            config: StoredValue::new(config),
        }
    }

    /// Invalidate the store; the app refetches `GET /inventory`
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Client for the configured inventory API
    pub fn api(&self) -> HttpInventoryClient {
        HttpInventoryClient::new(self.config.get_value())
    }

    pub fn notify(&self, kind: NoticeKind, message: impl Into<String>) {
        self.set_notice.set(Some(Notice { kind, message: message.into() }));
    }

    pub fn notify_error(&self, message: impl Into<String>) {
        self.notify(NoticeKind::Error, message);
    }

    pub fn notify_info(&self, message: impl Into<String>) {
        self.notify(NoticeKind::Info, message);
    }

    pub fn dismiss_notice(&self) {
        self.set_notice.set(None);
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
