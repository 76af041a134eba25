//! Notice Banner Component
//!
//! Shows the context's current notice. Info notices clear themselves.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::{use_app_context, Notice, NoticeKind};

const INFO_DISMISS_MS: u32 = 4_000;

#[component]
pub fn NoticeBanner() -> impl IntoView {
    let ctx = use_app_context();

    // Auto-dismiss info notices unless replaced in the meantime
    Effect::new(move |_| {
        if let Some(notice @ Notice { kind: NoticeKind::Info, .. }) = ctx.notice.get() {
            spawn_local(async move {
                TimeoutFuture::new(INFO_DISMISS_MS).await;
                if ctx.notice.get_untracked().as_ref() == Some(&notice) {
                    ctx.dismiss_notice();
                }
            });
        }
    });

    view! {
        {move || ctx.notice.get().map(|notice| {
            let class = match notice.kind {
                NoticeKind::Info => "notice notice-info",
                NoticeKind::Error => "notice notice-error",
            };
            view! {
                <div class=class role="status">
                    <span class="notice-message">{notice.message}</span>
                    <button class="notice-close" on:click=move |_| ctx.dismiss_notice()>"×"</button>
                </div>
            }
        })}
    }
}
