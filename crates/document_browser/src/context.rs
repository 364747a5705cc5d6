//! Browser provider and context wiring.
//!
//! The provider owns the injected document API, its configuration, the toast stack, and the
//! listing refresh counter. Components reach them through [`use_browser`].

use std::{rc::Rc, time::Duration};

use document_api::{ApiConfig, DocumentApi};
use leptos::*;

use crate::{
    toast::{ToastContent, ToastId, ToastQueue, TOAST_LIFETIME_MS},
    upload::UploadLimits,
};

#[derive(Clone, Copy)]
/// Leptos context shared by every browser component.
pub struct BrowserContext {
    /// Injected document API.
    pub api: StoredValue<Rc<dyn DocumentApi>>,
    /// API configuration (base URL, page size).
    pub config: StoredValue<ApiConfig>,
    /// Upload validation limits.
    pub upload_limits: StoredValue<UploadLimits>,
    /// Visible toasts.
    pub toasts: RwSignal<ToastQueue>,
    /// Bumped to refetch the current listing.
    pub refresh: RwSignal<u64>,
}

impl BrowserContext {
    /// Shared handle to the document API.
    pub fn api(&self) -> Rc<dyn DocumentApi> {
        self.api.get_value()
    }

    /// Listing page size.
    pub fn page_size(&self) -> u32 {
        self.config.with_value(ApiConfig::page_size)
    }

    /// Shows a toast and schedules its dismissal.
    pub fn notify(&self, content: ToastContent) -> ToastId {
        let mut id = ToastId(0);
        self.toasts.update(|queue| id = queue.push(content));
        let toasts = self.toasts;
        if let Err(err) = set_timeout_with_handle(
            move || toasts.update(|queue| queue.dismiss(id)),
            Duration::from_millis(TOAST_LIFETIME_MS),
        ) {
            logging::warn!("toast auto-dismiss timer failed: {err:?}");
        }
        id
    }

    /// Dismisses a toast immediately.
    pub fn dismiss(&self, id: ToastId) {
        self.toasts.update(|queue| queue.dismiss(id));
    }

    /// Refetches the current listing.
    pub fn refresh_listing(&self) {
        self.refresh.update(|generation| *generation = generation.wrapping_add(1));
    }
}

#[component]
/// Provides [`BrowserContext`] to descendant components.
pub fn BrowserProvider(
    /// Document API selected by the entry layer.
    api: Rc<dyn DocumentApi>,
    /// API configuration.
    config: ApiConfig,
    /// Upload limits; defaults to 1000 MB per file and 10 files.
    #[prop(optional)]
    upload_limits: Option<UploadLimits>,
    children: Children,
) -> impl IntoView {
    let context = BrowserContext {
        api: store_value(api),
        config: store_value(config),
        upload_limits: store_value(upload_limits.unwrap_or_default()),
        toasts: create_rw_signal(ToastQueue::default()),
        refresh: create_rw_signal(0),
    };
    provide_context(context);

    children().into_view()
}

/// Returns the current [`BrowserContext`].
///
/// # Panics
///
/// Panics if called outside [`BrowserProvider`].
pub fn use_browser() -> BrowserContext {
    use_context::<BrowserContext>().expect("BrowserContext must be provided by BrowserProvider")
}
