use std::rc::Rc;

use document_api::{ApiConfig, DocumentApi};
use document_api_web::{backend_strategy_name, document_api};
use document_browser::{BrowserProvider, DocumentBrowser};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Documents" />
        <Meta name="description" content="Browse, search, and upload documents and folders." />

        <Router>
            <main class="site-root">
                <Routes>
                    <Route path="" view=BrowserEntry />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
pub fn BrowserEntry() -> impl IntoView {
    let config = ApiConfig::from_build_env();
    logging::log!(
        "document api: {} backend at {}",
        backend_strategy_name(),
        config.base_url()
    );
    let api: Rc<dyn DocumentApi> = Rc::new(document_api(config.clone()));

    view! {
        <BrowserProvider api=api config=config>
            <DocumentBrowser />
        </BrowserProvider>
    }
}
