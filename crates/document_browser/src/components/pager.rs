//! Listing pager.

use leptos::*;
use system_ui::{Button, ButtonSize, ButtonVariant, Cluster, IconButton, IconName, LayoutGap, LayoutJustify, Text, TextTone};

use crate::pagination::{rows_per_page_caption, PagerModel};

#[component]
/// Previous / numbered / next page buttons.
pub fn Pager(
    /// Page position from the listing response.
    model: PagerModel,
    /// Rows per page, shown in the caption.
    page_size: u32,
    /// Receives the requested 1-based page.
    on_page: Callback<u32>,
) -> impl IntoView {
    let go_to = move |target: Option<u32>| {
        if let Some(page) = target {
            on_page.call(page);
        }
    };

    view! {
        <Cluster justify=LayoutJustify::Between layout_class="document-pager">
            <Text tone=TextTone::Secondary>{rows_per_page_caption(page_size)}</Text>
            <Cluster gap=LayoutGap::Sm>
                <IconButton
                    icon=IconName::ChevronLeft
                    aria_label="Previous page"
                    disabled=model.prev_disabled()
                    on_click=Callback::new(move |_| go_to(model.prev_page()))
                />
                {model
                    .buttons()
                    .into_iter()
                    .map(|button| {
                        let variant = if button.current {
                            ButtonVariant::Primary
                        } else {
                            ButtonVariant::Quiet
                        };
                        view! {
                            <Button
                                variant=variant
                                size=ButtonSize::Sm
                                layout_class="document-pager-page"
                                selected=button.current
                                aria_current=button.aria_current().unwrap_or_default()
                                on_click=Callback::new(move |_| on_page.call(button.page))
                            >
                                {button.page}
                            </Button>
                        }
                    })
                    .collect_view()}
                <IconButton
                    icon=IconName::ChevronRight
                    aria_label="Next page"
                    disabled=model.next_disabled()
                    on_click=Callback::new(move |_| go_to(model.next_page()))
                />
            </Cluster>
        </Cluster>
    }
}
