//! Folder breadcrumb trail.

use leptos::*;
use system_ui::{Button, ButtonSize, ButtonVariant, Text, TextTone};

use crate::navigation::NavigationState;

#[component]
/// Breadcrumbs for the current folder. Every segment but the last navigates on click.
pub fn Breadcrumbs(
    /// Current navigation state.
    navigation: Memo<NavigationState>,
    /// Receives the truncated navigation state.
    on_navigate: Callback<NavigationState>,
) -> impl IntoView {
    view! {
        <nav class="document-breadcrumbs" aria-label="Folder path">
            {move || {
                navigation
                    .with(NavigationState::breadcrumbs)
                    .into_iter()
                    .map(|crumb| {
                        if crumb.clickable {
                            let index = crumb.index;
                            view! {
                                <span class="document-breadcrumb">
                                    <Button
                                        variant=ButtonVariant::Quiet
                                        size=ButtonSize::Sm
                                        on_click=Callback::new(move |_| {
                                            on_navigate.call(navigation.get_untracked().truncate_to(index))
                                        })
                                    >
                                        {crumb.name}
                                    </Button>
                                    <Text tone=TextTone::Secondary>" > "</Text>
                                </span>
                            }
                            .into_view()
                        } else {
                            view! {
                                <span class="document-breadcrumb" aria-current="page">
                                    <Text tone=TextTone::Accent>{crumb.name}</Text>
                                </span>
                            }
                            .into_view()
                        }
                    })
                    .collect_view()
            }}
        </nav>
    }
}
