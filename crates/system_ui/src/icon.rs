//! Centralized icon names rendered as `data-ui-icon` glyph spans.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Icons used by the document browser.
pub enum IconName {
    /// Closed folder.
    Folder,
    /// Generic document.
    File,
    /// Magnifier.
    Search,
    /// Upload arrow.
    Upload,
    /// Close / remove.
    Close,
    /// Check mark.
    Check,
    /// Alert circle.
    Alert,
    /// Previous page.
    ChevronLeft,
    /// Next page.
    ChevronRight,
    /// Ascending sort.
    SortAscending,
    /// Descending sort.
    SortDescending,
    /// Unsorted column.
    SortNone,
    /// Overflow menu.
    More,
    /// Retry.
    Refresh,
    /// Home.
    Home,
}

impl IconName {
    /// Stable token written to `data-ui-icon`.
    pub fn token(self) -> &'static str {
        match self {
            Self::Folder => "folder",
            Self::File => "file",
            Self::Search => "search",
            Self::Upload => "upload",
            Self::Close => "close",
            Self::Check => "check",
            Self::Alert => "alert",
            Self::ChevronLeft => "chevron-left",
            Self::ChevronRight => "chevron-right",
            Self::SortAscending => "sort-ascending",
            Self::SortDescending => "sort-descending",
            Self::SortNone => "sort-none",
            Self::More => "more",
            Self::Refresh => "refresh",
            Self::Home => "home",
        }
    }

    fn glyph(self) -> &'static str {
        match self {
            Self::Folder => "\u{1F4C1}",
            Self::File => "\u{1F4C4}",
            Self::Search => "\u{1F50D}",
            Self::Upload => "\u{2B06}",
            Self::Close => "\u{2715}",
            Self::Check => "\u{2713}",
            Self::Alert => "\u{26A0}",
            Self::ChevronLeft => "\u{2039}",
            Self::ChevronRight => "\u{203A}",
            Self::SortAscending => "\u{25B2}",
            Self::SortDescending => "\u{25BC}",
            Self::SortNone => "\u{2195}",
            Self::More => "\u{22EE}",
            Self::Refresh => "\u{21BB}",
            Self::Home => "\u{2302}",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Icon sizing tokens.
pub enum IconSize {
    /// Inline with dense text.
    Sm,
    /// Default.
    #[default]
    Md,
    /// Hero/empty-state icon.
    Lg,
}

impl IconSize {
    fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[component]
/// Decorative icon glyph.
pub fn Icon(icon: IconName, #[prop(default = IconSize::Md)] size: IconSize) -> impl IntoView {
    view! {
        <span
            class="ui-icon"
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="icon"
            data-ui-icon=icon.token()
            data-ui-size=size.token()
        >
            {icon.glyph()}
        </span>
    }
}
