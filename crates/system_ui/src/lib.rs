//! Shared UI primitive library for the document browser.
//!
//! The crate owns reusable Leptos primitives, a centralized icon API, and the stable
//! `data-ui-*` DOM contract consumed by the stylesheet. Feature crates compose these primitives
//! instead of emitting ad hoc control markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
mod primitives;

pub use icon::{Icon, IconName, IconSize};
pub use primitives::{
    Button, ButtonSize, ButtonVariant, CheckboxField, Cluster, DataTable, EmptyState,
    FieldGroup, Heading, IconButton, LayoutAlign, LayoutGap, LayoutJustify, LayoutPadding, Modal,
    ModalFooter, Panel, ProgressBar, Skeleton, Stack, Text, TextField, TextRole, TextTone,
};

/// Convenience imports for feature crates consuming the shared primitive set.
pub mod prelude {
    pub use crate::{
        Button, ButtonSize, ButtonVariant, CheckboxField, Cluster, DataTable, EmptyState,
        FieldGroup, Heading, Icon, IconButton, IconName, IconSize, LayoutAlign, LayoutGap,
        LayoutJustify, LayoutPadding, Modal, ModalFooter, Panel, ProgressBar, Skeleton, Stack,
        Text, TextField, TextRole, TextTone,
    };
}
