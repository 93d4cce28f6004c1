//! Render-ready projection of the controller.
//!
//! Front ends lay out a [`FormView`]; they never inspect the controller's
//! status directly.

use chrono::{DateTime, FixedOffset, Local, Offset, TimeZone};

use crate::{locale::Locale, submission::SubmissionController};

/// Where timestamps are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayZone {
    /// The machine's time zone, resolved for each rendered instant.
    Local,
    Fixed(FixedOffset),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewOptions {
    pub locale: Locale,
    pub zone: DisplayZone,
}

impl ViewOptions {
    pub fn local(locale: Locale) -> Self {
        Self {
            locale,
            zone: DisplayZone::Local,
        }
    }

    pub fn fixed(locale: Locale, offset: FixedOffset) -> Self {
        Self {
            locale,
            zone: DisplayZone::Fixed(offset),
        }
    }

    /// UTC offset in effect at `ts` in the display zone.
    pub fn offset_at(&self, ts: &DateTime<FixedOffset>) -> FixedOffset {
        match self.zone {
            DisplayZone::Local => Local.offset_from_utc_datetime(&ts.naive_utc()).fix(),
            DisplayZone::Fixed(offset) => offset,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub heading: &'static str,
    pub subtitle: &'static str,
    pub title_label: &'static str,
    pub title_placeholder: &'static str,
    pub title: String,
    pub submit_label: &'static str,
    pub submit_enabled: bool,
    pub error_panel: Option<ErrorPanel>,
    pub success_panel: Option<SuccessPanel>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorPanel {
    pub heading: &'static str,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuccessPanel {
    pub heading: &'static str,
    pub rows: Vec<DetailRow>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRow {
    pub label: &'static str,
    pub value: String,
}

pub fn project(controller: &SubmissionController, options: &ViewOptions) -> FormView {
    let messages = options.locale.messages();
    let pending = controller.is_pending();

    let error_panel = controller.error().map(|message| ErrorPanel {
        heading: messages.error_heading,
        message: message.to_string(),
    });

    let success_panel = controller.result().map(|chat| SuccessPanel {
        heading: messages.success_heading,
        rows: vec![
            DetailRow {
                label: messages.id_row,
                value: chat.id.to_string(),
            },
            DetailRow {
                label: messages.title_row,
                value: chat.title.clone(),
            },
            DetailRow {
                label: messages.created_row,
                value: options
                    .locale
                    .format_timestamp(&chat.created_at, &options.offset_at(&chat.created_at)),
            },
        ],
    });

    FormView {
        heading: messages.heading,
        subtitle: messages.subtitle,
        title_label: messages.title_label,
        title_placeholder: messages.title_placeholder,
        title: controller.title().to_string(),
        submit_label: if pending {
            messages.submitting
        } else {
            messages.submit
        },
        submit_enabled: !pending,
        error_panel,
        success_panel,
    }
}

#[cfg(test)]
#[path = "tests/view_tests.rs"]
mod tests;
