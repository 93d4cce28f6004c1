//! User-facing strings and timestamp formatting per locale.

use std::{fmt, str::FromStr};

use chrono::{DateTime, FixedOffset, TimeZone};

use crate::error::ClientError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Ru,
}

#[derive(Debug)]
pub struct Messages {
    pub heading: &'static str,
    pub subtitle: &'static str,
    pub title_label: &'static str,
    pub title_placeholder: &'static str,
    pub title_required: &'static str,
    pub submit: &'static str,
    pub submitting: &'static str,
    pub error_heading: &'static str,
    pub success_heading: &'static str,
    pub id_row: &'static str,
    pub title_row: &'static str,
    pub created_row: &'static str,
    pub create_failed: &'static str,
    pub network_error: &'static str,
    pub status_label: &'static str,
    pub worker_starting: &'static str,
    pub worker_ready: &'static str,
    pub worker_failed: &'static str,
    pub queue_full: &'static str,
    pub worker_disconnected: &'static str,
    timestamp_format: &'static str,
}

const EN: Messages = Messages {
    heading: "Create a chat",
    subtitle: "Enter a chat title and send it to the API.",
    title_label: "Title",
    title_placeholder: "e.g. Support",
    title_required: "Please fill out this field.",
    submit: "Create chat",
    submitting: "Sending...",
    error_heading: "Error",
    success_heading: "Chat created",
    id_row: "ID",
    title_row: "Title",
    created_row: "Created",
    create_failed: "could not create chat",
    network_error: "network error",
    status_label: "Status:",
    worker_starting: "Backend worker starting...",
    worker_ready: "Backend worker ready",
    worker_failed: "Backend worker failed to start",
    queue_full: "request queue is full; please retry",
    worker_disconnected: "backend worker is not running",
    timestamp_format: "%-m/%-d/%Y, %-I:%M:%S %p",
};

const RU: Messages = Messages {
    heading: "Создание чата",
    subtitle: "Введите название чата и отправьте запрос в API.",
    title_label: "Название",
    title_placeholder: "Например, Support",
    title_required: "Заполните это поле.",
    submit: "Создать чат",
    submitting: "Отправка...",
    error_heading: "Ошибка",
    success_heading: "Чат создан",
    id_row: "ID",
    title_row: "Название",
    created_row: "Создан",
    create_failed: "Не удалось создать чат.",
    network_error: "Ошибка сети.",
    status_label: "Статус:",
    worker_starting: "Запуск фонового обработчика...",
    worker_ready: "Фоновый обработчик готов",
    worker_failed: "Не удалось запустить фоновый обработчик",
    queue_full: "Очередь запросов заполнена, повторите попытку.",
    worker_disconnected: "Фоновый обработчик не запущен.",
    timestamp_format: "%d.%m.%Y, %H:%M:%S",
};

impl Locale {
    pub fn messages(self) -> &'static Messages {
        match self {
            Self::En => &EN,
            Self::Ru => &RU,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ru => "ru",
        }
    }

    /// Renders `ts` as wall-clock time at `display_offset`.
    pub fn format_timestamp(
        self,
        ts: &DateTime<FixedOffset>,
        display_offset: &FixedOffset,
    ) -> String {
        display_offset
            .from_utc_datetime(&ts.naive_utc())
            .format(self.messages().timestamp_format)
            .to_string()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "en-us" => Ok(Self::En),
            "ru" | "ru-ru" => Ok(Self::Ru),
            _ => Err(ClientError::UnknownLocale(s.to_string())),
        }
    }
}
