use super::*;
use log::{error, info, warn};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// Diálogo modal pendiente de mostrar (equivale a un messagebox).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub text: String,
}

impl Notice {
    pub fn info(title: &str, text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            title: title.to_owned(),
            text: text.into(),
        }
    }

    pub fn warning(title: &str, text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            title: title.to_owned(),
            text: text.into(),
        }
    }

    pub fn error(title: &str, text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            title: title.to_owned(),
            text: text.into(),
        }
    }

    pub fn from_error(err: &QuizError) -> Self {
        let level = match err {
            QuizError::NotFound { .. } | QuizError::InvalidState(_) => NoticeLevel::Warning,
            QuizError::NoQuestions { .. } => NoticeLevel::Info,
            _ => NoticeLevel::Error,
        };
        Self {
            level,
            title: err.notice_title().to_owned(),
            text: capitalize(&err.to_string()),
        }
    }

    pub fn icon(&self) -> &'static str {
        match self.level {
            NoticeLevel::Info => "ℹ",
            NoticeLevel::Warning => "⚠",
            NoticeLevel::Error => "❌",
        }
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl QuizApp {
    pub fn push_notice(&mut self, notice: Notice) {
        match notice.level {
            NoticeLevel::Info => info!("[{}] {}", notice.title, notice.text),
            NoticeLevel::Warning => warn!("[{}] {}", notice.title, notice.text),
            NoticeLevel::Error => error!("[{}] {}", notice.title, notice.text),
        }
        self.notices.push_back(notice);
    }

    pub fn current_notice(&self) -> Option<&Notice> {
        self.notices.front()
    }

    pub fn dismiss_notice(&mut self) {
        self.notices.pop_front();
    }
}
