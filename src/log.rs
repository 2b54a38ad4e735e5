//! Activity log.
//!
//! Appends one line per run-level event to `~/.arc_scrape/activity.log`.
//! Logging failures are never allowed to break a scrape run; callers ignore
//! the returned result.

use chrono::Utc;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use crate::error::{Result, ScrapeError};

#[derive(Debug, Clone, Copy)]
pub enum LogLevel {
    Info,
    Error,
}

pub struct ActivityLogger {
    log_path: PathBuf,
}

impl ActivityLogger {
    pub fn new() -> Result<Self> {
        let user_dirs = directories::UserDirs::new().ok_or_else(|| {
            ScrapeError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "could not determine home directory",
            ))
        })?;
        let dir = user_dirs.home_dir().join(".arc_scrape");
        fs::create_dir_all(&dir)?;

        Ok(Self {
            log_path: dir.join("activity.log"),
        })
    }

    pub fn log(
        &self,
        level: LogLevel,
        subject: Option<&str>,
        event: &str,
        details: Option<&str>,
    ) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)?;

        let level_str = match level {
            LogLevel::Info => "🟢",
            LogLevel::Error => "🔴",
        };

        writeln!(
            file,
            "{} {} {} {} {}",
            Utc::now().format("%Y-%m-%d %H:%M:%S UTC"),
            level_str,
            event,
            subject.unwrap_or("*"),
            details.unwrap_or("")
        )?;

        Ok(())
    }

    pub fn info(&self, subject: Option<&str>, event: &str, details: Option<&str>) -> Result<()> {
        self.log(LogLevel::Info, subject, event, details)
    }

    pub fn error(&self, subject: Option<&str>, event: &str, details: Option<&str>) -> Result<()> {
        self.log(LogLevel::Error, subject, event, details)
    }
}

/// Best-effort info line; ignores logger setup and write failures.
pub(crate) fn log_info(subject: Option<&str>, event: &str, details: Option<&str>) {
    if let Ok(logger) = ActivityLogger::new() {
        let _ = logger.info(subject, event, details);
    }
}

/// Best-effort error line; ignores logger setup and write failures.
pub(crate) fn log_error(subject: Option<&str>, event: &str, details: Option<&str>) {
    if let Ok(logger) = ActivityLogger::new() {
        let _ = logger.error(subject, event, details);
    }
}
