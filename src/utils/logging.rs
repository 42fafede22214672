use crate::core::message::{Message, TranscriptRole};
use chrono::Local;
use std::error::Error;
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Appends rendered conversation entries to a plain-text transcript file.
pub struct LoggingState {
    file_path: Option<String>,
    is_active: bool,
}

impl LoggingState {
    /// A file given at startup is opened immediately and logging starts active.
    pub fn new(log_file: Option<String>) -> Result<Self, Box<dyn Error>> {
        let mut logging = LoggingState {
            file_path: None,
            is_active: false,
        };
        if let Some(path) = log_file {
            logging.set_log_file(path)?;
        }
        Ok(logging)
    }

    pub fn set_log_file(&mut self, path: String) -> Result<String, Box<dyn Error>> {
        test_file_access(&path)?;

        self.file_path = Some(path.clone());
        self.is_active = true;

        Ok(format!("Logging enabled to: {path}"))
    }

    pub fn toggle_logging(&mut self) -> Result<String, Box<dyn Error>> {
        let Some(path) = self.file_path.clone() else {
            return Err("No log file specified. Use /log <filename> to enable logging first.".into());
        };

        if self.is_active {
            let stamp = Local::now().format("%Y-%m-%d %H:%M:%S");
            self.write_to_log(&format!("## Logging paused at {stamp}"))?;
            self.is_active = false;
            Ok(format!("Logging paused (file: {path})"))
        } else {
            self.is_active = true;
            let stamp = Local::now().format("%Y-%m-%d %H:%M:%S");
            self.write_to_log(&format!("## Logging resumed at {stamp}"))?;
            Ok(format!("Logging resumed to: {path}"))
        }
    }

    /// Writes one entry. `language` labels translated entries.
    pub fn log_message(&self, message: &Message, language: &str) -> Result<(), Box<dyn Error>> {
        if !self.is_active {
            return Ok(());
        }
        self.write_to_log(&transcript_text(message, language))
    }

    fn write_to_log(&self, content: &str) -> Result<(), Box<dyn Error>> {
        let Some(file_path) = self.file_path.as_ref() else {
            return Ok(());
        };

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(file_path)?;
        let mut writer = BufWriter::new(file);

        for line in content.lines() {
            writeln!(writer, "{line}")?;
        }
        writeln!(writer)?;

        writer.flush()?;
        Ok(())
    }

    /// Short status for usage hints: disabled, active or paused.
    pub fn get_status_string(&self) -> String {
        let file_name = |path: &str| {
            Path::new(path)
                .file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .into_owned()
        };
        match (&self.file_path, self.is_active) {
            (None, _) => "disabled".to_string(),
            (Some(path), true) => format!("active ({})", file_name(path)),
            (Some(path), false) => format!("paused ({})", file_name(path)),
        }
    }
}

/// How an entry reads in the transcript file. Bot replies carry no prefix.
pub fn transcript_text(message: &Message, language: &str) -> String {
    match message.role {
        TranscriptRole::User => format!("Você: {}", message.content),
        TranscriptRole::Bot => message.content.clone(),
        TranscriptRole::Translated => format!("[{language}] {}", message.content),
        TranscriptRole::AppInfo | TranscriptRole::AppError => format!("## {}", message.content),
    }
}

fn test_file_access(path: &str) -> Result<(), Box<dyn Error>> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.flush()?;
    Ok(())
}
