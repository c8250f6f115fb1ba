//! Share and copy-link actions with transient button feedback.

use std::io;
use std::process::{Child, Command, Stdio};
use std::time::{Duration, Instant};

use crossterm::{clipboard::CopyToClipboard, execute};

/// How long the copy button shows its feedback and ignores presses.
pub const FLASH_DURATION: Duration = Duration::from_millis(1200);

pub const COPY_LABEL: &str = "Copy link";
const COPIED_MESSAGE: &str = "Copied";
const LINK_COPIED_MESSAGE: &str = "Link copied";

/// Somewhere text can be copied to.
pub trait Clipboard {
    fn copy(&mut self, text: &str) -> io::Result<()>;
}

/// The terminal's clipboard, reached through the OSC 52 escape sequence.
#[derive(Debug, Default)]
pub struct TerminalClipboard;

impl Clipboard for TerminalClipboard {
    fn copy(&mut self, text: &str) -> io::Result<()> {
        execute!(io::stdout(), CopyToClipboard::to_clipboard_from(text))
    }
}

#[derive(Debug, Clone)]
struct Flash {
    message: &'static str,
    until: Instant,
}

/// What a share request ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    /// Handed to the external share command.
    Delegated,
    /// Copied to the clipboard instead.
    Copied,
    /// Nothing happened; the failure was logged.
    Failed,
}

/// The share and copy buttons.
#[derive(Debug, Default)]
pub struct LinkActions<C> {
    clipboard: C,
    flash: Option<Flash>,
    /// Share commands still running; reaped as they exit.
    children: Vec<Child>,
}

impl<C: Clipboard> LinkActions<C> {
    pub fn new(clipboard: C) -> Self {
        Self {
            clipboard,
            flash: None,
            children: Vec::new(),
        }
    }

    /// Copy `url` to the clipboard. Ignored while the copy button is
    /// showing feedback. Returns whether the link was copied.
    pub fn copy(&mut self, url: &str, now: Instant) -> bool {
        if self.is_flashing(now) {
            return false;
        }
        self.copy_and_flash(url, COPIED_MESSAGE, now)
    }

    /// Share `url` through `share_command` when one is configured, falling
    /// back to the clipboard.
    pub fn share(&mut self, url: &str, share_command: Option<&str>, now: Instant) -> ShareOutcome {
        if let Some(program) = share_command {
            let spawned = Command::new(program)
                .arg(url)
                .stdin(Stdio::null())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .spawn();
            return match spawned {
                Ok(child) => {
                    tracing::info!(program, pid = child.id(), "link handed to share command");
                    self.children.push(child);
                    ShareOutcome::Delegated
                }
                Err(e) => {
                    tracing::warn!(program, error = %e, "share command failed");
                    ShareOutcome::Failed
                }
            };
        }

        if self.copy_and_flash(url, LINK_COPIED_MESSAGE, now) {
            ShareOutcome::Copied
        } else {
            ShareOutcome::Failed
        }
    }

    /// Label to show on the copy button at `now`.
    pub fn copy_label(&self, now: Instant) -> &'static str {
        match &self.flash {
            Some(flash) if flash.until > now => flash.message,
            _ => COPY_LABEL,
        }
    }

    /// Whether the copy button is disabled at `now`.
    pub fn is_flashing(&self, now: Instant) -> bool {
        self.flash.as_ref().is_some_and(|f| f.until > now)
    }

    /// When the current feedback ends, if any is showing.
    pub fn deadline(&self) -> Option<Instant> {
        self.flash.as_ref().map(|f| f.until)
    }

    /// Drop feedback that has run its course and reap finished share
    /// commands.
    pub fn expire(&mut self, now: Instant) {
        if !self.is_flashing(now) {
            self.flash = None;
        }
        self.reap();
    }

    fn reap(&mut self) {
        self.children.retain_mut(|child| match child.try_wait() {
            Ok(Some(status)) => {
                tracing::debug!(pid = child.id(), %status, "share command exited");
                false
            }
            Ok(None) => true,
            Err(e) => {
                tracing::warn!(pid = child.id(), error = %e, "lost track of share command");
                false
            }
        });
    }

    fn copy_and_flash(&mut self, url: &str, message: &'static str, now: Instant) -> bool {
        match self.clipboard.copy(url) {
            Ok(()) => {
                tracing::info!(url, "link copied");
                self.flash = Some(Flash {
                    message,
                    until: now + FLASH_DURATION,
                });
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "clipboard write failed");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct FakeClipboard {
        copied: Vec<String>,
        broken: bool,
    }

    impl Clipboard for FakeClipboard {
        fn copy(&mut self, text: &str) -> io::Result<()> {
            if self.broken {
                return Err(io::Error::other("no clipboard"));
            }
            self.copied.push(text.to_string());
            Ok(())
        }
    }

    const URL: &str = "https://example.com";

    #[test]
    fn test_copy_flashes_and_disables() {
        let mut links = LinkActions::new(FakeClipboard::default());
        let now = Instant::now();
        assert_eq!(links.copy_label(now), COPY_LABEL);

        assert!(links.copy(URL, now));
        assert_eq!(links.copy_label(now), "Copied");
        assert!(links.is_flashing(now + Duration::from_millis(1199)));

        // Disabled while flashing.
        assert!(!links.copy(URL, now + Duration::from_millis(500)));
        assert_eq!(links.clipboard.copied.len(), 1);
    }

    #[test]
    fn test_flash_restores_label() {
        let mut links = LinkActions::new(FakeClipboard::default());
        let now = Instant::now();
        links.copy(URL, now);
        let later = now + FLASH_DURATION;
        assert_eq!(links.copy_label(later), COPY_LABEL);
        assert!(!links.is_flashing(later));

        links.expire(later);
        assert!(links.deadline().is_none());
        assert!(links.copy(URL, later));
    }

    #[test]
    fn test_share_without_command_copies() {
        let mut links = LinkActions::new(FakeClipboard::default());
        let now = Instant::now();
        assert_eq!(links.share(URL, None, now), ShareOutcome::Copied);
        assert_eq!(links.clipboard.copied, vec![URL.to_string()]);
        assert_eq!(links.copy_label(now), "Link copied");
    }

    #[test]
    fn test_clipboard_failure_shows_no_feedback() {
        let mut links = LinkActions::new(FakeClipboard {
            broken: true,
            ..Default::default()
        });
        let now = Instant::now();
        assert!(!links.copy(URL, now));
        assert_eq!(links.share(URL, None, now), ShareOutcome::Failed);
        assert_eq!(links.copy_label(now), COPY_LABEL);
    }

    #[test]
    fn test_missing_share_command_is_swallowed() {
        let mut links = LinkActions::new(FakeClipboard::default());
        let outcome = links.share(
            URL,
            Some("/nonexistent/starcard-share-helper"),
            Instant::now(),
        );
        assert_eq!(outcome, ShareOutcome::Failed);
        assert!(links.clipboard.copied.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_finished_share_commands_are_reaped() {
        let mut links = LinkActions::new(FakeClipboard::default());
        let now = Instant::now();
        for _ in 0..5 {
            assert_eq!(links.share(URL, Some("true"), now), ShareOutcome::Delegated);
        }
        assert_eq!(links.children.len(), 5);
        assert!(links.clipboard.copied.is_empty());

        let give_up = Instant::now() + Duration::from_secs(5);
        while !links.children.is_empty() && Instant::now() < give_up {
            std::thread::sleep(Duration::from_millis(20));
            links.expire(Instant::now());
        }
        assert!(links.children.is_empty());
    }
}
