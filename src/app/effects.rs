use std::io::{Write, stdout};

use base64::Engine;

use crate::app::{App, Message, Model, ToastLevel};
use crate::format;

impl App {
    /// Side effects keyed off messages: clipboard traffic and the toasts
    /// that report how it went. Runs after `update`, synchronously.
    pub(super) fn handle_message_side_effects(model: &mut Model, msg: &Message) {
        match msg {
            Message::CopyMarkdown => {
                let text = format::to_markdown(model.grid.headers(), model.grid.rows());
                match copy_to_clipboard(&text) {
                    Ok(()) => {
                        model.show_toast(ToastLevel::Info, "Table copied as Markdown");
                    }
                    Err(err) => {
                        model.show_toast(ToastLevel::Error, format!("Copy failed: {err}"));
                        tracing::warn!(%err, "markdown copy failed");
                    }
                }
            }
            Message::CopyFixedWidth => {
                let text = format::to_fixed_width(model.grid.headers(), model.grid.rows());
                match copy_to_clipboard(&text) {
                    Ok(()) => {
                        model.show_toast(ToastLevel::Info, "Table copied as fixed-width text");
                    }
                    Err(err) => {
                        model.show_toast(ToastLevel::Error, format!("Copy failed: {err}"));
                        tracing::warn!(%err, "fixed-width copy failed");
                    }
                }
            }
            Message::ReadClipboard => match read_clipboard() {
                Ok(text) => model.import_paste(&text),
                Err(err) => {
                    model.show_toast(ToastLevel::Error, format!("Clipboard read failed: {err}"));
                    tracing::warn!(%err, "clipboard read failed");
                }
            },
            _ => {}
        }
    }
}

fn read_clipboard() -> anyhow::Result<String> {
    let mut clipboard = arboard::Clipboard::new()?;
    Ok(clipboard.get_text()?)
}

fn copy_to_clipboard(text: &str) -> std::io::Result<()> {
    #[cfg(target_os = "macos")]
    {
        if copy_to_pbcopy(text).is_ok() {
            return Ok(());
        }
    }
    copy_to_clipboard_osc52(text)
}

#[cfg(target_os = "macos")]
fn copy_to_pbcopy(text: &str) -> std::io::Result<()> {
    use std::process::{Command, Stdio};

    let mut child = Command::new("pbcopy").stdin(Stdio::piped()).spawn()?;
    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(text.as_bytes())?;
    }
    let status = child.wait()?;
    if status.success() {
        Ok(())
    } else {
        Err(std::io::Error::other("pbcopy failed"))
    }
}

fn copy_to_clipboard_osc52(text: &str) -> std::io::Result<()> {
    let osc = osc52_sequence(text);
    let mut out = stdout();
    out.write_all(osc.as_bytes())?;
    out.flush()
}

fn osc52_sequence(text: &str) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(text.as_bytes());
    format!("\x1b]52;c;{encoded}\x07")
}

#[cfg(test)]
mod tests {
    use super::osc52_sequence;

    #[test]
    fn test_osc52_sequence_encodes_text() {
        let seq = osc52_sequence("hi");
        assert_eq!(seq, "\x1b]52;c;aGk=\x07");
    }
}
