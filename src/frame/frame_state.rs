use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tui_textarea::CursorMove;

use crate::clipboard::{self, ClipboardResult};
use crate::completion::{
    CompletionRegistry, CompletionScheduler, FilterListener, SourceFactory, default_sources,
};
use crate::config::{ClipboardBackend, Config};
use crate::error::Result;
use crate::history::{CommandHistory, HistoryCursor, is_private_command};
use crate::input::InputState;
use crate::keymap::Keymap;
use crate::messaging::{BackgroundMessage, ContentMessage, Messenger};

/// Visibility and focus of the command line
///
/// Shared with the completion scheduler, which reopens the surface after
/// each source finishes filtering.
#[derive(Debug)]
pub struct FrameView {
    visible: AtomicBool,
    focused: AtomicBool,
    blur_guard: AtomicBool,
    messenger: Messenger,
}

impl FrameView {
    pub fn new(messenger: Messenger) -> Self {
        Self {
            visible: AtomicBool::new(false),
            focused: AtomicBool::new(false),
            blur_guard: AtomicBool::new(false),
            messenger,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible.load(Ordering::SeqCst)
    }

    pub fn set_visible(&self, visible: bool) {
        self.visible.store(visible, Ordering::SeqCst);
    }

    pub fn is_focused(&self) -> bool {
        self.focused.load(Ordering::SeqCst)
    }

    /// Focus the input and keep it focused until the guard is detached
    pub fn focus(&self) {
        self.focused.store(true, Ordering::SeqCst);
        self.blur_guard.store(true, Ordering::SeqCst);
    }

    pub fn has_blur_guard(&self) -> bool {
        self.blur_guard.load(Ordering::SeqCst)
    }

    pub fn detach_blur_guard(&self) {
        self.blur_guard.store(false, Ordering::SeqCst);
    }

    /// The input lost focus; returns whether it is still focused afterwards
    pub fn on_blur(&self) -> bool {
        if self.has_blur_guard() {
            log::trace!("Blur guard refocused the command line");
            return true;
        }
        self.focused.store(false, Ordering::SeqCst);
        false
    }
}

impl FilterListener for FrameView {
    fn source_filtered(&self, title: &str) {
        if !self.is_visible() {
            return;
        }
        log::trace!("{} filtered, refreshing the command line", title);
        self.messenger.send_content(ContentMessage::Show);
        self.messenger.send_content(ContentMessage::Focus);
        self.focus();
    }
}

/// Session settings that do not change while the frame lives
#[derive(Debug, Clone)]
pub struct FrameOptions {
    /// Submitted commands are kept out of the history
    pub incognito: bool,
    pub clipboard: ClipboardBackend,
    pub debounce: Duration,
    pub keymap: Keymap,
}

impl FrameOptions {
    pub fn from_config(config: &Config, incognito: bool) -> Self {
        Self {
            incognito,
            clipboard: config.clipboard.backend,
            debounce: Duration::from_millis(config.completion.debounce_ms),
            keymap: Keymap::default(),
        }
    }
}

impl Default for FrameOptions {
    fn default() -> Self {
        Self::from_config(&Config::default(), false)
    }
}

pub struct CommandFrame {
    pub input: InputState,
    pub(super) registry: CompletionRegistry,
    scheduler: CompletionScheduler,
    history: CommandHistory,
    cursor: HistoryCursor,
    messenger: Messenger,
    pub(super) view: Arc<FrameView>,
    pub(super) keymap: Keymap,
    clipboard: ClipboardBackend,
    incognito: bool,
}

impl CommandFrame {
    pub fn new(
        sources: SourceFactory,
        history: CommandHistory,
        messenger: Messenger,
        options: FrameOptions,
    ) -> Self {
        let registry = CompletionRegistry::new(sources);
        let view = Arc::new(FrameView::new(messenger.clone()));
        let scheduler = CompletionScheduler::new(
            registry.clone(),
            Arc::clone(&view) as Arc<dyn FilterListener>,
            options.debounce,
        );

        Self {
            input: InputState::new(),
            registry,
            scheduler,
            history,
            cursor: HistoryCursor::new(),
            messenger,
            view,
            keymap: options.keymap,
            clipboard: options.clipboard,
            incognito: options.incognito,
        }
    }

    /// A frame with the default completion sources
    pub fn from_config(
        config: &Config,
        history: CommandHistory,
        messenger: Messenger,
        incognito: bool,
    ) -> Self {
        let sources = default_sources(&config.completion, history.clone());
        Self::new(
            sources,
            history,
            messenger,
            FrameOptions::from_config(config, incognito),
        )
    }

    pub fn view(&self) -> &FrameView {
        &self.view
    }

    pub fn registry(&self) -> &CompletionRegistry {
        &self.registry
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    pub fn cursor(&self) -> &HistoryCursor {
        &self.cursor
    }

    pub fn is_visible(&self) -> bool {
        self.view.is_visible()
    }

    pub fn focus(&mut self) {
        self.view.focus();
    }

    pub fn next_completion(&mut self) {
        self.registry.next_all();
    }

    pub fn prev_completions(&mut self) {
        self.registry.prev_all();
    }

    /// Replace the input with the selected completion
    ///
    /// Every source's selection is cleared either way.
    pub fn insert_completion(&mut self) {
        let completion = self.registry.completion();
        self.registry.clear_completions();
        if let Some(completion) = completion {
            self.input.set_text(&format!("{} ", completion));
        }
    }

    pub fn insert_completion_or_space(&mut self) {
        let before = self.input.text().to_string();
        self.insert_completion();
        if self.input.text() == before {
            self.input.textarea.move_cursor(CursorMove::End);
            self.input.textarea.insert_char(' ');
        }
    }

    /// Recall the `n`th matching history entry relative to the current one
    pub fn history_step(&mut self, n: i64) {
        let entries = self.history.entries();
        let text = self.cursor.step(n, self.input.text(), &entries);
        self.input.set_text(&text);
    }

    /// Submit the selected completion, or the typed line, to the background
    pub fn process(&mut self) -> Result<()> {
        let command = self
            .registry
            .completion()
            .unwrap_or_else(|| self.input.text().to_string());

        self.hide_and_clear();

        let func = command.split_whitespace().next().unwrap_or_default();
        if func.is_empty() || func.starts_with('#') {
            log::debug!("Dropped empty or commented command line");
            return Ok(());
        }

        if self.incognito || is_private_command(&command) {
            log::debug!("Not recording private command in history");
        } else {
            self.history.push(command.clone());
        }
        self.cursor.reset();

        self.messenger
            .send_background(BackgroundMessage::RecvExStr(command))
    }

    pub fn fillcmdline(&mut self, text: &str, trailing_space: bool, take_focus: bool) {
        if trailing_space {
            self.input.set_text(&format!("{} ", text));
        } else {
            self.input.set_text(text);
        }
        self.view.set_visible(true);

        if take_focus {
            self.focus();
            self.on_input_changed();
        }
    }

    pub fn get_content(&self) -> String {
        self.input.text().to_string()
    }

    pub fn set_clipboard(&mut self, text: &str) -> ClipboardResult {
        clipboard::copy_to_clipboard(text, self.clipboard)?;
        log::info!("set clipboard: {}", text);
        self.release_focus();
        Ok(())
    }

    pub fn get_clipboard(&mut self) -> ClipboardResult<String> {
        let text = clipboard::read_from_clipboard(self.clipboard)?;
        self.release_focus();
        Ok(text)
    }

    /// Empty the input and forget the history navigation
    ///
    /// Detach the blur guard when the command line is about to close.
    pub fn clear(&mut self, detach_blur_guard: bool) {
        if detach_blur_guard {
            self.view.detach_blur_guard();
        }
        self.input.clear();
        self.cursor.reset();
    }

    pub fn hide_and_clear(&mut self) {
        self.clear(true);
        self.release_focus();
        self.scheduler.supersede();
        self.registry.disable();
        self.view.set_visible(false);
    }

    /// Schedule a completion pass for the current text
    pub fn on_input_changed(&mut self) {
        self.scheduler.schedule(self.input.text());
    }

    /// Wait for the scheduled completion pass to finish
    pub async fn settle(&mut self) {
        self.scheduler.settle().await;
    }

    fn release_focus(&self) {
        self.messenger.send_content(ContentMessage::Hide);
        self.messenger.send_content(ContentMessage::Blur);
        self.view.on_blur();
    }
}

#[cfg(test)]
#[path = "frame_state_tests.rs"]
mod frame_state_tests;
