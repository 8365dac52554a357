// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// The native-to-web response channel.
//
// Results are delivered by constructing a callback invocation and injecting
// it into the web execution context: `window.<callback>('<payload>');`.
// The payload is embedded between single quotes WITHOUT escaping by default,
// for behavioral parity with the deployed shell — a payload containing a
// single quote will break out of the embedding. Callers that cannot accept
// that can install an escaper hook at construction time.

use std::sync::Arc;

use serde::Serialize;
use tracing::{error, trace};

/// The embedded web renderer, as far as the native side is concerned: a sink
/// for injected scripts plus history navigation for the back button.
pub trait WebRenderer: Send + Sync {
    /// Run a script inside the web execution context.
    fn receive(&self, script: &str);

    /// Whether a history back-step is available.
    fn can_go_back(&self) -> bool;

    /// Navigate the embedded content one step back.
    fn go_back(&self);
}

/// Hook applied to the serialized payload before it is embedded between
/// single quotes. The default channel installs none.
pub type PayloadEscaper = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Serializes capability results and injects callback invocations.
pub struct ResponseChannel {
    renderer: Arc<dyn WebRenderer>,
    escaper: Option<PayloadEscaper>,
}

impl ResponseChannel {
    /// Channel with no payload escaping (parity with the deployed shell).
    pub fn new(renderer: Arc<dyn WebRenderer>) -> Self {
        Self {
            renderer,
            escaper: None,
        }
    }

    /// Channel that runs every payload through `escaper` before embedding.
    pub fn with_escaper(renderer: Arc<dyn WebRenderer>, escaper: PayloadEscaper) -> Self {
        Self {
            renderer,
            escaper: Some(escaper),
        }
    }

    /// Serialize `payload` as JSON and invoke `callback` with it.
    pub fn deliver<T: Serialize>(&self, callback: &str, payload: &T) {
        let json = match serde_json::to_string(payload) {
            Ok(json) => json,
            Err(e) => {
                error!(callback, error = %e, "payload serialization failed, dropping response");
                return;
            }
        };
        self.inject(callback, &json);
    }

    /// Invoke `callback` with a raw, non-JSON string payload (clipboard
    /// text, inset height, opening marker).
    pub fn deliver_text(&self, callback: &str, text: &str) {
        self.inject(callback, text);
    }

    /// Invoke `callback` with no arguments.
    pub fn invoke(&self, callback: &str) {
        trace!(callback, "injecting callback invocation");
        self.renderer.receive(&format!("window.{callback}();"));
    }

    fn inject(&self, callback: &str, payload: &str) {
        let payload = match &self.escaper {
            Some(escape) => escape(payload),
            None => payload.to_string(),
        };
        trace!(callback, bytes = payload.len(), "injecting callback invocation");
        self.renderer.receive(&format!("window.{callback}('{payload}');"));
    }
}

// ---------------------------------------------------------------------------
// Test support
// ---------------------------------------------------------------------------

/// Renderer that records every injected script, for assertions in tests.
#[cfg(test)]
pub(crate) struct RecordingRenderer {
    pub scripts: std::sync::Mutex<Vec<String>>,
}

#[cfg(test)]
impl RecordingRenderer {
    pub fn new() -> Self {
        Self {
            scripts: std::sync::Mutex::new(Vec::new()),
        }
    }

    pub fn scripts(&self) -> Vec<String> {
        self.scripts.lock().expect("scripts lock poisoned").clone()
    }
}

#[cfg(test)]
impl WebRenderer for RecordingRenderer {
    fn receive(&self, script: &str) {
        self.scripts
            .lock()
            .expect("scripts lock poisoned")
            .push(script.to_string());
    }

    fn can_go_back(&self) -> bool {
        false
    }

    fn go_back(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deliver_serializes_and_quotes() {
        let renderer = Arc::new(RecordingRenderer::new());
        let channel = ResponseChannel::new(renderer.clone());

        channel.deliver("onNativePushToken", &"ExponentPushToken[abc]".to_string());

        assert_eq!(
            renderer.scripts(),
            vec![r#"window.onNativePushToken('"ExponentPushToken[abc]"');"#]
        );
    }

    #[test]
    fn deliver_text_embeds_raw() {
        let renderer = Arc::new(RecordingRenderer::new());
        let channel = ResponseChannel::new(renderer.clone());

        channel.deliver_text("onGetInsetBottomHeight", "34");

        assert_eq!(renderer.scripts(), vec!["window.onGetInsetBottomHeight('34');"]);
    }

    #[test]
    fn invoke_takes_no_arguments() {
        let renderer = Arc::new(RecordingRenderer::new());
        let channel = ResponseChannel::new(renderer.clone());

        channel.invoke("onUnZoom");

        assert_eq!(renderer.scripts(), vec!["window.onUnZoom();"]);
    }

    #[test]
    fn default_channel_does_not_escape_quotes() {
        // Parity with the deployed shell: a quote in the payload breaks the
        // embedding and that is the documented default.
        let renderer = Arc::new(RecordingRenderer::new());
        let channel = ResponseChannel::new(renderer.clone());

        channel.deliver_text("onGetClipboardTextContent", "it's");

        assert_eq!(
            renderer.scripts(),
            vec!["window.onGetClipboardTextContent('it's');"]
        );
    }

    #[test]
    fn escaper_hook_rewrites_payload() {
        let renderer = Arc::new(RecordingRenderer::new());
        let escaper: PayloadEscaper = Arc::new(|payload: &str| payload.replace('\'', "\\'"));
        let channel = ResponseChannel::with_escaper(renderer.clone(), escaper);

        channel.deliver_text("onGetClipboardTextContent", "it's");

        assert_eq!(
            renderer.scripts(),
            vec!["window.onGetClipboardTextContent('it\\'s');"]
        );
    }
}
