use crate::AppState;
use crate::error::Result;
use crate::presentation::controller::Presentation;
use crate::presentation::input::{Action, Command};
use crate::presentation::timer::AutoAdvance;
use crate::slides::SlideKind;
use axum::{
    extract::{
        State, WebSocketUpgrade,
        ws::{Message, WebSocket},
    },
    response::Response,
};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

/// Presentation state sent to the client after every change
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
    pub index: usize,
    pub total: usize,
    pub is_auto_playing: bool,
    pub kind: SlideKind,
}

/// A mounted presentation together with its auto-advance timer
#[derive(Debug)]
pub struct Session {
    presentation: Presentation,
    timer: AutoAdvance,
}

impl Session {
    pub fn new(presentation: Presentation, delay: Duration) -> Self {
        let mut session = Self {
            presentation,
            timer: AutoAdvance::new(delay),
        };
        session.rearm();
        session
    }

    pub fn presentation(&self) -> &Presentation {
        &self.presentation
    }

    pub fn frame(&self) -> Frame {
        Frame {
            index: self.presentation.current_index(),
            total: self.presentation.len(),
            is_auto_playing: self.presentation.is_auto_playing(),
            kind: self.presentation.current_slide().kind(),
        }
    }

    /// Apply a client command
    ///
    /// Returns the new frame, or `None` for keys without a binding. The
    /// auto-advance delay restarts whenever the index or the auto-play flag
    /// changes.
    ///
    /// # Errors
    ///
    /// Returns error for out-of-range jumps; state is left untouched
    pub fn apply(&mut self, command: Command) -> Result<Option<Frame>> {
        let Some(action) = command.resolve() else {
            return Ok(None);
        };

        let before = self.frame();
        match action {
            Action::Next => self.presentation.next(),
            Action::Previous => self.presentation.previous(),
            Action::GoTo(index) => self.presentation.go_to(index)?,
            Action::ToggleAutoPlay => self.presentation.toggle_auto_play(),
        }

        let after = self.frame();
        if after != before {
            self.rearm();
        }
        Ok(Some(after))
    }

    /// Wait for the auto-advance deadline, then move to the next slide
    ///
    /// Cancel-safe: nothing changes unless the deadline has elapsed.
    pub async fn advance(&mut self) -> Frame {
        self.timer.expired().await;
        self.presentation.next();
        tracing::trace!("Auto-advanced to slide {}", self.presentation.current_index());
        self.rearm();
        self.frame()
    }

    fn rearm(&mut self) {
        if self.presentation.is_auto_playing() {
            self.timer.schedule();
        } else {
            self.timer.cancel();
        }
    }
}

pub async fn presentation_socket(
    State(state): State<Arc<AppState>>,
    ws: WebSocketUpgrade,
) -> Result<Response> {
    let presentation = Presentation::new(
        state.slides.clone(),
        state.config.presentation.auto_play,
    )?;
    let delay = Duration::from_millis(state.config.presentation.auto_play_duration_ms);
    let session = Session::new(presentation, delay);

    Ok(ws.on_upgrade(move |socket| run_session(socket, session)))
}

async fn run_session(mut socket: WebSocket, mut session: Session) {
    tracing::debug!(
        "Presentation mounted ({} slides, auto-advance every {:?}, armed: {})",
        session.presentation().len(),
        session.timer.delay(),
        session.timer.is_armed()
    );

    if send_json(&mut socket, &session.frame()).await.is_err() {
        return;
    }

    loop {
        let outgoing = tokio::select! {
            msg = socket.recv() => match msg {
                Some(Ok(Message::Text(text))) => handle_text(&mut session, &text),
                Some(Ok(Message::Close(_))) | None => break,
                Some(Ok(_)) => None,
                Some(Err(e)) => {
                    tracing::debug!("Presentation socket error: {}", e);
                    break;
                }
            },
            frame = session.advance() => Some(json!(frame)),
        };

        if let Some(value) = outgoing
            && send_json(&mut socket, &value).await.is_err()
        {
            tracing::debug!("Failed to send frame, closing presentation");
            break;
        }
    }

    tracing::debug!("Presentation unmounted");
}

fn handle_text(session: &mut Session, text: &str) -> Option<serde_json::Value> {
    let command: Command = match serde_json::from_str(text) {
        Ok(command) => command,
        Err(e) => {
            tracing::debug!("Ignoring malformed command {:?}: {}", text, e);
            return None;
        }
    };

    match session.apply(command) {
        Ok(frame) => frame.map(|frame| json!(frame)),
        Err(e) => Some(json!({ "error": e.to_string() })),
    }
}

async fn send_json<T: Serialize>(socket: &mut WebSocket, value: &T) -> std::result::Result<(), ()> {
    let text = serde_json::to_string(value).map_err(|e| {
        tracing::error!("Failed to encode frame: {}", e);
    })?;
    socket.send(Message::Text(text)).await.map_err(|e| {
        tracing::debug!("Presentation socket send failed: {}", e);
    })
}
