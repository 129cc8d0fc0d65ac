use serde::{Deserialize, Serialize};

/// Commands understood by the player's control endpoint.  Each maps to one
/// path segment of `GET http://<host>:<port>/<command>`; the server answers
/// every command with its current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Info,
    Play,
    Pause,
    Next,
    VolumeUp,
    VolumeDown,
}

impl Command {
    /// URL path segment for this command.
    pub fn path(self) -> &'static str {
        match self {
            Command::Info => "info",
            Command::Play => "play",
            Command::Pause => "pause",
            Command::Next => "next",
            Command::VolumeUp => "up",
            Command::VolumeDown => "down",
        }
    }
}

/// One complete snapshot of remote player state, as decoded from the
/// endpoint's JSON body.  Every key may be missing; the engine stores
/// `Option<PlayerState>` and replaces the whole value per fetch, so a
/// snapshot is never a mix of two responses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    #[serde(default)]
    pub track: Option<Track>,
    #[serde(default)]
    pub volume: Option<i64>,
    /// Free-form playback state string; only the literal `"playing"` is
    /// treated as playing.
    #[serde(default)]
    pub state: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Track {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub artist: Option<String>,
}

impl PlayerState {
    pub fn is_playing(&self) -> bool {
        self.state.as_deref() == Some("playing")
    }

    pub fn track_id(&self) -> Option<&str> {
        self.track.as_ref()?.id.as_deref()
    }

    pub fn track_name(&self) -> Option<&str> {
        self.track.as_ref()?.name.as_deref()
    }

    pub fn artist(&self) -> Option<&str> {
        self.track.as_ref()?.artist.as_deref()
    }

    pub fn volume(&self) -> Option<i64> {
        self.volume
    }
}

/// The four menu labels derived from a snapshot.  This is the only shape the
/// renderer sees; building it here keeps the placeholder policy in one place
/// (missing fields render as text, never panic).
#[derive(Debug, Clone, PartialEq)]
pub struct MenuView {
    pub song: String,
    pub artist: String,
    pub volume: String,
    pub toggle: String,
}

impl MenuView {
    pub fn from_snapshot(snapshot: Option<&PlayerState>) -> Self {
        let Some(state) = snapshot else {
            return Self::unknown();
        };

        let volume = match state.volume() {
            Some(v) => format!("Volume: {}", v),
            None => "Volume: -".to_string(),
        };

        Self {
            song: state.track_name().unwrap_or("(no track)").to_string(),
            artist: state.artist().unwrap_or("").to_string(),
            volume,
            toggle: if state.is_playing() { "Pause" } else { "Play" }.to_string(),
        }
    }

    /// View shown before any fetch has succeeded.
    pub fn unknown() -> Self {
        Self {
            song: "(no track)".to_string(),
            artist: String::new(),
            volume: "Volume: -".to_string(),
            toggle: "Play".to_string(),
        }
    }
}
