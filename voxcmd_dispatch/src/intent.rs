/// Command intents, recognised by substring containment on lowercased text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    PlayOnYoutube,
    SearchFor,
    OpenYoutube,
    OpenGoogle,
    Pause,
    Resume,
    Unmute,
    Mute,
    VolumeUp,
    VolumeDown,
    IncreaseVolume,
    DecreaseVolume,
    SetReminder,
    SetAlarm,
    Shutdown,
}

/// Evaluation order. Predicates overlap ("unmute" contains "mute", "pause" is
/// very generic), so the first matching intent wins.
pub const RULES: [Intent; 15] = [
    Intent::PlayOnYoutube,
    Intent::SearchFor,
    Intent::OpenYoutube,
    Intent::OpenGoogle,
    Intent::Pause,
    Intent::Resume,
    Intent::Unmute,
    Intent::Mute,
    Intent::VolumeUp,
    Intent::VolumeDown,
    Intent::IncreaseVolume,
    Intent::DecreaseVolume,
    Intent::SetReminder,
    Intent::SetAlarm,
    Intent::Shutdown,
];

impl Intent {
    /// `command` must already be lowercased.
    pub fn matches(self, command: &str) -> bool {
        match self {
            Intent::PlayOnYoutube => command.contains("play") && command.contains("youtube"),
            Intent::SearchFor => command.contains("search for"),
            Intent::OpenYoutube => command.contains("open youtube"),
            Intent::OpenGoogle => command.contains("open google"),
            Intent::Pause => command.contains("pause"),
            Intent::Resume => command.contains("resume"),
            Intent::Unmute => command.contains("unmute"),
            Intent::Mute => command.contains("mute"),
            Intent::VolumeUp => command.contains("volume up"),
            Intent::VolumeDown => command.contains("volume down"),
            Intent::IncreaseVolume => command.contains("increase volume"),
            Intent::DecreaseVolume => command.contains("decrease volume"),
            Intent::SetReminder => command.contains("set reminder") || command.contains("remind me"),
            Intent::SetAlarm => command.contains("set alarm"),
            Intent::Shutdown => command.contains("shutdown"),
        }
    }
}

pub fn classify(command: &str) -> Option<Intent> {
    RULES.iter().copied().find(|intent| intent.matches(command))
}
