use serde::{Deserialize, Serialize};

/// Emotion/style tags accepted by the synthesis provider.
/// Fixed whitelist: anything else falls back to the voice default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Neutral,
    Happy,
    Sad,
    Excited,
    Calm,
    Angry,
    Whisper,
}

impl Emotion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Neutral => "neutral",
            Emotion::Happy => "happy",
            Emotion::Sad => "sad",
            Emotion::Excited => "excited",
            Emotion::Calm => "calm",
            Emotion::Angry => "angry",
            Emotion::Whisper => "whisper",
        }
    }

    /// Parse an emotion tag, returning None for anything outside the whitelist
    pub fn parse(tag: &str) -> Option<Self> {
        match tag.to_lowercase().as_str() {
            "neutral" => Some(Emotion::Neutral),
            "happy" => Some(Emotion::Happy),
            "sad" => Some(Emotion::Sad),
            "excited" => Some(Emotion::Excited),
            "calm" => Some(Emotion::Calm),
            "angry" => Some(Emotion::Angry),
            "whisper" => Some(Emotion::Whisper),
            _ => None,
        }
    }
}

impl std::fmt::Display for Emotion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One entry in the fixed voice catalog
#[derive(Debug, Clone, Serialize)]
pub struct Voice {
    pub id: &'static str,
    pub name: &'static str,
    pub language: &'static str,
    pub default_emotion: Emotion,
}

/// Voices known to the system. Requests naming a voice outside this
/// catalog are rejected before any quota or network work.
pub const VOICE_CATALOG: &[Voice] = &[
    Voice {
        id: "azra",
        name: "Azra",
        language: "tr-TR",
        default_emotion: Emotion::Calm,
    },
    Voice {
        id: "deniz",
        name: "Deniz",
        language: "tr-TR",
        default_emotion: Emotion::Neutral,
    },
    Voice {
        id: "amber",
        name: "Amber",
        language: "en-US",
        default_emotion: Emotion::Neutral,
    },
    Voice {
        id: "felix",
        name: "Felix",
        language: "de-DE",
        default_emotion: Emotion::Neutral,
    },
    Voice {
        id: "lucia",
        name: "Lucia",
        language: "es-ES",
        default_emotion: Emotion::Happy,
    },
];

/// Look up a voice by its catalog id
pub fn find_voice(voice_id: &str) -> Option<&'static Voice> {
    VOICE_CATALOG.iter().find(|v| v.id == voice_id)
}

/// Resolve the effective emotion for a voice: a valid tag wins,
/// absent or unknown tags fall back to the voice default
pub fn resolve_emotion(voice: &Voice, tag: Option<&str>) -> Emotion {
    tag.and_then(Emotion::parse)
        .unwrap_or(voice.default_emotion)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_whitelisted_tags() {
        assert_eq!(Emotion::parse("happy"), Some(Emotion::Happy));
        assert_eq!(Emotion::parse("WHISPER"), Some(Emotion::Whisper));
    }

    #[test]
    fn test_parse_rejects_unknown_tags() {
        assert_eq!(Emotion::parse("sarcastic"), None);
        assert_eq!(Emotion::parse(""), None);
    }

    #[test]
    fn test_find_voice_known_and_unknown() {
        assert!(find_voice("azra").is_some());
        assert!(find_voice("nobody").is_none());
    }

    #[test]
    fn test_resolve_emotion_falls_back_to_voice_default() {
        let voice = find_voice("azra").unwrap();
        assert_eq!(resolve_emotion(voice, None), Emotion::Calm);
        assert_eq!(resolve_emotion(voice, Some("sarcastic")), Emotion::Calm);
        assert_eq!(resolve_emotion(voice, Some("sad")), Emotion::Sad);
    }
}
