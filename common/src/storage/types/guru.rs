use uuid::Uuid;

use crate::stored_object;

stored_object!(Guru, "guru", {
    name: String,
    #[serde(default)]
    archetype: Option<String>,
    #[serde(default)]
    avatar: String,
    #[serde(default)]
    description: String
});

impl Guru {
    pub fn new(name: String, archetype: Option<String>, avatar: String, description: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            created_at: now,
            updated_at: now,
            name,
            archetype,
            avatar,
            description,
        }
    }

    /// Archetype used for reply-style selection. Records without one are
    /// treated as "zen"; the stored record itself is left untouched.
    pub fn style_archetype(&self) -> &str {
        self.archetype.as_deref().unwrap_or("zen")
    }
}

/// A built-in guru, available even when the database is not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultGuru {
    pub name: &'static str,
    pub archetype: &'static str,
    pub avatar: &'static str,
    pub description: &'static str,
}

impl DefaultGuru {
    /// Materialize a persistable record from this built-in entry.
    pub fn to_guru(&self) -> Guru {
        Guru::new(
            self.name.to_string(),
            Some(self.archetype.to_string()),
            self.avatar.to_string(),
            self.description.to_string(),
        )
    }
}

pub const DEFAULT_GURUS: [DefaultGuru; 5] = [
    DefaultGuru {
        name: "Zen Teacher",
        archetype: "zen",
        avatar: "🪷",
        description: "Quiet clarity and koan-like reflections.",
    },
    DefaultGuru {
        name: "Yogi Guide",
        archetype: "yogi",
        avatar: "🧘",
        description: "Breath, alignment, and daily practice.",
    },
    DefaultGuru {
        name: "Astrologer",
        archetype: "astrologer",
        avatar: "✨",
        description: "Patterns of time and temperament.",
    },
    DefaultGuru {
        name: "Monk Mentor",
        archetype: "monk",
        avatar: "🙏",
        description: "Discipline, devotion, and gentle routine.",
    },
    DefaultGuru {
        name: "Sufi Friend",
        archetype: "sufi",
        avatar: "🕊️",
        description: "Heart-centered presence and poetry.",
    },
];

/// Public view of a guru. `id` is present for stored records only; the
/// storage layer's record-id representation never appears here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GuruProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archetype: Option<String>,
    pub avatar: String,
    pub description: String,
}

impl From<Guru> for GuruProfile {
    fn from(guru: Guru) -> Self {
        Self {
            id: Some(guru.id),
            name: guru.name,
            archetype: guru.archetype,
            avatar: guru.avatar,
            description: guru.description,
        }
    }
}

impl From<&DefaultGuru> for GuruProfile {
    fn from(default: &DefaultGuru) -> Self {
        Self {
            id: None,
            name: default.name.to_string(),
            archetype: Some(default.archetype.to_string()),
            avatar: default.avatar.to_string(),
            description: default.description.to_string(),
        }
    }
}
