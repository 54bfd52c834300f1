//! Assistant identity used by greetings and the redirect reply.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Persona {
    pub assistant_name: String,
    pub owner_name: String,
}

impl Persona {
    pub fn new(assistant_name: impl Into<String>, owner_name: impl Into<String>) -> Self {
        Self {
            assistant_name: assistant_name.into(),
            owner_name: owner_name.into(),
        }
    }

    /// Short nudge used right after a greeting when nothing matched.
    pub fn redirect(&self) -> String {
        format!(
            "I'd be happy to tell you about {}'s work in data analytics and design...",
            self.owner_name
        )
    }
}

impl Default for Persona {
    fn default() -> Self {
        Self::new("Jarvis", "Vathsaran")
    }
}

/// Opening line for a local hour (0-23): morning before 12, afternoon before 18, evening after.
pub fn greeting_for_hour(hour: u32, persona: &Persona) -> String {
    let part = match hour {
        0..=11 => "morning",
        12..=17 => "afternoon",
        _ => "evening",
    };
    format!(
        "Good {}! I'm {}, {}'s digital assistant.",
        part, persona.assistant_name, persona.owner_name
    )
}
