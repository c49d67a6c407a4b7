//! Sample social data backing the demo views.

/// The local player's profile.
pub struct Profile {
    pub name: &'static str,
    pub motto: &'static str,
    pub rank: &'static str,
    pub wins: u32,
    pub losses: u32,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Rae",
            motto: "First to eleven wins.",
            rank: "Silver paddle",
            wins: 42,
            losses: 17,
        }
    }
}

pub struct Friend {
    pub name: &'static str,
    pub status: &'static str,
    pub online: bool,
    pub wins: u32,
    pub losses: u32,
}

pub struct Roster {
    pub friends: Vec<Friend>,
}

impl Default for Roster {
    fn default() -> Self {
        Self {
            friends: vec![
                Friend { name: "ada", status: "looking for a match", online: true, wins: 120, losses: 30 },
                Friend { name: "grace", status: "debugging", online: true, wins: 88, losses: 41 },
                Friend { name: "alan", status: "away", online: false, wins: 64, losses: 64 },
                Friend { name: "edsger", status: "considered harmful", online: false, wins: 99, losses: 12 },
            ],
        }
    }
}

pub struct ChatMessage {
    pub from: &'static str,
    pub body: &'static str,
}

/// Canned transcripts keyed by friend name.
pub struct ChatLog {
    conversations: Vec<(&'static str, Vec<ChatMessage>)>,
}

impl Default for ChatLog {
    fn default() -> Self {
        Self {
            conversations: vec![
                (
                    "ada",
                    vec![
                        ChatMessage { from: "ada", body: "rematch tonight?" },
                        ChatMessage { from: "you", body: "only if you stop lobbing" },
                        ChatMessage { from: "ada", body: "no promises" },
                    ],
                ),
                (
                    "grace",
                    vec![
                        ChatMessage { from: "grace", body: "found the bug in your serve" },
                        ChatMessage { from: "you", body: "it is a feature" },
                    ],
                ),
            ],
        }
    }
}

impl ChatLog {
    pub fn messages_for(&self, name: &str) -> &[ChatMessage] {
        self.conversations
            .iter()
            .find(|(user, _)| *user == name)
            .map(|(_, messages)| messages.as_slice())
            .unwrap_or(&[])
    }
}
