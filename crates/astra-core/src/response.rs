use serde::{Deserialize, Serialize};

/// What a handler produced for one request, before envelope assembly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speech_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reprompt_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,
    pub end_session: bool,
}

/// A simple display card shown on screen-equipped devices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub title: String,
    pub content: String,
}

impl SkillResponse {
    pub fn builder() -> ResponseBuilder {
        ResponseBuilder::default()
    }

    /// An empty response: nothing spoken, session ends. Used for
    /// session-ended acknowledgements.
    pub fn empty() -> Self {
        Self {
            end_session: true,
            ..Self::default()
        }
    }

    /// Assemble the platform response envelope.
    pub fn to_envelope(&self) -> ResponseEnvelope {
        ResponseEnvelope {
            version: "1.0".to_string(),
            response: ResponsePayload {
                output_speech: self.speech_text.as_deref().map(OutputSpeech::plain),
                card: self.card.as_ref().map(|card| CardPayload {
                    card_type: "Simple".to_string(),
                    title: card.title.clone(),
                    content: card.content.clone(),
                }),
                reprompt: self.reprompt_text.as_deref().map(|text| Reprompt {
                    output_speech: OutputSpeech::plain(text),
                }),
                should_end_session: self.end_session,
            },
        }
    }
}

/// Step-wise response assembly, mirroring the platform SDK's builder
/// surface (`speak`, `reprompt`, `with_simple_card`).
#[derive(Debug, Default)]
pub struct ResponseBuilder {
    speech_text: Option<String>,
    reprompt_text: Option<String>,
    card: Option<Card>,
    end_session: Option<bool>,
}

impl ResponseBuilder {
    pub fn speak(mut self, text: impl Into<String>) -> Self {
        self.speech_text = Some(text.into());
        self
    }

    pub fn reprompt(mut self, text: impl Into<String>) -> Self {
        self.reprompt_text = Some(text.into());
        self
    }

    pub fn with_simple_card(mut self, title: impl Into<String>, content: impl Into<String>) -> Self {
        self.card = Some(Card {
            title: title.into(),
            content: content.into(),
        });
        self
    }

    /// Override the session policy. Without this, a response with a
    /// reprompt keeps the session open and one without ends it.
    pub fn with_should_end_session(mut self, end: bool) -> Self {
        self.end_session = Some(end);
        self
    }

    pub fn build(self) -> SkillResponse {
        let end_session = self.end_session.unwrap_or(self.reprompt_text.is_none());
        SkillResponse {
            speech_text: self.speech_text,
            reprompt_text: self.reprompt_text,
            card: self.card,
            end_session,
        }
    }
}

/// The serialized platform response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub version: String,
    pub response: ResponsePayload,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponsePayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_speech: Option<OutputSpeech>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card: Option<CardPayload>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reprompt: Option<Reprompt>,
    pub should_end_session: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputSpeech {
    #[serde(rename = "type")]
    pub speech_type: String,
    pub text: String,
}

impl OutputSpeech {
    fn plain(text: &str) -> Self {
        Self {
            speech_type: "PlainText".to_string(),
            text: text.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardPayload {
    #[serde(rename = "type")]
    pub card_type: String,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reprompt {
    pub output_speech: OutputSpeech,
}
