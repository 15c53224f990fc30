//! Conversational onboarding for entering the first ingredients.
//!
//! The conversation alternates between two prompts: the ingredient name, then what
//! a package of it costs. Each completed pair is handed back to the caller as a
//! [`CapturedIngredient`]; turning the cost label into a ledger entry happens in
//! the session. On the free plan, messages asking for AI pricing get an upgrade
//! suggestion and do not advance the conversation.

use crate::entities::PlanTier;

/// Words and phrases that mark a message as a request for AI pricing.
pub const AI_REQUEST_TERMS: [&str; 6] = [
    "precificar",
    "sugerir preço",
    "preço",
    "precificação",
    "ia",
    "inteligência artificial",
];

const GREETING: &str =
    "Olá! Vamos cadastrar seu primeiro ingrediente. Qual é o nome dele?";

/// Where the conversation currently stands.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OnboardingState {
    /// Waiting for an ingredient name
    #[default]
    AwaitingName,
    /// Waiting for the cost of `name`
    AwaitingCost {
        /// Ingredient named in the previous message
        name: String,
    },
}

/// A name plus the raw cost label the user typed for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedIngredient {
    /// Ingredient name
    pub name: String,
    /// Cost as typed, e.g. "R$ 5,50 por 1kg"
    pub cost_label: String,
}

/// Outcome of one user message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OnboardingReply {
    /// Blank input; nothing happened
    Ignored,
    /// AI pricing was requested on the free plan
    UpgradeSuggested,
    /// The name was recorded and the cost is being asked for
    AskCost {
        /// Ingredient that was named
        name: String,
    },
    /// Both answers are in
    Captured(CapturedIngredient),
}

impl OnboardingReply {
    /// Text the assistant answers with, if any.
    #[must_use]
    pub fn bot_message(&self) -> Option<String> {
        match self {
            Self::Ignored => None,
            Self::UpgradeSuggested => Some(
                "A sugestão de preço com IA faz parte do Plano Pro, que analisa seus custos \
                 para encontrar a margem ideal. Quer conhecer?"
                    .to_string(),
            ),
            Self::AskCost { name } => Some(format!(
                "Certo! Quanto custa um pacote de \"{name}\"? Por exemplo: \"R$ 5,50 por 1kg\"."
            )),
            Self::Captured(captured) => Some(format!(
                "Pronto, \"{}\" foi salvo no seu inventário. Qual é o próximo ingrediente?",
                captured.name
            )),
        }
    }
}

/// The onboarding conversation state machine.
#[derive(Debug, Clone, Default)]
pub struct Onboarding {
    state: OnboardingState,
}

impl Onboarding {
    /// Conversation waiting for the first name.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Opening prompt of the assistant.
    #[must_use]
    pub const fn greeting() -> &'static str {
        GREETING
    }

    /// Current step.
    #[must_use]
    pub const fn state(&self) -> &OnboardingState {
        &self.state
    }

    /// Feeds one user message into the conversation.
    pub fn handle(&mut self, input: &str, tier: PlanTier) -> OnboardingReply {
        let input = input.trim();
        if input.is_empty() {
            return OnboardingReply::Ignored;
        }

        if tier == PlanTier::Free && is_ai_request(input) {
            return OnboardingReply::UpgradeSuggested;
        }

        match std::mem::take(&mut self.state) {
            OnboardingState::AwaitingName => {
                let name = input.to_string();
                self.state = OnboardingState::AwaitingCost { name: name.clone() };
                OnboardingReply::AskCost { name }
            }
            OnboardingState::AwaitingCost { name } => {
                OnboardingReply::Captured(CapturedIngredient {
                    name,
                    cost_label: input.to_string(),
                })
            }
        }
    }
}

/// Whether a message asks for AI pricing.
///
/// Terms match whole words, so `ia` does not fire inside words like "melancia".
#[must_use]
pub fn is_ai_request(message: &str) -> bool {
    let lower = message.to_lowercase();
    let words: Vec<&str> = lower
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .collect();

    AI_REQUEST_TERMS.iter().any(|term| {
        let term_words: Vec<&str> = term.split(' ').collect();
        words
            .windows(term_words.len())
            .any(|window| window == term_words.as_slice())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_step_capture() {
        let mut flow = Onboarding::new();

        let reply = flow.handle("Farinha de Trigo", PlanTier::Free);
        assert_eq!(
            reply,
            OnboardingReply::AskCost {
                name: "Farinha de Trigo".to_string()
            }
        );
        assert!(matches!(flow.state(), OnboardingState::AwaitingCost { .. }));

        let reply = flow.handle("R$ 5,50 por 1kg", PlanTier::Free);
        assert_eq!(
            reply,
            OnboardingReply::Captured(CapturedIngredient {
                name: "Farinha de Trigo".to_string(),
                cost_label: "R$ 5,50 por 1kg".to_string(),
            })
        );
        assert_eq!(flow.state(), &OnboardingState::AwaitingName);
    }

    #[test]
    fn test_blank_input_is_ignored() {
        let mut flow = Onboarding::new();
        assert_eq!(flow.handle("   ", PlanTier::Free), OnboardingReply::Ignored);
        assert_eq!(flow.state(), &OnboardingState::AwaitingName);
        assert!(OnboardingReply::Ignored.bot_message().is_none());
    }

    #[test]
    fn test_ai_request_on_free_plan_does_not_advance() {
        let mut flow = Onboarding::new();
        flow.handle("Ovos", PlanTier::Free);

        let reply = flow.handle("Pode sugerir preço pra mim?", PlanTier::Free);
        assert_eq!(reply, OnboardingReply::UpgradeSuggested);
        assert_eq!(
            flow.state(),
            &OnboardingState::AwaitingCost {
                name: "Ovos".to_string()
            }
        );
    }

    #[test]
    fn test_ai_request_on_pro_plan_flows_through() {
        let mut flow = Onboarding::new();
        let reply = flow.handle("quero precificar", PlanTier::Pro);
        assert!(matches!(reply, OnboardingReply::AskCost { .. }));
    }

    #[test]
    fn test_is_ai_request_matches_whole_words() {
        assert!(is_ai_request("Usar IA"));
        assert!(is_ai_request("inteligência artificial, por favor"));
        assert!(is_ai_request("qual o PREÇO ideal?"));
        assert!(!is_ai_request("Melancia"));
        assert!(!is_ai_request("Farinha de trigo"));
    }

    #[test]
    fn test_bot_messages() {
        let ask = OnboardingReply::AskCost {
            name: "Leite".to_string(),
        };
        assert!(ask.bot_message().unwrap_or_default().contains("\"Leite\""));
        assert!(OnboardingReply::UpgradeSuggested.bot_message().is_some());
        assert!(!Onboarding::greeting().is_empty());
    }
}
