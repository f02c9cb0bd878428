//! Canned response engine
//!
//! Answers chat messages without a model by walking an ordered rule table for
//! the detected language. Each language keeps its own table: the keyword sets
//! and wording differ, only the intent lines up.
//!
//! ```text
//! message ─► detect() ─► [rules for language] ─► first match ─► reply(ctx)
//!                                              └► no match ───► default reply
//! ```

pub mod english;
pub mod turkish;

use crate::config::KnowledgeBaseConfig;
use crate::services::language::{self, Language};

/// Maximum number of services enumerated in the "about us" answer
pub const ABOUT_SERVICE_LIMIT: usize = 5;

/// Keyword predicate evaluated against the lower-cased message
#[derive(Debug, Clone, Copy)]
pub enum Trigger {
    /// Any keyword occurs anywhere in the message
    Contains(&'static [&'static str]),
    /// The configured organization name occurs in the message
    Organization,
    /// Every inner trigger matches
    All(&'static [Trigger]),
    /// At least one inner trigger matches
    Any(&'static [Trigger]),
}

impl Trigger {
    fn matches(&self, input: &MatchInput<'_>) -> bool {
        match self {
            Trigger::Contains(keywords) => keywords.iter().any(|k| input.text.contains(k)),
            Trigger::Organization => {
                !input.organization.is_empty() && input.text.contains(input.organization)
            },
            Trigger::All(triggers) => triggers.iter().all(|t| t.matches(input)),
            Trigger::Any(triggers) => triggers.iter().any(|t| t.matches(input)),
        }
    }
}

struct MatchInput<'a> {
    text: &'a str,
    organization: &'a str,
}

/// Values a reply template may substitute
pub struct ReplyContext<'a> {
    pub organization: &'a str,
    pub services: &'a [String],
    pub website: &'a str,
}

impl ReplyContext<'_> {
    /// Bulleted service list, optionally capped
    pub fn service_bullets(&self, limit: Option<usize>) -> String {
        let limit = limit.unwrap_or(self.services.len());
        self.services
            .iter()
            .take(limit)
            .map(|s| format!("• {}", s))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// One row of a language's rule table
pub struct CannedRule {
    pub id: &'static str,
    pub trigger: Trigger,
    pub reply: fn(&ReplyContext<'_>) -> String,
}

/// Rule table plus fallback answer for one language
pub struct RuleSet {
    pub rules: &'static [CannedRule],
    pub default_reply: fn(&ReplyContext<'_>) -> String,
}

fn rule_set(language: Language) -> &'static RuleSet {
    match language {
        Language::English => &english::RULES,
        Language::Turkish => &turkish::RULES,
    }
}

/// Rule-based responder used whenever the model cannot answer
#[derive(Debug, Clone)]
pub struct CannedResponder {
    knowledge: KnowledgeBaseConfig,
    organization_key: String,
}

impl CannedResponder {
    pub fn new(knowledge: KnowledgeBaseConfig) -> Self {
        let organization_key = knowledge.organization.trim().to_lowercase();
        Self { knowledge, organization_key }
    }

    /// Answer `message` in its detected language. Never fails, never empty.
    pub fn respond(&self, message: &str) -> String {
        self.respond_in(language::detect(message), message)
    }

    pub fn respond_in(&self, language: Language, message: &str) -> String {
        let (rule_id, reply) = self.select(language, message);
        tracing::debug!("Canned response: language={}, rule={}", language, rule_id);
        reply(&self.context())
    }

    /// Id of the rule that would answer `message`, `"default"` if none
    pub fn matched_rule(&self, language: Language, message: &str) -> &'static str {
        self.select(language, message).0
    }

    fn select(
        &self,
        language: Language,
        message: &str,
    ) -> (&'static str, fn(&ReplyContext<'_>) -> String) {
        let lowered = message.to_lowercase();
        let input = MatchInput { text: &lowered, organization: &self.organization_key };
        let set = rule_set(language);

        set.rules
            .iter()
            .find(|rule| rule.trigger.matches(&input))
            .map(|rule| (rule.id, rule.reply))
            .unwrap_or(("default", set.default_reply))
    }

    fn context(&self) -> ReplyContext<'_> {
        ReplyContext {
            organization: &self.knowledge.organization,
            services: &self.knowledge.services,
            website: &self.knowledge.website,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn responder() -> CannedResponder {
        CannedResponder::new(KnowledgeBaseConfig {
            organization: "OrkinosAI".to_string(),
            services: vec![
                "Web Development".to_string(),
                "AI & Machine Learning".to_string(),
                "Azure Cloud Solutions".to_string(),
                "SharePoint & Microsoft 365".to_string(),
                "Web CMS Solutions".to_string(),
                "IT Consultancy".to_string(),
            ],
            website: "https://www.orkinosai.com".to_string(),
        })
    }

    #[test]
    fn test_english_rule_priority() {
        let r = responder();
        let en = Language::English;
        assert_eq!(r.matched_rule(en, "Hello there"), "greeting");
        assert_eq!(r.matched_rule(en, "Tell me about OrkinosAI"), "about");
        assert_eq!(r.matched_rule(en, "What services do you offer?"), "services");
        assert_eq!(r.matched_rule(en, "Can you build a web site?"), "web_development");
        assert_eq!(r.matched_rule(en, "Do you do AI?"), "ai_ml");
        assert_eq!(r.matched_rule(en, "artificial intelligence for retail"), "ai_ml");
        assert_eq!(r.matched_rule(en, "cloud migration"), "cloud");
        assert_eq!(r.matched_rule(en, "We use M365 a lot"), "collaboration");
        assert_eq!(r.matched_rule(en, "phone number please"), "contact");
        assert_eq!(r.matched_rule(en, "What's the weather like?"), "default");
    }

    #[test]
    fn test_greeting_outranks_services() {
        let r = responder();
        assert_eq!(r.matched_rule(Language::English, "Hi, which service is best?"), "greeting");
    }

    #[test]
    fn test_keywords_match_anywhere_in_message() {
        let r = responder();
        let en = Language::English;
        assert_eq!(r.matched_rule(en, "What is your email?"), "ai_ml");
        assert_eq!(r.matched_rule(en, "send an email"), "ai_ml");
        assert_eq!(r.matched_rule(en, "trained"), "ai_ml");
        assert_eq!(r.matched_rule(en, "Tell me about this"), "greeting");
        assert_eq!(r.matched_rule(en, "hiya"), "greeting");
        assert_eq!(r.matched_rule(en, "machine learning projects"), "greeting");
        assert_eq!(r.matched_rule(Language::Turkish, "ai projeleri"), "ai_ml");
    }

    #[test]
    fn test_turkish_rule_priority() {
        let r = responder();
        let tr = Language::Turkish;
        assert_eq!(r.matched_rule(tr, "Merhaba"), "greeting");
        assert_eq!(r.matched_rule(tr, "OrkinosAI hakkında bilgi"), "about");
        assert_eq!(r.matched_rule(tr, "hizmetleriniz nelerdir"), "services");
        assert_eq!(r.matched_rule(tr, "yapay zeka çözümleri"), "ai_ml");
        assert_eq!(r.matched_rule(tr, "bulut geçişi"), "cloud");
        assert_eq!(r.matched_rule(tr, "iletişim bilgileri"), "contact");
        assert_eq!(r.matched_rule(tr, "bugün hava nasıl"), "default");
    }

    #[test]
    fn test_services_answer_lists_every_service() {
        let reply = responder().respond("What services do you offer?");
        assert!(reply.starts_with("OrkinosAI offers comprehensive technology services"));
        assert!(reply.contains("• Web Development"));
        assert!(reply.contains("• IT Consultancy"));
    }

    #[test]
    fn test_about_answer_caps_services_at_five() {
        let reply = responder().respond("Tell me about your company");
        assert!(reply.contains("• Web CMS Solutions"));
        assert!(!reply.contains("• IT Consultancy"));
    }

    #[test]
    fn test_contact_answer_uses_configured_website() {
        let reply = responder().respond("how can I contact you");
        assert!(reply.contains("https://www.orkinosai.com"));

        let reply = responder().respond("iletişim için ne yapmalıyım");
        assert!(reply.contains("https://www.orkinosai.com"));
        assert!(reply.starts_with("Bize web sitemiz"));
    }

    #[test]
    fn test_turkish_greeting() {
        let reply = responder().respond("Merhaba");
        assert!(reply.starts_with("Merhaba! Ben Zoota"));
    }

    #[test]
    fn test_never_empty_even_without_services() {
        let r = CannedResponder::new(KnowledgeBaseConfig {
            organization: String::new(),
            services: Vec::new(),
            website: String::new(),
        });
        for msg in ["x", "services", "hizmet", "about", "?", "merhaba", "çok güzel", "contact"] {
            assert!(!r.respond(msg).trim().is_empty(), "empty reply for {msg:?}");
        }
    }
}
