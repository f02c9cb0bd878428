//! English canned answers

use super::{ABOUT_SERVICE_LIMIT, CannedRule, ReplyContext, RuleSet, Trigger};

pub static RULES: RuleSet = RuleSet {
    rules: &[
        CannedRule { id: "greeting", trigger: Trigger::Contains(&["hello", "hi", "hey"]), reply: greeting },
        CannedRule {
            id: "about",
            trigger: Trigger::Any(&[Trigger::Organization, Trigger::Contains(&["about"])]),
            reply: about,
        },
        CannedRule { id: "services", trigger: Trigger::Contains(&["service"]), reply: services },
        CannedRule {
            id: "web_development",
            trigger: Trigger::All(&[
                Trigger::Contains(&["web"]),
                Trigger::Contains(&["develop", "site"]),
            ]),
            reply: web_development,
        },
        CannedRule {
            id: "ai_ml",
            trigger: Trigger::Contains(&["ai", "artificial intelligence", "machine learning"]),
            reply: ai_ml,
        },
        CannedRule { id: "cloud", trigger: Trigger::Contains(&["azure", "cloud"]), reply: cloud },
        CannedRule {
            id: "collaboration",
            trigger: Trigger::Contains(&["sharepoint", "microsoft 365", "m365"]),
            reply: collaboration,
        },
        CannedRule {
            id: "contact",
            trigger: Trigger::Contains(&["contact", "reach", "email", "phone"]),
            reply: contact,
        },
    ],
    default_reply: fallback,
};

fn greeting(ctx: &ReplyContext<'_>) -> String {
    format!(
        "Hello! I'm Zoota, your AI assistant. I'm currently running in demo mode. How can I help you learn about {}?",
        ctx.organization
    )
}

fn about(ctx: &ReplyContext<'_>) -> String {
    format!(
        "{} is a technology consultancy specializing in:\n\n{}\n\nWe're a Microsoft Partner with expertise in Azure, AI/ML, and modern web development.",
        ctx.organization,
        ctx.service_bullets(Some(ABOUT_SERVICE_LIMIT))
    )
}

fn services(ctx: &ReplyContext<'_>) -> String {
    format!(
        "{} offers comprehensive technology services:\n\n{}\n\nWhich service would you like to know more about?",
        ctx.organization,
        ctx.service_bullets(None)
    )
}

fn web_development(_: &ReplyContext<'_>) -> String {
    "Yes! We specialize in web development using modern technologies like .NET, Blazor, React, and more. \
We build custom web applications, CMS solutions, and enterprise web platforms. \
We also offer web CMS solutions using Umbraco and custom frameworks."
        .to_string()
}

fn ai_ml(_: &ReplyContext<'_>) -> String {
    "We provide AI & Machine Learning solutions using Azure OpenAI, TensorFlow, and PyTorch. \
Our expertise includes conversational AI (like me!), custom AI models, intelligent automation, \
and AI-powered business solutions to help organizations leverage AI effectively."
        .to_string()
}

fn cloud(_: &ReplyContext<'_>) -> String {
    "We're Azure experts! We offer cloud migration, architecture design, DevOps, security, and ongoing Azure management. \
As a Microsoft Partner, we help organizations move to Azure and optimize their cloud infrastructure for performance and cost."
        .to_string()
}

fn collaboration(_: &ReplyContext<'_>) -> String {
    "We provide comprehensive SharePoint and Microsoft 365 solutions including custom development, \
workflow automation, migration services, and integration with other systems. \
We help organizations maximize their Microsoft 365 investment."
        .to_string()
}

fn contact(ctx: &ReplyContext<'_>) -> String {
    format!(
        "You can reach {} through our website at {} or use the contact form on our website. \
We'd love to discuss how we can help with your technology needs!",
        ctx.organization, ctx.website
    )
}

fn fallback(ctx: &ReplyContext<'_>) -> String {
    format!(
        "I'd be happy to help you learn more about {}'s services, expertise, or technology solutions. \
Feel free to ask about our web development, AI/ML, Azure cloud, SharePoint/M365, or other services!",
        ctx.organization
    )
}
