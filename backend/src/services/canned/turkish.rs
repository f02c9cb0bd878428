//! Turkish canned answers

use super::{ABOUT_SERVICE_LIMIT, CannedRule, ReplyContext, RuleSet, Trigger};

pub static RULES: RuleSet = RuleSet {
    rules: &[
        CannedRule {
            id: "greeting",
            trigger: Trigger::Contains(&["merhaba", "selam", "hey"]),
            reply: greeting,
        },
        CannedRule {
            id: "about",
            trigger: Trigger::Any(&[Trigger::Organization, Trigger::Contains(&["hakkında"])]),
            reply: about,
        },
        CannedRule { id: "services", trigger: Trigger::Contains(&["hizmet", "servis"]), reply: services },
        CannedRule {
            id: "ai_ml",
            trigger: Trigger::Contains(&["yapay zeka", "ai", "makine öğrenmesi"]),
            reply: ai_ml,
        },
        CannedRule { id: "cloud", trigger: Trigger::Contains(&["azure", "bulut"]), reply: cloud },
        CannedRule {
            id: "contact",
            trigger: Trigger::Contains(&["iletişim", "ulaş", "email", "telefon"]),
            reply: contact,
        },
    ],
    default_reply: fallback,
};

fn greeting(ctx: &ReplyContext<'_>) -> String {
    format!(
        "Merhaba! Ben Zoota, yapay zeka asistanınızım. Şu anda demo modunda çalışıyorum. {} hakkında size nasıl yardımcı olabilirim?",
        ctx.organization
    )
}

fn about(ctx: &ReplyContext<'_>) -> String {
    format!(
        "{}, şu alanlarda uzmanlaşmış bir teknoloji danışmanlık şirketidir:\n\n{}\n\n\
Azure, AI/ML ve modern web geliştirme konularında uzmanlığa sahip bir Microsoft İş Ortağıyız.",
        ctx.organization,
        ctx.service_bullets(Some(ABOUT_SERVICE_LIMIT))
    )
}

fn services(ctx: &ReplyContext<'_>) -> String {
    format!(
        "{} kapsamlı teknoloji hizmetleri sunmaktadır:\n\n{}\n\nHangi hizmet hakkında daha fazla bilgi edinmek istersiniz?",
        ctx.organization,
        ctx.service_bullets(None)
    )
}

fn ai_ml(_: &ReplyContext<'_>) -> String {
    "Azure OpenAI, TensorFlow ve PyTorch kullanarak Yapay Zeka ve Makine Öğrenmesi çözümleri sunuyoruz. \
Uzmanlık alanlarımız arasında konuşma yapay zekası, özel yapay zeka modelleri ve akıllı otomasyon sistemleri bulunmaktadır. \
İşletmelerin yapay zeka gücünden yararlanmalarına yardımcı oluyoruz."
        .to_string()
}

fn cloud(_: &ReplyContext<'_>) -> String {
    "Azure Bulut Çözümlerinde uzmanız! Bulut geçişi, mimari tasarım, DevOps ve sürekli Azure yönetimi hizmetleri sunuyoruz. \
Microsoft İş Ortağı olarak, kuruluşların Azure'un tüm gücünden yararlanmalarına yardımcı oluyoruz."
        .to_string()
}

fn contact(ctx: &ReplyContext<'_>) -> String {
    format!(
        "Bize web sitemiz {} üzerinden veya sitemizdeki iletişim formu aracılığıyla ulaşabilirsiniz. \
Teknoloji ihtiyaçlarınız hakkında konuşmak isteriz!",
        ctx.website
    )
}

fn fallback(ctx: &ReplyContext<'_>) -> String {
    format!(
        "{}'ın hizmetleri, uzmanlık alanları veya teknoloji çözümleri hakkında size yardımcı olmaktan mutluluk duyarım. \
Web geliştirme, AI/ML, Azure bulut, SharePoint/M365 veya diğer hizmetlerimiz hakkında soru sorabilirsiniz!",
        ctx.organization
    )
}
