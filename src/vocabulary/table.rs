use super::entry::{AiTask, TriggerKind, Verb, VocabularyEntry};

/// The built-in keyword table. Surface forms are matched case-insensitively
/// against the prompt; the longest match wins where several overlap.
pub fn builtin_entries() -> Vec<VocabularyEntry> {
    let mut entries = Vec::with_capacity(192);
    entries.extend(apps());
    entries.extend(actions());
    entries.extend(ai_tasks());
    entries.extend(triggers());
    entries.extend(conditions());
    entries.extend(subjects());
    entries
}

fn apps() -> Vec<VocabularyEntry> {
    use Verb::*;
    vec![
        VocabularyEntry::app("slack", "Slack", Publish),
        VocabularyEntry::app("notion", "Notion", Create),
        VocabularyEntry::app("zendesk", "Zendesk", Update),
        VocabularyEntry::app("freshdesk", "Freshdesk", Update),
        VocabularyEntry::app("intercom", "Intercom", Update),
        VocabularyEntry::app("google sheet", "Google Sheets", Add),
        VocabularyEntry::app("gsheet", "Google Sheets", Add),
        VocabularyEntry::app("sheet", "Google Sheets", Add),
        VocabularyEntry::app("tableur", "Google Sheets", Add),
        VocabularyEntry::app("google slide", "Google Slides", Create),
        VocabularyEntry::app("slides", "Google Slides", Create).whole_word(),
        VocabularyEntry::app("google doc", "Google Docs", Create),
        VocabularyEntry::app("google drive", "Google Drive", Add),
        VocabularyEntry::app("google calendar", "Google Calendar", Create),
        VocabularyEntry::app("agenda", "Google Calendar", Create),
        VocabularyEntry::app("gmail", "Gmail", Send),
        VocabularyEntry::app("email", "Email", Send),
        VocabularyEntry::app("e-mail", "Email", Send),
        VocabularyEntry::app("mail", "Email", Send),
        VocabularyEntry::app("courriel", "Email", Send),
        VocabularyEntry::app("hubspot", "HubSpot", Update),
        VocabularyEntry::app("salesforce", "Salesforce", Update),
        VocabularyEntry::app("pipedrive", "Pipedrive", Update),
        VocabularyEntry::app("linkedin", "LinkedIn", Search),
        VocabularyEntry::app("twitter", "Twitter", Search),
        VocabularyEntry::app("airtable", "Airtable", Add),
        VocabularyEntry::app("trello", "Trello", Create),
        VocabularyEntry::app("asana", "Asana", Create),
        VocabularyEntry::app("jira", "Jira", Create),
        VocabularyEntry::app("typeform", "Typeform", Search),
        VocabularyEntry::app("shopify", "Shopify", Search),
        VocabularyEntry::app("stripe", "Stripe", Search),
        VocabularyEntry::app("calendly", "Calendly", Search),
        VocabularyEntry::app("mailchimp", "Mailchimp", Add),
        VocabularyEntry::app("discord", "Discord", Publish),
        VocabularyEntry::app("microsoft teams", "Microsoft Teams", Publish),
        VocabularyEntry::app("teams", "Microsoft Teams", Publish).whole_word(),
        VocabularyEntry::app("whatsapp", "WhatsApp", Send),
        VocabularyEntry::app("telegram", "Telegram", Send),
        VocabularyEntry::app("dropbox", "Dropbox", Add),
    ]
}

fn actions() -> Vec<VocabularyEntry> {
    use Verb::*;
    vec![
        VocabularyEntry::action("surveill", Watch),
        VocabularyEntry::action("monitor", Watch),
        VocabularyEntry::action("watch", Watch),
        VocabularyEntry::action("détecte", Watch),
        VocabularyEntry::action("detect", Watch),
        VocabularyEntry::action("publi", Publish),
        VocabularyEntry::action("poste", Publish).whole_word(),
        VocabularyEntry::action("poster", Publish).whole_word(),
        VocabularyEntry::action("partage", Publish),
        VocabularyEntry::action("diffus", Publish),
        VocabularyEntry::action("share", Publish),
        VocabularyEntry::action("envoi", Send),
        VocabularyEntry::action("envoy", Send),
        VocabularyEntry::action("transmet", Send),
        VocabularyEntry::action("expédi", Send),
        VocabularyEntry::action("send", Send),
        VocabularyEntry::action("notifi", Notify),
        VocabularyEntry::action("notify", Notify),
        VocabularyEntry::action("alert", Notify),
        VocabularyEntry::action("prévien", Notify),
        VocabularyEntry::action("previen", Notify),
        VocabularyEntry::action("averti", Notify),
        VocabularyEntry::action("mettre à jour", Update),
        VocabularyEntry::action("mettre a jour", Update),
        VocabularyEntry::action("met à jour", Update),
        VocabularyEntry::action("mets à jour", Update),
        VocabularyEntry::action("mise à jour", Update),
        VocabularyEntry::action("update", Update),
        VocabularyEntry::action("actualis", Update),
        VocabularyEntry::action("synchronis", Update),
        VocabularyEntry::action("crée", Create),
        VocabularyEntry::action("créer", Create),
        VocabularyEntry::action("création", Create),
        VocabularyEntry::action("create", Create),
        VocabularyEntry::action("ajout", Add),
        VocabularyEntry::action("add", Add).whole_word(),
        VocabularyEntry::action("insère", Add),
        VocabularyEntry::action("insér", Add),
        VocabularyEntry::action("enregistr", Add),
        VocabularyEntry::action("sauvegard", Add),
        VocabularyEntry::action("archiv", Add),
        VocabularyEntry::action("store", Add).whole_word(),
        VocabularyEntry::action("recherch", Search),
        VocabularyEntry::action("cherch", Search),
        VocabularyEntry::action("récupèr", Search),
        VocabularyEntry::action("récupér", Search),
        VocabularyEntry::action("recuper", Search),
        VocabularyEntry::action("collect", Search),
        VocabularyEntry::action("fetch", Search),
        VocabularyEntry::action("search", Search),
    ]
}

fn ai_tasks() -> Vec<VocabularyEntry> {
    use AiTask::*;
    vec![
        VocabularyEntry::ai("analys", Analyze),
        VocabularyEntry::ai("analyz", Analyze),
        VocabularyEntry::ai("résum", Summarize),
        VocabularyEntry::ai("resum", Summarize),
        VocabularyEntry::ai("synthé", Summarize),
        VocabularyEntry::ai("synthe", Summarize),
        VocabularyEntry::ai("summar", Summarize),
        VocabularyEntry::ai("condens", Summarize),
        VocabularyEntry::ai("répon", Respond),
        VocabularyEntry::ai("repon", Respond),
        VocabularyEntry::ai("rédig", Respond),
        VocabularyEntry::ai("redig", Respond),
        VocabularyEntry::ai("rédaction", Respond),
        VocabularyEntry::ai("redaction", Respond),
        VocabularyEntry::ai("reply", Respond),
        VocabularyEntry::ai("draft", Respond),
        VocabularyEntry::ai("trier", Classify),
        VocabularyEntry::ai("trie", Classify).whole_word(),
        VocabularyEntry::ai("tri", Classify).whole_word(),
        VocabularyEntry::ai("classif", Classify),
        VocabularyEntry::ai("classer", Classify),
        VocabularyEntry::ai("catégoris", Classify),
        VocabularyEntry::ai("categoris", Classify),
        VocabularyEntry::ai("qualifi", Qualify),
        VocabularyEntry::ai("score", Qualify),
        VocabularyEntry::ai("scoring", Qualify),
        VocabularyEntry::ai("prioris", Qualify),
        VocabularyEntry::ai("évalu", Qualify),
        VocabularyEntry::ai("evalu", Qualify),
        VocabularyEntry::ai("tradui", Translate),
        VocabularyEntry::ai("traduc", Translate),
        VocabularyEntry::ai("translat", Translate),
        VocabularyEntry::ai("génère", Generate),
        VocabularyEntry::ai("génér", Generate),
        VocabularyEntry::ai("generat", Generate),
        VocabularyEntry::ai("ia", Generate).whole_word(),
        VocabularyEntry::ai("gpt", Generate).whole_word(),
        VocabularyEntry::ai("chatgpt", Generate).whole_word(),
        VocabularyEntry::ai("openai", Generate).whole_word(),
        VocabularyEntry::ai("llm", Generate).whole_word(),
        VocabularyEntry::ai("extrai", Extract),
        VocabularyEntry::ai("extract", Extract),
    ]
}

fn triggers() -> Vec<VocabularyEntry> {
    use TriggerKind::*;
    vec![
        VocabularyEntry::trigger("chaque jour", Schedule),
        VocabularyEntry::trigger("chaque semaine", Schedule),
        VocabularyEntry::trigger("chaque mois", Schedule),
        VocabularyEntry::trigger("chaque matin", Schedule),
        VocabularyEntry::trigger("chaque soir", Schedule),
        VocabularyEntry::trigger("chaque heure", Schedule),
        VocabularyEntry::trigger("chaque lundi", Schedule),
        VocabularyEntry::trigger("chaque vendredi", Schedule),
        VocabularyEntry::trigger("tous les jours", Schedule),
        VocabularyEntry::trigger("tous les matins", Schedule),
        VocabularyEntry::trigger("tous les lundis", Schedule),
        VocabularyEntry::trigger("toutes les heures", Schedule),
        VocabularyEntry::trigger("quotidien", Schedule),
        VocabularyEntry::trigger("hebdomadaire", Schedule),
        VocabularyEntry::trigger("mensuel", Schedule),
        VocabularyEntry::trigger("planifi", Schedule),
        VocabularyEntry::trigger("daily", Schedule),
        VocabularyEntry::trigger("weekly", Schedule),
        VocabularyEntry::trigger("monthly", Schedule),
        VocabularyEntry::trigger("every day", Schedule),
        VocabularyEntry::trigger("every week", Schedule),
        VocabularyEntry::trigger("every morning", Schedule),
        VocabularyEntry::trigger("schedule", Schedule),
        VocabularyEntry::trigger("webhook", Webhook),
    ]
}

fn conditions() -> Vec<VocabularyEntry> {
    vec![
        VocabularyEntry::condition("si").whole_word(),
        VocabularyEntry::condition("s'il").whole_word(),
        VocabularyEntry::condition("s'ils").whole_word(),
        VocabularyEntry::condition("uniquement si").whole_word(),
        VocabularyEntry::condition("seulement si").whole_word(),
        VocabularyEntry::condition("quand").whole_word(),
        VocabularyEntry::condition("lorsque").whole_word(),
        VocabularyEntry::condition("lorsqu'"),
        VocabularyEntry::condition("dès que").whole_word(),
        VocabularyEntry::condition("en cas de").whole_word(),
        VocabularyEntry::condition("if").whole_word(),
        VocabularyEntry::condition("only if").whole_word(),
        VocabularyEntry::condition("when").whole_word(),
    ]
}

fn subjects() -> Vec<VocabularyEntry> {
    vec![
        VocabularyEntry::subject("ticket", "tickets"),
        VocabularyEntry::subject("prospect", "prospects"),
        VocabularyEntry::subject("lead", "leads"),
        VocabularyEntry::subject("retours clients", "retours clients"),
        VocabularyEntry::subject("retour client", "retours clients"),
        VocabularyEntry::subject("avis client", "avis clients"),
        VocabularyEntry::subject("facture", "factures"),
        VocabularyEntry::subject("invoice", "factures"),
        VocabularyEntry::subject("commande", "commandes"),
        VocabularyEntry::subject("order", "commandes").whole_word(),
        VocabularyEntry::subject("candidat", "candidatures"),
        VocabularyEntry::subject("reporting", "rapports"),
        VocabularyEntry::subject("rapport", "rapports"),
        VocabularyEntry::subject("report", "rapports"),
        VocabularyEntry::subject("newsletter", "newsletters"),
        VocabularyEntry::subject("tendance", "tendances"),
        VocabularyEntry::subject("contact", "contacts"),
        VocabularyEntry::subject("rendez-vous", "rendez-vous"),
        VocabularyEntry::subject("réservation", "réservations"),
        VocabularyEntry::subject("paiement", "paiements"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::AHashSet;

    #[test]
    fn builtin_surfaces_are_unique_and_lowercase() {
        let entries = builtin_entries();
        let mut seen = AHashSet::new();
        for entry in &entries {
            assert_eq!(entry.surface, entry.surface.to_lowercase());
            assert!(seen.insert(entry.surface.clone()), "{}", entry.surface);
        }
    }
}
