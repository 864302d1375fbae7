// help.rs

pub const NO_MATCHES: &str = "No help topics match that search. Try alternative keywords.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqItem {
    pub id: &'static str,
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HelpCenter {
    pub query: String,
}

impl HelpCenter {
    /// FAQs whose question or answer contains the query, case-insensitively.
    pub fn filtered<'a>(&self, faqs: &'a [FaqItem]) -> Vec<&'a FaqItem> {
        let needle = self.query.to_lowercase();
        faqs.iter()
            .filter(|faq| {
                format!("{} {}", faq.question, faq.answer)
                    .to_lowercase()
                    .contains(&needle)
            })
            .collect()
    }
}
