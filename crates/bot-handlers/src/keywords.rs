/// Topic of a free-text message, each answered with its own canned reply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Faq,
    Support,
    School,
    Pricing,
}

/// Trigger substrings sharing one reply. Triggers are lowercase
#[derive(Debug)]
pub struct KeywordGroup {
    pub topic: Topic,
    pub triggers: &'static [&'static str],
}

impl KeywordGroup {
    fn matches(&self, normalized: &str) -> bool {
        self.triggers.iter().any(|t| normalized.contains(t))
    }
}

/// Groups in priority order, first match wins
pub const KEYWORD_GROUPS: [KeywordGroup; 4] = [
    KeywordGroup {
        topic: Topic::Faq,
        triggers: &["faq", "питання", "допомога"],
    },
    KeywordGroup {
        topic: Topic::Support,
        triggers: &["підтримка", "допомога", "зв'язатися"],
    },
    KeywordGroup {
        topic: Topic::School,
        triggers: &["школа", "школу", "курси"],
    },
    KeywordGroup {
        topic: Topic::Pricing,
        triggers: &["ціни", "ціна", "вартість", "оплата", "коштує"],
    },
];

/// Find topic of a message, `None` if nothing matched
pub fn match_topic(text: &str) -> Option<Topic> {
    let normalized = normalize(text);
    KEYWORD_GROUPS
        .iter()
        .find(|group| group.matches(&normalized))
        .map(|group| group.topic)
}

/// Lowercase and fold typographic apostrophes into `'`
fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| match c {
            '\u{2019}' | '\u{02BC}' => '\'',
            c => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triggers_are_normalized() {
        for group in &KEYWORD_GROUPS {
            for trigger in group.triggers {
                assert_eq!(normalize(trigger), *trigger, "{:?}", group.topic);
            }
        }
    }

    #[test]
    fn test_match_topic() {
        let table = [
            ("faq", Some(Topic::Faq)),
            ("Where is the FaQ?", Some(Topic::Faq)),
            ("У мене ПИТАННЯ", Some(Topic::Faq)),
            ("Потрібна допомога", Some(Topic::Faq)),
            ("💬 Зв'язатися з підтримкою", Some(Topic::Support)),
            ("як зв’язатися з вами", Some(Topic::Support)),
            ("звʼязатися", Some(Topic::Support)),
            ("зв`язатися", None),
            ("ПІДТРИМКА", Some(Topic::Support)),
            ("ℹ️ Про школу", Some(Topic::School)),
            ("Які є курси?", Some(Topic::School)),
            ("Скільки коштує навчання?", Some(Topic::Pricing)),
            ("Яка вартість?", Some(Topic::Pricing)),
            ("оплата частинами", Some(Topic::Pricing)),
            ("", None),
            ("привіт", None),
            ("hello", None),
        ];
        for (i, &(text, expected)) in table.iter().enumerate() {
            assert_eq!(match_topic(text), expected, "test table[{i}]: {text:?}");
        }
    }

    #[test]
    fn test_priority() {
        let table = [
            ("faq про підтримка", Topic::Faq),
            ("підтримка: яка вартість?", Topic::Support),
            ("оплата за курси", Topic::School),
            ("ціни? питання!", Topic::Faq),
        ];
        for (i, &(text, expected)) in table.iter().enumerate() {
            assert_eq!(match_topic(text), Some(expected), "test table[{i}]: {text:?}");
        }
    }
}
