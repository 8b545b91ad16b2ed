const CONTACT_SUPPORT: &str = "contact_support";
const COURSE_INFO: &str = "course_info";

/// Data sent by the FAQ mini app via `Telegram.WebApp.sendData`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WebAppPayload<'a> {
    ContactSupport,
    CourseInfo,
    /// Anything else, kept verbatim
    Unrecognized(&'a str),
}

impl<'a> From<&'a str> for WebAppPayload<'a> {
    fn from(data: &'a str) -> Self {
        match data {
            CONTACT_SUPPORT => Self::ContactSupport,
            COURSE_INFO => Self::CourseInfo,
            other => Self::Unrecognized(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_payload() {
        let table = [
            ("contact_support", WebAppPayload::ContactSupport),
            ("course_info", WebAppPayload::CourseInfo),
            ("Contact_Support", WebAppPayload::Unrecognized("Contact_Support")),
            (" course_info", WebAppPayload::Unrecognized(" course_info")),
            ("", WebAppPayload::Unrecognized("")),
        ];
        for (i, &(data, expected)) in table.iter().enumerate() {
            assert_eq!(WebAppPayload::from(data), expected, "test table[{i}]");
        }
    }
}
