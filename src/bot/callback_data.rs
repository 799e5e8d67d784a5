//! Callback payload encoding for list navigation
//!
//! Navigation state is never stored server-side; it round-trips through the
//! chat client as opaque button payloads of the form `page_<n>` and
//! `job_<id>_<page>`.

/// Navigation state carried inside a callback button payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallbackToken {
    /// Re-render the job list at this 1-based page
    Page(u32),
    /// Show one job's detail view, remembering the page it was picked from
    JobDetail { id: String, from_page: u32 },
}

impl CallbackToken {
    /// Encode into the wire payload string
    pub fn encode(&self) -> String {
        match self {
            CallbackToken::Page(page) => format!("page_{page}"),
            CallbackToken::JobDetail { id, from_page } => format!("job_{id}_{from_page}"),
        }
    }

    /// Decode a wire payload. Unknown prefixes, non-numeric or zero page
    /// numbers, and empty ids all yield `None`.
    ///
    /// The page number is split off the right-hand side so ids containing
    /// underscores survive the round trip.
    pub fn decode(data: &str) -> Option<Self> {
        if let Some(rest) = data.strip_prefix("page_") {
            let page: u32 = rest.parse().ok()?;
            if page == 0 {
                return None;
            }
            return Some(CallbackToken::Page(page));
        }

        if let Some(rest) = data.strip_prefix("job_") {
            let (id, page) = rest.rsplit_once('_')?;
            let from_page: u32 = page.parse().ok()?;
            if from_page == 0 || id.is_empty() {
                return None;
            }
            return Some(CallbackToken::JobDetail {
                id: id.to_string(),
                from_page,
            });
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_token_round_trip() {
        let token = CallbackToken::Page(2);
        assert_eq!(token.encode(), "page_2");
        assert_eq!(CallbackToken::decode("page_2"), Some(token));
    }

    #[test]
    fn test_job_token_round_trip() {
        let token = CallbackToken::JobDetail {
            id: "417".to_string(),
            from_page: 3,
        };
        assert_eq!(token.encode(), "job_417_3");
        assert_eq!(CallbackToken::decode("job_417_3"), Some(token));
    }

    #[test]
    fn test_job_token_with_underscored_id() {
        let token = CallbackToken::JobDetail {
            id: "hh_uz_99".to_string(),
            from_page: 1,
        };
        let encoded = token.encode();
        assert_eq!(encoded, "job_hh_uz_99_1");
        assert_eq!(CallbackToken::decode(&encoded), Some(token));
    }

    #[test]
    fn test_decode_rejects_malformed_payloads() {
        assert_eq!(CallbackToken::decode(""), None);
        assert_eq!(CallbackToken::decode("noop"), None);
        assert_eq!(CallbackToken::decode("page_"), None);
        assert_eq!(CallbackToken::decode("page_0"), None);
        assert_eq!(CallbackToken::decode("page_x"), None);
        assert_eq!(CallbackToken::decode("job_5"), None);
        assert_eq!(CallbackToken::decode("job__1"), None);
        assert_eq!(CallbackToken::decode("job_5_zero"), None);
        assert_eq!(CallbackToken::decode("job_5_0"), None);
    }
}
