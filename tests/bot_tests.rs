#[cfg(test)]
mod tests {
    use chrono::{Duration, Local};
    use ishtopar::bot::callback_data::CallbackToken;
    use ishtopar::bot::ui_builder::{
        build_job_list_view, create_job_detail_keyboard, job_list_header, FALLBACK_URL,
    };
    use ishtopar::{JobRecord, PageResult};
    use serde_json::json;
    use teloxide::types::{InlineKeyboardButton, InlineKeyboardButtonKind};

    fn job(id: u32, title: &str, company: &str) -> JobRecord {
        JobRecord {
            id: Some(json!(id)),
            title: Some(title.to_string()),
            company: Some(company.to_string()),
            ..Default::default()
        }
    }

    fn page_of(count: u32, next: serde_json::Value) -> PageResult {
        PageResult {
            results: (1..=count)
                .map(|i| job(i, &format!("Ish {i}"), "IT Park"))
                .collect(),
            next: Some(next),
        }
    }

    fn callback_data(button: &InlineKeyboardButton) -> Option<&str> {
        match &button.kind {
            InlineKeyboardButtonKind::CallbackData(data) => Some(data),
            _ => None,
        }
    }

    fn url_target(button: &InlineKeyboardButton) -> Option<&str> {
        match &button.kind {
            InlineKeyboardButtonKind::Url(url) => Some(url.as_str()),
            _ => None,
        }
    }

    #[test]
    fn test_list_view_truncates_to_page_size() {
        let data = page_of(12, json!(null));

        let (_, keyboard) = build_job_list_view(&data, 1, 10).expect("non-empty page");

        // 10 job rows, no navigation row (page 1, no next page)
        assert_eq!(keyboard.inline_keyboard.len(), 10);
    }

    #[test]
    fn test_list_view_empty_page_yields_none() {
        assert!(build_job_list_view(&PageResult::empty(), 1, 10).is_none());
    }

    #[test]
    fn test_job_buttons_encode_id_and_page() {
        let data = page_of(2, json!(null));

        let (_, keyboard) = build_job_list_view(&data, 3, 10).expect("non-empty page");

        let first = callback_data(&keyboard.inline_keyboard[0][0]).expect("callback button");
        assert_eq!(
            CallbackToken::decode(first),
            Some(CallbackToken::JobDetail {
                id: "1".to_string(),
                from_page: 3,
            })
        );
    }

    #[test]
    fn test_next_button_encodes_following_page() {
        let data = page_of(10, json!("https://api.example.com/jobs/?page=2"));

        let (_, keyboard) = build_job_list_view(&data, 1, 10).expect("non-empty page");

        let nav = keyboard.inline_keyboard.last().expect("navigation row");
        assert_eq!(nav.len(), 1);
        assert_eq!(nav[0].text, "Keyingi ➡️");
        // Pressing it must reproduce a list call for page 2
        assert_eq!(
            CallbackToken::decode(callback_data(&nav[0]).expect("callback button")),
            Some(CallbackToken::Page(2))
        );
    }

    #[test]
    fn test_navigation_row_on_middle_page() {
        let data = page_of(10, json!("https://api.example.com/jobs/?page=4"));

        let (_, keyboard) = build_job_list_view(&data, 3, 10).expect("non-empty page");

        let nav = keyboard.inline_keyboard.last().expect("navigation row");
        assert_eq!(nav.len(), 2);
        assert_eq!(nav[0].text, "⬅️ Oldingi");
        assert_eq!(callback_data(&nav[0]), Some("page_2"));
        assert_eq!(nav[1].text, "Keyingi ➡️");
        assert_eq!(callback_data(&nav[1]), Some("page_4"));
    }

    #[test]
    fn test_no_navigation_on_single_page() {
        let data = page_of(3, json!(null));

        let (_, keyboard) = build_job_list_view(&data, 1, 10).expect("non-empty page");

        assert_eq!(keyboard.inline_keyboard.len(), 3);
        for row in &keyboard.inline_keyboard {
            let data = callback_data(&row[0]).expect("callback button");
            assert!(matches!(
                CallbackToken::decode(data),
                Some(CallbackToken::JobDetail { .. })
            ));
        }
    }

    #[test]
    fn test_new_jobs_get_badge() {
        let fresh = (Local::now().naive_local() - Duration::hours(1))
            .format("%Y-%m-%dT%H:%M:%S")
            .to_string();
        let stale = (Local::now().naive_local() - Duration::hours(30))
            .format("%Y-%m-%dT%H:%M:%S")
            .to_string();

        let data = PageResult {
            results: vec![
                JobRecord {
                    scraped_at: Some(fresh),
                    ..job(1, "Yangi ish", "IT Park")
                },
                JobRecord {
                    scraped_at: Some(stale),
                    ..job(2, "Eski ish", "IT Park")
                },
            ],
            next: Some(json!(null)),
        };

        let (_, keyboard) = build_job_list_view(&data, 1, 10).expect("non-empty page");

        assert_eq!(keyboard.inline_keyboard[0][0].text, "🆕 Yangi ish @IT Park");
        assert_eq!(keyboard.inline_keyboard[1][0].text, "Eski ish @IT Park");
    }

    #[test]
    fn test_long_button_labels_are_truncated() {
        let data = PageResult {
            results: vec![job(1, &"t".repeat(100), "IT Park")],
            next: Some(json!(null)),
        };

        let (_, keyboard) = build_job_list_view(&data, 1, 10).expect("non-empty page");

        assert_eq!(keyboard.inline_keyboard[0][0].text.chars().count(), 64);
    }

    #[test]
    fn test_list_header_names_page() {
        assert_eq!(job_list_header(1), "📋 Eng so‘nggi ishlar — <b>1-sahifa</b>");
    }

    #[test]
    fn test_detail_keyboard_links_and_goes_back() {
        let job = JobRecord {
            url: Some("https://example.com/jobs/7".to_string()),
            ..job(7, "Ish", "IT Park")
        };

        let keyboard = create_job_detail_keyboard(&job, 4);

        assert_eq!(keyboard.inline_keyboard.len(), 2);
        assert_eq!(keyboard.inline_keyboard[0][0].text, "🌐 Ishni ochish");
        assert_eq!(
            url_target(&keyboard.inline_keyboard[0][0]),
            Some("https://example.com/jobs/7")
        );
        assert_eq!(keyboard.inline_keyboard[1][0].text, "🔙 Orqaga");
        assert_eq!(callback_data(&keyboard.inline_keyboard[1][0]), Some("page_4"));
    }

    #[test]
    fn test_detail_keyboard_falls_back_without_url() {
        let keyboard = create_job_detail_keyboard(&job(7, "Ish", "IT Park"), 1);

        let target = url_target(&keyboard.inline_keyboard[0][0]).expect("url button");
        assert_eq!(target.trim_end_matches('/'), FALLBACK_URL);
    }
}
