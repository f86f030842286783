//! Property-based tests for the attribution engine

use chrono::{Duration, NaiveDate, NaiveDateTime};
use hitlog_attribution::{compute_top_articles, Event};
use proptest::prelude::*;

const PAGES: [(&str, &str); 5] = [
    ("Article 1", "/articles/article-1"),
    ("Article 2", "/articles/article-2"),
    ("Article 3", "/articles/article-3"),
    ("Home", "/home"),
    ("Registration", "/register"),
];

fn base_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 3, 25)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

// (page index, user index, minutes offset)
fn hitlog(max_page: usize) -> impl Strategy<Value = Vec<Event>> {
    prop::collection::vec((0..max_page, 0usize..4, 0i64..120), 0..40).prop_map(|rows| {
        rows.into_iter()
            .map(|(page, user, minutes)| {
                let (page_name, page_url) = PAGES[page];
                Event::new(
                    page_name,
                    page_url,
                    format!("user{user}"),
                    base_time() + Duration::minutes(minutes),
                )
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_no_registration_means_empty(events in hitlog(4)) {
        prop_assert!(compute_top_articles(&events, 3).is_empty());
    }

    #[test]
    fn prop_bounded_and_sorted(events in hitlog(5), top_n in 0usize..5) {
        let top = compute_top_articles(&events, top_n);

        prop_assert!(top.len() <= top_n);
        prop_assert!(top.windows(2).all(|pair| pair[0].total >= pair[1].total));
        prop_assert!(top.iter().all(|record| record.page_url.starts_with("/articles/")));
    }

    #[test]
    fn prop_total_never_exceeds_registered_users(events in hitlog(5)) {
        let registered: std::collections::HashSet<&str> = events
            .iter()
            .filter(|event| event.page_url == "/register")
            .map(|event| event.user_id.as_str())
            .collect();

        for record in compute_top_articles(&events, 5) {
            prop_assert!(record.total <= registered.len());
        }
    }

    #[test]
    fn prop_idempotent(events in hitlog(5)) {
        prop_assert_eq!(compute_top_articles(&events, 3), compute_top_articles(&events, 3));
    }

    #[test]
    fn prop_repeated_views_count_once(events in hitlog(5), repeats in 1usize..4) {
        let mut repeated = events.clone();
        for _ in 0..repeats {
            repeated.extend(events.iter().cloned());
        }

        prop_assert_eq!(compute_top_articles(&repeated, 5), compute_top_articles(&events, 5));
    }

    #[test]
    fn prop_post_registration_views_ignored(events in hitlog(5)) {
        let registered: std::collections::HashSet<String> = events
            .iter()
            .filter(|event| event.page_url == "/register")
            .map(|event| event.user_id.clone())
            .collect();

        // Later than any generated timestamp, so after every registration
        let after = base_time() + Duration::days(1);
        let mut extended = events.clone();
        for user in &registered {
            extended.push(Event::new("Article 3", "/articles/article-3", user.clone(), after));
            extended.push(Event::new("Registration", "/register", user.clone(), after));
        }

        prop_assert_eq!(compute_top_articles(&extended, 5), compute_top_articles(&events, 5));
    }

    #[test]
    fn prop_no_in_window_articles_means_empty(
        visits in prop::collection::vec((0usize..3, 0usize..4, 0i64..60), 0..30),
        reads in prop::collection::vec((0usize..3, 0usize..4, 61i64..120), 0..30),
        registers in prop::collection::vec(any::<bool>(), 4),
    ) {
        // In-window views are never articles; articles only follow a registration at minute 60
        const OTHER_PAGES: [(&str, &str); 3] =
            [("Home", "/home"), ("Pricing", "/pricing"), ("Registration", "/register")];

        let mut events: Vec<Event> = visits
            .into_iter()
            .map(|(page, user, minutes)| {
                let (page_name, page_url) = OTHER_PAGES[page];
                Event::new(page_name, page_url, format!("user{user}"), base_time() + Duration::minutes(minutes))
            })
            .collect();
        for (user, registered) in registers.iter().enumerate() {
            if *registered {
                events.push(Event::new("Registration", "/register", format!("user{user}"), base_time() + Duration::minutes(60)));
            }
        }
        for (page, user, minutes) in reads {
            let (page_name, page_url) = PAGES[page];
            events.push(Event::new(page_name, page_url, format!("user{user}"), base_time() + Duration::minutes(minutes)));
        }

        prop_assert!(compute_top_articles(&events, 5).is_empty());
    }
}
