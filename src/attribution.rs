use crate::config::{AttributionConfig, TieBreak};
use crate::model::{AttributionRecord, Event, PageKey};
use itertools::Itertools;
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use tracing::debug;

/*
    Events are grouped into one journey per user:
    {
        [user_id]: [event, event, ...]
    }
    Each journey is ordered by timestamp, ties keep the input order.
*/
pub type Journeys<'a> = HashMap<&'a str, Vec<&'a Event>>;

pub fn user_journeys(events: &[Event]) -> Journeys<'_> {
    let mut journeys: Journeys = events
        .iter()
        .map(|event| (event.user_id.as_str(), event))
        .into_group_map();

    // sort_by is stable, so equal timestamps stay in input order
    for journey in journeys.values_mut() {
        journey.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));
    }

    journeys
}

/// The part of an ordered journey strictly before the first registration,
/// or `None` if the user never registered.
pub fn registration_window<'j, 'a>(
    journey: &'j [&'a Event],
    config: &AttributionConfig,
) -> Option<&'j [&'a Event]> {
    let registered_at = journey
        .iter()
        .position(|event| config.is_registration(&event.page_url))?;

    Some(&journey[..registered_at])
}

/// Top `top_n` article pages by the number of distinct users who viewed them
/// before registering.
pub fn compute_top_articles(events: &[Event], top_n: usize) -> Vec<AttributionRecord> {
    compute_top_articles_with(events, &AttributionConfig::default().with_top_n(top_n))
}

pub fn compute_top_articles_with(
    events: &[Event],
    config: &AttributionConfig,
) -> Vec<AttributionRecord> {
    let journeys = user_journeys(events);

    let mut totals: HashMap<PageKey, usize> = HashMap::new();
    let mut registered_users = 0;

    for journey in journeys.values() {
        let Some(window) = registration_window(journey, config) else {
            continue;
        };
        registered_users += 1;

        // A user credits each page at most once
        let pages: HashSet<PageKey> = window
            .iter()
            .copied()
            .filter(|event| config.is_content(&event.page_url))
            .map(Event::page_key)
            .collect();

        for page in pages {
            *totals.entry(page).or_default() += 1;
        }
    }

    debug!(
        events = events.len(),
        users = journeys.len(),
        registered_users,
        pages = totals.len(),
        "attributed pre-registration page views"
    );

    let mut ranked: Vec<(PageKey, usize)> = totals.into_iter().collect();
    ranked.sort_by(|(a, a_total), (b, b_total)| {
        b_total
            .cmp(a_total)
            .then_with(|| tie_break(config.tie_break, a, b))
    });

    ranked
        .into_iter()
        .take(config.top_n)
        .map(AttributionRecord::from)
        .collect()
}

fn tie_break(rule: TieBreak, a: &PageKey, b: &PageKey) -> Ordering {
    match rule {
        TieBreak::PageUrl => (a.1, a.0).cmp(&(b.1, b.0)),
        TieBreak::PageName => a.cmp(b),
    }
}
