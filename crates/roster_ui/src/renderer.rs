//! Turns a fetched roster into activity cards and activity options.
//!
//! Rendering always starts from empty targets, so calling it again with the
//! same roster yields the same tree.

use client_core::FetchError;
use shared::domain::{Activity, ActivityName, Roster};
use tracing::debug;

use crate::{
    labels,
    page::{Element, SelectControl},
};

#[derive(Debug, Clone, Copy, Default)]
pub struct RosterRenderer;

impl RosterRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Dispatches on the fetch result. A failed fetch replaces the list with a
    /// single error line and leaves `select` untouched.
    pub fn render_result(
        &self,
        result: &Result<Roster, FetchError>,
        list: &mut Element,
        select: &mut SelectControl,
    ) {
        match result {
            Ok(roster) => self.render(roster, list, select),
            Err(_) => self.render_error(list),
        }
    }

    pub fn render(&self, roster: &Roster, list: &mut Element, select: &mut SelectControl) {
        list.clear();
        select.reset_with_placeholder(labels::ACTIVITY_PLACEHOLDER);

        for (name, activity) in roster.iter() {
            list.push(activity_card(name, activity));
            select.push_option(name.as_str(), name.as_str());
        }
        debug!(activities = roster.len(), "rendered roster");
    }

    pub fn render_error(&self, list: &mut Element) {
        list.clear();
        list.push(
            Element::new("p")
                .with_class("error")
                .with_text(labels::LOAD_FAILED),
        );
    }
}

fn activity_card(name: &ActivityName, activity: &Activity) -> Element {
    Element::new("div")
        .with_class("activity-card")
        .with_child(
            Element::new("h4")
                .with_class("activity-title")
                .with_text(name.as_str()),
        )
        .with_child(
            Element::new("p")
                .with_class("activity-desc")
                .with_text(&activity.description),
        )
        .with_child(
            Element::new("p")
                .with_class("activity-schedule")
                .with_child(Element::new("strong").with_text(labels::SCHEDULE))
                .with_child(Element::new("span").with_text(&activity.schedule)),
        )
        .with_child(
            Element::new("p")
                .with_class("activity-spots")
                .with_child(Element::new("strong").with_text(labels::AVAILABILITY))
                .with_child(
                    Element::new("span")
                        .with_class("spots-left")
                        .with_text(labels::spots_remaining(activity.spots_left())),
                ),
        )
        .with_child(participants_section(&activity.participants))
}

fn participants_section(participants: &[String]) -> Element {
    let header = Element::new("div")
        .with_class("participants-header")
        .with_child(
            Element::new("h5")
                .with_class("participants-title")
                .with_text(labels::PARTICIPANTS_TITLE),
        )
        .with_child(
            Element::new("span")
                .with_class("participant-count")
                .with_text(participants.len().to_string()),
        );

    let mut list = Element::new("ul").with_class("participants-list");
    if participants.is_empty() {
        list.push(
            Element::new("li")
                .with_class("no-participants")
                .with_text(labels::NO_PARTICIPANTS),
        );
    }
    for participant in participants {
        list.push(
            Element::new("li")
                .with_class("participant-item")
                .with_child(
                    Element::new("span")
                        .with_class("avatar-badge")
                        .with_text(avatar_initials(participant)),
                )
                .with_child(
                    Element::new("span")
                        .with_class("participant-name")
                        .with_text(participant.as_str()),
                ),
        );
    }

    Element::new("div")
        .with_class("participants-section")
        .with_child(header)
        .with_child(list)
}

/// First letter of the first two whitespace-separated words, uppercased,
/// capped at two characters. Blank names give an empty badge.
pub fn avatar_initials(name: &str) -> String {
    name.split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}

#[cfg(test)]
#[path = "tests/renderer_tests.rs"]
mod tests;
