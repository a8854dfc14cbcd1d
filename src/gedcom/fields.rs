//! Field encoding: dates, titles, events and marriage/divorce records.

use crate::gwdb::types::models::{Date, DivorceType, Dmy, Event, Family, Precision, Title};

use super::node::Node;
use super::tags::{event_tag, marriage_tag, tag, EventTag};

const MONTHS: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

/// Renders a calendar point as `DD MON YYYY`, leaving out absent parts.
///
/// Day and month values of 0 count as absent. Months outside 1..=12 are
/// dropped rather than rendered.
pub fn format_dmy(dmy: &Dmy) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(3);
    if let Some(day) = dmy.day.filter(|&d| d != 0) {
        parts.push(day.to_string());
    }
    if let Some(month) = dmy.month.filter(|&m| m != 0) {
        if let Some(abbrev) = MONTHS.get(month as usize - 1) {
            parts.push((*abbrev).to_string());
        }
    }
    if let Some(year) = dmy.year {
        parts.push(year.to_string());
    }
    parts.join(" ")
}

/// Renders a qualified date.
pub fn format_date(date: &Date) -> String {
    let first = format_dmy(&date.dmy);
    let prefix = match date.precision {
        Precision::Sure => "",
        Precision::About => "ABT ",
        Precision::Maybe => "EST ",
        Precision::Before => "BEF ",
        Precision::After => "AFT ",
        Precision::OrYear => return compound("FROM", "TO", &first, date.dmy2.as_ref()),
        Precision::YearInterval => return compound("BET", "AND", &first, date.dmy2.as_ref()),
    };
    format!("{}{}", prefix, first).trim_end().to_string()
}

/// Two-point form `OPEN a JOIN b`; empty points are left out with their separators.
fn compound(open: &str, join: &str, first: &str, second: Option<&Dmy>) -> String {
    let mut parts = vec![open.to_string()];
    if !first.is_empty() {
        parts.push(first.to_string());
    }
    if let Some(second) = second.map(format_dmy).filter(|s| !s.is_empty()) {
        parts.push(join.to_string());
        parts.push(second);
    }
    parts.join(" ")
}

/// Renders the date range of a title, or `None` if it has no bound.
pub fn format_title_range(title: &Title) -> Option<String> {
    let mut parts = Vec::with_capacity(2);
    if let Some(begin) = title.date_begin.as_ref().map(format_date).filter(|d| !d.is_empty()) {
        parts.push(format!("FROM {}", begin));
    }
    if let Some(end) = title.date_end.as_ref().map(format_date).filter(|d| !d.is_empty()) {
        parts.push(format!("TO {}", end));
    }
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" "))
    }
}

pub fn title_node(title: &Title) -> Node {
    let value = if title.fief.is_empty() {
        title.name.clone()
    } else {
        format!("{}, {}", title.name, title.fief)
    };
    let mut node = Node::text(tag::TITL, value);
    if let Some(range) = format_title_range(title) {
        node.push(Node::text(tag::DATE, range));
    }
    node
}

/// Creates the bare node for an event tag, or `None` for `Unknown`.
pub fn tagged_node(kind: EventTag) -> Option<Node> {
    match kind {
        EventTag::Standard(name) => Some(Node::new(name)),
        EventTag::Custom(label) => Some(Node::new(tag::EVEN).with_child(Node::text(tag::TYPE, label))),
        EventTag::Unknown => None,
    }
}

fn push_details(node: &mut Node, date: Option<&Date>, place: Option<&str>, source: Option<&str>) {
    if let Some(date) = date {
        node.push(Node::text(tag::DATE, format_date(date)));
    }
    if let Some(place) = place {
        node.push(Node::text(tag::PLAC, place));
    }
    if let Some(source) = source {
        node.push(Node::text(tag::SOUR, source));
    }
}

/// Renders an event, or `None` if its code has no known tag.
pub fn event_node(event: &Event) -> Option<Node> {
    let mut node = tagged_node(event_tag(event.code))?;
    push_details(
        &mut node,
        event.date.as_ref(),
        event.place.as_deref(),
        event.source.as_deref(),
    );
    Some(node)
}

/// Renders the marriage and divorce events of a family.
///
/// Not-married families get no marriage event; only `Divorced` families get
/// a divorce event.
pub fn marriage_nodes(family: &Family) -> Vec<Node> {
    let mut nodes = Vec::with_capacity(2);

    if let Some(mut node) = tagged_node(marriage_tag(family.marriage_type)) {
        push_details(
            &mut node,
            family.marriage_date.as_ref(),
            family.marriage_place.as_deref(),
            family.marriage_source.as_deref(),
        );
        nodes.push(node);
    }

    if family.divorce_type == DivorceType::Divorced {
        let mut node = Node::new(tag::DIV);
        push_details(
            &mut node,
            family.divorce_date.as_ref(),
            family.divorce_place.as_deref(),
            family.divorce_source.as_deref(),
        );
        nodes.push(node);
    }

    nodes
}
