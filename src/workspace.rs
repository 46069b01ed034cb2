//! Investigation workspace: immutable view state and derived report

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::intel::{classify, IntelRecord};
use crate::pivots::{pivot_links, PivotLink};
use crate::types::InputKind;
use crate::variants::VariantGenerator;

/// Field values and case notes for one investigation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Workspace {
    pub username: String,
    pub domain: String,
    pub email: String,
    pub phone: String,
    pub ip: String,
    pub notes: String,
}

/// State transitions for [`Workspace`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SetField(InputKind, String),
    SetNotes(String),
    /// Append a line to the notes, separated by a newline
    AppendNote(String),
    ClearNotes,
    Reset,
}

impl Workspace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an action and return the next state
    pub fn reduce(self, action: Action) -> Self {
        match action {
            Action::SetField(kind, value) => {
                let mut next = self;
                match kind {
                    InputKind::Username => next.username = value,
                    InputKind::Domain => next.domain = value,
                    InputKind::Email => next.email = value,
                    InputKind::Phone => next.phone = value,
                    InputKind::Ip => next.ip = value,
                }
                next
            }
            Action::SetNotes(notes) => Self { notes, ..self },
            Action::AppendNote(line) => {
                let notes = if self.notes.is_empty() {
                    line
                } else if self.notes.ends_with('\n') {
                    format!("{}{}", self.notes, line)
                } else {
                    format!("{}\n{}", self.notes, line)
                };
                Self { notes, ..self }
            }
            Action::ClearNotes => Self {
                notes: String::new(),
                ..self
            },
            Action::Reset => Self::default(),
        }
    }

    /// Current value of a field
    pub fn field(&self, kind: InputKind) -> &str {
        match kind {
            InputKind::Username => &self.username,
            InputKind::Domain => &self.domain,
            InputKind::Email => &self.email,
            InputKind::Phone => &self.phone,
            InputKind::Ip => &self.ip,
        }
    }

    /// Derive the full report from the current fields
    pub fn report(&self, generator: &VariantGenerator) -> Report {
        let variants = generator
            .generate(&self.username)
            .into_iter()
            .map(|handle| {
                let links = pivot_links(InputKind::Username, &handle);
                HandleVariant { handle, links }
            })
            .collect();

        let sections = InputKind::ALL
            .into_iter()
            .filter(InputKind::is_classifiable)
            .filter_map(|kind| {
                let value = self.field(kind);
                let intel = classify(kind, value)?;
                Some(IntelSection {
                    kind,
                    intel,
                    links: pivot_links(kind, value),
                })
            })
            .collect();

        Report { variants, sections }
    }
}

/// A username variant and its platform links
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HandleVariant {
    pub handle: String,
    pub links: Vec<PivotLink>,
}

/// Intel and pivot links for one classified field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntelSection {
    pub kind: InputKind,
    pub intel: IntelRecord,
    pub links: Vec<PivotLink>,
}

/// Everything derived from a workspace; recomputed, never stored
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    pub variants: Vec<HandleVariant>,
    pub sections: Vec<IntelSection>,
}

impl Report {
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty() && self.sections.is_empty()
    }

    pub fn section(&self, kind: InputKind) -> Option<&IntelSection> {
        self.sections.iter().find(|s| s.kind == kind)
    }
}

/// Format a case-note line: `[time] - finding - source - confidence`
pub fn note_line(at: DateTime<Utc>, finding: &str, source: &str, confidence: &str) -> String {
    format!(
        "[{}] - {} - {} - {}",
        at.to_rfc3339_opts(SecondsFormat::Secs, true),
        finding.trim(),
        source.trim(),
        confidence.trim()
    )
}
