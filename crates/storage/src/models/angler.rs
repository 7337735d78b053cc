use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Angler {
    pub angler_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    /// Guests carry `member = false`; they hold places but never points
    /// and never season awards.
    pub member: bool,
    pub email: Option<String>,
    pub created_at: chrono::NaiveDateTime,
}

impl Angler {
    pub fn name(&self) -> AnglerName {
        AnglerName::new(&self.first_name, &self.last_name)
    }
}

/// A newtype that ensures angler names render consistently everywhere a
/// name appears (rosters, standings, team labels), regardless of how the
/// raw first/last fields were typed in.
///
/// Leading/trailing whitespace is trimmed and interior runs are collapsed,
/// so "  Bobby " + "Troup" and "Bobby" + "Troup" produce the same name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnglerName {
    first: String,
    last: String,
}

impl AnglerName {
    pub fn new(first: impl AsRef<str>, last: impl AsRef<str>) -> Self {
        Self {
            first: collapse_whitespace(first.as_ref()),
            last: collapse_whitespace(last.as_ref()),
        }
    }

    /// Full display name, `"First Last"`.
    pub fn display(&self) -> String {
        match (self.first.is_empty(), self.last.is_empty()) {
            (true, true) => String::new(),
            (false, true) => self.first.clone(),
            (true, false) => self.last.clone(),
            (false, false) => format!("{} {}", self.first, self.last),
        }
    }

    /// Team label: `"A & B"` for a full team, `"A - solo"` when the
    /// angler fished without a partner.
    pub fn team_label(&self, partner: Option<&AnglerName>) -> String {
        match partner {
            Some(p) => format!("{} & {}", self.display(), p.display()),
            None => format!("{} - solo", self.display()),
        }
    }
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_trims_and_collapses() {
        let name = AnglerName::new("  Bobby ", "  Troup");
        assert_eq!(name.display(), "Bobby Troup");

        let messy = AnglerName::new("Mary  Ann", "van  Dyke ");
        assert_eq!(messy.display(), "Mary Ann van Dyke");
    }

    #[test]
    fn test_equality_ignores_padding() {
        assert_eq!(
            AnglerName::new(" Jed", "Clampett "),
            AnglerName::new("Jed", "Clampett")
        );
    }

    #[test]
    fn test_team_label_pair() {
        let a = AnglerName::new("Jed", "Clampett");
        let b = AnglerName::new("Jethro", "Bodine");
        assert_eq!(a.team_label(Some(&b)), "Jed Clampett & Jethro Bodine");
    }

    #[test]
    fn test_team_label_solo() {
        let a = AnglerName::new("Jed", "Clampett");
        assert_eq!(a.team_label(None), "Jed Clampett - solo");
    }

    #[test]
    fn test_display_single_part() {
        assert_eq!(AnglerName::new("Cher", "").display(), "Cher");
        assert_eq!(AnglerName::new("", "Cher").display(), "Cher");
    }
}
