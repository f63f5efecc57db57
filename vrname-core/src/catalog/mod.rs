mod builtin;
pub mod declarations;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::OnceLock;

/// Player id whose conventions are understood by most VR players.
pub const UNIVERSAL_PLAYER: &str = "universal";

/// Player id used for ad-hoc suffixes that are not in the catalog.
pub const CUSTOM_PLAYER: &str = "custom";

/// A named filename suffix understood by one player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamingConvention {
    pub player: String,
    pub label: String,
    pub suffix: String,
}

impl NamingConvention {
    pub fn new(
        player: impl Into<String>,
        label: impl Into<String>,
        suffix: impl Into<String>,
    ) -> Result<Self> {
        let suffix = suffix.into();
        if suffix.is_empty() {
            return Err(Error::EmptySuffix);
        }
        if suffix.contains(&['/', '\\', '\0'][..]) {
            return Err(Error::InvalidSuffix(suffix));
        }
        Ok(Self {
            player: player.into(),
            label: label.into(),
            suffix,
        })
    }

    /// Convention for a suffix typed in by the user rather than picked from
    /// the catalog.
    pub fn custom(suffix: impl Into<String>) -> Result<Self> {
        let suffix = suffix.into();
        let label = label_from_suffix(&suffix);
        Self::new(CUSTOM_PLAYER, label, suffix)
    }
}

/// Derive a display label from a suffix token: `_180_LR` becomes `180 LR`.
pub fn label_from_suffix(suffix: &str) -> String {
    suffix
        .split('_')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    pub name: String,
    pub conventions: Vec<NamingConvention>,
}

/// Read-only registry of players and the conventions each one supports.
///
/// Players keep their declaration order. The `universal` player is always
/// present; [`Catalog::new`] inserts the built-in one first when the supplied
/// players do not declare it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    players: Vec<Player>,
}

impl Catalog {
    pub fn new(mut players: Vec<Player>) -> Result<Self> {
        if !players.iter().any(|p| p.id == UNIVERSAL_PLAYER) {
            players.insert(0, builtin::universal());
        }

        let mut ids = HashSet::new();
        let mut seen = HashSet::new();
        for player in &players {
            if !ids.insert(player.id.as_str()) {
                return Err(Error::DuplicatePlayer(player.id.clone()));
            }
            for convention in &player.conventions {
                if convention.suffix.is_empty() {
                    return Err(Error::EmptySuffix);
                }
                if convention.player != player.id {
                    return Err(Error::ForeignConvention {
                        player: player.id.clone(),
                        owner: convention.player.clone(),
                        label: convention.label.clone(),
                    });
                }
                if !seen.insert((player.id.as_str(), convention.label.as_str())) {
                    return Err(Error::DuplicateConvention {
                        player: player.id.clone(),
                        label: convention.label.clone(),
                    });
                }
            }
        }

        Ok(Self { players })
    }

    /// The catalog compiled into the binary, built on first use.
    pub fn builtin() -> &'static Self {
        static BUILTIN: OnceLock<Catalog> = OnceLock::new();
        BUILTIN.get_or_init(|| Self {
            players: builtin::players(),
        })
    }

    pub fn list_players(&self) -> Vec<&str> {
        self.players.iter().map(|p| p.id.as_str()).collect()
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, id: &str) -> Result<&Player> {
        self.players
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| Error::UnknownPlayer(id.to_string()))
    }

    pub fn list_conventions(&self, player: &str) -> Result<&[NamingConvention]> {
        Ok(&self.player(player)?.conventions)
    }

    /// Look up a convention by label (case-insensitive) or by exact suffix.
    pub fn find_convention(&self, player: &str, key: &str) -> Result<&NamingConvention> {
        let conventions = self.list_conventions(player)?;
        conventions
            .iter()
            .find(|c| c.label.eq_ignore_ascii_case(key))
            .or_else(|| conventions.iter().find(|c| c.suffix == key))
            .ok_or_else(|| Error::UnknownConvention {
                player: player.to_string(),
                label: key.to_string(),
            })
    }
}
