//! Loader for plain-text convention declaration files.
//!
//! The format is a list of sections. A header is any line ending in `:`;
//! each following line declares one or more suffix tokens, optionally with a
//! description after `=`:
//!
//! ```text
//! UNIVERSAL PATTERNS:
//! _180_LR = 180 degree side by side
//! _3dh, _LR, _SBS = half side by side
//!
//! PLAYA VR SPECIFIC:
//! _FISHEYE190
//! ```

use super::{label_from_suffix, Catalog, NamingConvention, Player, UNIVERSAL_PLAYER};
use crate::error::Result;
use std::fs;
use std::path::Path;

/// Known section headers, matched by prefix on the upper-cased header.
const KNOWN_SECTIONS: &[(&str, &str, &str)] = &[
    ("UNIVERSAL PATTERNS", UNIVERSAL_PLAYER, "Universal"),
    ("PLAYA VR", "playa_vr", "PLAY'A VR"),
    ("SKYBOX VR", "skybox_vr", "Skybox VR Player"),
    ("PIGASUS", "pigasus_vr", "Pigasus VR"),
    ("RAD TV", "rad_tv", "Rad TV"),
    ("COMMEDIA", "commedia", "Commedia"),
    ("OCULUS", "oculus_video", "Oculus Video App"),
];

/// Read and parse a declaration file.
pub fn load(path: &Path) -> Result<Catalog> {
    let content = fs::read_to_string(path)?;
    parse(&content)
}

pub fn parse(content: &str) -> Result<Catalog> {
    let mut players: Vec<Player> = Vec::new();
    let mut current: Option<usize> = None;

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if line.ends_with(':') {
            let (id, name) = normalize_section(line);
            let index = match players.iter().position(|p| p.id == id) {
                Some(index) => index,
                None => {
                    players.push(Player {
                        id,
                        name,
                        conventions: Vec::new(),
                    });
                    players.len() - 1
                },
            };
            current = Some(index);
            continue;
        }

        let Some(index) = current else {
            log::debug!("Ignoring declaration outside of a section: {}", line);
            continue;
        };

        let (tokens, description) = match line.split_once('=') {
            Some((left, right)) => (left, Some(right.trim())),
            None => (line, None),
        };
        let tokens: Vec<&str> = tokens
            .split(',')
            .map(str::trim)
            .filter(|t| t.starts_with('_') && t.len() > 1)
            .collect();

        let player = &mut players[index];
        for token in &tokens {
            if player.conventions.iter().any(|c| c.suffix == *token) {
                continue;
            }
            let label = match description {
                Some(text) if tokens.len() == 1 && !text.is_empty() => text.to_string(),
                _ => label_from_suffix(token),
            };
            if player.conventions.iter().any(|c| c.label == label) {
                log::warn!(
                    "Skipping {} for {}: label '{}' already declared",
                    token,
                    player.id,
                    label
                );
                continue;
            }
            match NamingConvention::new(player.id.clone(), label, *token) {
                Ok(convention) => player.conventions.push(convention),
                Err(e) => log::warn!("Skipping {} for {}: {}", token, player.id, e),
            }
        }
    }

    Catalog::new(players)
}

/// Map a section header to a player id and display name.
fn normalize_section(header: &str) -> (String, String) {
    let text = header.trim().trim_end_matches(':').trim();
    let upper = text.to_uppercase();

    for (prefix, id, name) in KNOWN_SECTIONS {
        if upper.starts_with(prefix) {
            return ((*id).to_string(), (*name).to_string());
        }
    }

    (slugify(text), text.to_string())
}

fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
        } else if !slug.ends_with('_') && !slug.is_empty() {
            slug.push('_');
        }
    }
    slug.trim_end_matches('_').to_string()
}
