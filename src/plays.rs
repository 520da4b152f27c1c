//! Foul-type classification from free-text play descriptions. A plain
//! substring match over the description; anything that is neither technical
//! nor flagrant is a regular (personal/shooting) foul.

use serde::Serialize;

use crate::state::Play;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FoulClass {
    Technical,
    Flagrant,
    Regular,
}

pub fn classify_foul(description: &str) -> FoulClass {
    let lower = description.to_lowercase();
    if lower.contains("flagrant") {
        FoulClass::Flagrant
    } else if lower.contains("technical") {
        FoulClass::Technical
    } else {
        FoulClass::Regular
    }
}

/// Plays grouped by foul class, input order preserved within each bucket.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GamePlays {
    pub technical_fouls: Vec<Play>,
    pub flagrant_fouls: Vec<Play>,
    pub regular_fouls: Vec<Play>,
}

pub fn group_plays(plays: Vec<Play>) -> GamePlays {
    let mut out = GamePlays::default();
    for play in plays {
        match classify_foul(&play.description) {
            FoulClass::Technical => out.technical_fouls.push(play),
            FoulClass::Flagrant => out.flagrant_fouls.push(play),
            FoulClass::Regular => out.regular_fouls.push(play),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_by_substring() {
        assert_eq!(classify_foul("Technical foul on the bench"), FoulClass::Technical);
        assert_eq!(classify_foul("Flagrant 1 foul called"), FoulClass::Flagrant);
        assert_eq!(classify_foul("Shooting foul, two shots"), FoulClass::Regular);
    }

    #[test]
    fn grouping_preserves_order_within_buckets() {
        let plays = vec![
            Play {
                description: "Personal foul".to_string(),
                ..Play::default()
            },
            Play {
                description: "Flagrant foul, under review".to_string(),
                ..Play::default()
            },
            Play {
                description: "Loose ball foul".to_string(),
                ..Play::default()
            },
        ];
        let grouped = group_plays(plays);
        assert_eq!(grouped.flagrant_fouls.len(), 1);
        assert_eq!(grouped.regular_fouls.len(), 2);
        assert_eq!(grouped.regular_fouls[0].description, "Personal foul");
    }
}
