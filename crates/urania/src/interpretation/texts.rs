//! Canned interpretive sentences.
//!
//! Tables are sparse; every lookup has a generic fallback.

use std::collections::HashMap;

use crate::ephemeris::Body;
use crate::western::{HousePlacement, SignPlacement, ZodiacSign};

lazy_static::lazy_static! {
    static ref BODY_IN_SIGN: HashMap<(Body, ZodiacSign), &'static str> = {
        let mut m = HashMap::new();
        m.insert((Body::Sun, ZodiacSign::Leo), "Identity is bound up with pride, leadership and a need for recognition; strongly creative and self-centred.");
        m.insert((Body::Moon, ZodiacSign::Sagittarius), "Emotional security comes through searching, philosophy and freedom; an adventurous spirit.");
        m.insert((Body::Mercury, ZodiacSign::Virgo), "A highly analytical mind, focused on detail and service, with a need to be useful.");
        m.insert((Body::Venus, ZodiacSign::Gemini), "Communication and variety matter greatly in love; charm comes from wit.");
        m.insert((Body::Mars, ZodiacSign::Libra), "Energy and action revolve around justice, balance and diplomacy; open conflict is avoided.");
        m.insert((Body::Jupiter, ZodiacSign::Virgo), "Growth and luck come through service, organisation and improving everyday matters.");
        m.insert((Body::Saturn, ZodiacSign::Virgo), "Lessons of responsibility centre on work, health and perfectionism; precise structures matter.");
        m
    };

    static ref BODY_IN_HOUSE: HashMap<(Body, u8), &'static str> = {
        let mut m = HashMap::new();
        m.insert((Body::Sun, 7), "Vital energy is focused on one-to-one relationships and partnership, finding identity through another.");
        m.insert((Body::Moon, 10), "Emotional needs are public; security is found through career, ambition and reputation.");
        m.insert((Body::Mercury, 7), "Thought and communication are constantly engaged with partnership, counsel and important social exchanges.");
        m.insert((Body::Venus, 7), "Values and ways of loving are defined through one-to-one relationships.");
        m.insert((Body::Mars, 8), "Drive and action turn toward shared resources, deep transformation, hidden matters and crises.");
        m.insert((Body::Saturn, 8), "Hard lessons and responsibilities arrive around shared resources, debts and deep transformation.");
        m
    };
}

/// Reading for a body's sign and, when known, its house.
pub fn placement_text(body: Body, sign: &SignPlacement, house: Option<HousePlacement>) -> String {
    let house = house.filter(|h| h.is_known());
    let sign_text = BODY_IN_SIGN.get(&(body, sign.sign));
    let house_text = house.and_then(|h| BODY_IN_HOUSE.get(&(body, h.number())));

    let location = match house {
        Some(h) => format!("{body} at {sign} in the {h} ({})", h.theme()),
        None => format!("{body} at {sign}"),
    };

    match (sign_text, house_text) {
        (None, None) => format!("{location}. No detailed reading is available."),
        (Some(s), None) => format!("{location}: {s}"),
        (None, Some(h)) => format!("{location}: {h}"),
        (Some(s), Some(h)) => format!("{location}: {s} {h}"),
    }
}

pub fn ascendant_text(ascendant: &SignPlacement) -> String {
    format!(
        "Ascendant at {ascendant}: the image presented to the world, the outward appearance and the first reaction to new situations."
    )
}

/// Reading for the Part of Fortune by house.
pub fn fortune_text(sign: &SignPlacement, house: HousePlacement) -> String {
    let base = if house.is_known() {
        format!("The Part of Fortune falls at {sign} in the {house} ({}).", house.theme())
    } else {
        format!("The Part of Fortune falls at {sign}.")
    };
    let reading = match house.number() {
        1 | 10 => "This placement points to tangible luck and success in personal endeavours and public reputation.",
        7 | 8 => "Happiness and success are tied to important relationships, shared resources or deep transformation.",
        4 | 5 => "Well-being comes through home, family, creativity and children.",
        _ => "This point shows where luck and energy flow most easily.",
    };
    format!("{base} {reading}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::western::sign_placement;

    #[test]
    fn sign_and_house_texts_combine() {
        let sun = sign_placement(130.0);
        let text = placement_text(Body::Sun, &sun, HousePlacement::new(7));
        assert!(text.starts_with("Sun at 10°00' Leo in the 7th house (relationships and partnership): "));
        assert!(text.contains("pride"));
        assert!(text.contains("partnership, finding identity"));
    }

    #[test]
    fn unmapped_placement_falls_back() {
        let moon = sign_placement(15.0);
        let text = placement_text(Body::Moon, &moon, HousePlacement::new(3));
        assert_eq!(
            text,
            "Moon at 15°00' Aries in the 3rd house (communication and learning). No detailed reading is available."
        );
    }

    #[test]
    fn unknown_house_is_omitted() {
        let moon = sign_placement(15.0);
        let text = placement_text(Body::Moon, &moon, Some(HousePlacement::UNKNOWN));
        assert_eq!(text, "Moon at 15°00' Aries. No detailed reading is available.");
    }

    #[test]
    fn fortune_reading_by_house() {
        let pf = sign_placement(270.0);
        let text = fortune_text(&pf, HousePlacement::new(10).unwrap());
        assert!(text.contains("10th house (career and reputation)"));
        assert!(text.contains("public reputation"));
        let text = fortune_text(&pf, HousePlacement::new(2).unwrap());
        assert!(text.ends_with("flow most easily."));
    }
}
