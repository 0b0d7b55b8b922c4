//! Full narrative text for the Paris 2000-06-15 placement.

use compass_astro::{NodePlacement, ZodiacSign};
use compass_narrative::{ThemeTables, compose};

#[test]
fn paris_fixture_narrative() {
    let south = NodePlacement {
        sign: ZodiacSign::Capricorn,
        house: 4,
    };
    let north = NodePlacement {
        sign: ZodiacSign::Cancer,
        house: 10,
    };
    let r = compose(&ThemeTables::builtin(), south, north).unwrap();

    assert_eq!(
        r.title,
        "Capricorn South Node (4th House) → Cancer North Node (10th House)"
    );
    assert_eq!(
        r.bridge,
        "From achievement as worth to belonging as worth."
    );
    let contexts: Vec<&str> = r.sections.iter().map(|s| s.context.as_str()).collect();
    assert_eq!(
        contexts,
        [
            "☋ South Node in Capricorn: the one in charge",
            "☋ South Node in the 4th House — familiar life scenario",
            "☊ North Node in Cancer: the home within",
            "☊ North Node in the 10th House — where growth happens",
        ]
    );
    assert_eq!(
        r.sections[1].meaning,
        "Retreating into family, the past and private emotional life."
    );
    assert_eq!(
        r.sections[3].meaning,
        "Growth comes through a public calling and earned authority."
    );
    assert_eq!(
        r.recommendations,
        [
            "Consciously develop: feeling before managing, tending your inner life and letting close people care for you",
            "Let growth unfold through: career and public role",
            "Notice when you fall back into: home and roots",
            "Keep the core transition in mind: From achievement as worth to belonging as worth.",
        ]
    );
    assert_eq!(r.motto, "Let yourself be held.");
}

#[test]
fn every_axis_and_house_pair_composes() {
    let tables = ThemeTables::builtin();
    for sign in compass_astro::ALL_SIGNS {
        for house in 1..=12u8 {
            let north = NodePlacement { sign, house };
            let south = NodePlacement {
                sign: sign.opposite(),
                house: compass_astro::opposite_house(house),
            };
            let r = compose(&tables, south, north).unwrap();
            assert_eq!(r.sections.len(), 4);
            assert_eq!(r.recommendations.len(), 4);
        }
    }
}
