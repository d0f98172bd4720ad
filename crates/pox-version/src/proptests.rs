use std::cmp::Ordering;

use proptest::prelude::*;

use crate::{semver, version};

prop_compose! {
    fn identifier()(
        id in prop_oneof!["[0-9]{1,3}", "[a-z][a-z0-9]{0,4}"]
    ) -> String {
        id
    }
}

prop_compose! {
    fn relaxed_text()(
        release in prop::collection::vec(0u64..12, 1..6),
        pre in prop::collection::vec(identifier(), 0..3),
        big in any::<bool>(),
    ) -> String {
        let mut text = release.iter().map(|n| n.to_string()).collect::<Vec<_>>().join(".");
        if big {
            text.push_str(".184467440737095516160");
        }
        if !pre.is_empty() {
            text.push('-');
            text.push_str(&pre.join("."));
        }
        text
    }
}

prop_compose! {
    fn strict_text()(
        major in 0u64..4,
        minor in 0u64..4,
        patch in 0u64..4,
        pre in prop::collection::vec(prop_oneof!["0|[1-9][0-9]{0,2}", "[a-z][a-z0-9]{0,4}"], 0..3),
    ) -> String {
        let mut text = format!("{}.{}.{}", major, minor, patch);
        if !pre.is_empty() {
            text.push('-');
            text.push_str(&pre.join("."));
        }
        text
    }
}

fn relaxed(text: &str) -> version::Version {
    version::Version::parse(text).unwrap()
}

proptest! {
    #[test]
    fn relaxed_compare_is_antisymmetric(a in relaxed_text(), b in relaxed_text()) {
        let (a, b) = (relaxed(&a), relaxed(&b));
        prop_assert_eq!(a.compare(&b), b.compare(&a).reverse());
        prop_assert_eq!(a.compare(&a), Ordering::Equal);
    }

    #[test]
    fn relaxed_compare_is_transitive(
        a in relaxed_text(),
        b in relaxed_text(),
        c in relaxed_text(),
    ) {
        let (a, b, c) = (relaxed(&a), relaxed(&b), relaxed(&c));
        if a <= b && b <= c {
            prop_assert!(a <= c, "{} <= {} <= {} but {} > {}", a, b, c, a, c);
        }
        if a >= b && b >= c {
            prop_assert!(a >= c, "{} >= {} >= {} but {} < {}", a, b, c, a, c);
        }
    }

    #[test]
    fn relaxed_display_is_canonical(text in relaxed_text(), prefixed in any::<bool>()) {
        let input = if prefixed { format!("v{}", text) } else { text };
        let canonical = relaxed(&input).to_string();
        let reparsed = relaxed(&canonical);
        prop_assert_eq!(reparsed.to_string(), canonical);
        prop_assert_eq!(reparsed, relaxed(&input));
    }

    #[test]
    fn strict_compare_is_total(a in strict_text(), b in strict_text()) {
        let a = semver::Version::parse(&a).unwrap();
        let b = semver::Version::parse(&b).unwrap();
        let relations = [a < b, a == b, a > b];
        prop_assert_eq!(relations.iter().filter(|r| **r).count(), 1);
        prop_assert_eq!(a.compare(&b), b.compare(&a).reverse());
    }

    #[test]
    fn strict_display_round_trips(text in strict_text()) {
        let version = semver::Version::parse(&text).unwrap();
        prop_assert_eq!(version.to_string(), text);
    }

    #[test]
    fn relaxed_constraint_display_reparses(
        a in relaxed_text(),
        b in relaxed_text(),
        op in prop_oneof![Just(">="), Just("<"), Just("~>"), Just("^"), Just("!=")],
    ) {
        let text = format!("{} {}, < {} || {}", op, a, b, a);
        let parsed = version::Constraints::parse(&text).unwrap();
        let reparsed = version::Constraints::parse(&parsed.to_string()).unwrap();
        prop_assert_eq!(parsed, reparsed);
    }

    #[test]
    fn strict_constraint_display_reparses(
        a in strict_text(),
        b in strict_text(),
        op in prop_oneof![Just(">="), Just("<"), Just("~"), Just("^"), Just("!=")],
        zero_padding in any::<bool>(),
    ) {
        let options = semver::ConstraintOptions::new().zero_padding(zero_padding);
        let text = format!("{} {}, < {} || {} ||", op, a, b, a);
        let parsed = semver::Constraints::parse_with_options(&text, options).unwrap();
        let rendered = parsed.to_string();
        let reparsed = semver::Constraints::parse_with_options(&rendered, options).unwrap();
        prop_assert_eq!(parsed, reparsed);
    }
}
