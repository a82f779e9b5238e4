//! # Remark engine
//!
//! Turns one delivery into one commentary sentence.
//!
//! Each fact about a ball (a substitution, runs off the bat, extras, a review,
//! a dismissal) is described by its own [`RemarkRule`]. Rules run in a fixed
//! order and their fragments are joined with single spaces, so a ball can carry
//! any combination of events. A ball with no runs and no events short-circuits
//! to [`NO_EVENT_REMARK`].
//!
//! Fields the rules do not recognize are left out of the sentence rather than
//! failing the report.

use crate::models::Delivery;
use crate::text::{capitalize, title_case};

pub const NO_EVENT_REMARK: &str = "No incident or score.";

/// One contributor to a delivery remark.
pub trait RemarkRule: Sync {
    fn name(&self) -> &'static str;

    /// Fragment describing this rule's aspect of the ball, if it applies.
    fn remark(&self, delivery: &Delivery) -> Option<String>;
}

/// Player replacements: role-based first, then match-based.
pub struct ReplacementRule;

impl RemarkRule for ReplacementRule {
    fn name(&self) -> &'static str {
        "replacements"
    }

    fn remark(&self, delivery: &Delivery) -> Option<String> {
        let replacements = delivery.replacements.as_ref().filter(|r| !r.is_empty())?;

        let role = replacements.role.iter().map(|r| {
            let replaced = match &r.player_out {
                Some(out) => format!("{} {}", r.role, out),
                None => r.role.clone(),
            };
            format!("{} replaces {}. {}.", r.player_in, replaced, title_case(&r.reason))
        });

        let matched = replacements.match_.iter().map(|r| {
            let reason: Vec<String> = r.reason.split('_').map(capitalize).collect();
            format!("{} replaces {}. {}.", r.player_in, r.player_out, reason.join(" "))
        });

        Some(role.chain(matched).collect::<Vec<_>>().join(" "))
    }
}

/// Runs off the bat. 4s and 6s are boundaries unless a non-boundary flag is recorded.
pub struct BatterRunsRule;

impl RemarkRule for BatterRunsRule {
    fn name(&self) -> &'static str {
        "batter_runs"
    }

    fn remark(&self, delivery: &Delivery) -> Option<String> {
        let runs = delivery.runs;
        match runs.batter {
            0 => None,
            4 | 6 if runs.non_boundary.is_none() => {
                Some(format!("Batter hits, umpire signals Boundary {}.", runs.batter))
            }
            n => Some(format!("Batter runs {}.", n)),
        }
    }
}

/// Umpire's extras signal, e.g. "Umpire signals 1 wide, 4 byes."
pub struct ExtrasRule;

impl RemarkRule for ExtrasRule {
    fn name(&self) -> &'static str {
        "extras"
    }

    fn remark(&self, delivery: &Delivery) -> Option<String> {
        let extras = delivery.extras.as_ref()?;
        if !extras.other.is_empty() {
            log::debug!("Ignoring undocumented extras {:?}", extras.other.keys().collect::<Vec<_>>());
        }

        let entries = extras.entries();
        if entries.is_empty() {
            return None;
        }

        let signals: Vec<String> = entries
            .into_iter()
            .map(|(label, count)| {
                let label = if count == 1 { label.strip_suffix('s').unwrap_or(label) } else { label };
                format!("{} {}", count, label)
            })
            .collect();

        Some(format!("Umpire signals {}.", signals.join(", ")))
    }
}

/// Player review. Wording depends on whether a wicket stands on this ball.
pub struct ReviewRule;

impl RemarkRule for ReviewRule {
    fn name(&self) -> &'static str {
        "review"
    }

    fn remark(&self, delivery: &Delivery) -> Option<String> {
        let review = delivery.review.as_ref()?;
        let upheld = review.decision.is_upheld();

        let text = if !delivery.wickets.is_empty() {
            if upheld {
                format!("{} successfully review.", review.by)
            } else {
                format!("{} unsuccessfully review.", review.by)
            }
        } else if upheld {
            let batter = review.batter.as_deref().unwrap_or(&delivery.batter);
            format!("{} given out, but {} successfully review.", batter, review.by)
        } else {
            format!("{} unsuccessfully review for dismissal.", review.by)
        };

        Some(text)
    }
}

/// Dismissals, with fielders (substitutes marked) when recorded.
pub struct WicketRule;

impl RemarkRule for WicketRule {
    fn name(&self) -> &'static str {
        "wickets"
    }

    fn remark(&self, delivery: &Delivery) -> Option<String> {
        if delivery.wickets.is_empty() {
            return None;
        }

        let dismissals: Vec<String> = delivery
            .wickets
            .iter()
            .map(|wicket| {
                let fielders: Vec<String> = wicket
                    .fielders
                    .iter()
                    .map(|f| {
                        if f.is_substitute() {
                            format!("{} (sub)", f.name)
                        } else {
                            f.name.clone()
                        }
                    })
                    .collect();

                if fielders.is_empty() {
                    format!("{} given out {}.", wicket.player_out, wicket.kind)
                } else {
                    format!("{} given out {} {}.", wicket.player_out, wicket.kind, fielders.join(", "))
                }
            })
            .collect();

        Some(dismissals.join(" "))
    }
}

/// Standard rule chain in sentence order.
pub static STANDARD_RULES: &[&dyn RemarkRule] =
    &[&ReplacementRule, &BatterRunsRule, &ExtrasRule, &ReviewRule, &WicketRule];

/// No runs and nothing else happened.
///
/// Empty wicket and replacement lists count as absent.
pub fn is_no_event(delivery: &Delivery) -> bool {
    delivery.runs.total == 0
        && delivery.wickets.is_empty()
        && !delivery.has_replacements()
        && delivery.review.is_none()
}

/// Remark for a delivery using [`STANDARD_RULES`].
pub fn create_remark(delivery: &Delivery) -> String {
    compose_remark(delivery, STANDARD_RULES)
}

/// Remark for a delivery using a caller-supplied rule chain.
pub fn compose_remark(delivery: &Delivery, rules: &[&dyn RemarkRule]) -> String {
    if is_no_event(delivery) {
        return NO_EVENT_REMARK.to_string();
    }

    let fragments: Vec<String> = rules
        .iter()
        .filter_map(|rule| rule.remark(delivery))
        .map(|fragment| fragment.trim().to_string())
        .filter(|fragment| !fragment.is_empty())
        .collect();

    if fragments.is_empty() {
        log::debug!(
            "No rule described delivery {} to {} ({} total runs)",
            delivery.bowler,
            delivery.batter,
            delivery.runs.total
        );
    }

    fragments.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        ExtraKind, Extras, Fielder, MatchReplacement, Replacements, Review, ReviewDecision, RoleReplacement,
        Runs, Wicket,
    };
    use proptest::prelude::*;

    fn delivery(batter_runs: u32, extra_runs: u32) -> Delivery {
        Delivery::new("JM Anderson", "V Kohli", "RG Sharma", Runs::new(batter_runs, extra_runs))
    }

    fn wicket(kind: &str, player_out: &str, fielders: &[(&str, bool)]) -> Wicket {
        Wicket {
            kind: kind.to_string(),
            player_out: player_out.to_string(),
            fielders: fielders
                .iter()
                .map(|(name, sub)| Fielder { name: name.to_string(), substitute: sub.then_some(true) })
                .collect(),
        }
    }

    fn review(decision: ReviewDecision, batter: Option<&str>) -> Review {
        Review {
            by: "India".to_string(),
            umpire: Some("NJ Llong".to_string()),
            batter: batter.map(str::to_string),
            decision,
            umpires_call: None,
            kind: Some("wicket".to_string()),
        }
    }

    #[test]
    fn test_dot_ball() {
        assert_eq!(create_remark(&delivery(0, 0)), "No incident or score.");
    }

    #[test]
    fn test_six() {
        assert_eq!(create_remark(&delivery(6, 0)), "Batter hits, umpire signals Boundary 6.");
    }

    #[test]
    fn test_run_four_is_not_a_boundary() {
        let mut d = delivery(4, 0);
        d.runs.non_boundary = Some(true);
        assert_eq!(create_remark(&d), "Batter runs 4.");
    }

    #[test]
    fn test_single() {
        assert_eq!(create_remark(&delivery(1, 0)), "Batter runs 1.");
    }

    #[test]
    fn test_single_bye_is_singular() {
        let mut d = delivery(0, 1);
        d.extras = Some(Extras::default().with(ExtraKind::Byes, 1));
        assert_eq!(create_remark(&d), "Umpire signals 1 bye.");
    }

    #[test]
    fn test_multiple_extras_keep_plural_labels() {
        let mut d = delivery(0, 6);
        d.extras = Some(
            Extras::default()
                .with(ExtraKind::Noballs, 1)
                .with(ExtraKind::Legbyes, 4)
                .with(ExtraKind::Penalty, 1),
        );
        assert_eq!(create_remark(&d), "Umpire signals 1 noball, 4 legbyes, 1 penalty.");
    }

    #[test]
    fn test_extras_follow_match_file_order() {
        let mut d = delivery(0, 2);
        d.extras = Some(serde_json::from_str(r#"{"legbyes": 1, "noballs": 1}"#).unwrap());
        assert_eq!(create_remark(&d), "Umpire signals 1 legbye, 1 noball.");
    }

    #[test]
    fn test_explicit_non_boundary_flag_means_run() {
        for flag in [true, false] {
            let mut d = delivery(4, 0);
            d.runs.non_boundary = Some(flag);
            assert_eq!(create_remark(&d), "Batter runs 4.");
        }
    }

    #[test]
    fn test_undocumented_extra_is_omitted() {
        let mut extras = Extras::default().with(ExtraKind::Wides, 2);
        extras.other.insert("overthrows".to_string(), serde_json::json!(3));
        let mut d = delivery(0, 2);
        d.extras = Some(extras);
        assert_eq!(create_remark(&d), "Umpire signals 2 wides.");
    }

    #[test]
    fn test_caught_with_fielder() {
        let mut d = delivery(0, 0);
        d.wickets = vec![wicket("caught", "X", &[("Y", false)])];
        assert_eq!(create_remark(&d), "X given out caught Y.");
    }

    #[test]
    fn test_run_out_with_substitute_fielders() {
        let mut d = delivery(1, 0);
        d.wickets = vec![wicket("run out", "RG Sharma", &[("JM Bairstow", false), ("SW Billings", true)])];
        assert_eq!(
            create_remark(&d),
            "Batter runs 1. RG Sharma given out run out JM Bairstow, SW Billings (sub)."
        );
    }

    #[test]
    fn test_bowled_without_fielders() {
        let mut d = delivery(0, 0);
        d.wickets = vec![wicket("bowled", "V Kohli", &[])];
        assert_eq!(create_remark(&d), "V Kohli given out bowled.");
    }

    #[test]
    fn test_review_with_wicket() {
        let mut d = delivery(0, 0);
        d.wickets = vec![wicket("lbw", "V Kohli", &[])];
        d.review = Some(review(ReviewDecision::StruckDown, Some("V Kohli")));
        assert_eq!(create_remark(&d), "India unsuccessfully review. V Kohli given out lbw.");

        d.review = Some(review(ReviewDecision::Upheld, Some("V Kohli")));
        assert_eq!(create_remark(&d), "India successfully review. V Kohli given out lbw.");
    }

    #[test]
    fn test_review_without_wicket() {
        let mut d = delivery(0, 0);
        d.review = Some(review(ReviewDecision::Upheld, Some("RG Sharma")));
        assert_eq!(create_remark(&d), "RG Sharma given out, but India successfully review.");

        d.review = Some(review(ReviewDecision::Upheld, None));
        assert_eq!(create_remark(&d), "V Kohli given out, but India successfully review.");

        d.review = Some(review(ReviewDecision::StruckDown, None));
        assert_eq!(create_remark(&d), "India unsuccessfully review for dismissal.");
    }

    #[test]
    fn test_replacements_lead_the_remark() {
        let mut d = delivery(2, 0);
        d.replacements = Some(Replacements {
            match_: vec![MatchReplacement {
                player_in: "M Labuschagne".to_string(),
                player_out: "SPD Smith".to_string(),
                reason: "concussion_substitute".to_string(),
                team: Some("Australia".to_string()),
            }],
            role: vec![RoleReplacement {
                player_in: "PJ Cummins".to_string(),
                player_out: Some("MA Starc".to_string()),
                reason: "injury".to_string(),
                role: "bowler".to_string(),
            }],
        });
        assert_eq!(
            create_remark(&d),
            "PJ Cummins replaces bowler MA Starc. Injury. \
             M Labuschagne replaces SPD Smith. Concussion Substitute. Batter runs 2."
        );
    }

    #[test]
    fn test_role_replacement_without_outgoing_player() {
        let mut d = delivery(0, 0);
        d.replacements = Some(Replacements {
            match_: vec![],
            role: vec![RoleReplacement {
                player_in: "JP Faulkner".to_string(),
                player_out: None,
                reason: "excluded".to_string(),
                role: "bowler".to_string(),
            }],
        });
        assert_eq!(create_remark(&d), "JP Faulkner replaces bowler. Excluded.");
    }

    #[test]
    fn test_empty_containers_count_as_no_event() {
        let mut d = delivery(0, 0);
        d.replacements = Some(Replacements::default());
        d.wickets = vec![];
        assert!(is_no_event(&d));
        assert_eq!(create_remark(&d), NO_EVENT_REMARK);
    }

    #[test]
    fn test_custom_rule_chain() {
        let mut d = delivery(4, 1);
        d.extras = Some(Extras::default().with(ExtraKind::Wides, 1));
        assert_eq!(compose_remark(&d, &[&ExtrasRule]), "Umpire signals 1 wide.");
        let names: Vec<&str> = STANDARD_RULES.iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["replacements", "batter_runs", "extras", "review", "wickets"]);
    }

    fn arb_delivery(with_replacements: bool) -> impl Strategy<Value = Delivery> {
        let extras = prop::option::of((0u32..3, 0u32..3, 0u32..5).prop_map(|(w, nb, b)| {
            [(ExtraKind::Wides, w), (ExtraKind::Noballs, nb), (ExtraKind::Byes, b)]
                .into_iter()
                .filter(|&(_, count)| count > 0)
                .fold(Extras::default(), |extras, (kind, count)| extras.with(kind, count))
        }));
        let wickets = prop::collection::vec(
            ("[a-z]{3,8}", "[A-Z][a-z]{2,6}").prop_map(|(kind, out)| Wicket {
                kind,
                player_out: out,
                fielders: vec![],
            }),
            0..2,
        );
        let review = prop::option::of(any::<bool>().prop_map(|upheld| Review {
            by: "England".to_string(),
            umpire: None,
            batter: None,
            decision: if upheld { ReviewDecision::Upheld } else { ReviewDecision::StruckDown },
            umpires_call: None,
            kind: None,
        }));
        let replacement = if with_replacements {
            prop::option::of(Just(Replacements {
                match_: vec![MatchReplacement {
                    player_in: "Sub".to_string(),
                    player_out: "Starter".to_string(),
                    reason: "national_callup".to_string(),
                    team: None,
                }],
                role: vec![],
            }))
            .boxed()
        } else {
            Just(None::<Replacements>).boxed()
        };

        (0u32..7, prop::option::of(any::<bool>()), extras, wickets, review, replacement).prop_map(
            |(batter, non_boundary, extras, wickets, review, replacements)| {
                let extra_runs = extras.as_ref().map_or(0, Extras::total);
                let mut d = Delivery::new("A", "B", "C", Runs::new(batter, extra_runs));
                d.runs.non_boundary = non_boundary;
                d.extras = extras;
                d.wickets = wickets;
                d.review = review;
                d.replacements = replacements;
                d
            },
        )
    }

    proptest! {
        #[test]
        fn prop_no_event_is_fixed_sentence(d in arb_delivery(true)) {
            let remark = create_remark(&d);
            if is_no_event(&d) {
                prop_assert_eq!(remark, NO_EVENT_REMARK);
            } else {
                prop_assert_ne!(remark, NO_EVENT_REMARK);
            }
        }

        #[test]
        fn prop_boundary_prefix(d in arb_delivery(false)) {
            let remark = create_remark(&d);
            if matches!(d.runs.batter, 4 | 6) && d.runs.non_boundary.is_none() {
                let prefix = format!("Batter hits, umpire signals Boundary {}.", d.runs.batter);
                prop_assert!(remark.starts_with(&prefix), "{}", remark);
            }
        }

        #[test]
        fn prop_segment_order(d in arb_delivery(true)) {
            let remark = create_remark(&d);
            if let Some(fragment) = ReplacementRule.remark(&d) {
                prop_assert!(remark.starts_with(&fragment), "{}", remark);
            }
            if let Some(fragment) = WicketRule.remark(&d) {
                prop_assert!(remark.ends_with(&fragment), "{}", remark);
            }
        }

        #[test]
        fn prop_remark_is_trimmed(d in arb_delivery(true)) {
            let remark = create_remark(&d);
            prop_assert_eq!(remark.trim(), remark.as_str());
        }
    }
}
