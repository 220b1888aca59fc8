//! Turn report rendering
//!
//! Builds the game-master summary broadcast at the end of a resolved
//! turn: the income breakdown, the maintenance and over-limit lines,
//! and whatever the shortfall remediation did.

use suzerain_domain::service::turn::{Remediation, TurnOutcome};

/// Render the end-of-turn summary for one faction
pub fn render_turn_report(faction_name: &str, outcome: &TurnOutcome) -> String {
    let income = &outcome.income;
    let mut lines = vec![
        format!("{} - turn resolved.", faction_name),
        format!("Income this round: {}.", income.net()),
        format!("From assets: {}.", income.asset_income),
        format!("Maintenance -{}.", income.maintenance_total),
        format!(
            "Cost from assets over rating -{}.",
            income.cost_from_assets_over
        ),
    ];

    if income.net() < 0 {
        lines.push("Losing credits this turn.".to_string());
    }

    match &outcome.remediation {
        Remediation::None => {}
        Remediation::ForcedDisable { disabled, refunded } => {
            lines.push(format!(
                "Out of money and unable to pay for all assets: \
                 marked {} maintained asset(s) unusable, refunding {} upkeep.",
                disabled.len(),
                refunded
            ));
        }
        Remediation::ManualRequired { shortfall } => {
            lines.push(format!(
                "Out of money and unable to pay for all assets: \
                 mark assets unusable to cover credits: {}.",
                shortfall
            ));
        }
    }

    lines.push(format!("Credits committed: {}.", outcome.credits));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use suzerain_domain::model::asset::AssetId;
    use suzerain_domain::service::turn::IncomeBreakdown;

    fn income(net_parts: (i32, i32, u32, i32)) -> IncomeBreakdown {
        let (wealth, asset, maintenance, over) = net_parts;
        IncomeBreakdown {
            wealth_income: wealth,
            cunning_income: 0,
            force_income: 0,
            asset_income: asset,
            maintenance_total: maintenance,
            cost_from_assets_over: over,
        }
    }

    #[test]
    fn test_plain_report() {
        let outcome = TurnOutcome {
            income: income((2, 0, 0, 0)),
            credits: 12,
            remediation: Remediation::None,
        };
        let report = render_turn_report("Harmonious Vox", &outcome);

        assert!(report.contains("Income this round: 2."));
        assert!(report.contains("Credits committed: 12."));
        assert!(!report.contains("Losing credits"));
    }

    #[test]
    fn test_negative_income_warning() {
        let outcome = TurnOutcome {
            income: income((0, 0, 5, -1)),
            credits: -4,
            remediation: Remediation::ManualRequired { shortfall: -4 },
        };
        let report = render_turn_report("Harmonious Vox", &outcome);

        assert!(report.contains("Losing credits this turn."));
        assert!(report.contains("mark assets unusable to cover credits: -4."));
    }

    #[test]
    fn test_forced_disable_report() {
        let outcome = TurnOutcome {
            income: income((0, -5, 2, -1)),
            credits: -4,
            remediation: Remediation::ForcedDisable {
                disabled: vec![AssetId::new("a-001")],
                refunded: 2,
            },
        };
        let report = render_turn_report("Harmonious Vox", &outcome);

        assert!(report.contains("marked 1 maintained asset(s) unusable"));
        assert!(report.contains("refunding 2 upkeep"));
    }
}
