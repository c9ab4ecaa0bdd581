//! Rule evaluation — pure logic, no lookups beyond the static catalog.

use super::report::ValidationReport;
use crate::intake::TicketDraft;
use crate::parse;

/// Canonical part names and the free-text aliases that map to them.
const PART_CATALOG: &[(&str, &[&str])] = &[
    ("3m_DAC_cable", &["dac cable", "cable", "3m dac"]),
    ("16pin_power", &["16-pin power", "power cable", "16pin"]),
    ("SFP_transceiver", &["sfp", "transceiver"]),
];

/// Parts known to be exhausted, with the substitution to offer.
const OUT_OF_STOCK: &[(&str, &[&str], &str)] =
    &[("2m_DAC_cable", &["2m dac", "2m dac cable"], "3m_DAC_cable")];

/// Evaluates every rule against a draft.
pub fn evaluate(draft: &TicketDraft) -> ValidationReport {
    let mut warnings = Vec::new();
    let mut suggestions = Vec::new();

    check_location(draft, &mut warnings);
    check_ports(draft, &mut warnings);
    check_assignee(draft, &mut warnings);
    check_parts(draft, &mut warnings, &mut suggestions);

    ValidationReport::from_findings(warnings, suggestions)
}

/// Pod and rack fields must carry a recognizable number, either with the
/// designator token ("Pod 7") or bare ("7", "42U").
fn check_location(draft: &TicketDraft, warnings: &mut Vec<String>) {
    if let Some(pod) = draft.pod.as_deref() {
        if parse::pod_number(pod).is_none() && parse::leading_number(pod).is_none() {
            warnings.push(format!("pod designator '{pod}' has no pod number"));
        }
    }
    if let Some(rack) = draft.rack.as_deref() {
        if parse::rack_number(rack).is_none() && parse::leading_number(rack).is_none() {
            warnings.push(format!("rack designator '{rack}' has no rack number"));
        }
    }
}

/// Switch ports are numeric tokens ("49", "50").
fn check_ports(draft: &TicketDraft, warnings: &mut Vec<String>) {
    let Some(ports) = draft.ports.as_deref() else {
        return;
    };
    for port in ports {
        if port.trim().parse::<u32>().is_err() {
            warnings.push(format!("port '{port}' is not a port number"));
        }
    }
}

fn check_assignee(draft: &TicketDraft, warnings: &mut Vec<String>) {
    if let Some(email) = draft.assign_to_email.as_deref() {
        if !parse::email_like(email) {
            warnings.push(format!("assignee '{email}' is not an email address"));
        }
    }
}

/// Looks each requested part up in the static catalog.
///
/// Exhausted parts warn and suggest the substitution; names the catalog
/// does not know produce an advisory suggestion only.
fn check_parts(draft: &TicketDraft, warnings: &mut Vec<String>, suggestions: &mut Vec<String>) {
    let Some(parts) = draft.required_parts.as_deref() else {
        return;
    };

    for part in parts {
        if let Some(substitute) = out_of_stock_substitute(part) {
            warnings.push(format!("'{part}' is out of stock"));
            suggestions.push(format!("use {substitute} instead of '{part}'"));
        } else if catalog_name(part).is_none() {
            suggestions.push(format!("'{part}' is not a cataloged part name"));
        }
    }
}

/// Resolves a free-text part name to its canonical catalog entry.
fn catalog_name(part: &str) -> Option<&'static str> {
    let wanted = normalize(part);
    PART_CATALOG
        .iter()
        .find(|(canonical, aliases)| {
            normalize(canonical) == wanted || aliases.iter().any(|alias| normalize(alias) == wanted)
        })
        .map(|(canonical, _)| *canonical)
}

fn out_of_stock_substitute(part: &str) -> Option<&'static str> {
    let wanted = normalize(part);
    OUT_OF_STOCK
        .iter()
        .find(|(canonical, aliases, _)| {
            normalize(canonical) == wanted || aliases.iter().any(|alias| normalize(alias) == wanted)
        })
        .map(|(_, _, substitute)| *substitute)
}

/// Lowercases and folds `_`/`-` into spaces so "3m_DAC_cable",
/// "3m-dac-cable", and "3M DAC Cable" all compare equal.
fn normalize(name: &str) -> String {
    name.to_ascii_lowercase()
        .replace(['_', '-'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_draft() -> TicketDraft {
        TicketDraft {
            device: Some("H100".into()),
            pod: Some("Pod 7".into()),
            rack: Some("42U".into()),
            switch: Some("switch-7b".into()),
            ports: Some(vec!["49".into(), "50".into()]),
            required_parts: Some(vec!["3m_DAC_cable".into(), "16pin_power".into()]),
            action: Some(crate::intake::Action::Install),
            description: Some("Install new H100 GPU unit".into()),
            assign_to_email: Some("tech@example.com".into()),
        }
    }

    #[test]
    fn test_well_formed_draft_is_valid() {
        let report = evaluate(&full_draft());
        assert!(report.is_valid, "unexpected warnings: {:?}", report.warnings);
        assert!(report.suggestions.is_empty());
    }

    #[test]
    fn test_empty_draft_is_valid() {
        // Presence is intake's concern; nothing present means nothing to flag.
        assert!(evaluate(&TicketDraft::default()).is_valid);
    }

    #[test]
    fn test_bad_pod_designator() {
        let mut draft = full_draft();
        draft.pod = Some("east hall".into());
        let report = evaluate(&draft);

        assert!(!report.is_valid);
        assert!(report.warnings[0].contains("east hall"));
    }

    #[test]
    fn test_bare_numbers_accepted() {
        let mut draft = full_draft();
        draft.pod = Some("7".into());
        draft.rack = Some("42U".into());
        assert!(evaluate(&draft).is_valid);
    }

    #[test]
    fn test_non_numeric_port() {
        let mut draft = full_draft();
        draft.ports = Some(vec!["49".into(), "left one".into()]);
        let report = evaluate(&draft);

        assert!(!report.is_valid);
        assert!(report.warnings[0].contains("left one"));
    }

    #[test]
    fn test_malformed_assignee() {
        let mut draft = full_draft();
        draft.assign_to_email = Some("not-an-email".into());
        assert!(!evaluate(&draft).is_valid);
    }

    #[test]
    fn test_out_of_stock_part_warns_and_substitutes() {
        let mut draft = full_draft();
        draft.required_parts = Some(vec!["2m_DAC_cable".into()]);
        let report = evaluate(&draft);

        assert!(!report.is_valid);
        assert!(report.warnings[0].contains("out of stock"));
        assert!(report.suggestions[0].contains("3m_DAC_cable"));
    }

    #[test]
    fn test_part_aliases_resolve() {
        let mut draft = full_draft();
        draft.required_parts = Some(vec!["DAC cable".into(), "16-pin power".into(), "SFP".into()]);
        let report = evaluate(&draft);

        assert!(report.is_valid);
        assert!(report.suggestions.is_empty());
    }

    #[test]
    fn test_unknown_part_is_advisory_only() {
        let mut draft = full_draft();
        draft.required_parts = Some(vec!["flux capacitor".into()]);
        let report = evaluate(&draft);

        assert!(report.is_valid);
        assert!(report.suggestions[0].contains("flux capacitor"));
    }
}
