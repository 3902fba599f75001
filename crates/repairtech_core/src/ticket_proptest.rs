#[cfg(test)]
mod tests {
    use crate::ticket::TicketNumber;
    use once_cell::sync::Lazy;
    use proptest::prelude::*;
    use regex::Regex;

    static CANONICAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^RT-\d{8}-\d{4}$").unwrap());

    proptest! {
        // Every string matching the contract, whatever its case, is
        // accepted and normalized to the canonical uppercase form.
        #[test]
        fn accepts_all_well_formed_tickets(
            prefix in "[Rr][Tt]",
            date in "[0-9]{8}",
            seq in "[0-9]{4}",
        ) {
            let candidate = format!("{prefix}-{date}-{seq}");
            let ticket = TicketNumber::parse(&candidate).expect("well-formed ticket rejected");
            prop_assert_eq!(ticket.as_str(), format!("RT-{date}-{seq}"));
        }

        // Whitespace padding never changes the outcome.
        #[test]
        fn whitespace_is_stripped_before_validation(
            date in "[0-9]{8}",
            seq in "[0-9]{4}",
            pad_left in "[ \t]{0,3}",
            pad_right in "[ \t]{0,3}",
        ) {
            let candidate = format!("{pad_left}rt-{date}-{seq}{pad_right}");
            let ticket = TicketNumber::parse(&candidate).unwrap();
            prop_assert_eq!(ticket.as_str(), format!("RT-{date}-{seq}"));
        }

        // Arbitrary candidate strings are accepted exactly when their
        // normalized form matches the contract; rejection happens before
        // any storage call could be made.
        #[test]
        fn accepts_iff_normalized_form_matches(candidate in "[A-Za-z0-9 -]{0,24}") {
            let normalized = candidate.trim().to_uppercase();
            let parsed = TicketNumber::parse(&candidate);
            prop_assert_eq!(parsed.is_ok(), CANONICAL.is_match(&normalized));
        }
    }
}
