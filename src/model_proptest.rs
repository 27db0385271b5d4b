//! Property-based tests for repository identifier parsing.
//!
//! These tests use proptest to generate random inputs and verify that
//! invariants hold for all possible inputs.

#[cfg(test)]
mod proptest_tests {
    use crate::model::RepoId;
    use proptest::prelude::*;

    proptest! {
        /// Property: a well-formed owner/name survives parse then display
        #[test]
        fn repo_id_display_matches_input(
            owner in "[a-zA-Z0-9][a-zA-Z0-9-]{0,20}",
            name in "[a-zA-Z0-9._-]{1,30}",
        ) {
            let input = format!("{owner}/{name}");
            let repo: RepoId = input.parse().unwrap();
            prop_assert_eq!(repo.owner, owner);
            prop_assert_eq!(repo.name, name);
        }

        /// Property: input without a separator never parses
        #[test]
        fn repo_id_without_slash_is_rejected(input in "[^/]*") {
            prop_assert!(input.parse::<RepoId>().is_err());
        }

        /// Property: more than one separator never parses
        #[test]
        fn repo_id_with_nested_path_is_rejected(
            a in "[a-z]{1,8}",
            b in "[a-z]{1,8}",
            c in "[a-z]{1,8}",
        ) {
            let input = format!("{a}/{b}/{c}");
            prop_assert!(input.parse::<RepoId>().is_err());
        }
    }
}
