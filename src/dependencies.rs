//! npm dependency selection.
//! Production and development package lists are derived from the configuration by
//! additive rules applied in a fixed order, so identical configurations always produce
//! identical install commands.

use crate::config::{ProjectConfig, Styling};
use indexmap::IndexSet;

const BASE_PROD: &[&str] = &[
    "react-redux",
    "@reduxjs/toolkit",
    "immer",
    "redux",
    "clsx",
    "class-variance-authority",
    "lucide-react",
];

const BASE_DEV: &[&str] = &["eslint-plugin-prettier", "prettier", "eslint-config-prettier"];

const STYLED_PROD: &[&str] = &["styled-components"];
const STYLED_DEV: &[&str] = &["@types/styled-components"];

const EXTRA_PROD: &[&str] = &[
    "formik",
    "yup",
    "imask",
    "react-imask",
    "react-hot-toast",
    "react-loading-skeleton",
    "framer-motion",
    "react-icons",
];

const BACKEND_PROD: &[&str] = &[
    "prisma",
    "@prisma/client",
    "jose",
    "bcryptjs",
    "cookie",
    "next-cloudinary",
    "resend",
    "react-email",
    "@react-email/components",
    "@react-email/render",
    "@stripe/react-stripe-js",
    "@stripe/stripe-js",
    "stripe",
];
const BACKEND_DEV: &[&str] =
    &["@types/bcryptjs", "@types/cookie", "@types/jsonwebtoken", "@types/react-icons"];

const TEST_DEV: &[&str] = &[
    "jest",
    "@testing-library/react",
    "@testing-library/jest-dom",
    "@testing-library/user-event",
    "jest-environment-jsdom",
];

/// Production and development packages, in insertion order and without duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Dependencies {
    pub prod: IndexSet<&'static str>,
    pub dev: IndexSet<&'static str>,
}

impl Dependencies {
    fn add(&mut self, prod: &[&'static str], dev: &[&'static str]) {
        self.prod.extend(prod.iter().copied());
        self.dev.extend(dev.iter().copied());
    }
}

/// Selects the packages to install for `config`.
///
/// Rules are applied in this order: styling runtime, extra bundle, backend
/// bundle, test framework. Adding a package that is already present keeps its
/// original position.
pub fn select(config: &ProjectConfig) -> Dependencies {
    let mut deps = Dependencies::default();
    deps.add(BASE_PROD, BASE_DEV);

    if config.styling() == Styling::StyledComponents {
        deps.add(STYLED_PROD, STYLED_DEV);
    }
    if config.install_extra_dependencies() {
        deps.add(EXTRA_PROD, &[]);
    }
    if config.install_backend() {
        deps.add(BACKEND_PROD, BACKEND_DEV);
    }
    if config.install_tests() {
        deps.add(&[], TEST_DEV);
    }

    deps
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_keeps_first_position() {
        let mut deps = Dependencies::default();
        deps.add(&["a", "b"], &[]);
        deps.add(&["b", "c", "a"], &[]);
        assert_eq!(deps.prod.iter().copied().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_bundles_are_duplicate_free() {
        for bundle in [BASE_PROD, BASE_DEV, EXTRA_PROD, BACKEND_PROD, BACKEND_DEV, TEST_DEV] {
            let unique: IndexSet<_> = bundle.iter().collect();
            assert_eq!(unique.len(), bundle.len());
        }
    }
}
