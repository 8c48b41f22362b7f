//! Directory planning for generated projects.

use crate::config::ProjectConfig;
use indexmap::IndexSet;
use std::path::{Path, PathBuf};

const BASE: &[&str] = &[
    "src/styles",
    "src/lib",
    "src/hooks",
    "src/utils",
    "src/redux",
    "src/redux/slices",
    "src/components",
    ".vscode",
];

const EXAMPLES: &[&str] = &[
    "src/app/(public)",
    "src/app/(private)",
    "src/components/ui",
    "src/components/ui/Button",
    "src/components/ui/CartWrapper",
    "src/components/ui/ModalWrapper",
    "src/components/ui/ErrorMessage",
    "src/components/ui/MaskedInput",
    "src/components/layout",
    "src/components/layout/header",
    "src/components/layout/footer",
];

const STYLED_EXAMPLES: &[&str] = &["src/components/ui/TypeWriter"];

const TESTS: &[&str] = &["__tests__", "src/__tests__"];

const BACKEND: &[&str] = &[
    "prisma",
    "src/app/api",
    "src/app/api/auth/login",
    "src/app/api/auth/logout",
    "src/app/api/auth/verify",
    "src/app/api/auth/register",
    "src/app/api/users",
    "src/app/api/users/[id]",
    "src/app/api/users/[id]/address",
    "src/app/api/users/[id]/address/default",
    "src/app/api/users/[id]/address/[addressId]",
    "src/app/api/users/[id]/address/[addressId]/default",
    "src/app/api/users/message",
    "src/app/api/users/message/unread",
    "src/app/api/users/message/[id]",
    "src/app/api/users/message/[id]/reply",
    "src/app/api/products",
    "src/app/api/products/[id]",
    "src/app/api/categories",
    "src/app/api/categories/[id]",
    "src/app/api/cart",
    "src/app/api/cart/[itemId]",
    "src/app/api/cart/clear",
    "src/app/api/orders",
    "src/app/api/orders/[id]",
    "src/app/api/shipping",
    "src/app/api/paymentintent",
    "src/app/api/webhooks",
    "src/types",
    "emails",
];

/// Returns the directories (relative to the project root) that must exist before
/// files are written.
///
/// The list has no duplicates and every directory comes after its parent, so
/// creating them one by one without recursive creation always succeeds.
pub fn plan(config: &ProjectConfig) -> Vec<PathBuf> {
    let mut dirs = IndexSet::new();
    push_all(&mut dirs, BASE);

    if config.include_examples() {
        push_all(&mut dirs, EXAMPLES);
        if config.uses_styled_components() {
            push_all(&mut dirs, STYLED_EXAMPLES);
        }
    }
    if config.install_tests() {
        push_all(&mut dirs, TESTS);
    }
    if config.install_backend() {
        push_all(&mut dirs, BACKEND);
    }

    dirs.into_iter().collect()
}

fn push_all(dirs: &mut IndexSet<PathBuf>, paths: &[&str]) {
    for path in paths {
        push_with_parents(dirs, Path::new(path));
    }
}

fn push_with_parents(dirs: &mut IndexSet<PathBuf>, path: &Path) {
    if path.as_os_str().is_empty() || dirs.contains(path) {
        return;
    }
    if let Some(parent) = path.parent() {
        push_with_parents(dirs, parent);
    }
    dirs.insert(path.to_path_buf());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_with_parents_orders_ancestors_first() {
        let mut dirs = IndexSet::new();
        push_with_parents(&mut dirs, Path::new("a/b/c"));
        push_with_parents(&mut dirs, Path::new("a/d"));

        let dirs: Vec<_> = dirs.into_iter().collect();
        assert_eq!(
            dirs,
            vec![
                PathBuf::from("a"),
                PathBuf::from("a/b"),
                PathBuf::from("a/b/c"),
                PathBuf::from("a/d"),
            ]
        );
    }
}
