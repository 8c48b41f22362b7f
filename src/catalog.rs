//! Built-in template catalog.
//! Every generated file is described by a [`TemplateDescriptor`]: where it goes, when it
//! applies, and the embedded MiniJinja source it is rendered from. Variants of the same
//! file (Styled Components vs Tailwind, the store flavours) share a path and have
//! mutually exclusive predicates.

use std::sync::LazyLock;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::config::ProjectConfig;
use crate::error::Result;
use crate::renderer::TemplateRenderer;

/// Paths that belong to the test setup of a generated project.
const TEST_PATTERNS: &[&str] =
    &["__tests__/**", "**/__tests__/**", "**/*.test.*", "jest.config.*", "jest.setup.*"];

static TEST_PATHS: LazyLock<GlobSet> = LazyLock::new(|| {
    let mut builder = GlobSetBuilder::new();
    for pattern in TEST_PATTERNS {
        builder.add(Glob::new(pattern).expect("test path pattern is valid"));
    }
    builder.build().expect("test path patterns compile")
});

/// Returns true when `relative_path` is part of the generated test setup.
pub fn is_test_path(relative_path: &str) -> bool {
    TEST_PATHS.is_match(relative_path)
}

/// One file the generator can produce.
#[derive(Debug, Clone, Copy)]
pub struct TemplateDescriptor {
    /// Target path relative to the project root, `/`-separated
    pub relative_path: &'static str,
    /// Decides whether the file takes part in a run
    pub applies: fn(&ProjectConfig) -> bool,
    /// MiniJinja source rendered with [`ProjectConfig::template_context`]
    pub source: &'static str,
}

impl TemplateDescriptor {
    pub const fn new(
        relative_path: &'static str,
        applies: fn(&ProjectConfig) -> bool,
        source: &'static str,
    ) -> Self {
        Self { relative_path, applies, source }
    }

    pub fn is_applicable(&self, config: &ProjectConfig) -> bool {
        (self.applies)(config)
    }

    pub fn render(
        &self,
        renderer: &dyn TemplateRenderer,
        config: &ProjectConfig,
    ) -> Result<String> {
        renderer.render(self.source, &config.template_context())
    }
}

/// Applicability predicates shared by the built-in descriptors.
mod when {
    use crate::config::ProjectConfig;

    pub fn always(_: &ProjectConfig) -> bool {
        true
    }

    pub fn styled(c: &ProjectConfig) -> bool {
        c.uses_styled_components()
    }

    pub fn tailwind(c: &ProjectConfig) -> bool {
        !c.uses_styled_components()
    }

    pub fn examples(c: &ProjectConfig) -> bool {
        c.include_examples()
    }

    pub fn styled_examples(c: &ProjectConfig) -> bool {
        c.uses_styled_components() && c.include_examples()
    }

    pub fn tailwind_examples(c: &ProjectConfig) -> bool {
        !c.uses_styled_components() && c.include_examples()
    }

    pub fn examples_with_extras(c: &ProjectConfig) -> bool {
        c.include_examples() && c.install_extra_dependencies()
    }

    pub fn styled_examples_with_extras(c: &ProjectConfig) -> bool {
        styled_examples(c) && c.install_extra_dependencies()
    }

    pub fn tests(c: &ProjectConfig) -> bool {
        c.install_tests()
    }

    pub fn tests_with_examples(c: &ProjectConfig) -> bool {
        c.install_tests() && c.include_examples()
    }

    pub fn backend(c: &ProjectConfig) -> bool {
        c.install_backend()
    }

    // The three store flavours: API-backed, auth slice for tests, empty.
    pub fn api_store(c: &ProjectConfig) -> bool {
        c.install_backend()
    }

    pub fn auth_store(c: &ProjectConfig) -> bool {
        c.install_tests() && !c.install_backend()
    }

    pub fn plain_store(c: &ProjectConfig) -> bool {
        !c.install_tests() && !c.install_backend()
    }
}

macro_rules! template {
    ($path:literal, $when:path, $source:literal) => {
        TemplateDescriptor::new($path, $when, include_str!(concat!("templates/", $source)))
    };
}

/// Static, enumerable set of templates.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<TemplateDescriptor>,
}

impl Catalog {
    pub fn new(entries: Vec<TemplateDescriptor>) -> Self {
        Self { entries }
    }

    /// The templates shipped with rnt.
    #[rustfmt::skip]
    pub fn builtin() -> Self {
        Self::new(vec![
            // Tooling configuration
            template!("next.config.mjs", when::always, "config/next.config.mjs.j2"),
            template!(".vscode/settings.json", when::always, "config/vscode-settings.json.j2"),
            template!(".prettierrc.json", when::always, "config/prettierrc.json.j2"),
            template!(".editorconfig", when::always, "config/editorconfig.j2"),
            // Base code
            template!("src/hooks/useAppDispatch.ts", when::always, "base/useAppDispatch.ts.j2"),
            template!("src/utils/colorUtils.ts", when::always, "base/colorUtils.ts.j2"),
            template!("src/components/providers.tsx", when::always, "base/providers.tsx.j2"),
            template!("src/redux/store.ts", when::api_store, "redux/store-api.ts.j2"),
            template!("src/redux/store.ts", when::auth_store, "redux/store-auth.ts.j2"),
            template!("src/redux/store.ts", when::plain_store, "redux/store.ts.j2"),
            template!("src/redux/slices/authSlice.ts", when::auth_store, "redux/authSlice.ts.j2"),
            template!("src/redux/slices/apiSlice.ts", when::backend, "redux/apiSlice.ts.j2"),
            // Styling
            template!("types.d.ts", when::styled, "styled/types.d.ts.j2"),
            template!("src/styles/theme.ts", when::styled, "styled/theme.ts.j2"),
            template!("src/styles/globalStyles.tsx", when::styled, "styled/globalStyles.tsx.j2"),
            template!("src/styles/animations.tsx", when::styled, "styled/animations.tsx.j2"),
            template!("src/lib/styled-components-registry.tsx", when::styled, "styled/registry.tsx.j2"),
            template!("src/app/layout.tsx", when::styled, "styled/layout.tsx.j2"),
            template!("src/app/layout.tsx", when::tailwind, "tailwind/layout.tsx.j2"),
            template!("src/app/globals.css", when::tailwind, "tailwind/globals.css.j2"),
            // Example pages and components
            template!("src/app/page.tsx", when::styled_examples, "styled/page.tsx.j2"),
            template!("src/app/HomeStyles.ts", when::styled_examples, "styled/HomeStyles.ts.j2"),
            template!("src/app/page.tsx", when::tailwind_examples, "tailwind/page.tsx.j2"),
            template!("src/app/(public)/layout.tsx", when::examples, "examples/public-layout.tsx.j2"),
            template!("src/app/(public)/loading.tsx", when::examples, "examples/loading.tsx.j2"),
            template!("src/app/(public)/not-found.tsx", when::examples, "examples/not-found.tsx.j2"),
            template!("src/app/(private)/layout.tsx", when::examples, "examples/private-layout.tsx.j2"),
            template!("src/components/layout/header/Header.tsx", when::styled_examples, "styled/Header.tsx.j2"),
            template!("src/components/layout/header/HeaderStyles.ts", when::styled_examples, "styled/HeaderStyles.ts.j2"),
            template!("src/components/layout/header/Header.tsx", when::tailwind_examples, "tailwind/Header.tsx.j2"),
            template!("src/components/layout/footer/Footer.tsx", when::styled_examples, "styled/Footer.tsx.j2"),
            template!("src/components/layout/footer/FooterStyles.ts", when::styled_examples, "styled/FooterStyles.ts.j2"),
            template!("src/components/layout/footer/Footer.tsx", when::tailwind_examples, "tailwind/Footer.tsx.j2"),
            template!("src/components/ui/Button/Button.tsx", when::examples, "examples/Button.tsx.j2"),
            template!("src/components/ui/Button/ButtonStyles.ts", when::styled_examples, "examples/ButtonStyles.ts.j2"),
            template!("src/components/ui/CartWrapper/CartWrapper.tsx", when::examples, "examples/CartWrapper.tsx.j2"),
            template!("src/components/ui/ErrorMessage/ErrorMessage.tsx", when::examples, "examples/ErrorMessage.tsx.j2"),
            template!("src/components/ui/ModalWrapper/ModalWrapper.tsx", when::examples, "examples/ModalWrapper.tsx.j2"),
            template!("src/components/ui/MaskedInput/MaskedInput.tsx", when::examples_with_extras, "examples/MaskedInput.tsx.j2"),
            template!("src/components/ui/MaskedInput/MaskedInputStyles.ts", when::styled_examples_with_extras, "examples/MaskedInputStyles.ts.j2"),
            template!("src/components/ui/TypeWriter/TypeWriter.tsx", when::styled_examples, "examples/TypeWriter.tsx.j2"),
            // Tests
            template!("jest.config.js", when::tests, "tests/jest.config.js.j2"),
            template!("jest.setup.js", when::tests, "tests/jest.setup.js.j2"),
            template!("src/__tests__/store.test.ts", when::tests, "tests/store.test.ts.j2"),
            template!("__tests__/page.test.tsx", when::tests_with_examples, "tests/page.test.tsx.j2"),
            // Backend
            template!("prisma/schema.prisma", when::backend, "backend/schema.prisma.j2"),
            template!(".env.example", when::backend, "backend/env.example.j2"),
            template!("src/utils/prisma.ts", when::backend, "backend/prisma.ts.j2"),
            template!("src/utils/auth.ts", when::backend, "backend/auth.ts.j2"),
            template!("src/middleware.ts", when::backend, "backend/middleware.ts.j2"),
            template!("src/app/api/auth/login/route.ts", when::backend, "backend/login.route.ts.j2"),
            template!("src/app/api/auth/logout/route.ts", when::backend, "backend/logout.route.ts.j2"),
            template!("src/app/api/auth/register/route.ts", when::backend, "backend/register.route.ts.j2"),
            template!("src/app/api/auth/verify/route.ts", when::backend, "backend/verify.route.ts.j2"),
            template!("src/app/api/users/route.ts", when::backend, "backend/users.route.ts.j2"),
            template!("src/app/api/users/[id]/route.ts", when::backend, "backend/user.route.ts.j2"),
            template!("src/types/api.ts", when::backend, "backend/api-types.ts.j2"),
            template!("src/hooks/useFilteredProducts.ts", when::backend, "backend/useFilteredProducts.ts.j2"),
            template!("src/hooks/useFilteredOrders.ts", when::backend, "backend/useFilteredOrders.ts.j2"),
            // Shop API
            template!("src/app/api/products/route.ts", when::backend, "backend/shop/products.route.ts.j2"),
            template!("src/app/api/products/[id]/route.ts", when::backend, "backend/shop/product.route.ts.j2"),
            template!("src/app/api/categories/route.ts", when::backend, "backend/shop/categories.route.ts.j2"),
            template!("src/app/api/categories/[id]/route.ts", when::backend, "backend/shop/category.route.ts.j2"),
            template!("src/app/api/cart/route.ts", when::backend, "backend/shop/cart.route.ts.j2"),
            template!("src/app/api/cart/[itemId]/route.ts", when::backend, "backend/shop/cart-item.route.ts.j2"),
            template!("src/app/api/cart/clear/route.ts", when::backend, "backend/shop/cart-clear.route.ts.j2"),
            template!("src/app/api/orders/route.ts", when::backend, "backend/shop/orders.route.ts.j2"),
            template!("src/app/api/orders/[id]/route.ts", when::backend, "backend/shop/order.route.ts.j2"),
            template!("src/app/api/shipping/route.ts", when::backend, "backend/shop/shipping.route.ts.j2"),
            template!("src/app/api/paymentintent/route.ts", when::backend, "backend/shop/paymentintent.route.ts.j2"),
            template!("src/app/api/webhooks/route.ts", when::backend, "backend/shop/webhooks.route.ts.j2"),
            template!("src/app/api/users/[id]/address/route.ts", when::backend, "backend/shop/addresses.route.ts.j2"),
            template!("src/app/api/users/[id]/address/default/route.ts", when::backend, "backend/shop/address-default.route.ts.j2"),
            template!("src/app/api/users/[id]/address/[addressId]/route.ts", when::backend, "backend/shop/address.route.ts.j2"),
            template!("src/app/api/users/[id]/address/[addressId]/default/route.ts", when::backend, "backend/shop/address-set-default.route.ts.j2"),
            template!("src/app/api/users/message/route.ts", when::backend, "backend/shop/messages.route.ts.j2"),
            template!("src/app/api/users/message/unread/route.ts", when::backend, "backend/shop/messages-unread.route.ts.j2"),
            template!("src/app/api/users/message/[id]/route.ts", when::backend, "backend/shop/message.route.ts.j2"),
            template!("src/app/api/users/message/[id]/reply/route.ts", when::backend, "backend/shop/message-reply.route.ts.j2"),
            template!("emails/OrderConfirmationEmail.tsx", when::backend, "backend/shop/OrderConfirmationEmail.tsx.j2"),
            template!("emails/MessageReplyEmail.tsx", when::backend, "backend/shop/MessageReplyEmail.tsx.j2"),
        ])
    }

    pub fn entries(&self) -> &[TemplateDescriptor] {
        &self.entries
    }

    /// Descriptors whose predicate accepts `config`, in catalog order.
    pub fn applicable<'a>(
        &'a self,
        config: &'a ProjectConfig,
    ) -> impl Iterator<Item = &'a TemplateDescriptor> + 'a {
        self.entries.iter().filter(move |entry| entry.is_applicable(config))
    }
}
