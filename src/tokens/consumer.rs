//! Downstream readers of a token set.

use super::TokenSet;

/// Anything that reads a finished [`TokenSet`]: theme emitters, component
/// bindings, documentation previews.
///
/// Consumers only ever see a shared reference; a token set cannot be changed
/// after assembly.
pub trait TokenConsumer {
    type Output;

    fn consume(&mut self, tokens: &TokenSet) -> Self::Output;
}

impl<F, T> TokenConsumer for F
where
    F: FnMut(&TokenSet) -> T,
{
    type Output = T;

    fn consume(&mut self, tokens: &TokenSet) -> T {
        self(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::{ColorPaletteOptions, TypographyScaleOptions};
    use crate::tokens::{generate_tokens, TokenCategory};

    struct CategoryCounter {
        colours: usize,
        sizes: usize,
    }

    impl TokenConsumer for CategoryCounter {
        type Output = ();

        fn consume(&mut self, tokens: &TokenSet) {
            for token in tokens.iter() {
                match token.category {
                    TokenCategory::Color => self.colours += 1,
                    TokenCategory::Typography => self.sizes += 1,
                }
            }
        }
    }

    #[test]
    fn test_struct_consumer() {
        let tokens = generate_tokens(
            &ColorPaletteOptions::default(),
            &TypographyScaleOptions::default(),
        )
        .unwrap();

        let mut counter = CategoryCounter { colours: 0, sizes: 0 };
        counter.consume(&tokens);
        assert_eq!(counter.colours, 9);
        assert_eq!(counter.sizes, 8);
    }

    #[test]
    fn test_closure_consumer() {
        let tokens = generate_tokens(
            &ColorPaletteOptions::default(),
            &TypographyScaleOptions::default(),
        )
        .unwrap();

        let mut first_name = |set: &TokenSet| set.names().next().map(str::to_string);
        assert_eq!(first_name.consume(&tokens).as_deref(), Some("color-3b82f6-100"));
    }
}
