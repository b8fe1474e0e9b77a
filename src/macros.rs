//! Utility macros for the front end.
//!
//! - `MK_TOKEN!` - Creates a Token instance

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$literal` - The token's literal text
/// * `$position` - Position of the token's first character
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), Position::new(0, 0));
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $literal:expr, $position:expr) => {
        Token {
            kind: $kind,
            literal: $literal,
            position: $position,
        }
    };
}
