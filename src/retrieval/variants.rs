//! Login casing variants
//!
//! The enrollment endpoint matches logins case-sensitively and the stored
//! casing is not known up front, so lookups are repeated under every casing
//! a login is plausibly stored with.

/// Produces the logins to query for one requested identity.
pub trait VariantStrategy: Send + Sync {
    /// Distinct variants in query order; empty for a blank identity.
    fn variants(&self, identity: &str) -> Vec<String>;
}

impl<F> VariantStrategy for F
where
    F: Fn(&str) -> Vec<String> + Send + Sync,
{
    fn variants(&self, identity: &str) -> Vec<String> {
        self(identity)
    }
}

/// The casing convention observed in the backend: all lower-case, or a
/// capitalised name with an upper-case two-letter suffix.
#[derive(Debug, Clone, Copy, Default)]
pub struct CasingVariants;

impl VariantStrategy for CasingVariants {
    fn variants(&self, identity: &str) -> Vec<String> {
        login_variants(identity)
    }
}

/// `ivanova` → `["ivanova", "IvanoVA"]`, `ab` → `["ab", "AB"]`.
pub fn login_variants(identity: &str) -> Vec<String> {
    let login = identity.trim();
    if login.is_empty() {
        return Vec::new();
    }

    let lower = login.to_lowercase();
    let chars: Vec<char> = login.chars().collect();

    let mixed = match chars.as_slice() {
        [first, middle @ .., a, b] => {
            let mut out: String = first.to_uppercase().collect();
            out.extend(middle.iter().flat_map(|c| c.to_lowercase()));
            out.extend(a.to_uppercase());
            out.extend(b.to_uppercase());
            out
        }
        _ => login.to_uppercase(),
    };

    let mut variants = vec![lower];
    if !variants.contains(&mixed) {
        variants.push(mixed);
    }
    variants
}
