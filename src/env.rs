/// Parser configuration.
///
/// `deref()` is not part of the RFC 7950 leafref grammar. It is accepted by
/// default and can be turned off with [`Env::rfc7950`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Env {
    pub allow_deref: bool,
}

impl Env {
    pub fn standard() -> Self {
        Env { allow_deref: true }
    }

    pub fn rfc7950() -> Self {
        Env { allow_deref: false }
    }
}

impl Default for Env {
    fn default() -> Self {
        Env::standard()
    }
}
