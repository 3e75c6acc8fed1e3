///
/// EnumList
///
/// Closed-vocabulary enums expose their full member set, mainly for
/// documentation payloads and exhaustiveness checks in tests.
///

pub trait EnumList: Copy + Sized + 'static {
    const ALL: &'static [Self];

    /// Every member of the vocabulary, in declaration order.
    #[must_use]
    fn list() -> &'static [Self] {
        Self::ALL
    }
}
